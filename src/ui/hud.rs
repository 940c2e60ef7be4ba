use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::COLOR_SCORE;
use crate::game::RenderModel;

/// Renders the score line above the board and returns the remaining area.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, model: &RenderModel) -> Rect {
    let [score_row, play_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    frame.render_widget(
        Paragraph::new(score_line(model.score)).alignment(Alignment::Left),
        score_row,
    );

    play_area
}

fn score_line(score: u32) -> Line<'static> {
    Line::from(vec![
        Span::styled("Score: ", Style::default().fg(COLOR_SCORE)),
        Span::styled(
            score.to_string(),
            Style::default()
                .fg(COLOR_SCORE)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}
