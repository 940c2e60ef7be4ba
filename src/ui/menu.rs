use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::config::{COLOR_BUTTON, COLOR_GAME_OVER, COLOR_HINT, COLOR_SCORE, COLOR_TITLE};
use crate::game::DeathReason;

const START_BUTTON_WIDTH: u16 = 16;
const START_BUTTON_HEIGHT: u16 = 3;

/// Draws the start screen and returns the area of the clickable Start button.
pub fn render_start_menu(frame: &mut Frame<'_>, area: Rect) -> Rect {
    frame.render_widget(Clear, area);

    let [_, title_row, hint_row, click_row, _, button_row, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(START_BUTTON_HEIGHT),
        Constraint::Fill(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Line::from("SNAKE"))
            .alignment(Alignment::Center)
            .style(Style::default().fg(COLOR_TITLE).add_modifier(Modifier::BOLD)),
        title_row,
    );
    frame.render_widget(
        Paragraph::new(Line::from("Use W/A/S/D or Arrow keys to move."))
            .alignment(Alignment::Center)
            .style(Style::default().fg(COLOR_SCORE)),
        hint_row,
    );
    frame.render_widget(
        Paragraph::new(Line::from("Click Start to begin!"))
            .alignment(Alignment::Center)
            .style(Style::default().fg(COLOR_SCORE)),
        click_row,
    );

    let button = centered_width(button_row, START_BUTTON_WIDTH);
    frame.render_widget(
        Paragraph::new(Line::from("Start"))
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(COLOR_SCORE)
                    .bg(COLOR_BUTTON)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::bordered()
                    .border_style(Style::default().fg(COLOR_SCORE).bg(COLOR_BUTTON)),
            ),
        button,
    );

    button
}

/// Draws the game-over screen as a centered popup over the frame.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    death_reason: Option<DeathReason>,
) {
    let popup = centered_popup(area, 70, 40);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("GAME OVER").style(
            Style::default()
                .fg(COLOR_GAME_OVER)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(format!("Final Score: {score}")),
        Line::from(match death_reason {
            Some(DeathReason::WallCollision) => "Cause: hit wall",
            Some(DeathReason::SelfCollision) => "Cause: hit yourself",
            None => "",
        }),
        Line::from(""),
        Line::from("Press R to Restart or Q to Quit").style(Style::default().fg(COLOR_HINT)),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" game over ")),
        popup,
    );
}

/// Replaces the board when the terminal cannot show every grid cell.
pub fn render_size_notice(frame: &mut Frame<'_>, area: Rect, needed: (u16, u16)) {
    frame.render_widget(Clear, area);

    let [_, text_row, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Fill(1),
    ])
    .areas(area);

    let lines = vec![
        Line::from("Terminal too small").style(
            Style::default()
                .fg(COLOR_GAME_OVER)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(format!(
            "need {}x{}, have {}x{}",
            needed.0, needed.1, area.width, area.height
        )),
        Line::from("Resize to continue").style(Style::default().fg(COLOR_HINT)),
    ];

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        text_row,
    );
}

fn centered_width(area: Rect, width: u16) -> Rect {
    let [_, center, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .areas(area);

    center
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}
