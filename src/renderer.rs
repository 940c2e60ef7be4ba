use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{
    COLOR_BORDER, COLOR_FOOD, COLOR_PLAY_BG, COLOR_SNAKE_BODY, COLOR_SNAKE_HEAD, GLYPH_FOOD,
    GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD, GridSize,
};
use crate::game::{GamePhase, RenderModel, SegmentKind};
use crate::snake::Position;
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_size_notice, render_start_menu};

/// Screen regions produced by one render pass that input handling needs.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct RenderedLayout {
    /// Where the Start button was drawn; `None` outside the start screen.
    pub start_button: Option<Rect>,
    /// The terminal is too small for the whole board plus HUD.
    pub board_hidden: bool,
}

/// Terminal size (columns, rows) needed to show every grid cell: the board,
/// its border and the HUD row.
#[must_use]
pub fn required_size(bounds: GridSize) -> (u16, u16) {
    (
        bounds.width.saturating_add(2),
        bounds.height.saturating_add(3),
    )
}

/// Renders the full frame from a read-only snapshot.
pub fn render(frame: &mut Frame<'_>, model: &RenderModel) -> RenderedLayout {
    let area = frame.area();
    let (min_width, min_height) = required_size(model.bounds);
    let board_hidden = area.width < min_width || area.height < min_height;

    if model.phase == GamePhase::StartScreen {
        let start_button = render_start_menu(frame, area);
        return RenderedLayout {
            start_button: Some(start_button),
            board_hidden,
        };
    }

    if board_hidden {
        render_size_notice(frame, area, (min_width, min_height));
        return RenderedLayout {
            start_button: None,
            board_hidden,
        };
    }

    let below_hud = render_hud(frame, area, model);
    let play_area = board_area(below_hud, model.bounds);

    let block = Block::bordered()
        .border_style(Style::new().fg(COLOR_BORDER))
        .style(Style::new().bg(COLOR_PLAY_BG));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_food(frame, inner, model);
    render_snake(frame, inner, model);

    if model.phase == GamePhase::GameOver {
        render_game_over_menu(frame, area, model.score, model.death_reason);
    }

    RenderedLayout::default()
}

/// Centers a bordered board of one terminal cell per grid cell.
fn board_area(area: Rect, bounds: GridSize) -> Rect {
    let [_, column, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(bounds.width.saturating_add(2)),
        Constraint::Fill(1),
    ])
    .areas(area);

    let [_, board, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(bounds.height.saturating_add(2)),
        Constraint::Fill(1),
    ])
    .areas(column);

    board
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, model: &RenderModel) {
    let Some(food) = model.food else {
        return;
    };
    let Some((x, y)) = logical_to_terminal(inner, model.bounds, food) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FOOD, Style::new().fg(COLOR_FOOD));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, model: &RenderModel) {
    let buffer = frame.buffer_mut();

    for (segment, kind) in &model.segments {
        let Some((x, y)) = logical_to_terminal(inner, model.bounds, *segment) else {
            continue;
        };

        match kind {
            SegmentKind::Head => buffer.set_string(
                x,
                y,
                GLYPH_SNAKE_HEAD,
                Style::new()
                    .fg(COLOR_SNAKE_HEAD)
                    .add_modifier(Modifier::BOLD),
            ),
            SegmentKind::Body => buffer.set_string(
                x,
                y,
                GLYPH_SNAKE_BODY,
                Style::new().fg(COLOR_SNAKE_BODY),
            ),
        }
    }
}

fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
