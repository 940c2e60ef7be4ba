use std::time::Duration;

use ratatui::style::Color;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Returns the cell the snake starts on (integer-halved on both axes).
    #[must_use]
    pub fn center(self) -> (i32, i32) {
        (i32::from(self.width / 2), i32::from(self.height / 2))
    }
}

/// Nominal window width the grid is derived from.
pub const WINDOW_WIDTH: u16 = 800;

/// Nominal window height the grid is derived from.
pub const WINDOW_HEIGHT: u16 = 600;

/// Size of one grid cell in window units.
pub const CELL_SIZE: u16 = 20;

/// Play-field size used by the binary.
pub const GRID: GridSize = GridSize {
    width: WINDOW_WIDTH / CELL_SIZE,
    height: WINDOW_HEIGHT / CELL_SIZE,
};

/// Game ticks (and frames) per second.
pub const FRAMES_PER_SECOND: u64 = 10;

/// Fixed frame duration; exactly one tick is advanced per frame.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(1000 / FRAMES_PER_SECOND);

/// Upper bound on rejection-sampling attempts before food spawning falls
/// back to the explicit free-cell list.
pub const MAX_SPAWN_ATTEMPTS: usize = 64;

/// Occupancy (percent of the grid covered by the snake) above which food
/// spawning samples the free-cell list directly.
pub const DENSE_OCCUPANCY_PERCENT: usize = 70;

/// Head cell, drawn apart from the body colour.
pub const COLOR_SNAKE_HEAD: Color = Color::Yellow;
/// Body cells behind the head.
pub const COLOR_SNAKE_BODY: Color = Color::Green;
/// Food cell.
pub const COLOR_FOOD: Color = Color::Red;
/// Background of empty board cells.
pub const COLOR_PLAY_BG: Color = Color::Black;
/// Board frame.
pub const COLOR_BORDER: Color = Color::DarkGray;
/// Score line and plain menu text.
pub const COLOR_SCORE: Color = Color::White;
/// Start-screen title.
pub const COLOR_TITLE: Color = Color::Green;
/// Start button fill.
pub const COLOR_BUTTON: Color = Color::Blue;
/// "GAME OVER" banner and size warning.
pub const COLOR_GAME_OVER: Color = Color::Red;
/// Key hints below banners.
pub const COLOR_HINT: Color = Color::Blue;

/// Glyph for the head cell.
pub const GLYPH_SNAKE_HEAD: &str = "█";
/// Glyph for body cells.
pub const GLYPH_SNAKE_BODY: &str = "▓";
/// Glyph for the food cell.
pub const GLYPH_FOOD: &str = "●";
