use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use log::trace;
use ratatui::layout::Rect;

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// High-level input events consumed by the game state machine.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    /// Activation of the start-screen Start button.
    Start,
    Restart,
    /// Quit key, honoured on the game-over screen.
    Quit,
    /// Closes the game from any screen (Esc or Ctrl-C).
    Close,
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// Translates terminal events into [`GameInput`]s.
#[derive(Debug, Default)]
pub struct InputHandler {
    start_button: Option<Rect>,
}

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records where the Start button was drawn last frame, if at all.
    pub fn set_start_button(&mut self, area: Option<Rect>) {
        self.start_button = area;
    }

    /// Reads every event already queued, without blocking.
    pub fn drain(&self) -> io::Result<Vec<GameInput>> {
        let mut inputs = Vec::new();
        while event::poll(Duration::ZERO)? {
            let event = event::read()?;
            trace!("terminal event: {event:?}");
            if let Some(input) = self.map_event(&event) {
                inputs.push(input);
            }
        }
        Ok(inputs)
    }

    /// Maps one raw terminal event.
    #[must_use]
    pub fn map_event(&self, event: &Event) -> Option<GameInput> {
        match event {
            Event::Key(key) => map_key(key),
            Event::Mouse(mouse) => self.map_mouse(mouse),
            _ => None,
        }
    }

    fn map_mouse(&self, mouse: &MouseEvent) -> Option<GameInput> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }

        let button = self.start_button?;
        let inside = mouse.column >= button.x
            && mouse.column < button.right()
            && mouse.row >= button.y
            && mouse.row < button.bottom();

        inside.then_some(GameInput::Start)
    }
}

fn map_key(key: &KeyEvent) -> Option<GameInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(GameInput::Close);
    }

    let input = match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => GameInput::Direction(Direction::Up),
        KeyCode::Down | KeyCode::Char('s' | 'S') => GameInput::Direction(Direction::Down),
        KeyCode::Left | KeyCode::Char('a' | 'A') => GameInput::Direction(Direction::Left),
        KeyCode::Right | KeyCode::Char('d' | 'D') => GameInput::Direction(Direction::Right),
        KeyCode::Enter | KeyCode::Char(' ') => GameInput::Start,
        KeyCode::Char('r' | 'R') => GameInput::Restart,
        KeyCode::Char('q' | 'Q') => GameInput::Quit,
        KeyCode::Esc => GameInput::Close,
        _ => return None,
    };

    Some(input)
}
