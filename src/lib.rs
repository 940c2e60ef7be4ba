//! Grid-based arcade Snake for the terminal.
//!
//! [`game::GameState`] is the whole game: it owns the snake, the food and
//! the phase, and is driven one frame at a time by [`app::run`].

pub mod app;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
