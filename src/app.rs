use std::thread;
use std::time::Instant;

use log::{debug, info, warn};

use crate::config::{FRAME_INTERVAL, GridSize};
use crate::error::Result;
use crate::game::{GameState, RenderModel};
use crate::input::{GameInput, InputHandler};
use crate::renderer;
use crate::terminal_runtime::TerminalSession;

/// Start-up options for one process run.
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    pub bounds: GridSize,
    /// Fixed RNG seed for food placement; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

/// Runs the game until the player quits.
///
/// Each frame drains pending input, advances exactly one tick, draws the
/// resulting snapshot and sleeps out the rest of the frame. Ticks are held
/// while the last frame could not fit the whole board on screen.
pub fn run(options: RunOptions) -> Result<()> {
    let mut state = match options.seed {
        Some(seed) => GameState::new_with_seed(options.bounds, seed),
        None => GameState::new(options.bounds),
    };
    info!(
        "starting on a {}x{} grid (seed: {:?})",
        options.bounds.width, options.bounds.height, options.seed
    );

    let mut session = TerminalSession::enter()?;
    let mut input = InputHandler::new();
    let mut last_phase = state.phase;
    let mut board_visible = true;

    loop {
        let frame_start = Instant::now();

        let inputs = input.drain()?;
        let Some(model) = step_frame(&mut state, inputs, board_visible) else {
            break;
        };

        if model.phase != last_phase {
            debug!("phase {last_phase:?} -> {:?}", model.phase);
            last_phase = model.phase;
        }

        let mut layout = renderer::RenderedLayout::default();
        session
            .terminal_mut()
            .draw(|frame| layout = renderer::render(frame, &model))?;
        input.set_start_button(layout.start_button);

        if layout.board_hidden == board_visible {
            warn!(
                "board {} on screen",
                if layout.board_hidden { "no longer fits" } else { "fits again" }
            );
            board_visible = !layout.board_hidden;
        }

        thread::sleep(FRAME_INTERVAL.saturating_sub(frame_start.elapsed()));
    }

    info!("quit with score {}", state.score);
    Ok(())
}

/// Applies one frame's inputs, then advances one tick when the board is
/// visible.
///
/// Returns `None` once a quit was requested; the tick is skipped in that
/// case.
pub fn step_frame(
    state: &mut GameState,
    inputs: impl IntoIterator<Item = GameInput>,
    board_visible: bool,
) -> Option<RenderModel> {
    for input in inputs {
        state.apply_input(input);
    }

    if state.quit_requested() {
        return None;
    }

    if board_visible {
        state.advance_tick();
    }

    Some(state.describe_for_render())
}
