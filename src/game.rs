use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::GridSize;
use crate::food::spawn_position;
use crate::input::{Direction, GameInput, direction_change_is_valid};
use crate::snake::{Position, Snake};

/// Current high-level gameplay phase.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GamePhase {
    StartScreen,
    Playing,
    GameOver,
}

/// Why the last game ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// How a snake segment should be drawn.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SegmentKind {
    Head,
    Body,
}

/// Read-only snapshot of everything the renderer needs for one frame.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RenderModel {
    pub phase: GamePhase,
    pub bounds: GridSize,
    /// Head first, then body segments towards the tail.
    pub segments: Vec<(Position, SegmentKind)>,
    pub food: Option<Position>,
    pub score: u32,
    pub death_reason: Option<DeathReason>,
}

/// Complete mutable game state for the process lifetime.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub direction: Direction,
    /// `None` only once the snake covers every cell.
    pub food: Option<Position>,
    pub score: u32,
    pub phase: GamePhase,
    pub death_reason: Option<DeathReason>,
    bounds: GridSize,
    quit_requested: bool,
    rng: StdRng,
}

impl GameState {
    /// Creates a state whose food placement is seeded from OS entropy.
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        Self::with_rng(bounds, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Self {
        Self::with_rng(bounds, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bounds: GridSize, rng: StdRng) -> Self {
        let (x, y) = bounds.center();
        let mut state = Self {
            snake: Snake::new(Position { x, y }),
            direction: Direction::Right,
            food: None,
            score: 0,
            phase: GamePhase::StartScreen,
            death_reason: None,
            bounds,
            quit_requested: false,
            rng,
        };
        state.reset();
        state
    }

    /// Returns the logical grid dimensions.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// True once the player asked to quit. Never cleared.
    #[must_use]
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Puts a fresh one-cell snake at the grid center and returns to the
    /// start screen.
    pub fn reset(&mut self) {
        let (x, y) = self.bounds.center();
        self.snake = Snake::new(Position { x, y });
        self.direction = Direction::Right;
        self.food = spawn_position(&mut self.rng, self.bounds, &self.snake);
        self.score = 0;
        self.phase = GamePhase::StartScreen;
        self.death_reason = None;

        debug!("reset: snake at ({x}, {y}), food at {:?}", self.food);
    }

    /// Applies one input event. Combinations with no meaning in the current
    /// phase are ignored.
    pub fn apply_input(&mut self, input: GameInput) {
        match (self.phase, input) {
            (_, GameInput::Close) | (GamePhase::GameOver, GameInput::Quit) => {
                info!("quit requested from {:?}", self.phase);
                self.quit_requested = true;
            }
            (GamePhase::StartScreen, GameInput::Start) => {
                info!("game started");
                self.phase = GamePhase::Playing;
            }
            (GamePhase::GameOver, GameInput::Restart) => {
                info!("restart after scoring {}", self.score);
                self.reset();
            }
            (GamePhase::Playing, GameInput::Direction(direction)) => {
                if direction_change_is_valid(self.direction, direction) {
                    self.direction = direction;
                }
            }
            (
                GamePhase::StartScreen | GamePhase::Playing | GamePhase::GameOver,
                GameInput::Direction(_) | GameInput::Start | GameInput::Restart | GameInput::Quit,
            ) => {}
        }
    }

    /// Advances simulation by one gameplay tick.
    ///
    /// The collision check runs before the tail is released, so moving into
    /// the cell the tail is about to leave counts as a self collision.
    pub fn advance_tick(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }

        let new_head = self.snake.next_head(self.direction);

        if !new_head.is_within_bounds(self.bounds) {
            self.end_game(DeathReason::WallCollision);
            return;
        }

        if self.snake.contains(new_head) {
            self.end_game(DeathReason::SelfCollision);
            return;
        }

        let ate_food = self.food == Some(new_head);
        self.snake.grow_or_slide(new_head, ate_food);

        if ate_food {
            self.score += 1;
            self.food = spawn_position(&mut self.rng, self.bounds, &self.snake);
            debug!(
                "food eaten: score {}, length {}, next food {:?}",
                self.score,
                self.snake.len(),
                self.food
            );
        }
    }

    /// Builds the render snapshot for the current frame.
    #[must_use]
    pub fn describe_for_render(&self) -> RenderModel {
        let segments = self
            .snake
            .segments()
            .enumerate()
            .map(|(index, position)| {
                let kind = if index == 0 {
                    SegmentKind::Head
                } else {
                    SegmentKind::Body
                };
                (*position, kind)
            })
            .collect();

        RenderModel {
            phase: self.phase,
            bounds: self.bounds,
            segments,
            food: self.food,
            score: self.score,
            death_reason: self.death_reason,
        }
    }

    fn end_game(&mut self, reason: DeathReason) {
        info!(
            "game over: {reason:?} at score {}, length {}",
            self.score,
            self.snake.len()
        );
        self.phase = GamePhase::GameOver;
        self.death_reason = Some(reason);
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::input::{Direction, GameInput};
    use crate::snake::{Position, Snake};

    use super::{DeathReason, GamePhase, GameState, SegmentKind};

    const BOUNDS: GridSize = GridSize {
        width: 10,
        height: 10,
    };

    fn playing(seed: u64) -> GameState {
        let mut state = GameState::new_with_seed(BOUNDS, seed);
        state.apply_input(GameInput::Start);
        state
    }

    #[test]
    fn new_state_waits_on_start_screen() {
        let state = GameState::new_with_seed(BOUNDS, 1);

        assert_eq!(state.phase, GamePhase::StartScreen);
        assert_eq!(state.snake.head(), Position { x: 5, y: 5 });
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.direction, Direction::Right);
        assert_eq!(state.score, 0);
        let food = state.food.expect("empty board has room for food");
        assert!(!state.snake.contains(food));
    }

    #[test]
    fn ticks_do_nothing_outside_playing() {
        let mut state = GameState::new_with_seed(BOUNDS, 2);
        state.advance_tick();
        assert_eq!(state.snake.head(), Position { x: 5, y: 5 });

        state.phase = GamePhase::GameOver;
        state.advance_tick();
        assert_eq!(state.snake.head(), Position { x: 5, y: 5 });
    }

    #[test]
    fn start_only_applies_on_start_screen() {
        let mut state = playing(3);
        assert_eq!(state.phase, GamePhase::Playing);

        state.phase = GamePhase::GameOver;
        state.apply_input(GameInput::Start);
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn reversal_is_rejected() {
        for direction in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            let mut state = playing(4);
            state.direction = direction;

            state.apply_input(GameInput::Direction(direction.opposite()));

            assert_eq!(state.direction, direction);
        }
    }

    #[test]
    fn turn_then_its_reverse_keeps_the_turn() {
        let mut state = playing(5);

        state.apply_input(GameInput::Direction(Direction::Up));
        state.apply_input(GameInput::Direction(Direction::Down));

        assert_eq!(state.direction, Direction::Up);
    }

    #[test]
    fn directions_are_ignored_outside_playing() {
        let mut state = GameState::new_with_seed(BOUNDS, 6);

        state.apply_input(GameInput::Direction(Direction::Up));

        assert_eq!(state.direction, Direction::Right);
    }

    #[test]
    fn snake_grows_after_eating_food() {
        let mut state = playing(7);
        state.snake = Snake::new(Position { x: 1, y: 1 });
        state.food = Some(Position { x: 3, y: 1 });

        state.advance_tick();
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.score, 0);

        state.advance_tick();
        assert_eq!(state.snake.len(), 2);
        assert_eq!(state.score, 1);
        let food = state.food.expect("board still has room");
        assert!(!state.snake.contains(food));
    }

    #[test]
    fn wall_collision_on_every_edge() {
        let cases = [
            (Position { x: 9, y: 4 }, Direction::Right),
            (Position { x: 0, y: 4 }, Direction::Left),
            (Position { x: 4, y: 0 }, Direction::Up),
            (Position { x: 4, y: 9 }, Direction::Down),
        ];

        for (start, direction) in cases {
            let mut state = playing(8);
            state.snake = Snake::new(start);
            state.direction = direction;

            state.advance_tick();

            assert_eq!(state.phase, GamePhase::GameOver);
            assert_eq!(state.death_reason, Some(DeathReason::WallCollision));
            assert_eq!(state.snake.head(), start);
        }
    }

    #[test]
    fn self_collision_sets_game_over() {
        let mut state = playing(9);
        state.snake = Snake::from_segments(vec![
            Position { x: 2, y: 2 },
            Position { x: 1, y: 2 },
            Position { x: 1, y: 3 },
            Position { x: 2, y: 3 },
            Position { x: 3, y: 3 },
            Position { x: 3, y: 2 },
        ]);
        state.direction = Direction::Down;

        state.advance_tick();

        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.death_reason, Some(DeathReason::SelfCollision));
    }

    #[test]
    fn moving_into_vacating_tail_still_collides() {
        let mut state = playing(10);
        // 2x2 loop: head at (2,2) moving Down lands on the tail at (2,3).
        state.snake = Snake::from_segments(vec![
            Position { x: 2, y: 2 },
            Position { x: 3, y: 2 },
            Position { x: 3, y: 3 },
            Position { x: 2, y: 3 },
        ]);
        state.direction = Direction::Down;
        state.food = Some(Position { x: 8, y: 8 });

        state.advance_tick();

        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.death_reason, Some(DeathReason::SelfCollision));
        assert_eq!(state.snake.len(), 4);
    }

    #[test]
    fn restart_returns_to_start_screen() {
        let mut state = playing(11);
        state.snake = Snake::new(Position { x: 9, y: 0 });
        state.score = 4;
        state.advance_tick();
        assert_eq!(state.phase, GamePhase::GameOver);

        state.apply_input(GameInput::Restart);

        assert_eq!(state.phase, GamePhase::StartScreen);
        assert_eq!(state.score, 0);
        assert_eq!(state.snake.head(), Position { x: 5, y: 5 });
        assert_eq!(state.direction, Direction::Right);
        assert_eq!(state.death_reason, None);
    }

    #[test]
    fn restart_is_ignored_while_playing() {
        let mut state = playing(12);
        state.score = 3;

        state.apply_input(GameInput::Restart);

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 3);
    }

    #[test]
    fn quit_sets_flag_on_game_over() {
        let mut state = GameState::new_with_seed(BOUNDS, 13);
        assert!(!state.quit_requested());

        state.phase = GamePhase::GameOver;
        state.apply_input(GameInput::Quit);
        assert!(state.quit_requested());

        state.reset();
        assert!(state.quit_requested());
    }

    #[test]
    fn quit_key_is_ignored_mid_game() {
        let mut state = playing(16);

        state.apply_input(GameInput::Quit);
        assert!(!state.quit_requested());
        assert_eq!(state.phase, GamePhase::Playing);

        state.phase = GamePhase::StartScreen;
        state.apply_input(GameInput::Quit);
        assert!(!state.quit_requested());
    }

    #[test]
    fn close_sets_flag_in_any_phase() {
        for phase in [
            GamePhase::StartScreen,
            GamePhase::Playing,
            GamePhase::GameOver,
        ] {
            let mut state = GameState::new_with_seed(BOUNDS, 17);
            state.phase = phase;

            state.apply_input(GameInput::Close);

            assert!(state.quit_requested());
        }
    }

    #[test]
    fn reset_twice_matches_reset_once() {
        let mut state = playing(14);
        state.score = 9;
        state.snake = Snake::from_segments(vec![Position { x: 1, y: 1 }, Position { x: 0, y: 1 }]);

        state.reset();
        let once = state.describe_for_render();
        state.reset();
        let twice = state.describe_for_render();

        assert_eq!(once.phase, twice.phase);
        assert_eq!(once.score, twice.score);
        assert_eq!(once.segments, twice.segments);
        assert_eq!(once.death_reason, twice.death_reason);
        assert_eq!(state.direction, Direction::Right);
    }

    #[test]
    fn render_model_flags_head() {
        let mut state = playing(15);
        state.snake = Snake::from_segments(vec![
            Position { x: 4, y: 4 },
            Position { x: 3, y: 4 },
            Position { x: 2, y: 4 },
        ]);
        state.score = 2;

        let model = state.describe_for_render();

        assert_eq!(model.phase, GamePhase::Playing);
        assert_eq!(model.score, 2);
        assert_eq!(model.segments[0], (Position { x: 4, y: 4 }, SegmentKind::Head));
        assert!(
            model.segments[1..]
                .iter()
                .all(|(_, kind)| *kind == SegmentKind::Body)
        );
        assert_eq!(model.food, state.food);
    }
}
