use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::Direction;

/// Grid position in logical cell coordinates.
///
/// Coordinates are signed so a head that has just left the grid
/// (for example `x == -1`) is still representable before the bounds check.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns the neighbouring cell one step in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self {
                x: self.x,
                y: self.y - 1,
            },
            Direction::Down => Self {
                x: self.x,
                y: self.y + 1,
            },
            Direction::Left => Self {
                x: self.x - 1,
                y: self.y,
            },
            Direction::Right => Self {
                x: self.x + 1,
                y: self.y,
            },
        }
    }
}

/// Snake body, head first.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Creates a one-cell snake at `start`.
    #[must_use]
    pub fn new(start: Position) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);

        Self { body }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// # Panics
    ///
    /// Panics when `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>) -> Self {
        assert!(!segments.is_empty(), "snake needs at least one segment");

        Self {
            body: VecDeque::from(segments),
        }
    }

    /// Returns the head position one step in `direction`, unclamped.
    #[must_use]
    pub fn next_head(&self, direction: Direction) -> Position {
        self.head().step(direction)
    }

    /// Inserts `new_head` and drops the tail unless the snake just ate.
    pub fn grow_or_slide(&mut self, new_head: Position, ate_food: bool) {
        self.body.push_front(new_head);
        if !ate_food {
            let _ = self.body.pop_back();
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        // `new`/`from_segments` guarantee one segment and `grow_or_slide`
        // pushes before it pops.
        self.body[0]
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments (never for a constructed snake).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::input::Direction;

    use super::{Position, Snake};

    #[test]
    fn bounds_check_covers_all_edges() {
        let bounds = GridSize {
            width: 10,
            height: 8,
        };

        assert!(Position { x: 0, y: 0 }.is_within_bounds(bounds));
        assert!(Position { x: 9, y: 7 }.is_within_bounds(bounds));
        assert!(!Position { x: -1, y: 3 }.is_within_bounds(bounds));
        assert!(!Position { x: 10, y: 3 }.is_within_bounds(bounds));
        assert!(!Position { x: 4, y: -1 }.is_within_bounds(bounds));
        assert!(!Position { x: 4, y: 8 }.is_within_bounds(bounds));
    }

    #[test]
    fn next_head_is_not_clamped() {
        let snake = Snake::new(Position { x: 0, y: 0 });

        assert_eq!(snake.next_head(Direction::Left), Position { x: -1, y: 0 });
        assert_eq!(snake.next_head(Direction::Up), Position { x: 0, y: -1 });
        assert_eq!(snake.next_head(Direction::Right), Position { x: 1, y: 0 });
        assert_eq!(snake.next_head(Direction::Down), Position { x: 0, y: 1 });
    }

    #[test]
    fn sliding_keeps_length() {
        let mut snake = Snake::new(Position { x: 5, y: 5 });

        let next = snake.next_head(Direction::Right);
        snake.grow_or_slide(next, false);

        assert_eq!(snake.head(), Position { x: 6, y: 5 });
        assert_eq!(snake.len(), 1);
        assert!(!snake.contains(Position { x: 5, y: 5 }));
    }

    #[test]
    fn growth_keeps_previous_tail() {
        let mut snake = Snake::new(Position { x: 5, y: 5 });

        let next = snake.next_head(Direction::Right);
        snake.grow_or_slide(next, true);

        assert_eq!(snake.len(), 2);
        let segments: Vec<Position> = snake.segments().copied().collect();
        assert_eq!(
            segments,
            vec![Position { x: 6, y: 5 }, Position { x: 5, y: 5 }]
        );
    }

    #[test]
    fn contains_checks_every_segment() {
        let snake = Snake::from_segments(vec![
            Position { x: 2, y: 2 },
            Position { x: 1, y: 2 },
            Position { x: 0, y: 2 },
        ]);

        assert!(snake.contains(Position { x: 2, y: 2 }));
        assert!(snake.contains(Position { x: 0, y: 2 }));
        assert!(!snake.contains(Position { x: 3, y: 2 }));
    }
}
