use rand::Rng;

use crate::config::{DENSE_OCCUPANCY_PERCENT, GridSize, MAX_SPAWN_ATTEMPTS};
use crate::snake::{Position, Snake};

/// Picks a uniformly random cell not occupied by the snake.
///
/// Sparse boards use rejection sampling. Once the snake covers more than
/// [`DENSE_OCCUPANCY_PERCENT`] of the grid, or sampling misses
/// [`MAX_SPAWN_ATTEMPTS`] times in a row, the choice is made from the
/// explicit free-cell list instead. Returns `None` only when the snake
/// covers every cell.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
) -> Option<Position> {
    let total = bounds.total_cells();
    if total == 0 {
        return None;
    }

    if snake.len() * 100 <= total * DENSE_OCCUPANCY_PERCENT {
        for _ in 0..MAX_SPAWN_ATTEMPTS {
            let candidate = random_cell(rng, bounds);
            if !snake.contains(candidate) {
                return Some(candidate);
            }
        }
    }

    let free = free_cells(bounds, snake);
    if free.is_empty() {
        return None;
    }

    Some(free[rng.gen_range(0..free.len())])
}

fn random_cell<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Position {
    Position {
        x: rng.gen_range(0..i32::from(bounds.width)),
        y: rng.gen_range(0..i32::from(bounds.height)),
    }
}

fn free_cells(bounds: GridSize, snake: &Snake) -> Vec<Position> {
    let mut cells = Vec::with_capacity(bounds.total_cells().saturating_sub(snake.len()));

    for y in 0..i32::from(bounds.height) {
        for x in 0..i32::from(bounds.width) {
            let position = Position { x, y };
            if !snake.contains(position) {
                cells.push(position);
            }
        }
    }

    cells
}
