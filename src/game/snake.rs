use super::direction::Direction;
use super::grid::Cell;
use crate::consts;
use std::collections::VecDeque;

/// Snake state.  Snate.
///
/// The body is stored head first.  It always contains at least one cell.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The positions of all of the cells in the snake, with the head at the
    /// front and the tip of the tail at the back
    pub(super) body: VecDeque<Cell>,

    /// The direction in which the snake is currently facing
    pub(super) direction: Direction,

    /// Whether the next call to [`Snake::advance()`] should leave the tail in
    /// place
    pub(super) growing: bool,
}

impl Snake {
    /// Create a new snake at the starting position, facing east
    pub(super) fn new() -> Snake {
        Snake {
            body: consts::INITIAL_SNAKE.into_iter().map(Cell::from).collect(),
            direction: Direction::East,
            growing: false,
        }
    }

    /// Put the snake back at its starting position & heading
    pub(super) fn reset(&mut self) {
        *self = Snake::new();
    }

    /// Return the position of the snake's head
    pub(super) fn head(&self) -> Cell {
        // The body is never empty, but don't panic if it somehow is.
        self.body.front().copied().unwrap_or(Cell::new(0, 0))
    }

    /// Return the positions of all of the snake's cells, head first
    pub(super) fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    /// Iterate over the snake's cells other than the head
    pub(super) fn tail(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().skip(1).copied()
    }

    pub(super) fn len(&self) -> usize {
        self.body.len()
    }

    pub(super) fn direction(&self) -> Direction {
        self.direction
    }

    /// Change the snake's direction to `direction`, unless that would make it
    /// turn back on itself.  Returns `true` if the new direction was
    /// accepted.
    pub(super) fn turn(&mut self, direction: Direction) -> bool {
        if direction == self.direction.reverse() {
            false
        } else {
            self.direction = direction;
            true
        }
    }

    /// Move the snake forwards one cell in the current direction.  The new
    /// head may lie outside of the grid; it is up to the caller to check.
    pub(super) fn advance(&mut self) {
        let new_head = self.head().step(self.direction);
        self.body.push_front(new_head);
        if self.growing {
            self.growing = false;
        } else {
            let _ = self.body.pop_back();
        }
    }

    /// Make the next advance extend the snake by one cell
    pub(super) fn grow(&mut self) {
        self.growing = true;
    }
}
