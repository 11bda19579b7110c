use super::grid::{Cell, Grid};
use crate::consts;
use log::warn;
use rand::{seq::IteratorRandom, Rng};
use std::collections::VecDeque;

/// The food item on the grid
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Food {
    pub(super) position: Cell,
}

impl Food {
    /// Place a new food item at a random cell of `grid` not in `excluded`
    pub(super) fn new<R: Rng>(grid: Grid, excluded: &VecDeque<Cell>, rng: &mut R) -> Food {
        let mut food = Food {
            position: Cell::new(0, 0),
        };
        if !food.resample(grid, excluded, rng) {
            warn!("No free cell for the initial food; leaving it at the origin");
        }
        food
    }

    pub(super) fn position(&self) -> Cell {
        self.position
    }

    /// Move the food to a cell of `grid` chosen uniformly at random from those
    /// not in `excluded`.
    ///
    /// Cells are first drawn from the whole grid until one is free.  If that
    /// takes more than [`MAX_FOOD_ATTEMPTS`][consts::MAX_FOOD_ATTEMPTS] draws,
    /// the free cells are enumerated and one of them is picked instead.  If
    /// there are no free cells at all, the food is left where it is and
    /// `false` is returned.
    pub(super) fn resample<R: Rng>(
        &mut self,
        grid: Grid,
        excluded: &VecDeque<Cell>,
        rng: &mut R,
    ) -> bool {
        for _ in 0..consts::MAX_FOOD_ATTEMPTS {
            let cell = grid.random_cell(rng);
            if !excluded.contains(&cell) {
                self.position = cell;
                return true;
            }
        }
        warn!(
            "Failed to place food after {} random draws; choosing among free cells",
            consts::MAX_FOOD_ATTEMPTS
        );
        match grid.cells().filter(|c| !excluded.contains(c)).choose(rng) {
            Some(cell) => {
                self.position = cell;
                true
            }
            None => {
                warn!("Grid is full; food stays at {:?}", self.position);
                false
            }
        }
    }
}
