use super::direction::Direction;
use rand::Rng;
use ratatui::layout::{Rect, Size};

/// A coordinate on the grid.  Cells outside of the grid are representable so
/// that a snake whose head has just left the grid can be inspected.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Cell {
    pub(crate) x: i16,
    pub(crate) y: i16,
}

impl Cell {
    pub(crate) const fn new(x: i16, y: i16) -> Cell {
        Cell { x, y }
    }

    /// Return the cell adjacent to `self` in the given direction
    pub(crate) fn step(self, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        Cell {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl From<(i16, i16)> for Cell {
    fn from((x, y): (i16, i16)) -> Cell {
        Cell { x, y }
    }
}

/// A square grid of `cell_count` × `cell_count` cells with its origin at the
/// top-left corner
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    cell_count: i16,
}

impl Grid {
    pub(crate) fn new(cell_count: u16) -> Grid {
        Grid {
            cell_count: i16::try_from(cell_count).unwrap_or(i16::MAX),
        }
    }

    pub(crate) fn cell_count(self) -> u16 {
        self.cell_count.unsigned_abs()
    }

    /// Test whether `cell` lies within the grid
    pub(crate) fn contains(self, cell: Cell) -> bool {
        (0..self.cell_count).contains(&cell.x) && (0..self.cell_count).contains(&cell.y)
    }

    /// Iterate over every cell in the grid, row by row
    pub(crate) fn cells(self) -> impl Iterator<Item = Cell> {
        let n = self.cell_count;
        (0..n).flat_map(move |y| (0..n).map(move |x| Cell { x, y }))
    }

    /// Pick a cell of the grid uniformly at random
    pub(crate) fn random_cell<R: Rng>(self, rng: &mut R) -> Cell {
        Cell {
            x: rng.random_range(0..self.cell_count),
            y: rng.random_range(0..self.cell_count),
        }
    }
}

/// Mapping from grid cells to rectangles in screen space.  Lengths are in
/// whatever unit the screen uses (pixels for a window, columns & rows for a
/// terminal).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Geometry {
    /// Size of a single cell
    pub(crate) cell_size: Size,

    /// Distance from the edge of the screen area to the first cell, on every
    /// side
    pub(crate) offset: u16,
}

impl Geometry {
    /// Return the screen rectangle covered by `cell`, or `None` if the cell
    /// lies above or to the left of the screen origin
    pub(crate) fn cell_rect(self, cell: Cell) -> Option<Rect> {
        let x = u16::try_from(cell.x).ok()?;
        let y = u16::try_from(cell.y).ok()?;
        Some(Rect {
            x: self
                .offset
                .saturating_add(x.saturating_mul(self.cell_size.width)),
            y: self
                .offset
                .saturating_add(y.saturating_mul(self.cell_size.height)),
            width: self.cell_size.width,
            height: self.cell_size.height,
        })
    }

    /// Return the size of the screen area needed to show `grid` surrounded by
    /// the offset margin
    pub(crate) fn screen_size(self, grid: Grid) -> Size {
        let n = grid.cell_count();
        let margin = self.offset.saturating_mul(2);
        Size {
            width: margin.saturating_add(n.saturating_mul(self.cell_size.width)),
            height: margin.saturating_add(n.saturating_mul(self.cell_size.height)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use rstest::rstest;

    const PIXELS: Geometry = Geometry {
        cell_size: Size {
            width: 30,
            height: 30,
        },
        offset: 75,
    };

    #[rstest]
    #[case(Cell::new(0, 0), true)]
    #[case(Cell::new(24, 24), true)]
    #[case(Cell::new(6, 9), true)]
    #[case(Cell::new(25, 9), false)]
    #[case(Cell::new(-1, 9), false)]
    #[case(Cell::new(9, 25), false)]
    #[case(Cell::new(9, -1), false)]
    fn test_contains(#[case] cell: Cell, #[case] inside: bool) {
        assert_eq!(Grid::new(25).contains(cell), inside);
    }

    #[test]
    fn cells_cover_grid() {
        let grid = Grid::new(4);
        let cells = grid.cells().collect::<Vec<_>>();
        assert_eq!(cells.len(), 16);
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[1], Cell::new(1, 0));
        assert_eq!(cells[15], Cell::new(3, 3));
        assert!(cells.iter().all(|&c| grid.contains(c)));
    }

    #[test]
    fn random_cells_in_grid() {
        let grid = Grid::new(25);
        let mut rng = ChaCha12Rng::seed_from_u64(0x0123456789ABCDEF);
        for _ in 0..500 {
            assert!(grid.contains(grid.random_cell(&mut rng)));
        }
    }

    #[rstest]
    #[case(Cell::new(0, 0), Some(Rect::new(75, 75, 30, 30)))]
    #[case(Cell::new(6, 9), Some(Rect::new(255, 345, 30, 30)))]
    #[case(Cell::new(24, 24), Some(Rect::new(795, 795, 30, 30)))]
    #[case(Cell::new(-1, 0), None)]
    fn test_pixel_cell_rect(#[case] cell: Cell, #[case] rect: Option<Rect>) {
        assert_eq!(PIXELS.cell_rect(cell), rect);
    }

    #[test]
    fn pixel_window_size() {
        assert_eq!(PIXELS.screen_size(Grid::new(25)), Size::new(900, 900));
    }

    #[test]
    fn terminal_cell_rect() {
        let geometry = Geometry {
            cell_size: Size::new(2, 1),
            offset: 1,
        };
        assert_eq!(
            geometry.cell_rect(Cell::new(3, 4)),
            Some(Rect::new(7, 5, 2, 1))
        );
        assert_eq!(geometry.screen_size(Grid::new(25)), Size::new(52, 27));
    }

    #[test]
    fn step() {
        let cell = Cell::new(6, 9);
        assert_eq!(cell.step(Direction::North), Cell::new(6, 8));
        assert_eq!(cell.step(Direction::South), Cell::new(6, 10));
        assert_eq!(cell.step(Direction::East), Cell::new(7, 9));
        assert_eq!(cell.step(Direction::West), Cell::new(5, 9));
    }
}
