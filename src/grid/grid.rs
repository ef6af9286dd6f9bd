use thiserror::Error;

use crate::array::Array2D;
use crate::dims::Dims;
use crate::grid::cell::{Cell, CellWall};

use self::CellWall::*;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("invalid grid dimensions: {0:?}")]
    InvalidDimension(Dims),
}

/// Rectangular matrix of [`Cell`]s.
///
/// Walls between two cells are stored on both of them and only ever change
/// through [`Grid::remove_wall`], which updates both sides in one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2D<Cell>,
}

impl Grid {
    /// Fully walled grid of the given size.
    pub fn new(size: Dims) -> Result<Grid, GridError> {
        if !size.all_positive() {
            return Err(GridError::InvalidDimension(size));
        }

        Ok(Grid {
            cells: Array2D::new(Cell::new(), size.0 as usize, size.1 as usize),
        })
    }

    pub fn size(&self) -> Dims {
        self.cells.size()
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        let size = self.size();
        0 <= pos.0 && pos.0 < size.0 && 0 <= pos.1 && pos.1 < size.1
    }

    pub fn is_valid_neighbor(&self, cell: Dims, off: Dims) -> bool {
        off.abs_sum() == 1 && self.is_in_bounds(cell) && self.is_in_bounds(cell + off)
    }

    pub fn is_valid_wall(&self, cell: Dims, wall: CellWall) -> bool {
        self.is_valid_neighbor(cell, wall.to_coord())
    }

    /// Wall on `cell`'s side separating it from `cell2`, if they are adjacent.
    pub fn which_wall_between(cell: Dims, cell2: Dims) -> Option<CellWall> {
        match (cell.0 - cell2.0, cell.1 - cell2.1) {
            (-1, 0) => Some(Right),
            (1, 0) => Some(Left),
            (0, -1) => Some(Bottom),
            (0, 1) => Some(Top),
            _ => None,
        }
    }

    /// Adjacent position in the given direction, or `None` at the boundary.
    pub fn neighbor(&self, cell: Dims, wall: CellWall) -> Option<Dims> {
        let pos = cell + wall.to_coord();
        self.is_in_bounds(pos).then_some(pos)
    }

    pub fn neighbors(&self, cell: Dims) -> impl Iterator<Item = Dims> + use<'_> {
        CellWall::ALL
            .into_iter()
            .filter_map(move |wall| self.neighbor(cell, wall))
    }

    /// Removes the wall pair between `cell` and its neighbor in one update.
    /// No-op when the wall is not an interior wall.
    pub fn remove_wall(&mut self, cell: Dims, wall: CellWall) {
        if !self.is_valid_wall(cell, wall) {
            return;
        }

        self.cells[cell].remove_wall(wall);
        self.cells[cell + wall.to_coord()].remove_wall(wall.reverse_wall());
    }

    /// [`Grid::remove_wall`] with the wall computed from the two positions.
    pub fn remove_wall_between(&mut self, cell: Dims, cell2: Dims) {
        if let Some(wall) = Self::which_wall_between(cell, cell2) {
            self.remove_wall(cell, wall);
        }
    }

    /// One-sided boundary opening, used for the entrance and the exit.
    /// The far side of the wall is the maze's exterior.
    pub fn open_exterior(&mut self, cell: Dims, wall: CellWall) {
        debug_assert!(self.neighbor(cell, wall).is_none());

        if let Some(cell) = self.cells.get_mut(cell) {
            cell.remove_wall(wall);
        }
    }

    pub fn is_open(&self, cell: Dims, wall: CellWall) -> bool {
        self.cells.get(cell).is_some_and(|c| !c.has_wall(wall))
    }

    pub fn cell(&self, pos: Dims) -> Option<&Cell> {
        self.cells.get(pos)
    }
}
