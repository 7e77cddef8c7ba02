use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Rectangular grid of cells with dimensions fixed at construction.
///
/// The board carries no game rules; row insertion, matching, and collapse
/// all live in the engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    /// Creates an all-empty board. Either dimension may be zero.
    pub fn new(size: Coord2) -> Self {
        Self {
            cells: Array2::default(size.to_nd_index()),
        }
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.cells.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn cols(&self) -> Coord {
        self.size().1
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len().try_into().unwrap()
    }

    /// Checked entry point for coordinates coming from untrusted input.
    /// Direct indexing is reserved for callers that already validated.
    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn get(&self, coords: Coord2) -> Cell {
        self[coords]
    }

    pub fn set(&mut self, coords: Coord2, cell: Cell) {
        self[coords] = cell;
    }

    pub fn fill_row(&mut self, row: Coord, cell: Cell) {
        for col in 0..self.cols() {
            self[(row, col)] = cell;
        }
    }

    pub fn fill_col(&mut self, col: Coord, cell: Cell) {
        for row in 0..self.rows() {
            self[(row, col)] = cell;
        }
    }

    pub fn fill_all(&mut self, cell: Cell) {
        for slot in self.cells.iter_mut() {
            *slot = cell;
        }
    }

    pub fn is_row_empty(&self, row: Coord) -> bool {
        (0..self.cols()).all(|col| self[(row, col)].is_empty())
    }

    pub fn filled_count(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|cell| cell.is_filled())
            .count()
            .try_into()
            .unwrap()
    }

    pub(crate) fn iter_ray(&self, origin: Coord2, delta: (isize, isize)) -> RayIter {
        self.cells.iter_ray(origin, delta)
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, (row, col): Coord2) -> &Self::Output {
        &self.cells[(row as usize, col as usize)]
    }
}

impl IndexMut<Coord2> for Board {
    fn index_mut(&mut self, (row, col): Coord2) -> &mut Self::Output {
        &mut self.cells[(row as usize, col as usize)]
    }
}
