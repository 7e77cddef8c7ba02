use core::num::Saturating;

use crate::*;

/// Capability set shared by cell-game variants over a common [`Board`].
///
/// Variants differ in how cells are matched and scored; the driving loop only
/// needs these four operations plus read access to the board.
pub trait CellGame {
    fn is_game_over(&self) -> bool;
    fn score(&self) -> Score;
    fn next_animation_step(&mut self);
    fn process_cell(&mut self, coords: Coord2) -> ClearOutcome;
}

/// Outcome of processing a selected cell.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ClearOutcome {
    /// Selection was out of range, empty, or arrived after game over.
    NoChange,
    /// Selection cleared this many cells, origin included.
    Cleared(CellCount),
}

impl ClearOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Cleared(_) => true,
        }
    }

    pub const fn cleared_cells(self) -> CellCount {
        match self {
            Self::NoChange => 0,
            Self::Cleared(count) => count,
        }
    }
}

/// Engine for the clear-cell game: rows of random colors are inserted from
/// the top on each animation step, and selecting a filled cell clears the
/// straight-line runs of its color in all eight directions around it.
#[derive(Clone, Debug)]
pub struct ClearCellEngine<S> {
    board: Board,
    score: Saturating<Score>,
    colors: S,
    strategy: Strategy,
}

impl<S: ColorSource> ClearCellEngine<S> {
    pub fn new(config: GameConfig, colors: S) -> Self {
        Self {
            board: Board::new(config.size),
            score: Saturating(0),
            colors,
            strategy: config.strategy,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.board[coords]
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Clears cells away from `origin` along one direction while they match
    /// `target`, stopping permanently at the first mismatch or the edge.
    fn clear_matching_ray(&mut self, origin: Coord2, delta: (isize, isize), target: Cell) -> CellCount {
        let mut cleared = 0;
        for pos in self.board.iter_ray(origin, delta) {
            if self.board[pos] != target {
                break;
            }
            self.board[pos] = Cell::Empty;
            cleared += 1;
        }
        cleared
    }

    /// Rebuilds the grid with every non-empty row packed toward row 0 in
    /// order, leaving trailing rows empty. Shape is preserved.
    fn collapse_rows(&mut self) {
        let (rows, cols) = self.board.size();
        if rows == 0 || cols == 0 {
            return;
        }

        let mut compacted = Board::new((rows, cols));
        let mut write_row = 0;
        for row in 0..rows {
            if self.board.is_row_empty(row) {
                continue;
            }
            for col in 0..cols {
                compacted[(write_row, col)] = self.board[(row, col)];
            }
            write_row += 1;
        }
        self.board = compacted;
    }
}

impl<S: ColorSource> CellGame for ClearCellEngine<S> {
    fn is_game_over(&self) -> bool {
        let rows = self.board.rows();
        rows == 0 || !self.board.is_row_empty(rows - 1)
    }

    fn score(&self) -> Score {
        self.score.0
    }

    fn next_animation_step(&mut self) {
        if self.is_game_over() {
            return;
        }

        let (rows, cols) = self.board.size();

        // Walk from the second-to-last row upward so no row is overwritten
        // before it has been copied.
        for row in (0..rows - 1).rev() {
            for col in 0..cols {
                self.board[(row + 1, col)] = self.board[(row, col)];
            }
        }

        // One independent draw per column.
        for col in 0..cols {
            self.board[(0, col)] = self.colors.next_color().into();
        }
        log::trace!("inserted a fresh row of {} cells", cols);
    }

    fn process_cell(&mut self, coords: Coord2) -> ClearOutcome {
        // Check order matters: bounds, then empty target, then game over.
        // A stray click outside the board or on an empty cell is absorbed
        // without ever consulting the game-over state.
        let Ok(coords) = self.board.validate_coords(coords) else {
            return ClearOutcome::NoChange;
        };

        let clicked = self.board[coords];
        if clicked.is_empty() {
            return ClearOutcome::NoChange;
        }

        if self.is_game_over() {
            return ClearOutcome::NoChange;
        }

        self.board[coords] = Cell::Empty;
        let mut cleared: CellCount = 1;

        // The eight scans share only the origin, so their order is
        // irrelevant to the final board and score.
        for delta in DIRECTIONS {
            cleared += self.clear_matching_ray(coords, delta, clicked);
        }

        self.score += Score::from(cleared);
        log::debug!("cleared {} cells from {:?}", cleared, coords);

        self.collapse_rows();
        ClearOutcome::Cleared(cleared)
    }
}
