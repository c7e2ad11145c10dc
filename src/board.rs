//! The board: cell storage, traversal, neighbor counting, and the
//! two-phase generation advance.
//!
//! The board is a rows x cols rectangle of cells in row-major order. A
//! generation advances in two whole-board passes: `compute_next_generation`
//! stages every cell's next state from the current one, then
//! `commit_generation` promotes the staged states. The passes never
//! interleave cell-by-cell, so a neighbor count always sees the board as it
//! stood when the compute pass started.
//!
//! Edges clamp: a cell off the board is simply absent from its neighbors'
//! counts, never wrapped around. Corners see 3 neighbors, edges 5,
//! interior cells 8.

use crate::error::BoardError;
use crate::rules::next_state;
use rand::{rngs::StdRng, Rng};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Cell {
    pub(crate) alive: bool,
    /// Staged next state; only meaningful between a compute pass and the
    /// commit that follows it.
    pub(crate) pending: bool,
}

/// One traversal step: the coordinate, the board, and the cell under it.
/// Lives exactly one callback invocation.
pub(crate) struct Cursor<'a> {
    pub(crate) x: usize,
    pub(crate) y: usize,
    pub(crate) board: &'a Board,
    pub(crate) cell: &'a Cell,
}

/// Mutable traversal step. The exclusive borrow keeps the rest of the
/// board out of reach while one cell is writable.
pub(crate) struct CursorMut<'a> {
    pub(crate) x: usize,
    pub(crate) y: usize,
    pub(crate) cell: &'a mut Cell,
}

pub(crate) struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// All cells start dead with nothing staged. `rows` or `cols` of zero
    /// is a valid, empty board.
    pub(crate) fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        let n = rows
            .checked_mul(cols)
            .ok_or(BoardError::AllocationFailed { rows, cols })?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(n)
            .map_err(|_| BoardError::AllocationFailed { rows, cols })?;
        cells.resize(n, Cell::default());
        Ok(Self { rows, cols, cells })
    }

    pub(crate) fn rows(&self) -> usize {
        self.rows
    }

    pub(crate) fn cols(&self) -> usize {
        self.cols
    }

    fn idx(&self, y: usize, x: usize) -> usize {
        y * self.cols + x
    }

    /// Direct cell access. Out-of-bounds coordinates are a caller bug.
    pub(crate) fn cell(&self, y: usize, x: usize) -> &Cell {
        assert!(y < self.rows && x < self.cols, "cell ({y}, {x}) out of bounds");
        &self.cells[self.idx(y, x)]
    }

    /// Run `f` once per cell in row-major order (y outer, x inner).
    pub(crate) fn for_each(&self, mut f: impl FnMut(Cursor<'_>)) {
        for y in 0..self.rows {
            for x in 0..self.cols {
                f(Cursor {
                    x,
                    y,
                    board: self,
                    cell: &self.cells[y * self.cols + x],
                });
            }
        }
    }

    /// Mutable counterpart of [`for_each`](Self::for_each), same order.
    pub(crate) fn for_each_mut(&mut self, mut f: impl FnMut(CursorMut<'_>)) {
        for y in 0..self.rows {
            for x in 0..self.cols {
                let i = y * self.cols + x;
                f(CursorMut {
                    x,
                    y,
                    cell: &mut self.cells[i],
                });
            }
        }
    }

    /// Live cells among the up-to-8 neighbors of `(y, x)`, the 3x3 block
    /// clamped to the board with the center excluded.
    pub(crate) fn live_neighbors(&self, y: usize, x: usize) -> Result<u8, BoardError> {
        if y >= self.rows || x >= self.cols {
            return Err(BoardError::CoordOutOfBounds {
                y,
                x,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let mut n = 0;
        for ny in y.saturating_sub(1)..=(y + 1).min(self.rows - 1) {
            for nx in x.saturating_sub(1)..=(x + 1).min(self.cols - 1) {
                if ny == y && nx == x {
                    continue;
                }
                n += self.cells[ny * self.cols + nx].alive as u8;
            }
        }
        Ok(n)
    }

    /// Stage every cell's next state from the current generation. Counts
    /// only read `alive`, the pass only writes `pending`, so no cell's
    /// update is visible to another cell's count.
    pub(crate) fn compute_next_generation(&mut self) -> Result<(), BoardError> {
        let mut staged = Vec::with_capacity(self.cells.len());
        for y in 0..self.rows {
            for x in 0..self.cols {
                let n = self.live_neighbors(y, x)?;
                staged.push(next_state(self.cell(y, x).alive, n));
            }
        }
        let cols = self.cols;
        self.for_each_mut(|c| c.cell.pending = staged[c.y * cols + c.x]);
        Ok(())
    }

    /// Promote the staged states. Only valid after a full compute pass.
    pub(crate) fn commit_generation(&mut self) {
        self.for_each_mut(|c| c.cell.alive = c.cell.pending);
    }

    /// Coin-flip every cell's current state; staged states are left stale
    /// until the next compute pass.
    pub(crate) fn randomize(&mut self, rng: &mut StdRng) {
        self.for_each_mut(|c| c.cell.alive = rng.gen_bool(0.5));
    }
}
