//! Bit-packed universe implementation.
//! Each cell is stored as a single bit in a row-major byte buffer,
//! so a snapshot of the whole grid is `ceil(width * height / 8)` bytes.

use rand::Rng;
use rayon::prelude::*;
use thiserror::Error;

use super::Cell;

/// Above roughly 100x100 cells, fanning rows out to worker threads pays
/// for itself; below that the serial sweep wins.
const PARALLEL_TICK_THRESHOLD: usize = 10_000;

/// Construction failures. Dimensions are validated once, up front;
/// everything downstream treats them as fixed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UniverseError {
    #[error("universe dimensions {width}x{height} contain no cells")]
    EmptyDimensions { width: usize, height: usize },

    #[error("universe dimensions {width}x{height} overflow the packed buffer size")]
    DimensionsTooLarge { width: usize, height: usize },
}

/// Fixed-size cell grid, one bit per cell (1 = alive).
///
/// Cell (row, col) lives at bit `row * width + col`; within the buffer that
/// is byte `idx / 8`, mask `1 << (idx % 8)`. Padding bits past
/// `width * height` in the final byte stay zero, so popcounts and set-bit
/// scans never see phantom cells.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Universe {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Universe {
    /// Create an all-dead universe.
    ///
    /// Fails fast on zero or overflowing dimensions; any later out-of-range
    /// cell access is a caller bug, not a recoverable error.
    pub fn new(height: usize, width: usize) -> Result<Self, UniverseError> {
        let bits = width
            .checked_mul(height)
            .ok_or(UniverseError::DimensionsTooLarge { width, height })?;
        if bits == 0 {
            return Err(UniverseError::EmptyDimensions { width, height });
        }

        Ok(Self {
            width,
            height,
            cells: vec![0u8; bits.div_ceil(8)],
        })
    }

    /// Universe seeded with each cell alive with probability 0.5
    pub fn random(height: usize, width: usize) -> Result<Self, UniverseError> {
        let mut universe = Self::new(height, width)?;
        let mut rng = rand::rng();

        for byte in &mut universe.cells {
            *byte = rng.random::<u8>();
        }
        universe.clear_padding();

        Ok(universe)
    }

    /// Deterministic demo seed: a cell is alive when its linear index is
    /// divisible by 2 or by 7
    pub fn even_and_seven(height: usize, width: usize) -> Result<Self, UniverseError> {
        let mut universe = Self::new(height, width)?;
        for idx in 0..width * height {
            if idx % 2 == 0 || idx % 7 == 0 {
                universe.cells[idx / 8] |= 1 << (idx % 8);
            }
        }
        Ok(universe)
    }

    /// Universe containing a single vertical blinker anchored at (row, col)
    pub fn blinker_at(
        height: usize,
        width: usize,
        row: usize,
        col: usize,
    ) -> Result<Self, UniverseError> {
        let mut universe = Self::new(height, width)?;
        universe.set_alive(&[(row, col), (row + 1, col), (row + 2, col)]);
        Ok(universe)
    }

    /// Width in cells
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height in cells
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Convert 2D coordinates to the linear bit index
    const fn index_of(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Get cell state at (row, col)
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        debug_assert!(row < self.height && col < self.width);
        let idx = self.index_of(row, col);
        if self.cells[idx / 8] & (1 << (idx % 8)) != 0 {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }

    /// Set cell state at (row, col)
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        debug_assert!(row < self.height && col < self.width);
        let idx = self.index_of(row, col);
        if cell.is_alive() {
            self.cells[idx / 8] |= 1 << (idx % 8);
        } else {
            self.cells[idx / 8] &= !(1 << (idx % 8));
        }
    }

    /// Mark every listed (row, col) alive
    pub fn set_alive(&mut self, cells: &[(usize, usize)]) {
        for &(row, col) in cells {
            self.set(row, col, Cell::Alive);
        }
    }

    /// Row-major coordinates of all live cells
    pub fn alive_cells(&self) -> Vec<(usize, usize)> {
        (0..self.height)
            .flat_map(|row| (0..self.width).map(move |col| (row, col)))
            .filter(|&(row, col)| self.get(row, col).is_alive())
            .collect()
    }

    /// Borrowed view of the packed buffer, always `ceil(width * height / 8)`
    /// bytes. Stable between ticks; a tick replaces the buffer contents.
    pub fn as_bytes(&self) -> &[u8] {
        &self.cells
    }

    /// Count live neighbors of (row, col) on the torus: both axes wrap, so
    /// every cell has exactly 8 neighbors.
    fn live_neighbor_count(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;

        for row_delta in [self.height - 1, 0, 1] {
            for col_delta in [self.width - 1, 0, 1] {
                if row_delta == 0 && col_delta == 0 {
                    continue;
                }
                let neighbor_row = (row + row_delta) % self.height;
                let neighbor_col = (col + col_delta) % self.width;
                if self.get(neighbor_row, neighbor_col).is_alive() {
                    count += 1;
                }
            }
        }

        count
    }

    /// Advance the universe exactly one generation in place.
    /// Dispatches to the row-parallel sweep for large grids.
    pub fn tick(&mut self) {
        if self.width * self.height >= PARALLEL_TICK_THRESHOLD {
            self.tick_parallel();
        } else {
            self.tick_serial();
        }
    }

    /// One generation, single-threaded
    pub fn tick_serial(&mut self) {
        let mut next = vec![0u8; self.cells.len()];

        for row in 0..self.height {
            for col in 0..self.width {
                let neighbors = self.live_neighbor_count(row, col);
                if self.get(row, col).evolve(neighbors).is_alive() {
                    let idx = self.index_of(row, col);
                    next[idx / 8] |= 1 << (idx % 8);
                }
            }
        }

        self.cells = next;
    }

    /// One generation, rows computed in parallel. Produces bit-identical
    /// results to the serial sweep.
    pub fn tick_parallel(&mut self) {
        let live_rows: Vec<Vec<usize>> = (0..self.height)
            .into_par_iter()
            .map(|row| {
                (0..self.width)
                    .filter(|&col| {
                        let neighbors = self.live_neighbor_count(row, col);
                        self.get(row, col).evolve(neighbors).is_alive()
                    })
                    .collect()
            })
            .collect();

        let mut next = vec![0u8; self.cells.len()];
        for (row, cols) in live_rows.into_iter().enumerate() {
            for col in cols {
                let idx = self.index_of(row, col);
                next[idx / 8] |= 1 << (idx % 8);
            }
        }

        self.cells = next;
    }

    /// Zero the bits past `width * height` in the final byte
    fn clear_padding(&mut self) {
        let bits = self.width * self.height;
        if bits % 8 != 0 {
            if let Some(last) = self.cells.last_mut() {
                *last &= (1u8 << (bits % 8)) - 1;
            }
        }
    }
}
