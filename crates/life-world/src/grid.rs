//! Bit-packed 2D cell storage.

use life_core::{Error, Position, Result};
use serde::{Deserialize, Serialize};

/// A row-major bit-packed cell buffer: one bit per cell, 8 cells per byte.
///
/// Bit `n` of the buffer (byte `n / 8`, mask `1 << (n % 8)`) is set iff the
/// cell at linear index `n = row * width + column` is alive. Trailing bits
/// past `width * height` are always zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitGrid {
    width: u32,
    height: u32,
    bytes: Vec<u8>,
}

impl BitGrid {
    /// Create an all-dead grid. Both dimensions must be nonzero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let bits = width as usize * height as usize;
        Ok(Self {
            width,
            height,
            bytes: vec![0u8; (bits + 7) / 8],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells in the grid
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    fn index(&self, row: u32, column: u32) -> usize {
        row as usize * self.width as usize + column as usize
    }

    /// Whether the cell at in-bounds (row, column) is alive
    pub fn get(&self, row: u32, column: u32) -> bool {
        let n = self.index(row, column);
        self.bytes[n / 8] & (1 << (n % 8)) != 0
    }

    /// Set the cell at in-bounds (row, column)
    pub fn set(&mut self, row: u32, column: u32, alive: bool) {
        let n = self.index(row, column);
        let mask = 1u8 << (n % 8);
        if alive {
            self.bytes[n / 8] |= mask;
        } else {
            self.bytes[n / 8] &= !mask;
        }
    }

    /// Flip the cell at in-bounds (row, column)
    pub fn toggle(&mut self, row: u32, column: u32) {
        let n = self.index(row, column);
        self.bytes[n / 8] ^= 1 << (n % 8);
    }

    /// Read a cell with toroidal wrapping; any integer coordinates are valid
    pub fn get_wrapped(&self, pos: Position) -> bool {
        let p = pos.wrap(self.width, self.height);
        self.get(p.row as u32, p.column as u32)
    }

    /// Write a cell with toroidal wrapping
    pub fn set_wrapped(&mut self, pos: Position, alive: bool) {
        let p = pos.wrap(self.width, self.height);
        self.set(p.row as u32, p.column as u32, alive);
    }

    /// Set every cell dead
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// Rebuild the whole grid from a per-linear-index predicate
    pub fn fill_with(&mut self, mut alive: impl FnMut(usize) -> bool) {
        self.clear();
        for n in 0..self.cell_count() {
            if alive(n) {
                self.bytes[n / 8] |= 1 << (n % 8);
            }
        }
    }

    /// Number of live cells
    pub fn count_alive(&self) -> usize {
        self.bytes.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Borrowed view of the packed buffer; valid until the next mutation
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_grid_creation() {
        let grid = BitGrid::new(10, 10).unwrap();
        assert_eq!(grid.width(), 10);
        assert_eq!(grid.height(), 10);
        assert_eq!(grid.cell_count(), 100);
        // 100 bits round up to 13 bytes
        assert_eq!(grid.as_bytes().len(), 13);
        assert_eq!(grid.count_alive(), 0);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert_eq!(
            BitGrid::new(0, 10),
            Err(Error::InvalidDimension {
                width: 0,
                height: 10
            })
        );
        assert!(BitGrid::new(10, 0).is_err());
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = BitGrid::new(8, 4).unwrap();
        grid.set(1, 3, true);
        assert!(grid.get(1, 3));
        assert!(!grid.get(3, 1));
        grid.set(1, 3, false);
        assert!(!grid.get(1, 3));
    }

    #[test]
    fn test_bit_layout() {
        let mut grid = BitGrid::new(8, 2).unwrap();
        // Linear index 11 lands in byte 1, bit 3
        grid.set(1, 3, true);
        assert_eq!(grid.as_bytes(), &[0b0000_0000, 0b0000_1000][..]);
    }

    #[test]
    fn test_toroidal_wrapping() {
        let mut grid = BitGrid::new(10, 10).unwrap();
        grid.set(9, 9, true);
        assert!(grid.get_wrapped(Position::new(-1, -1)));
        assert!(!grid.get_wrapped(Position::new(10, 10)));

        grid.set_wrapped(Position::new(10, 10), true);
        assert!(grid.get(0, 0));
    }

    #[test]
    fn test_clear() {
        let mut grid = BitGrid::new(10, 10).unwrap();
        grid.fill_with(|n| n % 3 == 0);
        assert!(grid.count_alive() > 0);
        grid.clear();
        assert_eq!(grid.count_alive(), 0);
        assert!(grid.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_fill_with() {
        let mut grid = BitGrid::new(4, 4).unwrap();
        grid.fill_with(|n| n % 2 == 0);
        assert_eq!(grid.count_alive(), 8);
        assert!(grid.get(0, 0));
        assert!(!grid.get(0, 1));
        assert!(grid.get(0, 2));
    }

    #[test]
    fn test_snapshot_serialization() {
        let mut grid = BitGrid::new(12, 9).unwrap();
        grid.fill_with(|n| n % 5 == 0);
        let json = serde_json::to_string(&grid).unwrap();
        let deserialized: BitGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(grid, deserialized);
    }

    proptest! {
        #[test]
        fn prop_bit_packing_matches_cells(
            live in proptest::collection::hash_set((0u32..12, 0u32..9), 0..40)
        ) {
            let mut grid = BitGrid::new(9, 12).unwrap();
            for &(row, column) in &live {
                grid.set(row, column, true);
            }
            for row in 0..12u32 {
                for column in 0..9u32 {
                    let n = (row * 9 + column) as usize;
                    let bit = grid.as_bytes()[n / 8] & (1 << (n % 8)) != 0;
                    prop_assert_eq!(bit, live.contains(&(row, column)));
                }
            }
            prop_assert_eq!(grid.count_alive(), live.len());
        }

        #[test]
        fn prop_toggle_round_trip(
            live in proptest::collection::hash_set((0u32..8, 0u32..8), 0..30),
            row in 0u32..8,
            column in 0u32..8,
        ) {
            let mut grid = BitGrid::new(8, 8).unwrap();
            for &(r, c) in &live {
                grid.set(r, c, true);
            }
            let before = grid.clone();
            grid.toggle(row, column);
            prop_assert_eq!(grid.get(row, column), !before.get(row, column));
            grid.toggle(row, column);
            prop_assert_eq!(grid, before);
        }
    }
}
