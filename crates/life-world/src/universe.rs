//! The simulation engine.

use crate::grid::BitGrid;
use crate::patterns::{self, Pattern};
use life_core::{Cell, Error, Position, Result, UniverseConfig};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fmt;
use tracing::{debug, info, trace};

/// Offsets of the 8 toroidal neighbors
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A fixed-size toroidal Game-of-Life grid with its generation counter and
/// reseeding RNG. Dimensions never change after construction; every
/// operation mutates the universe in place.
#[derive(Debug)]
pub struct Universe {
    grid: BitGrid,
    config: UniverseConfig,
    rng: ChaCha8Rng,
    generation: u64,
}

impl Universe {
    /// Create a universe from the given configuration.
    ///
    /// The initial state is deterministic: the cell at linear index `i` is
    /// alive iff `i % 2 == 0 || i % 7 == 0`, so identical configurations
    /// produce identical grids.
    pub fn new(config: UniverseConfig) -> Result<Self> {
        config.validate()?;
        let mut grid = BitGrid::new(config.width, config.height)?;
        grid.fill_with(|i| i % 2 == 0 || i % 7 == 0);
        let rng = ChaCha8Rng::seed_from_u64(config.seed);

        info!(
            width = config.width,
            height = config.height,
            seed = config.seed,
            "created universe"
        );

        Ok(Self {
            grid,
            config,
            rng,
            generation: 0,
        })
    }

    /// Create a universe with the given dimensions and a default seed
    pub fn with_dimensions(width: u32, height: u32) -> Result<Self> {
        Self::new(UniverseConfig::new(width, height))
    }

    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    /// Generations advanced since construction
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn config(&self) -> &UniverseConfig {
        &self.config
    }

    /// Borrowed view of the packed cell bitmap (row-major, 1 bit per cell,
    /// 8 cells per byte). Re-fetch after any mutating call.
    pub fn cells(&self) -> &[u8] {
        self.grid.as_bytes()
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.grid.count_alive()
    }

    /// Multi-line textual snapshot, one character per cell
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Advance one generation using the standard B3/S23 rule.
    ///
    /// The whole neighbor census runs against the generation-N buffer; the
    /// result is committed into a fresh buffer that replaces the old one at
    /// the end, so no caller ever observes a mixed generation.
    pub fn step(&mut self) {
        let mut next = self.grid.clone();
        next.clear();

        for row in 0..self.height() {
            for column in 0..self.width() {
                let alive = self.grid.get(row, column);
                let neighbors = self.live_neighbor_count(row, column);
                let alive_next =
                    matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3));
                if alive_next {
                    next.set(row, column, true);
                }
            }
        }

        self.grid = next;
        self.generation += 1;
        trace!(
            generation = self.generation,
            population = self.grid.count_alive(),
            "stepped"
        );
    }

    /// Apply `step` the given number of times
    pub fn step_many(&mut self, generations: u64) {
        for _ in 0..generations {
            self.step();
        }
    }

    fn live_neighbor_count(&self, row: u32, column: u32) -> u8 {
        let pos = Position::new(row as i32, column as i32);
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(dr, dc)| self.grid.get_wrapped(pos.offset(dr, dc)))
            .count() as u8
    }

    /// Set every cell dead. Idempotent.
    pub fn clear_cells(&mut self) {
        self.grid.clear();
        debug!("cleared all cells");
    }

    /// Reseed every cell independently with probability 1/2 from the
    /// universe's own seeded RNG
    pub fn random_restart(&mut self) {
        let rng = &mut self.rng;
        self.grid.fill_with(|_| rng.gen::<bool>());
        debug!(population = self.grid.count_alive(), "random restart");
    }

    /// Like `random_restart`, but draws from a caller-supplied entropy source
    pub fn random_restart_with<R: Rng>(&mut self, rng: &mut R) {
        self.grid.fill_with(|_| rng.gen::<bool>());
        debug!(population = self.grid.count_alive(), "random restart");
    }

    /// Flip the single cell at (row, column).
    ///
    /// Coordinates are not wrapped: out-of-range coordinates are rejected
    /// with `Error::OutOfBounds` and the grid is left untouched.
    pub fn toggle_cell(&mut self, row: u32, column: u32) -> Result<()> {
        self.check_bounds(row, column)?;
        self.grid.toggle(row, column);
        Ok(())
    }

    /// Set the listed cells alive, wrapping each coordinate toroidally
    pub fn set_cells(&mut self, cells: &[(i32, i32)]) {
        for &(row, column) in cells {
            self.grid.set_wrapped(Position::new(row, column), true);
        }
    }

    /// Stamp a glider with its top-left bounding cell at (row, column)
    pub fn glider(&mut self, row: u32, column: u32) -> Result<()> {
        self.stamp(&patterns::GLIDER, row, column)
    }

    /// Stamp a pulsar with its top-left bounding cell at (row, column)
    pub fn pulsar(&mut self, row: u32, column: u32) -> Result<()> {
        self.stamp(&patterns::PULSAR, row, column)
    }

    /// Stamp a pentadecathlon with its top-left bounding cell at (row, column)
    pub fn pentadecathlon(&mut self, row: u32, column: u32) -> Result<()> {
        self.stamp(&patterns::PENTADECATHLON, row, column)
    }

    /// Additively set a pattern's cells alive, anchored at (row, column).
    ///
    /// The anchor must be in bounds; the pattern's offsets wrap toroidally,
    /// so a stamp near an edge wraps around instead of clipping. Cells
    /// outside the pattern's footprint are left untouched.
    fn stamp(&mut self, pattern: &Pattern, row: u32, column: u32) -> Result<()> {
        self.check_bounds(row, column)?;
        let anchor = Position::new(row as i32, column as i32);
        for &(dr, dc) in pattern.offsets {
            self.grid.set_wrapped(anchor.offset(dr, dc), true);
        }
        debug!(pattern = pattern.name, row, column, "stamped pattern");
        Ok(())
    }

    fn check_bounds(&self, row: u32, column: u32) -> Result<()> {
        if row >= self.height() || column >= self.width() {
            return Err(Error::OutOfBounds {
                row,
                column,
                width: self.width(),
                height: self.height(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height() {
            for column in 0..self.width() {
                write!(f, "{}", Cell::from_alive(self.grid.get(row, column)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
