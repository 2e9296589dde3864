//! Fixed pattern tables for stamping.
//!
//! Offsets are (row, column) deltas from the pattern's anchor, which is the
//! top-left cell of its bounding box. Several equivalent orientations exist
//! in the literature; these tables are the single fixed convention used by
//! the engine and its tests.

/// A named constellation of live-cell offsets
#[derive(Debug, Clone, Copy)]
pub struct Pattern {
    pub name: &'static str,
    pub offsets: &'static [(i32, i32)],
}

/// 5-cell spaceship; travels one cell down-right every 4 generations
pub const GLIDER: Pattern = Pattern {
    name: "glider",
    offsets: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
};

/// 48-cell period-3 oscillator with 4-fold symmetry, 13x13 bounding box
pub const PULSAR: Pattern = Pattern {
    name: "pulsar",
    offsets: &[
        // Horizontal bars: rows {0, 5, 7, 12}, columns {2..4, 8..10}
        (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
        (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
        (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
        (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        // Vertical bars: columns {0, 5, 7, 12}, rows {2..4, 8..10}
        (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
        (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
        (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
        (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
    ],
};

/// 12-cell period-15 oscillator, 3x10 bounding box
pub const PENTADECATHLON: Pattern = Pattern {
    name: "pentadecathlon",
    offsets: &[
        (1, 0), (1, 1), (0, 2), (2, 2), (1, 3), (1, 4),
        (1, 5), (1, 6), (0, 7), (2, 7), (1, 8), (1, 9),
    ],
};
