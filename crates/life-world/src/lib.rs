//! Toroidal Game-of-Life simulation engine.
//!
//! This crate implements the Universe: a fixed-size toroidal grid of
//! two-state cells advanced one generation at a time by the standard
//! B3/S23 rule. The engine never initiates I/O or rendering; it is a
//! pure state machine driven by its caller.

pub mod grid;
pub mod patterns;
pub mod universe;

pub use grid::BitGrid;
pub use patterns::Pattern;
pub use universe::Universe;
