// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The toroidal board and its bit-packed state.
//!
//! - `constants`: compile-time board size and derived constants
//! - `frame`: one packed board configuration and its transforms
//!
//! The board is a torus: rows and columns wrap modulo SIZE, both in the
//! neighbour masks used by the Life rule and in the translations used by
//! the canonicalizer. There is no edge-bounded variant.

pub mod constants;
pub mod frame;

// Re-export for convenience
pub use constants::*;
pub use frame::Frame;
