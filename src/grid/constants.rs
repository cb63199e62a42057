// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time constants for the toroidal board.
//!
//! This module defines SIZE (the board's width and height) and all derived
//! constants. SIZE can be configured at compile time via cargo features.
//!
//! # Supported SIZE values
//!
//! - 3: 9 cells, 512 states (exhaustively enumerable in tests)
//! - 4: 16 cells, 65536 states (exhaustively enumerable)
//! - 5: 25 cells - **default**
//! - 6, 7, 8: up to 64 cells, the largest board that fits one `u64`
//!
//! # Example
//!
//! ```bash
//! # Default: SIZE=5
//! cargo build
//!
//! # Build for SIZE=4
//! cargo build --features size_4
//! ```

/// Width and height of the toroidal board.
///
/// This is configurable at compile time via cargo features:
/// - `size_3` → SIZE=3
/// - `size_4` → SIZE=4
/// - `size_5` → SIZE=5 (explicit)
/// - `size_6` → SIZE=6
/// - `size_7` → SIZE=7
/// - `size_8` → SIZE=8
/// - (default) → SIZE=5 (when no feature specified)
#[cfg(not(any(
    feature = "size_3",
    feature = "size_4",
    feature = "size_5",
    feature = "size_6",
    feature = "size_7",
    feature = "size_8"
)))]
pub const SIZE: usize = 5;

#[cfg(feature = "size_3")]
pub const SIZE: usize = 3;

#[cfg(feature = "size_4")]
pub const SIZE: usize = 4;

#[cfg(feature = "size_5")]
pub const SIZE: usize = 5;

#[cfg(feature = "size_6")]
pub const SIZE: usize = 6;

#[cfg(feature = "size_7")]
pub const SIZE: usize = 7;

#[cfg(feature = "size_8")]
pub const SIZE: usize = 8;

/// Number of cells on the board (SIZE²).
///
/// One bit per cell, row-major, bit index = col + row·SIZE.
pub const CELL_COUNT: usize = SIZE * SIZE;

/// Number of distinct board configurations (2^CELL_COUNT).
///
/// Held as `u128` because CELL_COUNT may be exactly 64.
pub const STATE_COUNT: u128 = 1u128 << CELL_COUNT;

/// Number of elements of the dihedral group D4 (the symmetries of a square).
///
/// Cross-checked against `Symmetry::COUNT` in the symmetry module's tests.
pub const SYMMETRY_COUNT: usize = 8;

/// Number of candidate transforms the canonicalizer enumerates:
/// SIZE row offsets × SIZE column offsets × 8 symmetries.
pub const TRANSFORM_COUNT: usize = SIZE * SIZE * SYMMETRY_COUNT;

/// Compile-time assertion that a configuration fits one 64-bit word.
///
/// Oversized boards must fail to build, never silently truncate.
const _: () = assert!(CELL_COUNT <= 64, "board must fit one 64-bit word");

/// Compile-time assertion that the board is large enough for the
/// eight symmetries to be distinct operations.
const _: () = assert!(SIZE >= 2, "board too small");
