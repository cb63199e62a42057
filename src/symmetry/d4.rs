// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The eight symmetries of the square.
//!
//! D4, the dihedral group of order 8, is what makes two board
//! configurations "the same shape": four rotations and four reflections.
//! Each element is a named variant applied directly as a cell permutation
//! by [`Frame::transformed`](crate::grid::Frame::transformed), not
//! derived by stepping through a chain of flips and turns, so the
//! enumeration is a fixed bijection onto the group, stable across runs.
//!
//! The declaration order is the enumeration order the canonicalizer uses
//! when breaking ties, so reordering variants changes which equivalent
//! frame is picked as canonical (never whether two frames are equivalent).

use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

/// One element of D4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCountMacro, EnumIter)]
#[repr(u8)]
pub enum Symmetry {
    /// Leave the board unchanged.
    Identity,
    /// Mirror about the vertical axis (columns reversed).
    FlipVertical,
    /// Mirror about the main diagonal.
    TransposeMain,
    /// Rotate 90 degrees clockwise.
    RotateCw,
    /// Rotate 180 degrees (both flips combined).
    Rotate180,
    /// Mirror about the horizontal axis (rows reversed).
    FlipHorizontal,
    /// Mirror about the anti-diagonal.
    TransposeAnti,
    /// Rotate 90 degrees counterclockwise.
    RotateCcw,
}

impl Symmetry {
    /// Position of this element in the enumeration order.
    pub const fn index(self) -> usize {
        self as usize
    }
}
