// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! A canonicalizing operation: toroidal translation plus a D4 symmetry.

use crate::symmetry::Symmetry;

/// One candidate of the canonicalization search: translate the board by
/// (row_offset, col_offset) modulo SIZE, then apply the symmetry.
///
/// Pure data; the application order is fixed by
/// [`Frame::transformed_by`](crate::grid::Frame::transformed_by).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transform {
    /// Row offset of the translation, in 0..SIZE.
    pub row_offset: usize,
    /// Column offset of the translation, in 0..SIZE.
    pub col_offset: usize,
    /// The D4 element applied after translating.
    pub symmetry: Symmetry,
}

impl Transform {
    /// The do-nothing transform.
    pub const IDENTITY: Transform = Transform::new(0, 0, Symmetry::Identity);

    /// Create a transform.
    pub const fn new(row_offset: usize, col_offset: usize, symmetry: Symmetry) -> Self {
        Self {
            row_offset,
            col_offset,
            symmetry,
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
