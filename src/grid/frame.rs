// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Bit-packed board state.
//!
//! A `Frame` is one snapshot of the N×N toroidal grid, packed one bit per
//! cell into a single `u64`, row-major: bit index = col + row·SIZE. Only the
//! low CELL_COUNT bits are ever set.
//!
//! Frames are plain values ordered by their packed representation; that
//! total order is what the canonicalizer minimizes over. The per-cell
//! neighbour masks (the eight toroidal neighbours of each cell) are built
//! once per board size as a `const` lookup table.
//!
//! # Examples
//!
//! ```
//! use life_search::grid::Frame;
//!
//! let mut frame = Frame::empty();
//! frame.set_cell(0, 0);
//! frame.set_cell(0, 1);
//!
//! assert_eq!(frame.population(), 2);
//! assert!(frame.cell(0, 0));
//! assert!(!frame.cell(1, 1));
//!
//! // (1, 1) touches both live cells.
//! assert_eq!(frame.neighbour_cnt(Frame::to_index(1, 1)), 2);
//! ```

use crate::grid::constants::{CELL_COUNT, SIZE, STATE_COUNT};
use crate::symmetry::{Symmetry, Transform};
use std::fmt;
use strum::IntoEnumIterator;

/// One board configuration, packed into a `u64`.
///
/// Comparison is by raw packed value. This defines the total order used
/// for canonical-minimum selection, and makes `BTreeSet<Frame>` iterate
/// frames in a deterministic order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Frame(u64);

impl Frame {
    /// Create a frame from its raw packed value.
    ///
    /// # Panics
    ///
    /// Panics if the value carries bits above CELL_COUNT, which would
    /// break closure of the transform operations over the board.
    pub const fn new(state: u64) -> Self {
        assert!(
            (state as u128) < STATE_COUNT,
            "frame value exceeds the board's state space"
        );
        Self(state)
    }

    /// The all-dead frame (raw value 0).
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Convert a (row, col) pair to a bit index.
    pub const fn to_index(row: usize, col: usize) -> usize {
        col + row * SIZE
    }

    /// Get the raw packed value.
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Test the cell at a bit index.
    pub fn get(self, index: usize) -> bool {
        (self.0 >> index) & 1 != 0
    }

    /// Test the cell at (row, col).
    pub fn cell(self, row: usize, col: usize) -> bool {
        self.get(Self::to_index(row, col))
    }

    /// Set the cell at a bit index alive.
    pub fn set(&mut self, index: usize) {
        self.0 |= 1 << index;
    }

    /// Set the cell at (row, col) alive.
    pub fn set_cell(&mut self, row: usize, col: usize) {
        self.set(Self::to_index(row, col));
    }

    /// Write the cell at a bit index.
    pub fn put(&mut self, index: usize, alive: bool) {
        self.0 = (self.0 & !(1 << index)) | ((alive as u64) << index);
    }

    /// Flip the cell at a bit index.
    ///
    /// This is the elementary perturbation of the orbit search.
    pub fn toggle(&mut self, index: usize) {
        self.0 ^= 1 << index;
    }

    /// Number of live cells.
    pub fn population(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Number of live cells among the eight toroidal neighbours of `index`.
    ///
    /// A popcount of the state masked with the precomputed neighbour mask;
    /// the cell itself is never counted.
    pub fn neighbour_cnt(self, index: usize) -> usize {
        (self.0 & NEIGHBOUR_MASK_LOOKUP[index]).count_ones() as usize
    }

    /// Shift every cell by (row_offset, col_offset), wrapping modulo SIZE
    /// in both axes.
    ///
    /// A pure cyclic permutation of the cells: bijective, population
    /// preserving, and `translated(0, 0)` is the identity.
    pub fn translated(self, row_offset: usize, col_offset: usize) -> Self {
        let mut result = Self::empty();
        for row in 0..SIZE {
            for col in 0..SIZE {
                let new_row = (row + row_offset) % SIZE;
                let new_col = (col + col_offset) % SIZE;
                result.put(Self::to_index(new_row, new_col), self.cell(row, col));
            }
        }
        result
    }

    /// Mirror about the horizontal axis (rows reversed).
    pub fn flipped_horizontal(self) -> Self {
        self.mapped(|row, col| (SIZE - row - 1, col))
    }

    /// Mirror about the vertical axis (columns reversed).
    pub fn flipped_vertical(self) -> Self {
        self.mapped(|row, col| (row, SIZE - col - 1))
    }

    /// Mirror about the main diagonal.
    pub fn transposed(self) -> Self {
        self.mapped(|row, col| (col, row))
    }

    /// Mirror about the anti-diagonal.
    pub fn transposed_anti(self) -> Self {
        self.mapped(|row, col| (SIZE - col - 1, SIZE - row - 1))
    }

    /// Rotate 90 degrees clockwise.
    pub fn rotated_cw(self) -> Self {
        self.mapped(|row, col| (SIZE - col - 1, row))
    }

    /// Rotate 90 degrees counterclockwise.
    pub fn rotated_ccw(self) -> Self {
        self.mapped(|row, col| (col, SIZE - row - 1))
    }

    /// Rotate 180 degrees.
    pub fn rotated_180(self) -> Self {
        self.mapped(|row, col| (SIZE - row - 1, SIZE - col - 1))
    }

    /// Apply one of the eight D4 symmetries.
    pub fn transformed(self, symmetry: Symmetry) -> Self {
        match symmetry {
            Symmetry::Identity => self,
            Symmetry::FlipVertical => self.flipped_vertical(),
            Symmetry::TransposeMain => self.transposed(),
            Symmetry::RotateCw => self.rotated_cw(),
            Symmetry::Rotate180 => self.rotated_180(),
            Symmetry::FlipHorizontal => self.flipped_horizontal(),
            Symmetry::TransposeAnti => self.transposed_anti(),
            Symmetry::RotateCcw => self.rotated_ccw(),
        }
    }

    /// Apply a full canonicalizing transform: translate, then the symmetry.
    ///
    /// This is the composition order the canonicalizer enumerates, so
    /// applying the transform returned by [`Frame::normalized`] reproduces
    /// the canonical frame.
    pub fn transformed_by(self, transform: Transform) -> Self {
        self.translated(transform.row_offset, transform.col_offset)
            .transformed(transform.symmetry)
    }

    /// Find the equivalent frame with the minimal packed value, together
    /// with the transform producing it.
    ///
    /// Every one of the SIZE² translations composed with each of the eight
    /// D4 symmetries is a candidate. Ties are broken by the first candidate
    /// found: offsets row-major, symmetries in declaration order. Only a
    /// strictly smaller candidate replaces the current minimum, so the
    /// result is deterministic.
    ///
    /// Cost is O(SIZE²·8) frame constructions of O(SIZE²) each; acceptable
    /// for the bounded board sizes this crate supports.
    pub fn normalized(self) -> (Self, Transform) {
        let mut min_frame = self;
        let mut min_transform = Transform::IDENTITY;

        for row_offset in 0..SIZE {
            for col_offset in 0..SIZE {
                let shifted = self.translated(row_offset, col_offset);
                for symmetry in Symmetry::iter() {
                    let candidate = shifted.transformed(symmetry);
                    if candidate < min_frame {
                        min_frame = candidate;
                        min_transform = Transform::new(row_offset, col_offset, symmetry);
                    }
                }
            }
        }

        (min_frame, min_transform)
    }

    /// Parse a frame from a textual grid: `.` = dead, `#` = alive,
    /// row-major. ASCII whitespace (including newlines between rows) is
    /// ignored.
    ///
    /// Returns `None` on any other character or on a cell count different
    /// from CELL_COUNT; a malformed grid never yields a partial frame.
    pub fn from_text(text: &str) -> Option<Self> {
        let mut frame = Self::empty();
        let mut index = 0;

        for ch in text.chars() {
            if ch.is_ascii_whitespace() {
                continue;
            }
            if index >= CELL_COUNT {
                return None;
            }
            match ch {
                '#' => frame.set(index),
                '.' => {}
                _ => return None,
            }
            index += 1;
        }

        if index == CELL_COUNT {
            Some(frame)
        } else {
            None
        }
    }

    /// Build a new frame by pulling each destination cell from a source
    /// cell, `source(row, col)` giving the (row, col) to read for the
    /// destination (row, col).
    fn mapped(self, source: impl Fn(usize, usize) -> (usize, usize)) -> Self {
        let mut result = Self::empty();
        for row in 0..SIZE {
            for col in 0..SIZE {
                let (src_row, src_col) = source(row, col);
                result.put(Self::to_index(row, col), self.cell(src_row, src_col));
            }
        }
        result
    }
}

impl fmt::Display for Frame {
    /// Render the grid, `#` for alive and `.` for dead, one row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for index in 0..CELL_COUNT {
            write!(f, "{} ", if self.get(index) { '#' } else { '.' })?;
            if (index + 1) % SIZE == 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Toroidal 8-neighbour mask for the cell at (row, col).
const fn neighbour_mask(cell_row: usize, cell_col: usize) -> u64 {
    let mut mask = 0u64;
    let mut dr = 0;
    while dr < 3 {
        let row = (cell_row + SIZE + dr - 1) % SIZE;
        let mut dc = 0;
        while dc < 3 {
            if !(dr == 1 && dc == 1) {
                let col = (cell_col + SIZE + dc - 1) % SIZE;
                mask |= 1u64 << Frame::to_index(row, col);
            }
            dc += 1;
        }
        dr += 1;
    }
    mask
}

/// Per-cell neighbour masks, built once per board size.
const NEIGHBOUR_MASK_LOOKUP: [u64; CELL_COUNT] = {
    let mut table = [0u64; CELL_COUNT];
    let mut row = 0;
    while row < SIZE {
        let mut col = 0;
        while col < SIZE {
            table[Frame::to_index(row, col)] = neighbour_mask(row, col);
            col += 1;
        }
        row += 1;
    }
    table
};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::EnumCount;

    #[test]
    fn test_to_index() {
        assert_eq!(Frame::to_index(0, 0), 0);
        assert_eq!(Frame::to_index(0, 1), 1);
        assert_eq!(Frame::to_index(1, 0), SIZE);
        assert_eq!(Frame::to_index(SIZE - 1, SIZE - 1), CELL_COUNT - 1);
    }

    #[test]
    fn test_get_set_toggle() {
        let mut frame = Frame::empty();
        assert!(!frame.get(0));

        frame.set(0);
        assert!(frame.get(0));
        assert_eq!(frame.bits(), 1);

        frame.toggle(0);
        assert!(!frame.get(0));
        assert_eq!(frame, Frame::empty());

        frame.toggle(CELL_COUNT - 1);
        assert!(frame.get(CELL_COUNT - 1));
    }

    #[test]
    fn test_put() {
        let mut frame = Frame::empty();
        frame.put(3, true);
        assert!(frame.get(3));

        // Unlike set, put can clear a cell.
        frame.put(3, false);
        assert!(!frame.get(3));
        assert_eq!(frame, Frame::empty());
    }

    #[test]
    fn test_cell_addressing() {
        let mut frame = Frame::empty();
        frame.set_cell(1, 2);
        assert!(frame.cell(1, 2));
        assert!(frame.get(Frame::to_index(1, 2)));
        assert_eq!(frame.population(), 1);
    }

    #[test]
    #[cfg(not(feature = "size_8"))]
    #[should_panic(expected = "state space")]
    fn test_new_rejects_out_of_range() {
        Frame::new(u64::MAX);
    }

    #[test]
    fn test_neighbour_masks_have_eight_cells() {
        for index in 0..CELL_COUNT {
            assert_eq!(
                NEIGHBOUR_MASK_LOOKUP[index].count_ones(),
                8,
                "cell {} must have exactly eight toroidal neighbours",
                index
            );
            // The cell is not its own neighbour.
            assert_eq!(NEIGHBOUR_MASK_LOOKUP[index] & (1 << index), 0);
        }
    }

    #[test]
    fn test_neighbour_cnt() {
        let mut frame = Frame::empty();
        assert_eq!(frame.neighbour_cnt(Frame::to_index(1, 1)), 0);

        frame.set_cell(0, 0);
        assert_eq!(frame.neighbour_cnt(Frame::to_index(1, 1)), 1);
        assert_eq!(frame.neighbour_cnt(Frame::to_index(0, 1)), 1);
        // The live cell itself counts no neighbours.
        assert_eq!(frame.neighbour_cnt(Frame::to_index(0, 0)), 0);
        // Wraps around both axes: the far corner is diagonally adjacent.
        assert_eq!(frame.neighbour_cnt(Frame::to_index(SIZE - 1, SIZE - 1)), 1);
    }

    #[test]
    fn test_translated_identity() {
        let mut frame = Frame::empty();
        frame.set_cell(1, 2);
        assert_eq!(frame.translated(0, 0), frame);
    }

    #[test]
    fn test_translated_moves_and_wraps() {
        let mut frame = Frame::empty();
        frame.set_cell(SIZE - 1, SIZE - 1);

        let shifted = frame.translated(1, 1);
        assert!(shifted.cell(0, 0));
        assert_eq!(shifted.population(), 1);
    }

    #[test]
    fn test_translated_full_cycle() {
        let mut frame = Frame::empty();
        frame.set_cell(0, 1);
        frame.set_cell(2, 0);

        let mut shifted = frame;
        for _ in 0..SIZE {
            shifted = shifted.translated(1, 0);
        }
        assert_eq!(shifted, frame);

        assert_eq!(frame.translated(SIZE - 1, SIZE - 1).translated(1, 1), frame);
    }

    #[test]
    fn test_flips_are_involutions() {
        let mut frame = Frame::empty();
        frame.set_cell(0, 1);
        frame.set_cell(1, 2);
        frame.set_cell(2, 2);

        assert_eq!(frame.flipped_horizontal().flipped_horizontal(), frame);
        assert_eq!(frame.flipped_vertical().flipped_vertical(), frame);
        assert_eq!(frame.transposed().transposed(), frame);
        assert_eq!(frame.transposed_anti().transposed_anti(), frame);
        assert_eq!(frame.rotated_180().rotated_180(), frame);
    }

    #[test]
    fn test_rotations_compose() {
        let mut frame = Frame::empty();
        frame.set_cell(0, 1);
        frame.set_cell(1, 2);

        assert_eq!(frame.rotated_cw().rotated_ccw(), frame);
        assert_eq!(frame.rotated_cw().rotated_cw(), frame.rotated_180());
        assert_eq!(
            frame.rotated_cw().rotated_cw().rotated_cw().rotated_cw(),
            frame
        );
    }

    #[test]
    fn test_cell_mappings() {
        let mut frame = Frame::empty();
        frame.set_cell(0, 1);

        assert!(frame.rotated_cw().cell(1, SIZE - 1));
        assert!(frame.rotated_ccw().cell(SIZE - 2, 0));
        assert!(frame.flipped_vertical().cell(0, SIZE - 2));
        assert!(frame.flipped_horizontal().cell(SIZE - 1, 1));
        assert!(frame.transposed().cell(1, 0));
        assert!(frame.transposed_anti().cell(SIZE - 2, SIZE - 1));
        assert!(frame.rotated_180().cell(SIZE - 1, SIZE - 2));
    }

    #[test]
    fn test_transformed_covers_the_group() {
        let mut frame = Frame::empty();
        frame.set_cell(0, 1);
        frame.set_cell(1, 2);

        assert_eq!(Symmetry::COUNT, 8);
        assert_eq!(frame.transformed(Symmetry::Identity), frame);
        for symmetry in Symmetry::iter() {
            // Every symmetry is a permutation of the cells.
            assert_eq!(frame.transformed(symmetry).population(), frame.population());
        }
        assert_eq!(
            frame.transformed(Symmetry::Rotate180),
            frame.flipped_horizontal().flipped_vertical()
        );
    }

    #[test]
    fn test_transformed_by_applies_translation_first() {
        let mut frame = Frame::empty();
        frame.set_cell(0, 0);

        let transform = Transform::new(0, 1, Symmetry::FlipVertical);
        // Translate: (0,0) → (0,1); flip columns: (0,1) → (0, SIZE-2).
        assert!(frame.transformed_by(transform).cell(0, SIZE - 2));
    }

    #[test]
    fn test_normalized_is_minimal_and_reproducible() {
        let mut frame = Frame::empty();
        frame.set_cell(2, 2);
        frame.set_cell(2, 0);

        let (normalized, transform) = frame.normalized();
        assert!(normalized <= frame);
        assert_eq!(frame.transformed_by(transform), normalized);
    }

    #[test]
    fn test_normalized_idempotent() {
        let mut frame = Frame::empty();
        frame.set_cell(1, 0);
        frame.set_cell(2, 1);
        frame.set_cell(2, 2);

        let (normalized, _) = frame.normalized();
        let (again, transform) = normalized.normalized();
        assert_eq!(again, normalized);
        assert_eq!(transform, Transform::IDENTITY);
    }

    #[test]
    fn test_normalized_invariant_over_equivalents() {
        let mut frame = Frame::empty();
        frame.set_cell(0, 1);
        frame.set_cell(1, 1);
        frame.set_cell(2, 0);

        let (expected, _) = frame.normalized();

        for row_offset in 0..SIZE {
            for col_offset in 0..SIZE {
                for symmetry in Symmetry::iter() {
                    let variant = frame
                        .transformed_by(Transform::new(row_offset, col_offset, symmetry));
                    let (normalized, _) = variant.normalized();
                    assert_eq!(normalized, expected);
                }
            }
        }
    }

    #[test]
    fn test_from_text_round_trip() {
        let mut frame = Frame::empty();
        frame.set_cell(0, 0);
        frame.set_cell(1, 2);
        frame.set_cell(SIZE - 1, SIZE - 1);

        let rendered = frame.to_string();
        assert_eq!(Frame::from_text(&rendered), Some(frame));
    }

    #[test]
    fn test_from_text_rejects_malformed() {
        assert_eq!(Frame::from_text(""), None);
        assert_eq!(Frame::from_text("#"), None);
        assert_eq!(Frame::from_text(&"x".repeat(CELL_COUNT)), None);
        assert_eq!(Frame::from_text(&".".repeat(CELL_COUNT + 1)), None);
    }

    #[test]
    fn test_from_text_all_dead() {
        let text = ".".repeat(CELL_COUNT);
        assert_eq!(Frame::from_text(&text), Some(Frame::empty()));
    }

    #[test]
    #[cfg(size_eq_3)]
    fn test_from_text_rows() {
        let frame = Frame::from_text(
            ".#.\
             #..\
             ..#",
        )
        .unwrap();

        assert!(!frame.cell(0, 0));
        assert!(frame.cell(0, 1));
        assert!(!frame.cell(0, 2));

        assert!(frame.cell(1, 0));
        assert!(!frame.cell(1, 1));
        assert!(!frame.cell(1, 2));

        assert!(!frame.cell(2, 0));
        assert!(!frame.cell(2, 1));
        assert!(frame.cell(2, 2));
    }

    #[test]
    fn test_display() {
        let mut frame = Frame::empty();
        frame.set_cell(0, 0);

        let rendered = frame.to_string();
        assert_eq!(rendered.lines().count(), SIZE);
        assert!(rendered.starts_with("# "));
        assert_eq!(rendered.matches('#').count(), 1);
        assert_eq!(rendered.matches('.').count(), CELL_COUNT - 1);
    }
}
