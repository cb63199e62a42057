// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Cycle catalog: external ids and the textual dump formats.
//!
//! A search produces an unordered set of canonical cycles; downstream
//! tooling wants them numbered and written out. The catalog assigns each
//! cycle an integer id (the cycle of the empty board always gets id 0)
//! and writes two artifacts:
//!
//! - the configurations dump: per cycle, a `[T = <period>, id: <id>]`
//!   header, the raw value of each member frame, and a grid rendering
//! - the transition-rate matrix: one row per cycle of destination
//!   frequencies over all its single-cell perturbations, diagonal
//!   subtracted and scaled by the cell count, fractions reduced, zero
//!   runs compressed as `0$<count>`
//!
//! Ids beyond 0 follow set iteration order; they are labels for external
//! tooling and carry no meaning of their own. Writers take any
//! `io::Write`, leaving file naming to the caller.

use crate::cycle::Cycle;
use crate::grid::CELL_COUNT;
use crate::search::Explorer;
use std::collections::{HashMap, HashSet};
use std::io;

/// An id-assigned cycle set.
pub struct Catalog {
    /// Cycles ordered by id.
    cycles: Vec<Cycle>,
    /// Id of each cycle.
    indices: HashMap<Cycle, usize>,
}

impl Catalog {
    /// Assign ids to a cycle set.
    ///
    /// The null cycle, when present, gets id 0; the rest are numbered in
    /// set iteration order.
    pub fn assign(cycles: &HashSet<Cycle>) -> Self {
        let mut ordered = Vec::with_capacity(cycles.len());

        if let Some(null_cycle) = cycles.iter().find(|cycle| cycle.is_null()) {
            ordered.push(null_cycle.clone());
        }
        for cycle in cycles {
            if cycle.is_null() {
                continue;
            }
            ordered.push(cycle.clone());
        }

        let indices = ordered
            .iter()
            .enumerate()
            .map(|(index, cycle)| (cycle.clone(), index))
            .collect();

        Self {
            cycles: ordered,
            indices,
        }
    }

    /// Number of cataloged cycles.
    pub fn len(&self) -> usize {
        self.cycles.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.cycles.is_empty()
    }

    /// Cycles in id order.
    pub fn cycles(&self) -> &[Cycle] {
        &self.cycles
    }

    /// The id assigned to `cycle`, if cataloged.
    pub fn index_of(&self, cycle: &Cycle) -> Option<usize> {
        self.indices.get(cycle).copied()
    }

    /// Write the configurations dump.
    pub fn write_cycles(&self, out: &mut impl io::Write) -> io::Result<()> {
        for (index, cycle) in self.cycles.iter().enumerate() {
            writeln!(out, "[T = {}, id: {}]", cycle.period(), index)?;
            for frame in cycle.frames() {
                write!(out, "{} ", frame.bits())?;
            }
            writeln!(out)?;
            writeln!(out, "{}", cycle)?;
        }
        Ok(())
    }

    /// Write the transition-rate matrix, one row per cycle id.
    ///
    /// Row `i`, column `j` holds how often cycle `i`'s perturbations land
    /// on cycle `j`, minus period·CELL_COUNT on the diagonal, scaled by
    /// CELL_COUNT. Entries print as integers when the division is exact,
    /// otherwise as reduced fractions over period·CELL_COUNT.
    ///
    /// # Panics
    ///
    /// Panics if a perturbation reaches a cycle outside the catalog; the
    /// catalog must be perturbation-closed (a `search_orbit` fixed point
    /// or an exhaustive enumeration).
    pub fn write_rate_matrix(
        &self,
        explorer: &mut Explorer,
        out: &mut impl io::Write,
    ) -> io::Result<()> {
        for (row_index, cycle) in self.cycles.iter().enumerate() {
            let destinations = explorer.destination_counts(cycle);
            let normalizer = (cycle.period() * CELL_COUNT) as i64;

            let mut frequencies = vec![0i64; self.cycles.len()];
            frequencies[row_index] -= normalizer;

            for (destination, count) in &destinations {
                let column = match self.index_of(destination) {
                    Some(column) => column,
                    None => panic!("destination cycle not in catalog; set is not closed"),
                };
                frequencies[column] += *count as i64;
            }

            write_rate_row(out, &frequencies, normalizer)?;
        }
        Ok(())
    }
}

/// Write one matrix row: entries scaled by CELL_COUNT and divided by the
/// row's normalizer, with zero runs compressed.
fn write_rate_row(out: &mut impl io::Write, frequencies: &[i64], normalizer: i64) -> io::Result<()> {
    let mut zero_run = 0usize;

    for &frequency in frequencies {
        let scaled = frequency * CELL_COUNT as i64;
        if scaled == 0 {
            zero_run += 1;
            continue;
        }
        flush_zero_run(out, &mut zero_run)?;

        if scaled % normalizer == 0 {
            write!(out, "{} ", scaled / normalizer)?;
        } else {
            let divisor = gcd(scaled.unsigned_abs(), normalizer.unsigned_abs()) as i64;
            write!(out, "{}/{} ", scaled / divisor, normalizer / divisor)?;
        }
    }

    flush_zero_run(out, &mut zero_run)?;
    writeln!(out)
}

/// Emit a pending zero run as `0` or `0$<count>` and reset it.
fn flush_zero_run(out: &mut impl io::Write, zero_run: &mut usize) -> io::Result<()> {
    match *zero_run {
        0 => {}
        1 => write!(out, "0 ")?,
        run => write!(out, "0${} ", run)?,
    }
    *zero_run = 0;
    Ok(())
}

/// Greatest common divisor by Euclid's algorithm.
const fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a
}
