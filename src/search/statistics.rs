// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters for the orbit search, stored in the explorer and incremented
//! as walks and perturbations happen. The driver binary reports them
//! after a search.

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

/// The events the explorer counts.
#[derive(Debug, EnumCountMacro, Copy, Clone)]
#[repr(u8)]
pub enum Counters {
    /// Cycle-detection walks run to completion.
    Walks,
    /// Generations stepped across all walks.
    Generations,
    /// Single-cell perturbations applied.
    Perturbations,
    /// Distinct cycles inserted into a search's result set.
    CyclesDiscovered,
}

/// Counter storage, indexed by [`Counters`].
#[derive(Debug, Default)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Add `amount` to the specified counter.
    pub(crate) fn add(&mut self, counter: Counters, amount: u64) {
        self.stats[counter as usize] += amount;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}
