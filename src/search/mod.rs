// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Orbit exploration over the cycle-transition graph.
//!
//! Every frame of a cycle can be nudged by flipping a single cell; the
//! perturbed board then falls into some cycle of its own. The explorer
//! treats this as a directed relation between cycles and offers:
//!
//! - [`Explorer::search_orbit`] / [`Explorer::search_orbit_recursive`]:
//!   the fixed point of the relation from a seed cycle: every cycle
//!   reachable through repeated perturbation
//! - [`Explorer::search_perturbed`]: a single closure step over an
//!   existing cycle set, for callers that iterate externally
//! - [`Explorer::destination_counts`]: how often each destination cycle is
//!   hit by a cycle's period·CELL_COUNT elementary perturbations, the raw
//!   material of transition-rate matrices
//! - [`Explorer::enumerate_all`] / [`Explorer::find_cycles`]: exhaustive
//!   and evenly-spaced-sample enumeration of initial frames, the
//!   brute-force alternatives to orbit exploration
//!
//! One `Explorer` owns one [`Game`] and one [`Scratch`], so the inner walk
//! loop never allocates; independent explorers may run concurrently, each
//! with its own scratch state.
//!
//! # Examples
//!
//! ```
//! use life_search::grid::{Frame, CELL_COUNT};
//! use life_search::search::Explorer;
//!
//! let mut explorer = Explorer::new();
//!
//! // Every single-cell nudge of the empty board starves back to it.
//! let null_cycle = explorer.cycle_from(Frame::empty());
//! let counts = explorer.destination_counts(&null_cycle);
//! assert_eq!(counts[&null_cycle], CELL_COUNT);
//! ```

pub mod statistics;

pub use statistics::{Counters, Statistics};

use crate::cycle::Cycle;
use crate::game::{Game, Scratch};
use crate::grid::{Frame, CELL_COUNT, STATE_COUNT};
use std::collections::{HashMap, HashSet};

/// Perturbation-orbit search over the space of cycles.
pub struct Explorer {
    game: Game,
    scratch: Scratch,
    statistics: Statistics,
}

impl Explorer {
    /// Create an explorer with fresh scratch state and zeroed counters.
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            scratch: Scratch::new(),
            statistics: Statistics::new(),
        }
    }

    /// Counters accumulated over every search run so far.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Walk from `frame` to the cycle it settles into.
    pub fn cycle_from(&mut self, frame: Frame) -> Cycle {
        self.game.reset(frame);
        let cycle = self.game.find_cycle(&mut self.scratch);
        self.statistics.increment(Counters::Walks);
        self.statistics
            .add(Counters::Generations, self.game.generation() as u64);
        cycle
    }

    /// Discover every cycle reachable from `start` by repeated single-cell
    /// perturbation.
    ///
    /// Iterative worklist closure: newly discovered cycles are pushed onto
    /// a pending stack and expanded in turn until no perturbation of any
    /// discovered cycle produces a new one. The visited set both
    /// deduplicates and guarantees termination; the same cycle is
    /// rediscovered from many perturbed frames.
    pub fn search_orbit(&mut self, start: &Cycle) -> HashSet<Cycle> {
        let mut visited = HashSet::new();
        visited.insert(start.clone());
        self.statistics.increment(Counters::CyclesDiscovered);

        let mut pending = vec![start.clone()];
        while let Some(cycle) = pending.pop() {
            for &frame in cycle.frames() {
                for index in 0..CELL_COUNT {
                    let mut perturbed = frame;
                    perturbed.toggle(index);
                    self.statistics.increment(Counters::Perturbations);

                    let destination = self.cycle_from(perturbed);
                    if visited.insert(destination.clone()) {
                        self.statistics.increment(Counters::CyclesDiscovered);
                        pending.push(destination);
                    }
                }
            }
        }

        visited
    }

    /// Depth-first formulation of [`Explorer::search_orbit`].
    ///
    /// Recurses into each newly seen destination cycle; `visited` carries
    /// the closure and must contain `parent` on the outermost call.
    /// Functionally equivalent to the iterative search, differing only in
    /// discovery order.
    pub fn search_orbit_recursive(&mut self, parent: &Cycle, visited: &mut HashSet<Cycle>) {
        for &frame in parent.frames() {
            for index in 0..CELL_COUNT {
                let mut perturbed = frame;
                perturbed.toggle(index);
                self.statistics.increment(Counters::Perturbations);

                let destination = self.cycle_from(perturbed);
                if visited.insert(destination.clone()) {
                    self.statistics.increment(Counters::CyclesDiscovered);
                    self.search_orbit_recursive(&destination, visited);
                }
            }
        }
    }

    /// One closure step: the union of `cycles` with every cycle directly
    /// reachable from a single-cell perturbation of any member frame.
    ///
    /// Monotonically non-decreasing; iterating until the size stops
    /// growing reaches the same fixed point as [`Explorer::search_orbit`].
    pub fn search_perturbed(&mut self, cycles: &HashSet<Cycle>) -> HashSet<Cycle> {
        let mut total = cycles.clone();

        for cycle in cycles {
            for &frame in cycle.frames() {
                for index in 0..CELL_COUNT {
                    let mut perturbed = frame;
                    perturbed.toggle(index);
                    self.statistics.increment(Counters::Perturbations);
                    total.insert(self.cycle_from(perturbed));
                }
            }
        }

        total
    }

    /// Count, per destination cycle, how many of `cycle`'s elementary
    /// perturbations land on it.
    ///
    /// Exactly period·CELL_COUNT perturbations are applied, so the counts
    /// always sum to that; turning them into rates is the caller's
    /// business.
    pub fn destination_counts(&mut self, cycle: &Cycle) -> HashMap<Cycle, usize> {
        let mut counts = HashMap::new();

        for &frame in cycle.frames() {
            for index in 0..CELL_COUNT {
                let mut perturbed = frame;
                perturbed.toggle(index);
                self.statistics.increment(Counters::Perturbations);

                let destination = self.cycle_from(perturbed);
                *counts.entry(destination).or_insert(0) += 1;
            }
        }

        counts
    }

    /// Walk every one of the 2^CELL_COUNT initial frames and collect the
    /// complete cycle catalog.
    ///
    /// Only feasible when the full state space is enumerable (SIZE 3 or 4
    /// in practice); the sampled [`Explorer::find_cycles`] covers larger
    /// boards.
    pub fn enumerate_all(&mut self) -> HashSet<Cycle> {
        let mut cycles = HashSet::new();

        for state in 0..STATE_COUNT {
            let cycle = self.cycle_from(Frame::new(state as u64));
            if cycles.insert(cycle) {
                self.statistics.increment(Counters::CyclesDiscovered);
            }
        }

        cycles
    }

    /// Walk `samples` evenly spaced runs of `sample_length` consecutive
    /// initial frames across the state space.
    ///
    /// # Panics
    ///
    /// Panics if `samples` is 0 or the requested sampling does not fit the
    /// state space.
    pub fn find_cycles(&mut self, samples: usize, sample_length: usize) -> HashSet<Cycle> {
        assert!(samples > 0, "at least one sample required");
        assert!(
            STATE_COUNT / samples as u128 > sample_length as u128,
            "sampling exceeds the state space"
        );

        let space_length = STATE_COUNT / samples as u128 - sample_length as u128;
        let mut cycles = HashSet::new();

        for sample_index in 0..samples {
            let start = space_length
                + sample_index as u128 * (space_length + sample_length as u128);

            for state in start..start + sample_length as u128 {
                let cycle = self.cycle_from(Frame::new(state as u64));
                if cycles.insert(cycle) {
                    self.statistics.increment(Counters::CyclesDiscovered);
                }
            }
        }

        cycles
    }
}

impl Default for Explorer {
    fn default() -> Self {
        Self::new()
    }
}
