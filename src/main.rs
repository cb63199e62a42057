// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Driver for the orbit search.
//!
//! Seeds the perturbation search from the 2x2 block still life, reports
//! progress to stderr, and writes the configurations dump and the
//! transition-rate matrix next to the working directory. File names carry
//! a clock-derived four-digit suffix so repeated runs do not clobber each
//! other.

use life_search::catalog::Catalog;
use life_search::grid::{Frame, SIZE};
use life_search::search::{Counters, Explorer};
use std::fs::File;
use std::io::BufWriter;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// Four-digit file suffix derived from the clock.
fn file_suffix() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.subsec_nanos() as u64)
        .unwrap_or(0);
    1000 + nanos % 9000
}

fn main() {
    let start = Instant::now();

    // The block: two live rows of two, in the top-left corner.
    let seed = Frame::new((0b11 << SIZE) | 0b11);

    let mut explorer = Explorer::new();
    let seed_cycle = explorer.cycle_from(seed);
    let cycles = explorer.search_orbit(&seed_cycle);

    eprintln!(
        "[Search] elapsed(ms)={}, cycles found: {}",
        start.elapsed().as_millis(),
        cycles.len()
    );

    let statistics = explorer.statistics();
    eprintln!(
        "[Search] walks={}, generations={}, perturbations={}",
        statistics.get(Counters::Walks),
        statistics.get(Counters::Generations),
        statistics.get(Counters::Perturbations),
    );

    let catalog = Catalog::assign(&cycles);
    let suffix = file_suffix();

    let configurations_name = format!("{}x{}-configurations-{}.txt", SIZE, SIZE, suffix);
    match File::create(&configurations_name) {
        Ok(file) => {
            let mut out = BufWriter::new(file);
            if let Err(error) = catalog.write_cycles(&mut out) {
                eprintln!("[Output] failed writing {}: {}", configurations_name, error);
                return;
            }
            eprintln!("[Output] wrote {}", configurations_name);
        }
        Err(error) => {
            eprintln!("[Output] could not open {}: {}", configurations_name, error);
            return;
        }
    }

    let matrix_name = format!("{}x{}-matrix-{}.txt", SIZE, SIZE, suffix);
    match File::create(&matrix_name) {
        Ok(file) => {
            let mut out = BufWriter::new(file);
            if let Err(error) = catalog.write_rate_matrix(&mut explorer, &mut out) {
                eprintln!("[Output] failed writing {}: {}", matrix_name, error);
                return;
            }
            eprintln!("[Output] wrote {}", matrix_name);
        }
        Err(error) => {
            eprintln!("[Output] could not open {}: {}", matrix_name, error);
        }
    }
}
