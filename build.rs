// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Build script to emit custom cfg flags based on board size feature selection.
//!
//! This enables cleaner conditional compilation in tests and code:
//! - `#[cfg(size_eq_3)]` for the exhaustively enumerable 3x3 board
//! - `#[cfg(size_eq_4)]` for the exhaustively enumerable 4x4 board
//! - `#[cfg(size_min_4)]` instead of `#[cfg(not(feature = "size_3"))]`

fn main() {
    // Declare the custom cfg names to avoid warnings
    println!("cargo:rustc-check-cfg=cfg(size_eq_3)");
    println!("cargo:rustc-check-cfg=cfg(size_eq_4)");
    println!("cargo:rustc-check-cfg=cfg(size_min_4)");

    // SIZE = 3
    #[cfg(feature = "size_3")]
    println!("cargo:rustc-cfg=size_eq_3");

    // SIZE = 4
    #[cfg(feature = "size_4")]
    println!("cargo:rustc-cfg=size_eq_4");

    // SIZE >= 4 (excludes only size_3)
    #[cfg(not(feature = "size_3"))]
    println!("cargo:rustc-cfg=size_min_4");
}
