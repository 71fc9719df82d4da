//! Advent of Code puzzle solutions
//!
//! Solutions are organized by year, each year behind its own cargo feature.
//! Every solver derives `AocDay`, which registers it with the harness when
//! this crate is linked into a binary.

#[cfg(feature = "year-2018")]
pub mod year_2018;

#[cfg(feature = "year-2023")]
pub mod year_2023;
