//! Shared path helpers for the lanekit crates.

pub mod fs;
