//! Types and utilities shared across the crate.

pub mod unit;

pub use unit::{EMUS_PER_INCH, MAX_COORDINATE, round_emu};
