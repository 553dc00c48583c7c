//! Optional observability taps.
//!
//! The containers themselves never log; observability is something a
//! caller attaches, as one more registered callback. This module holds
//! the built-in taps.

mod log;

pub use log::LogTap;
