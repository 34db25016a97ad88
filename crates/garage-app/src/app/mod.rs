//! Application use cases

pub mod showcase;

pub use showcase::{run_showcase, tour_fleet, Section, Step, Transcript};
