//! Domain services

pub mod efficiency;

pub use efficiency::{generate_efficiency_report, rank_by_efficiency, EfficiencyRow};
