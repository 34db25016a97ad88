//! Application service layer - showcase scenario, fleet loading, config

pub mod app;
pub mod config;
pub mod fleet;
