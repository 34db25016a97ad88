//! Domain models, capabilities, and services for the garage showcase

pub mod model;
pub mod service;
