//! Vehicle contract and the drivable capability

use garage_types::VehicleKind;
use serde::{Deserialize, Serialize};

use super::event::VehicleEvent;
use super::info::InfoSheet;

/// Identity attributes shared by every vehicle. Fixed once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleIdentity {
    make: String,
    model: String,
    year: i32,
}

impl VehicleIdentity {
    pub fn new(make: impl Into<String>, model: impl Into<String>, year: i32) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            year,
        }
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// "2022 Toyota Camry"
    pub fn describe(&self) -> String {
        format!("{} {} {}", self.year, self.make, self.model)
    }
}

impl std::fmt::Display for VehicleIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.year, self.make, self.model)
    }
}

/// Behaviour every vehicle variant provides.
///
/// `display_info` starts from the identity rows; implementations extend the
/// sheet returned by [`InfoSheet::for_identity`] rather than replacing it.
pub trait Vehicle {
    fn identity(&self) -> &VehicleIdentity;

    fn kind(&self) -> VehicleKind;

    /// Ignite the vehicle. Outcomes such as a dead battery are reported through
    /// the returned event, never as errors.
    fn start_engine(&mut self) -> VehicleEvent;

    /// Deterministic for a given state; no side effects.
    fn calculate_efficiency(&self) -> f64;

    fn display_info(&self) -> InfoSheet {
        InfoSheet::for_identity(self.identity())
    }

    fn make(&self) -> &str {
        self.identity().make()
    }

    fn model(&self) -> &str {
        self.identity().model()
    }

    fn year(&self) -> i32 {
        self.identity().year()
    }

    /// Whether this vehicle supports [`Drivable`].
    fn is_drivable(&self) -> bool {
        false
    }

    /// Capability query for [`Drivable`]. `None` for vehicles that cannot be driven.
    fn as_drivable_mut(&mut self) -> Option<&mut dyn Drivable> {
        None
    }
}

/// Optional capability: attempt to move the vehicle.
pub trait Drivable {
    fn drive(&mut self) -> VehicleEvent;
}
