//! Motorcycle

use garage_types::VehicleKind;
use tracing::debug;

use super::event::{DriveRefusal, DriveStyle, Ignition, VehicleEvent};
use super::info::InfoSheet;
use super::vehicle::{Drivable, Vehicle, VehicleIdentity};

/// Fixed efficiency for every motorcycle (MPG)
pub const MOTORCYCLE_EFFICIENCY: f64 = 55.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Motorcycle {
    identity: VehicleIdentity,
    is_started: bool,
}

impl Motorcycle {
    pub fn new(make: impl Into<String>, model: impl Into<String>, year: i32) -> Self {
        Self {
            identity: VehicleIdentity::new(make, model, year),
            is_started: false,
        }
    }

    pub fn is_started(&self) -> bool {
        self.is_started
    }
}

impl Vehicle for Motorcycle {
    fn identity(&self) -> &VehicleIdentity {
        &self.identity
    }

    fn kind(&self) -> VehicleKind {
        VehicleKind::Motorcycle
    }

    fn start_engine(&mut self) -> VehicleEvent {
        self.is_started = true;
        debug!(vehicle = %self.identity, "engine kick-started");
        VehicleEvent::EngineStarted {
            ignition: Ignition::KickStart,
        }
    }

    fn calculate_efficiency(&self) -> f64 {
        MOTORCYCLE_EFFICIENCY
    }

    fn display_info(&self) -> InfoSheet {
        let mut sheet = InfoSheet::for_identity(&self.identity);
        sheet.push("Type", self.kind().label());
        sheet.push(
            "Efficiency",
            format!(
                "{:.2} {}",
                self.calculate_efficiency(),
                self.kind().efficiency_unit()
            ),
        );
        sheet
    }

    fn is_drivable(&self) -> bool {
        true
    }

    fn as_drivable_mut(&mut self) -> Option<&mut dyn Drivable> {
        Some(self)
    }
}

impl Drivable for Motorcycle {
    fn drive(&mut self) -> VehicleEvent {
        if !self.is_started {
            return VehicleEvent::DriveRefused {
                reason: DriveRefusal::EngineOff,
            };
        }
        VehicleEvent::Drove {
            style: DriveStyle::Smooth,
            battery_level: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_efficiency() {
        let bike = Motorcycle::new("Harley-Davidson", "Street 750", 2021);
        assert_eq!(bike.calculate_efficiency(), 55.0);
    }

    #[test]
    fn test_drive_gated_on_start() {
        let mut bike = Motorcycle::new("Harley-Davidson", "Street 750", 2021);
        assert!(!bike.drive().is_success());
        assert!(!bike.is_started());

        assert_eq!(bike.start_engine().to_string(), "Engine kick-started");
        assert!(bike.drive().is_success());
    }

    #[test]
    fn test_display_info() {
        let sheet = Motorcycle::new("Harley-Davidson", "Street 750", 2021).display_info();
        assert_eq!(sheet.position("Vehicle"), Some(0));
        assert_eq!(sheet.get("Vehicle"), Some("2021 Harley-Davidson Street 750"));
        assert_eq!(sheet.get("Type"), Some("Motorcycle"));
        assert_eq!(sheet.get("Efficiency"), Some("55.00 MPG"));
    }
}
