//! Combustion car

use garage_types::{ValidationError, VehicleKind};
use tracing::{debug, warn};

use super::event::{DriveRefusal, DriveStyle, Ignition, VehicleEvent};
use super::info::InfoSheet;
use super::vehicle::{Drivable, Vehicle, VehicleIdentity};

/// Baseline efficiency of a car with no mileage (MPG)
const BASE_EFFICIENCY: f64 = 30.0;
/// Miles per MPG lost
const MILES_PER_MPG_LOSS: f64 = 10_000.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    identity: VehicleIdentity,
    mileage: f64,
    is_started: bool,
}

impl Car {
    /// Build a car without checking `mileage`. See [`Car::try_new`] for the
    /// validating constructor.
    pub fn new(make: impl Into<String>, model: impl Into<String>, year: i32, mileage: f64) -> Self {
        Self {
            identity: VehicleIdentity::new(make, model, year),
            mileage,
            is_started: false,
        }
    }

    /// Build a car, applying the same rule as [`Car::set_mileage`].
    pub fn try_new(
        make: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        mileage: f64,
    ) -> Result<Self, ValidationError> {
        validate_mileage(mileage)?;
        Ok(Self::new(make, model, year, mileage))
    }

    pub fn mileage(&self) -> f64 {
        self.mileage
    }

    /// Replace the odometer reading. Negative or NaN values are rejected and
    /// the previous reading is kept.
    pub fn set_mileage(&mut self, mileage: f64) -> Result<(), ValidationError> {
        if let Err(e) = validate_mileage(mileage) {
            warn!(vehicle = %self.identity, mileage, "rejected mileage update");
            return Err(e);
        }
        self.mileage = mileage;
        Ok(())
    }

    pub fn is_started(&self) -> bool {
        self.is_started
    }

    /// Mileage and efficiency rows. `efficiency` is supplied by the caller so
    /// specialised cars report their own figure.
    pub(crate) fn append_details(&self, sheet: &mut InfoSheet, efficiency: f64, kind: VehicleKind) {
        sheet.push("Mileage", format!("{}", self.mileage));
        sheet.push(
            "Efficiency",
            format!("{:.2} {}", efficiency, kind.efficiency_unit()),
        );
    }
}

fn validate_mileage(mileage: f64) -> Result<(), ValidationError> {
    if mileage.is_nan() {
        return Err(ValidationError::NonNumericMileage);
    }
    if mileage < 0.0 {
        return Err(ValidationError::NegativeMileage(mileage));
    }
    Ok(())
}

impl Vehicle for Car {
    fn identity(&self) -> &VehicleIdentity {
        &self.identity
    }

    fn kind(&self) -> VehicleKind {
        VehicleKind::Car
    }

    fn start_engine(&mut self) -> VehicleEvent {
        self.is_started = true;
        debug!(vehicle = %self.identity, "engine started");
        VehicleEvent::EngineStarted {
            ignition: Ignition::Key,
        }
    }

    /// Not clamped: very high mileage yields a negative figure.
    fn calculate_efficiency(&self) -> f64 {
        BASE_EFFICIENCY - (self.mileage / MILES_PER_MPG_LOSS)
    }

    fn display_info(&self) -> InfoSheet {
        let mut sheet = InfoSheet::for_identity(&self.identity);
        self.append_details(&mut sheet, self.calculate_efficiency(), self.kind());
        sheet
    }

    fn is_drivable(&self) -> bool {
        true
    }

    fn as_drivable_mut(&mut self) -> Option<&mut dyn Drivable> {
        Some(self)
    }
}

impl Drivable for Car {
    fn drive(&mut self) -> VehicleEvent {
        if !self.is_started {
            debug!(vehicle = %self.identity, "drive refused, engine off");
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

    fn camry() -> Car {
        Car::new("Toyota", "Camry", 2022, 15000.0)
    }

    #[test]
    fn test_efficiency_at_15000_miles() {
        assert!((camry().calculate_efficiency() - 28.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_efficiency_not_clamped() {
        let car = Car::new("Ford", "Model T", 1925, 500_000.0);
        assert!((car.calculate_efficiency() - (-20.0)).abs() < 1e-9);
    }

    #[test]
    fn test_set_mileage_accepts_non_negative() {
        let mut car = camry();
        for value in [0.0, 1.5, 20000.0, 1e9] {
            car.set_mileage(value).unwrap();
            assert_eq!(car.mileage(), value);
        }
    }

    #[test]
    fn test_set_mileage_rejects_negative_and_keeps_value() {
        let mut car = camry();
        let err = car.set_mileage(-500.0).unwrap_err();
        assert_eq!(err, ValidationError::NegativeMileage(-500.0));
        assert_eq!(car.mileage(), 15000.0);

        // repeated rejection changes nothing
        assert!(car.set_mileage(-0.01).is_err());
        assert_eq!(car.mileage(), 15000.0);
    }

    #[test]
    fn test_set_mileage_rejects_nan() {
        let mut car = camry();
        assert_eq!(
            car.set_mileage(f64::NAN),
            Err(ValidationError::NonNumericMileage)
        );
        assert_eq!(car.mileage(), 15000.0);
    }

    #[test]
    fn test_new_does_not_validate() {
        let car = Car::new("Toyota", "Camry", 2022, -100.0);
        assert_eq!(car.mileage(), -100.0);
    }

    #[test]
    fn test_try_new_validates() {
        assert_eq!(
            Car::try_new("Toyota", "Camry", 2022, -100.0),
            Err(ValidationError::NegativeMileage(-100.0))
        );
        let car = Car::try_new("Toyota", "Camry", 2022, 0.0).unwrap();
        assert_eq!(car.mileage(), 0.0);
    }

    #[test]
    fn test_drive_before_start_is_refused() {
        let mut car = camry();
        let event = car.drive();
        assert_eq!(
            event,
            VehicleEvent::DriveRefused {
                reason: DriveRefusal::EngineOff
            }
        );
        assert!(!car.is_started());
        assert_eq!(car.mileage(), 15000.0);
    }

    #[test]
    fn test_drive_after_start() {
        let mut car = camry();
        assert!(car.start_engine().is_success());
        assert!(car.is_started());
        let event = car.drive();
        assert_eq!(event.to_string(), "Driving smoothly");
        assert_eq!(car.mileage(), 15000.0);
    }

    #[test]
    fn test_display_info() {
        let sheet = camry().display_info();
        assert_eq!(sheet.position("Vehicle"), Some(0));
        assert_eq!(sheet.get("Vehicle"), Some("2022 Toyota Camry"));
        assert_eq!(sheet.get("Mileage"), Some("15000"));
        assert_eq!(sheet.get("Efficiency"), Some("28.50 MPG"));
    }
}
