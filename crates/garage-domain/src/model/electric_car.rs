//! Battery electric car, built on top of [`Car`]

use garage_types::{ValidationError, VehicleKind};
use tracing::debug;

use super::car::Car;
use super::event::{DriveRefusal, DriveStyle, Ignition, StartRefusal, VehicleEvent};
use super::info::InfoSheet;
use super::vehicle::{Drivable, Vehicle, VehicleIdentity};

/// Battery units consumed by one successful drive
pub const DRIVE_DRAIN: f64 = 5.0;

/// Range (miles) that maps to 100 MPGe
const RANGE_PER_100_MPGE: f64 = 75.0;

/// Electric car.
///
/// Starting and driving depend only on the battery level; there is no
/// started flag. The level is not floored, so the last successful drive can
/// leave it below zero.
#[derive(Debug, Clone, PartialEq)]
pub struct ElectricCar {
    car: Car,
    battery_level: f64,
    range: f64,
}

impl ElectricCar {
    pub fn new(
        make: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        mileage: f64,
        battery_level: f64,
        range: f64,
    ) -> Self {
        Self {
            car: Car::new(make, model, year, mileage),
            battery_level,
            range,
        }
    }

    /// Like [`ElectricCar::new`] but rejects an invalid initial mileage.
    pub fn try_new(
        make: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        mileage: f64,
        battery_level: f64,
        range: f64,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            car: Car::try_new(make, model, year, mileage)?,
            battery_level,
            range,
        })
    }

    pub fn battery_level(&self) -> f64 {
        self.battery_level
    }

    pub fn range(&self) -> f64 {
        self.range
    }

    pub fn mileage(&self) -> f64 {
        self.car.mileage()
    }

    pub fn set_mileage(&mut self, mileage: f64) -> Result<(), ValidationError> {
        self.car.set_mileage(mileage)
    }

    /// The embedded car state
    pub fn as_car(&self) -> &Car {
        &self.car
    }

    fn has_charge(&self) -> bool {
        self.battery_level > 0.0
    }
}

impl Vehicle for ElectricCar {
    fn identity(&self) -> &VehicleIdentity {
        self.car.identity()
    }

    fn kind(&self) -> VehicleKind {
        VehicleKind::ElectricCar
    }

    fn start_engine(&mut self) -> VehicleEvent {
        if self.has_charge() {
            debug!(vehicle = %self.identity(), battery = self.battery_level, "motor powered on");
            VehicleEvent::EngineStarted {
                ignition: Ignition::Silent,
            }
        } else {
            debug!(vehicle = %self.identity(), battery = self.battery_level, "start refused, battery dead");
            VehicleEvent::EngineStartRefused {
                reason: StartRefusal::BatteryDead,
            }
        }
    }

    /// Depends on range only.
    fn calculate_efficiency(&self) -> f64 {
        (self.range / RANGE_PER_100_MPGE) * 100.0
    }

    fn display_info(&self) -> InfoSheet {
        let mut sheet = InfoSheet::for_identity(self.identity());
        self.car
            .append_details(&mut sheet, self.calculate_efficiency(), self.kind());
        sheet.push("Battery", format!("{}%", self.battery_level));
        sheet.push("Range", format!("{} miles", self.range));
        sheet
    }

    fn is_drivable(&self) -> bool {
        true
    }

    fn as_drivable_mut(&mut self) -> Option<&mut dyn Drivable> {
        Some(self)
    }
}

impl Drivable for ElectricCar {
    fn drive(&mut self) -> VehicleEvent {
        if !self.has_charge() {
            debug!(vehicle = %self.identity(), "drive refused, battery depleted");
            return VehicleEvent::DriveRefused {
                reason: DriveRefusal::BatteryDepleted,
            };
        }
        self.battery_level -= DRIVE_DRAIN;
        debug!(vehicle = %self.identity(), battery = self.battery_level, "drove");
        VehicleEvent::Drove {
            style: DriveStyle::Quiet,
            battery_level: Some(self.battery_level),
        }
    }
}
