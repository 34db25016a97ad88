//! Serializable construction records for vehicles

use garage_types::{ValidationError, VehicleKind};
use serde::{Deserialize, Serialize};

use super::any_vehicle::AnyVehicle;
use super::car::Car;
use super::electric_car::ElectricCar;
use super::motorcycle::Motorcycle;

/// Everything needed to construct one vehicle, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VehicleSpec {
    Car {
        make: String,
        model: String,
        year: i32,
        #[serde(default)]
        mileage: f64,
    },
    ElectricCar {
        make: String,
        model: String,
        year: i32,
        #[serde(default)]
        mileage: f64,
        battery_level: f64,
        range: f64,
    },
    Motorcycle {
        make: String,
        model: String,
        year: i32,
    },
}

impl VehicleSpec {
    pub fn kind(&self) -> VehicleKind {
        match self {
            VehicleSpec::Car { .. } => VehicleKind::Car,
            VehicleSpec::ElectricCar { .. } => VehicleKind::ElectricCar,
            VehicleSpec::Motorcycle { .. } => VehicleKind::Motorcycle,
        }
    }

    /// Construct the vehicle. Specs usually come from outside the program,
    /// so mileage is validated here.
    pub fn build(self) -> Result<AnyVehicle, ValidationError> {
        let vehicle = match self {
            VehicleSpec::Car {
                make,
                model,
                year,
                mileage,
            } => Car::try_new(make, model, year, mileage)?.into(),
            VehicleSpec::ElectricCar {
                make,
                model,
                year,
                mileage,
                battery_level,
                range,
            } => ElectricCar::try_new(make, model, year, mileage, battery_level, range)?.into(),
            VehicleSpec::Motorcycle { make, model, year } => {
                Motorcycle::new(make, model, year).into()
            }
        };
        Ok(vehicle)
    }
}
