//! Closed set of vehicle variants

use garage_types::VehicleKind;

use super::car::Car;
use super::electric_car::ElectricCar;
use super::event::VehicleEvent;
use super::info::InfoSheet;
use super::motorcycle::Motorcycle;
use super::vehicle::{Drivable, Vehicle, VehicleIdentity};

/// Any concrete vehicle. Dispatches the [`Vehicle`] contract to the wrapped
/// variant and offers explicit downcasts.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyVehicle {
    Car(Car),
    ElectricCar(ElectricCar),
    Motorcycle(Motorcycle),
}

impl AnyVehicle {
    fn inner(&self) -> &dyn Vehicle {
        match self {
            AnyVehicle::Car(v) => v,
            AnyVehicle::ElectricCar(v) => v,
            AnyVehicle::Motorcycle(v) => v,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Vehicle {
        match self {
            AnyVehicle::Car(v) => v,
            AnyVehicle::ElectricCar(v) => v,
            AnyVehicle::Motorcycle(v) => v,
        }
    }

    pub fn as_car(&self) -> Option<&Car> {
        match self {
            AnyVehicle::Car(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_car_mut(&mut self) -> Option<&mut Car> {
        match self {
            AnyVehicle::Car(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_electric_car(&self) -> Option<&ElectricCar> {
        match self {
            AnyVehicle::ElectricCar(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_electric_car_mut(&mut self) -> Option<&mut ElectricCar> {
        match self {
            AnyVehicle::ElectricCar(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_motorcycle(&self) -> Option<&Motorcycle> {
        match self {
            AnyVehicle::Motorcycle(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_motorcycle_mut(&mut self) -> Option<&mut Motorcycle> {
        match self {
            AnyVehicle::Motorcycle(v) => Some(v),
            _ => None,
        }
    }
}

impl Vehicle for AnyVehicle {
    fn identity(&self) -> &VehicleIdentity {
        self.inner().identity()
    }

    fn kind(&self) -> VehicleKind {
        self.inner().kind()
    }

    fn start_engine(&mut self) -> VehicleEvent {
        self.inner_mut().start_engine()
    }

    fn calculate_efficiency(&self) -> f64 {
        self.inner().calculate_efficiency()
    }

    fn display_info(&self) -> InfoSheet {
        self.inner().display_info()
    }

    fn is_drivable(&self) -> bool {
        self.inner().is_drivable()
    }

    fn as_drivable_mut(&mut self) -> Option<&mut dyn Drivable> {
        self.inner_mut().as_drivable_mut()
    }
}

impl From<Car> for AnyVehicle {
    fn from(v: Car) -> Self {
        AnyVehicle::Car(v)
    }
}

impl From<ElectricCar> for AnyVehicle {
    fn from(v: ElectricCar) -> Self {
        AnyVehicle::ElectricCar(v)
    }
}

impl From<Motorcycle> for AnyVehicle {
    fn from(v: Motorcycle) -> Self {
        AnyVehicle::Motorcycle(v)
    }
}
