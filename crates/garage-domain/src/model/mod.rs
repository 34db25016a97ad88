//! Domain model types

pub mod any_vehicle;
pub mod car;
pub mod electric_car;
pub mod event;
pub mod info;
pub mod motorcycle;
pub mod spec;
pub mod vehicle;

pub use any_vehicle::AnyVehicle;
pub use car::Car;
pub use electric_car::{ElectricCar, DRIVE_DRAIN};
pub use event::{DriveRefusal, DriveStyle, Ignition, StartRefusal, VehicleEvent};
pub use info::{InfoRow, InfoSheet};
pub use motorcycle::{Motorcycle, MOTORCYCLE_EFFICIENCY};
pub use spec::VehicleSpec;
pub use vehicle::{Drivable, Vehicle, VehicleIdentity};
