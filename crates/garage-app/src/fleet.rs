//! Fleet construction: built-in demonstration fleet and JSON fleet files

use std::path::Path;

use garage_domain::model::{AnyVehicle, Car, ElectricCar, Motorcycle, VehicleSpec};
use garage_types::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

/// On-disk fleet description
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FleetFile {
    #[serde(default)]
    pub vehicles: Vec<VehicleSpec>,
}

/// The demonstration fleet: one vehicle of each kind
pub fn default_fleet() -> Vec<AnyVehicle> {
    vec![
        Car::new("Toyota", "Camry", 2022, 15000.0).into(),
        ElectricCar::new("Tesla", "Model 3", 2023, 5000.0, 85.0, 300.0).into(),
        Motorcycle::new("Harley-Davidson", "Street 750", 2021).into(),
    ]
}

/// Load and build every vehicle listed in a fleet file.
///
/// The first invalid entry aborts the load.
pub fn load_fleet(path: &Path) -> Result<Vec<AnyVehicle>> {
    if !path.exists() {
        return Err(Error::FleetLoad(format!("{} does not exist", path.display())));
    }
    let content = std::fs::read_to_string(path)?;
    let file: FleetFile = serde_json::from_str(&content)?;

    let vehicles = file
        .vehicles
        .into_iter()
        .enumerate()
        .map(|(i, spec)| {
            spec.build()
                .map_err(|e| Error::FleetLoad(format!("vehicle #{}: {}", i + 1, e)))
        })
        .collect::<Result<Vec<_>>>()?;

    info!(path = %path.display(), count = vehicles.len(), "fleet loaded");
    Ok(vehicles)
}
