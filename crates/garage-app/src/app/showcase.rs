//! The demonstration scenario
//!
//! Every observable effect is recorded as a [`Step`] so callers decide how to
//! render it (table text or JSON).

use garage_domain::model::{AnyVehicle, Car, Drivable, InfoSheet, Vehicle, VehicleEvent};
use serde::Serialize;
use tracing::{info, warn};

use crate::fleet::default_fleet;

/// One recorded observation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    Accessors {
        make: String,
        model: String,
        year: i32,
    },
    Info {
        vehicle: String,
        info: InfoSheet,
    },
    Event {
        vehicle: String,
        event: VehicleEvent,
    },
    Efficiency {
        vehicle: String,
        value: f64,
        unit: String,
    },
    /// A rejected assignment that was caught and reported
    Rejected {
        vehicle: String,
        attempted: f64,
        /// Value still in place after the rejection
        kept: f64,
        error: String,
    },
    NotDrivable {
        vehicle: String,
    },
}

impl Step {
    fn info<V: Vehicle + ?Sized>(vehicle: &V) -> Self {
        Step::Info {
            vehicle: vehicle.identity().describe(),
            info: vehicle.display_info(),
        }
    }

    fn event<V: Vehicle + ?Sized>(vehicle: &V, event: VehicleEvent) -> Self {
        Step::Event {
            vehicle: vehicle.identity().describe(),
            event,
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::Accessors { make, model, year } => {
                write!(f, "Make: {}, Model: {}, Year: {}", make, model, year)
            }
            Step::Info { info, .. } => {
                let text = info.to_string();
                for (i, line) in text.lines().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "  {}", line)?;
                }
                Ok(())
            }
            Step::Event { vehicle, event } => write!(f, "{}: {}", vehicle, event),
            Step::Efficiency {
                vehicle,
                value,
                unit,
            } => write!(f, "{}: efficiency {:.2} {}", vehicle, value, unit),
            Step::Rejected {
                vehicle,
                attempted,
                kept,
                error,
            } => write!(
                f,
                "{}: could not set mileage to {}: {} (mileage remains {})",
                vehicle, attempted, error, kept
            ),
            Step::NotDrivable { vehicle } => write!(f, "{}: cannot be driven", vehicle),
        }
    }
}

/// A titled group of steps
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub title: String,
    pub steps: Vec<Step>,
}

impl Section {
    fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            steps: Vec::new(),
        }
    }
}

/// Full record of a showcase run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Transcript {
    pub sections: Vec<Section>,
}

impl Transcript {
    pub fn steps(&self) -> impl Iterator<Item = &Step> {
        self.sections.iter().flat_map(|s| s.steps.iter())
    }
}

/// Run the full demonstration: encapsulation, polymorphic tour, then the
/// electric car handled through its concrete type.
pub fn run_showcase() -> Transcript {
    let mut transcript = Transcript::default();

    transcript.sections.push(encapsulation_section());

    let mut fleet = default_fleet();
    transcript
        .sections
        .push(tour_fleet("Polymorphism", &mut fleet));

    if let Some(section) = electric_section(&mut fleet) {
        transcript.sections.push(section);
    }

    info!(sections = transcript.sections.len(), "showcase finished");
    transcript
}

fn encapsulation_section() -> Section {
    let mut section = Section::new("Encapsulation");
    let mut car = Car::new("Toyota", "Camry", 2022, 15000.0);

    section.steps.push(Step::Accessors {
        make: car.make().to_string(),
        model: car.model().to_string(),
        year: car.year(),
    });
    section.steps.push(Step::info(&car));

    let attempted = -500.0;
    if let Err(e) = car.set_mileage(attempted) {
        warn!(error = %e, "mileage update rejected, continuing");
        section.steps.push(Step::Rejected {
            vehicle: car.identity().describe(),
            attempted,
            kept: car.mileage(),
            error: e.to_string(),
        });
    }
    section
}

/// Display, start, drive (when the vehicle supports it) and report efficiency
/// for every vehicle, through the shared contract only.
pub fn tour_fleet(title: &str, fleet: &mut [AnyVehicle]) -> Section {
    let mut section = Section::new(title);
    for vehicle in fleet.iter_mut() {
        section.steps.push(Step::info(&*vehicle));

        let started = vehicle.start_engine();
        section.steps.push(Step::event(&*vehicle, started));

        let name = vehicle.identity().describe();
        match vehicle.as_drivable_mut() {
            Some(drivable) => {
                let event = drivable.drive();
                section.steps.push(Step::Event {
                    vehicle: name.clone(),
                    event,
                });
            }
            None => section.steps.push(Step::NotDrivable {
                vehicle: name.clone(),
            }),
        }

        section.steps.push(Step::Efficiency {
            vehicle: name,
            value: vehicle.calculate_efficiency(),
            unit: vehicle.kind().efficiency_unit().to_string(),
        });
    }
    section
}

fn electric_section(fleet: &mut [AnyVehicle]) -> Option<Section> {
    let tesla = fleet.iter_mut().find_map(|v| v.as_electric_car_mut())?;
    let mut section = Section::new("Electric car specifics");

    section.steps.push(Step::info(&*tesla));
    for _ in 0..2 {
        let event = tesla.drive();
        section.steps.push(Step::event(&*tesla, event));
    }
    section.steps.push(Step::info(&*tesla));
    Some(section)
}
