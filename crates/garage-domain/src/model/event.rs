//! Observable outcomes of engine and drive operations

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Ignition {
    Key,
    Silent,
    KickStart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StartRefusal {
    BatteryDead,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DriveStyle {
    Smooth,
    Quiet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DriveRefusal {
    EngineOff,
    BatteryDepleted,
}

/// What happened when a vehicle was started or driven.
///
/// Refusals are ordinary outcomes, not errors.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum VehicleEvent {
    EngineStarted {
        ignition: Ignition,
    },
    EngineStartRefused {
        reason: StartRefusal,
    },
    Drove {
        style: DriveStyle,
        /// Remaining charge after the trip, electric vehicles only
        #[serde(skip_serializing_if = "Option::is_none")]
        battery_level: Option<f64>,
    },
    DriveRefused {
        reason: DriveRefusal,
    },
}

impl VehicleEvent {
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            VehicleEvent::EngineStarted { .. } | VehicleEvent::Drove { .. }
        )
    }
}

impl std::fmt::Display for VehicleEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VehicleEvent::EngineStarted { ignition } => match ignition {
                Ignition::Key => write!(f, "Engine started with a turn of the key"),
                Ignition::Silent => write!(f, "Electric motor powered on silently"),
                Ignition::KickStart => write!(f, "Engine kick-started"),
            },
            VehicleEvent::EngineStartRefused { reason } => match reason {
                StartRefusal::BatteryDead => write!(f, "Cannot start: battery is dead"),
            },
            VehicleEvent::Drove { style, battery_level } => {
                match style {
                    DriveStyle::Smooth => write!(f, "Driving smoothly")?,
                    DriveStyle::Quiet => write!(f, "Driving quietly")?,
                }
                if let Some(level) = battery_level {
                    write!(f, " (battery at {}%)", level)?;
                }
                Ok(())
            }
            VehicleEvent::DriveRefused { reason } => match reason {
                DriveRefusal::EngineOff => write!(f, "Start the engine first"),
                DriveRefusal::BatteryDepleted => write!(f, "Cannot drive: battery depleted"),
            },
        }
    }
}
