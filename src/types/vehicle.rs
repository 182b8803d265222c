use mavio::dialects::minimal::enums::MavType;
use serde::{Deserialize, Serialize};

/// Default mission speeds of a vehicle [m/s]
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FlightSpeedInfo {
    /// Horizontal speed used by multi-rotors
    pub hover: f64,
    /// Air speed used by fixed-wing vehicles
    pub cruise: f64,
}

/// What the mission editor needs to know about the vehicle it edits for.
pub trait VehicleCapability {
    fn is_multi_rotor(&self) -> bool;
    fn is_fixed_wing(&self) -> bool;
    fn mission_flight_speed_info(&self) -> FlightSpeedInfo;

    fn class(&self) -> VehicleClass {
        if self.is_multi_rotor() {
            VehicleClass::MultiRotor
        } else if self.is_fixed_wing() {
            VehicleClass::FixedWing
        } else {
            VehicleClass::Other
        }
    }
}

/// Coarse vehicle category, deciding how speeds are interpreted.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum VehicleClass {
    MultiRotor,
    FixedWing,
    Other,
}

impl VehicleClass {
    pub fn from_mav_type(mav_type: MavType) -> Self {
        match mav_type {
            MavType::Quadrotor
            | MavType::Hexarotor
            | MavType::Octorotor
            | MavType::Tricopter
            | MavType::Coaxial
            | MavType::Helicopter => VehicleClass::MultiRotor,
            MavType::FixedWing => VehicleClass::FixedWing,
            _ => VehicleClass::Other,
        }
    }

    /// The speed a mission starts out with for this class of vehicle.
    pub fn default_flight_speed(&self, info: FlightSpeedInfo) -> f64 {
        match self {
            VehicleClass::MultiRotor => info.hover,
            VehicleClass::FixedWing => info.cruise,
            VehicleClass::Other => 0.0,
        }
    }

    /// Whether mission speed settings apply to this class of vehicle.
    pub fn supports_flight_speed(&self) -> bool {
        !matches!(self, VehicleClass::Other)
    }
}

/// Vehicle description built from its MAVLink type.
#[derive(Debug, Clone, Copy)]
pub struct VehicleInfo {
    pub mav_type: MavType,
    pub speeds: FlightSpeedInfo,
}

impl VehicleInfo {
    pub fn new(mav_type: MavType, speeds: FlightSpeedInfo) -> Self {
        VehicleInfo { mav_type, speeds }
    }
}

impl VehicleCapability for VehicleInfo {
    fn is_multi_rotor(&self) -> bool {
        VehicleClass::from_mav_type(self.mav_type) == VehicleClass::MultiRotor
    }

    fn is_fixed_wing(&self) -> bool {
        VehicleClass::from_mav_type(self.mav_type) == VehicleClass::FixedWing
    }

    fn mission_flight_speed_info(&self) -> FlightSpeedInfo {
        self.speeds
    }
}
