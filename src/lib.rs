//! Mission-settings sections for a MAVLink mission editor.
//!
//! A section mirrors one group of mission settings (such as the initial
//! flight speed) into an editable value, turns it into mission items when the
//! mission is written, and recognizes its own items again when a mission is
//! loaded back in.

// Export the logging macros for either defmt or log
#[macro_use]
mod logging;

pub mod config;
pub mod consts;
pub mod errors;
pub mod fact;
pub mod mavlink;
pub mod sections;
pub mod signals;
pub mod types;

// Re-exported for implementors
pub use mavio;

pub use sections::{settings::MissionSettings, speed::SpeedSection, Section};
pub use types::mission_item::{MissionItem, SimpleMissionItem, VisualItem};
pub use types::vehicle::{VehicleCapability, VehicleClass, VehicleInfo};
