//! Conversion between mission items and MAVLink mission protocol messages.

mod mission;

pub use mission::{is_global_frame, mission_from_items, visual_items_from_mission};
