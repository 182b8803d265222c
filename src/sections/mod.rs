//! Mission-settings sections.
//!
//! A section owns a small group of settings which, when specified, expand
//! into mission items at the start of a mission. When a mission is loaded,
//! each section gets to recognize and consume its own items from the item
//! list again.

use crate::{
    signals::Signals,
    types::mission_item::{MissionItem, VisualItem},
};

pub mod settings;
pub mod speed;

pub trait Section {
    /// Whether the section applies to the current vehicle.
    fn available(&self) -> bool;
    fn set_available(&mut self, available: bool);

    fn dirty(&self) -> bool;
    fn set_dirty(&mut self, dirty: bool);

    /// Whether any of the section's settings will be written to the mission.
    fn settings_specified(&self) -> bool;

    /// Number of mission items [`Section::append_section_items`] produces.
    fn item_count(&self) -> usize;

    /// Append the section's mission items, numbering them from `seq_num`
    /// which is advanced past the appended items.
    fn append_section_items(&self, items: &mut Vec<MissionItem>, seq_num: &mut u16);

    /// Try to recognize the section's items at `scan_index`. On a match the
    /// items are removed from `visual_items`, the section takes over their
    /// settings and `scan_index` is advanced. Otherwise nothing is modified.
    fn scan_for_section(&mut self, visual_items: &mut Vec<VisualItem>, scan_index: &mut usize) -> bool;

    fn signals_mut(&mut self) -> &mut Signals;
}
