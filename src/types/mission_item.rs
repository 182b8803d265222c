use mavio::dialects::common::enums::{MavCmd, MavFrame};

use crate::consts::NUM_PARAMS;

/// A single MAVLink mission command, with its parameters kept in double precision.
#[derive(Debug, Clone)]
pub struct MissionItem {
    pub seq: u16,
    pub command: MavCmd,
    pub frame: MavFrame,
    pub params: [f64; NUM_PARAMS],
    pub auto_continue: bool,
    pub is_current: bool,
}

macro_rules! impl_param_getters {
    ($($entry:ident => $idx:literal)+) => {
        impl MissionItem {
            $(
                pub fn $entry(&self) -> f64 {
                    self.params[$idx]
                }
            )+
        }
    };
}

impl_param_getters!(
    param1 => 0
    param2 => 1
    param3 => 2
    param4 => 3
    param5 => 4
    param6 => 5
    param7 => 6
);

impl MissionItem {
    pub fn new(
        seq: u16,
        command: MavCmd,
        frame: MavFrame,
        params: [f64; NUM_PARAMS],
        auto_continue: bool,
        is_current: bool,
    ) -> Self {
        MissionItem {
            seq,
            command,
            frame,
            params,
            auto_continue,
            is_current,
        }
    }
}

// The MAVLink enums carry no `PartialEq`, so compare their discriminants
impl PartialEq for MissionItem {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
            && self.command as u32 == other.command as u32
            && self.frame as u32 == other.frame as u32
            && self.params == other.params
            && self.auto_continue == other.auto_continue
            && self.is_current == other.is_current
    }
}

/// A visual item holding exactly one mission item.
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleMissionItem {
    mission_item: MissionItem,
}

impl SimpleMissionItem {
    pub fn new(mission_item: MissionItem) -> Self {
        SimpleMissionItem { mission_item }
    }

    pub fn mission_item(&self) -> &MissionItem {
        &self.mission_item
    }

    pub fn mission_item_mut(&mut self) -> &mut MissionItem {
        &mut self.mission_item
    }

    pub fn into_mission_item(self) -> MissionItem {
        self.mission_item
    }
}

impl From<MissionItem> for SimpleMissionItem {
    fn from(mission_item: MissionItem) -> Self {
        SimpleMissionItem::new(mission_item)
    }
}

/// A structured item (survey, corridor scan, ...) which expands into
/// several mission items.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexItem {
    pub name: String,
    pub mission_items: Vec<MissionItem>,
}

/// An entry of the mission editor's item list.
#[derive(Debug, Clone, PartialEq)]
pub enum VisualItem {
    Simple(SimpleMissionItem),
    Complex(ComplexItem),
}

impl VisualItem {
    pub fn as_simple(&self) -> Option<&SimpleMissionItem> {
        match self {
            VisualItem::Simple(item) => Some(item),
            VisualItem::Complex(_) => None,
        }
    }

    /// Number of mission items this visual item expands into.
    pub fn mission_item_count(&self) -> usize {
        match self {
            VisualItem::Simple(_) => 1,
            VisualItem::Complex(item) => item.mission_items.len(),
        }
    }
}

impl From<MissionItem> for VisualItem {
    fn from(mission_item: MissionItem) -> Self {
        VisualItem::Simple(mission_item.into())
    }
}

impl From<ComplexItem> for VisualItem {
    fn from(item: ComplexItem) -> Self {
        VisualItem::Complex(item)
    }
}
