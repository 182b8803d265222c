use mavio::dialects::common::{
    enums::{MavFrame, MavMissionType},
    messages::MissionItemInt,
};

use crate::{
    consts::DEG_E7,
    types::mission_item::{MissionItem, VisualItem},
};

/// Frames in which `x` and `y` carry latitude and longitude in degE7.
pub fn is_global_frame(frame: MavFrame) -> bool {
    matches!(
        frame,
        MavFrame::Global
            | MavFrame::GlobalRelativeAlt
            | MavFrame::GlobalTerrainAlt
            | MavFrame::GlobalInt
            | MavFrame::GlobalRelativeAltInt
            | MavFrame::GlobalTerrainAltInt
    )
}

impl MissionItem {
    /// Encode as a `MISSION_ITEM_INT` for upload to the given vehicle.
    pub fn to_mission_item_int(&self, target_system: u8, target_component: u8) -> MissionItemInt {
        let scale = match is_global_frame(self.frame) {
            true => DEG_E7,
            false => 1.0,
        };

        MissionItemInt {
            target_system,
            target_component,
            seq: self.seq,
            frame: self.frame,
            command: self.command,
            current: self.is_current as u8,
            autocontinue: self.auto_continue as u8,
            param1: self.param1() as f32,
            param2: self.param2() as f32,
            param3: self.param3() as f32,
            param4: self.param4() as f32,
            x: (self.param5() * scale).round() as i32,
            y: (self.param6() * scale).round() as i32,
            z: self.param7() as f32,
            mission_type: MavMissionType::Mission,
        }
    }
}

impl From<&MissionItemInt> for MissionItem {
    fn from(item: &MissionItemInt) -> Self {
        let scale = match is_global_frame(item.frame) {
            true => DEG_E7,
            false => 1.0,
        };

        MissionItem {
            seq: item.seq,
            command: item.command,
            frame: item.frame,
            params: [
                item.param1 as f64,
                item.param2 as f64,
                item.param3 as f64,
                item.param4 as f64,
                item.x as f64 / scale,
                item.y as f64 / scale,
                item.z as f64,
            ],
            auto_continue: item.autocontinue != 0,
            is_current: item.current != 0,
        }
    }
}

/// Encode a list of mission items for upload, in sequence order.
pub fn mission_from_items(
    items: &[MissionItem],
    target_system: u8,
    target_component: u8,
) -> Vec<MissionItemInt> {
    items
        .iter()
        .map(|item| item.to_mission_item_int(target_system, target_component))
        .collect()
}

/// Turn a downloaded mission into a list of simple visual items, ordered by
/// sequence number, ready to be scanned by the mission-settings sections.
pub fn visual_items_from_mission(mission: &[MissionItemInt]) -> Vec<VisualItem> {
    let mut items: Vec<MissionItem> = mission
        .iter()
        .filter(|item| matches!(item.mission_type, MavMissionType::Mission))
        .map(MissionItem::from)
        .collect();

    items.sort_by_key(|item| item.seq);
    debug!("Converted {} downloaded mission item(s)", items.len());
    items.into_iter().map(VisualItem::from).collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use mavio::dialects::{common::enums::MavCmd, minimal::enums::MavType};

    use super::*;
    use crate::{
        config::MetaDataMap,
        sections::{speed::SpeedSection, Section},
        types::vehicle::{FlightSpeedInfo, VehicleInfo},
    };

    fn waypoint(seq: u16) -> MissionItem {
        MissionItem::new(
            seq,
            MavCmd::NavWaypoint,
            MavFrame::GlobalRelativeAlt,
            [0.0, 2.0, 0.0, 0.0, 47.3977419, 8.5455939, 30.0],
            true,
            false,
        )
    }

    #[test]
    fn global_frames_are_scaled() {
        let item = waypoint(3).to_mission_item_int(1, 1);
        assert_eq!(item.x, 473977419);
        assert_eq!(item.y, 85455939);
        assert_eq!(item.z, 30.0);
        assert_eq!(item.seq, 3);
        assert_eq!(item.autocontinue, 1);
        assert_eq!(item.current, 0);

        let decoded = MissionItem::from(&item);
        assert_abs_diff_eq!(decoded.param5(), 47.3977419, epsilon = 1e-7);
        assert_abs_diff_eq!(decoded.param6(), 8.5455939, epsilon = 1e-7);
        assert!(matches!(decoded.command, MavCmd::NavWaypoint));
    }

    #[test]
    fn mission_frame_is_not_scaled() {
        assert!(!is_global_frame(MavFrame::Mission));

        let item = MissionItem::new(
            0,
            MavCmd::DoChangeSpeed,
            MavFrame::Mission,
            [1.0, 5.0, -1.0, 0.0, 0.0, 0.0, 0.0],
            true,
            false,
        );
        let encoded = item.to_mission_item_int(1, 1);
        assert_eq!(encoded.x, 0);
        assert_eq!(encoded.param3, -1.0);
        assert_eq!(MissionItem::from(&encoded), item);
    }

    #[test]
    fn downloaded_mission_is_scanned() {
        let meta_data = MetaDataMap::builtin().unwrap();
        let vehicle = VehicleInfo::new(
            MavType::Quadrotor,
            FlightSpeedInfo {
                hover: 5.0,
                cruise: 12.0,
            },
        );

        let mut writer = SpeedSection::from_meta_data_map(&vehicle, &meta_data).unwrap();
        writer.set_specify_flight_speed(true);
        writer.set_flight_speed(6.5);

        let mut items = Vec::new();
        let mut seq_num = 0;
        writer.append_section_items(&mut items, &mut seq_num);
        items.push(waypoint(seq_num));

        // Out of order, as it may arrive from a vehicle
        let mut mission = mission_from_items(&items, 1, 1);
        mission.reverse();

        let mut visual_items = visual_items_from_mission(&mission);
        assert_eq!(visual_items.len(), 2);

        let mut reader = SpeedSection::from_meta_data_map(&vehicle, &meta_data).unwrap();
        reader.set_available(true);

        let mut scan_index = 0;
        assert!(reader.scan_for_section(&mut visual_items, &mut scan_index));
        assert_eq!(reader.flight_speed(), 6.5);
        assert_eq!(visual_items.len(), 1);
    }
}
