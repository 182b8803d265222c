use crate::types::mission_item::{MissionItem, VisualItem};

use super::Section;

/// The ordered set of sections making up the mission settings.
///
/// Sections write their items in the order they were added, and are
/// given the chance to recognize them again in that same order.
#[derive(Default)]
pub struct MissionSettings {
    sections: Vec<Box<dyn Section>>,
}

impl MissionSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_section(&mut self, section: impl Section + 'static) -> &mut Self {
        self.sections.push(Box::new(section));
        self
    }

    pub fn sections(&self) -> &[Box<dyn Section>] {
        &self.sections
    }

    pub fn sections_mut(&mut self) -> &mut [Box<dyn Section>] {
        &mut self.sections
    }

    pub fn set_available(&mut self, available: bool) {
        self.sections
            .iter_mut()
            .for_each(|section| section.set_available(available));
    }

    pub fn dirty(&self) -> bool {
        self.sections.iter().any(|section| section.dirty())
    }

    pub fn set_dirty(&mut self, dirty: bool) {
        self.sections
            .iter_mut()
            .for_each(|section| section.set_dirty(dirty));
    }

    pub fn settings_specified(&self) -> bool {
        self.sections
            .iter()
            .any(|section| section.settings_specified())
    }

    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|section| section.item_count()).sum()
    }

    pub fn append_section_items(&self, items: &mut Vec<MissionItem>, seq_num: &mut u16) {
        for section in self.sections.iter() {
            section.append_section_items(items, seq_num);
        }
    }

    /// Let every section scan once at the cursor, in order. Returns `true`
    /// if any of them consumed items.
    pub fn scan_for_sections(
        &mut self,
        visual_items: &mut Vec<VisualItem>,
        scan_index: &mut usize,
    ) -> bool {
        let mut found = false;
        for section in self.sections.iter_mut() {
            found |= section.scan_for_section(visual_items, scan_index);
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use mavio::dialects::{
        common::enums::{MavCmd, MavFrame},
        minimal::enums::MavType,
    };

    use super::*;
    use crate::{
        config::MetaDataMap,
        sections::speed::SpeedSection,
        types::vehicle::{FlightSpeedInfo, VehicleInfo},
    };

    fn speed_section(mav_type: MavType) -> SpeedSection {
        let meta_data = MetaDataMap::builtin().unwrap();
        let speeds = FlightSpeedInfo {
            hover: 4.0,
            cruise: 16.0,
        };
        let vehicle = VehicleInfo::new(mav_type, speeds);
        SpeedSection::from_meta_data_map(&vehicle, &meta_data).unwrap()
    }

    fn takeoff() -> MissionItem {
        MissionItem::new(
            0,
            MavCmd::NavTakeoff,
            MavFrame::GlobalRelativeAlt,
            [0.0, 0.0, 0.0, 0.0, 47.39, 8.54, 20.0],
            true,
            false,
        )
    }

    #[test]
    fn empty_settings() {
        let settings = MissionSettings::new();
        assert_eq!(settings.item_count(), 0);
        assert!(!settings.dirty());
        assert!(!settings.settings_specified());
    }

    #[test]
    fn nothing_specified() {
        let mut settings = MissionSettings::new();
        settings.add_section(speed_section(MavType::FixedWing));
        settings.set_available(true);
        assert!(settings.sections()[0].available());

        let mut items = Vec::new();
        let mut seq_num = 1;
        settings.append_section_items(&mut items, &mut seq_num);
        assert!(items.is_empty());
        assert_eq!(seq_num, 1);

        let mut visual_items: Vec<VisualItem> = vec![takeoff().into()];
        let mut scan_index = 0;
        assert!(!settings.scan_for_sections(&mut visual_items, &mut scan_index));
        assert_eq!(scan_index, 0);
    }

    #[test]
    fn append_and_scan() {
        let mut speed = speed_section(MavType::FixedWing);
        speed.set_specify_flight_speed(true);

        let mut writer = MissionSettings::new();
        writer.add_section(speed);
        assert_eq!(writer.item_count(), 1);
        assert!(writer.dirty());
        assert!(writer.settings_specified());

        let mut items = Vec::new();
        let mut seq_num = 1;
        writer.append_section_items(&mut items, &mut seq_num);
        assert_eq!(seq_num, 2);
        assert_eq!(items[0].param2(), 16.0);

        let mut visual_items: Vec<VisualItem> = items.into_iter().map(Into::into).collect();
        visual_items.push(takeoff().into());

        let mut reader = MissionSettings::new();
        reader.add_section(speed_section(MavType::FixedWing));

        // Unavailable sections never match
        let mut scan_index = 0;
        assert!(!reader.scan_for_sections(&mut visual_items, &mut scan_index));

        reader.set_available(true);
        assert!(reader.scan_for_sections(&mut visual_items, &mut scan_index));
        assert_eq!(scan_index, 1);
        assert_eq!(visual_items.len(), 1);
        assert_eq!(reader.item_count(), 1);
        assert!(reader.settings_specified());

        reader.set_dirty(false);
        assert!(!reader.dirty());
    }
}
