//! Speed section
//!
//! Mirrors the initial flight speed of a mission. When specified, the speed
//! is written as a single `MAV_CMD_DO_CHANGE_SPEED` item:
//!
//! | param | value                                         |
//! |-------|-----------------------------------------------|
//! | 1     | `1` ground speed (multi-rotor), `0` air speed |
//! | 2     | the flight speed [m/s]                        |
//! | 3     | `-1`, no throttle change                      |
//! | 4     | `0`, absolute speed                           |
//! | 5-7   | `0`, unused                                   |
//!
//! Any change to this layout must be reflected in both
//! [`SpeedSection::append_section_items`] and [`SpeedSection::scan_for_section`].

use mavio::dialects::common::enums::{MavCmd, MavFrame};

use crate::{
    config::{FactMetaData, MetaDataMap, FLIGHT_SPEED_NAME},
    consts::{
        PARAM_UNUSED, SPEED_ABSOLUTE, SPEED_TYPE_AIRSPEED, SPEED_TYPE_GROUNDSPEED,
        THROTTLE_NO_CHANGE,
    },
    errors::{ConfigError, FactError},
    fact::Fact,
    signals::{SectionEvent, Signals},
    types::{
        mission_item::{MissionItem, VisualItem},
        vehicle::{VehicleCapability, VehicleClass},
    },
};

use super::Section;

#[derive(Debug)]
pub struct SpeedSection {
    name: &'static str,
    vehicle: VehicleClass,
    available: bool,
    dirty: bool,
    specify_flight_speed: bool,
    flight_speed: Fact,
    signals: Signals,
}

impl SpeedSection {
    /// Create a new speed section for the given vehicle. The flight speed
    /// defaults to the vehicle's hover speed for multi-rotors, its cruise
    /// speed for fixed-wing vehicles, and zero otherwise.
    pub fn new<V: VehicleCapability + ?Sized>(vehicle: &V, meta: &FactMetaData) -> Self {
        let class = vehicle.class();
        let flight_speed = class.default_flight_speed(vehicle.mission_flight_speed_info());

        SpeedSection {
            name: "speed_section",
            vehicle: class,
            available: false,
            dirty: false,
            specify_flight_speed: false,
            flight_speed: Fact::new(meta.with_default(flight_speed)),
            signals: Signals::new(),
        }
    }

    /// Create a new speed section, looking up the flight speed metadata by name.
    pub fn from_meta_data_map<V: VehicleCapability + ?Sized>(
        vehicle: &V,
        meta_data: &MetaDataMap,
    ) -> Result<Self, ConfigError> {
        let meta = meta_data.get(FLIGHT_SPEED_NAME)?;
        Ok(Self::new(vehicle, meta))
    }

    pub fn vehicle_class(&self) -> VehicleClass {
        self.vehicle
    }

    pub fn specify_flight_speed(&self) -> bool {
        self.specify_flight_speed
    }

    pub fn set_specify_flight_speed(&mut self, specify_flight_speed: bool) {
        if specify_flight_speed == self.specify_flight_speed {
            return;
        }

        debug!("[{}] Specify flight speed: {}", self.name, specify_flight_speed);
        self.specify_flight_speed = specify_flight_speed;
        self.signals
            .emit(SectionEvent::SpecifyFlightSpeedChanged(specify_flight_speed));

        self.set_dirty(true);
        self.signals
            .emit(SectionEvent::ItemCountChanged(self.item_count()));
        self.signals
            .emit(SectionEvent::SettingsSpecifiedChanged(specify_flight_speed));
    }

    pub fn flight_speed(&self) -> f64 {
        self.flight_speed.raw_value()
    }

    pub fn flight_speed_fact(&self) -> &Fact {
        &self.flight_speed
    }

    /// Set the flight speed without validation, marking the section dirty on change.
    pub fn set_flight_speed(&mut self, speed: f64) {
        if self.flight_speed.set_raw_value(speed) {
            self.flight_speed_changed();
        }
    }

    /// Set the flight speed if it is within the bounds of its metadata.
    pub fn set_flight_speed_validated(&mut self, speed: f64) -> Result<(), FactError> {
        if self.flight_speed.set_validated(speed)? {
            self.flight_speed_changed();
        }
        Ok(())
    }

    fn flight_speed_changed(&mut self) {
        self.signals
            .emit(SectionEvent::FlightSpeedChanged(self.flight_speed.raw_value()));
        self.set_dirty(true);
    }

    /// The `param1` written for, and expected from, this vehicle.
    fn speed_type(&self) -> f64 {
        match self.vehicle {
            VehicleClass::MultiRotor => SPEED_TYPE_GROUNDSPEED,
            _ => SPEED_TYPE_AIRSPEED,
        }
    }

    /// Whether the item is a change-speed command in the layout this section writes,
    /// disregarding the speed type of `param1`.
    fn is_speed_item(item: &MissionItem) -> bool {
        matches!(item.command, MavCmd::DoChangeSpeed)
            && item.param3() == THROTTLE_NO_CHANGE
            && item.param4() == SPEED_ABSOLUTE
            && item.param5() == PARAM_UNUSED
            && item.param6() == PARAM_UNUSED
            && item.param7() == PARAM_UNUSED
    }
}

impl Section for SpeedSection {
    fn available(&self) -> bool {
        self.available
    }

    fn set_available(&mut self, available: bool) {
        if available == self.available {
            return;
        }

        if available && !self.vehicle.supports_flight_speed() {
            warn!("[{}] Flight speed not supported for {:?} vehicles", self.name, self.vehicle);
            return;
        }

        debug!("[{}] Available: {}", self.name, available);
        self.available = available;
        self.signals.emit(SectionEvent::AvailableChanged(available));
    }

    fn dirty(&self) -> bool {
        self.dirty
    }

    fn set_dirty(&mut self, dirty: bool) {
        if dirty != self.dirty {
            self.dirty = dirty;
            self.signals.emit(SectionEvent::DirtyChanged(dirty));
        }
    }

    fn settings_specified(&self) -> bool {
        self.specify_flight_speed
    }

    fn item_count(&self) -> usize {
        match self.specify_flight_speed {
            true => 1,
            false => 0,
        }
    }

    fn append_section_items(&self, items: &mut Vec<MissionItem>, seq_num: &mut u16) {
        if !self.specify_flight_speed {
            return;
        }

        let Some(next_seq_num) = seq_num.checked_add(1) else {
            warn!("[{}] Sequence number {} exhausted, speed item not added", self.name, *seq_num);
            return;
        };

        items.push(MissionItem::new(
            *seq_num,
            MavCmd::DoChangeSpeed,
            MavFrame::Mission,
            [
                self.speed_type(),
                self.flight_speed.raw_value(),
                THROTTLE_NO_CHANGE,
                SPEED_ABSOLUTE,
                PARAM_UNUSED,
                PARAM_UNUSED,
                PARAM_UNUSED,
            ],
            true,
            false,
        ));
        *seq_num = next_seq_num;
    }

    fn scan_for_section(&mut self, visual_items: &mut Vec<VisualItem>, scan_index: &mut usize) -> bool {
        if !self.available || *scan_index >= visual_items.len() {
            return false;
        }

        let Some(item) = visual_items[*scan_index].as_simple() else {
            trace!("[{}] Complex item at index {}, no speed setting", self.name, scan_index);
            return false;
        };

        let mission_item = item.mission_item();
        if !Self::is_speed_item(mission_item) {
            return false;
        }

        // A speed item of the other speed type is left alone
        if self.vehicle.supports_flight_speed() && mission_item.param1() != self.speed_type() {
            trace!(
                "[{}] Speed type {} does not match {:?} vehicle",
                self.name,
                mission_item.param1(),
                self.vehicle
            );
            return false;
        }

        let speed = mission_item.param2();
        visual_items.remove(*scan_index);

        info!("[{}] Found flight speed of {} m/s at index {}", self.name, speed, scan_index);
        self.set_flight_speed(speed);
        self.set_specify_flight_speed(true);
        *scan_index += 1;
        true
    }

    fn signals_mut(&mut self) -> &mut Signals {
        &mut self.signals
    }
}
