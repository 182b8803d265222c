/// `MAV_CMD_DO_CHANGE_SPEED` param1: the speed is a ground speed
pub const SPEED_TYPE_GROUNDSPEED: f64 = 1.0;

/// `MAV_CMD_DO_CHANGE_SPEED` param1: the speed is an air speed
pub const SPEED_TYPE_AIRSPEED: f64 = 0.0;

/// `MAV_CMD_DO_CHANGE_SPEED` param3: leave the throttle unchanged
pub const THROTTLE_NO_CHANGE: f64 = -1.0;

/// `MAV_CMD_DO_CHANGE_SPEED` param4: the speed is absolute, not relative
pub const SPEED_ABSOLUTE: f64 = 0.0;

/// Unused trailing parameter (param5 to param7)
pub const PARAM_UNUSED: f64 = 0.0;

/// Number of parameters carried by a mission item
pub const NUM_PARAMS: usize = 7;

/// Scaling of latitude and longitude in integer mission items [degE7]
pub const DEG_E7: f64 = 1e7;
