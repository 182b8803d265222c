use crate::{config::FactMetaData, errors::FactError};

/// A named scalar value, bounded and formatted by its [`FactMetaData`].
#[derive(Debug, Clone, PartialEq)]
pub struct Fact {
    meta: FactMetaData,
    raw_value: f64,
}

impl Fact {
    /// Create a new fact, initialized to the raw default of its metadata.
    pub fn new(meta: FactMetaData) -> Self {
        let raw_value = meta.default;
        Fact { meta, raw_value }
    }

    pub fn name(&self) -> &str {
        &self.meta.name
    }

    pub fn meta(&self) -> &FactMetaData {
        &self.meta
    }

    pub fn raw_value(&self) -> f64 {
        self.raw_value
    }

    pub fn raw_default_value(&self) -> f64 {
        self.meta.default
    }

    pub fn set_raw_default_value(&mut self, default: f64) {
        self.meta.default = default;
    }

    /// Set the raw value without validation. Returns `true` if the value
    /// actually changed.
    pub fn set_raw_value(&mut self, value: f64) -> bool {
        // Bitwise comparison, so that a NaN is not reported as a change forever
        if self.raw_value.to_bits() == value.to_bits() || self.raw_value == value {
            return false;
        }
        self.raw_value = value;
        true
    }

    /// Check a value against the bounds of the metadata.
    pub fn validate(&self, value: f64) -> Result<f64, FactError> {
        if !self.meta.value_type.is_numeric() {
            return Err(FactError::TypeMismatch);
        }

        if !value.is_finite() {
            return Err(FactError::NotFinite);
        }

        if let Some(min) = self.meta.min {
            if value < min {
                return Err(FactError::BelowMin { value, min });
            }
        }

        if let Some(max) = self.meta.max {
            if value > max {
                return Err(FactError::AboveMax { value, max });
            }
        }

        Ok(value)
    }

    /// Validate and set the value. Returns `Ok(true)` if the value changed.
    pub fn set_validated(&mut self, value: f64) -> Result<bool, FactError> {
        let value = self.validate(value)?;
        Ok(self.set_raw_value(value))
    }

    /// Returns `true` if the value changed.
    pub fn reset_to_default(&mut self) -> bool {
        self.set_raw_value(self.meta.default)
    }

    /// The value formatted with the decimal places and units of the metadata,
    /// e.g. `"5.0 m/s"`.
    pub fn cooked_string(&self) -> String {
        let decimals = self.meta.decimal_places as usize;
        match self.meta.units.is_empty() {
            true => format!("{:.*}", decimals, self.raw_value),
            false => format!("{:.*} {}", decimals, self.raw_value, self.meta.units),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ValueType;

    fn speed_meta() -> FactMetaData {
        FactMetaData {
            units: "m/s".into(),
            min: Some(0.0),
            max: Some(40.0),
            decimal_places: 1,
            default: 5.0,
            ..FactMetaData::new("FlightSpeed", ValueType::Double)
        }
    }

    #[test]
    fn starts_at_default() {
        let fact = Fact::new(speed_meta());
        assert_eq!(fact.raw_value(), 5.0);
        assert_eq!(fact.raw_default_value(), 5.0);
        assert_eq!(fact.name(), "FlightSpeed");
    }

    #[test]
    fn set_raw_value_reports_change() {
        let mut fact = Fact::new(speed_meta());
        assert!(!fact.set_raw_value(5.0));
        assert!(fact.set_raw_value(7.5));
        assert!(!fact.set_raw_value(7.5));
        assert_eq!(fact.raw_value(), 7.5);

        assert!(fact.set_raw_value(f64::NAN));
        assert!(!fact.set_raw_value(f64::NAN));
    }

    #[test]
    fn validation_bounds() {
        let fact = Fact::new(speed_meta());
        assert_eq!(fact.validate(12.0), Ok(12.0));
        assert_eq!(
            fact.validate(-1.0),
            Err(FactError::BelowMin { value: -1.0, min: 0.0 })
        );
        assert_eq!(
            fact.validate(41.0),
            Err(FactError::AboveMax { value: 41.0, max: 40.0 })
        );
        assert_eq!(fact.validate(f64::INFINITY), Err(FactError::NotFinite));
    }

    #[test]
    fn rejected_value_is_not_applied() {
        let mut fact = Fact::new(speed_meta());
        assert!(fact.set_validated(-3.0).is_err());
        assert_eq!(fact.raw_value(), 5.0);
        assert_eq!(fact.set_validated(6.0), Ok(true));
    }

    #[test]
    fn bool_fact_is_not_numeric() {
        let fact = Fact::new(FactMetaData::new("Specify", ValueType::Bool));
        assert_eq!(fact.validate(1.0), Err(FactError::TypeMismatch));
    }

    #[test]
    fn cooked_string_formatting() {
        let mut fact = Fact::new(speed_meta());
        fact.set_raw_value(4.26);
        assert_eq!(fact.cooked_string(), "4.3 m/s");

        let fact = Fact::new(FactMetaData::new("Count", ValueType::Int32));
        assert_eq!(fact.cooked_string(), "0.00");
    }

    #[test]
    fn reset() {
        let mut fact = Fact::new(speed_meta());
        fact.set_raw_value(9.0);
        assert!(fact.reset_to_default());
        assert_eq!(fact.raw_value(), 5.0);
    }
}
