//! Fact metadata, loaded once from TOML and handed out by reference.
//!
//! The built-in metadata lives in `res/` and is embedded at compile time.
//! Alternative files can be loaded with [`load_from_file_path`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Name of the flight speed fact within the metadata map
pub const FLIGHT_SPEED_NAME: &str = "FlightSpeed";

const BUILTIN_SPEED_SECTION: &str = include_str!("../../res/SpeedSection.FactMetaData.toml");

/// Loads a metadata map from a TOML file at the given path.
pub fn load_from_file_path(path: impl AsRef<std::path::Path>) -> Result<MetaDataMap, ConfigError> {
    let string = std::fs::read_to_string(path)?;
    let map = MetaDataMap::from_toml_str(&string)?;
    info!("Loaded metadata for {} fact(s)", map.len());
    Ok(map)
}

/// The type of value a fact holds.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    #[default]
    Double,
    Float,
    Int32,
    Uint32,
    Bool,
}

impl ValueType {
    pub fn is_numeric(&self) -> bool {
        !matches!(self, ValueType::Bool)
    }
}

/// Describes how a single fact is presented and bounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactMetaData {
    /// Filled in from the table key when loaded as part of a map.
    #[serde(skip)]
    pub name: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub value_type: ValueType,
    #[serde(default)]
    pub units: String,
    pub min: Option<f64>,
    pub max: Option<f64>,
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u8,
    #[serde(default)]
    pub default: f64,
}

fn default_decimal_places() -> u8 {
    2
}

impl FactMetaData {
    pub fn new(name: impl Into<String>, value_type: ValueType) -> Self {
        FactMetaData {
            name: name.into(),
            short_description: String::new(),
            value_type,
            units: String::new(),
            min: None,
            max: None,
            decimal_places: default_decimal_places(),
            default: 0.0,
        }
    }

    /// Copy of this metadata with another raw default value.
    pub fn with_default(&self, default: f64) -> Self {
        FactMetaData {
            default,
            ..self.clone()
        }
    }
}

/// Immutable lookup of fact metadata by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetaDataMap {
    facts: BTreeMap<String, FactMetaData>,
}

impl MetaDataMap {
    /// The metadata shipped with the crate.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_toml_str(BUILTIN_SPEED_SECTION)
    }

    pub fn from_toml_str(string: &str) -> Result<Self, ConfigError> {
        let mut facts: BTreeMap<String, FactMetaData> = toml::from_str(string)?;
        for (name, meta) in facts.iter_mut() {
            meta.name.clone_from(name);
        }
        Ok(MetaDataMap { facts })
    }

    pub fn get(&self, name: &str) -> Result<&FactMetaData, ConfigError> {
        self.facts
            .get(name)
            .ok_or_else(|| ConfigError::MissingFact(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_contains_flight_speed() {
        let map = MetaDataMap::builtin().unwrap();
        let meta = map.get(FLIGHT_SPEED_NAME).unwrap();

        assert_eq!(meta.name, FLIGHT_SPEED_NAME);
        assert_eq!(meta.value_type, ValueType::Double);
        assert_eq!(meta.units, "m/s");
        assert_eq!(meta.decimal_places, 1);
        assert_eq!(meta.min, Some(0.0));
        assert_eq!(meta.max, None);
    }

    #[test]
    fn missing_fact() {
        let map = MetaDataMap::builtin().unwrap();
        assert_eq!(
            map.get("CameraAction"),
            Err(ConfigError::MissingFact("CameraAction".into()))
        );
    }

    #[test]
    fn parse_error_is_reported() {
        let result = MetaDataMap::from_toml_str("[FlightSpeed]\nvalue_type = \"complex\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_file() {
        let result = load_from_file_path("/nonexistent/SpeedSection.FactMetaData.toml");
        assert!(matches!(
            result,
            Err(ConfigError::Io(crate::errors::adapter::std_io::IoError::NotFound))
        ));
    }

    #[test]
    fn defaults_are_filled_in() {
        let map = MetaDataMap::from_toml_str("[Altitude]\nmax = 120.0\n").unwrap();
        let meta = map.get("Altitude").unwrap();

        assert_eq!(meta.value_type, ValueType::Double);
        assert_eq!(meta.decimal_places, 2);
        assert_eq!(meta.max, Some(120.0));
        assert_eq!(meta.default, 0.0);
    }
}
