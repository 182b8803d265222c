use thiserror::Error;

pub mod adapter;
use adapter::{std_io::IoError, toml::TomlError};

#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MissionError {
    #[error("Fact error: {0}")]
    Fact(#[from] FactError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

#[non_exhaustive]
#[derive(Error, Debug, Copy, Clone, PartialEq)]
pub enum FactError {
    #[error("The value is not a finite number.")]
    NotFinite,
    #[error("The value {value} is below the minimum of {min}.")]
    BelowMin { value: f64, min: f64 },
    #[error("The value {value} is above the maximum of {max}.")]
    AboveMax { value: f64, max: f64 },
    #[error("The fact does not hold a numeric value type.")]
    TypeMismatch,
}

#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unable to read configuration file: {0}")]
    Io(#[from] IoError),
    #[error("Unable to parse configuration: {0}")]
    Parse(#[from] TomlError),
    #[error("No metadata for fact named <{0}>.")]
    MissingFact(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(error: std::io::Error) -> Self {
        ConfigError::Io(error.into())
    }
}

impl From<::toml::de::Error> for ConfigError {
    fn from(error: ::toml::de::Error) -> Self {
        ConfigError::Parse(error.into())
    }
}
