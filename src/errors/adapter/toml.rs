use thiserror::Error;

/// Parse error from `toml`, keeping the message and the byte range it points at
#[derive(Error, Debug, Clone, Eq, PartialEq)]
#[error("{message}")]
pub struct TomlError {
    pub message: String,
    pub span: Option<core::ops::Range<usize>>,
}

impl From<::toml::de::Error> for TomlError {
    fn from(value: ::toml::de::Error) -> Self {
        TomlError {
            message: value.message().to_string(),
            span: value.span(),
        }
    }
}
