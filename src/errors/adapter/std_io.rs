use thiserror::Error;

/// Reduced form of [`std::io::Error`], which is comparable and clonable
#[non_exhaustive]
#[derive(Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum IoError {
    #[error("The file could not be found")]
    NotFound,
    #[error("Permission to access the file was denied")]
    PermissionDenied,
    #[error("The file contents were not valid UTF-8")]
    InvalidData,
    #[error("Reading ended before the file was complete")]
    UnexpectedEof,
    #[error("Some other IO error occured")]
    Other,
}

impl From<std::io::Error> for IoError {
    fn from(value: std::io::Error) -> Self {
        use std::io::ErrorKind;
        match value.kind() {
            ErrorKind::NotFound => Self::NotFound,
            ErrorKind::PermissionDenied => Self::PermissionDenied,
            ErrorKind::InvalidData => Self::InvalidData,
            ErrorKind::UnexpectedEof => Self::UnexpectedEof,
            _ => Self::Other,
        }
    }
}
