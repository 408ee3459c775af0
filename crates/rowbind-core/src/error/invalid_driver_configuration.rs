use super::Error;

/// Error when the configured dialect asks the driver for something it cannot
/// provide.
///
/// The typical case is reading the last inserted id from a driver that only
/// supports `RETURNING`, which means the dialect does not match the database.
#[derive(Debug)]
pub(super) struct InvalidDriverConfiguration {
    message: Box<str>,
}

impl std::error::Error for InvalidDriverConfiguration {}

impl core::fmt::Display for InvalidDriverConfiguration {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid driver configuration: {}; is the dialect set correctly?",
            self.message
        )
    }
}

impl Error {
    /// Creates an invalid driver configuration error.
    pub fn invalid_driver_configuration(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidDriverConfiguration(
            InvalidDriverConfiguration {
                message: message.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an invalid driver configuration error.
    pub fn is_invalid_driver_configuration(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidDriverConfiguration(_))
    }
}
