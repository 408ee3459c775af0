use super::Error;

/// Error when a key-based operation runs against a record without key fields.
#[derive(Debug)]
pub(super) struct MissingPrimaryKeyError {
    table: Box<str>,
}

impl std::error::Error for MissingPrimaryKeyError {}

impl core::fmt::Display for MissingPrimaryKeyError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "table `{}` has no PRIMARY_KEY fields; key-based operations are unavailable",
            self.table
        )
    }
}

impl Error {
    /// Creates a missing primary key error.
    pub fn missing_primary_key(table: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingPrimaryKey(MissingPrimaryKeyError {
            table: table.into().into(),
        }))
    }

    /// Returns `true` if this error is a missing primary key error.
    pub fn is_missing_primary_key(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingPrimaryKey(_))
    }
}
