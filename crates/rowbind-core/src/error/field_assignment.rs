use super::Error;

/// Error when a value returned by the database cannot be written into a
/// record field.
#[derive(Debug)]
pub(super) struct FieldAssignmentError {
    field: &'static str,
}

impl std::error::Error for FieldAssignmentError {}

impl core::fmt::Display for FieldAssignmentError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "could not set field `{}` to returned value", self.field)
    }
}

impl Error {
    /// Creates a field assignment error wrapping the conversion failure that
    /// caused it.
    pub fn field_assignment(field: &'static str, cause: Error) -> Error {
        cause.context(Error::from(super::ErrorKind::FieldAssignment(
            FieldAssignmentError { field },
        )))
    }

    /// Returns `true` if this error is a field assignment error.
    pub fn is_field_assignment(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::FieldAssignment(_))
    }
}
