use crate::{Hooks, Result};

use rowbind_core::{schema::FieldDef, stmt::Value};

/// A struct whose annotated fields map onto the columns of one table.
///
/// Implemented by `#[derive(Record)]`. The generated accessor table lets the
/// mapper read and write fields by position without runtime reflection.
///
/// ```ignore
/// #[derive(Debug, Default, rowbind::Record)]
/// struct Stool {
///     #[column("id, PRIMARY_KEY, AUTO_INCREMENT")]
///     id: i64,
///
///     #[column("number_of_legs")]
///     legs: i32,
///
///     #[column]
///     material: Option<String>,
///
///     // Not mapped
///     scratch: bool,
/// }
/// ```
pub trait Record: 'static {
    /// Mapped fields, in declaration order
    const FIELDS: &'static [FieldDef];

    /// Returns the current value of the field at `index` in [`Record::FIELDS`].
    fn field(&self, index: usize) -> Value;

    /// Stores `value` into the field at `index` in [`Record::FIELDS`].
    fn set_field(&mut self, index: usize, value: Value) -> Result<()>;

    /// Lifecycle callbacks, for records annotated with `#[hooks]`.
    fn hooks(&mut self) -> Option<&mut dyn Hooks> {
        None
    }
}
