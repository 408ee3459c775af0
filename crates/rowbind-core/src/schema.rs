//! Field descriptors derived from a record's `#[column]` annotations.

mod field;
pub use field::{Field, FieldDef};

mod fields;
pub use fields::Fields;

mod tag;
pub use tag::Tag;
