use crate::stmt::Type;

/// Compile-time description of one mapped field, emitted by
/// `#[derive(Record)]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    /// The Rust field identifier
    pub name: &'static str,

    /// The raw `#[column("...")]` annotation, if it had an argument
    pub tag: Option<&'static str>,

    /// Set by the `#[key]` shorthand attribute
    pub primary_key: bool,

    /// Set by the `#[auto]` shorthand attribute
    pub auto: bool,

    pub ty: Type,

    /// `true` when the field is an `Option<T>`
    pub nullable: bool,
}

/// A resolved field descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Position of the field in the record's accessor table
    pub index: usize,

    /// The Rust field identifier
    pub name: &'static str,

    /// The database column, used verbatim in SQL
    pub column: String,

    pub primary_key: bool,

    /// Generated by the database; never written on insert or update
    pub auto: bool,

    pub ty: Type,

    pub nullable: bool,
}

impl FieldDef {
    pub const fn new(name: &'static str, ty: Type) -> FieldDef {
        FieldDef {
            name,
            tag: None,
            primary_key: false,
            auto: false,
            ty,
            nullable: false,
        }
    }

    pub const fn tag(mut self, tag: &'static str) -> FieldDef {
        self.tag = Some(tag);
        self
    }

    pub const fn primary_key(mut self) -> FieldDef {
        self.primary_key = true;
        self
    }

    pub const fn auto(mut self) -> FieldDef {
        self.auto = true;
        self
    }

    pub const fn nullable(mut self, nullable: bool) -> FieldDef {
        self.nullable = nullable;
        self
    }
}
