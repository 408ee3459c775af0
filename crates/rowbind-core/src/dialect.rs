use std::{fmt, str::FromStr};

/// The SQL conventions of the target database.
///
/// The dialect decides the placeholder style used for statement parameters
/// and how auto-generated keys are read back after an insert.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// MySQL-like databases. Placeholders are `?`.
    ///
    /// No driver ships for this dialect; the caller provides the
    /// `Connection`.
    #[default]
    Mysql,

    /// PostgreSQL. Placeholders are `$1`, `$2`, ...
    Postgresql,

    /// SQLite. Placeholders are `?1`, `?2`, ...
    Sqlite,
}

/// How the value of an auto-generated column is obtained after an insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertStrategy {
    /// Execute the insert, then read the id the driver reports.
    LastInsertId,

    /// Append `RETURNING` with every column and refresh the record from the
    /// returned row.
    Returning,
}

impl Dialect {
    pub fn insert_strategy(self) -> InsertStrategy {
        match self {
            Dialect::Postgresql => InsertStrategy::Returning,
            Dialect::Mysql | Dialect::Sqlite => InsertStrategy::LastInsertId,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Dialect::Mysql => "mysql",
            Dialect::Postgresql => "postgresql",
            Dialect::Sqlite => "sqlite",
        }
    }
}

impl FromStr for Dialect {
    type Err = std::convert::Infallible;

    /// Unrecognized names select [`Dialect::Mysql`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Dialect::from(s))
    }
}

impl From<&str> for Dialect {
    fn from(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Dialect::Postgresql,
            "sqlite" | "sqlite3" => Dialect::Sqlite,
            _ => Dialect::Mysql,
        }
    }
}

impl From<String> for Dialect {
    fn from(s: String) -> Self {
        Dialect::from(&s[..])
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
