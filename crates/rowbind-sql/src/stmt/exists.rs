use super::{Expr, Statement};

/// `SELECT COUNT(*) > 0 FROM <table> WHERE ...`
#[derive(Debug, Clone, PartialEq)]
pub struct Exists {
    pub table: String,
    pub filter: Option<Expr>,
}

impl Exists {
    pub fn new(table: impl Into<String>, filter: Option<Expr>) -> Exists {
        Exists {
            table: table.into(),
            filter,
        }
    }
}

impl From<Exists> for Statement {
    fn from(value: Exists) -> Self {
        Self::Exists(value)
    }
}
