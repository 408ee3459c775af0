use super::{Expr, Statement, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub table: String,

    /// `SET` assignments, in order
    pub assignments: Vec<(String, Value)>,

    pub filter: Option<Expr>,
}

impl Update {
    pub fn new(table: impl Into<String>) -> Update {
        Update {
            table: table.into(),
            assignments: vec![],
            filter: None,
        }
    }

    pub fn set(mut self, column: impl Into<String>, value: Value) -> Update {
        self.assignments.push((column.into(), value));
        self
    }

    pub fn filter(mut self, expr: Option<Expr>) -> Update {
        self.filter = expr;
        self
    }
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Self::Update(value)
    }
}
