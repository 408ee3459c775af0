use super::{Statement, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub table: String,

    pub columns: Vec<String>,

    /// One value per column
    pub values: Vec<Value>,

    /// Columns to return from the inserted row
    pub returning: Option<Vec<String>>,
}

impl Insert {
    pub fn new(table: impl Into<String>) -> Insert {
        Insert {
            table: table.into(),
            columns: vec![],
            values: vec![],
            returning: None,
        }
    }

    pub fn value(mut self, column: impl Into<String>, value: Value) -> Insert {
        self.columns.push(column.into());
        self.values.push(value);
        self
    }

    pub fn returning<I, C>(mut self, columns: I) -> Insert
    where
        I: IntoIterator<Item = C>,
        C: Into<String>,
    {
        self.returning = Some(columns.into_iter().map(Into::into).collect());
        self
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
