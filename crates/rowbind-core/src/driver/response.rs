use crate::stmt::ValueRecord;

#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub rows: Rows,

    /// The id of the last inserted row, for drivers that can report one
    pub last_insert_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Rows {
    /// Number of rows impacted by the operation
    Count(u64),

    /// Operation result, one record per row
    Values(Vec<ValueRecord>),
}

impl Response {
    pub fn count(count: u64) -> Self {
        Self {
            rows: Rows::Count(count),
            last_insert_id: None,
        }
    }

    pub fn values(values: impl Into<Vec<ValueRecord>>) -> Self {
        Self {
            rows: Rows::Values(values.into()),
            last_insert_id: None,
        }
    }

    pub fn with_last_insert_id(mut self, id: Option<i64>) -> Self {
        self.last_insert_id = id;
        self
    }
}

impl Rows {
    pub fn is_count(&self) -> bool {
        matches!(self, Self::Count(_))
    }

    pub fn is_values(&self) -> bool {
        matches!(self, Self::Values(_))
    }

    /// Returns the number of rows affected, or the number of rows returned.
    pub fn len(&self) -> u64 {
        match self {
            Rows::Count(count) => *count,
            Rows::Values(values) => values.len() as u64,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the rows, or an empty list for a count response.
    pub fn into_values(self) -> Vec<ValueRecord> {
        match self {
            Self::Values(values) => values,
            Self::Count(_) => vec![],
        }
    }
}
