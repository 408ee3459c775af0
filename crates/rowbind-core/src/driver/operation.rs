use crate::stmt::{Type, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Run a statement that returns no rows.
    Execute(Execute),

    /// Run a statement and collect the rows it returns.
    Query(Query),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Execute {
    /// The SQL text, with placeholders already in the dialect's style
    pub sql: String,

    /// Positional parameters
    pub params: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub sql: String,

    pub params: Vec<Value>,

    /// The expected type of each returned column. Drivers use it to decode
    /// values that the database reports loosely.
    pub ret: Vec<Type>,
}

impl Operation {
    pub fn sql(&self) -> &str {
        match self {
            Operation::Execute(op) => &op.sql,
            Operation::Query(op) => &op.sql,
        }
    }

    pub fn params(&self) -> &[Value] {
        match self {
            Operation::Execute(op) => &op.params,
            Operation::Query(op) => &op.params,
        }
    }

    pub fn is_query(&self) -> bool {
        matches!(self, Operation::Query(_))
    }
}

impl From<Execute> for Operation {
    fn from(value: Execute) -> Self {
        Self::Execute(value)
    }
}

impl From<Query> for Operation {
    fn from(value: Query) -> Self {
        Self::Query(value)
    }
}
