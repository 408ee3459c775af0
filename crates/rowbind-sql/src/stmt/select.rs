use super::{Expr, Statement};

/// A `SELECT` over a single table.
///
/// `Select` is also the builder handed to list modifiers, so it carries the
/// usual knobs for narrowing and ordering the result.
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub table: String,

    /// Selected columns, in order
    pub columns: Vec<String>,

    pub filter: Option<Expr>,

    /// `ORDER BY` terms, used verbatim
    pub order_by: Vec<String>,

    pub limit: Option<u64>,

    pub offset: Option<u64>,
}

impl Select {
    pub fn new<I, C>(table: impl Into<String>, columns: I) -> Select
    where
        I: IntoIterator<Item = C>,
        C: Into<String>,
    {
        Select {
            table: table.into(),
            columns: columns.into_iter().map(Into::into).collect(),
            filter: None,
            order_by: vec![],
            limit: None,
            offset: None,
        }
    }

    /// Replaces the filter.
    pub fn filter(mut self, expr: impl Into<Expr>) -> Select {
        self.filter = Some(expr.into());
        self
    }

    /// ANDs `expr` with the current filter.
    pub fn and_filter(mut self, expr: impl Into<Expr>) -> Select {
        self.filter = Some(match self.filter.take() {
            Some(filter) => Expr::and(filter, expr.into()),
            None => expr.into(),
        });
        self
    }

    /// Appends an ordering term such as `"name"` or `"created_at DESC"`.
    pub fn order_by(mut self, term: impl Into<String>) -> Select {
        self.order_by.push(term.into());
        self
    }

    pub fn limit(mut self, limit: u64) -> Select {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Select {
        self.offset = Some(offset);
        self
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Self::Select(value)
    }
}
