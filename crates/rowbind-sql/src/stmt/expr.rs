use super::Value;
use rowbind_core::{Error, Result};

/// A `WHERE` clause expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// `column = ?`
    Eq(String, Value),

    /// Conjunction of the operands
    And(Vec<Expr>),

    /// A caller-supplied fragment
    Raw(Raw),
}

/// A SQL fragment with `?` placeholders and matching arguments.
///
/// A doubled `??` stands for a literal question mark. The placeholders are
/// renumbered for the target dialect when the statement is serialized.
#[derive(Debug, Clone, PartialEq)]
pub struct Raw {
    pub(crate) sql: String,
    pub(crate) args: Vec<Value>,
}

/// One piece of a raw fragment, as seen by the serializer.
pub(crate) enum Segment<'a> {
    Text(&'a str),
    Placeholder,
}

impl Expr {
    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Expr {
        Expr::Eq(column.into(), value.into())
    }

    /// Combines two expressions, flattening nested conjunctions.
    pub fn and(lhs: Expr, rhs: Expr) -> Expr {
        let mut operands = match lhs {
            Expr::And(operands) => operands,
            lhs => vec![lhs],
        };

        match rhs {
            Expr::And(rhs) => operands.extend(rhs),
            rhs => operands.push(rhs),
        }

        Expr::And(operands)
    }

    /// Builds a conjunction of `column = value` terms, in the given order.
    pub fn and_eq<I, C>(terms: I) -> Option<Expr>
    where
        I: IntoIterator<Item = (C, Value)>,
        C: Into<String>,
    {
        let mut operands: Vec<_> = terms
            .into_iter()
            .map(|(column, value)| Expr::Eq(column.into(), value))
            .collect();

        match operands.len() {
            0 => None,
            1 => operands.pop(),
            _ => Some(Expr::And(operands)),
        }
    }

    pub fn raw(sql: impl Into<String>, args: Vec<Value>) -> Result<Expr> {
        Ok(Expr::Raw(Raw::new(sql, args)?))
    }

    /// Number of parameters the expression binds.
    pub fn num_params(&self) -> usize {
        match self {
            Expr::Eq(..) => 1,
            Expr::And(operands) => operands.iter().map(Expr::num_params).sum(),
            Expr::Raw(raw) => raw.args.len(),
        }
    }
}

impl Raw {
    /// Checks that the number of placeholders matches the number of
    /// arguments.
    pub fn new(sql: impl Into<String>, args: Vec<Value>) -> Result<Raw> {
        let sql = sql.into();
        let expected = segments(&sql)
            .filter(|segment| matches!(segment, Segment::Placeholder))
            .count();

        if expected != args.len() {
            return Err(Error::invalid_statement(format!(
                "`{sql}` has {expected} placeholder(s) but {} argument(s) were given",
                args.len()
            )));
        }

        Ok(Raw { sql, args })
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn args(&self) -> &[Value] {
        &self.args
    }

    pub(crate) fn segments(&self) -> impl Iterator<Item = Segment<'_>> {
        segments(&self.sql)
    }
}

impl From<Raw> for Expr {
    fn from(value: Raw) -> Self {
        Expr::Raw(value)
    }
}

fn segments(sql: &str) -> impl Iterator<Item = Segment<'_>> {
    let mut rest = sql;
    let mut pending_placeholder = false;

    std::iter::from_fn(move || {
        if pending_placeholder {
            pending_placeholder = false;
            return Some(Segment::Placeholder);
        }

        if rest.is_empty() {
            return None;
        }

        let Some(pos) = rest.find('?') else {
            let text = rest;
            rest = "";
            return Some(Segment::Text(text));
        };

        if rest[pos + 1..].starts_with('?') {
            // `??` is an escaped question mark; emit the text up to and
            // including the first one.
            let text = &rest[..pos + 1];
            rest = &rest[pos + 2..];
            return Some(Segment::Text(text));
        }

        let text = &rest[..pos];
        rest = &rest[pos + 1..];

        if text.is_empty() {
            Some(Segment::Placeholder)
        } else {
            pending_placeholder = true;
            Some(Segment::Text(text))
        }
    })
}
