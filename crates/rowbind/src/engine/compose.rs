use crate::{Error, Record, Result};

use rowbind_core::{
    schema::{Field, Fields},
    stmt::Value,
};
use rowbind_sql::{
    stmt::{Delete, Exists, Expr, Insert, Select, Update},
    Statement,
};

/// Builds statements for records of one bound type from its descriptor set.
///
/// Every column list is derived from the descriptors; nothing is computed
/// ad hoc per operation.
#[derive(Clone, Copy)]
pub(crate) struct Composer<'a> {
    table: &'a str,
    fields: &'a Fields,
}

/// A statement whose result rows are written back into `targets`, in order.
pub(crate) struct Projection<'a> {
    pub(crate) stmt: Statement,
    pub(crate) targets: Vec<&'a Field>,
}

impl<'a> Composer<'a> {
    pub(crate) fn new(table: &'a str, fields: &'a Fields) -> Self {
        Composer { table, fields }
    }

    pub(crate) fn table(&self) -> &'a str {
        self.table
    }

    pub(crate) fn fields(&self) -> &'a Fields {
        self.fields
    }

    /// Key column names paired with their current values.
    pub(crate) fn where_ids<R: Record>(&self, record: &R) -> Vec<(&'a str, Value)> {
        self.fields
            .key()
            .map(|field| (&field.column[..], record.field(field.index)))
            .collect()
    }

    /// `k1 = ? AND k2 = ? ...` over every key field, in declaration order.
    pub(crate) fn key_filter<R: Record>(&self, record: &R) -> Result<Expr> {
        Expr::and_eq(self.where_ids(record)).ok_or_else(|| Error::missing_primary_key(self.table))
    }

    /// Selects the non-key columns of the row identified by the key.
    pub(crate) fn load<R: Record>(&self, record: &R) -> Result<Projection<'a>> {
        let targets: Vec<_> = self.fields.non_key().collect();
        let columns = targets.iter().map(|field| &field.column[..]);
        let select = Select::new(self.table, columns).filter(self.key_filter(record)?);

        Ok(Projection {
            stmt: select.into(),
            targets,
        })
    }

    /// Selects every column of the first row matching `filter`.
    pub(crate) fn load_where(&self, filter: Expr) -> Projection<'a> {
        let select = select_all(self.table, self.fields).filter(filter);

        Projection {
            stmt: select.into(),
            targets: self.all_fields(),
        }
    }

    /// Non-auto columns with their current values. Nullable fields that
    /// hold no value are left out so the database default applies.
    pub(crate) fn insert<R: Record>(&self, record: &R) -> Insert {
        self.fields
            .iter()
            .filter(|field| !field.auto)
            .map(|field| (field, record.field(field.index)))
            .filter(|(field, value)| !(field.nullable && value.is_null()))
            .fold(Insert::new(self.table), |insert, (field, value)| {
                insert.value(&field.column, value)
            })
    }

    /// Insert that returns every column of the new row.
    pub(crate) fn insert_returning<R: Record>(&self, record: &R) -> Projection<'a> {
        let insert = self.insert(record).returning(self.fields.columns(true));

        Projection {
            stmt: insert.into(),
            targets: self.all_fields(),
        }
    }

    /// Sets every non-key, non-auto column. Returns `None` when there is
    /// nothing to set.
    pub(crate) fn update<R: Record>(&self, record: &R) -> Result<Option<Statement>> {
        let filter = self.key_filter(record)?;

        let update = self
            .fields
            .non_key()
            .filter(|field| !field.auto)
            .fold(Update::new(self.table), |update, field| {
                update.set(&field.column, record.field(field.index))
            });

        if update.assignments.is_empty() {
            return Ok(None);
        }

        Ok(Some(update.filter(Some(filter)).into()))
    }

    pub(crate) fn delete<R: Record>(&self, record: &R) -> Result<Statement> {
        Ok(Delete::new(self.table, Some(self.key_filter(record)?)).into())
    }

    pub(crate) fn exists<R: Record>(&self, record: &R) -> Result<Statement> {
        Ok(Exists::new(self.table, Some(self.key_filter(record)?)).into())
    }

    pub(crate) fn exists_where(&self, filter: Expr) -> Statement {
        Exists::new(self.table, Some(filter)).into()
    }

    /// The unfiltered query a list modifier starts from.
    pub(crate) fn list(&self) -> Select {
        select_all(self.table, self.fields)
    }

    /// Every field, in column order of [`Composer::list`].
    pub(crate) fn all_fields(&self) -> Vec<&'a Field> {
        self.fields.iter().collect()
    }
}

/// `SELECT <all columns> FROM <table>`
fn select_all(table: &str, fields: &Fields) -> Select {
    Select::new(table, fields.columns(true))
}
