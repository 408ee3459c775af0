use crate::{
    engine::{self, dispatch, write_row, Composer, Event},
    Db, Dialect, Error, Record, Result,
};

use rowbind_core::{
    schema::Fields,
    stmt::{Type, Value},
    InsertStrategy,
};
use rowbind_sql::stmt::{Expr, Raw};

use std::{
    borrow::{Borrow, BorrowMut},
    fmt,
    marker::PhantomData,
    ops::{Deref, DerefMut},
    sync::Arc,
};

/// Read-only view of a bound record's table mapping.
///
/// Handed to list modifiers so they can build predicates from column names
/// without knowing the record type.
pub trait Describer {
    /// The table the record is bound to.
    fn table_name(&self) -> &str;

    /// Column names in field declaration order, optionally including the
    /// primary key.
    fn columns(&self, include_keys: bool) -> Vec<&str>;

    /// Current field values, aligned with [`Describer::columns`].
    fn values(&self, include_keys: bool) -> Vec<Value>;

    /// Key columns paired with their current values.
    fn where_ids(&self) -> Vec<(&str, Value)>;

    /// Key column names.
    fn key(&self) -> Vec<&str>;

    fn dialect(&self) -> Dialect;

    fn db(&self) -> &Db;
}

/// A record bound to a table on a database handle.
///
/// `S` is either the record itself or a mutable borrow of it; see
/// [`Db::bind`] and [`Db::bind_owned`]. The recorder dereferences to the
/// record, so fields can be read and written directly between operations.
pub struct Recorder<R, S = R> {
    db: Db,
    table: Arc<str>,
    fields: Arc<Fields>,
    strategy: InsertStrategy,
    record: S,
    _p: PhantomData<fn() -> R>,
}

impl<R: Record, S: BorrowMut<R>> Recorder<R, S> {
    pub(crate) fn new(db: Db, table: &str, record: S) -> Self {
        let fields = Arc::new(Fields::scan(R::FIELDS));

        tracing::trace!(
            table,
            fields = fields.len(),
            keys = fields.key().len(),
            "bound record"
        );

        let strategy = db.dialect().insert_strategy();
        Recorder::from_parts(db, table.into(), fields, strategy, record)
    }

    pub(crate) fn from_parts(
        db: Db,
        table: Arc<str>,
        fields: Arc<Fields>,
        strategy: InsertStrategy,
        record: S,
    ) -> Self {
        Recorder {
            db,
            table,
            fields,
            strategy,
            record,
            _p: PhantomData,
        }
    }

    /// Shares this recorder's table mapping with another record.
    pub(crate) fn rebind<T: BorrowMut<R>>(&self, record: T) -> Recorder<R, T> {
        Recorder::from_parts(
            self.db.clone(),
            self.table.clone(),
            self.fields.clone(),
            self.strategy,
            record,
        )
    }

    pub fn record(&self) -> &R {
        self.record.borrow()
    }

    pub fn record_mut(&mut self) -> &mut R {
        self.record.borrow_mut()
    }

    /// Key column names, in declaration order.
    pub fn key(&self) -> Vec<&str> {
        self.fields.key().map(|field| &field.column[..]).collect()
    }

    /// Overrides how generated values are read back after an insert. The
    /// default follows the handle's dialect.
    pub fn insert_strategy(&mut self, strategy: InsertStrategy) -> &mut Self {
        self.strategy = strategy;
        self
    }

    pub(crate) fn fields(&self) -> &Fields {
        &self.fields
    }

    fn composer(&self) -> Composer<'_> {
        Composer::new(&self.table, &self.fields)
    }

    /// Fills the non-key fields from the row whose key matches the
    /// record's key fields.
    pub fn load(&mut self) -> Result<()> {
        let composer = Composer::new(&self.table, &self.fields);
        let record: &mut R = self.record.borrow_mut();

        let projection = composer.load(record)?;
        let rows = engine::query(&self.db, &projection.stmt, &projection.targets)?;

        let Some(row) = rows.into_iter().next() else {
            return Err(Error::record_not_found(format!(
                "table={}; key={:?}",
                self.table,
                composer.where_ids(record)
            )));
        };

        write_row(record, &projection.targets, row)?;
        dispatch(record, Event::AfterLoad)
    }

    /// Fills every field from the first row matching `pred`, a SQL
    /// fragment with one `?` per entry in `args`.
    pub fn load_where(&mut self, pred: &str, args: Vec<Value>) -> Result<()> {
        let composer = Composer::new(&self.table, &self.fields);
        let record: &mut R = self.record.borrow_mut();

        let projection = composer.load_where(Expr::Raw(Raw::new(pred, args)?));
        let rows = engine::query(&self.db, &projection.stmt, &projection.targets)?;

        let Some(row) = rows.into_iter().next() else {
            return Err(Error::record_not_found(format!(
                "table={}; where={pred}",
                self.table
            )));
        };

        write_row(record, &projection.targets, row)?;
        dispatch(record, Event::AfterLoad)
    }

    /// Inserts the record. Auto fields are left to the database and read
    /// back into the record afterwards.
    pub fn insert(&mut self) -> Result<()> {
        let composer = Composer::new(&self.table, &self.fields);
        let record: &mut R = self.record.borrow_mut();

        dispatch(record, Event::BeforeInsert)?;
        composer.exec_insert(&self.db, record, self.strategy)?;
        dispatch(record, Event::AfterInsert)
    }

    /// Writes every non-key, non-auto field to the row identified by the
    /// record's key.
    pub fn update(&mut self) -> Result<()> {
        let composer = Composer::new(&self.table, &self.fields);
        let record: &mut R = self.record.borrow_mut();

        dispatch(record, Event::BeforeUpdate)?;

        match composer.update(record)? {
            Some(stmt) => {
                self.db.exec(&stmt, None)?;
            }
            None => {
                tracing::debug!(table = %self.table, "no columns to update; statement skipped");
            }
        }

        dispatch(record, Event::AfterUpdate)
    }

    /// Deletes the row identified by the record's key.
    pub fn delete(&mut self) -> Result<()> {
        let composer = Composer::new(&self.table, &self.fields);
        let record: &mut R = self.record.borrow_mut();

        dispatch(record, Event::BeforeDelete)?;

        let stmt = composer.delete(record)?;
        self.db.exec(&stmt, None)?;
        Ok(())
    }

    /// Returns `true` if a row with the record's key exists.
    pub fn exists(&self) -> Result<bool> {
        let stmt = self.composer().exists(self.record())?;
        exists(&self.db, &stmt)
    }

    /// Returns `true` if any row matches `pred`.
    pub fn exists_where(&self, pred: &str, args: Vec<Value>) -> Result<bool> {
        let stmt = self
            .composer()
            .exists_where(Expr::Raw(Raw::new(pred, args)?));
        exists(&self.db, &stmt)
    }
}

impl<R> Recorder<R, R> {
    /// Unbinds and returns the record.
    pub fn into_record(self) -> R {
        self.record
    }
}

fn exists(db: &Db, stmt: &rowbind_sql::Statement) -> Result<bool> {
    let response = db.exec(stmt, Some(vec![Type::Bool]))?;

    match response.rows.into_values().into_iter().next() {
        Some(row) => match row.into_vec().into_iter().next() {
            Some(value) => value.to_bool(),
            None => Err(rowbind_core::err!("existence check returned an empty row")),
        },
        None => Ok(false),
    }
}

impl<R: Record, S: BorrowMut<R>> Describer for Recorder<R, S> {
    fn table_name(&self) -> &str {
        &self.table
    }

    fn columns(&self, include_keys: bool) -> Vec<&str> {
        self.fields.columns(include_keys)
    }

    fn values(&self, include_keys: bool) -> Vec<Value> {
        let record = self.record();

        self.fields
            .iter()
            .filter(|field| include_keys || !field.primary_key)
            .map(|field| record.field(field.index))
            .collect()
    }

    fn where_ids(&self) -> Vec<(&str, Value)> {
        self.composer().where_ids(self.record())
    }

    fn key(&self) -> Vec<&str> {
        Recorder::key(self)
    }

    fn dialect(&self) -> Dialect {
        self.db.dialect()
    }

    fn db(&self) -> &Db {
        &self.db
    }
}

impl<R, S: Borrow<R>> Deref for Recorder<R, S> {
    type Target = R;

    fn deref(&self) -> &R {
        self.record.borrow()
    }
}

impl<R, S: BorrowMut<R>> DerefMut for Recorder<R, S> {
    fn deref_mut(&mut self) -> &mut R {
        self.record.borrow_mut()
    }
}

impl<R: fmt::Debug, S: Borrow<R>> fmt::Debug for Recorder<R, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record: &R = self.record.borrow();

        f.debug_struct("Recorder")
            .field("table", &self.table)
            .field("record", record)
            .finish_non_exhaustive()
    }
}
