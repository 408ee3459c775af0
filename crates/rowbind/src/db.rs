mod builder;
pub use builder::Builder;

mod connect;
pub use connect::connect;

use crate::{Record, Recorder, Result};

use rowbind_core::{
    driver::{
        operation::{Execute, Query},
        Operation, Response,
    },
    stmt::{Type, Value},
    Connection, Dialect,
};
use rowbind_sql::{Serializer, Statement};

use std::{
    fmt,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

/// A database handle.
///
/// Cloning is cheap: all clones share one driver connection, and statements
/// from different clones are serialized through it.
#[derive(Clone)]
pub struct Db {
    connection: Arc<Mutex<Box<dyn Connection>>>,
    dialect: Dialect,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Wraps an open connection, using `dialect` for placeholders and
    /// insert strategy.
    pub fn new(connection: impl Connection, dialect: impl Into<Dialect>) -> Db {
        Db::from_boxed(Box::new(connection), dialect.into())
    }

    pub(crate) fn from_boxed(connection: Box<dyn Connection>, dialect: Dialect) -> Db {
        Db {
            connection: Arc::new(Mutex::new(connection)),
            dialect,
        }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Binds `record` to `table`. The recorder borrows the record, so every
    /// load and insert is visible through the caller's own value.
    ///
    /// The table name is used verbatim in SQL and must not come from
    /// untrusted input.
    pub fn bind<'a, R: Record>(&self, table: &str, record: &'a mut R) -> Recorder<R, &'a mut R> {
        Recorder::new(self.clone(), table, record)
    }

    /// Binds an owned record to `table`.
    pub fn bind_owned<R: Record>(&self, table: &str, record: R) -> Recorder<R, R> {
        Recorder::new(self.clone(), table, record)
    }

    /// Runs a SQL statement as written, returning the number of affected
    /// rows. Placeholders must already be in the dialect's style.
    pub fn execute(&self, sql: &str, params: Vec<Value>) -> Result<u64> {
        tracing::debug!(db.statement = sql, db.params = params.len(), "executing raw statement");

        let response = self.connection().exec(
            Execute {
                sql: sql.to_string(),
                params,
            }
            .into(),
        )?;

        Ok(response.rows.len())
    }

    /// Serializes `stmt` for this handle's dialect and runs it. When `ret`
    /// is set the statement is run as a query returning rows of those types.
    pub(crate) fn exec(&self, stmt: &Statement, ret: Option<Vec<Type>>) -> Result<Response> {
        let mut params = Vec::<Value>::new();
        let sql = Serializer::for_dialect(self.dialect).serialize(stmt, &mut params);

        tracing::debug!(
            db.statement = %sql,
            db.params = params.len(),
            db.dialect = %self.dialect,
            "executing statement"
        );

        let op: Operation = match ret {
            Some(ret) => Query { sql, params, ret }.into(),
            None => Execute { sql, params }.into(),
        };

        self.connection().exec(op)
    }

    fn connection(&self) -> MutexGuard<'_, Box<dyn Connection>> {
        // A panic while holding the lock leaves the connection itself usable
        self.connection
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for Db {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Db")
            .field("dialect", &self.dialect)
            .finish_non_exhaustive()
    }
}
