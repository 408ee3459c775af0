mod value;
pub(crate) use value::Value;

use rowbind_core::{
    driver::{
        operation::{Execute, Operation, Query},
        Response,
    },
    stmt::ValueRecord,
    Dialect, Error, Result,
};
use rusqlite::Connection as RusqliteConnection;
use std::path::Path;
use url::Url;

/// A connection to a SQLite database.
#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    /// Opens the database named by a `sqlite:` URL. The path `:memory:`
    /// opens a fresh in-memory database.
    pub fn connect(url: &str) -> Result<Self> {
        let parsed = Url::parse(url)
            .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url}")))?;

        if parsed.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={url}"
            )));
        }

        if parsed.path() == ":memory:" {
            Self::in_memory()
        } else {
            Self::open(parsed.path())
        }
    }

    pub fn in_memory() -> Result<Self> {
        let connection =
            RusqliteConnection::open_in_memory().map_err(Error::driver_operation_failed)?;

        Ok(Self { connection })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection =
            RusqliteConnection::open(path).map_err(Error::driver_operation_failed)?;

        Ok(Self { connection })
    }

    fn execute(&mut self, op: Execute) -> Result<Response> {
        let mut stmt = self
            .connection
            .prepare_cached(&op.sql)
            .map_err(Error::driver_operation_failed)?;

        let params = op.params.into_iter().map(Value::from).collect::<Vec<_>>();

        let count = stmt
            .execute(rusqlite::params_from_iter(params.iter()))
            .map_err(Error::driver_operation_failed)?;

        Ok(Response::count(count as _).with_last_insert_id(Some(self.connection.last_insert_rowid())))
    }

    fn query(&mut self, op: Query) -> Result<Response> {
        let mut stmt = self
            .connection
            .prepare_cached(&op.sql)
            .map_err(Error::driver_operation_failed)?;

        let width = stmt.column_count();
        let params = op.params.into_iter().map(Value::from).collect::<Vec<_>>();

        let mut rows = stmt
            .query(rusqlite::params_from_iter(params.iter()))
            .map_err(Error::driver_operation_failed)?;

        let mut ret = vec![];

        while let Some(row) = rows.next().map_err(Error::driver_operation_failed)? {
            let mut items = Vec::with_capacity(width);

            for index in 0..width {
                let value = Value::from_sql(row, index, op.ret.get(index))
                    .map_err(Error::driver_operation_failed)?;
                items.push(value.into_inner());
            }

            ret.push(ValueRecord::from_vec(items));
        }

        tracing::trace!(rows = ret.len(), "sqlite query returned");

        Ok(Response::values(ret))
    }
}

impl rowbind_core::Connection for Connection {
    fn dialect(&self) -> Dialect {
        Dialect::Sqlite
    }

    fn exec(&mut self, op: Operation) -> Result<Response> {
        match op {
            Operation::Execute(op) => self.execute(op),
            Operation::Query(op) => self.query(op),
        }
    }
}
