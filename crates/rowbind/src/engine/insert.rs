use super::{query, write_row, Composer};
use crate::{Db, Error, Record, Result};

use rowbind_core::{err, stmt::Value, Dialect, InsertStrategy};
use rowbind_sql::Statement;

impl Composer<'_> {
    /// Inserts `record` and copies database-generated values back into it.
    pub(crate) fn exec_insert<R: Record>(
        &self,
        db: &Db,
        record: &mut R,
        strategy: InsertStrategy,
    ) -> Result<()> {
        match strategy {
            InsertStrategy::Returning if db.dialect() == Dialect::Mysql => Err(
                Error::invalid_statement("MySQL dialect does not support RETURNING"),
            ),
            InsertStrategy::LastInsertId => self.insert_last_insert_id(db, record),
            InsertStrategy::Returning => self.insert_returning_row(db, record),
        }
    }

    /// The driver reports a single generated integer, so at most one auto
    /// field can be filled in.
    fn insert_last_insert_id<R: Record>(&self, db: &Db, record: &mut R) -> Result<()> {
        let auto: Vec<_> = self.fields().auto().collect();

        if auto.len() > 1 {
            return Err(Error::invalid_statement(format!(
                "table `{}` has {} AUTO_INCREMENT fields but only one can be read back \
                 from the last insert id",
                self.table(),
                auto.len()
            )));
        }

        let stmt = Statement::from(self.insert(record));
        let response = db.exec(&stmt, None)?;

        let Some(field) = auto.first() else {
            return Ok(());
        };

        let id = response
            .last_insert_id
            .ok_or_else(|| Error::invalid_driver_configuration("could not get last insert id"))?;

        tracing::trace!(table = self.table(), field = field.name, id, "read back last insert id");

        record.set_field(field.index, Value::I64(id))
    }

    fn insert_returning_row<R: Record>(&self, db: &Db, record: &mut R) -> Result<()> {
        let projection = self.insert_returning(record);
        let rows = query(db, &projection.stmt, &projection.targets)?;

        let Some(row) = rows.into_iter().next() else {
            return Err(err!("INSERT INTO {} returned no row", self.table()));
        };

        write_row(record, &projection.targets, row)
    }
}
