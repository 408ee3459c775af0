//! Fetching many rows of a bound table at once.

use crate::{
    engine::{self, write_row, Composer},
    Describer, Record, Recorder, Result, Select,
};

use rowbind_sql::Statement;

use std::borrow::BorrowMut;

/// Returns up to `limit` records of the recorder's table, skipping the
/// first `offset` rows.
///
/// ```ignore
/// let page = rowbind::list(&users, 20, 40)?;
/// ```
pub fn list<R, S>(recorder: &Recorder<R, S>, limit: u64, offset: u64) -> Result<Vec<Recorder<R>>>
where
    R: Record + Default,
    S: BorrowMut<R>,
{
    list_where(recorder, |_, select| Ok(select.limit(limit).offset(offset)))
}

/// Returns the records selected by the query that `modify` builds from
/// `SELECT <all columns> FROM <table>`.
///
/// The modifier receives the recorder as a [`Describer`] and may add a
/// filter, ordering or paging. It must keep the column list as is: each
/// row is written back into the fields in declaration order. If the
/// modifier fails, no statement is executed. If any row fails to convert,
/// the rows decoded so far are discarded and the error is returned.
///
/// Lifecycle hooks are not run for listed records.
///
/// ```ignore
/// let admins = rowbind::list_where(&users, |desc, select| {
///     Ok(select
///         .and_filter(rowbind::Expr::raw("role = ?", rowbind::values!["admin"])?)
///         .order_by(desc.key()[0]))
/// })?;
/// ```
pub fn list_where<R, S, F>(recorder: &Recorder<R, S>, modify: F) -> Result<Vec<Recorder<R>>>
where
    R: Record + Default,
    S: BorrowMut<R>,
    F: FnOnce(&dyn Describer, Select) -> Result<Select>,
{
    let composer = Composer::new(recorder.table_name(), recorder.fields());

    let select = modify(recorder, composer.list())?;
    let targets = composer.all_fields();
    let rows = engine::query(recorder.db(), &Statement::from(select), &targets)?;

    let mut records = Vec::with_capacity(rows.len());

    for row in rows {
        let mut record = R::default();
        write_row(&mut record, &targets, row)?;
        records.push(recorder.rebind(record));
    }

    tracing::debug!(table = recorder.table_name(), rows = records.len(), "listed records");

    Ok(records)
}
