//! Statement composition and execution for bound records.

mod compose;
pub(crate) use compose::Composer;

mod hooks;
pub(crate) use hooks::{dispatch, Event};

mod insert;

mod scan;
pub(crate) use scan::write_row;

use crate::{Db, Result};

use rowbind_core::{schema::Field, stmt::ValueRecord};
use rowbind_sql::Statement;

/// Runs a statement that returns rows, decoding each column as the type of
/// the matching target field.
pub(crate) fn query(db: &Db, stmt: &Statement, targets: &[&Field]) -> Result<Vec<ValueRecord>> {
    let ret = targets.iter().map(|field| field.ty).collect();
    let response = db.exec(stmt, Some(ret))?;

    Ok(response.rows.into_values())
}
