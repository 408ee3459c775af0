use crate::{Record, Result};

use rowbind_core::{err, schema::Field, stmt::ValueRecord};

/// Writes one result row into the record, column `i` into `targets[i]`.
pub(crate) fn write_row<R: Record>(record: &mut R, targets: &[&Field], row: ValueRecord) -> Result<()> {
    if row.len() != targets.len() {
        return Err(err!(
            "row has {} column(s) but {} field(s) were expected",
            row.len(),
            targets.len()
        ));
    }

    for (field, value) in targets.iter().zip(row) {
        record.set_field(field.index, value)?;
    }

    Ok(())
}
