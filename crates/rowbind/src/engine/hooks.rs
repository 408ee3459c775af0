use crate::{Record, Result};

/// A point in a record's lifecycle at which its hooks are consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Event {
    AfterLoad,
    BeforeInsert,
    AfterInsert,
    BeforeUpdate,
    AfterUpdate,
    BeforeDelete,
}

/// Invokes the callback for `event` if the record opted into hooks.
pub(crate) fn dispatch<R: Record>(record: &mut R, event: Event) -> Result<()> {
    let Some(hooks) = record.hooks() else {
        return Ok(());
    };

    tracing::trace!(?event, "running hook");

    match event {
        Event::AfterLoad => hooks.after_load(),
        Event::BeforeInsert => hooks.before_insert(),
        Event::AfterInsert => hooks.after_insert(),
        Event::BeforeUpdate => hooks.before_update(),
        Event::AfterUpdate => hooks.after_update(),
        Event::BeforeDelete => hooks.before_delete(),
    }
}
