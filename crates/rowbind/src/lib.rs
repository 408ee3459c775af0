pub mod db;
pub use db::Db;

mod engine;

mod hooks;
pub use hooks::Hooks;

mod list;
pub use list::{list, list_where};

mod record;
pub use record::Record;

mod recorder;
pub use recorder::{Describer, Recorder};

pub mod stmt;
pub use stmt::{Expr, Primitive, Select};

pub use rowbind_macros::Record;

pub use rowbind_core::{bail, err, values, Connection, Dialect, Error, InsertStrategy, Result};

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{Error, Hooks, Primitive, Record, Result};
    pub use rowbind_core::{
        schema::FieldDef,
        stmt::{Type, Value},
    };
}
