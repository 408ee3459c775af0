mod primitive;
pub use primitive::Primitive;

pub use rowbind_core::stmt::{Type, Value, ValueRecord};
pub use rowbind_sql::stmt::{Expr, Raw, Select};
