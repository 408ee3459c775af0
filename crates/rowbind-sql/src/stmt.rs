mod delete;
pub use delete::Delete;

mod exists;
pub use exists::Exists;

pub(crate) mod expr;
pub use expr::{Expr, Raw};

mod insert;
pub use insert::Insert;

mod select;
pub use select::Select;

mod update;
pub use update::Update;

pub use rowbind_core::stmt::{Type, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Delete(Delete),
    Exists(Exists),
    Insert(Insert),
    Select(Select),
    Update(Update),
}

impl Statement {
    /// Returns `true` if executing the statement yields rows.
    pub fn is_query(&self) -> bool {
        match self {
            Statement::Select(_) | Statement::Exists(_) => true,
            Statement::Insert(insert) => insert.returning.is_some(),
            Statement::Delete(_) | Statement::Update(_) => false,
        }
    }

    pub fn table(&self) -> &str {
        match self {
            Statement::Delete(stmt) => &stmt.table,
            Statement::Exists(stmt) => &stmt.table,
            Statement::Insert(stmt) => &stmt.table,
            Statement::Select(stmt) => &stmt.table,
            Statement::Update(stmt) => &stmt.table,
        }
    }
}
