mod response;
pub use response::{Response, Rows};

pub mod operation;
pub use operation::Operation;

use crate::Dialect;

use std::fmt::Debug;

/// A live database connection.
///
/// Connections are driven synchronously; every call blocks until the
/// database answers.
pub trait Connection: Debug + Send + 'static {
    /// The dialect spoken by this connection, used when the caller does not
    /// pick one explicitly.
    fn dialect(&self) -> Dialect;

    /// Execute a database operation
    fn exec(&mut self, op: Operation) -> crate::Result<Response>;
}

impl<C: Connection + ?Sized> Connection for Box<C> {
    fn dialect(&self) -> Dialect {
        (**self).dialect()
    }

    fn exec(&mut self, op: Operation) -> crate::Result<Response> {
        (**self).exec(op)
    }
}
