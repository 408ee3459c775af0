#[macro_use]
mod macros;

pub mod dialect;
pub use dialect::{Dialect, InsertStrategy};

pub mod driver;
pub use driver::Connection;

mod error;
pub use error::{Error, IntoError};

pub mod schema;

pub mod stmt;

/// A Result type alias that uses Rowbind's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
