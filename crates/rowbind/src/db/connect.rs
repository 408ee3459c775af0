use crate::{Error, Result};

use rowbind_core::Connection;

use url::Url;

/// Opens a driver connection for `url`, based on its scheme.
///
/// `postgresql://` and `postgres://` URLs need the `postgresql` feature;
/// `sqlite:` URLs need the `sqlite` feature. `sqlite::memory:` opens an
/// in-memory database. There is no built-in MySQL driver; pass a MySQL
/// [`Connection`] to [`Builder::build`](crate::db::Builder::build) instead.
pub fn connect(url: &str) -> Result<Box<dyn Connection>> {
    let parsed = Url::parse(url)
        .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url}")))?;

    match parsed.scheme() {
        "postgresql" | "postgres" => connect_postgresql(url),
        "sqlite" => connect_sqlite(url),
        "mysql" => Err(Error::invalid_connection_url(format!(
            "no built-in MySQL driver; build the `Db` from a MySQL `Connection`; url={url}"
        ))),
        scheme => Err(Error::invalid_connection_url(format!(
            "unsupported database; scheme={scheme}; url={url}"
        ))),
    }
}

#[cfg(feature = "postgresql")]
fn connect_postgresql(url: &str) -> Result<Box<dyn Connection>> {
    let connection = rowbind_driver_postgresql::Connection::connect(url)?;
    Ok(Box::new(connection))
}

#[cfg(not(feature = "postgresql"))]
fn connect_postgresql(_url: &str) -> Result<Box<dyn Connection>> {
    Err(Error::invalid_connection_url(
        "`postgresql` feature not enabled",
    ))
}

#[cfg(feature = "sqlite")]
fn connect_sqlite(url: &str) -> Result<Box<dyn Connection>> {
    let connection = rowbind_driver_sqlite::Connection::connect(url)?;
    Ok(Box::new(connection))
}

#[cfg(not(feature = "sqlite"))]
fn connect_sqlite(_url: &str) -> Result<Box<dyn Connection>> {
    Err(Error::invalid_connection_url("`sqlite` feature not enabled"))
}
