use rowbind::Connection;
use rowbind_core::{
    driver::{Operation, Response},
    Dialect, Result,
};
use std::sync::{Arc, Mutex};

#[derive(Debug)]
pub struct DriverOp {
    pub operation: Operation,
    pub response: Response,
}

/// A connection wrapper that logs all operations for testing purposes
#[derive(Debug)]
pub struct LoggingConnection {
    /// The underlying connection that actually executes operations
    inner: Box<dyn Connection>,

    /// Log of all operations executed through this connection
    ops_log: Arc<Mutex<Vec<DriverOp>>>,
}

impl LoggingConnection {
    pub fn new(inner: impl Connection) -> Self {
        Self {
            inner: Box::new(inner),
            ops_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a handle to access the operations log
    pub fn ops_log_handle(&self) -> Arc<Mutex<Vec<DriverOp>>> {
        self.ops_log.clone()
    }
}

impl Connection for LoggingConnection {
    fn dialect(&self) -> Dialect {
        self.inner.dialect()
    }

    fn exec(&mut self, operation: Operation) -> Result<Response> {
        let operation_clone = operation.clone();

        let response = self.inner.exec(operation)?;

        self.ops_log
            .lock()
            .expect("Failed to acquire ops log lock")
            .push(DriverOp {
                operation: operation_clone,
                response: response.clone(),
            });

        Ok(response)
    }
}
