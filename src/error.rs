// src/error.rs
use thiserror::Error;

/// Any failure while establishing the connection.
///
/// Network, DNS, authentication, malformed URI and timeout failures all land
/// here; the driver's message is the only detail carried.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct ConnectionError(#[from] mongodb::error::Error);

impl ConnectionError {
    pub fn driver_error(&self) -> &mongodb::error::Error {
        &self.0
    }
}
