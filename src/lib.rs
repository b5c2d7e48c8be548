// src/lib.rs
pub mod cli;
pub mod config;
pub mod error;
pub mod health;
pub mod logging;
pub mod mongo;
pub mod target;

pub use error::ConnectionError;
pub use mongo::{Connection, Connector};
pub use target::ConnectionTarget;
