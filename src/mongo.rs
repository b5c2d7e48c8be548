// src/mongo.rs
use crate::error::ConnectionError;
use crate::target::ConnectionTarget;
use bson::{doc, Bson};
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};

/// Database used when the descriptor names none.
pub const FALLBACK_DATABASE: &str = "test";

pub const CONNECTED_MESSAGE: &str = "MongoDB Connected Successfully";

/// A not-yet-connected target. Consumed by [`Connector::connect`], so each
/// connector makes at most one attempt.
#[derive(Debug)]
pub struct Connector {
    target: ConnectionTarget,
    app_name: Option<String>,
}

impl Connector {
    pub fn new(target: ConnectionTarget) -> Self {
        Self {
            target,
            app_name: None,
        }
    }

    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = Some(name.into());
        self
    }

    pub fn target(&self) -> &ConnectionTarget {
        &self.target
    }

    /// Parses the descriptor, builds the client and pings the server.
    ///
    /// The driver connects lazily, so the ping is what surfaces unreachable
    /// hosts and rejected credentials here rather than on first use.
    pub async fn connect(self) -> Result<Connection, ConnectionError> {
        tracing::debug!(target_uri = %self.target, "connecting to MongoDB");

        let mut client_options = ClientOptions::parse(self.target.as_uri()).await?;
        if self.app_name.is_some() {
            client_options.app_name = self.app_name;
        }

        let default_database = client_options
            .default_database
            .clone()
            .unwrap_or_else(|| FALLBACK_DATABASE.to_string());

        let client = Client::with_options(client_options)?;
        client.database("admin").run_command(doc! { "ping": 1 }).await?;

        tracing::info!("{}", CONNECTED_MESSAGE);

        let database = client.database(&default_database);
        Ok(Connection { client, database })
    }
}

/// The live handle, owned by the entry point for the rest of the process.
#[derive(Debug, Clone)]
pub struct Connection {
    client: Client,
    database: Database,
}

impl Connection {
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// The descriptor's default database, or [`FALLBACK_DATABASE`].
    pub fn database(&self) -> &Database {
        &self.database
    }

    pub async fn server_version(&self) -> Result<String, ConnectionError> {
        let info = self
            .client
            .database("admin")
            .run_command(doc! { "buildInfo": 1 })
            .await?;
        Ok(match info.get("version") {
            Some(Bson::String(version)) => version.clone(),
            _ => String::from("unknown"),
        })
    }
}
