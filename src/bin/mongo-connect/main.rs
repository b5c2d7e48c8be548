use anyhow::Result;
use clap::Parser;
use mongo_connect::cli::Cli;
use mongo_connect::config::Settings;
use mongo_connect::{health, logging, Connection, Connector};

#[tokio::main]
async fn main() {
    let args = Cli::parse();
    logging::init(args.debug);

    let settings = match Settings::resolve(&args) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("MongoDB Connection Error: {:#}", e);
            std::process::exit(1);
        }
    };

    let connection = match Connector::new(settings.target.clone())
        .app_name(settings.app_name.clone())
        .connect()
        .await
    {
        Ok(connection) => connection,
        Err(e) => {
            tracing::error!("MongoDB Connection Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = after_connect(&connection, &settings).await {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn after_connect(connection: &Connection, settings: &Settings) -> Result<()> {
    match connection.server_version().await {
        Ok(version) => tracing::debug!(
            server_version = %version,
            database = %connection.database().name(),
            "connection ready"
        ),
        Err(e) => tracing::debug!("could not read server version: {}", e),
    }

    if let Some(path) = &settings.health_file {
        let stamp = health::write_marker(path)?;
        tracing::debug!(health_file = %path, timestamp_ms = stamp, "health marker written");
    }

    Ok(())
}
