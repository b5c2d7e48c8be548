// src/config.rs
use crate::cli::Cli;
use crate::target::ConnectionTarget;
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_APP_NAME: &str = "mongo-connect";

/// Contents of the optional `--config` YAML file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub app_name: Option<String>,
}

pub fn load_file_config<P: AsRef<Path>>(path: P) -> Result<FileConfig> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config: FileConfig = serde_yaml::from_str(&text)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;
    Ok(config)
}

/// Everything the connector needs, resolved before it is invoked.
#[derive(Debug, Clone)]
pub struct Settings {
    pub target: ConnectionTarget,
    pub app_name: String,
    pub health_file: Option<String>,
}

impl Settings {
    /// Flag (or `MONGODB_URI`, folded in by clap) wins over the config file.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => load_file_config(path)?,
            None => FileConfig::default(),
        };
        Self::from_sources(cli, file)
    }

    pub fn from_sources(cli: &Cli, file: FileConfig) -> Result<Self> {
        let target = cli
            .mongo_uri
            .as_deref()
            .and_then(ConnectionTarget::new)
            .or_else(|| file.uri.and_then(ConnectionTarget::new))
            .ok_or_else(|| {
                anyhow!("no connection target: pass --mongo-uri, set MONGODB_URI, or add `uri` to the config file")
            })?;

        let app_name = file
            .app_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_APP_NAME.to_string());

        Ok(Self {
            target,
            app_name,
            health_file: cli.health_file.clone(),
        })
    }
}
