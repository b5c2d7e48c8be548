// src/cli.rs
use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// MongoDB connection URI (scheme, credentials, host, default database)
    #[arg(long, env = "MONGODB_URI", hide_env_values = true)]
    pub mongo_uri: Option<String>,

    /// YAML file providing `uri` and `app_name` when not given on the command line
    #[arg(long)]
    pub config: Option<String>,

    /// Write the connection timestamp (ms) to this file once connected
    #[arg(long)]
    pub health_file: Option<String>,

    #[arg(long)]
    pub debug: bool,
}
