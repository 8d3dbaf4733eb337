//! Runtime configuration, read from the command line with environment fall-backs.

use clap::Parser;
use std::path::PathBuf;

/// Default request body limit for JSON payloads (1 MiB).
pub const DEFAULT_JSON_LIMIT: usize = 1024 * 1024;

#[derive(Debug, Clone, Parser)]
#[command(name = "monkey-registry", version, about = "Monkey Registry HTTP API")]
pub struct AppConfig {
    /// Address to bind the HTTP server to.
    #[arg(long, env = "MONKEY_REGISTRY_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind the HTTP server to.
    #[arg(long, env = "MONKEY_REGISTRY_PORT", default_value_t = 8080)]
    pub port: u16,

    /// SQLite database file. Created on first start.
    #[arg(long, env = "MONKEY_REGISTRY_DB", default_value = "monkeys.db")]
    pub database: PathBuf,

    /// Value sent in `Access-Control-Allow-Origin`.
    #[arg(long, env = "CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Maximum accepted JSON body size in bytes.
    #[arg(long, env = "MONKEY_REGISTRY_JSON_LIMIT", default_value_t = DEFAULT_JSON_LIMIT)]
    pub json_limit: usize,
}

impl AppConfig {
    pub fn bind_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
