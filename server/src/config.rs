// server/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub database_url: String,
  pub db_max_connections: u32,

  // Drop and recreate the schema before anything else touches it
  pub reset_db: bool,

  // Optional: load user records from `seed_file` on startup
  pub seed_db: bool,
  pub seed_file: PathBuf,
}

fn parse_var<T>(name: &str, default: &str) -> Result<T>
where
  T: std::str::FromStr,
  T::Err: std::fmt::Display,
{
  env::var(name)
    .unwrap_or_else(|_| default.to_string())
    .parse::<T>()
    .map_err(|e| AppError::Config(format!("Invalid {}: {}", name, e)))
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = parse_var::<u16>("SERVER_PORT", "4000")?;
    let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://database.db".to_string());
    let db_max_connections = parse_var::<u32>("DB_MAX_CONNECTIONS", "5")?;
    if db_max_connections == 0 {
      return Err(AppError::Config("DB_MAX_CONNECTIONS must be at least 1".to_string()));
    }

    let reset_db = parse_var::<bool>("RESET_DB", "false")?;
    let seed_db = parse_var::<bool>("SEED_DB", "false")?;
    let seed_file = PathBuf::from(env::var("SEED_FILE").unwrap_or_else(|_| "data/seed.json".to_string()));

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      database_url,
      db_max_connections,
      reset_db,
      seed_db,
      seed_file,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}
