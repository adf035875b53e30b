// server/src/bootstrap.rs

//! Opens the datastore, prepares the schema and optionally seeds it.

use anyhow::Context;
use skillbase::{NewUser, SeedReport, Store};
use std::path::Path;
use tracing::{info, instrument};

use crate::config::AppConfig;
use crate::errors::{AppError, Result};

/// Reads a JSON array of user records, the same shape `newUser` accepts.
pub fn load_seed_file(path: &Path) -> anyhow::Result<Vec<NewUser>> {
  let raw = std::fs::read_to_string(path).with_context(|| format!("reading seed file {}", path.display()))?;
  let records: Vec<NewUser> =
    serde_json::from_str(&raw).with_context(|| format!("parsing seed file {}", path.display()))?;
  Ok(records)
}

pub async fn seed_from_file(store: &Store, path: &Path) -> Result<SeedReport> {
  let records = load_seed_file(path).map_err(|e| AppError::Seed(format!("{:#}", e)))?;
  let report = store.seed(&records).await?;
  Ok(report)
}

#[instrument(name = "bootstrap::open_store", skip(config), fields(database_url = %config.database_url))]
pub async fn open_store(config: &AppConfig) -> Result<Store> {
  let store = Store::connect(&config.database_url, config.db_max_connections)
    .await
    .context("connecting to the database")?;

  store
    .init_schema(config.reset_db)
    .await
    .context("initialising the schema")?;

  if config.seed_db {
    let report = seed_from_file(&store, &config.seed_file).await?;
    info!(
      inserted = report.users_inserted,
      updated = report.users_updated,
      "Database seeded from {}.",
      config.seed_file.display()
    );
  }

  Ok(store)
}
