// core/src/store.rs

//! The datastore handle. A `Store` is cheap to clone (it wraps a pool) and
//! is passed explicitly to whatever needs it.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::{info, instrument};

use crate::error::StoreResult;
use crate::models::{FreqFilter, NewUser, SkillFreq, User, UserFilters, UserPatch, UserView};
use crate::seed::SeedReport;
use crate::{engine, query, schema, seed};

#[derive(Debug, Clone)]
pub struct Store {
  pool: SqlitePool,
}

impl Store {
  /// Opens (creating if needed) the database at `url` with foreign keys
  /// enforced. An in-memory URL is always served by a single connection,
  /// since every SQLite connection to `:memory:` gets its own database.
  #[instrument(name = "Store::connect", err(Display))]
  pub async fn connect(url: &str, max_connections: u32) -> StoreResult<Self> {
    let options = SqliteConnectOptions::from_str(url)?
      .create_if_missing(true)
      .foreign_keys(true);

    if url.contains(":memory:") {
      return Self::single_connection(options).await;
    }

    let pool = SqlitePoolOptions::new()
      .max_connections(max_connections.max(1))
      .connect_with(options)
      .await?;
    info!("Connected to database.");
    Ok(Self { pool })
  }

  /// A fresh, empty in-memory database with the schema in place.
  pub async fn in_memory() -> StoreResult<Self> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
    let store = Self::single_connection(options).await?;
    store.init_schema(false).await?;
    Ok(store)
  }

  async fn single_connection(options: SqliteConnectOptions) -> StoreResult<Self> {
    let pool = SqlitePoolOptions::new()
      .max_connections(1)
      .min_connections(1)
      .idle_timeout(None)
      .max_lifetime(None)
      .connect_with(options)
      .await?;
    Ok(Self { pool })
  }

  pub fn from_pool(pool: SqlitePool) -> Self {
    Self { pool }
  }

  pub fn pool(&self) -> &SqlitePool {
    &self.pool
  }

  pub async fn init_schema(&self, reset: bool) -> StoreResult<()> {
    schema::init(&self.pool, reset).await
  }

  // --- Consistency engine ---

  pub async fn create_user(&self, input: &NewUser) -> StoreResult<UserView> {
    engine::create_user(&self.pool, input).await
  }

  pub async fn update_user(&self, email: &str, patch: Option<&UserPatch>) -> StoreResult<UserView> {
    engine::update_user(&self.pool, email, patch).await
  }

  pub async fn delete_user(&self, email: &str) -> StoreResult<()> {
    engine::delete_user(&self.pool, email).await
  }

  // --- Query layer ---

  pub async fn all_users(&self, limit: Option<u32>) -> StoreResult<Vec<User>> {
    query::all_users(&self.pool, limit).await
  }

  pub async fn get_user_info(&self, email: &str) -> StoreResult<UserView> {
    query::get_user_info(&self.pool, email).await
  }

  pub async fn get_users(&self, filters: &UserFilters, limit: Option<u32>) -> StoreResult<Vec<UserView>> {
    query::get_users(&self.pool, filters, limit).await
  }

  pub async fn get_skills_freq(&self, filter: FreqFilter, limit: Option<u32>) -> StoreResult<Vec<SkillFreq>> {
    query::get_skills_freq(&self.pool, filter, limit).await
  }

  // --- Bootstrap ---

  pub async fn seed(&self, records: &[NewUser]) -> StoreResult<SeedReport> {
    seed::seed_users(&self.pool, records).await
  }
}
