// core/src/engine/mod.rs

//! The consistency engine: every mutation of users and their skills.
//!
//! Each public operation opens exactly one transaction on the pool it is
//! given and commits only after its last write. Any error drops the
//! transaction, which rolls back every write made so far. Conflicts are
//! detected by the schema's constraints, not by reading first.
//!
//! Transactions open with `BEGIN IMMEDIATE`, taking SQLite's write lock up
//! front. A deferred transaction that reads before it writes cannot wait for
//! that lock when it later upgrades; it fails with `SQLITE_BUSY` instead.

pub mod create;
pub mod delete;
pub mod skills;
pub mod update;

pub use create::create_user;
pub use delete::delete_user;
pub use skills::{ensure_skill, upsert_skills_for_user, upsert_user_skill};
pub use update::update_user;

use sqlx::{Sqlite, SqliteConnection, SqlitePool, Transaction};

use crate::error::{StoreError, StoreResult};
use crate::lookup;
use crate::models::UserView;

/// Opens a write transaction. Competing writers queue on the connection's
/// busy timeout instead of failing.
pub(crate) async fn begin_write(pool: &SqlitePool) -> StoreResult<Transaction<'static, Sqlite>> {
  Ok(pool.begin_with("BEGIN IMMEDIATE").await?)
}

/// Builds the projection for `email` from inside the caller's transaction, so
/// the returned view reflects writes that are not committed yet.
pub(crate) async fn view_in_tx(conn: &mut SqliteConnection, email: &str) -> StoreResult<UserView> {
  let user = lookup::find_user_by_email(&mut *conn, email)
    .await?
    .ok_or_else(|| StoreError::UserNotFound {
      email: email.to_string(),
    })?;
  let skills = lookup::list_skills_for_user(&mut *conn, user.id).await?;
  Ok(UserView::new(user, skills))
}
