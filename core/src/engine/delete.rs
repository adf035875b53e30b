// core/src/engine/delete.rs

use sqlx::SqlitePool;
use tracing::{info, instrument};

use super::begin_write;
use crate::error::{StoreError, StoreResult};
use crate::lookup;

/// Removes a user and all of its skill associations.
///
/// Associations go first, then the user row, so the foreign keys hold at
/// every statement boundary. Both deletes commit together or not at all.
/// Skills themselves are shared and stay.
#[instrument(name = "engine::delete_user", skip(pool), err(Display))]
pub async fn delete_user(pool: &SqlitePool, email: &str) -> StoreResult<()> {
  let mut tx = begin_write(pool).await?;

  let user = lookup::find_user_by_email(&mut *tx, email)
    .await?
    .ok_or_else(|| StoreError::UserNotFound {
      email: email.to_string(),
    })?;

  let associations = sqlx::query("DELETE FROM user_skills WHERE user_id = ?")
    .bind(user.id)
    .execute(&mut *tx)
    .await
    .map_err(StoreError::from_constraint)?
    .rows_affected();

  sqlx::query("DELETE FROM users WHERE id = ?")
    .bind(user.id)
    .execute(&mut *tx)
    .await
    .map_err(StoreError::from_constraint)?;

  tx.commit().await?;

  info!(associations_removed = associations, "User deleted.");
  Ok(())
}
