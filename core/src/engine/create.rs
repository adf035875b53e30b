// core/src/engine/create.rs

use sqlx::SqlitePool;
use tracing::{info, instrument, warn};

use super::{begin_write, skills, view_in_tx};
use crate::error::{StoreError, StoreResult};
use crate::lookup;
use crate::models::{NewUser, UserView};

/// Inserts a user and its skills in one transaction.
///
/// An email that is already registered yields `EmailTaken` and leaves the
/// existing user untouched. If any skill fails, the user insert is rolled
/// back with it.
#[instrument(name = "engine::create_user", skip(pool, input), fields(email = %input.email), err(Display))]
pub async fn create_user(pool: &SqlitePool, input: &NewUser) -> StoreResult<UserView> {
  let mut tx = begin_write(pool).await?;

  let inserted = sqlx::query(
    "INSERT INTO users (name, company, email, phone) VALUES (?, ?, ?, ?)
     ON CONFLICT(email) DO NOTHING",
  )
  .bind(&input.name)
  .bind(&input.company)
  .bind(&input.email)
  .bind(&input.phone)
  .execute(&mut *tx)
  .await
  .map_err(|e| StoreError::from_user_write(e, &input.email))?
  .rows_affected();

  if inserted == 0 {
    warn!("Email already registered; user not created.");
    return Err(StoreError::EmailTaken {
      email: input.email.clone(),
    });
  }

  let user = lookup::find_user_by_email(&mut *tx, &input.email)
    .await?
    .ok_or_else(|| StoreError::UserNotFound {
      email: input.email.clone(),
    })?;

  skills::upsert_skills_for_user(&mut tx, &input.skills, &user).await?;

  let view = view_in_tx(&mut tx, &input.email).await?;
  tx.commit().await?;

  info!(skill_count = view.skills.len(), "User created.");
  Ok(view)
}
