// core/src/engine/update.rs

use sqlx::SqlitePool;
use tracing::{info, instrument};

use super::{begin_write, skills, view_in_tx};
use crate::error::{StoreError, StoreResult};
use crate::models::{User, UserPatch, UserView};
use crate::{lookup, query};

/// Field-level merge: a present patch value wins, an absent one keeps what is
/// stored. The id never changes.
fn merge(existing: User, patch: &UserPatch) -> User {
  User {
    id: existing.id,
    name: patch.name.clone().unwrap_or(existing.name),
    company: patch.company.clone().or(existing.company),
    email: patch.email.clone().unwrap_or(existing.email),
    phone: patch.phone.clone().or(existing.phone),
  }
}

/// Applies `patch` to the user registered under `email`.
///
/// Without a patch this is a plain read of the current projection. The
/// update is matched on the original email; renaming onto an email held by
/// another user fails with `EmailTaken` and nothing is written. The returned
/// view is keyed by the new email when the patch carries one.
#[instrument(name = "engine::update_user", skip(pool, patch), fields(has_patch = patch.is_some()), err(Display))]
pub async fn update_user(pool: &SqlitePool, email: &str, patch: Option<&UserPatch>) -> StoreResult<UserView> {
  let Some(patch) = patch else {
    return query::get_user_info(pool, email).await;
  };

  let mut tx = begin_write(pool).await?;

  let existing = lookup::find_user_by_email(&mut *tx, email)
    .await?
    .ok_or_else(|| StoreError::UserNotFound {
      email: email.to_string(),
    })?;

  let merged = merge(existing, patch);

  sqlx::query("UPDATE users SET name = ?, company = ?, email = ?, phone = ? WHERE email = ?")
    .bind(&merged.name)
    .bind(&merged.company)
    .bind(&merged.email)
    .bind(&merged.phone)
    .bind(email)
    .execute(&mut *tx)
    .await
    .map_err(|e| StoreError::from_user_write(e, &merged.email))?;

  if let Some(skill_inputs) = &patch.skills {
    skills::upsert_skills_for_user(&mut tx, skill_inputs, &merged).await?;
  }

  let view = view_in_tx(&mut tx, &merged.email).await?;
  tx.commit().await?;

  info!(new_email = %merged.email, "User updated.");
  Ok(view)
}
