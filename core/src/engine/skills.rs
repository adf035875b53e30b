// core/src/engine/skills.rs

//! The skill upsert primitive, split into its two steps.
//!
//! All three functions run on a connection the caller has already put inside
//! a transaction. They never commit; a returned error is the caller's signal
//! to drop (and so roll back) the whole transaction.

use sqlx::SqliteConnection;
use tracing::{debug, instrument};

use crate::error::{StoreError, StoreResult};
use crate::lookup;
use crate::models::{Skill, SkillInput, User};

/// Inserts `name` into the shared vocabulary unless it is already there, then
/// returns its row. An existing skill is never modified.
#[instrument(name = "engine::ensure_skill", skip(conn), err(Display))]
pub async fn ensure_skill(conn: &mut SqliteConnection, name: &str) -> StoreResult<Skill> {
  let inserted = sqlx::query("INSERT INTO skills (skill) VALUES (?) ON CONFLICT(skill) DO NOTHING")
    .bind(name)
    .execute(&mut *conn)
    .await
    .map_err(StoreError::from_constraint)?
    .rows_affected();

  if inserted == 0 {
    debug!("Skill already declared.");
  } else {
    debug!("Skill added to vocabulary.");
  }

  lookup::find_skill_by_name(&mut *conn, name)
    .await?
    .ok_or_else(|| StoreError::SkillUnresolved {
      skill: name.to_string(),
    })
}

/// Records `rating` for the (user, skill) pair, overwriting only the rating
/// when the pair already exists.
#[instrument(name = "engine::upsert_user_skill", skip(conn), err(Display))]
pub async fn upsert_user_skill(
  conn: &mut SqliteConnection,
  user_id: i64,
  skill_id: i64,
  rating: i64,
) -> StoreResult<()> {
  sqlx::query(
    "INSERT INTO user_skills (user_id, skill_id, rating) VALUES (?, ?, ?)
     ON CONFLICT(user_id, skill_id) DO UPDATE SET rating = excluded.rating",
  )
  .bind(user_id)
  .bind(skill_id)
  .bind(rating)
  .execute(&mut *conn)
  .await
  .map_err(StoreError::from_constraint)?;
  Ok(())
}

/// Applies `skills` to `user` in the order given. Stops at the first failure.
#[instrument(
  name = "engine::upsert_skills_for_user",
  skip(conn, skills, user),
  fields(user_email = %user.email, skill_count = skills.len()),
  err(Display)
)]
pub async fn upsert_skills_for_user(conn: &mut SqliteConnection, skills: &[SkillInput], user: &User) -> StoreResult<()> {
  for input in skills {
    let skill = ensure_skill(&mut *conn, &input.skill).await?;
    upsert_user_skill(&mut *conn, user.id, skill.id, input.rating).await?;
  }
  debug!("Skills applied.");
  Ok(())
}
