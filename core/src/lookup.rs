// core/src/lookup.rs

//! Read accessors shared by the engine and the query layer.
//!
//! Each accessor takes any SQLite executor, so the same function serves a
//! pooled read (`&pool`) and a read inside an open transaction (`&mut *tx`).
//! Nothing here writes and nothing is cached.

use sqlx::{Executor, Sqlite};

use crate::error::StoreResult;
use crate::models::{Skill, SkillRating, User};

pub async fn find_user_by_email<'e, E>(executor: E, email: &str) -> StoreResult<Option<User>>
where
  E: Executor<'e, Database = Sqlite>,
{
  let user = sqlx::query_as::<_, User>("SELECT id, name, company, email, phone FROM users WHERE email = ?")
    .bind(email)
    .fetch_optional(executor)
    .await?;
  Ok(user)
}

pub async fn find_skill_by_name<'e, E>(executor: E, name: &str) -> StoreResult<Option<Skill>>
where
  E: Executor<'e, Database = Sqlite>,
{
  let skill = sqlx::query_as::<_, Skill>("SELECT id, skill FROM skills WHERE skill = ?")
    .bind(name)
    .fetch_optional(executor)
    .await?;
  Ok(skill)
}

/// The user's (skill, rating) pairs. Order carries no meaning.
pub async fn list_skills_for_user<'e, E>(executor: E, user_id: i64) -> StoreResult<Vec<SkillRating>>
where
  E: Executor<'e, Database = Sqlite>,
{
  let skills = sqlx::query_as::<_, SkillRating>(
    "SELECT skills.skill, user_skills.rating
     FROM user_skills
     JOIN skills ON user_skills.skill_id = skills.id
     WHERE user_skills.user_id = ?",
  )
  .bind(user_id)
  .fetch_all(executor)
  .await?;
  Ok(skills)
}
