// core/src/models/skill.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `skills` table. Skills are a shared vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Skill {
  pub id: i64,
  pub skill: String,
}

/// One (skill name, rating) pair of a user's skill list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, FromRow)]
pub struct SkillRating {
  pub skill: String,
  pub rating: i64,
}

/// Number of distinct users holding a skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct SkillFreq {
  pub skill: String,
  pub freq: i64,
}
