// core/src/schema.rs

//! Table definitions for the three relations.
//!
//! `users.email` and `skills.skill` are unique, `(user_id, skill_id)` is the
//! association's primary key and both association columns reference their
//! parent rows. These constraints are what the engine relies on to detect
//! conflicts; nothing checks for existence before writing.

use sqlx::SqlitePool;
use tracing::{info, instrument};

use crate::error::StoreResult;

const CREATE_USERS: &str = r#"
CREATE TABLE IF NOT EXISTS users (
  id      INTEGER PRIMARY KEY AUTOINCREMENT,
  name    TEXT NOT NULL,
  company TEXT,
  email   TEXT NOT NULL UNIQUE,
  phone   TEXT
)"#;

const CREATE_SKILLS: &str = r#"
CREATE TABLE IF NOT EXISTS skills (
  id    INTEGER PRIMARY KEY AUTOINCREMENT,
  skill TEXT NOT NULL UNIQUE
)"#;

const CREATE_USER_SKILLS: &str = r#"
CREATE TABLE IF NOT EXISTS user_skills (
  user_id  INTEGER NOT NULL,
  skill_id INTEGER NOT NULL,
  rating   INTEGER NOT NULL,
  PRIMARY KEY (user_id, skill_id),
  FOREIGN KEY (user_id) REFERENCES users(id),
  FOREIGN KEY (skill_id) REFERENCES skills(id)
)"#;

// Children first so the foreign keys never dangle mid-reset.
const DROP_ALL: [&str; 3] = [
  "DROP TABLE IF EXISTS user_skills",
  "DROP TABLE IF EXISTS skills",
  "DROP TABLE IF EXISTS users",
];

/// Creates the schema if it is missing. With `reset`, existing tables and
/// their rows are dropped first.
#[instrument(name = "schema::init", skip(pool), err(Display))]
pub async fn init(pool: &SqlitePool, reset: bool) -> StoreResult<()> {
  let mut tx = pool.begin().await?;
  if reset {
    for statement in DROP_ALL {
      sqlx::query(statement).execute(&mut *tx).await?;
    }
    info!("Dropped existing tables.");
  }
  for statement in [CREATE_USERS, CREATE_SKILLS, CREATE_USER_SKILLS] {
    sqlx::query(statement).execute(&mut *tx).await?;
  }
  tx.commit().await?;
  info!("Schema ready.");
  Ok(())
}
