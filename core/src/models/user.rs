// core/src/models/user.rs

use serde::Serialize;
use sqlx::FromRow;

/// A row of the `users` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct User {
  #[serde(skip_serializing)] // Surrogate key stays internal; email is the external key
  pub id: i64,
  pub name: String,
  pub company: Option<String>,
  pub email: String,
  pub phone: Option<String>,
}
