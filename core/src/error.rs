// core/src/error.rs
use sqlx::error::ErrorKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
  #[error("No user registered under email '{email}'")]
  UserNotFound { email: String },

  #[error("Email '{email}' is already registered to another user")]
  EmailTaken { email: String },

  #[error("Skill '{skill}' could not be resolved after insert-or-ignore")]
  SkillUnresolved { skill: String },

  #[error("Constraint violated: {message}")]
  Constraint { message: String },

  #[error("Database error: {0}")]
  Database(#[from] sqlx::Error),
}

impl StoreError {
  /// True for outcomes the caller caused (unknown target, taken email),
  /// false for faults in the storage layer itself.
  pub fn is_logical(&self) -> bool {
    matches!(self, StoreError::UserNotFound { .. } | StoreError::EmailTaken { .. })
  }

  /// Maps a failed write to the users table. A unique violation there can
  /// only be the email column.
  pub(crate) fn from_user_write(err: sqlx::Error, email: &str) -> Self {
    if let sqlx::Error::Database(db_err) = &err {
      if db_err.is_unique_violation() {
        return StoreError::EmailTaken {
          email: email.to_string(),
        };
      }
    }
    StoreError::from_constraint(err)
  }

  /// Maps any constraint violation (unique, foreign key, not-null, check) to
  /// `Constraint`; other failures stay `Database`.
  pub(crate) fn from_constraint(err: sqlx::Error) -> Self {
    if let sqlx::Error::Database(db_err) = &err {
      if !matches!(db_err.kind(), ErrorKind::Other) {
        return StoreError::Constraint {
          message: db_err.message().to_string(),
        };
      }
    }
    StoreError::Database(err)
  }
}

pub type StoreResult<T, E = StoreError> = std::result::Result<T, E>;
