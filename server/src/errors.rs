// server/src/errors.rs

use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use skillbase::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Bad Request: {0}")]
  BadRequest(String),

  #[error("Store Error: {0}")]
  Store(#[from] StoreError),

  #[error("Seed Error: {0}")]
  Seed(String),

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

// Bootstrap code works in anyhow; whatever reaches a response or `main`
// becomes Internal unless it was one of ours to begin with.
impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    match err.downcast::<AppError>() {
      Ok(app_err) => app_err,
      Err(err) => match err.downcast::<StoreError>() {
        Ok(store_err) => AppError::Store(store_err),
        Err(err) => AppError::Internal(format!("{:#}", err)),
      },
    }
  }
}

impl ResponseError for AppError {
  fn error_response(&self) -> HttpResponse {
    if let AppError::BadRequest(_) = self {
      tracing::warn!(application_error = %self, "Rejecting request");
    } else {
      tracing::error!(application_error = %self, "Responding with error");
    }
    match self {
      AppError::Config(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "Configuration issue", "detail": m}))
      }
      AppError::BadRequest(m) => HttpResponse::BadRequest().json(json!({"error": "Invalid request", "detail": m})),
      // Logical outcomes never get here: the directory folds them into null/false.
      AppError::Store(_) => HttpResponse::InternalServerError().json(json!({"error": "Database operation failed"})),
      AppError::Seed(m) => HttpResponse::InternalServerError().json(json!({"error": "Seeding failed", "detail": m})),
      AppError::Internal(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "An internal error occurred", "detail": m}))
      }
    }
  }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
