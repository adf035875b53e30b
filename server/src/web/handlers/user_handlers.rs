// server/src/web/handlers/user_handlers.rs

use actix_web::{web, HttpResponse};
use skillbase::{NewUser, UserPatch};
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::state::AppState;

#[instrument(name = "handler::new_user", skip(app_state, req_body), fields(email = %req_body.email))]
pub async fn new_user_handler(
  app_state: web::Data<AppState>,
  req_body: web::Json<NewUser>,
) -> Result<HttpResponse, AppError> {
  let input = req_body.into_inner();
  let created = app_state.directory.new_user(&input).await;
  match &created {
    Some(view) => info!(skills = view.skills.len(), "User created."),
    None => warn!("User not created."),
  }
  Ok(HttpResponse::Ok().json(created))
}

// Only an empty (or whitespace) body means "no patch". Anything else must
// parse as a patch.
fn parse_patch(body: &[u8]) -> Result<Option<UserPatch>, AppError> {
  if body.iter().all(u8::is_ascii_whitespace) {
    return Ok(None);
  }
  serde_json::from_slice(body)
    .map(Some)
    .map_err(|e| AppError::BadRequest(format!("Invalid patch body: {}", e)))
}

/// Without a body the call is a plain read of the current projection. A body
/// that does not parse as a patch is rejected with 400.
#[instrument(name = "handler::update_user", skip(app_state, path, body), fields(email = %path.as_ref()))]
pub async fn update_user_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  body: web::Bytes,
) -> Result<HttpResponse, AppError> {
  let email = path.into_inner();
  let patch = parse_patch(&body)?;
  let updated = app_state.directory.update_user(&email, patch.as_ref()).await;
  if updated.is_none() {
    warn!("User not updated.");
  }
  Ok(HttpResponse::Ok().json(updated))
}

#[instrument(name = "handler::delete_user", skip(app_state, path), fields(email = %path.as_ref()))]
pub async fn delete_user_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let email = path.into_inner();
  let deleted = app_state.directory.delete_user(&email).await;
  info!(deleted, "Delete processed.");
  Ok(HttpResponse::Ok().json(deleted))
}
