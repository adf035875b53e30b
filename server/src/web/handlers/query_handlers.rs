// server/src/web/handlers/query_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use skillbase::{FreqFilter, SkillFilter, UserFilters};
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize, Debug, Default)]
pub struct AllUsersQuery {
  pub limit: Option<u32>,
}

#[derive(Deserialize, Debug, Default)]
pub struct GetUsersRequest {
  #[serde(default)]
  pub limit: Option<u32>,
  #[serde(default)]
  pub name: Option<String>,
  #[serde(default)]
  pub company: Option<String>,
  #[serde(default)]
  pub email: Option<String>,
  #[serde(default)]
  pub phone: Option<String>,
  #[serde(default)]
  pub skills: Vec<SkillFilter>,
}

impl GetUsersRequest {
  fn into_parts(self) -> (UserFilters, Option<u32>) {
    let filters = UserFilters {
      name: self.name,
      company: self.company,
      email: self.email,
      phone: self.phone,
      skills: self.skills,
    };
    (filters, self.limit)
  }
}

#[derive(Deserialize, Debug, Default)]
pub struct SkillsFreqRequest {
  #[serde(default)]
  pub limit: Option<u32>,
  #[serde(default)]
  pub filter: FreqFilter,
}

// Limits are positive counts; an explicit 0 is rejected rather than read as
// "nothing" or "everything".
fn positive_limit(limit: Option<u32>) -> Result<Option<u32>, AppError> {
  match limit {
    Some(0) => Err(AppError::BadRequest("limit must be a positive integer".to_string())),
    other => Ok(other),
  }
}

#[instrument(name = "handler::all_users", skip(app_state, query), fields(limit = ?query.limit))]
pub async fn all_users_handler(
  app_state: web::Data<AppState>,
  query: web::Query<AllUsersQuery>,
) -> Result<HttpResponse, AppError> {
  let limit = positive_limit(query.limit)?;
  let users = app_state.directory.all_users(limit).await?;
  info!("Fetched {} users.", users.len());
  Ok(HttpResponse::Ok().json(users))
}

#[instrument(name = "handler::get_user_info", skip(app_state, path), fields(email = %path.as_ref()))]
pub async fn get_user_info_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let email = path.into_inner();
  // Unknown email serialises as `null`.
  let view = app_state.directory.get_user_info(&email).await?;
  Ok(HttpResponse::Ok().json(view))
}

#[instrument(name = "handler::get_users", skip(app_state, req_body))]
pub async fn get_users_handler(
  app_state: web::Data<AppState>,
  req_body: web::Json<GetUsersRequest>,
) -> Result<HttpResponse, AppError> {
  let (filters, limit) = req_body.into_inner().into_parts();
  let views = app_state.directory.get_users(&filters, positive_limit(limit)?).await?;
  info!(skill_filters = filters.skills.len(), "Matched {} users.", views.len());
  Ok(HttpResponse::Ok().json(views))
}

#[instrument(name = "handler::get_skills_freq", skip(app_state, req_body))]
pub async fn get_skills_freq_handler(
  app_state: web::Data<AppState>,
  req_body: web::Json<SkillsFreqRequest>,
) -> Result<HttpResponse, AppError> {
  let SkillsFreqRequest { limit, filter } = req_body.into_inner();
  let frequencies = app_state.directory.get_skills_freq(filter, positive_limit(limit)?).await?;
  Ok(HttpResponse::Ok().json(frequencies))
}
