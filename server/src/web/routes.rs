// server/src/web/routes.rs

use actix_web::web;

use crate::web::handlers::{query_handlers, user_handlers};

// Request bodies carry at most a user record with its skill list.
const JSON_BODY_LIMIT: usize = 256 * 1024;

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// Called from `main.rs` (and the API tests) to mount the façade on an App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api/v1")
      .app_data(web::JsonConfig::default().limit(JSON_BODY_LIMIT))
      .route("/health", web::get().to(health_check_handler))
      .service(
        web::scope("/users")
          .route("", web::get().to(query_handlers::all_users_handler))
          .route("", web::post().to(user_handlers::new_user_handler))
          // Registered ahead of `/{email}` so "search" is never taken for an address.
          .route("/search", web::post().to(query_handlers::get_users_handler))
          .route("/{email}", web::get().to(query_handlers::get_user_info_handler))
          .route("/{email}", web::patch().to(user_handlers::update_user_handler))
          .route("/{email}", web::delete().to(user_handlers::delete_user_handler)),
      )
      .service(
        web::scope("/skills").route("/frequency", web::post().to(query_handlers::get_skills_freq_handler)),
      ),
  );
}
