// server/tests/api_tests.rs
use actix_web::{http::StatusCode, test, web as actix_data, App};
use serde_json::{json, Value};
use skillbase::Store;
use skillbase_server::bootstrap;
use skillbase_server::config::AppConfig;
use skillbase_server::state::AppState;
use skillbase_server::web;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

fn test_config() -> AppConfig {
  AppConfig {
    server_host: "127.0.0.1".to_string(),
    server_port: 0,
    database_url: "sqlite::memory:".to_string(),
    db_max_connections: 1,
    reset_db: false,
    seed_db: false,
    seed_file: PathBuf::from("data/seed.json"),
  }
}

fn state_for(store: Store) -> AppState {
  AppState {
    directory: Arc::new(store),
    config: Arc::new(test_config()),
  }
}

macro_rules! app {
  ($store:expr) => {
    test::init_service(
      App::new()
        .app_data(actix_data::Data::new(state_for($store)))
        .configure(web::configure_app_routes),
    )
    .await
  };
}

fn ada_body() -> Value {
  json!({
    "name": "Ada Lovelace",
    "company": "Analytical Engines",
    "email": "ada@example.com",
    "phone": "+44 20 7946 0000",
    "skills": [{"skill": "Rust", "rating": 5}, {"skill": "Go", "rating": 3}]
  })
}

fn rating(view: &Value, skill: &str) -> Option<i64> {
  view["skills"]
    .as_array()?
    .iter()
    .find(|s| s["skill"] == skill)
    .and_then(|s| s["rating"].as_i64())
}

#[actix_web::test]
async fn test_health() {
  let app = app!(Store::in_memory().await.unwrap());
  let req = test::TestRequest::get().uri("/api/v1/health").to_request();
  let body: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(body, json!({"status": "ok"}));
}

#[actix_web::test]
async fn test_new_user_then_get_user_info() {
  let app = app!(Store::in_memory().await.unwrap());

  let req = test::TestRequest::post().uri("/api/v1/users").set_json(ada_body()).to_request();
  let created: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(created["email"], "ada@example.com");
  assert_eq!(rating(&created, "Rust"), Some(5));
  // The surrogate id stays internal.
  assert!(created.get("id").is_none());

  let req = test::TestRequest::get().uri("/api/v1/users/ada@example.com").to_request();
  let fetched: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(fetched["name"], "Ada Lovelace");
  assert_eq!(rating(&fetched, "Go"), Some(3));
}

#[actix_web::test]
async fn test_duplicate_new_user_returns_null() {
  let app = app!(Store::in_memory().await.unwrap());
  let req = test::TestRequest::post().uri("/api/v1/users").set_json(ada_body()).to_request();
  let _: Value = test::call_and_read_body_json(&app, req).await;

  let req = test::TestRequest::post().uri("/api/v1/users").set_json(ada_body()).to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body: Value = test::read_body_json(resp).await;
  assert!(body.is_null());
}

#[actix_web::test]
async fn test_unknown_user_info_is_null() {
  let app = app!(Store::in_memory().await.unwrap());
  let req = test::TestRequest::get().uri("/api/v1/users/ghost@example.com").to_request();
  let body: Value = test::call_and_read_body_json(&app, req).await;
  assert!(body.is_null());
}

#[actix_web::test]
async fn test_update_user_with_and_without_body() {
  let app = app!(Store::in_memory().await.unwrap());
  let req = test::TestRequest::post().uri("/api/v1/users").set_json(ada_body()).to_request();
  let created: Value = test::call_and_read_body_json(&app, req).await;

  // No body: the current projection comes back unchanged.
  let req = test::TestRequest::patch().uri("/api/v1/users/ada@example.com").to_request();
  let read: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(read, created);

  let req = test::TestRequest::patch()
    .uri("/api/v1/users/ada@example.com")
    .set_json(json!({"phone": "555-0100", "skills": [{"skill": "Rust", "rating": 2}]}))
    .to_request();
  let updated: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(updated["phone"], "555-0100");
  assert_eq!(updated["company"], "Analytical Engines");
  assert_eq!(rating(&updated, "Rust"), Some(2));
  assert_eq!(rating(&updated, "Go"), Some(3));

  let req = test::TestRequest::patch()
    .uri("/api/v1/users/ghost@example.com")
    .set_json(json!({"name": "Ghost"}))
    .to_request();
  let missing: Value = test::call_and_read_body_json(&app, req).await;
  assert!(missing.is_null());
}

#[actix_web::test]
async fn test_delete_user_reports_outcome() {
  let app = app!(Store::in_memory().await.unwrap());
  let req = test::TestRequest::post().uri("/api/v1/users").set_json(ada_body()).to_request();
  let _: Value = test::call_and_read_body_json(&app, req).await;

  let req = test::TestRequest::delete().uri("/api/v1/users/ada@example.com").to_request();
  let deleted: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(deleted, json!(true));

  let req = test::TestRequest::delete().uri("/api/v1/users/ada@example.com").to_request();
  let again: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(again, json!(false));
}

#[actix_web::test]
async fn test_queries_over_seeded_store() {
  let store = Store::in_memory().await.unwrap();
  let report = bootstrap::seed_from_file(&store, &PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/seed.json"))
    .await
    .unwrap();
  assert_eq!(report.users_inserted, 3);
  let app = app!(store);

  let req = test::TestRequest::get().uri("/api/v1/users?limit=2").to_request();
  let users: Value = test::call_and_read_body_json(&app, req).await;
  let users = users.as_array().unwrap();
  assert_eq!(users.len(), 2);
  assert_eq!(users[0]["email"], "ada@example.com");
  assert!(users[0].get("skills").is_none());

  let req = test::TestRequest::post()
    .uri("/api/v1/users/search")
    .set_json(json!({"skills": [{"skill": "Go", "min_rating": 4}]}))
    .to_request();
  let matched: Value = test::call_and_read_body_json(&app, req).await;
  let matched = matched.as_array().unwrap();
  assert_eq!(matched.len(), 1);
  assert_eq!(matched[0]["email"], "grace@example.com");
  assert_eq!(rating(&matched[0], "COBOL"), Some(5));

  let req = test::TestRequest::post()
    .uri("/api/v1/skills/frequency")
    .set_json(json!({"filter": {"min_freq": 2}}))
    .to_request();
  let freqs: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(freqs, json!([{"skill": "Go", "freq": 2}]));

  let req = test::TestRequest::post()
    .uri("/api/v1/skills/frequency")
    .set_json(json!({}))
    .to_request();
  let all: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(all.as_array().unwrap().len(), 4);
}

#[actix_web::test]
async fn test_open_store_seeds_from_configured_file() {
  let mut seed = tempfile::NamedTempFile::new().unwrap();
  write!(
    seed,
    r#"[{{"name": "Rob Pike", "email": "rob@example.com", "skills": [{{"skill": "Go", "rating": 5}}]}}]"#
  )
  .unwrap();

  let config = AppConfig {
    seed_db: true,
    seed_file: seed.path().to_path_buf(),
    ..test_config()
  };
  let store = bootstrap::open_store(&config).await.unwrap();
  let view = store.get_user_info("rob@example.com").await.unwrap();
  assert_eq!(view.rating_of("Go"), Some(5));
}

#[actix_web::test]
async fn test_malformed_seed_file_is_a_seed_error() {
  let mut seed = tempfile::NamedTempFile::new().unwrap();
  write!(seed, "not json").unwrap();
  let store = Store::in_memory().await.unwrap();
  let result = bootstrap::seed_from_file(&store, seed.path()).await;
  assert!(matches!(result, Err(skillbase_server::errors::AppError::Seed(_))));
}

#[actix_web::test]
async fn test_malformed_patch_is_rejected_and_changes_nothing() {
  let app = app!(Store::in_memory().await.unwrap());
  let req = test::TestRequest::post().uri("/api/v1/users").set_json(ada_body()).to_request();
  let created: Value = test::call_and_read_body_json(&app, req).await;

  let req = test::TestRequest::patch()
    .uri("/api/v1/users/ada@example.com")
    .set_json(json!({"phone": 12345, "skills": [{"skill": "Rust", "rating": "high"}]}))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

  let req = test::TestRequest::patch()
    .uri("/api/v1/users/ada@example.com")
    .insert_header(("content-type", "application/json"))
    .set_payload("{not json")
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

  let req = test::TestRequest::get().uri("/api/v1/users/ada@example.com").to_request();
  let fetched: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(fetched, created);
}

#[actix_web::test]
async fn test_whitespace_patch_body_is_a_read() {
  let app = app!(Store::in_memory().await.unwrap());
  let req = test::TestRequest::post().uri("/api/v1/users").set_json(ada_body()).to_request();
  let created: Value = test::call_and_read_body_json(&app, req).await;

  let req = test::TestRequest::patch()
    .uri("/api/v1/users/ada@example.com")
    .set_payload("  \n")
    .to_request();
  let read: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(read, created);
}

#[actix_web::test]
async fn test_zero_limit_is_rejected() {
  let app = app!(Store::in_memory().await.unwrap());

  let req = test::TestRequest::get().uri("/api/v1/users?limit=0").to_request();
  assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

  let req = test::TestRequest::post()
    .uri("/api/v1/users/search")
    .set_json(json!({"limit": 0}))
    .to_request();
  assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

  let req = test::TestRequest::post()
    .uri("/api/v1/skills/frequency")
    .set_json(json!({"limit": 0}))
    .to_request();
  assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

  let req = test::TestRequest::get().uri("/api/v1/users?limit=1").to_request();
  let users: Value = test::call_and_read_body_json(&app, req).await;
  assert!(users.as_array().unwrap().is_empty());
}
