// tests/common/mod.rs
#![allow(dead_code)] // Not every test file uses every helper

use once_cell::sync::Lazy;
use skillbase::{NewUser, SkillRating, Store, UserView};
use std::collections::HashSet;
use tracing::Level;

static TRACING: Lazy<()> = Lazy::new(|| {
  let filter = tracing_subscriber::EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(Level::WARN.to_string()));
  tracing_subscriber::fmt().with_env_filter(filter).with_test_writer().init();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING);
}

/// Fresh in-memory store with the schema created.
pub async fn store() -> Store {
  setup_tracing();
  Store::in_memory().await.expect("in-memory store should open")
}

/// Fresh file-backed store with a multi-connection pool, so concurrent
/// transactions really overlap. Keep the `TempDir` alive for the test.
pub async fn file_store(max_connections: u32) -> (Store, tempfile::TempDir) {
  setup_tracing();
  let dir = tempfile::tempdir().expect("temp dir should be created");
  let url = format!("sqlite://{}", dir.path().join("skillbase.db").display());
  let store = Store::connect(&url, max_connections)
    .await
    .expect("file-backed store should open");
  store.init_schema(false).await.expect("schema should initialise");
  (store, dir)
}

pub fn ada() -> NewUser {
  NewUser::new("Ada Lovelace", "ada@example.com")
    .company("Analytical Engines")
    .phone("+44 20 7946 0000")
    .skill("Rust", 5)
    .skill("Go", 3)
}

pub fn grace() -> NewUser {
  NewUser::new("Grace Hopper", "grace@example.com")
    .company("Navy")
    .skill("COBOL", 5)
    .skill("Go", 4)
}

pub fn linus() -> NewUser {
  NewUser::new("Linus Torvalds", "linus@example.com").skill("C", 5)
}

/// Skill list as a set, for order-independent comparison.
pub fn skill_set(view: &UserView) -> HashSet<SkillRating> {
  view.skills.iter().cloned().collect()
}

pub fn expected_skills(pairs: &[(&str, i64)]) -> HashSet<SkillRating> {
  pairs
    .iter()
    .map(|(skill, rating)| SkillRating {
      skill: (*skill).to_string(),
      rating: *rating,
    })
    .collect()
}

pub async fn count(store: &Store, table: &str) -> i64 {
  sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table}"))
    .fetch_one(store.pool())
    .await
    .expect("count query should run")
}
