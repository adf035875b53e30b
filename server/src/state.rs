// server/src/state.rs
use crate::config::AppConfig;
use skillbase::UserDirectory;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub directory: Arc<dyn UserDirectory>,
  pub config: Arc<AppConfig>, // Share loaded config
}
