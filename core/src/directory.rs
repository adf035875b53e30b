// core/src/directory.rs

//! The operation set a façade exposes, with the boundary's failure contract
//! applied: mutations report plain "did not happen" (`None` / `false`), and
//! an unknown email on a read is `None`. Internally the error kinds stay
//! distinct and are logged at the level they deserve.

use async_trait::async_trait;
use tracing::{error, warn};

use crate::error::{StoreError, StoreResult};
use crate::models::{FreqFilter, NewUser, SkillFreq, User, UserFilters, UserPatch, UserView};
use crate::store::Store;

#[async_trait]
pub trait UserDirectory: Send + Sync {
  async fn all_users(&self, limit: Option<u32>) -> StoreResult<Vec<User>>;

  async fn get_user_info(&self, email: &str) -> StoreResult<Option<UserView>>;

  async fn get_users(&self, filters: &UserFilters, limit: Option<u32>) -> StoreResult<Vec<UserView>>;

  async fn get_skills_freq(&self, filter: FreqFilter, limit: Option<u32>) -> StoreResult<Vec<SkillFreq>>;

  async fn new_user(&self, data: &NewUser) -> Option<UserView>;

  async fn update_user(&self, email: &str, data: Option<&UserPatch>) -> Option<UserView>;

  async fn delete_user(&self, email: &str) -> bool;
}

fn log_failure(operation: &str, err: &StoreError) {
  if err.is_logical() {
    warn!(operation, error = %err, "Operation did not succeed.");
  } else {
    error!(operation, error = %err, "Operation failed; transaction rolled back.");
  }
}

#[async_trait]
impl UserDirectory for Store {
  async fn all_users(&self, limit: Option<u32>) -> StoreResult<Vec<User>> {
    Store::all_users(self, limit).await
  }

  async fn get_user_info(&self, email: &str) -> StoreResult<Option<UserView>> {
    match Store::get_user_info(self, email).await {
      Ok(view) => Ok(Some(view)),
      Err(StoreError::UserNotFound { .. }) => Ok(None),
      Err(e) => Err(e),
    }
  }

  async fn get_users(&self, filters: &UserFilters, limit: Option<u32>) -> StoreResult<Vec<UserView>> {
    Store::get_users(self, filters, limit).await
  }

  async fn get_skills_freq(&self, filter: FreqFilter, limit: Option<u32>) -> StoreResult<Vec<SkillFreq>> {
    Store::get_skills_freq(self, filter, limit).await
  }

  async fn new_user(&self, data: &NewUser) -> Option<UserView> {
    Store::create_user(self, data)
      .await
      .inspect_err(|e| log_failure("newUser", e))
      .ok()
  }

  async fn update_user(&self, email: &str, data: Option<&UserPatch>) -> Option<UserView> {
    Store::update_user(self, email, data)
      .await
      .inspect_err(|e| log_failure("updateUser", e))
      .ok()
  }

  async fn delete_user(&self, email: &str) -> bool {
    Store::delete_user(self, email)
      .await
      .inspect_err(|e| log_failure("deleteUser", e))
      .is_ok()
  }
}
