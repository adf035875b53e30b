// core/src/query.rs

//! Read-only composite queries. None of these open a transaction; each
//! statement sees whatever is committed when it runs.

use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::{debug, instrument};

use crate::error::{StoreError, StoreResult};
use crate::lookup;
use crate::models::{FreqFilter, SkillFilter, SkillFreq, User, UserFilters, UserView};

// SQLite treats a negative LIMIT as "no limit". `Some(0)` is an empty page;
// the HTTP layer rejects 0 before it gets here.
fn limit_arg(limit: Option<u32>) -> i64 {
  limit.map_or(-1, i64::from)
}

/// Stored user columns, no skills, in natural (insertion) order. With a
/// limit only the first `limit` rows of that order are returned.
#[instrument(name = "query::all_users", skip(pool), err(Display))]
pub async fn all_users(pool: &SqlitePool, limit: Option<u32>) -> StoreResult<Vec<User>> {
  let users = sqlx::query_as::<_, User>("SELECT id, name, company, email, phone FROM users LIMIT ?")
    .bind(limit_arg(limit))
    .fetch_all(pool)
    .await?;
  debug!(count = users.len(), "Fetched users.");
  Ok(users)
}

/// Full projection of one user.
#[instrument(name = "query::get_user_info", skip(pool), err(Display))]
pub async fn get_user_info(pool: &SqlitePool, email: &str) -> StoreResult<UserView> {
  let user = lookup::find_user_by_email(pool, email)
    .await?
    .ok_or_else(|| StoreError::UserNotFound {
      email: email.to_string(),
    })?;
  let skills = lookup::list_skills_for_user(pool, user.id).await?;
  Ok(UserView::new(user, skills))
}

async fn holds_skill(pool: &SqlitePool, user_id: i64, filter: &SkillFilter) -> StoreResult<bool> {
  let (min_rating, max_rating) = filter.bounds();
  let found = sqlx::query_scalar::<_, i64>(
    "SELECT EXISTS(
       SELECT 1 FROM user_skills
       JOIN skills ON user_skills.skill_id = skills.id
       WHERE user_skills.user_id = ?
         AND skills.skill = ?
         AND user_skills.rating BETWEEN ? AND ?
     )",
  )
  .bind(user_id)
  .bind(&filter.skill)
  .bind(min_rating)
  .bind(max_rating)
  .fetch_one(pool)
  .await?;
  Ok(found != 0)
}

/// Users matching every column predicate and every skill filter, each
/// expanded with its complete skill list.
///
/// Column predicates are evaluated in SQL; skill filters are then checked
/// per user. `limit` caps the number of views returned, not the scan.
#[instrument(
  name = "query::get_users",
  skip(pool, filters),
  fields(skill_filters = filters.skills.len()),
  err(Display)
)]
pub async fn get_users(pool: &SqlitePool, filters: &UserFilters, limit: Option<u32>) -> StoreResult<Vec<UserView>> {
  let mut builder = QueryBuilder::<Sqlite>::new("SELECT id, name, company, email, phone FROM users");
  let mut separator = " WHERE ";
  for (column, value) in filters.column_predicates() {
    builder.push(separator).push(column).push(" = ").push_bind(value.to_string());
    separator = " AND ";
  }

  let candidates = builder.build_query_as::<User>().fetch_all(pool).await?;
  debug!(candidates = candidates.len(), "Column predicates applied.");

  let mut views = Vec::new();
  'users: for user in candidates {
    for skill_filter in &filters.skills {
      if !holds_skill(pool, user.id, skill_filter).await? {
        continue 'users;
      }
    }
    let skills = lookup::list_skills_for_user(pool, user.id).await?;
    views.push(UserView::new(user, skills));
  }

  if let Some(cap) = limit {
    views.truncate(cap as usize);
  }
  Ok(views)
}

/// Skills with the number of distinct users holding them, restricted to the
/// inclusive `[min_freq, max_freq]` window.
#[instrument(name = "query::get_skills_freq", skip(pool), err(Display))]
pub async fn get_skills_freq(pool: &SqlitePool, filter: FreqFilter, limit: Option<u32>) -> StoreResult<Vec<SkillFreq>> {
  let (min_freq, max_freq) = filter.bounds();
  let frequencies = sqlx::query_as::<_, SkillFreq>(
    "SELECT skills.skill AS skill, COUNT(DISTINCT user_skills.user_id) AS freq
     FROM user_skills
     JOIN skills ON user_skills.skill_id = skills.id
     GROUP BY user_skills.skill_id
     HAVING COUNT(DISTINCT user_skills.user_id) BETWEEN ? AND ?
     LIMIT ?",
  )
  .bind(min_freq)
  .bind(max_freq)
  .bind(limit_arg(limit))
  .fetch_all(pool)
  .await?;
  Ok(frequencies)
}
