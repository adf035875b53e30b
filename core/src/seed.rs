// core/src/seed.rs

//! Bulk loading of user records at startup.
//!
//! Seeding is more forgiving than `create_user`: a record whose email is
//! already registered refreshes that user's name, company and phone instead
//! of failing, and a skill the user already holds keeps its first rating.
//! Each record is applied in its own transaction, so one bad record does not
//! undo the ones before it.

use serde::Serialize;
use sqlx::{SqliteConnection, SqlitePool};
use tracing::{debug, info, instrument, warn};

use crate::engine::{begin_write, ensure_skill};
use crate::error::{StoreError, StoreResult};
use crate::lookup;
use crate::models::NewUser;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
  pub users_inserted: u64,
  pub users_updated: u64,
  pub skills_ignored: u64,
}

async fn seed_record(conn: &mut SqliteConnection, record: &NewUser, report: &mut SeedReport) -> StoreResult<()> {
  let existed = lookup::find_user_by_email(&mut *conn, &record.email).await?.is_some();

  sqlx::query(
    "INSERT INTO users (name, company, email, phone) VALUES (?, ?, ?, ?)
     ON CONFLICT(email) DO UPDATE SET
       name = excluded.name,
       company = excluded.company,
       phone = excluded.phone",
  )
  .bind(&record.name)
  .bind(&record.company)
  .bind(&record.email)
  .bind(&record.phone)
  .execute(&mut *conn)
  .await
  .map_err(StoreError::from_constraint)?;

  if existed {
    warn!(email = %record.email, "Duplicate email in seed data; refreshing user details.");
    report.users_updated += 1;
  } else {
    report.users_inserted += 1;
  }

  let user = lookup::find_user_by_email(&mut *conn, &record.email)
    .await?
    .ok_or_else(|| StoreError::UserNotFound {
      email: record.email.clone(),
    })?;

  for input in &record.skills {
    let skill = ensure_skill(&mut *conn, &input.skill).await?;
    let linked = sqlx::query("INSERT INTO user_skills (user_id, skill_id, rating) VALUES (?, ?, ?) ON CONFLICT DO NOTHING")
      .bind(user.id)
      .bind(skill.id)
      .bind(input.rating)
      .execute(&mut *conn)
      .await
      .map_err(StoreError::from_constraint)?
      .rows_affected();
    if linked == 0 {
      debug!(email = %record.email, skill = %input.skill, "Duplicate skill entry; keeping first rating.");
      report.skills_ignored += 1;
    }
  }
  Ok(())
}

/// Loads `records` in order. Stops at the first record that fails; records
/// committed before it stay.
#[instrument(name = "seed::seed_users", skip(pool, records), fields(records = records.len()), err(Display))]
pub async fn seed_users(pool: &SqlitePool, records: &[NewUser]) -> StoreResult<SeedReport> {
  let mut report = SeedReport::default();
  for record in records {
    let mut tx = begin_write(pool).await?;
    seed_record(&mut tx, record, &mut report).await?;
    tx.commit().await?;
  }
  info!(
    inserted = report.users_inserted,
    updated = report.users_updated,
    skills_ignored = report.skills_ignored,
    "Seeding complete."
  );
  Ok(report)
}
