// src/lib.rs

//! skillbase: users, their skills and per-skill ratings over a normalized
//! SQLite schema.
//!
//! The crate is organised leaves first:
//!  - [`schema`]: the three tables and their constraints.
//!  - [`lookup`]: read accessors usable on the pool or inside a transaction.
//!  - [`engine`]: create, update and delete, each a single transaction, plus
//!    the two-step skill upsert they share.
//!  - [`query`]: read-only composite queries.
//!  - [`seed`]: bulk loading of user records at startup.
//!
//! [`Store`] ties these to one pool, and [`UserDirectory`] is the operation
//! set a façade serves, with not-found and conflict collapsed to `None`/`false`.

pub mod directory;
pub mod engine;
pub mod error;
pub mod lookup;
pub mod models;
pub mod query;
pub mod schema;
pub mod seed;
pub mod store;

// --- Re-exports for the Public API ---

pub use crate::directory::UserDirectory;
pub use crate::error::{StoreError, StoreResult};
pub use crate::models::{
  FreqFilter, NewUser, Skill, SkillFilter, SkillFreq, SkillInput, SkillRating, User, UserFilters, UserPatch, UserView,
};
pub use crate::seed::SeedReport;
pub use crate::store::Store;
