// core/src/models/mod.rs

//! Row types for the three relations plus the input and projection shapes
//! exchanged with callers.

pub mod filter;
pub mod input;
pub mod skill;
pub mod user;
pub mod view;

pub use filter::{FreqFilter, SkillFilter, UserFilters};
pub use input::{NewUser, SkillInput, UserPatch};
pub use skill::{Skill, SkillFreq, SkillRating};
pub use user::User;
pub use view::UserView;
