// core/src/models/view.rs

use serde::{Deserialize, Serialize};

use super::{SkillRating, User};

/// The externally visible projection of a user: stored columns plus the
/// complete skill list. The surrogate id is never part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserView {
  pub name: String,
  pub company: Option<String>,
  pub email: String,
  pub phone: Option<String>,
  pub skills: Vec<SkillRating>,
}

impl UserView {
  pub fn new(user: User, skills: Vec<SkillRating>) -> Self {
    Self {
      name: user.name,
      company: user.company,
      email: user.email,
      phone: user.phone,
      skills,
    }
  }

  /// Rating recorded for `skill`, if the user declared it.
  pub fn rating_of(&self, skill: &str) -> Option<i64> {
    self.skills.iter().find(|s| s.skill == skill).map(|s| s.rating)
  }
}
