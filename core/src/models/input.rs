// core/src/models/input.rs

//! Payloads accepted by the mutating operations.

use serde::{Deserialize, Serialize};

/// A skill declaration: the skill's name and the declaring user's rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillInput {
  pub skill: String,
  pub rating: i64,
}

impl SkillInput {
  pub fn new(skill: impl Into<String>, rating: i64) -> Self {
    Self {
      skill: skill.into(),
      rating,
    }
  }
}

/// Data for creating a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
  pub name: String,
  #[serde(default)]
  pub company: Option<String>,
  pub email: String,
  #[serde(default)]
  pub phone: Option<String>,
  #[serde(default)]
  pub skills: Vec<SkillInput>,
}

impl NewUser {
  pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      company: None,
      email: email.into(),
      phone: None,
      skills: Vec::new(),
    }
  }

  pub fn company(mut self, company: impl Into<String>) -> Self {
    self.company = Some(company.into());
    self
  }

  pub fn phone(mut self, phone: impl Into<String>) -> Self {
    self.phone = Some(phone.into());
    self
  }

  pub fn skill(mut self, skill: impl Into<String>, rating: i64) -> Self {
    self.skills.push(SkillInput::new(skill, rating));
    self
  }
}

/// A merge patch for an existing user.
///
/// `None` means "keep the stored value"; `Some` overwrites it, including with
/// an empty string. `skills`, when present, is upserted into the user's list;
/// skills not mentioned are left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPatch {
  #[serde(default)]
  pub name: Option<String>,
  #[serde(default)]
  pub company: Option<String>,
  #[serde(default)]
  pub email: Option<String>,
  #[serde(default)]
  pub phone: Option<String>,
  #[serde(default)]
  pub skills: Option<Vec<SkillInput>>,
}
