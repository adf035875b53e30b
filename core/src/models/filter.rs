// core/src/models/filter.rs

use serde::{Deserialize, Serialize};

/// A skill predicate for `get_users`: the user must hold `skill` with a
/// rating inside `[min_rating, max_rating]`. Omitted bounds are open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillFilter {
  pub skill: String,
  #[serde(default)]
  pub min_rating: Option<i64>,
  #[serde(default)]
  pub max_rating: Option<i64>,
}

impl SkillFilter {
  pub fn new(skill: impl Into<String>) -> Self {
    Self {
      skill: skill.into(),
      min_rating: None,
      max_rating: None,
    }
  }

  pub fn min(mut self, rating: i64) -> Self {
    self.min_rating = Some(rating);
    self
  }

  pub fn max(mut self, rating: i64) -> Self {
    self.max_rating = Some(rating);
    self
  }

  pub(crate) fn bounds(&self) -> (i64, i64) {
    (self.min_rating.unwrap_or(i64::MIN), self.max_rating.unwrap_or(i64::MAX))
  }
}

/// Conjunctive filter over user columns and skills. Every present field must
/// match exactly; every skill filter must be satisfied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFilters {
  #[serde(default)]
  pub name: Option<String>,
  #[serde(default)]
  pub company: Option<String>,
  #[serde(default)]
  pub email: Option<String>,
  #[serde(default)]
  pub phone: Option<String>,
  #[serde(default)]
  pub skills: Vec<SkillFilter>,
}

impl UserFilters {
  /// Column predicates in a fixed order, skipping absent ones.
  pub(crate) fn column_predicates(&self) -> impl Iterator<Item = (&'static str, &str)> {
    [
      ("name", self.name.as_deref()),
      ("company", self.company.as_deref()),
      ("email", self.email.as_deref()),
      ("phone", self.phone.as_deref()),
    ]
    .into_iter()
    .filter_map(|(column, value)| value.map(|v| (column, v)))
  }
}

/// Inclusive frequency window for `get_skills_freq`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreqFilter {
  #[serde(default)]
  pub min_freq: Option<i64>,
  #[serde(default)]
  pub max_freq: Option<i64>,
}

impl FreqFilter {
  pub fn between(min_freq: i64, max_freq: i64) -> Self {
    Self {
      min_freq: Some(min_freq),
      max_freq: Some(max_freq),
    }
  }

  pub(crate) fn bounds(&self) -> (i64, i64) {
    (self.min_freq.unwrap_or(i64::MIN), self.max_freq.unwrap_or(i64::MAX))
  }
}
