//! The fixed two-plan subscription catalog.
//!
//! Amounts are constants baked into the catalog — never derived from
//! processor-side lookups. Anything outside the catalog is rejected before a
//! payment session is created.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A subscription plan selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
  Weekly,
  Monthly,
}

impl Plan {
  /// Parse a plan selector from the wire. Unknown strings are a validation
  /// error and must not reach the payment processor.
  pub fn parse(s: &str) -> Result<Self> {
    match s {
      "weekly" => Ok(Self::Weekly),
      "monthly" => Ok(Self::Monthly),
      other => Err(Error::UnknownPlan(other.to_string())),
    }
  }

  /// The catalog string used in request bodies and subscriber tiers.
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Weekly => "weekly",
      Self::Monthly => "monthly",
    }
  }

  /// Charge amount in minor currency units.
  pub fn amount_minor(self) -> u32 {
    match self {
      Self::Weekly => 450,
      Self::Monthly => 1199,
    }
  }

  /// Length of one billing period, used to compute `subscription_end`.
  pub fn period(self) -> Duration {
    match self {
      Self::Weekly => Duration::days(7),
      Self::Monthly => Duration::days(30),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_known_plans() {
    assert_eq!(Plan::parse("weekly").unwrap(), Plan::Weekly);
    assert_eq!(Plan::parse("monthly").unwrap(), Plan::Monthly);
  }

  #[test]
  fn parse_rejects_unknown_plan() {
    assert!(matches!(Plan::parse("yearly"), Err(Error::UnknownPlan(_))));
    assert!(matches!(Plan::parse(""), Err(Error::UnknownPlan(_))));
    // Catalog lookup is exact; casing is not normalised.
    assert!(matches!(Plan::parse("Weekly"), Err(Error::UnknownPlan(_))));
  }

  #[test]
  fn catalog_amounts_are_fixed() {
    assert_eq!(Plan::Weekly.amount_minor(), 450);
    assert_eq!(Plan::Monthly.amount_minor(), 1199);
  }

  #[test]
  fn periods() {
    assert_eq!(Plan::Weekly.period(), Duration::days(7));
    assert_eq!(Plan::Monthly.period(), Duration::days(30));
  }
}
