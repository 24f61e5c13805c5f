//! Per-user, per-day message accounting.
//!
//! One [`UsageRecord`] per (user, UTC calendar date). Rows are never deleted;
//! the date rolling over simply starts a fresh row. The stored count never
//! exceeds the daily limit — the store's reserve operation enforces that
//! atomically, not the caller.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Accepted messages per user per UTC day.
pub const DAILY_MESSAGE_LIMIT: u32 = 15;

/// The persisted counter row for one (user, date).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageRecord {
  pub user_id:       Uuid,
  /// UTC calendar date (ISO `YYYY-MM-DD`).
  pub date:          NaiveDate,
  pub message_count: u32,
}

/// Outcome of an attempt to reserve one message slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuotaDecision {
  /// The slot was taken; `count` is the stored value after the increment.
  Granted { count: u32, remaining: u32 },
  /// The day's quota is spent. Non-retryable until the next UTC day.
  Exhausted,
}

impl QuotaDecision {
  /// Messages the user may still send today. Zero when exhausted.
  pub fn remaining(&self) -> u32 {
    match self {
      Self::Granted { remaining, .. } => *remaining,
      Self::Exhausted => 0,
    }
  }
}
