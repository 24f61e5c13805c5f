//! Keyword response classifier for the Apologia chat backend.
//!
//! Given free-text user input and a [`Mode`], selects one canned long-form
//! answer from an ordered rule table, or (in debate mode) falls through to a
//! tiered generic template. Selection is a pure function of `(text, mode)`:
//! deterministic, case-insensitive, total over all string inputs, and free of
//! side effects. The caller turns the returned string into a rendered
//! message.

pub mod fallback;
pub mod responses;
pub mod rules;

use serde::{Deserialize, Serialize};

/// Which rule dictionary applies.
///
/// `chat` carries a single divinity-claim trigger; a miss means the caller
/// should consult the language model instead. `debate` evaluates the full
/// ordered chain and always produces an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
  #[default]
  Chat,
  Debate,
}

/// Select a canned response for `text` under `mode`.
///
/// Returns `None` only in [`Mode::Chat`] when the trigger rule misses; debate
/// mode is total.
pub fn respond(text: &str, mode: Mode) -> Option<String> {
  let lowered = text.to_lowercase();
  match mode {
    Mode::Chat => {
      rules::first_match(rules::CHAT_RULES, &lowered).map(str::to_string)
    }
    Mode::Debate => Some(
      rules::first_match(rules::DEBATE_RULES, &lowered)
        .map(str::to_string)
        .unwrap_or_else(|| fallback::debate_fallback(text, &lowered)),
    ),
  }
}
