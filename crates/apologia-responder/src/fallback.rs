//! The tiered fallback for debate mode when no table rule matches.
//!
//! Tier two fires when the input contains an interrogative word (checked with
//! word-boundary matching, so "show" does not count as "how" but "how's"
//! does) and itself checks two specific sub-topics before the generic
//! comprehensive template. Tier three handles non-questions with a distinct
//! template. Both generic templates interpolate the original (un-lowercased)
//! input.

use std::sync::LazyLock;

use regex::Regex;

use crate::responses;

static INTERROGATIVE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(
    r"\b(who|what|where|when|why|how|did|does|is|are|can|will|should|would|could)\b",
  )
  .expect("hard-coded interrogative pattern compiles")
});

/// Classifier for rule-table misses. Total: always returns a response.
pub fn debate_fallback(original: &str, lowered: &str) -> String {
  if INTERROGATIVE.is_match(lowered) {
    // Specific sub-topics win over the generic template; contradictions are
    // checked before archaeology/history.
    if lowered.contains("contradict") {
      return responses::CONTRADICTIONS.to_string();
    }
    if lowered.contains("archaeolog") || lowered.contains("history") {
      return responses::ARCHAEOLOGY.to_string();
    }
    comprehensive_response(original, lowered)
  } else {
    non_question_response(original)
  }
}

/// Pick one of four boilerplate framing sentences from the question word.
pub fn question_type_note(lowered: &str) -> &'static str {
  if lowered.contains("why") {
    responses::WHY_NOTE
  } else if lowered.contains("how") {
    responses::HOW_NOTE
  } else if lowered.contains("what") {
    responses::WHAT_NOTE
  } else {
    responses::GENERAL_NOTE
  }
}

/// Tier-two generic template for recognised questions.
fn comprehensive_response(original: &str, lowered: &str) -> String {
  let note = question_type_note(lowered);
  format!(
    "**Let's take your question seriously: \"{original}\"**\n\n\
     {note}\n\n\
     Here is how I'd walk through it:\n\n\
     - **Clarify the claim.** Pin down exactly what is being asserted or \
     denied, and what would count as evidence either way.\n\
     - **Weigh the public data.** History, manuscripts, cosmology, and moral \
     experience are shared ground; the argument proceeds from there, not \
     from private feelings.\n\
     - **Compare the explanations.** The question is never whether a view \
     has difficulties, but which view explains the most with the least \
     strain.\n\n\
     Give me one more round of detail on the part that matters most to you \
     and we'll dig into it properly."
  )
}

/// Tier-three template for input with no interrogative word at all.
fn non_question_response(original: &str) -> String {
  format!(
    "**You've put something on the table: \"{original}\"**\n\n\
     That reads more like a statement than a question, so let me treat it as \
     one. Every position on God — including that one — is a claim about \
     reality, and claims about reality carry a burden of evidence. I'm glad \
     to carry mine: the beginning of the universe, its fine-tuning, the \
     ground of moral facts, and the resurrection of Jesus are where I'd \
     start.\n\n\
     Turn it into a question — who, what, why, or how — and I can give you a \
     much more pointed answer."
  )
}
