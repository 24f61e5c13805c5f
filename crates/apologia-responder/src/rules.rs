//! The ordered rule tables and their predicate language.
//!
//! A predicate is a boolean expression over substring containment checks on
//! the lowercased input: AND within a topic, OR across alternative phrasings.
//! Rules are evaluated top to bottom; the first match wins, so table order
//! encodes priority.

use crate::responses;

// ─── Predicates ──────────────────────────────────────────────────────────────

/// A composable containment test over normalised (lowercased) text.
#[derive(Debug, Clone, Copy)]
pub enum Predicate {
  /// True when the text contains the (lowercase) needle.
  Contains(&'static str),
  /// True when every sub-predicate matches.
  All(&'static [Predicate]),
  /// True when at least one sub-predicate matches.
  Any(&'static [Predicate]),
}

impl Predicate {
  /// Evaluate against already-lowercased text.
  pub fn matches(&self, lowered: &str) -> bool {
    match self {
      Self::Contains(needle) => lowered.contains(needle),
      Self::All(preds) => preds.iter().all(|p| p.matches(lowered)),
      Self::Any(preds) => preds.iter().any(|p| p.matches(lowered)),
    }
  }
}

// ─── Rules ───────────────────────────────────────────────────────────────────

/// One (predicate, response) pair in an ordered table.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
  /// Short tag for logging and tests; not part of the wire contract.
  pub topic: &'static str,
  pub when:  Predicate,
  pub reply: &'static str,
}

/// Return the reply of the first rule whose predicate matches, if any.
pub fn first_match(rules: &[Rule], lowered: &str) -> Option<&'static str> {
  rules
    .iter()
    .find(|rule| rule.when.matches(lowered))
    .map(|rule| rule.reply)
}

use Predicate::{All, Any, Contains};

const DIVINITY_CLAIM: Predicate = All(&[
  Contains("jesus"),
  Any(&[Contains("god"), Contains("divine"), Contains("deity")]),
]);

/// The full debate-mode chain. Order is significant: divinity claims are
/// checked before generic trinity questions, which come before bible
/// corruption, and so on down to the apologetic-method group.
pub static DEBATE_RULES: &[Rule] = &[
  Rule {
    topic: "divinity-claim",
    when:  DIVINITY_CLAIM,
    reply: responses::JESUS_CLAIMED_DEITY,
  },
  Rule {
    topic: "trinity",
    when:  Contains("trinity"),
    reply: responses::TRINITY,
  },
  Rule {
    topic: "bible-corruption",
    when:  Any(&[
      Contains("corrupt"),
      Contains("textual variant"),
      All(&[Contains("bible"), Contains("changed")]),
      All(&[Contains("bible"), Contains("altered")]),
      All(&[Contains("bible"), Contains("translat")]),
    ]),
    reply: responses::BIBLE_RELIABILITY,
  },
  Rule {
    topic: "evil-suffering",
    when:  Any(&[
      Contains("evil"),
      Contains("suffering"),
      Contains("suffer"),
      Contains("bad things happen"),
    ]),
    reply: responses::PROBLEM_OF_EVIL,
  },
  Rule {
    topic: "resurrection",
    when:  Any(&[
      Contains("resurrect"),
      Contains("risen"),
      Contains("rose from the dead"),
      Contains("empty tomb"),
    ]),
    reply: responses::RESURRECTION,
  },
  Rule {
    topic: "salvation-works",
    when:  Any(&[
      Contains("salvation"),
      Contains("saved by"),
      All(&[Contains("faith"), Contains("works")]),
    ]),
    reply: responses::SALVATION_BY_GRACE,
  },
  Rule {
    topic: "hell",
    when:  Contains("hell"),
    reply: responses::HELL_AND_JUSTICE,
  },
  Rule {
    topic: "science-creation",
    when:  Any(&[
      Contains("science"),
      Contains("evolution"),
      Contains("big bang"),
      Contains("creation"),
    ]),
    reply: responses::SCIENCE_AND_FAITH,
  },
  Rule {
    topic: "other-religions",
    when:  Any(&[
      Contains("islam"),
      Contains("muslim"),
      Contains("quran"),
      Contains("buddh"),
      Contains("hindu"),
      Contains("other religions"),
    ]),
    reply: responses::OTHER_RELIGIONS,
  },
  Rule {
    topic: "predestination",
    when:  Any(&[
      Contains("predestin"),
      Contains("free will"),
      Contains("election"),
    ]),
    reply: responses::PREDESTINATION,
  },
  Rule {
    topic: "evidence-method",
    when:  Any(&[
      Contains("evidence"),
      Contains("proof"),
      Contains("apologetic"),
      Contains("how do you know"),
    ]),
    reply: responses::EVIDENCE_METHOD,
  },
];

/// Chat mode carries a single trigger keyed on divinity-claim phrasing; a
/// miss means the caller should route the message to the language model.
pub static CHAT_RULES: &[Rule] = &[Rule {
  topic: "divinity-claim",
  when:  DIVINITY_CLAIM,
  reply: responses::CHAT_DIVINITY,
}];

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn contains_is_plain_substring() {
    assert!(Contains("hell").matches("hello there"));
    assert!(!Contains("hell").matches("heaven"));
  }

  #[test]
  fn all_requires_every_branch() {
    let p = All(&[Contains("jesus"), Contains("god")]);
    assert!(p.matches("was jesus god?"));
    assert!(!p.matches("was jesus real?"));
  }

  #[test]
  fn any_requires_one_branch() {
    let p = Any(&[Contains("evil"), Contains("suffering")]);
    assert!(p.matches("the problem of evil"));
    assert!(p.matches("why is there suffering"));
    assert!(!p.matches("the problem of induction"));
  }

  #[test]
  fn first_match_respects_table_order() {
    // Matches both divinity-claim (rule 1) and trinity (rule 2).
    let got = first_match(DEBATE_RULES, "jesus is god and the trinity");
    assert_eq!(got, Some(responses::JESUS_CLAIMED_DEITY));
  }

  #[test]
  fn every_debate_topic_is_reachable() {
    let probes = [
      ("did jesus say he was god", responses::JESUS_CLAIMED_DEITY),
      ("the trinity makes no sense", responses::TRINITY),
      ("the bible has been changed over time", responses::BIBLE_RELIABILITY),
      ("why is there so much suffering", responses::PROBLEM_OF_EVIL),
      ("nobody rose from the dead", responses::RESURRECTION),
      ("is salvation earned", responses::SALVATION_BY_GRACE),
      ("how could a loving god send people to hell", responses::HELL_AND_JUSTICE),
      ("hasn't evolution disproved genesis", responses::SCIENCE_AND_FAITH),
      ("what about islam", responses::OTHER_RELIGIONS),
      ("predestination versus free will", responses::PREDESTINATION),
      ("what proof do you have", responses::EVIDENCE_METHOD),
    ];
    for (input, want) in probes {
      assert_eq!(first_match(DEBATE_RULES, input), Some(want), "probe {input:?}");
    }
  }

  #[test]
  fn chat_table_misses_on_unrelated_text() {
    assert_eq!(first_match(CHAT_RULES, "tell me about rome"), None);
  }
}
