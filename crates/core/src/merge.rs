//! Inclusion list merging

use serde_json::Value;

/// What the merge did with one desired entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Membership {
  /// Missing, appended to the end of the list
  Added,
  /// Already in the list, left in place
  Present,
}

/// Result of merging desired entries into an existing list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergeOutcome {
  /// Existing entries in their original order, followed by the appended ones
  pub entries: Vec<Value>,
  /// One decision per desired entry, in desired order
  pub decisions: Vec<(String, Membership)>,
}

impl MergeOutcome {
  pub fn modified(&self) -> bool {
    self.decisions.iter().any(|(_, m)| *m == Membership::Added)
  }

  pub fn added(&self) -> Vec<&str> {
    self.with_membership(Membership::Added)
  }

  pub fn present(&self) -> Vec<&str> {
    self.with_membership(Membership::Present)
  }

  fn with_membership(&self, membership: Membership) -> Vec<&str> {
    self
      .decisions
      .iter()
      .filter(|(_, m)| *m == membership)
      .map(|(entry, _)| entry.as_str())
      .collect()
  }
}

/// Append every desired entry missing from `current`.
///
/// `current` is None when the field is absent or not an array; both merge as an
/// empty list. Membership is exact string equality, so non-string elements never
/// match. Existing entries, duplicates included, keep their positions.
pub fn merge_inclusions<S: AsRef<str>>(current: Option<&[Value]>, desired: &[S]) -> MergeOutcome {
  let mut outcome = MergeOutcome {
    entries: current.map(<[Value]>::to_vec).unwrap_or_default(),
    decisions: Vec::with_capacity(desired.len()),
  };

  for inclusion in desired {
    let inclusion = inclusion.as_ref();
    let membership = if outcome.entries.iter().any(|entry| entry.as_str() == Some(inclusion)) {
      Membership::Present
    } else {
      outcome.entries.push(Value::String(inclusion.to_string()));
      Membership::Added
    };
    outcome.decisions.push((inclusion.to_string(), membership));
  }

  outcome
}
