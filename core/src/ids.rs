//! Client-side team id assignment.
//!
//! The collection expects the client to pick ids. `Sequential` reproduces the
//! classic "highest numeric id plus one" scheme, which collides when two
//! clients create at the same time; `Uuid` does not.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::Team;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    #[default]
    Sequential,
    Uuid,
}

impl IdStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdStrategy::Sequential => "sequential",
            IdStrategy::Uuid => "uuid",
        }
    }

    /// Id for the next team given the highest numeric id seen so far.
    ///
    /// `Sequential` falls back to a uuid when `last_id` has no successor.
    pub fn next_id(&self, last_id: i64) -> String {
        match self {
            IdStrategy::Sequential => match last_id.checked_add(1) {
                Some(next) => next.to_string(),
                None => Uuid::new_v4().to_string(),
            },
            IdStrategy::Uuid => Uuid::new_v4().to_string(),
        }
    }
}

/// Leading-integer parse of an id: `"12abc"` is 12, `"abc"` and `""` are 0.
/// Digit runs past the `i64` range saturate.
pub fn numeric_id(id: &str) -> i64 {
    let trimmed = id.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];
    if digits.is_empty() {
        return 0;
    }
    let value = digits.parse::<i64>().unwrap_or(i64::MAX);
    if negative {
        -value
    } else {
        value
    }
}

/// Highest numeric id across `teams`, never below 0.
pub fn last_id(teams: &[Team]) -> i64 {
    teams
        .iter()
        .map(|team| numeric_id(&team.id))
        .max()
        .unwrap_or(0)
        .max(0)
}

/// Sequential id for a team added to `teams`.
pub fn next_sequential_id(teams: &[Team]) -> String {
    IdStrategy::Sequential.next_id(last_id(teams))
}
