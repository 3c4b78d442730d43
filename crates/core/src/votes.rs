//! Vote directions and the counting rule for vote tallies.
//!
//! Votes are append-only events. A tally is a plain count per direction;
//! repeated votes from the same client are not deduplicated.

use serde::{Deserialize, Serialize};

/// The direction of a single vote event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteDirection {
    Up,
    Down,
}

impl VoteDirection {
    /// The value stored in the `vote` column of the vote tables.
    pub const fn value(self) -> i16 {
        match self {
            VoteDirection::Up => 1,
            VoteDirection::Down => -1,
        }
    }

    /// Past-tense verb for log lines and response messages.
    pub const fn verb(self) -> &'static str {
        match self {
            VoteDirection::Up => "upvoted",
            VoteDirection::Down => "downvoted",
        }
    }
}

/// Upvote and downvote counts for one entity.
///
/// Defaults to zero for both directions, matching an entity with no vote
/// events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTally {
    pub upvotes: i64,
    pub downvotes: i64,
}

impl VoteTally {
    pub fn record(&mut self, direction: VoteDirection) {
        match direction {
            VoteDirection::Up => self.upvotes += 1,
            VoteDirection::Down => self.downvotes += 1,
        }
    }
}

impl FromIterator<VoteDirection> for VoteTally {
    fn from_iter<I: IntoIterator<Item = VoteDirection>>(iter: I) -> Self {
        let mut tally = VoteTally::default();
        for direction in iter {
            tally.record(direction);
        }
        tally
    }
}
