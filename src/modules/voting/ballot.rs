use chrono::{DateTime, Utc};

use crate::modules::voters::VoterId;
use crate::CANDIDATES;

/// A vote as stored in `voting_records`
#[derive(Debug, Clone, PartialEq)]
pub struct VoteRecord {
    pub record_id: i64,
    pub voter: VoterId,
    pub election_name: String,
    pub candidate: String,
    pub cast_at: DateTime<Utc>,
}

/// A vote ready to be inserted
#[derive(Debug, Clone, PartialEq)]
pub struct NewVote {
    pub voter: VoterId,
    pub election_name: String,
    pub candidate: String,
    pub cast_at: DateTime<Utc>,
}

/// Whether `name` is on the ballot
pub fn is_candidate(name: &str) -> bool {
    CANDIDATES.contains(&name)
}

/// Resolve a ballot choice typed by the voter: a 1-based number, or the
/// candidate's name (case-insensitive). Returns None for anything else.
pub fn candidate_from_choice(choice: &str) -> Option<&'static str> {
    let choice = choice.trim();
    if let Ok(number) = choice.parse::<usize>() {
        return number.checked_sub(1).and_then(|index| CANDIDATES.get(index).copied());
    }
    CANDIDATES
        .iter()
        .copied()
        .find(|candidate| candidate.eq_ignore_ascii_case(choice))
}
