use chrono::Utc;
use log::warn;

use super::ballot::{is_candidate, NewVote};
use crate::modules::error::{Result, StorageError, ValidationError, VotingError};
use crate::modules::storage::Database;
use crate::modules::utils::logging::log_data_operation;
use crate::modules::voters::VoterId;

/// Record `voter`'s vote for `candidate` in `election_name`.
///
/// An empty selection or a name that is not on the ballot is rejected before
/// storage is touched. A second vote in the same election fails with
/// `AlreadyVoted`, whichever candidate is chosen.
pub fn cast_vote(db: &Database, voter: VoterId, election_name: &str, candidate: &str) -> Result<()> {
    let candidate = candidate.trim();
    if candidate.is_empty() {
        return Err(ValidationError::NoCandidateSelected.into());
    }
    if !is_candidate(candidate) {
        warn!("Rejected vote for unknown candidate {:?}", candidate);
        return Err(ValidationError::UnknownCandidate(candidate.to_string()).into());
    }

    let resource = voter.to_string();
    if db.has_voted(voter, election_name)? {
        log_data_operation("cast_vote", &resource, election_name, false, Some("already voted"));
        return Err(VotingError::AlreadyVoted);
    }

    let vote = NewVote {
        voter,
        election_name: election_name.to_string(),
        candidate: candidate.to_string(),
        cast_at: Utc::now(),
    };

    match db.insert_vote(&vote) {
        Ok(_) => {
            log_data_operation("cast_vote", &resource, election_name, true, None);
            Ok(())
        }
        Err(StorageError::UniqueViolation) => {
            log_data_operation("cast_vote", &resource, election_name, false, Some("already voted"));
            Err(VotingError::AlreadyVoted)
        }
        Err(e) => {
            log_data_operation("cast_vote", &resource, election_name, false, Some(&e.to_string()));
            Err(e.into())
        }
    }
}
