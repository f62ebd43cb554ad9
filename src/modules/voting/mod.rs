pub mod ballot;
pub mod casting;

pub use ballot::{candidate_from_choice, is_candidate, NewVote, VoteRecord};
pub use casting::cast_vote;
