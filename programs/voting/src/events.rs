use anchor_lang::prelude::*;

#[event]
pub struct PollInitialized {
    pub poll_id: u64,
    pub poll_start: u64,
    pub poll_end: u64,
}

#[event]
pub struct CandidateInitialized {
    pub poll_id: u64,
    pub candidate_name: String,
    /// Number of candidates registered on the poll, this one included
    pub candidate_amount: u64,
}

#[event]
pub struct VoteCast {
    pub poll_id: u64,
    pub candidate_name: String,
    pub voter: Pubkey,
    /// Tally of the candidate after this vote
    pub candidate_votes: u64,
    pub timestamp: i64,
}
