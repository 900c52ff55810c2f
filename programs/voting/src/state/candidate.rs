use anchor_lang::prelude::*;
use crate::{constants::MAX_CANDIDATE_NAME_LEN, errors::VotingError};

// Candidate account
// Seeds: [poll_id, candidate_name]
#[account]
#[derive(InitSpace)]
pub struct Candidate {
    pub poll_id: u64,

    #[max_len(MAX_CANDIDATE_NAME_LEN)]
    pub candidate_name: String,

    // Only ever incremented, by one, from vote
    pub candidate_votes: u64,

    pub initialized: bool,

    pub bump: u8,
}

impl Candidate {
    pub fn validate_name(candidate_name: &str) -> Result<()> {
        require!(
            !candidate_name.is_empty() && candidate_name.len() <= MAX_CANDIDATE_NAME_LEN,
            VotingError::InvalidCandidateName
        );
        Ok(())
    }

    // Add a single vote, returns the new tally
    pub fn record_vote(&mut self) -> Result<u64> {
        self.candidate_votes = self
            .candidate_votes
            .checked_add(1)
            .ok_or(VotingError::MathOverflow)?;
        Ok(self.candidate_votes)
    }
}
