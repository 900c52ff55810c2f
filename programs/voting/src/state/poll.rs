use anchor_lang::prelude::*;
use crate::{constants::MAX_DESCRIPTION_LEN, errors::VotingError};

// Poll account
// Seeds: [poll_id]
#[account]
#[derive(InitSpace)]
pub struct Poll {
    pub poll_id: u64,

    #[max_len(MAX_DESCRIPTION_LEN)]
    pub description: String,

    // Opaque bounds supplied by the creator, not checked against the clock
    pub poll_start: u64,
    pub poll_end: u64,

    // Candidates registered against this poll
    pub candidate_amount: u64,

    // Set once by initialize_poll, guards against re-initialization
    pub initialized: bool,

    pub bump: u8,
}

impl Poll {
    // Validate creation arguments before anything is written
    pub fn validate(description: &str, poll_start: u64, poll_end: u64) -> Result<()> {
        require!(
            description.len() <= MAX_DESCRIPTION_LEN,
            VotingError::DescriptionTooLong
        );
        require!(poll_start < poll_end, VotingError::InvalidPollWindow);
        Ok(())
    }

    // Count a newly registered candidate, returns the new total
    pub fn register_candidate(&mut self) -> Result<u64> {
        self.candidate_amount = self
            .candidate_amount
            .checked_add(1)
            .ok_or(VotingError::MathOverflow)?;
        Ok(self.candidate_amount)
    }
}
