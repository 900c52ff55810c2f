use anchor_lang::prelude::*;
use crate::{constants::MAX_CANDIDATE_NAME_LEN, errors::VotingError};

// Proof that a voter has voted in a poll
// Seeds: ["voter", poll_id, voter]
// Created lazily by the first vote, then never changed again
#[account]
#[derive(InitSpace)]
pub struct VoterRecord {
    pub poll_id: u64,
    pub voter: Pubkey,
    pub has_voted: bool,

    #[max_len(MAX_CANDIDATE_NAME_LEN)]
    pub candidate_name: String,

    pub voted_at: i64,
    pub bump: u8,
}

impl VoterRecord {
    // NoRecord -> Voted, Voted is terminal
    pub fn mark_voted(
        &mut self,
        poll_id: u64,
        voter: Pubkey,
        candidate_name: String,
        voted_at: i64,
        bump: u8,
    ) -> Result<()> {
        require!(!self.has_voted, VotingError::AlreadyVoted);

        *self = VoterRecord {
            poll_id,
            voter,
            has_voted: true,
            candidate_name,
            voted_at,
            bump,
        };
        Ok(())
    }
}
