use anchor_lang::prelude::*;
use crate::{state::*, errors::*, constants::*, events::*, helpers::*, pda::candidate_address};

// Vote Instruction
//
// One vote per voter per poll.
// The voter record is created on the first vote (init_if_needed) and marked in
// the same instruction, so the runtime reverts both the record and the tally
// together if anything fails.
// The candidate address is checked in the handler: a name that cannot be a
// candidate (empty, over 32 bytes) reports CandidateNotFound.

#[derive(Accounts)]
#[instruction(candidate_name: String, poll_id: u64, voter_id: Pubkey)]
pub struct Vote<'info> {
    // Voter, pays for the voter record
    // Must be the identity the vote is recorded for
    #[account(
        mut,
        address = voter_id @ VotingError::UnauthorizedVoter,
    )]
    pub signer: Signer<'info>,

    // Seeds: [poll_id, candidate_name]
    /// CHECK: address, ownership and discriminator are validated in the handler
    #[account(mut)]
    pub candidate: UncheckedAccount<'info>,

    // Seeds: ["voter", poll_id, voter_id]
    #[account(
        init_if_needed,
        payer = signer,
        space = ANCHOR_DISCRIMINATOR + VoterRecord::INIT_SPACE,
        seeds = [VOTER_RECORD, poll_id.to_le_bytes().as_ref(), voter_id.as_ref()],
        bump,
    )]
    pub voter_record: Account<'info, VoterRecord>,

    pub system_program: Program<'info, System>,
}

impl<'info> Vote<'info> {
    pub fn vote(
        &mut self,
        candidate_name: String,
        poll_id: u64,
        voter_id: Pubkey,
        bumps: &VoteBumps,
    ) -> Result<()> {
        // Checked before the candidate so a repeat vote for any candidate,
        // existing or not, reports AlreadyVoted
        if self.voter_record.has_voted {
            msg!("Voter {} already voted in poll {}", voter_id, poll_id);
            return err!(VotingError::AlreadyVoted);
        }

        let Some((expected, _)) = candidate_address(poll_id, &candidate_name) else {
            msg!("Candidate {} not found in poll {}", candidate_name, poll_id);
            return err!(VotingError::CandidateNotFound);
        };
        require_keys_eq!(
            self.candidate.key(),
            expected,
            anchor_lang::error::ErrorCode::ConstraintSeeds
        );

        let mut candidate: Candidate =
            load_program_account(&self.candidate, VotingError::CandidateNotFound)
                .inspect_err(|_| msg!("Candidate {} not found in poll {}", candidate_name, poll_id))?;

        let candidate_votes = candidate.record_vote()?;
        store_program_account(&self.candidate, &candidate)?;

        let timestamp = Clock::get()?.unix_timestamp;
        self.voter_record.mark_voted(
            poll_id,
            voter_id,
            candidate_name.clone(),
            timestamp,
            bumps.voter_record,
        )?;

        msg!(
            "Voter {} voted for {} in poll {}, tally {}",
            voter_id,
            candidate_name,
            poll_id,
            candidate_votes
        );
        emit!(VoteCast {
            poll_id,
            candidate_name,
            voter: voter_id,
            candidate_votes,
            timestamp,
        });

        Ok(())
    }
}
