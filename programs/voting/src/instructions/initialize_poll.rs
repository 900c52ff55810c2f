use anchor_lang::prelude::*;
use crate::{state::*, errors::*, constants::*, events::*};

// Initialize Poll Instruction
//
// Creates the poll PDA for a poll id.
// init_if_needed plus the `initialized` flag lets a second call fail with
// AlreadyInitialized instead of a system program error.

#[derive(Accounts)]
#[instruction(poll_id: u64)]
pub struct InitializePoll<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    // Seeds: [poll_id]
    #[account(
        init_if_needed,
        payer = signer,
        space = ANCHOR_DISCRIMINATOR + Poll::INIT_SPACE,
        seeds = [poll_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub poll: Account<'info, Poll>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializePoll<'info> {
    pub fn initialize_poll(
        &mut self,
        poll_id: u64,
        description: String,
        poll_start: u64,
        poll_end: u64,
        bumps: &InitializePollBumps,
    ) -> Result<()> {
        if self.poll.initialized {
            msg!("Poll {} already exists", poll_id);
            return err!(VotingError::AlreadyInitialized);
        }

        Poll::validate(&description, poll_start, poll_end)?;

        self.poll.set_inner(Poll {
            poll_id,
            description,
            poll_start,
            poll_end,
            candidate_amount: 0,
            initialized: true,
            bump: bumps.poll,
        });

        msg!("Poll {} created, open from {} to {}", poll_id, poll_start, poll_end);
        emit!(PollInitialized {
            poll_id,
            poll_start,
            poll_end,
        });

        Ok(())
    }
}
