use anchor_lang::prelude::*;
pub mod instructions;
pub mod errors;
pub mod events;
pub mod state;
pub mod constants;
pub mod helpers;
pub mod pda;

pub use instructions::*;
pub use errors::*;
pub use events::*;
pub use state::*;

declare_id!("32nNdoVHv5bgmPBaJinixqnueuLh9mxnQt3wHyo3D714");

#[program]
pub mod voting {
    use super::*;

    // Create a poll at the PDA derived from poll_id
    // poll_start and poll_end are stored as given, start must be before end
    pub fn initialize_poll(
        ctx: Context<InitializePoll>,
        poll_id: u64,
        description: String,
        poll_start: u64,
        poll_end: u64,
    ) -> Result<()> {
        ctx.accounts
            .initialize_poll(poll_id, description, poll_start, poll_end, &ctx.bumps)
    }

    // Register a candidate under an existing poll with zero votes
    // The (poll_id, candidate_name) pair can only be registered once
    pub fn initialize_candidate(
        ctx: Context<InitializeCandidate>,
        candidate_name: String,
        poll_id: u64,
    ) -> Result<()> {
        ctx.accounts
            .initialize_candidate(candidate_name, poll_id)
    }

    // Cast the signer's vote for a candidate
    // Each voter can vote once per poll, whichever candidate they pick
    pub fn vote(
        ctx: Context<Vote>,
        candidate_name: String,
        poll_id: u64,
        voter_id: Pubkey,
    ) -> Result<()> {
        ctx.accounts
            .vote(candidate_name, poll_id, voter_id, &ctx.bumps)
    }
}
