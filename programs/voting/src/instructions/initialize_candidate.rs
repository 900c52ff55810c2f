use anchor_lang::prelude::*;
use crate::{state::*, errors::*, constants::*, events::*, helpers::*, pda::candidate_address};

// Initialize Candidate Instruction
//
// Registers a candidate under an existing poll.
// The poll is loaded by hand so a missing poll reports PollNotFound.
// The candidate address is derived from its name, so the name is validated
// before any derivation and the account is created here rather than by an
// `init` constraint.

#[derive(Accounts)]
#[instruction(candidate_name: String, poll_id: u64)]
pub struct InitializeCandidate<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    // Seeds: [poll_id]
    /// CHECK: ownership and discriminator are validated in the handler
    #[account(
        mut,
        seeds = [poll_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub poll: UncheckedAccount<'info>,

    // Seeds: [poll_id, candidate_name]
    /// CHECK: address is derived and compared in the handler once the name is valid
    #[account(mut)]
    pub candidate: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializeCandidate<'info> {
    pub fn initialize_candidate(
        &mut self,
        candidate_name: String,
        poll_id: u64,
    ) -> Result<()> {
        Candidate::validate_name(&candidate_name)
            .inspect_err(|_| msg!("Invalid candidate name for poll {}", poll_id))?;

        let (expected, bump) = candidate_address(poll_id, &candidate_name)
            .ok_or(VotingError::InvalidCandidateName)?;
        require_keys_eq!(
            self.candidate.key(),
            expected,
            anchor_lang::error::ErrorCode::ConstraintSeeds
        );

        if is_program_account::<Candidate>(&self.candidate) {
            msg!("Candidate {} already exists in poll {}", candidate_name, poll_id);
            return err!(VotingError::AlreadyInitialized);
        }

        let mut poll: Poll = load_program_account(&self.poll, VotingError::PollNotFound)
            .inspect_err(|_| msg!("Poll {} not found", poll_id))?;
        let candidate_amount = poll.register_candidate()?;
        store_program_account(&self.poll, &poll)?;

        let poll_id_bytes = poll_id.to_le_bytes();
        let bump_seed = [bump];
        let signer_seeds: &[&[&[u8]]] = &[&[
            poll_id_bytes.as_ref(),
            candidate_name.as_bytes(),
            bump_seed.as_ref(),
        ]];
        create_program_account(
            &self.signer,
            &self.candidate,
            &self.system_program,
            ANCHOR_DISCRIMINATOR + Candidate::INIT_SPACE,
            signer_seeds,
        )?;

        store_program_account(
            &self.candidate,
            &Candidate {
                poll_id,
                candidate_name: candidate_name.clone(),
                candidate_votes: 0,
                initialized: true,
                bump,
            },
        )?;

        msg!(
            "Candidate {} registered in poll {} ({} total)",
            candidate_name,
            poll_id,
            candidate_amount
        );
        emit!(CandidateInitialized {
            poll_id,
            candidate_name,
            candidate_amount,
        });

        Ok(())
    }
}
