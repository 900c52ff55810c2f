//! Deterministic addresses of the program's accounts.
//!
//! Handlers declare the same seeds in their account constraints; these
//! helpers give clients and tests the matching addresses without the
//! runtime.

use anchor_lang::prelude::*;
use crate::{constants::VOTER_RECORD, state::Candidate};

/// Poll: `[poll_id (le)]`
pub fn poll_address(poll_id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[&poll_id.to_le_bytes()], &crate::ID)
}

/// Candidate: `[poll_id (le), candidate_name]`
///
/// `None` for a name no candidate can have. An empty name would alias the
/// poll's own address and a name over 32 bytes exceeds the seed limit.
pub fn candidate_address(poll_id: u64, candidate_name: &str) -> Option<(Pubkey, u8)> {
    Candidate::validate_name(candidate_name).ok()?;
    Pubkey::try_find_program_address(
        &[&poll_id.to_le_bytes(), candidate_name.as_bytes()],
        &crate::ID,
    )
}

/// VoterRecord: `["voter", poll_id (le), voter_id]`
pub fn voter_record_address(poll_id: u64, voter_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[VOTER_RECORD, &poll_id.to_le_bytes(), voter_id.as_ref()],
        &crate::ID,
    )
}
