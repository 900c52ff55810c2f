use anchor_lang::prelude::*;

pub const ANCHOR_DISCRIMINATOR: usize = 8;

// Seeds for PDA derivation: ["voter", poll_id, voter_id]
// Poll and candidate PDAs carry no prefix: [poll_id] and [poll_id, candidate_name]
#[constant]
pub const VOTER_RECORD: &[u8] = b"voter";

// A single PDA seed is capped at 32 bytes, the name is used raw as a seed
pub const MAX_CANDIDATE_NAME_LEN: usize = 32;

pub const MAX_DESCRIPTION_LEN: usize = 280;
