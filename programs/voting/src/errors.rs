use anchor_lang::prelude::*;

#[error_code]
pub enum VotingError {
    // Account lifecycle errors
    #[msg("Account already initialized")]
    AlreadyInitialized,

    #[msg("Voter has already voted")]
    AlreadyVoted,

    #[msg("Candidate not found for this poll")]
    CandidateNotFound,

    #[msg("Poll not found")]
    PollNotFound,

    // Authorization errors
    #[msg("Signer does not match the voter id")]
    UnauthorizedVoter,

    // Input validation errors
    #[msg("Candidate name must be between 1 and 32 bytes")]
    InvalidCandidateName,

    #[msg("Poll description exceeds 280 bytes")]
    DescriptionTooLong,

    #[msg("Poll start must be before poll end")]
    InvalidPollWindow,

    // Arithmetic errors
    #[msg("Math overflow occurred")]
    MathOverflow,
}
