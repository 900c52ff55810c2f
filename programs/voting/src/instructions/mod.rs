// Instructions module
// - initialize_poll
// - initialize_candidate
// - vote

pub mod initialize_poll;
pub mod initialize_candidate;
pub mod vote;

pub use initialize_poll::*;
pub use initialize_candidate::*;
pub use vote::*;
