pub mod poll;
pub mod candidate;
pub mod voter_record;

pub use poll::*;
pub use candidate::*;
pub use voter_record::*;
