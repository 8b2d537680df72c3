//! ballot-ledger
//!
//! Fixed candidate list and its tallies. The ledger is the only owner of vote
//! counts; everything else reads them through `tallies()` and `winner()`.

pub mod candidate;
pub mod ledger;

pub use candidate::Candidate;
pub use ledger::CandidateLedger;
