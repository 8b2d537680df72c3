//! ballot-common
//!
//! Types shared by the ledger, the cycle engine and the presentation layer:
//! the error taxonomy, voter identifiers and the result DTOs.

pub mod error;
pub mod results;
pub mod voter;

pub use error::{BallotError, Result};
pub use results::{CandidateTally, FinalResults};
pub use voter::VoterId;
