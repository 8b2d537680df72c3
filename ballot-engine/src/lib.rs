//! ballot-engine
//!
//! Voting cycle engine: admits voters one at a time from a fixed queue,
//! forwards each vote to the candidate ledger, throttles admission into
//! cycles of at most `max_voters_per_cycle` voters and reports when results
//! are ready.
//!
//! The engine is synchronous and single-session. Callers that share it across
//! threads must provide their own locking.

pub mod config;
mod engine;
pub mod history;
mod queue;
pub mod state;

pub use config::CycleConfig;
pub use engine::{EngineSnapshot, VotingEngine};
pub use history::{VoteRecord, VotingHistory};
pub use state::{EngineState, EngineStatus};
