//! Terminal front end for the voting cycle engine.

pub mod cli;
pub mod errors;
pub mod logging;
pub mod session;
pub mod simulate;
