use std::io::{BufRead, Write};

use tracing::debug;

use ballot_common::BallotError;
use ballot_engine::{CycleConfig, VotingEngine};

use crate::errors::CliError;

/// Candidate as typed by the user: a ballot position or a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateRef {
    Index(usize),
    Name(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Vote(CandidateRef),
    Next,
    Status,
    Tallies,
    History,
    Results { json: bool },
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, CliError> {
        let mut parts = line.split_whitespace();
        let verb = parts.next().ok_or("empty command")?;
        let rest: Vec<&str> = parts.collect();

        match (verb, rest.as_slice()) {
            ("vote" | "v", []) => Err("usage: vote <index|name>".into()),
            ("vote" | "v", args) => {
                let arg = args.join(" ");
                Ok(match arg.parse::<usize>() {
                    Ok(index) => Command::Vote(CandidateRef::Index(index)),
                    Err(_) => Command::Vote(CandidateRef::Name(arg)),
                })
            }
            ("next" | "n", []) => Ok(Command::Next),
            ("status", []) => Ok(Command::Status),
            ("tallies", []) => Ok(Command::Tallies),
            ("history", []) => Ok(Command::History),
            ("results", []) => Ok(Command::Results { json: false }),
            ("results", ["--json"]) => Ok(Command::Results { json: true }),
            ("help" | "?", []) => Ok(Command::Help),
            ("quit" | "exit" | "q", []) => Ok(Command::Quit),
            _ => Err(format!("unknown command '{}', type 'help'", line.trim()).into()),
        }
    }
}

const HELP: &str = "\
commands:
  vote <index|name>   cast the current voter's vote
  next                admit the next voter / start the next cycle
  status              show who is voting
  tallies             current vote counts
  history             votes cast so far, most recent first
  results [--json]    final results (once everybody voted)
  quit";

/// Terminal front end: maps typed commands onto engine operations.
pub struct Session {
    engine: VotingEngine,
}

impl Session {
    pub fn start(config: &CycleConfig, voters: usize) -> Result<Self, CliError> {
        let mut engine = VotingEngine::new(config.clone())?;
        engine.start(voters, config.candidates.iter().cloned())?;
        Ok(Self { engine })
    }

    pub fn engine(&self) -> &VotingEngine {
        &self.engine
    }

    /// Runs one command and returns the text to show.
    pub fn execute(&mut self, command: Command) -> Result<String, CliError> {
        debug!("▶️ comando {:?}", command);
        match command {
            Command::Vote(candidate) => {
                let index = self.resolve(candidate)?;
                let record = self.engine.cast_vote(index)?;
                Ok(format!("{}\n{}", record, self.status_line()))
            }
            Command::Next => {
                if self.engine.at_cycle_boundary() {
                    let voter = self.engine.advance_cycle()?;
                    Ok(format!("New cycle {} started.\n{} is voting...", self.engine.cycle(), voter))
                } else {
                    self.engine.admit_next();
                    Ok(self.status_line())
                }
            }
            Command::Status => Ok(self.status_line()),
            Command::Tallies => Ok(self.render_tallies()),
            Command::History => {
                let history = self.engine.history();
                if history.is_empty() {
                    Ok("No votes yet.".to_string())
                } else {
                    Ok(history.render().trim_end().to_string())
                }
            }
            Command::Results { json } => {
                let results = self.engine.final_results()?;
                if json {
                    Ok(results.to_json()?)
                } else {
                    Ok(results.to_string())
                }
            }
            Command::Help => Ok(HELP.to_string()),
            Command::Quit => Ok(String::new()),
        }
    }

    /// Ballot menu shown when the session opens.
    pub fn ballot(&self) -> String {
        let mut out = String::from("Candidates:");
        if let Some(ledger) = self.engine.ledger() {
            for (i, name) in ledger.names().enumerate() {
                out.push_str(&format!("\n  [{}] {}", i, name));
            }
        }
        out
    }

    fn status_line(&self) -> String {
        let mut line = self.engine.status().to_string();
        if self.engine.at_cycle_boundary() {
            line.push_str(" Type 'next' to start the next cycle.");
        } else if self.engine.is_results_ready() {
            line.push_str(" Type 'results' to see the winner.");
        }
        line
    }

    fn render_tallies(&self) -> String {
        let mut out = String::from("Current Vote Counts:");
        for (name, votes) in self.engine.tallies() {
            out.push_str(&format!("\n  {} ({} votes)", name, votes));
        }
        out
    }

    fn resolve(&self, candidate: CandidateRef) -> Result<usize, CliError> {
        match candidate {
            CandidateRef::Index(index) => Ok(index),
            CandidateRef::Name(name) => self
                .engine
                .ledger()
                .and_then(|ledger| ledger.index_of(&name))
                .ok_or_else(|| format!("unknown candidate '{}'", name).into()),
        }
    }

    /// Reads commands from `input` until `quit` or end of input. Engine errors
    /// are reported and the loop continues.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<(), CliError> {
        writeln!(output, "{}", self.ballot())?;
        writeln!(output, "{}", self.status_line())?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let command = match Command::parse(&line) {
                Ok(command) => command,
                Err(e) => {
                    writeln!(output, "error: {}", e)?;
                    continue;
                }
            };
            if command == Command::Quit {
                break;
            }
            match self.execute(command) {
                Ok(text) => writeln!(output, "{}", text)?,
                Err(CliError::Ballot(e)) => writeln!(output, "error: {}", describe(&e))?,
                Err(e) => writeln!(output, "error: {}", e)?,
            }
        }
        Ok(())
    }
}

/// Adds a hint on what to do next for state-discipline errors.
fn describe(err: &BallotError) -> String {
    match err {
        BallotError::NoActiveVoter => format!("{} (try 'next')", err),
        BallotError::VotingIncomplete { .. } => format!("{} (keep voting)", err),
        _ => err.to_string(),
    }
}
