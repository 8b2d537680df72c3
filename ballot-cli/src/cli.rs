use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

use ballot_engine::CycleConfig;

use crate::errors::CliError;

#[derive(Parser, Debug)]
#[command(name = "ballot")]
#[command(about = "Batched in-memory voting sessions")]
pub struct Cli {
    /// JSON config file (cap, voter prefix, candidates)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Voters admitted per cycle
    #[arg(long = "max-per-cycle", global = true, value_name = "N")]
    pub max_per_cycle: Option<usize>,

    /// Comma-separated candidate names, in ballot order
    #[arg(long, global = true, value_delimiter = ',', value_name = "NAMES")]
    pub candidates: Option<Vec<String>>,

    /// Also write voting audit events to this file
    #[arg(long = "audit-log", global = true, value_name = "FILE")]
    pub audit_log: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive session driven from stdin
    Run {
        /// Number of voters; prompted for when omitted
        #[arg(long, value_parser = parse_voter_count)]
        voters: Option<usize>,
    },
    /// Runs a whole session with random votes
    Simulate {
        #[arg(long, value_parser = parse_voter_count)]
        voters: usize,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Config file (or defaults) with command-line overrides applied.
    pub fn resolve_config(&self) -> Result<CycleConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => CycleConfig::load_from_file(path)?,
            None => CycleConfig::default(),
        };

        if let Some(cap) = self.max_per_cycle {
            config.max_voters_per_cycle = cap;
        }
        if let Some(names) = &self.candidates {
            config.candidates = names.iter().map(|n| n.trim().to_string()).collect();
        }

        config.validate()?;
        info!(
            "⚙️ Configuração: {} por ciclo, candidatos {:?}",
            config.max_voters_per_cycle, config.candidates
        );
        Ok(config)
    }
}

/// Accepts a positive integer voter count.
pub fn parse_voter_count(input: &str) -> Result<usize, String> {
    match input.trim().parse::<i64>() {
        Ok(n) if n > 0 => usize::try_from(n).map_err(|_| "Invalid input. Please enter a valid number.".to_string()),
        Ok(_) => Err("Please enter a valid number of voters.".to_string()),
        Err(_) => Err("Invalid input. Please enter a valid number.".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_voter_count() {
        assert_eq!(parse_voter_count("12"), Ok(12));
        assert_eq!(parse_voter_count(" 3 "), Ok(3));
        assert!(parse_voter_count("0").is_err());
        assert!(parse_voter_count("-4").is_err());
        assert!(parse_voter_count("abc").is_err());
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "ballot",
            "simulate",
            "--voters",
            "7",
            "--max-per-cycle",
            "3",
            "--candidates",
            "Ana, Bruno",
        ]);
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.max_voters_per_cycle, 3);
        assert_eq!(config.candidates, vec!["Ana", "Bruno"]);
        assert!(matches!(cli.command, Commands::Simulate { voters: 7, json: false, .. }));
    }

    #[test]
    fn test_cli_rejects_bad_voter_count() {
        let res = Cli::try_parse_from(["ballot", "simulate", "--voters", "0"]);
        assert!(res.is_err());
    }

    #[test]
    fn test_zero_cap_override_is_invalid() {
        let cli = Cli::parse_from(["ballot", "run", "--max-per-cycle", "0"]);
        assert!(cli.resolve_config().is_err());
    }
}
