use std::{collections::HashSet, fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::info;

use ballot_common::{BallotError, Result};

pub const DEFAULT_MAX_VOTERS_PER_CYCLE: usize = 10;
pub const DEFAULT_VOTER_PREFIX: &str = "Voter";

/// Session settings. Missing fields in a config file fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CycleConfig {
    /// Voters admitted per cycle before an explicit advance is required.
    pub max_voters_per_cycle: usize,
    /// Voter ids are generated as `"<prefix> <n>"`.
    pub voter_prefix: String,
    pub candidates: Vec<String>,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            max_voters_per_cycle: DEFAULT_MAX_VOTERS_PER_CYCLE,
            voter_prefix: DEFAULT_VOTER_PREFIX.to_string(),
            candidates: vec!["Alice".into(), "Bob".into(), "Charlie".into()],
        }
    }
}

impl CycleConfig {
    pub fn with_max_voters_per_cycle(mut self, cap: usize) -> Self {
        self.max_voters_per_cycle = cap;
        self
    }

    pub fn with_candidates<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.candidates = names.into_iter().map(Into::into).collect();
        self
    }

    /// Checks the cycle settings (cap and voter prefix).
    pub fn validate_cycle(&self) -> Result<()> {
        if self.max_voters_per_cycle == 0 {
            return Err(BallotError::InvalidConfiguration(
                "max_voters_per_cycle must be at least 1".to_string(),
            ));
        }
        if self.voter_prefix.trim().is_empty() {
            return Err(BallotError::InvalidConfiguration(
                "voter_prefix must not be blank".to_string(),
            ));
        }
        Ok(())
    }

    /// Checks the cycle settings and the candidate list.
    pub fn validate(&self) -> Result<()> {
        self.validate_cycle()?;

        if self.candidates.is_empty() {
            return Err(BallotError::InvalidConfiguration(
                "at least one candidate is required".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        for name in &self.candidates {
            if name.trim().is_empty() {
                return Err(BallotError::InvalidConfiguration(
                    "candidate names must not be blank".to_string(),
                ));
            }
            if !seen.insert(name.as_str()) {
                return Err(BallotError::InvalidConfiguration(format!(
                    "duplicate candidate '{}'",
                    name
                )));
            }
        }
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path.as_ref())?;
        let config: CycleConfig = serde_json::from_str(&json)?;
        config.validate()?;
        info!("📝 Configuração carregada de {:?}", path.as_ref());
        Ok(config)
    }
}
