use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::info;

use ballot_common::FinalResults;
use ballot_engine::{CycleConfig, VotingEngine};

use crate::errors::CliError;

/// Runs a full session with uniformly random choices, advancing cycles as
/// they fill up.
pub fn simulate(
    config: &CycleConfig,
    voters: usize,
    seed: Option<u64>,
) -> Result<(VotingEngine, FinalResults), CliError> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut engine = VotingEngine::new(config.clone())?;
    engine.start(voters, config.candidates.iter().cloned())?;
    let candidates = config.candidates.len();

    while !engine.is_results_ready() {
        if engine.current_voter().is_none() {
            let voter = engine.advance_cycle()?;
            info!("🔁 Ciclo {} iniciado com {}", engine.cycle(), voter);
        }
        engine.cast_vote(rng.gen_range(0..candidates))?;
    }

    let results = engine.final_results()?;
    info!(
        "🏁 Simulação concluída: {} votos em {} ciclos",
        engine.total_voters_voted(),
        engine.cycle()
    );
    Ok((engine, results))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulation_completes() {
        let config = CycleConfig::default().with_max_voters_per_cycle(4);
        let (engine, results) = simulate(&config, 11, Some(7)).unwrap();

        assert_eq!(results.total_votes(), 11);
        assert_eq!(engine.history().len(), 11);
        assert_eq!(engine.cycle(), 3);
        let max = results.tallies.iter().map(|t| t.votes).max().unwrap();
        assert_eq!(results.winner.votes, max);
    }

    #[test]
    fn test_seed_is_reproducible() {
        let config = CycleConfig::default();
        let (_, a) = simulate(&config, 25, Some(42)).unwrap();
        let (_, b) = simulate(&config, 25, Some(42)).unwrap();
        assert_eq!(a, b);
    }
}
