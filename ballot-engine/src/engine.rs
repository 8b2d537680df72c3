use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use ballot_common::{BallotError, CandidateTally, FinalResults, Result, VoterId};
use ballot_ledger::CandidateLedger;

use crate::{
    config::CycleConfig,
    history::{VoteRecord, VotingHistory},
    queue::VoterQueue,
    state::{EngineState, EngineStatus},
};

/// Read-only view of a session, for rendering or JSON export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub state: EngineState,
    pub cycle: usize,
    pub voters_this_cycle: usize,
    pub max_voters_per_cycle: usize,
    pub total_voters_voted: usize,
    pub total_voters: usize,
    pub queued: usize,
    pub tallies: Vec<CandidateTally>,
    pub history: Vec<String>,
}

/// Motor de ciclos de votação.
///
/// Owns the voter queue, the current-voter slot (inside [`EngineState`]), the
/// per-cycle counter, the history and the completion counter. Vote counts are
/// owned by the [`CandidateLedger`] and only reached through it.
#[derive(Debug, Clone)]
pub struct VotingEngine {
    config: CycleConfig,
    ledger: Option<CandidateLedger>,
    queue: VoterQueue,
    state: EngineState,
    history: VotingHistory,
    cycle: usize,
    voters_this_cycle: usize,
    total_voters_voted: usize,
    total_voters: usize,
}

impl Default for VotingEngine {
    fn default() -> Self {
        Self::unchecked(CycleConfig::default())
    }
}

impl VotingEngine {
    /// Creates an engine waiting for `start`. Candidate names in `config` are
    /// not used here; they are passed to `start` by the caller.
    pub fn new(config: CycleConfig) -> Result<Self> {
        config.validate_cycle()?;
        Ok(Self::unchecked(config))
    }

    fn unchecked(config: CycleConfig) -> Self {
        Self {
            config,
            ledger: None,
            queue: VoterQueue::default(),
            state: EngineState::AwaitingInit,
            history: VotingHistory::new(),
            cycle: 0,
            voters_this_cycle: 0,
            total_voters_voted: 0,
            total_voters: 0,
        }
    }

    /// Starts the session: fills the queue with `total_voters` ids, builds the
    /// ledger and admits the first voter.
    pub fn start<I, S>(&mut self, total_voters: usize, candidate_names: I) -> Result<&EngineState>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.state != EngineState::AwaitingInit {
            warn!("⚠️ Sessão já iniciada; start ignorado");
            return Err(BallotError::SessionAlreadyStarted);
        }
        if total_voters == 0 {
            return Err(BallotError::InvalidVoterCount(total_voters));
        }
        let ledger = CandidateLedger::new(candidate_names)?;

        info!(
            target: "voting",
            "EVENT:START voters={} candidates={} cap={}",
            total_voters,
            ledger.len(),
            self.config.max_voters_per_cycle
        );

        self.queue = VoterQueue::populate(&self.config.voter_prefix, total_voters);
        self.ledger = Some(ledger);
        self.total_voters = total_voters;
        self.cycle = 1;
        self.state = EngineState::AwaitingNextVoterOrCycle;
        self.admit_next();

        Ok(&self.state)
    }

    /// Moves the next queued voter into the current-voter slot.
    ///
    /// Returns the admitted voter, or `None` when nothing was admitted: no
    /// session, someone is already voting, the queue is empty, or the cycle
    /// cap is reached. In the last case the engine settles at
    /// [`EngineState::CycleBoundary`] and waits for `advance_cycle`.
    pub fn admit_next(&mut self) -> Option<VoterId> {
        match self.state {
            EngineState::AwaitingNextVoterOrCycle | EngineState::CycleBoundary => {}
            _ => return None,
        }

        if self.voters_this_cycle >= self.config.max_voters_per_cycle {
            if !self.queue.is_empty() && self.state != EngineState::CycleBoundary {
                self.state = EngineState::CycleBoundary;
                info!(
                    "🔁 Ciclo {} encerrado: {} eleitores votaram",
                    self.cycle, self.voters_this_cycle
                );
            }
            return None;
        }

        let voter = self.queue.pop()?;
        info!(
            target: "voting",
            "EVENT:ADMIT voter={} cycle={} slot={}/{}",
            voter,
            self.cycle,
            self.voters_this_cycle + 1,
            self.config.max_voters_per_cycle
        );
        self.state = EngineState::AwaitingVoteForCurrentVoter(voter.clone());
        Some(voter)
    }

    /// Casts the current voter's vote for the candidate at `candidate_index`.
    ///
    /// On success the next voter is admitted automatically while the cycle
    /// has room. On error nothing changes.
    pub fn cast_vote(&mut self, candidate_index: usize) -> Result<VoteRecord> {
        let voter = match &self.state {
            EngineState::AwaitingVoteForCurrentVoter(voter) => voter.clone(),
            other => {
                warn!("⚠️ Voto rejeitado: nenhum eleitor ativo (estado {})", other.name());
                return Err(BallotError::NoActiveVoter);
            }
        };
        let ledger = self.ledger.as_mut().ok_or(BallotError::NoActiveVoter)?;

        let candidate = ledger.record_vote(candidate_index)?.name().to_string();
        let record = self
            .history
            .append(voter, candidate_index, candidate)
            .clone();
        self.voters_this_cycle += 1;
        self.total_voters_voted += 1;
        self.state = EngineState::AwaitingNextVoterOrCycle;

        info!(
            target: "voting",
            "EVENT:VOTE seq={} voter={} candidate={} cycle={} voted={}/{}",
            record.sequence,
            record.voter,
            record.candidate,
            self.cycle,
            self.total_voters_voted,
            self.total_voters
        );

        if self.total_voters_voted >= self.total_voters {
            self.state = EngineState::AllVotersComplete;
            info!(
                target: "voting",
                "EVENT:COMPLETE voters={} cycles={}",
                self.total_voters_voted,
                self.cycle
            );
        } else if self.voters_this_cycle >= self.config.max_voters_per_cycle {
            info!(
                target: "voting",
                "EVENT:CYCLE_END cycle={} voters={} queued={}",
                self.cycle,
                self.voters_this_cycle,
                self.queue.len()
            );
        } else {
            self.admit_next();
        }

        Ok(record)
    }

    /// Opens the next cycle and admits its first voter.
    ///
    /// Only valid when the cap was reached and voters are still queued.
    pub fn advance_cycle(&mut self) -> Result<VoterId> {
        let waiting = matches!(
            self.state,
            EngineState::AwaitingNextVoterOrCycle | EngineState::CycleBoundary
        );
        if !waiting
            || self.voters_this_cycle != self.config.max_voters_per_cycle
            || self.queue.is_empty()
        {
            warn!(
                "⚠️ advance_cycle fora de fronteira (estado {}, {}/{} no ciclo, fila {})",
                self.state.name(),
                self.voters_this_cycle,
                self.config.max_voters_per_cycle,
                self.queue.len()
            );
            return Err(BallotError::CycleNotAtBoundary);
        }

        self.voters_this_cycle = 0;
        self.cycle += 1;
        self.state = EngineState::AwaitingNextVoterOrCycle;
        info!(
            target: "voting",
            "EVENT:CYCLE_ADVANCE cycle={} queued={}",
            self.cycle,
            self.queue.len()
        );

        self.admit_next().ok_or(BallotError::CycleNotAtBoundary)
    }

    /// True once every configured voter has voted.
    pub fn is_results_ready(&self) -> bool {
        self.ledger.is_some() && self.total_voters_voted >= self.total_voters
    }

    pub fn final_results(&self) -> Result<FinalResults> {
        let ledger = match &self.ledger {
            Some(ledger) if self.is_results_ready() => ledger,
            _ => {
                return Err(BallotError::VotingIncomplete {
                    voted: self.total_voters_voted,
                    total: self.total_voters,
                })
            }
        };

        let winner = ledger.winner()?.to_tally();
        debug!("🏆 Vencedor: {} com {} votos", winner.name, winner.votes);
        Ok(FinalResults {
            tallies: ledger.tally_snapshot(),
            winner,
        })
    }

    /// Current tallies in candidate order; empty before `start`.
    pub fn tallies(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.ledger.iter().flat_map(|ledger| ledger.tallies())
    }

    pub fn ledger(&self) -> Option<&CandidateLedger> {
        self.ledger.as_ref()
    }

    pub fn status(&self) -> EngineStatus {
        match &self.state {
            EngineState::AwaitingVoteForCurrentVoter(voter) => EngineStatus::Voting(voter.clone()),
            EngineState::AllVotersComplete => EngineStatus::ResultsReady,
            EngineState::AwaitingNextVoterOrCycle | EngineState::CycleBoundary
                if self.voters_this_cycle >= self.config.max_voters_per_cycle =>
            {
                EngineStatus::CycleEnded {
                    cap: self.config.max_voters_per_cycle,
                }
            }
            _ => EngineStatus::Idle,
        }
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            state: self.state.clone(),
            cycle: self.cycle,
            voters_this_cycle: self.voters_this_cycle,
            max_voters_per_cycle: self.config.max_voters_per_cycle,
            total_voters_voted: self.total_voters_voted,
            total_voters: self.total_voters,
            queued: self.queue.len(),
            tallies: self
                .ledger
                .as_ref()
                .map(CandidateLedger::tally_snapshot)
                .unwrap_or_default(),
            history: self.history.iter().map(ToString::to_string).collect(),
        }
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn current_voter(&self) -> Option<&VoterId> {
        self.state.current_voter()
    }

    /// Whether `advance_cycle` would succeed right now.
    pub fn at_cycle_boundary(&self) -> bool {
        matches!(
            self.state,
            EngineState::AwaitingNextVoterOrCycle | EngineState::CycleBoundary
        ) && self.voters_this_cycle == self.config.max_voters_per_cycle
            && !self.queue.is_empty()
    }

    pub fn history(&self) -> &VotingHistory {
        &self.history
    }

    pub fn config(&self) -> &CycleConfig {
        &self.config
    }

    pub fn cycle(&self) -> usize {
        self.cycle
    }

    pub fn voters_this_cycle(&self) -> usize {
        self.voters_this_cycle
    }

    pub fn max_voters_per_cycle(&self) -> usize {
        self.config.max_voters_per_cycle
    }

    pub fn total_voters_voted(&self) -> usize {
        self.total_voters_voted
    }

    pub fn total_voters(&self) -> usize {
        self.total_voters
    }

    /// Voters still waiting in the queue.
    pub fn queued(&self) -> usize {
        self.queue.len()
    }
}
