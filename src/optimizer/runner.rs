use crate::ciphertext::CipherText;
use crate::config::SearchParams;
use crate::consts::{DEFAULT_PLATEAU_LIMIT, DEFAULT_RESTARTS};
use crate::key::Key;
use crate::model::QuadgramTable;
use crate::optimizer::{HillClimber, TrialOutcome};
use rayon::prelude::*;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use typed_builder::TypedBuilder;

fn default_threads() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}

#[derive(TypedBuilder, Debug, Clone)]
pub struct OptimizationOptions {
    /// Upper bound on restart trials.
    #[builder(default = DEFAULT_RESTARTS)]
    pub restarts: usize,
    /// Ties with the global best that end the search early.
    #[builder(default = DEFAULT_PLATEAU_LIMIT)]
    pub plateau_limit: usize,
    /// Trials evaluated concurrently per batch.
    #[builder(default = default_threads())]
    pub num_threads: usize,
    #[builder(default)]
    pub max_time: Option<Duration>,
}

impl Default for OptimizationOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl From<&SearchParams> for OptimizationOptions {
    fn from(params: &SearchParams) -> Self {
        Self {
            restarts: params.restarts,
            plateau_limit: params.plateau_limit,
            num_threads: if params.threads == 0 {
                default_threads()
            } else {
                params.threads
            },
            max_time: params.max_time_secs.map(Duration::from_secs),
        }
    }
}

#[derive(Debug, Clone)]
pub struct OptimizationResult {
    pub key: Key,
    pub score: u64,
    pub trials: usize,
    pub plateau_hits: usize,
    pub terminated_early: bool,
    pub cancelled: bool,
    pub elapsed: Duration,
}

impl OptimizationResult {
    /// A zero score means no candidate matched a single known quadgram; the
    /// key carries no information.
    pub fn is_degenerate(&self) -> bool {
        self.score == 0
    }
}

/// Receives the global best after every batch of trials.
/// Returning false stops the search.
pub trait ProgressCallback: Send + Sync {
    fn on_progress(&self, trials: usize, best_score: u64, best_key: &Key) -> bool;
}

impl<T: ProgressCallback + ?Sized> ProgressCallback for &T {
    fn on_progress(&self, trials: usize, best_score: u64, best_key: &Key) -> bool {
        (**self).on_progress(trials, best_score, best_key)
    }
}

pub struct SilentProgress;

impl ProgressCallback for SilentProgress {
    fn on_progress(&self, _trials: usize, _best_score: u64, _best_key: &Key) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrialVerdict {
    Improved,
    Tied,
    Worse,
    Terminate,
}

/// Best result across trials plus the plateau counter.
///
/// The counter starts at 1, resets to 1 on a strict improvement and only
/// grows on ties, so ties need not be consecutive.
#[derive(Debug, Clone)]
pub struct GlobalBest {
    pub score: u64,
    pub key: Key,
    pub plateau_hits: usize,
    plateau_limit: usize,
}

impl GlobalBest {
    pub fn new(plateau_limit: usize) -> Self {
        Self {
            score: 0,
            key: Key::identity(),
            plateau_hits: 1,
            plateau_limit,
        }
    }

    pub fn record(&mut self, score: u64, key: &Key) -> TrialVerdict {
        if score > self.score {
            self.score = score;
            self.key = *key;
            self.plateau_hits = 1;
            TrialVerdict::Improved
        } else if score == self.score {
            self.plateau_hits += 1;
            if self.plateau_hits >= self.plateau_limit {
                TrialVerdict::Terminate
            } else {
                TrialVerdict::Tied
            }
        } else {
            TrialVerdict::Worse
        }
    }
}

pub struct Optimizer {
    table: Arc<QuadgramTable>,
    cipher: Arc<CipherText>,
    options: OptimizationOptions,
}

impl Optimizer {
    pub fn new(
        table: Arc<QuadgramTable>,
        cipher: Arc<CipherText>,
        options: OptimizationOptions,
    ) -> Self {
        Self {
            table,
            cipher,
            options,
        }
    }

    pub fn options(&self) -> &OptimizationOptions {
        &self.options
    }

    fn run_trial(&self, seed: u64) -> TrialOutcome {
        let mut rng = fastrand::Rng::with_seed(seed);
        HillClimber::new(&self.cipher, &self.table, &mut rng).climb()
    }

    /// Random-restart search.
    ///
    /// Trial `t` draws its key from `seed + t`, and batch results are folded
    /// into [`GlobalBest`] in trial order, so a given seed yields the same key
    /// regardless of thread count.
    pub fn run<CB: ProgressCallback>(&self, seed: Option<u64>, callback: CB) -> OptimizationResult {
        let opts = &self.options;
        let base_seed = seed.unwrap_or_else(|| fastrand::u64(..));
        let batch_size = opts.num_threads.max(1);

        info!(
            "🔍 Searching: {} symbols, up to {} restarts, plateau limit {}, {} workers",
            self.cipher.len(),
            opts.restarts,
            opts.plateau_limit,
            batch_size
        );

        let mut best = GlobalBest::new(opts.plateau_limit);
        let mut trials = 0;
        let mut next_trial = 0;
        let mut terminated_early = false;
        let mut cancelled = false;
        let start_time = Instant::now();

        'search: while next_trial < opts.restarts {
            if let Some(limit) = opts.max_time {
                if start_time.elapsed() >= limit {
                    cancelled = true;
                    break;
                }
            }

            let end = (next_trial + batch_size).min(opts.restarts);
            let outcomes: Vec<TrialOutcome> = (next_trial..end)
                .into_par_iter()
                .map(|t| self.run_trial(base_seed.wrapping_add(t as u64)))
                .collect();
            next_trial = end;

            for outcome in outcomes {
                trials += 1;
                let verdict = best.record(outcome.score, &outcome.key);
                debug!(
                    "Trial {:5} | score {:8} | swaps {:4} | evals {:6} | {:?}",
                    trials, outcome.score, outcome.accepted_swaps, outcome.evaluations, verdict
                );
                if verdict == TrialVerdict::Terminate {
                    terminated_early = true;
                    break 'search;
                }
            }

            if !callback.on_progress(trials, best.score, &best.key) {
                cancelled = true;
                break;
            }
        }

        let result = OptimizationResult {
            key: best.key,
            score: best.score,
            trials,
            plateau_hits: best.plateau_hits,
            terminated_early,
            cancelled,
            elapsed: start_time.elapsed(),
        };

        if result.is_degenerate() {
            warn!("⚠️  Search converged with score 0: recovered key has no confidence");
        } else {
            info!(
                "✅ Best score {} after {} trials ({:.2}s)",
                result.score,
                result.trials,
                result.elapsed.as_secs_f32()
            );
        }

        result
    }
}
