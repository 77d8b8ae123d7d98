pub mod candidate;
pub mod runner;

pub use self::candidate::Candidate;
pub use self::runner::{
    GlobalBest, OptimizationOptions, OptimizationResult, Optimizer, ProgressCallback,
    SilentProgress, TrialVerdict,
};

use crate::ciphertext::CipherText;
use crate::consts::ALPHABET_LEN;
use crate::fitness;
use crate::key::Key;
use crate::model::QuadgramTable;
use fastrand::Rng;
use itertools::Itertools;

/// Result of one restart trial, taken at its local optimum.
#[derive(Debug, Clone)]
pub struct TrialOutcome {
    pub score: u64,
    pub key: Key,
    pub accepted_swaps: usize,
    pub evaluations: usize,
}

/// First-improvement hill climber over key swaps for a single trial.
pub struct HillClimber<'a> {
    table: &'a QuadgramTable,
    candidate: Candidate<'a>,
    score: u64,
    accepted: usize,
    evaluations: usize,
}

impl<'a> HillClimber<'a> {
    /// Starts a trial from a uniformly random key drawn from `rng`.
    pub fn new(cipher: &'a CipherText, table: &'a QuadgramTable, rng: &mut Rng) -> Self {
        Self::with_key(cipher, table, Key::random(rng))
    }

    pub fn with_key(cipher: &'a CipherText, table: &'a QuadgramTable, key: Key) -> Self {
        let candidate = Candidate::new(cipher, key);
        let score = fitness::score(candidate.plaintext(), table);
        Self {
            table,
            candidate,
            score,
            accepted: 0,
            evaluations: 1,
        }
    }

    /// One scan over all pairs `i < j` in lexicographic order. Commits and
    /// returns the new score at the first strictly better swap, `None` when
    /// the scan finishes without one.
    pub fn step(&mut self) -> Option<u64> {
        for (i, j) in (0..ALPHABET_LEN).tuple_combinations() {
            if self.candidate.is_inert(i, j) {
                continue;
            }

            self.candidate.apply_swap(i, j);
            let trial_score = fitness::score(self.candidate.plaintext(), self.table);
            self.evaluations += 1;

            if trial_score > self.score {
                self.candidate.commit_swap(i, j);
                self.score = trial_score;
                self.accepted += 1;
                return Some(trial_score);
            }
            self.candidate.revert_swap(i, j);
        }
        None
    }

    /// Runs [`HillClimber::step`] until a local optimum is reached.
    pub fn climb(mut self) -> TrialOutcome {
        while self.step().is_some() {}
        TrialOutcome {
            score: self.score,
            key: *self.candidate.key(),
            accepted_swaps: self.accepted,
            evaluations: self.evaluations,
        }
    }

    /// Looks for an improving swap without accepting it.
    pub fn find_improving_swap(&mut self) -> Option<(usize, usize, u64)> {
        for (i, j) in (0..ALPHABET_LEN).tuple_combinations() {
            if self.candidate.is_inert(i, j) {
                continue;
            }
            self.candidate.apply_swap(i, j);
            let trial_score = fitness::score(self.candidate.plaintext(), self.table);
            self.candidate.revert_swap(i, j);
            if trial_score > self.score {
                return Some((i, j, trial_score));
            }
        }
        None
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn key(&self) -> &Key {
        self.candidate.key()
    }

    pub fn plaintext(&self) -> &[u8] {
        self.candidate.plaintext()
    }
}
