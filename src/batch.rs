//! Recognition of many independent words.
//!
//! Runs never share state, so a batch can be split across threads freely. The
//! result vector always follows the order of the input.

use log::debug;
use rayon::prelude::*;

use crate::dfa::Dfa;
use crate::types::Finite;

/// Settings for [`Dfa::accepts_batch_with`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    /// Distribute words over the rayon thread pool.
    pub parallel: bool,
    /// Minimum number of words handed to one rayon task.
    pub min_len: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            min_len: 64,
        }
    }
}

impl BatchConfig {
    /// Single-threaded evaluation.
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }
}

impl<S: Finite, Q: Finite> Dfa<S, Q> {
    /// Acceptance of every word in `words`, using [`BatchConfig::default`].
    pub fn accepts_batch<W>(&self, words: &[W]) -> Vec<bool>
    where
        W: AsRef<[S]> + Sync,
    {
        self.accepts_batch_with(words, &BatchConfig::default())
    }

    /// Acceptance of every word in `words`; `result[i] == self.accepts(words[i])`.
    pub fn accepts_batch_with<W>(&self, words: &[W], config: &BatchConfig) -> Vec<bool>
    where
        W: AsRef<[S]> + Sync,
    {
        debug!("accepts_batch(|words| = {}, config = {:?})", words.len(), config);
        if config.parallel {
            words
                .par_iter()
                .with_min_len(config.min_len.max(1))
                .map(|w| self.accepts(w.as_ref()))
                .collect()
        } else {
            words.iter().map(|w| self.accepts(w.as_ref())).collect()
        }
    }

    /// Final state of every word in `words`, each run starting at the start state.
    pub fn run_batch_with<W>(&self, words: &[W], config: &BatchConfig) -> Vec<Q>
    where
        W: AsRef<[S]> + Sync,
    {
        debug!("run_batch(|words| = {}, config = {:?})", words.len(), config);
        let start = self.start();
        if config.parallel {
            words
                .par_iter()
                .with_min_len(config.min_len.max(1))
                .map(|w| self.run(start, w.as_ref()))
                .collect()
        } else {
            words.iter().map(|w| self.run(start, w.as_ref())).collect()
        }
    }
}
