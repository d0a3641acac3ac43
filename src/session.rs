use std::time::Instant;

use rand::Rng;

use crate::catalog::Catalog;
use crate::classify::{classify, CharState};
use crate::clock::Clock;
use crate::metrics::Metrics;
use crate::snippet::Snippet;

/// One practice attempt against one snippet
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    target: Snippet,
    input: String,
    started_at: Option<Instant>,
    completed: bool,
}

impl Session {
    pub fn new(target: Snippet) -> Self {
        Self {
            target,
            input: String::new(),
            started_at: None,
            completed: false,
        }
    }

    pub fn target(&self) -> &Snippet {
        &self.target
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }

    pub fn has_started(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Replaces the typed text with `new_input` and returns fresh metrics.
    ///
    /// The start time is taken from `clock` the first time the input is
    /// non-empty and never changes afterwards. Once the input has matched the
    /// target the session stays completed, even if later edits diverge.
    pub fn record_input(&mut self, new_input: impl Into<String>, clock: &dyn Clock) -> Metrics {
        let new_input = new_input.into();
        let now = clock.now();

        if self.started_at.is_none() && !new_input.is_empty() {
            self.started_at = Some(now);
            tracing::debug!(target_len = self.target.char_count(), "typing started");
        }

        let just_completed = !self.completed && new_input == self.target.as_str();
        self.completed |= just_completed;
        self.input = new_input;

        let metrics = self.metrics_at(now);
        tracing::trace!(
            speed = metrics.speed,
            accuracy = metrics.accuracy,
            progress = metrics.progress,
            "input recorded"
        );
        if just_completed {
            tracing::info!(
                speed = metrics.speed,
                accuracy = metrics.accuracy,
                "snippet completed"
            );
        }
        metrics
    }

    /// Metrics for the current input as of `now`
    pub fn metrics_at(&self, now: Instant) -> Metrics {
        Metrics::compute(self.target.as_str(), &self.input, self.started_at, now)
    }

    /// Display state of every target char
    pub fn classify(&self) -> Vec<CharState> {
        classify(self.target.as_str(), &self.input)
    }

    /// Fresh attempt at the same snippet
    pub fn restart(&self) -> Self {
        Self::new(self.target.clone())
    }
}

/// Starts a new session on a snippet drawn uniformly from `catalog`
pub fn reset_session<R: Rng + ?Sized>(catalog: &Catalog, rng: &mut R) -> Session {
    Session::new(catalog.choose(rng).clone())
}
