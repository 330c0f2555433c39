//! Time and cancellation limits for a single decision.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Shared flag another thread can raise to stop a running decision.
#[derive(Debug, Clone, Default)]
pub struct StopToken(Arc<AtomicBool>);

impl StopToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn reset(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Limits checked by strategies at node or generation boundaries.
/// An unlimited budget never interrupts anything.
#[derive(Debug, Clone, Default)]
pub struct Budget {
    deadline: Option<Instant>,
    stop: Option<StopToken>,
}

impl Budget {
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// Budget expiring `time` from now.
    pub fn move_time(time: Duration) -> Self {
        Self::unlimited().with_move_time(Some(time))
    }

    /// Tightens the deadline to at most `time` from now. `None` leaves it as is.
    pub fn with_move_time(mut self, time: Option<Duration>) -> Self {
        if let Some(time) = time {
            let deadline = Instant::now() + time;
            self.deadline = Some(match self.deadline {
                Some(existing) => existing.min(deadline),
                None => deadline,
            });
        }
        self
    }

    pub fn with_stop(mut self, token: StopToken) -> Self {
        self.stop = Some(token);
        self
    }

    /// True once the stop token has been raised.
    pub fn is_cancelled(&self) -> bool {
        self.stop.as_ref().is_some_and(StopToken::is_stopped)
    }

    /// True once the deadline has passed.
    pub fn is_expired(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    pub fn is_exhausted(&self) -> bool {
        self.is_cancelled() || self.is_expired()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlimited_budget() {
        let budget = Budget::unlimited();
        assert!(!budget.is_exhausted());
    }

    #[test]
    fn test_stop_token() {
        let token = StopToken::new();
        let budget = Budget::unlimited().with_stop(token.clone());
        assert!(!budget.is_cancelled());

        token.stop();
        assert!(budget.is_cancelled());
        assert!(budget.is_exhausted());

        token.reset();
        assert!(!budget.is_exhausted());
    }

    #[test]
    fn test_deadline() {
        assert!(Budget::move_time(Duration::ZERO).is_expired());
        assert!(!Budget::move_time(Duration::from_secs(3600)).is_expired());

        // A tighter move time wins over a looser one.
        let budget = Budget::move_time(Duration::from_secs(3600)).with_move_time(Some(Duration::ZERO));
        assert!(budget.is_expired());
        let budget = Budget::move_time(Duration::ZERO).with_move_time(Some(Duration::from_secs(3600)));
        assert!(budget.is_expired());
    }
}
