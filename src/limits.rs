//! Time budget for a single move decision
//!
//! The search polls the budget at node entry; there is no thread interrupt.
//! A node may overshoot the deadline by the cost of its current child call,
//! so cancellation latency is bounded but not exact.

use instant::Instant;
use std::time::Duration;

/// Monotonic elapsed-time reading against a configured limit.
#[derive(Debug, Clone)]
pub struct TimeBudget {
    start: Instant,
    limit: Option<Duration>,
}

impl TimeBudget {
    /// Start a budget of `millis` milliseconds from now.
    pub fn start(millis: u64) -> Self {
        TimeBudget {
            start: Instant::now(),
            limit: Some(Duration::from_millis(millis)),
        }
    }

    /// A budget that never expires, for fixed-depth searches and tests.
    pub fn unlimited() -> Self {
        TimeBudget {
            start: Instant::now(),
            limit: None,
        }
    }

    /// Milliseconds elapsed since the budget started.
    pub fn elapsed_millis(&self) -> u128 {
        self.start.elapsed().as_millis()
    }

    /// True once the limit has been reached.
    pub fn expired(&self) -> bool {
        match self.limit {
            Some(limit) => self.start.elapsed() >= limit,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_budget_expires_immediately() {
        let budget = TimeBudget::start(0);
        assert!(budget.expired(), "a zero budget must be expired at once");
    }

    #[test]
    fn test_unlimited_budget_never_expires() {
        let budget = TimeBudget::unlimited();
        assert!(!budget.expired());
    }

    #[test]
    fn test_generous_budget_is_not_expired() {
        let budget = TimeBudget::start(60_000);
        assert!(!budget.expired());
        assert!(budget.elapsed_millis() < 60_000);
    }
}
