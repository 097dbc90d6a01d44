//! Game and trial result types.

use core::fmt;

/// Outcome of a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameResult {
    /// Whether every card was discarded.
    pub won: bool,
    /// Number of cards discarded through matches.
    pub discarded: usize,
    /// Number of cards drawn from the deck.
    pub draws: usize,
}

/// Aggregate outcome of many games.
///
/// ```
/// use onehand::TrialSummary;
///
/// let summary = TrialSummary { successes: 412, iterations: 1_000_000 };
/// assert_eq!(summary.to_string(), "412/1000000 games won, 0.04% success rate");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TrialSummary {
    /// Games won.
    pub successes: u64,
    /// Games played.
    pub iterations: u64,
}

impl TrialSummary {
    /// Creates an empty summary.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            successes: 0,
            iterations: 0,
        }
    }

    /// Records the outcome of one game.
    pub const fn record(&mut self, won: bool) {
        self.iterations += 1;
        if won {
            self.successes += 1;
        }
    }

    /// Combines two summaries of independent runs.
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        Self {
            successes: self.successes + other.successes,
            iterations: self.iterations + other.iterations,
        }
    }

    /// Returns the fraction of games won, or `0.0` if none were played.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for a reported rate"
    )]
    pub fn success_rate(&self) -> f64 {
        if self.iterations == 0 {
            return 0.0;
        }
        self.successes as f64 / self.iterations as f64
    }
}

impl fmt::Display for TrialSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} games won, {:.2}% success rate",
            self.successes,
            self.iterations,
            100.0 * self.success_rate()
        )
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn record_and_merge() {
        let mut first = TrialSummary::new();
        first.record(true);
        first.record(false);
        let mut second = TrialSummary::new();
        second.record(true);

        let total = first.merge(second);
        assert_eq!(total.successes, 2);
        assert_eq!(total.iterations, 3);
    }

    #[test]
    fn empty_summary_reports_zero() {
        let summary = TrialSummary::new();
        assert!(summary.success_rate().abs() < f64::EPSILON);
        assert_eq!(summary.to_string(), "0/0 games won, 0.00% success rate");
    }

    #[test]
    fn display_rounds_to_two_places() {
        let summary = TrialSummary {
            successes: 1,
            iterations: 3,
        };
        assert_eq!(summary.to_string(), "1/3 games won, 33.33% success rate");
    }
}
