//! Counter state with a pure derived status and a guarded deferred reset.

/// Counter state for the threshold demo.
///
/// The derived status is a plain method rather than a tracked computed
/// value. Deferred resets carry a generation: every time the counter
/// crosses its threshold a new generation is armed, and only a reset
/// carrying the current generation is honored. A timer that was armed and
/// then superseded simply expires without effect.
#[derive(Debug, Clone)]
pub struct Counter {
    value: i64,
    threshold: i64,
    generation: u64,
}

/// What the counter's value means relative to its threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterStatus {
    /// Below the threshold
    NotThereYet,
    /// Exactly at the threshold
    Exact(i64),
    /// Above the threshold
    TooMuch,
}

impl std::fmt::Display for CounterStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CounterStatus::NotThereYet => write!(f, "Not there yet"),
            CounterStatus::Exact(value) => write!(f, "{value}"),
            CounterStatus::TooMuch => write!(f, "Too much!"),
        }
    }
}

impl Counter {
    /// Creates a counter starting at zero with the given threshold.
    pub fn new(threshold: i64) -> Self {
        Self {
            value: 0,
            threshold,
            generation: 0,
        }
    }

    /// Returns the current value.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Returns the threshold.
    pub fn threshold(&self) -> i64 {
        self.threshold
    }

    /// Adds to the counter and returns the new value.
    pub fn add(&mut self, amount: i64) -> i64 {
        self.value += amount;
        self.value
    }

    /// Derives the status of the current value.
    pub fn status(&self) -> CounterStatus {
        match self.value.cmp(&self.threshold) {
            std::cmp::Ordering::Less => CounterStatus::NotThereYet,
            std::cmp::Ordering::Equal => CounterStatus::Exact(self.value),
            std::cmp::Ordering::Greater => CounterStatus::TooMuch,
        }
    }

    /// Returns true if the value is above the threshold.
    pub fn over_threshold(&self) -> bool {
        self.value > self.threshold
    }

    /// Arms a new deferred reset and returns its generation.
    ///
    /// Any previously armed generation becomes stale.
    pub fn arm_reset(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Applies a deferred reset if the generation is still current.
    ///
    /// Returns true if the counter was reset to zero.
    pub fn reset(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.value = 0;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_derivation() {
        let mut counter = Counter::new(37);
        assert_eq!(counter.status(), CounterStatus::NotThereYet);

        counter.add(37);
        assert_eq!(counter.status(), CounterStatus::Exact(37));

        counter.add(1);
        assert_eq!(counter.status(), CounterStatus::TooMuch);
        assert_eq!(counter.status().to_string(), "Too much!");
    }

    #[test]
    fn test_over_threshold_scenario() {
        // add(40) on a fresh counter with threshold 37
        let mut counter = Counter::new(37);
        counter.add(40);
        assert!(counter.over_threshold());
        assert_eq!(counter.status(), CounterStatus::TooMuch);
    }

    #[test]
    fn test_current_reset_fires() {
        let mut counter = Counter::new(37);
        counter.add(40);
        let generation = counter.arm_reset();

        assert!(counter.reset(generation));
        assert_eq!(counter.value(), 0);
    }

    #[test]
    fn test_stale_reset_ignored() {
        let mut counter = Counter::new(37);
        counter.add(40);
        let first = counter.arm_reset();

        // Counter is retriggered before the first timer fires.
        counter.add(5);
        let second = counter.arm_reset();

        assert!(!counter.reset(first));
        assert_eq!(counter.value(), 45);

        assert!(counter.reset(second));
        assert_eq!(counter.value(), 0);
    }
}
