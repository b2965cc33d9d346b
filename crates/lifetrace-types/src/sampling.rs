//! Sampling policy for high-frequency hooks.

use serde::{Deserialize, Serialize};

/// Rule deciding which occurrences of a high-frequency hook are recorded.
///
/// The first `burst` occurrences are always recorded. After that, every
/// `interval`-th occurrence past the burst is recorded. An `interval` of
/// zero records the burst only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingPolicy {
    /// Occurrences always recorded.
    pub burst: u32,
    /// Stride between recorded occurrences after the burst.
    pub interval: u32,
}

impl SamplingPolicy {
    /// Default stride after the burst.
    pub const DEFAULT_INTERVAL: u32 = 10;
    /// Default burst for the plain check hook.
    pub const CHECK_BURST: u32 = 5;
    /// Default burst for the content and view checked hooks.
    pub const CHILD_CHECK_BURST: u32 = 3;

    /// Create a policy.
    pub const fn new(burst: u32, interval: u32) -> Self {
        Self { burst, interval }
    }

    /// Default policy for the check hook.
    pub const fn check() -> Self {
        Self::new(Self::CHECK_BURST, Self::DEFAULT_INTERVAL)
    }

    /// Default policy for the content and view checked hooks.
    pub const fn child_check() -> Self {
        Self::new(Self::CHILD_CHECK_BURST, Self::DEFAULT_INTERVAL)
    }

    /// Record everything.
    pub const fn unsampled() -> Self {
        Self::new(0, 1)
    }

    /// Whether the `occurrence`-th call (1-based) is recorded.
    pub fn admits(&self, occurrence: u64) -> bool {
        let burst = u64::from(self.burst);
        if occurrence == 0 {
            return false;
        }
        if occurrence <= burst {
            return true;
        }
        self.interval > 0 && (occurrence - burst) % u64::from(self.interval) == 0
    }

    /// Number of recorded calls out of `total`.
    pub fn expected_recorded(&self, total: u64) -> u64 {
        let burst = u64::from(self.burst);
        let head = total.min(burst);
        let tail = match self.interval {
            0 => 0,
            interval => total.saturating_sub(burst) / u64::from(interval),
        };
        head + tail
    }
}

impl Default for SamplingPolicy {
    fn default() -> Self {
        Self::check()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn count_admitted(policy: SamplingPolicy, total: u64) -> u64 {
        (1..=total).filter(|n| policy.admits(*n)).count() as u64
    }

    #[test]
    fn test_check_policy_known_counts() {
        let policy = SamplingPolicy::check();
        for (total, expected) in [(0, 0), (1, 1), (5, 5), (6, 5), (15, 6), (25, 7)] {
            assert_eq!(count_admitted(policy, total), expected, "N={total}");
            assert_eq!(policy.expected_recorded(total), expected, "N={total}");
        }
    }

    #[test]
    fn test_child_check_policy() {
        let policy = SamplingPolicy::child_check();
        let admitted: Vec<u64> = (1..=30).filter(|n| policy.admits(*n)).collect();
        assert_eq!(admitted, vec![1, 2, 3, 13, 23]);
    }

    #[test]
    fn test_zero_interval_is_burst_only() {
        let policy = SamplingPolicy::new(2, 0);
        assert!(policy.admits(2));
        assert!(!policy.admits(3));
        assert!(!policy.admits(1000));
        assert_eq!(policy.expected_recorded(1000), 2);
    }

    #[test]
    fn test_unsampled_admits_everything() {
        let policy = SamplingPolicy::unsampled();
        assert!((1..100).all(|n| policy.admits(n)));
    }

    proptest! {
        #[test]
        fn prop_expected_matches_predicate(
            burst in 0u32..20,
            interval in 0u32..20,
            total in 0u64..500,
        ) {
            let policy = SamplingPolicy::new(burst, interval);
            prop_assert_eq!(count_admitted(policy, total), policy.expected_recorded(total));
        }

        #[test]
        fn prop_check_formula(total in 0u64..2000) {
            let expected = total.min(5) + total.saturating_sub(5) / 10;
            prop_assert_eq!(count_admitted(SamplingPolicy::check(), total), expected);
        }
    }
}
