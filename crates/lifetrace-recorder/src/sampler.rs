//! Counter-based sampling of high-frequency hooks.

use lifetrace_types::SamplingPolicy;

/// Occurrence counter paired with the policy that filters it.
#[derive(Debug, Clone)]
pub struct Sampler {
    policy: SamplingPolicy,
    occurrences: u64,
}

impl Sampler {
    pub fn new(policy: SamplingPolicy) -> Self {
        Self {
            policy,
            occurrences: 0,
        }
    }

    /// Count one occurrence. Returns its 1-based ordinal and whether it is
    /// recorded.
    pub fn tick(&mut self) -> (u64, bool) {
        self.occurrences += 1;
        (self.occurrences, self.policy.admits(self.occurrences))
    }

    /// Occurrences counted so far.
    pub fn occurrences(&self) -> u64 {
        self.occurrences
    }
}
