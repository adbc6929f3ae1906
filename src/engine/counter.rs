use thiserror::Error;

/// Animation scheduling parameters that make a counter run impossible to
/// drive. Checked once at activation; a rejected run never ticks.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("counter animation duration must be positive (got {duration_ms}ms)")]
    InvalidDuration { duration_ms: u32 },
    #[error("counter tick interval must be positive (got {interval_ms}ms)")]
    InvalidInterval { interval_ms: u32 },
    #[error("counter target for \"{name}\" must be non-negative (got {target})")]
    NegativeTarget { name: String, target: f64 },
}

/// Resolved once when the owning view mounts, from the
/// `prefers-reduced-motion` media query. Never re-evaluated mid-run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionPreference {
    Full,
    Reduced,
}

/// What a reduced-motion run shows: the final numbers right away, or the
/// counters held at zero. Either way the run is terminal from the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReducedMotionMode {
    JumpToTarget,
    PinAtZero,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Settled,
}

#[derive(Debug, Clone, PartialEq)]
struct Counter {
    name: String,
    current: f64,
    target: f64,
    increment: f64,
}

/// One-shot run of a set of named counters from zero to their targets over a
/// fixed duration, advanced by fixed-size ticks.
///
/// Increments come from a floating-point division, so every advance is
/// clamped with `min(current + increment, target)` and the run settles the
/// tick all counters sit exactly at target. Once `Settled` the run stays
/// settled; further ticks are no-ops. The caller owns the tick scheduler and
/// must drop it on teardown.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterRun {
    counters: Vec<Counter>,
    state: RunState,
    duration_ms: u32,
    interval_ms: u32,
    ticks: u32,
}

impl CounterRun {
    pub fn new<I, S>(targets: I, duration_ms: u32, interval_ms: u32) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self::with_motion(
            targets,
            duration_ms,
            interval_ms,
            MotionPreference::Full,
            ReducedMotionMode::JumpToTarget,
        )
    }

    pub fn with_motion<I, S>(
        targets: I,
        duration_ms: u32,
        interval_ms: u32,
        motion: MotionPreference,
        reduced_mode: ReducedMotionMode,
    ) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        if duration_ms == 0 {
            return Err(ConfigError::InvalidDuration { duration_ms });
        }
        if interval_ms == 0 {
            return Err(ConfigError::InvalidInterval { interval_ms });
        }

        let steps = f64::from(duration_ms) / f64::from(interval_ms);
        let mut counters = Vec::new();
        for (name, target) in targets {
            let name = name.into();
            if target < 0.0 {
                return Err(ConfigError::NegativeTarget { name, target });
            }
            let current = match (motion, reduced_mode) {
                (MotionPreference::Reduced, ReducedMotionMode::JumpToTarget) => target,
                (MotionPreference::Reduced, ReducedMotionMode::PinAtZero) => 0.0,
                (MotionPreference::Full, _) => 0.0,
            };
            counters.push(Counter {
                name,
                current,
                target,
                increment: target / steps,
            });
        }

        let settled = motion == MotionPreference::Reduced
            || counters.iter().all(|c| c.current >= c.target);
        Ok(Self {
            counters,
            state: if settled { RunState::Settled } else { RunState::Running },
            duration_ms,
            interval_ms,
            ticks: 0,
        })
    }

    /// Advance every unfinished counter by one step. No-op once settled.
    ///
    /// The last in-bound tick assigns targets outright: summed increments
    /// can land a hair below the target, and the run must not need a tick
    /// beyond `max_ticks()` to close that gap.
    pub fn tick(&mut self) -> RunState {
        if self.state == RunState::Settled {
            return self.state;
        }
        self.ticks += 1;
        let last_tick = self.ticks >= self.max_ticks();
        let mut done = true;
        for counter in &mut self.counters {
            if counter.current < counter.target {
                counter.current = if last_tick {
                    counter.target
                } else {
                    (counter.current + counter.increment).min(counter.target)
                };
            }
            if counter.current < counter.target {
                done = false;
            }
        }
        if done {
            self.state = RunState::Settled;
        }
        self.state
    }

    pub fn value(&self, name: &str) -> Option<f64> {
        self.counters.iter().find(|c| c.name == name).map(|c| c.current)
    }

    pub fn values(&self) -> impl Iterator<Item = (&str, f64)> {
        self.counters.iter().map(|c| (c.name.as_str(), c.current))
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_settled(&self) -> bool {
        self.state == RunState::Settled
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Upper bound on the number of ticks before the run settles.
    pub fn max_ticks(&self) -> u32 {
        self.duration_ms.div_ceil(self.interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn production_targets() -> Vec<(&'static str, f64)> {
        vec![("cash", 500.0), ("leads", 3000.0), ("deals", 800.0), ("years", 5.0)]
    }

    #[test]
    fn values_are_monotone_and_bounded() {
        let mut run = CounterRun::new(production_targets(), 2000, 50).unwrap();
        let mut previous: Vec<f64> = run.values().map(|(_, v)| v).collect();
        for _ in 0..run.max_ticks() {
            run.tick();
            let next: Vec<f64> = run.values().map(|(_, v)| v).collect();
            for (before, after) in previous.iter().zip(&next) {
                assert!(after >= before, "counter went backwards: {before} -> {after}");
            }
            for ((_, value), (_, target)) in run.values().zip(production_targets()) {
                assert!(value <= target, "counter overshot target: {value} > {target}");
            }
            previous = next;
        }
    }

    #[test]
    fn settles_within_the_tick_bound_at_exact_targets() {
        let mut run = CounterRun::new(vec![("subs", 123.0), ("views", 7.0)], 900, 40).unwrap();
        let bound = run.max_ticks();
        let mut ticks = 0;
        while !run.is_settled() {
            run.tick();
            ticks += 1;
            assert!(ticks <= bound, "did not settle within {bound} ticks");
        }
        assert_eq!(run.value("subs"), Some(123.0));
        assert_eq!(run.value("views"), Some(7.0));
    }

    #[test]
    fn awkward_divisors_still_settle_within_the_bound() {
        // increment sums drift just below the target here; the final
        // in-bound tick has to close the gap itself
        let mut run = CounterRun::new(vec![("leads", 29975.0)], 1058, 46).unwrap();
        let bound = run.max_ticks();
        let mut ticks = 0;
        while !run.is_settled() {
            run.tick();
            ticks += 1;
            assert!(ticks <= bound, "needed more than {bound} ticks to settle");
        }
        assert_eq!(run.value("leads"), Some(29975.0));
    }

    #[test]
    fn scenario_forty_ticks_to_exact_targets() {
        let mut run = CounterRun::new(production_targets(), 2000, 50).unwrap();
        assert_eq!(run.max_ticks(), 40);
        for _ in 0..40 {
            run.tick();
        }
        assert!(run.is_settled());
        for (name, target) in production_targets() {
            assert_eq!(run.value(name), Some(target));
        }
    }

    #[test]
    fn settle_is_terminal_and_idempotent() {
        let mut run = CounterRun::new(vec![("cash", 10.0)], 100, 50).unwrap();
        while !run.is_settled() {
            run.tick();
        }
        let snapshot = run.clone();
        for _ in 0..5 {
            assert_eq!(run.tick(), RunState::Settled);
        }
        assert_eq!(run, snapshot);
    }

    #[test]
    fn zero_duration_is_rejected() {
        let err = CounterRun::new(vec![("cash", 10.0)], 0, 50).unwrap_err();
        assert_eq!(err, ConfigError::InvalidDuration { duration_ms: 0 });
    }

    #[test]
    fn zero_interval_is_rejected() {
        let err = CounterRun::new(vec![("cash", 10.0)], 2000, 0).unwrap_err();
        assert_eq!(err, ConfigError::InvalidInterval { interval_ms: 0 });
    }

    #[test]
    fn negative_target_is_rejected() {
        let err = CounterRun::new(vec![("cash", -1.0)], 2000, 50).unwrap_err();
        assert!(matches!(err, ConfigError::NegativeTarget { .. }));
    }

    #[test]
    fn zero_target_counter_is_born_settled() {
        let mut run = CounterRun::new(vec![("none", 0.0)], 2000, 50).unwrap();
        assert!(run.is_settled());
        assert_eq!(run.value("none"), Some(0.0));
        run.tick();
        assert_eq!(run.value("none"), Some(0.0));
    }

    #[test]
    fn interval_longer_than_duration_settles_in_one_tick() {
        let mut run = CounterRun::new(vec![("cash", 500.0)], 100, 300).unwrap();
        assert_eq!(run.max_ticks(), 1);
        run.tick();
        assert!(run.is_settled());
        assert_eq!(run.value("cash"), Some(500.0));
    }

    #[test]
    fn reduced_motion_jumps_to_target_without_ticking() {
        let run = CounterRun::with_motion(
            production_targets(),
            2000,
            50,
            MotionPreference::Reduced,
            ReducedMotionMode::JumpToTarget,
        )
        .unwrap();
        assert!(run.is_settled());
        for (name, target) in production_targets() {
            assert_eq!(run.value(name), Some(target));
        }
    }

    #[test]
    fn reduced_motion_can_pin_at_zero() {
        let mut run = CounterRun::with_motion(
            vec![("cash", 500.0)],
            2000,
            50,
            MotionPreference::Reduced,
            ReducedMotionMode::PinAtZero,
        )
        .unwrap();
        assert!(run.is_settled());
        run.tick();
        assert_eq!(run.value("cash"), Some(0.0));
    }

    #[test]
    fn unknown_counter_name_reads_as_none() {
        let run = CounterRun::new(vec![("cash", 500.0)], 2000, 50).unwrap();
        assert_eq!(run.value("revenue"), None);
    }
}
