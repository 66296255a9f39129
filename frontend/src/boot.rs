//! Boot sequence: the main view stays unmounted until the wall-clock gate
//! opens. The loading screen's progress bar runs alongside it and is purely
//! cosmetic; it never decides when the gate opens.

use std::rc::Rc;

use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootPhase {
    Booting,
    Ready,
}

/// Wall-clock gate. `Booting -> Ready` once `ready_after_ms` has elapsed;
/// `Ready` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootGate {
    ready_after_ms: u32,
    phase: BootPhase,
}

impl BootGate {
    pub fn new(ready_after_ms: u32) -> Self {
        Self {
            ready_after_ms,
            phase: BootPhase::Booting,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.phase == BootPhase::Ready
    }

    pub fn ready_after_ms(&self) -> u32 {
        self.ready_after_ms
    }

    /// Feeds the time elapsed since boot. Earlier timestamps after `Ready`
    /// change nothing.
    pub fn advance(&mut self, elapsed_ms: u32) -> BootPhase {
        if self.phase == BootPhase::Booting && elapsed_ms >= self.ready_after_ms {
            self.phase = BootPhase::Ready;
        }
        self.phase
    }

    /// The authoritative timer fired.
    pub fn open(&mut self) -> BootPhase {
        self.advance(self.ready_after_ms)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Advanced,
    /// This tick reached 100; the caller should stop its interval.
    Completed,
    /// Already at 100.
    Idle,
}

/// Loading-bar value in [0, 100]. Never decreases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadingProgress {
    value: f64,
    max_step: f64,
}

impl LoadingProgress {
    pub const COMPLETE: f64 = 100.0;

    pub fn new(max_step: f64) -> Self {
        Self {
            value: 0.0,
            max_step: max_step.max(0.0),
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_complete(&self) -> bool {
        self.value >= Self::COMPLETE
    }

    /// Advances by `unit * max_step`, where `unit` comes from `random` and is
    /// expected in [0, 1). Out-of-range or NaN samples are clamped so a bad
    /// source can neither shrink nor overshoot the bar.
    pub fn tick<R>(&mut self, mut random: R) -> Tick
    where
        R: FnMut() -> f64,
    {
        if self.is_complete() {
            return Tick::Idle;
        }
        let unit = random();
        let unit = if unit.is_nan() { 0.0 } else { unit.clamp(0.0, 1.0) };
        self.value = (self.value + unit * self.max_step).min(Self::COMPLETE);
        if self.is_complete() {
            Tick::Completed
        } else {
            Tick::Advanced
        }
    }

    pub fn percent(&self) -> String {
        format!("{:.1}%", self.value)
    }
}

/// Each action is one random sample in [0, 1) for the next tick.
impl Reducible for LoadingProgress {
    type Action = f64;

    fn reduce(self: Rc<Self>, sample: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match next.tick(|| sample) {
            Tick::Idle => self,
            Tick::Advanced | Tick::Completed => Rc::new(next),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Small deterministic LCG standing in for `Math.random`.
    fn lcg(seed: u64) -> impl FnMut() -> f64 {
        let mut state = seed;
        move || {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (state >> 11) as f64 / (1u64 << 53) as f64
        }
    }

    #[test]
    fn boot_scenario() {
        let mut gate = BootGate::new(2_500);
        let phases: Vec<BootPhase> = [0, 1_000, 2_500, 3_000]
            .iter()
            .map(|ms| gate.advance(*ms))
            .collect();
        assert_eq!(
            phases,
            vec![
                BootPhase::Booting,
                BootPhase::Booting,
                BootPhase::Ready,
                BootPhase::Ready
            ]
        );
    }

    #[test]
    fn ready_is_terminal() {
        let mut gate = BootGate::new(2_500);
        assert_eq!(gate.open(), BootPhase::Ready);
        for ms in [0, 10, 2_499, 0, u32::MAX] {
            assert_eq!(gate.advance(ms), BootPhase::Ready);
        }
        assert!(gate.is_ready());
    }

    #[test]
    fn progress_is_monotonic_and_bounded() {
        for seed in 0..50 {
            let mut progress = LoadingProgress::new(15.0);
            let mut random = lcg(seed);
            let mut previous = progress.value();
            let mut completions = 0;
            for _ in 0..200 {
                if progress.tick(&mut random) == Tick::Completed {
                    completions += 1;
                }
                assert!(progress.value() >= previous);
                assert!(progress.value() <= LoadingProgress::COMPLETE);
                previous = progress.value();
            }
            assert!(completions <= 1);
        }
    }

    #[test]
    fn completes_exactly_once_then_idles() {
        let mut progress = LoadingProgress::new(15.0);
        let mut outcomes = Vec::new();
        for _ in 0..10 {
            outcomes.push(progress.tick(|| 0.99));
        }
        // 0.99 * 15 = 14.85 per tick, 100 on the seventh
        assert_eq!(outcomes[..6], [Tick::Advanced; 6]);
        assert_eq!(outcomes[6], Tick::Completed);
        assert!(outcomes[7..].iter().all(|t| *t == Tick::Idle));
        assert_eq!(progress.value(), 100.0);
        assert_eq!(progress.percent(), "100.0%");
    }

    #[test]
    fn reducer_stops_changing_at_complete() {
        let mut state = Rc::new(LoadingProgress::new(15.0));
        for _ in 0..7 {
            state = state.reduce(0.99);
        }
        assert!(state.is_complete());
        let frozen = state.clone().reduce(0.5);
        assert!(Rc::ptr_eq(&state, &frozen));
    }

    #[test]
    fn hostile_random_source_is_clamped() {
        let mut progress = LoadingProgress::new(15.0);
        progress.tick(|| -5.0);
        assert_eq!(progress.value(), 0.0);
        progress.tick(|| f64::NAN);
        assert_eq!(progress.value(), 0.0);
        progress.tick(|| 40.0);
        assert_eq!(progress.value(), 15.0);
    }
}
