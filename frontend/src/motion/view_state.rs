use std::rc::Rc;

use log::warn;
use yew::prelude::*;

use crate::error::MotionError;

/// Fraction of a section's area that has to be inside the viewport before it
/// counts as entered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold(f64);

impl Threshold {
    pub fn new(fraction: f64) -> Result<Self, MotionError> {
        if (0.0..=1.0).contains(&fraction) {
            Ok(Self(fraction))
        } else {
            Err(MotionError::ThresholdOutOfRange(fraction))
        }
    }

    /// Like `new`, but logs and saturates out-of-range values into [0, 1].
    /// NaN becomes 0.
    pub fn clamped(fraction: f64) -> Self {
        Self::new(fraction).unwrap_or_else(|err| {
            warn!("{}, clamping", err);
            if fraction.is_nan() {
                Self(0.0)
            } else {
                Self(fraction.clamp(0.0, 1.0))
            }
        })
    }

    pub fn fraction(self) -> f64 {
        self.0
    }

    /// A ratio of zero never crosses, so zero-area elements stay hidden even
    /// with a zero threshold.
    pub fn is_crossed_by(self, ratio: f64) -> bool {
        ratio > 0.0 && ratio >= self.0
    }
}

/// Ratio to feed the latch for one intersection entry. Targets with no area
/// count as not visible at all, whatever ratio the browser reports.
pub fn observed_ratio(ratio: f64, area: f64) -> f64 {
    if area > 0.0 {
        ratio
    } else {
        0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPhase {
    NotEntered,
    Entered,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewAction {
    /// Latest intersection ratio reported for the section root.
    Intersect(f64),
    /// Observation is unavailable; show the section right away.
    ForceVisible,
}

/// One-shot latch for a single section. `NotEntered -> Entered`, never back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionViewState {
    threshold: Threshold,
    phase: EntryPhase,
}

impl SectionViewState {
    pub fn new(threshold: Threshold) -> Self {
        Self {
            threshold,
            phase: EntryPhase::NotEntered,
        }
    }

    pub fn has_entered(&self) -> bool {
        self.phase == EntryPhase::Entered
    }

    /// Applies an action and returns the resulting state. Once entered the
    /// state is returned unchanged for every input.
    pub fn transition(self, action: ViewAction) -> Self {
        if self.has_entered() {
            return self;
        }
        let entered = match action {
            ViewAction::Intersect(ratio) => self.threshold.is_crossed_by(ratio),
            ViewAction::ForceVisible => true,
        };
        if entered {
            Self {
                phase: EntryPhase::Entered,
                ..self
            }
        } else {
            self
        }
    }
}

impl Reducible for SectionViewState {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).transition(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(threshold: f64, ratios: &[f64]) -> Vec<bool> {
        let mut state = SectionViewState::new(Threshold::new(threshold).unwrap());
        ratios
            .iter()
            .map(|ratio| {
                state = state.transition(ViewAction::Intersect(*ratio));
                state.has_entered()
            })
            .collect()
    }

    #[test]
    fn latches_at_first_crossing() {
        assert_eq!(
            run(0.2, &[0.0, 0.25, 0.1, 0.3]),
            vec![false, true, true, true]
        );
    }

    #[test]
    fn never_reverts_once_entered() {
        let ratios = [0.5, 0.0, 0.0, 0.01, 1.0, 0.0];
        let seen = run(0.3, &ratios);
        assert!(seen.iter().all(|entered| *entered));

        let mut state = SectionViewState::new(Threshold::clamped(0.9));
        state = state.transition(ViewAction::ForceVisible);
        for ratio in [0.0, 0.1, 0.5, f64::NAN] {
            state = state.transition(ViewAction::Intersect(ratio));
            assert!(state.has_entered());
        }
    }

    #[test]
    fn stays_hidden_below_threshold() {
        assert_eq!(run(0.3, &[0.1, 0.2, 0.29]), vec![false, false, false]);
    }

    #[test]
    fn zero_area_never_enters() {
        assert_eq!(run(0.0, &[0.0, 0.0]), vec![false, false]);
        assert_eq!(run(0.0, &[0.0, 0.001]), vec![false, true]);
    }

    #[test]
    fn zero_area_reported_as_fully_visible_stays_hidden() {
        // browsers report intersectionRatio 1.0 for an intersecting empty box
        assert_eq!(observed_ratio(1.0, 0.0), 0.0);
        assert_eq!(observed_ratio(1.0, f64::NAN), 0.0);
        assert_eq!(observed_ratio(0.4, 1200.0), 0.4);

        let mut state = SectionViewState::new(Threshold::clamped(0.0));
        for _ in 0..3 {
            state = state.transition(ViewAction::Intersect(observed_ratio(1.0, 0.0)));
        }
        assert!(!state.has_entered());
        state = state.transition(ViewAction::Intersect(observed_ratio(1.0, 64.0)));
        assert!(state.has_entered());
    }

    #[test]
    fn exact_threshold_counts_as_crossed() {
        assert_eq!(run(0.2, &[0.2]), vec![true]);
    }

    #[test]
    fn threshold_validation() {
        assert!(Threshold::new(0.0).is_ok());
        assert!(Threshold::new(1.0).is_ok());
        assert_eq!(
            Threshold::new(1.5),
            Err(MotionError::ThresholdOutOfRange(1.5))
        );
        assert!(Threshold::new(-0.1).is_err());
        assert!(Threshold::new(f64::NAN).is_err());
        assert_eq!(Threshold::clamped(2.0).fraction(), 1.0);
        assert_eq!(Threshold::clamped(f64::NAN).fraction(), 0.0);
    }

    #[test]
    fn reducer_keeps_identity_when_nothing_changes() {
        let state = Rc::new(SectionViewState::new(Threshold::clamped(0.5)));
        let same = state.clone().reduce(ViewAction::Intersect(0.1));
        assert!(Rc::ptr_eq(&state, &same));

        let entered = same.reduce(ViewAction::Intersect(0.6));
        assert!(entered.has_entered());
        let frozen = entered.clone().reduce(ViewAction::Intersect(0.0));
        assert!(Rc::ptr_eq(&entered, &frozen));
    }
}
