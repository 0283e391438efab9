// src/animation/progress.rs
//
// The per-node progress scalar.
//
// A ProgressState travels one full unit per run, from its committed
// baseline to the opposite extreme, then parks there. The baseline is
// always 0 or 1 once settled, so a fresh start always animates away
// from the extreme it is resting at.

/// Outcome of one tick of progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEvent {
    Advancing,
    Settled,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProgressState {
    scale: f32,
    direction: f32,
    committed: f32,
}

impl ProgressState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn committed(&self) -> f32 {
        self.committed
    }

    pub fn is_resting(&self) -> bool {
        self.direction == 0.0
    }

    /// Advance by `step` in the current direction. Reports `Settled` on
    /// exactly the tick that crosses one full unit of travel; the scale
    /// is clamped to the new baseline on that tick so it never ends up
    /// more than one unit from the old one.
    pub fn update(&mut self, step: f32) -> StepEvent {
        self.scale += step * self.direction;
        if (self.scale - self.committed).abs() > 1.0 {
            self.scale = self.committed + self.direction;
            self.direction = 0.0;
            self.committed = self.scale;
            StepEvent::Settled
        } else {
            StepEvent::Advancing
        }
    }

    /// Begin a run away from the current baseline. Returns false and
    /// changes nothing when a run is already in flight.
    pub fn start_updating(&mut self) -> bool {
        if self.direction != 0.0 {
            return false;
        }
        // +1 from a baseline of 0, -1 from a baseline of 1
        self.direction = 1.0 - 2.0 * self.committed;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: f32 = 0.02;

    #[test]
    fn test_new_state_is_resting_at_zero() {
        let state = ProgressState::new();
        assert!(state.is_resting());
        assert_eq!(state.scale(), 0.0);
        assert_eq!(state.committed(), 0.0);
    }

    #[test]
    fn test_start_from_zero_goes_forward() {
        let mut state = ProgressState::new();
        assert!(state.start_updating());
        assert!(!state.is_resting());
        assert_eq!(state.update(STEP), StepEvent::Advancing);
        assert!(state.scale() > 0.0);
    }

    #[test]
    fn test_start_is_noop_while_in_flight() {
        let mut state = ProgressState::new();
        assert!(state.start_updating());
        state.update(STEP);
        let scale_before = state.scale();
        assert!(!state.start_updating());
        assert_eq!(state.scale(), scale_before);
    }

    #[test]
    fn test_monotonic_settlement() {
        let mut state = ProgressState::new();
        state.start_updating();

        let mut previous_travel = 0.0;
        let mut ticks = 0;
        loop {
            let event = state.update(STEP);
            ticks += 1;
            let travel = state.scale().abs();
            if event == StepEvent::Settled {
                break;
            }
            assert!(travel > previous_travel);
            previous_travel = travel;
            assert!(ticks < 100, "never settled");
        }

        // one unit of travel at 0.02 per tick, +/- one tick of float drift
        assert!((50..=52).contains(&ticks), "settled after {ticks} ticks");
        assert_eq!(state.scale(), 1.0);
        assert_eq!(state.committed(), 1.0);
        assert!(state.is_resting());
    }

    #[test]
    fn test_settle_never_overshoots_one_unit() {
        let mut state = ProgressState::new();
        state.start_updating();
        // An oversized step still clamps to the baseline plus one unit
        assert_eq!(state.update(7.5), StepEvent::Settled);
        assert_eq!(state.scale(), 1.0);
        assert_eq!(state.committed(), 1.0);
    }

    #[test]
    fn test_restart_from_one_goes_backward() {
        let mut state = ProgressState::new();
        state.start_updating();
        while state.update(STEP) != StepEvent::Settled {}
        assert_eq!(state.committed(), 1.0);

        assert!(state.start_updating());
        state.update(STEP);
        assert!(state.scale() < 1.0);

        while state.update(STEP) != StepEvent::Settled {}
        assert_eq!(state.scale(), 0.0);
        assert_eq!(state.committed(), 0.0);
        assert!(state.is_resting());
    }

    #[test]
    fn test_update_while_resting_stays_put() {
        let mut state = ProgressState::new();
        assert_eq!(state.update(STEP), StepEvent::Advancing);
        assert_eq!(state.scale(), 0.0);
    }
}
