// src/animation/ticker.rs
//
// Fixed-period tick source, fed by the frame clock.
//
// The app update loop hands it wall-clock deltas; while active it
// converts them into whole animation ticks at a fixed period. start
// and stop are idempotent, and nothing ticks after stop.

pub struct Ticker {
    period: f32,
    active: bool,
    carry: f32,
}

impl Ticker {
    pub fn new(period: f32) -> Self {
        assert!(period > 0.0, "tick period must be positive");
        Self {
            period,
            active: false,
            carry: 0.0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn period(&self) -> f32 {
        self.period
    }

    /// Begin ticking. No-op when already active, so a second start
    /// never produces a second tick stream.
    pub fn start(&mut self) {
        if !self.active {
            self.active = true;
            self.carry = 0.0;
        }
    }

    /// Stop ticking and drop any partial period. No-op when inactive.
    pub fn stop(&mut self) {
        if self.active {
            self.active = false;
            self.carry = 0.0;
        }
    }

    /// Feed one frame delta; returns how many whole periods elapsed.
    pub fn tick(&mut self, dt: f32) -> u32 {
        if !self.active {
            return 0;
        }
        self.carry += dt;
        let ticks = (self.carry / self.period).floor() as u32;
        self.carry -= ticks as f32 * self.period;
        ticks
    }
}
