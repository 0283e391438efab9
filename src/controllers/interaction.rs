// src/controllers/interaction.rs
//
// Tap-to-animate controller.
//
// Two states: idle and animating. A tap while idle starts the current
// node's run and spins up the ticker; a tap mid-traversal lands on the
// in-flight guard inside ProgressState and changes nothing. The ticker
// is stopped only once the cursor reports the whole sweep complete, so
// a single tap carries the chain forward to the far end and back.

use crate::animation::{ChainCursor, CursorEvent, Ticker};

pub struct InteractionController {
    ticker: Ticker,
    step: f32,
}

impl InteractionController {
    pub fn new(tick_period: f32, step: f32) -> Self {
        Self {
            ticker: Ticker::new(tick_period),
            step,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.ticker.is_active()
    }

    /// The single external trigger.
    pub fn handle_tap(&mut self, cursor: &mut ChainCursor) {
        if cursor.start_updating() {
            self.ticker.start();
        }
    }

    /// Drive the cursor with this frame's clock delta.
    pub fn update(&mut self, cursor: &mut ChainCursor, dt: f32) {
        for _ in 0..self.ticker.tick(dt) {
            if cursor.update(self.step) == CursorEvent::Completed {
                self.ticker.stop();
                break;
            }
        }
    }
}
