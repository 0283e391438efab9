// src/draw/mod.rs
// Translation of blocker geometry to Nannou draw calls

pub mod blocker_draw;

pub use blocker_draw::{draw_commands, plan_tri_blocker};

use nannou::prelude::*;

#[derive(Debug, Clone)]
pub struct DrawParams {
    pub color: Rgb<f32>,
    pub stroke_weight: f32,
}

impl Default for DrawParams {
    fn default() -> Self {
        Self {
            color: rgb(0.1, 0.1, 0.1),
            stroke_weight: 5.0,
        }
    }
}
