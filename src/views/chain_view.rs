// src/views/chain_view.rs
//
// The ChainView is the main updating entity in the visualisation.
//
// It owns the chain cursor and the interaction controller, holds the
// style state (background, palette), and is the interface between the
// window callbacks and the animation core. One node is on screen at a
// time: the cursor's current one.

use nannou::prelude::*;

use crate::{
    animation::ChainCursor,
    config::Config,
    controllers::InteractionController,
    draw::{blocker_draw, DrawParams},
};

pub struct ChainView {
    cursor: ChainCursor,
    controller: InteractionController,
    palette: Vec<Rgb<f32>>,
    background: Rgb<f32>,
}

impl ChainView {
    pub fn new(config: &Config) -> Self {
        let palette: Vec<Rgb<f32>> = config
            .style
            .palette
            .iter()
            .map(|&[r, g, b]| rgb(r, g, b))
            .collect();
        assert!(!palette.is_empty(), "palette must have at least one color");

        Self {
            cursor: ChainCursor::new(palette.len()),
            controller: InteractionController::new(
                config.animation.tick_period,
                config.animation.step,
            ),
            palette,
            background: {
                let [r, g, b] = config.style.background;
                rgb(r, g, b)
            },
        }
    }

    pub fn handle_tap(&mut self) {
        self.controller.handle_tap(&mut self.cursor);
    }

    pub fn update(&mut self, dt: f32) {
        self.controller.update(&mut self.cursor, dt);
    }

    pub fn is_animating(&self) -> bool {
        self.controller.is_animating()
    }

    pub fn draw(&self, draw: &Draw, rect: Rect) {
        draw.background().color(self.background);

        let (w, h) = (rect.w(), rect.h());
        let node = self.cursor.current_node();
        let params = DrawParams {
            color: self.palette[node.index()],
            stroke_weight: w.min(h) / blocker_draw::STROKE_FACTOR,
        };

        let commands = blocker_draw::plan_tri_blocker(node.scale(), w, h);
        blocker_draw::draw_commands(draw, &commands, &params, w, h);
    }
}
