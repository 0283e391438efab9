// src/draw/blocker_draw.rs
//
// The tri-blocker figure: three blocks rising along the bottom edge,
// the middle block lifting to the top, and three guard lines growing
// out of the blocks. The run of one progress scalar is eased with a
// sine and split into those three stages.
//
// plan_tri_blocker is a pure function of (scale, w, h); everything
// screen-related happens in draw_commands.

use super::DrawParams;
use crate::models::ShapeCommand;

use nannou::lyon::tessellation::LineCap;
use nannou::prelude::*;

use std::f32::consts::PI;

/// Stages the eased scalar is split into.
pub const PARTS: usize = 3;
/// Block edge = min(w, h) / SIZE_FACTOR.
pub const SIZE_FACTOR: f32 = 4.0;
/// Stroke weight = min(w, h) / STROKE_FACTOR.
pub const STROKE_FACTOR: f32 = 90.0;

fn max_scale(scale: f32, i: usize, n: usize) -> f32 {
    (scale - i as f32 / n as f32).max(0.0)
}

/// Slice stage `i` out of `scale` and stretch it back to [0, 1].
fn divide_scale(scale: f32, i: usize, n: usize) -> f32 {
    max_scale(scale, i, n).min(1.0 / n as f32) * n as f32
}

fn sinify(scale: f32) -> f32 {
    (scale * PI).sin()
}

/// Plan the figure for one node at the given progress scale on a
/// w x h surface. Deterministic: no clocks, no randomness, no state.
pub fn plan_tri_blocker(scale: f32, w: f32, h: f32) -> Vec<ShapeCommand> {
    let sf = sinify(scale);
    let sf1 = divide_scale(sf, 0, PARTS);
    let sf2 = divide_scale(sf, 1, PARTS);
    let sf3 = divide_scale(sf, 2, PARTS);
    let size = w.min(h) / SIZE_FACTOR;

    let mut commands = Vec::with_capacity(6);

    // stage 1: blocks rise; stage 2: odd blocks lift toward the top
    for j in 0..3 {
        let x = (w / 2.0 - size / 2.0) * j as f32;
        let lift = -(h / 2.0 - size / 2.0) * (j % 2) as f32 * sf2;
        commands.push(ShapeCommand::FillRect {
            x,
            y: lift - size * sf1,
            w: size,
            h: size * sf1,
        });
    }

    // stage 3: guard lines grow out of the blocks
    if sf3 <= 0.0 {
        return commands;
    }
    let x_size = (w * 0.5 - size / 2.0) * sf3;
    let y_size = (h * 0.5 - size / 2.0) * sf3;
    commands.push(ShapeCommand::StrokeLine {
        x1: size / 2.0,
        y1: -size / 2.0,
        x2: size / 2.0 + x_size,
        y2: -size / 2.0 - y_size,
    });
    commands.push(ShapeCommand::StrokeLine {
        x1: w * 0.5,
        y1: -h * 0.5,
        x2: w * 0.5 + x_size,
        y2: -h * 0.5 + y_size,
    });
    commands.push(ShapeCommand::StrokeLine {
        x1: w - size / 2.0,
        y1: -size / 2.0,
        x2: w - size / 2.0 - (w - size) * sf3,
        y2: -size / 2.0,
    });

    commands
}

// Surface space (bottom-left origin, y down) to nannou space (center
// origin, y up)
fn surface_point(x: f32, y: f32, w: f32, h: f32) -> Point2 {
    pt2(x - w / 2.0, -y - h / 2.0)
}

pub fn draw_commands(draw: &Draw, commands: &[ShapeCommand], params: &DrawParams, w: f32, h: f32) {
    for command in commands {
        match *command {
            ShapeCommand::FillRect {
                x,
                y,
                w: rect_w,
                h: rect_h,
            } => {
                if rect_h <= 0.0 {
                    continue;
                }
                let center = surface_point(x + rect_w / 2.0, y + rect_h / 2.0, w, h);
                draw.rect()
                    .xy(center)
                    .w_h(rect_w, rect_h)
                    .color(params.color);
            }
            ShapeCommand::StrokeLine { x1, y1, x2, y2 } => {
                draw.line()
                    .points(surface_point(x1, y1, w, h), surface_point(x2, y2, w, h))
                    .color(params.color)
                    .stroke_weight(params.stroke_weight)
                    .caps(LineCap::Round);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: f32 = 800.0;
    const H: f32 = 600.0;

    #[test]
    fn test_divide_scale_slices_the_run() {
        assert_eq!(divide_scale(0.0, 0, 3), 0.0);
        // stage 0 saturates once the scalar passes 1/3
        assert!((divide_scale(1.0 / 6.0, 0, 3) - 0.5).abs() < 1e-6);
        assert!((divide_scale(0.5, 0, 3) - 1.0).abs() < 1e-6);
        // stage 1 is halfway at 1/2; stage 2 has not begun yet
        assert!((divide_scale(0.5, 1, 3) - 0.5).abs() < 1e-6);
        assert_eq!(divide_scale(0.5, 2, 3), 0.0);
        assert!((divide_scale(1.0, 2, 3) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_plan_is_deterministic() {
        for scale in [0.0, 0.1, 0.25, 0.5, 0.75, 1.0] {
            assert_eq!(
                plan_tri_blocker(scale, W, H),
                plan_tri_blocker(scale, W, H),
                "plan differs for scale {scale}"
            );
        }
    }

    #[test]
    fn test_rest_plan_is_degenerate() {
        // at rest (scale 0 or 1) the sine is 0: flat rects, no lines
        for scale in [0.0, 1.0] {
            let commands = plan_tri_blocker(scale, W, H);
            assert_eq!(commands.len(), 3);
            for command in &commands {
                match *command {
                    ShapeCommand::FillRect { h, .. } => assert!(h.abs() < 1e-6),
                    ShapeCommand::StrokeLine { .. } => panic!("line in rest plan"),
                }
            }
        }
    }

    #[test]
    fn test_midway_plan_has_blocks_and_lines() {
        // sin(pi/2) = 1: every stage fully deployed
        let commands = plan_tri_blocker(0.5, W, H);
        assert_eq!(commands.len(), 6);
        assert_eq!(commands.iter().filter(|c| c.is_line()).count(), 3);

        let size = W.min(H) / SIZE_FACTOR;
        // all three blocks at full height
        for command in commands.iter().take(3) {
            match *command {
                ShapeCommand::FillRect { h, .. } => assert!((h - size).abs() < 1e-3),
                _ => panic!("expected a rect"),
            }
        }
        // the middle block has lifted off the bottom edge
        match commands[1] {
            ShapeCommand::FillRect { y, .. } => {
                assert!((y - (-(H / 2.0 - size / 2.0) - size)).abs() < 1e-3)
            }
            _ => panic!("expected a rect"),
        }
    }

    #[test]
    fn test_plan_scales_with_surface() {
        let small = plan_tri_blocker(0.5, 400.0, 300.0);
        let large = plan_tri_blocker(0.5, 800.0, 600.0);
        assert_ne!(small, large);
    }
}
