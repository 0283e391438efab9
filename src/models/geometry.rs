// src/models/geometry.rs
// Shape commands emitted by the blocker planner
//
// Coordinates are in surface space: origin at the bottom-left corner,
// y growing downward, so everything on screen sits at y <= 0. The
// draw module converts to nannou's centered, y-up frame.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeCommand {
    /// Axis-aligned filled rectangle; (x, y) is the top-left corner.
    FillRect { x: f32, y: f32, w: f32, h: f32 },
    /// Round-capped stroked segment.
    StrokeLine { x1: f32, y1: f32, x2: f32, y2: f32 },
}

impl ShapeCommand {
    pub fn is_line(&self) -> bool {
        matches!(self, ShapeCommand::StrokeLine { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_kinds() {
        let rect = ShapeCommand::FillRect {
            x: 0.0,
            y: -10.0,
            w: 10.0,
            h: 10.0,
        };
        let line = ShapeCommand::StrokeLine {
            x1: 0.0,
            y1: 0.0,
            x2: 5.0,
            y2: -5.0,
        };

        assert!(!rect.is_line());
        assert!(line.is_line());
    }
}
