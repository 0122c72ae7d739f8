use crate::{
    model::DetectedHand,
    render::{Canvas, Color, Point},
    topology::{HAND_CONNECTIONS, LABELED_LANDMARKS, landmarks::WRIST},
};

use tracing::trace;

/// Visual parameters of the skeleton overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkeletonStyle {
    /// Bone and joint color.
    pub color: Color,
    /// Joint label color.
    pub label_color: Color,
    /// Bone stroke width in pixels.
    pub line_width: f32,
    /// Joint marker radius in pixels.
    pub joint_radius: f32,
    /// Wrist marker radius in pixels.
    pub wrist_radius: f32,
    /// Label offset from its joint, (right, up) in pixels.
    pub label_offset: (f32, f32),
}

impl Default for SkeletonStyle {
    fn default() -> Self {
        Self {
            color: Color::GREEN,
            label_color: Color::WHITE,
            line_width: 2.0,
            joint_radius: 4.0,
            wrist_radius: 6.0,
            label_offset: (8.0, 8.0),
        }
    }
}

/// Draws hand skeletons onto a [`Canvas`]. Holds no per-frame state.
#[derive(Debug, Clone, Default)]
pub struct HandRenderer {
    style: SkeletonStyle,
}

impl HandRenderer {
    /// Create a renderer with the given style.
    pub fn new(style: SkeletonStyle) -> Self {
        Self { style }
    }

    /// Active style.
    pub fn style(&self) -> &SkeletonStyle {
        &self.style
    }

    /// Clear the canvas and draw every hand. Returns the number of hands drawn.
    pub fn render(&self, canvas: &mut dyn Canvas, hands: &[DetectedHand]) -> usize {
        canvas.clear();
        hands
            .iter()
            .filter(|hand| self.draw_hand(canvas, hand))
            .count()
    }

    /// Draw a single hand. Returns `false` without drawing anything when
    /// either landmark set is incomplete.
    pub fn draw_hand(&self, canvas: &mut dyn Canvas, hand: &DetectedHand) -> bool {
        if !hand.is_complete() {
            trace!(
                landmark_count = hand.landmarks.len(),
                world_landmark_count = hand.world_landmarks.len(),
                "Skipping hand with incomplete landmarks"
            );
            return false;
        }

        let (width, height) = (canvas.width(), canvas.height());
        let points: Vec<Point> = hand
            .landmarks
            .iter()
            .map(|lm| {
                let (x, y) = lm.to_pixels(width, height);
                Point::new(x, y)
            })
            .collect();

        for &(start, end) in HAND_CONNECTIONS.iter() {
            canvas.stroke_line(
                points[start],
                points[end],
                self.style.color,
                self.style.line_width,
            );
        }

        let (dx, dy) = self.style.label_offset;
        for (idx, point) in points.iter().enumerate() {
            let radius = if idx == WRIST {
                self.style.wrist_radius
            } else {
                self.style.joint_radius
            };
            canvas.fill_circle(*point, radius, self.style.color);

            if LABELED_LANDMARKS.contains(&idx) {
                canvas.fill_text(
                    &idx.to_string(),
                    Point::new(point.x + dx, point.y - dy),
                    self.style.label_color,
                );
            }
        }

        true
    }
}
