//! Collision detection for the axis-aligned playfield
//!
//! The one geometric primitive the game needs: does a circle overlap an
//! axis-aligned rectangle, and which part of the rectangle did it strike.

use glam::Vec2;

/// Where a circle struck a rectangle, used to decide which velocity axis flips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Circle center falls within the rectangle's horizontal span
    TopOrBottom,
    /// Circle center falls within the rectangle's vertical span
    LeftOrRight,
    /// Circle overlaps near a corner
    Corner,
}

/// Classify the overlap between a circle and a centered rectangle.
///
/// Returns `None` when the two do not touch. The span tests run x-first, so
/// a circle centered exactly on the rectangle center reports `TopOrBottom`;
/// callers rely on that ordering for edge cases where both spans apply.
pub fn circle_rect(
    circle_pos: Vec2,
    circle_radius: f32,
    rect_pos: Vec2,
    rect_size: Vec2,
) -> Option<Region> {
    let dx = (circle_pos.x - rect_pos.x).abs();
    let dy = (circle_pos.y - rect_pos.y).abs();
    let half_w = rect_size.x / 2.0;
    let half_h = rect_size.y / 2.0;

    // Bounding boxes cannot overlap
    if dx > circle_radius + half_w || dy > circle_radius + half_h {
        return None;
    }

    if dx <= half_w {
        return Some(Region::TopOrBottom);
    }
    if dy <= half_h {
        return Some(Region::LeftOrRight);
    }

    // Remaining case: distance from circle center to the nearest corner
    let corner_dist_sq = (dx - half_w).powi(2) + (dy - half_h).powi(2);
    if corner_dist_sq <= circle_radius * circle_radius {
        Some(Region::Corner)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const RECT_POS: Vec2 = Vec2::new(50.0, 50.0);
    const RECT_SIZE: Vec2 = Vec2::new(40.0, 20.0);

    #[test]
    fn test_far_apart_misses() {
        let result = circle_rect(Vec2::new(200.0, 50.0), 5.0, RECT_POS, RECT_SIZE);
        assert_eq!(result, None);

        let result = circle_rect(Vec2::new(50.0, 200.0), 5.0, RECT_POS, RECT_SIZE);
        assert_eq!(result, None);
    }

    #[test]
    fn test_center_overlap_is_top_or_bottom() {
        // Both span tests apply; the x-span test wins
        let result = circle_rect(RECT_POS, 5.0, RECT_POS, RECT_SIZE);
        assert_eq!(result, Some(Region::TopOrBottom));
    }

    #[test]
    fn test_top_hit() {
        // Circle above the rect, center within the horizontal span
        let result = circle_rect(Vec2::new(55.0, 37.0), 5.0, RECT_POS, RECT_SIZE);
        assert_eq!(result, Some(Region::TopOrBottom));
    }

    #[test]
    fn test_side_hit_is_left_or_right() {
        // Circle to the right of the rect, center within the vertical span
        let result = circle_rect(Vec2::new(73.0, 50.0), 5.0, RECT_POS, RECT_SIZE);
        assert_eq!(result, Some(Region::LeftOrRight));
    }

    #[test]
    fn test_corner_hit_within_radius() {
        // dx=22 > half_w=20, dy=12 > half_h=10, corner distance sqrt(8) < r=5
        let result = circle_rect(Vec2::new(72.0, 62.0), 5.0, RECT_POS, RECT_SIZE);
        assert_eq!(result, Some(Region::Corner));
    }

    #[test]
    fn test_corner_miss_beyond_radius() {
        // Bounding boxes overlap but the corner distance sqrt(32) > r=5
        let result = circle_rect(Vec2::new(74.0, 64.0), 5.0, RECT_POS, RECT_SIZE);
        assert_eq!(result, None);
    }

    #[test]
    fn test_exact_corner_touch() {
        // Corner distance exactly equal to the radius still counts as a hit
        let result = circle_rect(Vec2::new(73.0, 64.0), 5.0, RECT_POS, RECT_SIZE);
        assert_eq!(result, Some(Region::Corner));
    }

    proptest! {
        #[test]
        fn prop_x_separated_never_collides(
            cx in -500.0f32..500.0,
            cy in -500.0f32..500.0,
            r in 0.1f32..50.0,
            w in 1.0f32..200.0,
            h in 1.0f32..200.0,
            extra in 0.01f32..100.0,
        ) {
            let rect_pos = Vec2::new(cx + r + w / 2.0 + extra, cy);
            let result = circle_rect(Vec2::new(cx, cy), r, rect_pos, Vec2::new(w, h));
            prop_assert_eq!(result, None);
        }

        #[test]
        fn prop_y_separated_never_collides(
            cx in -500.0f32..500.0,
            cy in -500.0f32..500.0,
            r in 0.1f32..50.0,
            w in 1.0f32..200.0,
            h in 1.0f32..200.0,
            extra in 0.01f32..100.0,
        ) {
            let rect_pos = Vec2::new(cx, cy + r + h / 2.0 + extra);
            let result = circle_rect(Vec2::new(cx, cy), r, rect_pos, Vec2::new(w, h));
            prop_assert_eq!(result, None);
        }

        #[test]
        fn prop_center_inside_horizontal_span_is_top_or_bottom(
            cx in -500.0f32..500.0,
            cy in -500.0f32..500.0,
            r in 0.1f32..50.0,
            w in 1.0f32..200.0,
            h in 1.0f32..200.0,
            // offset within the horizontal span, overlapping vertically
            fx in -0.99f32..0.99,
        ) {
            let rect_pos = Vec2::new(cx + fx * w / 2.0, cy);
            let result = circle_rect(Vec2::new(cx, cy), r, rect_pos, Vec2::new(w, h));
            prop_assert_eq!(result, Some(Region::TopOrBottom));
        }
    }
}
