//! Pure snap geometry. No shared state, deterministic for the same inputs.

use crate::config::SnapConfig;
use crate::models::{Rect, Side};

/// Gap left between the two windows when docked.
pub const SNAP_GAP: i32 = 1;

/// A qualifying snap: the frame the dragged window should take and the edge
/// it lands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SnapTarget {
    pub frame: Rect,
    pub side: Side,
}

#[must_use]
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    a.intersects(b)
}

/// True unless `a` is entirely above or entirely below `b`.
#[must_use]
pub const fn vertical_overlap(a: &Rect, b: &Rect) -> bool {
    !(a.max_y() < b.y || a.y > b.max_y())
}

/// The capture radius for the current geometry: larger once the frames
/// overlap, so un-snapping is harder than snapping.
#[must_use]
pub fn effective_snap_distance(a: &Rect, b: &Rect, config: &SnapConfig) -> i32 {
    if rects_overlap(a, b) {
        config.inside_distance
    } else {
        config.outside_distance
    }
}

/// Decide whether `dragged` is close enough to either vertical edge of
/// `reference` to snap, and where it would land. Distances are measured
/// trailing-edge-to-leading-edge, inclusive of the threshold; the left edge
/// wins a tie.
#[must_use]
pub fn snap_target(dragged: &Rect, reference: &Rect, config: &SnapConfig) -> Option<SnapTarget> {
    if !vertical_overlap(dragged, reference) {
        return None;
    }
    let distance = effective_snap_distance(dragged, reference, config);
    let to_left_edge = (dragged.max_x() - reference.x).abs();
    let to_right_edge = (dragged.x - reference.max_x()).abs();

    let side = if to_left_edge <= distance {
        Side::Left
    } else if to_right_edge <= distance {
        Side::Right
    } else {
        return None;
    };
    Some(SnapTarget {
        frame: docked_frame(dragged.w, reference, side, None),
        side,
    })
}

/// The frame a secondary window of `width` takes when docked to `side` of
/// `reference`: flush against the edge with a [`SNAP_GAP`] gap, same y,
/// same height. The x origin is clamped into the screen's visible frame
/// when one is known.
#[must_use]
pub fn docked_frame(width: i32, reference: &Rect, side: Side, screen: Option<&Rect>) -> Rect {
    let x = match side {
        Side::Left => reference.x - width - SNAP_GAP,
        Side::Right => reference.max_x() + SNAP_GAP,
    };
    let x = match screen {
        Some(visible) => x.clamp(visible.x, (visible.max_x() - width).max(visible.x)),
        None => x,
    };
    Rect::new(x, reference.y, width, reference.h)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SnapConfig {
        SnapConfig {
            outside_distance: 70,
            inside_distance: 100,
            drag_threshold: 5,
        }
    }

    const REFERENCE: Rect = Rect::new(100, 100, 400, 600);

    #[test]
    fn effective_distance_uses_inside_value_iff_rects_overlap() {
        let overlapping = Rect::new(450, 100, 120, 600);
        let outside = Rect::new(505, 100, 120, 600);
        assert_eq!(
            effective_snap_distance(&overlapping, &REFERENCE, &config()),
            100
        );
        assert_eq!(effective_snap_distance(&outside, &REFERENCE, &config()), 70);
    }

    #[test]
    fn vertical_overlap_rejects_entirely_above_or_below() {
        let above = Rect::new(100, 0, 120, 50);
        let below = Rect::new(100, 800, 120, 50);
        let beside = Rect::new(700, 300, 120, 50);
        assert!(!vertical_overlap(&above, &REFERENCE));
        assert!(!vertical_overlap(&below, &REFERENCE));
        assert!(vertical_overlap(&beside, &REFERENCE));
    }

    #[test]
    fn snap_detected_within_outside_distance_of_right_edge() {
        // Scenario A geometry: dragged to x=498, distance to the right edge
        // of the reference is 2.
        let dragged = Rect::new(498, 100, 120, 600);
        let target = snap_target(&dragged, &REFERENCE, &config()).expect("should snap");
        assert_eq!(target.side, Side::Right);
        assert_eq!(target.frame, Rect::new(501, 100, 120, 600));
    }

    #[test]
    fn snap_not_detected_beyond_both_thresholds() {
        // Scenario B geometry: both edge distances exceed the applicable
        // threshold, overlapping or not.
        let dragged = Rect::new(300, 100, 120, 600);
        assert!(rects_overlap(&dragged, &REFERENCE));
        assert!(snap_target(&dragged, &REFERENCE, &config()).is_none());

        let dragged_far = Rect::new(900, 100, 120, 600);
        assert!(!rects_overlap(&dragged_far, &REFERENCE));
        assert!(snap_target(&dragged_far, &REFERENCE, &config()).is_none());
    }

    #[test]
    fn snap_threshold_is_inclusive() {
        // Trailing edge exactly outside_distance away from the left edge.
        let at_threshold = Rect::new(REFERENCE.x - 70 - 120, 100, 120, 600);
        let past_threshold = Rect::new(REFERENCE.x - 71 - 120, 100, 120, 600);
        assert!(snap_target(&at_threshold, &REFERENCE, &config()).is_some());
        assert!(snap_target(&past_threshold, &REFERENCE, &config()).is_none());
    }

    #[test]
    fn snap_to_left_edge_lands_flush_with_gap() {
        let dragged = Rect::new(REFERENCE.x - 140, 150, 120, 300);
        let target = snap_target(&dragged, &REFERENCE, &config()).expect("should snap");
        assert_eq!(target.side, Side::Left);
        assert_eq!(target.frame, Rect::new(100 - 120 - 1, 100, 120, 600));
    }

    #[test]
    fn snap_requires_vertical_overlap() {
        let dragged = Rect::new(498, 800, 120, 100);
        assert!(snap_target(&dragged, &REFERENCE, &config()).is_none());
    }

    #[test]
    fn overlapping_frames_keep_the_larger_capture_radius() {
        // 80 units past the right edge: outside the 70 radius, but this
        // window still overlaps the reference, so 100 applies.
        let dragged = Rect::new(REFERENCE.max_x() - 90, 100, 170, 600);
        let target = snap_target(&dragged, &REFERENCE, &config()).expect("should snap");
        assert_eq!(target.side, Side::Right);
    }

    #[test]
    fn docked_frame_clamps_to_visible_screen() {
        let screen = Rect::new(0, 0, 560, 900);
        let frame = docked_frame(120, &REFERENCE, Side::Right, Some(&screen));
        assert_eq!(frame.x, 440, "clamped so the window stays on screen");
        let unclamped = docked_frame(120, &REFERENCE, Side::Right, None);
        assert_eq!(unclamped.x, 501);
    }
}
