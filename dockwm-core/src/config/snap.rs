use serde::{Deserialize, Serialize};

/// Snap proximity thresholds. Immutable at runtime.
///
/// `inside_distance` applies once the two frames overlap: the capture radius
/// grows so an attached window does not oscillate in and out of snap range
/// right at the edge.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SnapConfig {
    pub outside_distance: i32,
    pub inside_distance: i32,
    /// How far the pointer must travel before a press becomes a drag.
    pub drag_threshold: i32,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            outside_distance: 70,
            inside_distance: 100,
            drag_threshold: 5,
        }
    }
}
