use serde::{Deserialize, Serialize};

/// The raw pointer-gesture state. Orthogonal to [`DockState`]: the mode
/// tracks what the pointer is doing, the dock state records the semantic
/// outcome.
///
/// [`DockState`]: super::DockState
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Pointer down on the secondary window, not yet past the drag threshold.
    ReadyToDrag,
    Dragging,
    Normal,
}

impl Default for Mode {
    fn default() -> Self {
        Self::Normal
    }
}
