use serde::{Deserialize, Serialize};

/// The semantic docking status of the secondary window. `Dragging` is
/// transient: pointer-up always resolves it to `Attached` or `Detached`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DockState {
    Attached,
    Detached,
    Dragging,
}

impl Default for DockState {
    fn default() -> Self {
        Self::Detached
    }
}
