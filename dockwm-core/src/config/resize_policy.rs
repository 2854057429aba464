use serde::{Deserialize, Serialize};

/// How the secondary window follows a primary-window resize. A user-facing
/// toggle that affects only the visual smoothness of that one transition.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResizePolicy {
    /// Short linear animation to the new docked frame.
    Animated,
    /// Set the new frame immediately.
    Direct,
}

impl Default for ResizePolicy {
    fn default() -> Self {
        Self::Animated
    }
}
