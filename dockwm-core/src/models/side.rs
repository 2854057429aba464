use serde::{Deserialize, Serialize};

/// Which edge of the primary window the secondary window docks to.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Default for Side {
    fn default() -> Self {
        Self::Right
    }
}
