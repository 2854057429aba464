use crate::models::{Handle, Rect, WindowHandle};
use serde::{Deserialize, Serialize};

/// These are responses from the docking core.
/// The display server should act on these actions.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum DisplayAction<H: Handle> {
    /// Apply a program-initiated frame change.
    #[serde(bound = "")]
    SetWindowFrame(WindowHandle<H>, Rect),

    /// Establish (`Some`) or remove (`None`) the parent-child link. When
    /// established the child is ordered above its parent in z-order.
    #[serde(bound = "")]
    SetParent(WindowHandle<H>, Option<WindowHandle<H>>),

    #[serde(bound = "")]
    MiniaturizeWindow(WindowHandle<H>),

    #[serde(bound = "")]
    DeminiaturizeWindow(WindowHandle<H>),

    /// Nicely ask a window if it would please close at its convenience.
    #[serde(bound = "")]
    CloseWindow(WindowHandle<H>),
}
