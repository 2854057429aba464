//! Tracked window information.
#![allow(clippy::module_name_repetitions)]

use std::fmt::Debug;

use crate::models::Rect;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A trait which backend specific window handles need to implement.
pub trait Handle:
    Serialize + DeserializeOwned + Debug + Clone + Copy + PartialEq + Eq + Default + Send + 'static
{
}

/// A backend-agnostic handle to a window used to identify it.
///
/// # Serde
///
/// Using generics here with serde derive macros causes some wierd behaviour
/// with the compiler, so as suggested by [this `serde` issue][serde-issue],
/// just adding `#[serde(bound = "")]` everywhere the generic is declared
/// fixes the bug.
///
/// [serde-issue]: https://github.com/serde-rs/serde/issues/1296
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowHandle<H>(#[serde(bound = "")] pub H)
where
    H: Handle;

/// Handle for testing purposes.
pub type MockHandle = i32;
impl Handle for MockHandle {}

/// Which of the two managed windows this is.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowRole {
    /// The main application window the overlay docks to.
    Primary,
    /// The debug overlay window being managed.
    Secondary,
}

/// The core's view of one OS window: last-known frame plus the parent-link
/// bookkeeping. The frame here is authoritative for the core; the display
/// server renders it and echoes OS-side changes back as events.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Window<H: Handle> {
    #[serde(bound = "")]
    pub handle: WindowHandle<H>,
    pub role: WindowRole,
    pub frame: Rect,
    #[serde(bound = "")]
    pub parent: Option<WindowHandle<H>>,
    pub level: i32,
    pub miniaturized: bool,
}

impl<H: Handle> Window<H> {
    #[must_use]
    pub fn new(handle: WindowHandle<H>, role: WindowRole, frame: Rect) -> Self {
        Self {
            handle,
            role,
            frame,
            parent: None,
            level: 0,
            miniaturized: false,
        }
    }

    #[must_use]
    pub fn is_primary(&self) -> bool {
        self.role == WindowRole::Primary
    }

    #[must_use]
    pub fn is_secondary(&self) -> bool {
        self.role == WindowRole::Secondary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_window_has_no_parent_link() {
        let subject = Window::new(
            WindowHandle::<MockHandle>(1),
            WindowRole::Secondary,
            Rect::new(0, 0, 400, 600),
        );
        assert!(subject.parent.is_none());
        assert!(subject.is_secondary());
    }
}
