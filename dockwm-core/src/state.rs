//! Aggregate mutable state for the docking core.

use crate::display_action::DisplayAction;
use crate::models::{AttachmentState, Handle, Mode, Rect, Window, WindowHandle};
use crate::utils::settings::SettingsStore;
use std::collections::VecDeque;

/// Progress of the startup docking handshake. The windows are created
/// asynchronously by the host; setup retries with growing delay until both
/// exist or the attempt ceiling is hit.
#[derive(Clone, Copy, Debug, Default)]
pub struct SetupState {
    pub attempts: u32,
    pub established: bool,
    pub abandoned: bool,
}

impl SetupState {
    #[must_use]
    pub const fn pending(&self) -> bool {
        !self.established && !self.abandoned
    }
}

#[derive(Debug)]
pub struct State<H: Handle> {
    pub attachment: AttachmentState,
    pub mode: Mode,
    pub primary: Option<Window<H>>,
    pub secondary: Option<Window<H>>,
    pub key_window: Option<WindowHandle<H>>,
    /// Visible frame of the screen hosting the primary window, when known.
    pub screen: Option<Rect>,
    pub setup: SetupState,
    pub actions: VecDeque<DisplayAction<H>>,
}

impl<H: Handle> State<H> {
    pub(crate) fn new(settings: SettingsStore) -> Self {
        Self {
            attachment: AttachmentState::new(settings),
            mode: Mode::default(),
            primary: None,
            secondary: None,
            key_window: None,
            screen: None,
            setup: SetupState::default(),
            actions: VecDeque::new(),
        }
    }

    #[must_use]
    pub fn window(&self, handle: &WindowHandle<H>) -> Option<&Window<H>> {
        self.primary
            .iter()
            .chain(self.secondary.iter())
            .find(|w| w.handle == *handle)
    }

    pub fn window_mut(&mut self, handle: &WindowHandle<H>) -> Option<&mut Window<H>> {
        self.primary
            .iter_mut()
            .chain(self.secondary.iter_mut())
            .find(|w| w.handle == *handle)
    }

    #[must_use]
    pub fn is_primary(&self, handle: &WindowHandle<H>) -> bool {
        self.primary.as_ref().is_some_and(|w| w.handle == *handle)
    }

    #[must_use]
    pub fn is_secondary(&self, handle: &WindowHandle<H>) -> bool {
        self.secondary.as_ref().is_some_and(|w| w.handle == *handle)
    }

    /// True while the secondary window is the key (frontmost) window.
    #[must_use]
    pub fn secondary_is_key(&self) -> bool {
        match (&self.secondary, &self.key_window) {
            (Some(secondary), Some(key)) => secondary.handle == *key,
            _ => false,
        }
    }
}
