use super::{Config, DisplayServer, Handle, Manager, Window, WindowHandle};
use crate::display_action::DisplayAction;
use crate::models::{DockState, Mode, Rect, WindowRole};
use crate::utils::animator::{AnimationPurpose, Easing};
use crate::utils::snap;

/// Height of the partial strip the overlay starts from during the initial
/// reveal.
const REVEAL_STRIP_HEIGHT: i32 = 200;

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    pub fn window_created_handler(&mut self, window: Window<H>) -> bool {
        // Don't re-add a window the manager already knows about.
        if self.state.window(&window.handle).is_some() {
            return false;
        }
        match window.role {
            WindowRole::Primary => {
                self.state.primary = Some(window);
            }
            WindowRole::Secondary => {
                self.state.secondary = Some(window);
                self.state.attachment.set_window_open(true);
                self.reveal_secondary();
            }
        }
        self.setup_docking();
        true
    }

    /// Initial reveal: a freshly created overlay next to an attached
    /// primary starts as a partial-height strip on the docked edge and
    /// grows to the full docked frame, attaching on arrival.
    fn reveal_secondary(&mut self) {
        if !self.state.attachment.is_attached() {
            return;
        }
        let Some(primary) = self.state.primary.as_ref() else {
            return;
        };
        let primary_frame = primary.frame;
        let side = self.state.attachment.side();
        let screen = self.state.screen;
        let Some(secondary) = self.state.secondary.as_mut() else {
            return;
        };
        let full = snap::docked_frame(secondary.frame.w, &primary_frame, side, screen.as_ref());
        let strip = Rect::new(full.x, full.y, full.w, REVEAL_STRIP_HEIGHT.min(full.h));
        secondary.frame = strip;
        let handle = secondary.handle;
        self.state
            .actions
            .push_back(DisplayAction::SetWindowFrame(handle, strip));
        self.animate_secondary(
            full,
            self.config.reveal_animation(),
            Easing::EaseInOut,
            AnimationPurpose::Snap(side),
        );
    }

    /// The two windows minimize together.
    pub fn window_miniaturized_handler(&mut self, handle: &WindowHandle<H>) -> bool {
        if self.state.is_primary(handle) {
            if let Some(primary) = self.state.primary.as_mut() {
                primary.miniaturized = true;
            }
            let Some(secondary) = self.state.secondary.as_mut() else {
                return true;
            };
            if !secondary.miniaturized {
                secondary.miniaturized = true;
                let handle = secondary.handle;
                self.state
                    .actions
                    .push_back(DisplayAction::MiniaturizeWindow(handle));
            }
            return true;
        }
        if self.state.is_secondary(handle) {
            if let Some(secondary) = self.state.secondary.as_mut() {
                secondary.miniaturized = true;
            }
        }
        false
    }

    /// ...and restore together. An attached overlay repositions afterwards,
    /// animated.
    pub fn window_deminiaturized_handler(&mut self, handle: &WindowHandle<H>) -> bool {
        if self.state.is_primary(handle) {
            if let Some(primary) = self.state.primary.as_mut() {
                primary.miniaturized = false;
            }
            if let Some(secondary) = self.state.secondary.as_mut() {
                if secondary.miniaturized {
                    secondary.miniaturized = false;
                    let handle = secondary.handle;
                    self.state
                        .actions
                        .push_back(DisplayAction::DeminiaturizeWindow(handle));
                }
            }
            if self.state.attachment.is_attached() {
                self.reposition_after_restore();
            }
            return true;
        }
        if self.state.is_secondary(handle) {
            if let Some(secondary) = self.state.secondary.as_mut() {
                secondary.miniaturized = false;
            }
        }
        false
    }

    fn reposition_after_restore(&mut self) {
        let Some(primary) = self.state.primary.as_ref() else {
            return;
        };
        let primary_frame = primary.frame;
        let side = self.state.attachment.side();
        let screen = self.state.screen;
        let Some(secondary) = self.state.secondary.as_ref() else {
            return;
        };
        let target = snap::docked_frame(secondary.frame.w, &primary_frame, side, screen.as_ref());
        if secondary.frame == target {
            return;
        }
        self.animate_secondary(
            target,
            self.config.snap_animation(),
            Easing::EaseInOut,
            AnimationPurpose::Reposition,
        );
    }

    /// The overlay cannot outlive the primary window; any gesture or
    /// animation in flight dies with whichever window closed.
    pub fn window_will_close_handler(&mut self, handle: &WindowHandle<H>) -> bool {
        if self.state.is_primary(handle) {
            tracing::info!("reference window closing; closing overlay window");
            self.state.primary = None;
            if let Some(secondary) = self.state.secondary.take() {
                self.animator.cancel(&secondary.handle);
                self.state
                    .actions
                    .push_back(DisplayAction::CloseWindow(secondary.handle));
            }
            self.end_window_session();
            return true;
        }
        if self.state.is_secondary(handle) {
            if let Some(secondary) = self.state.secondary.take() {
                self.animator.cancel(&secondary.handle);
            }
            self.end_window_session();
            return true;
        }
        false
    }

    fn end_window_session(&mut self) {
        self.state.attachment.set_window_open(false);
        self.state.mode = Mode::Normal;
        // A gesture interrupted by the close resolves to its pre-drag state.
        if self.state.attachment.dock_state() == DockState::Dragging {
            let fallback = self
                .state
                .attachment
                .state_before_drag()
                .unwrap_or(DockState::Detached);
            self.state.attachment.set_dock_state(fallback);
        }
        self.state.attachment.end_drag();
    }

    /// Close the overlay when it is open; otherwise mark the intent to open
    /// it. Window creation itself belongs to the host, which reports back
    /// with a `WindowCreated` event.
    pub fn toggle_secondary(&mut self) -> bool {
        if self.state.attachment.is_window_open() {
            if let Some(secondary) = self.state.secondary.as_ref() {
                self.state
                    .actions
                    .push_back(DisplayAction::CloseWindow(secondary.handle));
            }
            self.state.attachment.set_window_open(false);
            true
        } else {
            self.state.attachment.set_window_open(true);
            false
        }
    }
}
