//! Parent-link bookkeeping: attach, detach, reconcile, and the startup
//! handshake. The link is explicit state mirrored to the backend; frame
//! synchronization never relies on native child-window semantics.
use super::{Config, DisplayServer, Handle, Manager};
use crate::display_action::DisplayAction;
use crate::models::{DockState, Mode, Side};
use crate::utils::animator::{AnimationPurpose, Easing};
use crate::utils::snap;
use std::time::Duration;

/// Growing delay between startup docking attempts.
#[must_use]
pub fn setup_retry_delay(attempt: u32) -> Duration {
    Duration::from_millis(100 * u64::from(attempt + 1))
}

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Dock the secondary window to the primary: recompute the docked
    /// frame, apply it, and establish the parent link ordered above the
    /// primary. Safe to call repeatedly; an already-correct frame or link
    /// produces no actions.
    pub fn attach_secondary(&mut self) -> bool {
        let Some(primary) = self.state.primary.as_ref() else {
            tracing::warn!("cannot attach: reference window missing");
            return false;
        };
        let (primary_handle, primary_frame) = (primary.handle, primary.frame);
        let side = self.state.attachment.side();
        let screen = self.state.screen;
        let Some(secondary) = self.state.secondary.as_mut() else {
            tracing::warn!("cannot attach: overlay window missing");
            return false;
        };
        let target = snap::docked_frame(secondary.frame.w, &primary_frame, side, screen.as_ref());
        let secondary_handle = secondary.handle;
        let needs_frame = secondary.frame != target;
        let needs_parent = secondary.parent != Some(primary_handle);
        secondary.frame = target;
        secondary.parent = Some(primary_handle);

        if needs_frame {
            self.state
                .actions
                .push_back(DisplayAction::SetWindowFrame(secondary_handle, target));
        }
        if needs_parent {
            self.state
                .actions
                .push_back(DisplayAction::SetParent(secondary_handle, Some(primary_handle)));
        }
        needs_frame || needs_parent
    }

    /// Remove the parent link only. The frame is untouched so the window
    /// does not jump on detach.
    pub fn detach_secondary(&mut self) -> bool {
        let Some(secondary) = self.state.secondary.as_mut() else {
            return false;
        };
        if secondary.parent.take().is_none() {
            return false;
        }
        let handle = secondary.handle;
        self.state
            .actions
            .push_back(DisplayAction::SetParent(handle, None));
        true
    }

    /// Runs after a snap or reveal animation lands on its target frame.
    pub(crate) fn finish_snap(&mut self, side: Side) {
        self.state.attachment.set_side(side);
        self.attach_secondary();
        self.state.attachment.set_dock_state(DockState::Attached);
        self.state.attachment.set_attached(true);
    }

    /// Drain queued attachment changes and bring the parent link in line.
    /// Attaching is deferred while the snap animation still owns the frame.
    pub fn reconcile_attachment(&mut self) -> bool {
        let mut changed = false;
        while let Some(change) = self.state.attachment.pop_change() {
            tracing::debug!(is_attached = change.is_attached, "attach state changed");
            if change.is_attached {
                if !self.secondary_is_animating() {
                    changed = self.attach_secondary() || changed;
                }
            } else {
                changed = self.detach_secondary() || changed;
            }
        }
        changed
    }

    /// Self-heal for the bug case "attached but no parent link": log loudly
    /// and re-run the attach instead of crashing or staying inconsistent.
    pub fn heal_attachment(&mut self) {
        if !self.state.attachment.is_attached()
            || self.state.mode != Mode::Normal
            || self.secondary_is_animating()
        {
            return;
        }
        let link_missing = matches!(
            (&self.state.secondary, &self.state.primary),
            (Some(secondary), Some(_)) if secondary.parent.is_none()
        );
        if link_missing {
            tracing::error!("attachment flag set but parent link missing; re-attaching");
            self.attach_secondary();
        }
    }

    /// Startup handshake: both windows are created asynchronously by the
    /// host, so docking setup retries until they exist. Attempts are
    /// bounded; past the ceiling setup is abandoned for this process.
    pub fn setup_docking(&mut self) -> bool {
        if self.state.setup.established || self.state.setup.abandoned {
            return self.state.setup.established;
        }
        if self.state.primary.is_some() && self.state.secondary.is_some() {
            self.state.setup.established = true;
            tracing::debug!("docking setup complete");
            if self.state.attachment.is_attached() && !self.secondary_is_animating() {
                self.attach_secondary();
            }
            return true;
        }
        self.state.setup.attempts += 1;
        if self.state.setup.attempts >= self.config.setup_attempt_limit() {
            self.state.setup.abandoned = true;
            tracing::error!(
                attempts = self.state.setup.attempts,
                "docking setup abandoned; a window never appeared"
            );
        } else {
            tracing::debug!(
                attempt = self.state.setup.attempts,
                "docking setup waiting for windows"
            );
        }
        false
    }

    /// Programmatic re-dock, regardless of where the overlay currently is:
    /// drop the link, glide back to the docked frame, re-attach on arrival.
    pub fn reset_secondary(&mut self) {
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
        self.detach_secondary();
        self.animate_secondary(
            target,
            self.config.snap_animation(),
            Easing::EaseInOut,
            AnimationPurpose::Snap(side),
        );
    }

    pub(crate) fn secondary_is_animating(&self) -> bool {
        self.state
            .secondary
            .as_ref()
            .is_some_and(|w| self.animator.is_animating(&w.handle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Rect, Window, WindowHandle, WindowRole};
    use crate::DisplayEvent;
    use std::time::Duration;

    const PRIMARY: WindowHandle<i32> = WindowHandle(1);
    const SECONDARY: WindowHandle<i32> = WindowHandle(2);

    fn manager_with_windows() -> crate::models::Manager<
        i32,
        crate::config::TestConfig,
        crate::display_servers::MockDisplayServer<i32>,
    > {
        let mut manager = Manager::new_test();
        manager.display_event_handler(DisplayEvent::WindowCreated(Window::new(
            PRIMARY,
            WindowRole::Primary,
            Rect::new(100, 100, 400, 600),
        )));
        manager.display_event_handler(DisplayEvent::WindowCreated(Window::new(
            SECONDARY,
            WindowRole::Secondary,
            Rect::new(505, 100, 120, 600),
        )));
        manager
    }

    #[test]
    fn attach_twice_is_idempotent() {
        let mut manager = manager_with_windows();
        manager.attach_secondary();
        let frame_after_first = manager.state.secondary.as_ref().map(|w| w.frame);
        let changed = manager.attach_secondary();

        assert!(!changed, "second attach must be a no-op");
        assert_eq!(
            manager.state.secondary.as_ref().map(|w| w.frame),
            frame_after_first
        );
        assert_eq!(
            manager.state.secondary.as_ref().and_then(|w| w.parent),
            Some(PRIMARY)
        );
        let parent_links = manager
            .state
            .actions
            .iter()
            .filter(|a| matches!(a, DisplayAction::SetParent(_, Some(_))))
            .count();
        assert_eq!(parent_links, 1, "no duplicate parent links");
    }

    #[test]
    fn detach_keeps_the_frame_in_place() {
        let mut manager = manager_with_windows();
        manager.attach_secondary();
        let docked = manager.state.secondary.as_ref().map(|w| w.frame);

        assert!(manager.detach_secondary());
        assert_eq!(manager.state.secondary.as_ref().map(|w| w.frame), docked);
        assert!(manager
            .state
            .secondary
            .as_ref()
            .is_some_and(|w| w.parent.is_none()));
        assert!(!manager.detach_secondary(), "already detached");
    }

    #[test]
    fn attach_without_windows_is_a_safe_no_op() {
        let mut manager = Manager::new_test();
        assert!(!manager.attach_secondary());
        assert!(!manager.detach_secondary());
        assert!(manager.state.actions.is_empty());
    }

    #[test]
    fn heal_reattaches_when_the_link_went_missing() {
        let mut manager = manager_with_windows();
        manager.finish_snap(crate::models::Side::Right);
        manager.reconcile_attachment();

        // Simulate the backend losing the link while we believe we are
        // attached.
        if let Some(secondary) = manager.state.secondary.as_mut() {
            secondary.parent = None;
        }
        manager.heal_attachment();
        assert_eq!(
            manager.state.secondary.as_ref().and_then(|w| w.parent),
            Some(PRIMARY)
        );
    }

    #[test]
    fn setup_gives_up_after_the_attempt_ceiling() {
        let mut manager = Manager::new_test();
        manager.display_event_handler(DisplayEvent::WindowCreated(Window::new(
            PRIMARY,
            WindowRole::Primary,
            Rect::new(100, 100, 400, 600),
        )));
        // The created-handler already burned one attempt.
        for _ in 0..9 {
            assert!(!manager.setup_docking());
        }
        assert!(manager.state.setup.abandoned);

        // A late window no longer resurrects setup.
        manager.display_event_handler(DisplayEvent::WindowCreated(Window::new(
            SECONDARY,
            WindowRole::Secondary,
            Rect::new(505, 100, 120, 600),
        )));
        assert!(!manager.state.setup.established);
    }

    #[test]
    fn retry_delay_grows_with_attempts() {
        assert!(setup_retry_delay(0) < setup_retry_delay(1));
        assert!(setup_retry_delay(1) < setup_retry_delay(9));
    }

    #[test]
    fn reset_glides_back_to_the_docked_frame_and_reattaches() {
        let mut manager = manager_with_windows();
        manager.finish_snap(crate::models::Side::Right);
        manager.reconcile_attachment();

        // Wander off without a gesture record, then reset.
        if let Some(secondary) = manager.state.secondary.as_mut() {
            secondary.frame = Rect::new(900, 300, 120, 200);
        }
        manager.reset_secondary();
        manager.tick_animations(Duration::from_millis(240));

        let secondary = manager.state.secondary.as_ref().expect("secondary");
        assert_eq!(secondary.frame, Rect::new(501, 100, 120, 600));
        assert_eq!(secondary.parent, Some(PRIMARY));
        assert_eq!(manager.state.attachment.dock_state(), DockState::Attached);
    }
}
