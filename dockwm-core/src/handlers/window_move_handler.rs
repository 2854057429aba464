use super::{Config, DisplayServer, Handle, Manager, WindowHandle};
use crate::display_action::DisplayAction;
use crate::models::{DockState, Mode, Rect};
use crate::utils::snap;

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    pub fn window_move_handler(&mut self, handle: &WindowHandle<H>, frame: Rect) -> bool {
        if self.state.is_secondary(handle) {
            return self.secondary_moved(frame);
        }
        if self.state.is_primary(handle) {
            return self.primary_moved(frame);
        }
        false
    }

    fn secondary_moved(&mut self, frame: Rect) -> bool {
        let animating = self.secondary_is_animating();
        let Some(secondary) = self.state.secondary.as_mut() else {
            return false;
        };
        // An unchanged frame is the echo of our own SetWindowFrame; dropping
        // it here is what keeps program moves and user moves from feeding
        // back into each other.
        if secondary.frame == frame {
            return false;
        }
        secondary.frame = frame;
        // A move we did not initiate and that is not part of a gesture means
        // something else relocated the overlay: the attachment is gone.
        if self.state.mode == Mode::Normal && !animating && self.state.attachment.is_attached() {
            self.state.attachment.set_attached(false);
            self.state.attachment.set_dock_state(DockState::Detached);
        }
        true
    }

    /// Manual tracking: the overlay follows every primary move with an
    /// immediate frame set, 1:1, no animation.
    fn primary_moved(&mut self, frame: Rect) -> bool {
        let Some(primary) = self.state.primary.as_mut() else {
            return false;
        };
        if primary.frame == frame {
            return false;
        }
        primary.frame = frame;
        if self.state.attachment.is_attached() {
            self.retarget_secondary();
        }
        true
    }

    /// Put the overlay back on its docked frame relative to the current
    /// primary frame. Skipped while an animation owns the overlay's frame;
    /// the animation's completion recomputes from fresh state anyway.
    pub(crate) fn retarget_secondary(&mut self) {
        if self.secondary_is_animating() {
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
        let target = snap::docked_frame(secondary.frame.w, &primary_frame, side, screen.as_ref());
        if secondary.frame == target {
            return;
        }
        secondary.frame = target;
        let handle = secondary.handle;
        self.state
            .actions
            .push_back(DisplayAction::SetWindowFrame(handle, target));
    }
}
