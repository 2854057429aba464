//! The pointer gesture state machine: press, drag past the threshold,
//! release. The OS moves the window under direct manipulation; this handler
//! only tracks proximity and resolves the outcome on release.
use super::{Config, DisplayServer, Handle, Manager, WindowHandle};
use crate::display_event::HitRegion;
use crate::models::{DockState, Mode, Point};
use crate::utils::animator::{AnimationPurpose, Easing};
use crate::utils::snap;

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Pointer-down inside the secondary window. Records the gesture start;
    /// attachment is not touched yet, so a plain click changes nothing.
    pub fn pointer_down_handler(
        &mut self,
        handle: &WindowHandle<H>,
        location: Point,
        region: HitRegion,
    ) -> bool {
        if !self.state.is_secondary(handle) {
            return false;
        }
        // Events over interactive controls belong to those controls.
        if region == HitRegion::Control {
            return false;
        }
        self.state.attachment.begin_drag(location);
        self.state.mode = Mode::ReadyToDrag;
        false
    }

    pub fn pointer_drag_handler(&mut self, handle: &WindowHandle<H>, location: Point) -> bool {
        if !self.state.is_secondary(handle) || self.state.mode == Mode::Normal {
            return false;
        }
        if self.state.mode == Mode::ReadyToDrag {
            let Some(start) = self.state.attachment.drag_start() else {
                return false;
            };
            if start.distance(&location) < f64::from(self.config.snap().drag_threshold) {
                return false;
            }
            self.state.mode = Mode::Dragging;
            tracing::debug!("drag started on overlay window");
        }
        self.state.attachment.set_dock_state(DockState::Dragging);

        // Unparent lazily, only once genuinely dragging the key window;
        // dropping the link on pointer-down would flicker on plain clicks.
        let parented = self
            .state
            .secondary
            .as_ref()
            .is_some_and(|w| w.parent.is_some());
        if parented && self.state.secondary_is_key() {
            self.detach_secondary();
            tracing::debug!("removed parent link for drag");
        }

        let ready = match (&self.state.secondary, &self.state.primary) {
            (Some(secondary), Some(primary)) => {
                snap::snap_target(&secondary.frame, &primary.frame, &self.config.snap()).is_some()
            }
            _ => false,
        };
        self.state.attachment.set_ready_to_snap(ready);
        false
    }

    /// Pointer-up resolves the gesture: snap in when within range,
    /// otherwise stay exactly where the drag left the window.
    pub fn pointer_up_handler(&mut self, handle: &WindowHandle<H>) -> bool {
        if !self.state.is_secondary(handle) || self.state.mode == Mode::Normal {
            return false;
        }
        let was_dragging = self.state.mode == Mode::Dragging;
        self.state.mode = Mode::Normal;

        if was_dragging && self.state.attachment.is_ready_to_snap() {
            self.snap_secondary();
        } else {
            if self.state.attachment.dock_state() == DockState::Dragging {
                self.state.attachment.set_dock_state(DockState::Detached);
                self.state.attachment.set_attached(false);
            }
            // A drag that began detached stays detached.
            if self.state.attachment.state_before_drag() == Some(DockState::Detached) {
                self.state.attachment.set_dock_state(DockState::Detached);
            }
        }
        self.state.attachment.end_drag();
        true
    }

    fn snap_secondary(&mut self) {
        let (Some(secondary), Some(primary)) = (&self.state.secondary, &self.state.primary) else {
            return;
        };
        let Some(target) =
            snap::snap_target(&secondary.frame, &primary.frame, &self.config.snap())
        else {
            // The ready hint went stale between the last drag tick and the
            // release; resolve like a plain out-of-range drop.
            self.state.attachment.set_dock_state(DockState::Detached);
            self.state.attachment.set_attached(false);
            return;
        };
        tracing::info!(side = ?target.side, "snapping overlay to reference edge");
        self.animate_secondary(
            target.frame,
            self.config.snap_animation(),
            Easing::EaseInOut,
            AnimationPurpose::Snap(target.side),
        );
    }
}
