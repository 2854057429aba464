//! The single source of truth for the docking relationship. All mutation
//! funnels through the setters here: each one dirty-checks, persists what
//! is durable, and queues a typed change notification for the manager to
//! react to. No component writes these fields directly.
#![allow(clippy::module_name_repetitions)]

use std::collections::VecDeque;
use std::time::SystemTime;

use crate::models::{DockState, Point, Side};
use crate::utils::settings::SettingsStore;

/// Broadcast payload for an attachment flip. Drained by the manager, which
/// reconciles the parent link in response.
#[derive(Clone, Copy, Debug)]
pub struct AttachmentChange {
    pub is_attached: bool,
    pub timestamp: SystemTime,
}

#[derive(Debug)]
pub struct AttachmentState {
    is_attached: bool,
    dock_state: DockState,
    side: Side,
    drag_start: Option<Point>,
    state_before_drag: Option<DockState>,
    is_ready_to_snap: bool,
    is_window_open: bool,
    settings: SettingsStore,
    changes: VecDeque<AttachmentChange>,
}

impl AttachmentState {
    /// Build from persisted settings. A persisted attachment flag seeds both
    /// `is_attached` and the dock state so a restart comes back docked.
    #[must_use]
    pub fn new(settings: SettingsStore) -> Self {
        let is_attached = settings.values.debug_window_is_attached;
        Self {
            is_attached,
            dock_state: if is_attached {
                DockState::Attached
            } else {
                DockState::Detached
            },
            side: Side::default(),
            drag_start: None,
            state_before_drag: None,
            is_ready_to_snap: false,
            is_window_open: false,
            settings,
            changes: VecDeque::new(),
        }
    }

    #[must_use]
    pub const fn is_attached(&self) -> bool {
        self.is_attached
    }

    #[must_use]
    pub const fn dock_state(&self) -> DockState {
        self.dock_state
    }

    #[must_use]
    pub const fn side(&self) -> Side {
        self.side
    }

    #[must_use]
    pub const fn drag_start(&self) -> Option<Point> {
        self.drag_start
    }

    #[must_use]
    pub const fn state_before_drag(&self) -> Option<DockState> {
        self.state_before_drag
    }

    #[must_use]
    pub const fn is_ready_to_snap(&self) -> bool {
        self.is_ready_to_snap
    }

    #[must_use]
    pub const fn is_window_open(&self) -> bool {
        self.is_window_open
    }

    #[must_use]
    pub const fn show_details(&self) -> bool {
        self.settings.values.debug_window_show_details
    }

    #[must_use]
    pub const fn auto_scroll(&self) -> bool {
        self.settings.values.debug_window_auto_scroll
    }

    /// Flip the attachment flag. Persists the new value and queues a change
    /// notification. A write of the current value is a no-op so observer
    /// chains cannot cycle.
    pub fn set_attached(&mut self, value: bool) {
        if self.is_attached == value {
            return;
        }
        self.is_attached = value;
        self.settings.values.debug_window_is_attached = value;
        self.settings.save();
        self.changes.push_back(AttachmentChange {
            is_attached: value,
            timestamp: SystemTime::now(),
        });
    }

    pub fn set_dock_state(&mut self, value: DockState) {
        if self.dock_state == value {
            return;
        }
        tracing::debug!(from = ?self.dock_state, to = ?value, "dock state changed");
        self.dock_state = value;
    }

    pub fn set_side(&mut self, value: Side) {
        self.side = value;
    }

    pub fn set_ready_to_snap(&mut self, value: bool) {
        self.is_ready_to_snap = value;
    }

    pub fn set_window_open(&mut self, value: bool) {
        self.is_window_open = value;
    }

    pub fn set_show_details(&mut self, value: bool) {
        if self.settings.values.debug_window_show_details == value {
            return;
        }
        self.settings.values.debug_window_show_details = value;
        self.settings.save();
    }

    pub fn set_auto_scroll(&mut self, value: bool) {
        if self.settings.values.debug_window_auto_scroll == value {
            return;
        }
        self.settings.values.debug_window_auto_scroll = value;
        self.settings.save();
    }

    /// Record the gesture start. The caller supplies the pointer location;
    /// the current dock state is snapshotted so a drag that does not snap
    /// can restore it.
    pub fn begin_drag(&mut self, start: Point) {
        self.drag_start = Some(start);
        self.state_before_drag = Some(self.dock_state);
    }

    /// Clear all transient gesture fields. Runs on every pointer-up
    /// regardless of outcome.
    pub fn end_drag(&mut self) {
        self.drag_start = None;
        self.state_before_drag = None;
        self.is_ready_to_snap = false;
    }

    /// Take the next queued change notification, if any.
    pub fn pop_change(&mut self) -> Option<AttachmentChange> {
        self.changes.pop_front()
    }
}
