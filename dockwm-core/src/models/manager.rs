use crate::config::Config;
use crate::display_action::DisplayAction;
use crate::display_servers::DisplayServer;
use crate::models::{Handle, Rect};
use crate::state::State;
use crate::utils::animator::{AnimationFrame, AnimationPurpose, Easing, WindowAnimator};
use crate::utils::settings::SettingsStore;
use std::time::Duration;

/// Maintains current program state. Owns the two window records, the
/// animator, and the backend; all docking decisions run through here.
#[derive(Debug)]
pub struct Manager<H: Handle, C, SERVER> {
    pub state: State<H>,
    pub config: C,
    pub animator: WindowAnimator<H>,
    pub display_server: SERVER,
}

impl<H: Handle, C, SERVER> Manager<H, C, SERVER>
where
    C: Config,
    SERVER: DisplayServer<H>,
{
    pub fn new(config: C) -> Self {
        Self::with_settings(config, SettingsStore::load())
    }

    /// Build with an explicit settings store (tests use an in-memory one).
    pub fn with_settings(config: C, settings: SettingsStore) -> Self {
        let display_server = SERVER::new(&config);

        Self {
            state: State::new(settings),
            config,
            animator: WindowAnimator::new(),
            display_server,
        }
    }

    /// Start an animated transition of the secondary window. A zero
    /// duration applies the final frame synchronously.
    pub(crate) fn animate_secondary(
        &mut self,
        target: Rect,
        duration: Duration,
        easing: Easing,
        purpose: AnimationPurpose,
    ) {
        let Some(secondary) = self.state.secondary.as_ref() else {
            return;
        };
        let (handle, from) = (secondary.handle, secondary.frame);
        if let Some(frame) = self
            .animator
            .animate(handle, from, target, duration, easing, purpose)
        {
            self.apply_animation_frame(frame);
        }
    }

    /// Advance animations by `dt` and apply the resulting frames.
    /// Returns true if any window changed.
    pub fn tick_animations(&mut self, dt: Duration) -> bool {
        let frames = self.animator.tick(dt);
        let ticked = !frames.is_empty();
        for frame in frames {
            self.apply_animation_frame(frame);
        }
        ticked
    }

    fn apply_animation_frame(&mut self, step: AnimationFrame<H>) {
        // The window may have closed between event dispatch and this tick.
        let Some(window) = self.state.window_mut(&step.window) else {
            return;
        };
        let changed = window.frame != step.frame;
        window.frame = step.frame;
        if changed {
            self.state
                .actions
                .push_back(DisplayAction::SetWindowFrame(step.window, step.frame));
        }
        if let Some(purpose) = step.finished {
            match purpose {
                AnimationPurpose::Snap(side) => self.finish_snap(side),
                AnimationPurpose::Reposition => {}
            }
        }
    }
}

#[cfg(test)]
impl
    Manager<
        crate::models::MockHandle,
        crate::config::TestConfig,
        crate::display_servers::MockDisplayServer<crate::models::MockHandle>,
    >
{
    pub fn new_test() -> Self {
        Self::with_settings(crate::config::TestConfig::default(), SettingsStore::in_memory())
    }

    pub fn new_test_with_config(config: crate::config::TestConfig) -> Self {
        Self::with_settings(config, SettingsStore::in_memory())
    }
}
