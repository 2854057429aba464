mod resize_policy;
mod snap;

use std::time::Duration;

pub use resize_policy::ResizePolicy;
pub use snap::SnapConfig;

pub trait Config {
    fn snap(&self) -> SnapConfig;

    fn resize_policy(&self) -> ResizePolicy;

    /// Duration of the eased snap-in animation after a qualifying release.
    fn snap_animation(&self) -> Duration;

    /// Duration of the linear reposition after a primary resize
    /// (only used when [`ResizePolicy::Animated`] is selected).
    fn resize_animation(&self) -> Duration;

    /// Duration of the initial reveal when the secondary window is created
    /// next to an already-attached primary.
    fn reveal_animation(&self) -> Duration;

    fn default_secondary_width(&self) -> i32;

    /// How many times docking setup is retried before it is abandoned for
    /// the process lifetime.
    fn setup_attempt_limit(&self) -> u32;
}

#[cfg(test)]
#[allow(clippy::module_name_repetitions)]
#[derive(Default)]
pub struct TestConfig {
    pub snap: SnapConfig,
    pub resize_policy: ResizePolicy,
}

#[cfg(test)]
impl Config for TestConfig {
    fn snap(&self) -> SnapConfig {
        self.snap
    }
    fn resize_policy(&self) -> ResizePolicy {
        self.resize_policy
    }
    fn snap_animation(&self) -> Duration {
        Duration::from_millis(240)
    }
    fn resize_animation(&self) -> Duration {
        Duration::from_millis(400)
    }
    fn reveal_animation(&self) -> Duration {
        Duration::from_millis(450)
    }
    fn default_secondary_width(&self) -> i32 {
        400
    }
    fn setup_attempt_limit(&self) -> u32 {
        10
    }
}
