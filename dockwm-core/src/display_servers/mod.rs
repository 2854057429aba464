use crate::config::Config;
use crate::display_action::DisplayAction;
use crate::models::Handle;
use crate::DisplayEvent;
use std::future::Future;
use std::pin::Pin;

#[cfg(test)]
mod mock_display_server;

#[cfg(test)]
pub use self::mock_display_server::MockDisplayServer;

/// The backend boundary: one implementation per host platform. The core
/// never talks to the OS directly; it consumes [`DisplayEvent`]s and emits
/// [`DisplayAction`]s through this trait.
pub trait DisplayServer<H: Handle> {
    fn new(config: &impl Config) -> Self;

    fn get_next_events(&mut self) -> Vec<DisplayEvent<H>>;

    fn execute_action(&mut self, _act: DisplayAction<H>) -> Option<DisplayEvent<H>> {
        None
    }

    fn wait_readable(&self) -> Pin<Box<dyn Future<Output = ()>>>;

    fn flush(&self);
}
