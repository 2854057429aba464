use super::DisplayServer;
use crate::config::Config;
use crate::display_action::DisplayAction;
use crate::models::Handle;
use crate::DisplayEvent;

/// Records every action the core emits so tests can assert on the exact
/// command stream.
#[derive(Debug, Default)]
pub struct MockDisplayServer<H: Handle> {
    pub actions: Vec<DisplayAction<H>>,
}

impl<H: Handle> DisplayServer<H> for MockDisplayServer<H> {
    fn new(_: &impl Config) -> Self {
        Self { actions: vec![] }
    }

    fn get_next_events(&mut self) -> Vec<DisplayEvent<H>> {
        vec![]
    }

    fn execute_action(&mut self, act: DisplayAction<H>) -> Option<DisplayEvent<H>> {
        self.actions.push(act);
        None
    }

    fn wait_readable(&self) -> std::pin::Pin<Box<dyn std::future::Future<Output = ()>>> {
        unimplemented!()
    }

    fn flush(&self) {}
}
