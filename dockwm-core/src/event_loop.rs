use crate::config::Config;
use crate::display_servers::DisplayServer;
use crate::handlers::setup_retry_delay;
use crate::models::{Handle, Manager};
use std::time::Duration;

/// Tick granularity for in-flight animations.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Run the cooperative event loop. Pointer events, window
    /// notifications, animation ticks, and setup retries are all dispatched
    /// here, on one task. Returns once both windows are gone after a
    /// completed setup.
    pub async fn event_loop(mut self) {
        let mut event_buffer = vec![];
        loop {
            self.display_server.flush();

            let mut needs_update = false;
            tokio::select! {
                _ = self.display_server.wait_readable(), if event_buffer.is_empty() => {
                    event_buffer.append(&mut self.display_server.get_next_events());
                    continue;
                }
                _ = timeout(FRAME_INTERVAL), if event_buffer.is_empty() && self.animator.has_active() => {
                    needs_update = self.tick_animations(FRAME_INTERVAL);
                }
                // The windows appear asynchronously at startup; keep
                // retrying the docking handshake with a growing delay.
                _ = timeout(setup_retry_delay(self.state.setup.attempts)), if event_buffer.is_empty() && self.state.setup.pending() => {
                    self.setup_docking();
                }
                else => {
                    event_buffer
                        .drain(..)
                        .for_each(|event| needs_update = self.display_event_handler(event) || needs_update);
                }
            }

            if needs_update {
                self.reconcile_attachment();
                self.heal_attachment();
            }

            // Perform any actions requested by the handlers.
            while let Some(act) = self.state.actions.pop_front() {
                if let Some(event) = self.display_server.execute_action(act) {
                    event_buffer.push(event);
                }
            }

            if self.state.setup.established
                && self.state.primary.is_none()
                && self.state.secondary.is_none()
            {
                break;
            }
        }
    }
}

async fn timeout(duration: Duration) {
    use tokio::time::sleep;
    sleep(duration).await;
}
