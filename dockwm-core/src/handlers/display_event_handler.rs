use super::{Config, DisplayEvent, DisplayServer, Handle, Manager};

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Process one event from the backend and apply its changes to the
    /// manager. Returns true if the docking state changed.
    pub fn display_event_handler(&mut self, event: DisplayEvent<H>) -> bool {
        match event {
            DisplayEvent::WindowCreated(window) => self.window_created_handler(window),

            DisplayEvent::ScreenChanged(frame) => {
                self.state.screen = Some(frame);
                false
            }

            DisplayEvent::WindowBecameKey(handle) => {
                self.state.key_window = Some(handle);
                false
            }

            DisplayEvent::PointerDown(handle, location, region) => {
                self.pointer_down_handler(&handle, location, region)
            }
            DisplayEvent::PointerDragged(handle, location) => {
                self.pointer_drag_handler(&handle, location)
            }
            DisplayEvent::PointerUp(handle, _) => self.pointer_up_handler(&handle),

            DisplayEvent::WindowMoved(handle, frame) => self.window_move_handler(&handle, frame),
            DisplayEvent::WindowResized(handle, frame) => {
                self.window_resize_handler(&handle, frame)
            }

            DisplayEvent::WindowMiniaturized(handle) => self.window_miniaturized_handler(&handle),
            DisplayEvent::WindowDeminiaturized(handle) => {
                self.window_deminiaturized_handler(&handle)
            }
            DisplayEvent::WindowWillClose(handle) => self.window_will_close_handler(&handle),
        }
    }
}
