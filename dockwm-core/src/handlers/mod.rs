pub mod display_event_handler;
mod dock_handler;
mod drag_handler;
mod window_handler;
mod window_move_handler;
mod window_resize_handler;

pub use dock_handler::setup_retry_delay;

use super::config::Config;
use super::display_servers::DisplayServer;
use super::models::{Handle, Manager, Window, WindowHandle};
use super::DisplayEvent;
