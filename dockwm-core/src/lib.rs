//! Docking core for a two-window debug overlay: one primary application
//! window, one secondary overlay window that can be dragged free and
//! snapped back against either vertical edge.
// We deny clippy pedantic lints, primarily to keep code as correct as
// possible. The goal of dockwm is to do one thing and do it well: keep two
// windows docked.
#![warn(clippy::pedantic)]
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::must_use_candidate,
    clippy::default_trait_access
)]
pub mod config;
mod display_action;
mod display_event;
pub mod display_servers;
pub mod errors;
mod event_loop;
mod handlers;
pub mod models;
pub mod state;
pub mod utils;

pub use config::Config;
pub use display_action::DisplayAction;
pub use display_event::{DisplayEvent, HitRegion};
pub use display_servers::DisplayServer;
pub use models::{
    AttachmentChange, AttachmentState, DockState, Handle, Manager, Mode, Point, Rect, Side,
    Window, WindowHandle, WindowRole,
};
pub use state::State;
