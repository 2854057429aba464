use crate::models::{Handle, Point, Rect, Window, WindowHandle};

/// Where a pointer-down landed inside the secondary window. Events over
/// interactive controls are passed through to them, never treated as a
/// drag start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitRegion {
    Background,
    Control,
}

/// Events delivered by the display backend. All arrive on the one event
/// loop; handlers must tolerate any cross-window ordering.
#[allow(clippy::large_enum_variant)]
#[derive(Debug)]
pub enum DisplayEvent<H: Handle> {
    WindowCreated(Window<H>),
    ScreenChanged(Rect),
    PointerDown(WindowHandle<H>, Point, HitRegion),
    PointerDragged(WindowHandle<H>, Point),
    PointerUp(WindowHandle<H>, Point),
    WindowMoved(WindowHandle<H>, Rect),
    WindowResized(WindowHandle<H>, Rect),
    WindowBecameKey(WindowHandle<H>),
    WindowMiniaturized(WindowHandle<H>),
    WindowDeminiaturized(WindowHandle<H>),
    WindowWillClose(WindowHandle<H>),
}
