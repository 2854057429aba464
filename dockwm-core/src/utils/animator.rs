//! Timed frame transitions for one window at a time. The animator never
//! touches the backend itself; it yields interpolated frames on each tick
//! and the manager applies them and runs the typed completion.
#![allow(clippy::module_name_repetitions)]

use std::time::Duration;

use crate::models::{Handle, Rect, Side, WindowHandle};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseInOut,
}

/// What to do when an animation reaches its target frame. A typed
/// continuation instead of a stored closure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationPurpose {
    /// Re-establish the parent link and flip the attachment state.
    Snap(Side),
    /// Pure reposition; nothing further to do.
    Reposition,
}

#[derive(Debug)]
struct Animation<H: Handle> {
    window: WindowHandle<H>,
    start: Rect,
    target: Rect,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
    purpose: AnimationPurpose,
}

/// One interpolation step. `finished` carries the purpose exactly once,
/// on the tick that lands on the target frame.
#[derive(Clone, Copy, Debug)]
pub struct AnimationFrame<H: Handle> {
    pub window: WindowHandle<H>,
    pub frame: Rect,
    pub finished: Option<AnimationPurpose>,
}

#[derive(Debug, Default)]
pub struct WindowAnimator<H: Handle> {
    active: Vec<Animation<H>>,
}

impl<H: Handle> WindowAnimator<H> {
    #[must_use]
    pub fn new() -> Self {
        Self { active: Vec::new() }
    }

    /// Start a transition. A running animation on the same window is
    /// cancelled and replaced (last write wins for the final frame). A zero
    /// duration returns the completed frame immediately instead of storing
    /// anything.
    pub fn animate(
        &mut self,
        window: WindowHandle<H>,
        from: Rect,
        to: Rect,
        duration: Duration,
        easing: Easing,
        purpose: AnimationPurpose,
    ) -> Option<AnimationFrame<H>> {
        self.cancel(&window);
        if duration.is_zero() {
            return Some(AnimationFrame {
                window,
                frame: to,
                finished: Some(purpose),
            });
        }
        self.active.push(Animation {
            window,
            start: from,
            target: to,
            duration,
            elapsed: Duration::ZERO,
            easing,
            purpose,
        });
        None
    }

    pub fn cancel(&mut self, window: &WindowHandle<H>) {
        self.active.retain(|a| a.window != *window);
    }

    #[must_use]
    pub fn is_animating(&self, window: &WindowHandle<H>) -> bool {
        self.active.iter().any(|a| a.window == *window)
    }

    #[must_use]
    pub fn has_active(&self) -> bool {
        !self.active.is_empty()
    }

    /// Advance all active animations by `dt` and return the frames to apply.
    pub fn tick(&mut self, dt: Duration) -> Vec<AnimationFrame<H>> {
        let mut frames = Vec::with_capacity(self.active.len());
        for animation in &mut self.active {
            animation.elapsed += dt;
            let done = animation.elapsed >= animation.duration;
            let t = if done {
                1.0
            } else {
                animation.elapsed.as_secs_f64() / animation.duration.as_secs_f64()
            };
            frames.push(AnimationFrame {
                window: animation.window,
                frame: lerp_rect(&animation.start, &animation.target, ease(animation.easing, t)),
                finished: done.then_some(animation.purpose),
            });
        }
        self.active.retain(|a| a.elapsed < a.duration);
        frames
    }
}

fn ease(easing: Easing, t: f64) -> f64 {
    match easing {
        Easing::Linear => t,
        // smoothstep, close enough to the platform ease-in-out curve
        Easing::EaseInOut => t * t * (3.0 - 2.0 * t),
    }
}

fn lerp_rect(a: &Rect, b: &Rect, t: f64) -> Rect {
    Rect::new(
        lerp(a.x, b.x, t),
        lerp(a.y, b.y, t),
        lerp(a.w, b.w, t),
        lerp(a.h, b.h, t),
    )
}

#[allow(clippy::cast_possible_truncation)]
fn lerp(a: i32, b: i32, t: f64) -> i32 {
    a + (f64::from(b - a) * t).round() as i32
}
