use super::{Config, DisplayServer, Handle, Manager, WindowHandle};
use crate::config::ResizePolicy;
use crate::models::Rect;
use crate::utils::animator::{AnimationPurpose, Easing};
use crate::utils::snap;

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    pub fn window_resize_handler(&mut self, handle: &WindowHandle<H>, frame: Rect) -> bool {
        if self.state.is_secondary(handle) {
            let Some(secondary) = self.state.secondary.as_mut() else {
                return false;
            };
            if secondary.frame == frame {
                return false;
            }
            secondary.frame = frame;
            return true;
        }
        if self.state.is_primary(handle) {
            let Some(primary) = self.state.primary.as_mut() else {
                return false;
            };
            if primary.frame == frame {
                return false;
            }
            primary.frame = frame;
            if self.state.attachment.is_attached() {
                self.sync_secondary_after_resize();
            }
            return true;
        }
        false
    }

    /// Keep the docked overlay matched to the resized primary: x per side,
    /// height equal to the new primary height. The policy only changes how
    /// the frame gets there.
    fn sync_secondary_after_resize(&mut self) {
        match self.config.resize_policy() {
            ResizePolicy::Direct => self.retarget_secondary(),
            ResizePolicy::Animated => {
                let Some(primary) = self.state.primary.as_ref() else {
                    return;
                };
                let primary_frame = primary.frame;
                let side = self.state.attachment.side();
                let screen = self.state.screen;
                let Some(secondary) = self.state.secondary.as_ref() else {
                    return;
                };
                let target =
                    snap::docked_frame(secondary.frame.w, &primary_frame, side, screen.as_ref());
                if secondary.frame == target {
                    return;
                }
                self.animate_secondary(
                    target,
                    self.config.resize_animation(),
                    Easing::Linear,
                    AnimationPurpose::Reposition,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TestConfig;
    use crate::models::{Side, Window, WindowRole};
    use crate::DisplayEvent;
    use std::time::Duration;

    const PRIMARY: WindowHandle<i32> = WindowHandle(1);
    const SECONDARY: WindowHandle<i32> = WindowHandle(2);

    fn attached_manager(
        policy: ResizePolicy,
    ) -> crate::models::Manager<
        i32,
        TestConfig,
        crate::display_servers::MockDisplayServer<i32>,
    > {
        let mut manager = Manager::new_test_with_config(TestConfig {
            resize_policy: policy,
            ..TestConfig::default()
        });
        manager.display_event_handler(DisplayEvent::WindowCreated(Window::new(
            PRIMARY,
            WindowRole::Primary,
            Rect::new(100, 100, 400, 600),
        )));
        manager.display_event_handler(DisplayEvent::WindowCreated(Window::new(
            SECONDARY,
            WindowRole::Secondary,
            Rect::new(505, 100, 120, 600),
        )));
        manager.finish_snap(Side::Right);
        manager.reconcile_attachment();
        manager.state.actions.clear();
        manager
    }

    #[test]
    fn direct_resize_matches_the_new_height_immediately() {
        let mut manager = attached_manager(ResizePolicy::Direct);
        manager.display_event_handler(DisplayEvent::WindowResized(
            PRIMARY,
            Rect::new(100, 100, 400, 700),
        ));

        let secondary = manager.state.secondary.as_ref().expect("secondary");
        assert_eq!(
            secondary.frame,
            Rect::new(501, 100, 120, 700),
            "same side and x offset, new height"
        );
        assert_eq!(manager.state.attachment.side(), Side::Right);
    }

    #[test]
    fn animated_resize_lands_on_the_same_frame() {
        let mut manager = attached_manager(ResizePolicy::Animated);
        manager.display_event_handler(DisplayEvent::WindowResized(
            PRIMARY,
            Rect::new(100, 100, 400, 700),
        ));
        assert!(manager.animator.is_animating(&SECONDARY));

        manager.tick_animations(Duration::from_millis(400));
        let secondary = manager.state.secondary.as_ref().expect("secondary");
        assert_eq!(secondary.frame, Rect::new(501, 100, 120, 700));
        assert!(!manager.animator.is_animating(&SECONDARY));
    }

    #[test]
    fn resize_while_detached_does_not_touch_the_overlay() {
        let mut manager = attached_manager(ResizePolicy::Direct);
        manager.state.attachment.set_attached(false);
        manager.reconcile_attachment();

        let before = manager.state.secondary.as_ref().map(|w| w.frame);
        manager.display_event_handler(DisplayEvent::WindowResized(
            PRIMARY,
            Rect::new(100, 100, 500, 900),
        ));
        assert_eq!(manager.state.secondary.as_ref().map(|w| w.frame), before);
    }

    #[test]
    fn repeated_resize_supersedes_the_running_animation() {
        let mut manager = attached_manager(ResizePolicy::Animated);
        manager.display_event_handler(DisplayEvent::WindowResized(
            PRIMARY,
            Rect::new(100, 100, 400, 700),
        ));
        manager.tick_animations(Duration::from_millis(100));
        manager.display_event_handler(DisplayEvent::WindowResized(
            PRIMARY,
            Rect::new(100, 100, 400, 800),
        ));
        manager.tick_animations(Duration::from_millis(400));

        let secondary = manager.state.secondary.as_ref().expect("secondary");
        assert_eq!(secondary.frame, Rect::new(501, 100, 120, 800));
    }
}
