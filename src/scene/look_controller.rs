//! Pointer look controller
//!
//! Converts held-button pointer drags into yaw/pitch rotation:
//! - Press of the configured button arms a session and anchors the pointer
//! - Motion while armed accumulates a screen-space delta
//! - Each update turns the delta into angles: yaw accumulates freely,
//!   pitch is clamped to the ascent range, roll is forced to zero

use bevy_ecs::prelude::*;
use glam::{EulerRot, Quat, Vec2};

use crate::input::{ButtonSelector, PointerEvent};
use crate::surface::{InputSurface, ListenerId};

/// Pixels of pointer travel per radian of rotation at `speed = 1.0`.
const PIXELS_PER_RADIAN: f32 = 200.0;

/// Configuration for a [`LookController`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookConfig {
    /// Button that arms a look session. Default: [`ButtonSelector::Left`].
    pub button: ButtonSelector,
    /// Angular sensitivity scale, signed; negative values invert the drag
    /// direction. Intended range `-10.0..=10.0`. Default: `1.0`.
    pub speed: f32,
    /// Upper pitch bound in degrees. Default: `89.95`.
    pub max_ascent_deg: f32,
    /// Lower pitch bound in degrees, expected not to exceed
    /// `max_ascent_deg` (not validated). Default: `-89.95`.
    pub min_ascent_deg: f32,
}

impl Default for LookConfig {
    fn default() -> Self {
        Self {
            button: ButtonSelector::Left,
            speed: 1.0,
            max_ascent_deg: 89.95,
            min_ascent_deg: -89.95,
        }
    }
}

impl LookConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_button(mut self, button: ButtonSelector) -> Self {
        self.button = button;
        self
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Set both pitch bounds, in degrees.
    pub fn with_ascent_range(mut self, min_deg: f32, max_deg: f32) -> Self {
        self.min_ascent_deg = min_deg;
        self.max_ascent_deg = max_deg;
        self
    }
}

/// Orientable object a [`LookController`] can drive.
pub trait LookTarget {
    /// Current orientation.
    fn rotation(&self) -> Quat;

    /// Overwrite the orientation.
    fn set_rotation(&mut self, rotation: Quat);

    /// Mark dependent state (e.g. world matrices) as stale.
    fn set_updated(&mut self);
}

/// Converts held-button pointer drags into rotation of a [`LookTarget`].
///
/// Attach with [`LookController::setup`], drive once per tick with
/// [`LookController::update`], detach with [`LookController::cleanup`].
/// The controller keeps no authoritative angles of its own: every update
/// re-derives yaw/pitch from the target, so other systems are free to
/// rotate the same target between ticks.
#[derive(Component, Debug)]
pub struct LookController {
    /// Live configuration, consulted on every event and update.
    pub config: LookConfig,
    listener: Option<ListenerId>,
    pressed: bool,
    last: Vec2,
    current: Vec2,
}

impl Default for LookController {
    fn default() -> Self {
        Self::new(LookConfig::default())
    }
}

impl LookController {
    pub fn new(config: LookConfig) -> Self {
        Self {
            config,
            listener: None,
            pressed: false,
            last: Vec2::ZERO,
            current: Vec2::ZERO,
        }
    }

    /// Attach to `surface` and reset session state.
    ///
    /// A second setup without an intervening [`LookController::cleanup`]
    /// replaces the previous registration.
    pub fn setup(&mut self, surface: &mut InputSurface) {
        if let Some(stale) = self.listener.take() {
            log::warn!(
                "Look controller set up twice without cleanup, replacing listener {:?}",
                stale
            );
            surface.remove_listener(stale);
        }
        self.listener = Some(surface.add_listener());
        self.pressed = false;
        self.last = Vec2::ZERO;
        self.current = Vec2::ZERO;
    }

    /// Drain pending pointer events, then apply the accumulated drag
    /// delta to `target`.
    ///
    /// Call once per simulation tick. Yaw accumulates without bound;
    /// pitch is clamped to the configured ascent range; any roll in the
    /// target's orientation is replaced with zero. With no pending delta
    /// the target is left untouched and no update mark is set.
    ///
    /// A session that ended since the last call still applies its final
    /// delta here before going quiet.
    pub fn update(&mut self, surface: &mut InputSurface, target: &mut dyn LookTarget) {
        if let Some(listener) = self.listener {
            while let Some(event) = surface.next_event(listener) {
                self.apply(event);
            }
        }

        if self.current == self.last {
            return;
        }
        let delta = self.current - self.last;
        self.last = self.current;

        let (yaw, pitch, _) = target.rotation().to_euler(EulerRot::YXZ);
        let (yaw, pitch) = integrate_angles(yaw, pitch, delta, &self.config);
        target.set_rotation(Quat::from_euler(EulerRot::YXZ, yaw, pitch, 0.0));
        target.set_updated();
    }

    /// Detach from `surface`, ending any live session and discarding the
    /// un-applied drag delta.
    ///
    /// Pass the surface that [`LookController::setup`] received. Calling
    /// this while detached is a no-op.
    pub fn cleanup(&mut self, surface: &mut InputSurface) {
        match self.listener.take() {
            Some(listener) => {
                if !surface.remove_listener(listener) {
                    log::warn!(
                        "Look controller listener {:?} was not registered on this surface",
                        listener
                    );
                }
                self.pressed = false;
                self.last = self.current;
            }
            None => {
                log::debug!("Look controller cleanup while detached, ignoring");
            }
        }
    }

    /// Whether the controller is attached to a surface.
    pub fn is_attached(&self) -> bool {
        self.listener.is_some()
    }

    /// Whether a look session is active (matching button held).
    pub fn is_dragging(&self) -> bool {
        self.pressed
    }

    /// Apply one pointer event to the session state machine.
    fn apply(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Pressed { button, x, y } => {
                if self.config.button.matches(button) {
                    self.pressed = true;
                    self.last = Vec2::new(x, y);
                    self.current = self.last;
                }
            }
            PointerEvent::Moved { x, y } => {
                if self.pressed {
                    self.current = Vec2::new(x, y);
                }
            }
            // A release of any button ends the session, as does the
            // pointer leaving the surface.
            PointerEvent::Released { .. } | PointerEvent::Exited => {
                self.pressed = false;
            }
        }
    }
}

/// Advance yaw/pitch by a pointer delta.
///
/// Pitch clamping uses `max().min()` instead of `clamp`: an inverted
/// ascent range must lock pitch at the upper bound, not panic.
fn integrate_angles(yaw: f32, pitch: f32, delta: Vec2, config: &LookConfig) -> (f32, f32) {
    let min_ascent = config.min_ascent_deg.to_radians();
    let max_ascent = config.max_ascent_deg.to_radians();

    let yaw = yaw + delta.x * config.speed / PIXELS_PER_RADIAN;
    let pitch = (pitch + delta.y * config.speed / PIXELS_PER_RADIAN)
        .max(min_ascent)
        .min(max_ascent);
    (yaw, pitch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::PointerButton;

    fn press(button: PointerButton, x: f32, y: f32) -> PointerEvent {
        PointerEvent::Pressed { button, x, y }
    }

    fn release(button: PointerButton) -> PointerEvent {
        PointerEvent::Released {
            button,
            x: 0.0,
            y: 0.0,
        }
    }

    // --- integration step ---

    #[test]
    fn yaw_step_matches_pixel_gain() {
        let config = LookConfig::default();
        let (yaw, pitch) = integrate_angles(0.0, 0.0, Vec2::new(50.0, 0.0), &config);
        // 50 px at speed 1.0 is 50 / 200 = 0.25 rad, exactly.
        assert_eq!(yaw, 0.25);
        assert_eq!(pitch, 0.0);
    }

    #[test]
    fn pitch_step_clamps_to_upper_ascent() {
        let config = LookConfig::new().with_ascent_range(-10.0, 10.0);
        let (_, pitch) = integrate_angles(0.0, 0.15, Vec2::new(0.0, 500.0), &config);
        assert_eq!(pitch, 10.0f32.to_radians());
    }

    #[test]
    fn pitch_step_clamps_to_lower_ascent() {
        let config = LookConfig::new().with_ascent_range(-10.0, 10.0);
        let (_, pitch) = integrate_angles(0.0, 0.0, Vec2::new(0.0, -500.0), &config);
        assert_eq!(pitch, (-10.0f32).to_radians());
    }

    #[test]
    fn pitch_inside_range_is_untouched() {
        let config = LookConfig::default();
        let (_, pitch) = integrate_angles(0.0, 0.1, Vec2::new(0.0, 20.0), &config);
        assert_eq!(pitch, 0.1 + 20.0 / 200.0);
    }

    #[test]
    fn negative_speed_inverts_both_axes() {
        let config = LookConfig::new().with_speed(-1.0);
        let (yaw, pitch) = integrate_angles(0.0, 0.0, Vec2::new(50.0, 100.0), &config);
        assert_eq!(yaw, -0.25);
        assert_eq!(pitch, -0.5);
    }

    #[test]
    fn inverted_ascent_range_locks_pitch_without_panic() {
        let config = LookConfig::new().with_ascent_range(10.0, -10.0);
        let upper = (-10.0f32).to_radians();

        let (_, up) = integrate_angles(0.0, 0.0, Vec2::new(0.0, 100.0), &config);
        let (_, down) = integrate_angles(0.0, 0.0, Vec2::new(0.0, -100.0), &config);
        assert_eq!(up, upper);
        assert_eq!(down, upper);
    }

    // --- session state machine ---

    #[test]
    fn matching_press_arms_the_session() {
        let mut controller = LookController::default();
        controller.apply(press(PointerButton::Left, 100.0, 100.0));
        assert!(controller.is_dragging());
        assert_eq!(controller.last, Vec2::new(100.0, 100.0));
        assert_eq!(controller.current, controller.last);
    }

    #[test]
    fn non_matching_press_is_ignored() {
        let mut controller = LookController::default();
        controller.apply(press(PointerButton::Right, 100.0, 100.0));
        assert!(!controller.is_dragging());
        assert_eq!(controller.current, Vec2::ZERO);
    }

    #[test]
    fn any_selector_arms_on_side_buttons() {
        let mut controller =
            LookController::new(LookConfig::new().with_button(ButtonSelector::Any));
        controller.apply(press(PointerButton::Other(6), 3.0, 4.0));
        assert!(controller.is_dragging());
    }

    #[test]
    fn any_release_ends_the_session() {
        let mut controller = LookController::default();
        controller.apply(press(PointerButton::Left, 10.0, 10.0));
        controller.apply(release(PointerButton::Right));
        assert!(!controller.is_dragging());
    }

    #[test]
    fn pointer_exit_ends_the_session() {
        let mut controller = LookController::default();
        controller.apply(press(PointerButton::Left, 10.0, 10.0));
        controller.apply(PointerEvent::Exited);
        assert!(!controller.is_dragging());
    }

    #[test]
    fn moves_are_ignored_while_idle() {
        let mut controller = LookController::default();
        controller.apply(PointerEvent::Moved { x: 40.0, y: 40.0 });
        assert_eq!(controller.current, Vec2::ZERO);
        assert_eq!(controller.last, Vec2::ZERO);
    }

    #[test]
    fn press_reanchors_pending_motion() {
        let mut controller = LookController::default();
        controller.apply(press(PointerButton::Left, 10.0, 10.0));
        controller.apply(PointerEvent::Moved { x: 20.0, y: 20.0 });
        controller.apply(press(PointerButton::Left, 30.0, 30.0));
        // The second press discards the drag accumulated before it.
        assert_eq!(controller.last, Vec2::new(30.0, 30.0));
        assert_eq!(controller.current, controller.last);
    }

    // --- attach lifecycle ---

    #[test]
    fn setup_twice_replaces_the_listener() {
        let mut surface = InputSurface::new();
        let mut controller = LookController::default();

        controller.setup(&mut surface);
        controller.setup(&mut surface);

        assert!(controller.is_attached());
        assert_eq!(surface.listener_count(), 1);
    }

    #[test]
    fn cleanup_while_detached_is_a_noop() {
        let mut surface = InputSurface::new();
        let mut controller = LookController::default();

        controller.cleanup(&mut surface);
        assert!(!controller.is_attached());
        assert_eq!(surface.listener_count(), 0);
    }

    #[test]
    fn cleanup_detaches_and_discards_pending_drag() {
        let mut surface = InputSurface::new();
        let mut controller = LookController::default();
        let mut node = crate::scene::SceneNode::new();

        controller.setup(&mut surface);
        surface.dispatch(press(PointerButton::Left, 5.0, 5.0));
        surface.dispatch(PointerEvent::Moved { x: 45.0, y: 5.0 });
        controller.update(&mut surface, &mut node);
        let after_drag = node.transform.rotation;

        surface.dispatch(PointerEvent::Moved { x: 85.0, y: 5.0 });
        controller.cleanup(&mut surface);
        assert!(!controller.is_attached());
        assert_eq!(surface.listener_count(), 0);

        node.clear_updated();
        controller.update(&mut surface, &mut node);
        assert_eq!(node.transform.rotation, after_drag);
        assert!(!node.is_updated());
    }
}
