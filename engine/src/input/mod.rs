//! Input Module
//!
//! Provides platform-agnostic input handling for keyboard and mouse.
//! This module is decoupled from any specific windowing system
//! to allow for flexible integration.
//!
//! Input events arrive as press/release edges between ticks. At the start of
//! each tick the game takes an [`InputSnapshot`], which freezes the movement
//! axes, drains accumulated mouse motion, and derives one-tick pressed/released
//! edges for the bound actions. Everything downstream reads the snapshot, so
//! every system sees the same input for the whole tick.
//!
//! # Example
//!
//! ```rust,ignore
//! use hipfire_engine::input::{InputState, KeyCode, MouseButton};
//!
//! let mut input = InputState::new();
//!
//! // Events from the platform layer
//! input.handle_key(KeyCode::W, true);
//! input.handle_mouse_button(MouseButton::Right, true);
//! input.accumulate_mouse_delta(12.0, -3.0);
//!
//! // Tick start
//! let snapshot = input.begin_tick();
//! assert_eq!(snapshot.move_forward, 1.0);
//! assert!(snapshot.aim_pressed);
//! ```

pub mod bindings;
pub mod keyboard;

use std::collections::HashSet;

use glam::Vec2;

// Re-export commonly used types at module level
pub use bindings::{ActionBindings, InputAction, InputSource, MouseButton};
pub use keyboard::{KeyCode, MovementKeys};

/// One tick's worth of frozen input.
///
/// Edge fields (`*_pressed`, `*_released`) are true for exactly the one
/// snapshot taken after the transition happened.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    /// Forward/backward movement axis in [-1, 1]
    pub move_forward: f32,
    /// Right/left movement axis in [-1, 1]
    pub move_right: f32,
    /// Analog turn axis in [-1, 1] (gamepad right stick, horizontal)
    pub turn_axis: f32,
    /// Analog look axis in [-1, 1] (gamepad right stick, vertical)
    pub look_axis: f32,
    /// Mouse motion accumulated since the previous snapshot, in pixels
    pub mouse_delta: Vec2,
    /// Fire went down this tick
    pub fire_pressed: bool,
    /// Fire went up this tick
    pub fire_released: bool,
    /// Aim went down this tick
    pub aim_pressed: bool,
    /// Aim went up this tick
    pub aim_released: bool,
    /// Aim is currently held
    pub aim_held: bool,
    /// Jump went down this tick
    pub jump_pressed: bool,
    /// Jump is currently held
    pub jump_held: bool,
}

/// Combined input state for keyboard and mouse.
///
/// Collects raw events between ticks and produces an [`InputSnapshot`] at
/// tick start via [`InputState::begin_tick`].
#[derive(Debug, Clone)]
pub struct InputState {
    /// Action bindings in effect
    pub bindings: ActionBindings,
    /// Movement key states
    pub movement: MovementKeys,
    /// Every source currently held down
    pressed: HashSet<InputSource>,
    /// Mouse motion accumulated since the last snapshot, in pixels
    mouse_delta: Vec2,
    /// Analog turn axis, set directly by the platform layer
    turn_axis: f32,
    /// Analog look axis, set directly by the platform layer
    look_axis: f32,
    /// Action hold states at the previous snapshot, for edge derivation
    fire_was_held: bool,
    aim_was_held: bool,
    jump_was_held: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    /// Create a new input state with default bindings and nothing pressed.
    pub fn new() -> Self {
        Self::with_bindings(ActionBindings::new())
    }

    /// Create a new input state with custom bindings.
    pub fn with_bindings(bindings: ActionBindings) -> Self {
        Self {
            bindings,
            movement: MovementKeys::new(),
            pressed: HashSet::new(),
            mouse_delta: Vec2::ZERO,
            turn_axis: 0.0,
            look_axis: 0.0,
            fire_was_held: false,
            aim_was_held: false,
            jump_was_held: false,
        }
    }

    /// Handle a key press or release event.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        self.movement.handle_key(key, pressed);
        self.set_source(InputSource::Key(key), pressed);
    }

    /// Handle a mouse button press or release event.
    pub fn handle_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        self.set_source(InputSource::Mouse(button), pressed);
    }

    /// Accumulate relative mouse motion in pixels.
    ///
    /// Positive `dx` is rightward, positive `dy` is downward (screen space).
    pub fn accumulate_mouse_delta(&mut self, dx: f32, dy: f32) {
        self.mouse_delta.x += dx;
        self.mouse_delta.y += dy;
    }

    /// Set the analog turn axis (clamped to [-1, 1]).
    pub fn set_turn_axis(&mut self, value: f32) {
        self.turn_axis = value.clamp(-1.0, 1.0);
    }

    /// Set the analog look axis (clamped to [-1, 1]).
    pub fn set_look_axis(&mut self, value: f32) {
        self.look_axis = value.clamp(-1.0, 1.0);
    }

    /// Check if an action's bound source is currently held down.
    pub fn is_action_held(&self, action: InputAction) -> bool {
        self.bindings.is_action_pressed(action, &self.pressed)
    }

    /// Take the per-tick snapshot.
    ///
    /// Drains accumulated mouse motion and computes action edges against the
    /// previous snapshot. Call exactly once per tick, at tick start.
    pub fn begin_tick(&mut self) -> InputSnapshot {
        let fire_held = self.is_action_held(InputAction::Fire);
        let aim_held = self.is_action_held(InputAction::Aim);
        let jump_held = self.is_action_held(InputAction::Jump);

        let snapshot = InputSnapshot {
            move_forward: self.movement.forward_axis(),
            move_right: self.movement.right_axis(),
            turn_axis: self.turn_axis,
            look_axis: self.look_axis,
            mouse_delta: std::mem::take(&mut self.mouse_delta),
            fire_pressed: fire_held && !self.fire_was_held,
            fire_released: !fire_held && self.fire_was_held,
            aim_pressed: aim_held && !self.aim_was_held,
            aim_released: !aim_held && self.aim_was_held,
            aim_held,
            jump_pressed: jump_held && !self.jump_was_held,
            jump_held,
        };

        self.fire_was_held = fire_held;
        self.aim_was_held = aim_held;
        self.jump_was_held = jump_held;

        snapshot
    }

    /// Reset all input state to defaults, keeping the bindings.
    pub fn reset(&mut self) {
        self.movement.reset();
        self.pressed.clear();
        self.mouse_delta = Vec2::ZERO;
        self.turn_axis = 0.0;
        self.look_axis = 0.0;
        self.fire_was_held = false;
        self.aim_was_held = false;
        self.jump_was_held = false;
    }

    fn set_source(&mut self, source: InputSource, pressed: bool) {
        if pressed {
            self.pressed.insert(source);
        } else {
            self.pressed.remove(&source);
        }
    }
}
