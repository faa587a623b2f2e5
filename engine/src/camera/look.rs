//! Look Control Module
//!
//! The control rotation (where the player is steering the camera) plus the
//! hip/aiming sensitivity split. Stick input turns at a fixed rate in
//! degrees per second; mouse input applies a per-pixel sensitivity. Both
//! pick their rate from the current aim state, which is a pure lookup here,
//! not a second copy of the state machine.
//!
//! Key features:
//! - Stick turn/look at configurable degrees/second, separate hip and aim rates
//! - Mouse sensitivity (rad/pixel) with hip and aim scale factors
//! - Pitch clamped to ±89 degrees to prevent gimbal lock

use serde::{Deserialize, Serialize};

/// Pitch limit constant: -89 degrees in radians
const PITCH_LIMIT_MIN: f32 = -89.0 * std::f32::consts::PI / 180.0;
/// Pitch limit constant: +89 degrees in radians
const PITCH_LIMIT_MAX: f32 = 89.0 * std::f32::consts::PI / 180.0;

/// Turn/look sensitivity tunables.
///
/// Stick rates are in degrees per second at full deflection; mouse scales
/// multiply the base sensitivity while hip firing or aiming respectively.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LookConfig {
    /// Stick yaw rate while hip firing (deg/s)
    pub hip_turn_rate: f32,
    /// Stick pitch rate while hip firing (deg/s)
    pub hip_look_up_rate: f32,
    /// Stick yaw rate while aiming (deg/s)
    pub aim_turn_rate: f32,
    /// Stick pitch rate while aiming (deg/s)
    pub aim_look_up_rate: f32,
    /// Base mouse sensitivity in radians per pixel
    pub mouse_sensitivity: f32,
    /// Mouse multiplier while hip firing
    pub hip_mouse_scale: f32,
    /// Mouse multiplier while aiming
    pub aim_mouse_scale: f32,
}

impl Default for LookConfig {
    fn default() -> Self {
        Self {
            hip_turn_rate: 90.0,
            hip_look_up_rate: 90.0,
            aim_turn_rate: 20.0,
            aim_look_up_rate: 20.0,
            mouse_sensitivity: 0.002, // rad/pixel
            hip_mouse_scale: 1.0,
            aim_mouse_scale: 0.2,
        }
    }
}

impl LookConfig {
    /// Stick (turn, look-up) rates in deg/s for the given aim state.
    #[inline]
    pub fn stick_rates(&self, is_aiming: bool) -> (f32, f32) {
        if is_aiming {
            (self.aim_turn_rate, self.aim_look_up_rate)
        } else {
            (self.hip_turn_rate, self.hip_look_up_rate)
        }
    }

    /// Mouse scale factor for the given aim state.
    #[inline]
    pub fn mouse_scale(&self, is_aiming: bool) -> f32 {
        if is_aiming {
            self.aim_mouse_scale
        } else {
            self.hip_mouse_scale
        }
    }
}

/// Control rotation state driven by stick rates and mouse deltas.
///
/// Yaw is unrestricted and wraps; pitch is clamped. Angles are radians;
/// yaw 0 faces -Z and positive yaw turns right, matching the camera view.
#[derive(Debug, Clone, Copy)]
pub struct LookController {
    /// Horizontal control angle (radians)
    pub yaw: f32,
    /// Vertical control angle (radians), clamped to ±89 degrees
    pub pitch: f32,
    config: LookConfig,
}

impl Default for LookController {
    fn default() -> Self {
        Self::new()
    }
}

impl LookController {
    /// Creates a controller with default sensitivity, facing -Z.
    pub fn new() -> Self {
        Self::with_config(LookConfig::default())
    }

    /// Creates a controller from explicit tunables.
    pub fn with_config(config: LookConfig) -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            config,
        }
    }

    /// The tunables this controller was built with.
    #[inline]
    pub fn config(&self) -> &LookConfig {
        &self.config
    }

    /// Set the yaw angle directly (in radians)
    #[inline]
    pub fn set_yaw(&mut self, yaw: f32) {
        self.yaw = yaw;
    }

    /// Set the pitch angle directly (in radians, will be clamped)
    #[inline]
    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch.clamp(PITCH_LIMIT_MIN, PITCH_LIMIT_MAX);
    }

    /// Applies stick yaw input for one tick.
    ///
    /// `axis` is the stick deflection in [-1, 1]; full deflection turns at
    /// the configured rate for the current aim state.
    pub fn turn_at_rate(&mut self, axis: f32, is_aiming: bool, dt: f32) {
        let (turn_rate, _) = self.config.stick_rates(is_aiming);
        self.yaw += axis * turn_rate.to_radians() * dt;
    }

    /// Applies stick pitch input for one tick. Positive axis looks up.
    pub fn look_up_at_rate(&mut self, axis: f32, is_aiming: bool, dt: f32) {
        let (_, look_rate) = self.config.stick_rates(is_aiming);
        self.set_pitch(self.pitch + axis * look_rate.to_radians() * dt);
    }

    /// Applies a raw mouse delta in pixels.
    ///
    /// Positive `dx` looks right; positive `dy` looks down (standard FPS
    /// convention). The aim-state scale shrinks the response while sighted.
    pub fn apply_mouse_delta(&mut self, dx: f32, dy: f32, is_aiming: bool) {
        let scale = self.config.mouse_sensitivity * self.config.mouse_scale(is_aiming);
        self.yaw += dx * scale;
        self.set_pitch(self.pitch - dy * scale);
    }
}
