//! Character Movement Module
//!
//! Ground movement for the playable character. Movement input is relative to
//! the control (camera) yaw, the body orients toward the direction of travel,
//! and jumping/gravity run on a flat ground plane supplied per tick.
//!
//! # Physics Model
//!
//! All distances are in world units (centimeters), so speeds are cm/s:
//!
//! - Max walk speed: 600.0
//! - Acceleration: 2048.0
//! - Braking deceleration: 2048.0 (ground only; no lateral friction while falling)
//! - Jump velocity: 600.0
//! - Gravity: 980.0
//! - Air control: 0.2 (fraction of ground acceleration available while airborne)
//!
//! # Usage
//!
//! ```rust,ignore
//! use hipfire_engine::player::CharacterMovement;
//!
//! let mut movement = CharacterMovement::new();
//!
//! // Each tick:
//! if input.jump_pressed {
//!     movement.try_jump();
//! }
//! movement.update(dt, input.move_forward, input.move_right, camera_yaw, 0.0);
//! ```

use std::f32::consts::{PI, TAU};

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Max walk speed in cm/s
pub const MAX_WALK_SPEED: f32 = 600.0;

/// Horizontal acceleration in cm/s^2
pub const ACCELERATION: f32 = 2048.0;

/// Braking deceleration in cm/s^2, applied on the ground when input stops
pub const BRAKING_DECELERATION: f32 = 2048.0;

/// Upward velocity granted by a jump, in cm/s
pub const JUMP_VELOCITY: f32 = 600.0;

/// Gravity acceleration in cm/s^2
pub const GRAVITY: f32 = 980.0;

/// Fraction of ground acceleration available while airborne
pub const AIR_CONTROL: f32 = 0.2;

/// Coyote time duration in seconds
/// Allows jumping shortly after leaving ground
pub const COYOTE_TIME: f32 = 0.1;

/// Rate at which the body turns toward its movement direction, in deg/s
pub const ORIENT_RATE_DEG: f32 = 540.0;

/// Tunable movement parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovementConfig {
    /// Max walk speed in cm/s
    pub max_walk_speed: f32,
    /// Horizontal acceleration in cm/s^2
    pub acceleration: f32,
    /// Braking deceleration in cm/s^2 (ground only)
    pub braking_deceleration: f32,
    /// Upward velocity granted by a jump, in cm/s
    pub jump_velocity: f32,
    /// Gravity acceleration in cm/s^2
    pub gravity: f32,
    /// Fraction of ground acceleration available while airborne
    pub air_control: f32,
    /// Seconds after leaving the ground during which a jump is still allowed
    pub coyote_time: f32,
    /// Body turn rate toward movement direction, in deg/s
    pub orient_rate_deg: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            max_walk_speed: MAX_WALK_SPEED,           // 600.0
            acceleration: ACCELERATION,               // 2048.0
            braking_deceleration: BRAKING_DECELERATION, // 2048.0
            jump_velocity: JUMP_VELOCITY,             // 600.0
            gravity: GRAVITY,                         // 980.0
            air_control: AIR_CONTROL,                 // 0.2
            coyote_time: COYOTE_TIME,                 // 0.1
            orient_rate_deg: ORIENT_RATE_DEG,         // 540.0
        }
    }
}

/// Character movement state with camera-relative input and smooth acceleration.
///
/// Forward/backward input moves along the control yaw's forward axis (XZ
/// plane), left/right input strafes perpendicular to it. The body yaw turns
/// toward the direction of acceleration at a fixed rate, taking the shorter
/// arc, so the character faces where it is going regardless of where the
/// camera looks.
#[derive(Debug, Clone)]
pub struct CharacterMovement {
    config: MovementConfig,

    /// World position of the character's feet
    position: Vec3,

    /// Horizontal velocity in world space (Y always zero)
    horizontal_velocity: Vec3,

    /// Vertical velocity in cm/s (positive = upward)
    vertical_velocity: f32,

    /// Body yaw in radians; 0 faces -Z, positive turns right
    facing_yaw: f32,

    /// Whether the character is currently on the ground
    is_grounded: bool,

    /// Time remaining in which a jump is still allowed after leaving ground
    coyote_time_remaining: f32,

    /// Whether the last update had nonzero movement input
    has_input: bool,
}

impl Default for CharacterMovement {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterMovement {
    /// Create a movement state with default tuning, standing at the origin.
    pub fn new() -> Self {
        Self::with_config(MovementConfig::default())
    }

    /// Create a movement state with custom tuning.
    pub fn with_config(config: MovementConfig) -> Self {
        Self {
            config,
            position: Vec3::ZERO,
            horizontal_velocity: Vec3::ZERO,
            vertical_velocity: 0.0,
            facing_yaw: 0.0,
            is_grounded: true,
            coyote_time_remaining: 0.0,
            has_input: false,
        }
    }

    /// Current world position of the character's feet.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Teleport the character, zeroing velocity.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.horizontal_velocity = Vec3::ZERO;
        self.vertical_velocity = 0.0;
    }

    /// Current velocity in world space, vertical component included.
    #[inline]
    pub fn velocity(&self) -> Vec3 {
        Vec3::new(
            self.horizontal_velocity.x,
            self.vertical_velocity,
            self.horizontal_velocity.z,
        )
    }

    /// Current horizontal speed (XZ plane only).
    #[inline]
    pub fn horizontal_speed(&self) -> f32 {
        self.horizontal_velocity.length()
    }

    /// Body yaw in radians.
    #[inline]
    pub fn facing_yaw(&self) -> f32 {
        self.facing_yaw
    }

    /// Set the body yaw directly (spawn orientation).
    pub fn set_facing_yaw(&mut self, yaw: f32) {
        self.facing_yaw = wrap_angle(yaw);
    }

    /// Whether the character is standing on the ground.
    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.is_grounded
    }

    /// Whether the last update had nonzero movement input.
    #[inline]
    pub fn is_accelerating(&self) -> bool {
        self.has_input
    }

    /// Remaining coyote time in seconds.
    #[inline]
    pub fn coyote_time_remaining(&self) -> f32 {
        self.coyote_time_remaining
    }

    /// Whether a jump is currently allowed (grounded or within coyote time).
    pub fn can_jump(&self) -> bool {
        self.is_grounded || self.coyote_time_remaining > 0.0
    }

    /// The active tuning.
    #[inline]
    pub fn config(&self) -> &MovementConfig {
        &self.config
    }

    /// Attempt to jump. Returns `true` if the jump was initiated.
    ///
    /// Allowed when grounded or within coyote time after leaving the ground.
    pub fn try_jump(&mut self) -> bool {
        if self.can_jump() {
            self.vertical_velocity = self.config.jump_velocity;
            self.is_grounded = false;
            self.coyote_time_remaining = 0.0;
            true
        } else {
            false
        }
    }

    /// Advance the character by one tick and return the resulting velocity.
    ///
    /// `move_forward` and `move_right` are input axes in [-1, 1], interpreted
    /// relative to `control_yaw` (the camera yaw, radians). `ground_height` is
    /// the Y coordinate of the ground under the character this tick.
    ///
    /// Order per tick: horizontal acceleration or braking, gravity, position
    /// integration, ground resolution, then body orientation.
    pub fn update(
        &mut self,
        dt: f32,
        move_forward: f32,
        move_right: f32,
        control_yaw: f32,
        ground_height: f32,
    ) -> Vec3 {
        // Clamp delta time to prevent physics explosions
        let dt = dt.clamp(0.0001, 0.1);

        // Input direction in world space, relative to the control yaw.
        // Diagonal input is clamped so it is not faster than a single axis.
        let forward = control_forward(control_yaw);
        let right = control_right(control_yaw);
        let wish = (forward * move_forward + right * move_right).clamp_length_max(1.0);
        self.has_input = wish.length_squared() > 0.001;

        if self.has_input {
            // Airborne steering only gets a fraction of ground acceleration
            let accel = if self.is_grounded {
                self.config.acceleration
            } else {
                self.config.acceleration * self.config.air_control
            };

            let target_velocity = wish * self.config.max_walk_speed;
            let velocity_diff = target_velocity - self.horizontal_velocity;
            let accel_this_tick = accel * dt;

            if velocity_diff.length() <= accel_this_tick {
                // Reached target velocity
                self.horizontal_velocity = target_velocity;
            } else {
                self.horizontal_velocity += velocity_diff.normalize() * accel_this_tick;
            }
        } else if self.is_grounded {
            // Brake to a stop
            let current_speed = self.horizontal_velocity.length();

            if current_speed > 0.001 {
                let brake_this_tick = self.config.braking_deceleration * dt;

                if current_speed <= brake_this_tick {
                    self.horizontal_velocity = Vec3::ZERO;
                } else {
                    let direction = self.horizontal_velocity / current_speed;
                    self.horizontal_velocity = direction * (current_speed - brake_this_tick);
                }
            } else {
                self.horizontal_velocity = Vec3::ZERO;
            }
        }
        // Airborne with no input: horizontal velocity carries unchanged

        // Gravity with midpoint integration for accuracy at large dt
        let prev_vertical_velocity = self.vertical_velocity;
        self.vertical_velocity -= self.config.gravity * dt;
        let delta_y = (prev_vertical_velocity + self.vertical_velocity) * 0.5 * dt;

        if !self.is_grounded {
            self.coyote_time_remaining = (self.coyote_time_remaining - dt).max(0.0);
        }

        self.position += self.horizontal_velocity * dt;
        self.position.y += delta_y;

        if self.position.y <= ground_height {
            // Landed (or standing): clamp to the ground plane
            self.position.y = ground_height;
            self.vertical_velocity = 0.0;
            self.is_grounded = true;
            self.coyote_time_remaining = self.config.coyote_time;
        } else if self.is_grounded {
            // Just left the ground; start coyote time
            self.is_grounded = false;
            self.coyote_time_remaining = self.config.coyote_time;
        }

        // Turn the body toward the acceleration direction, shorter arc
        if self.has_input {
            let desired_yaw = wish.x.atan2(-wish.z);
            let delta = wrap_angle(desired_yaw - self.facing_yaw);
            let step = self.config.orient_rate_deg.to_radians() * dt;

            if delta.abs() <= step {
                self.facing_yaw = desired_yaw;
            } else {
                self.facing_yaw = wrap_angle(self.facing_yaw + step.copysign(delta));
            }
        }

        self.velocity()
    }
}

/// Forward direction on the XZ plane for a control yaw; yaw 0 faces -Z.
fn control_forward(yaw: f32) -> Vec3 {
    Vec3::new(yaw.sin(), 0.0, -yaw.cos())
}

/// Right direction on the XZ plane, perpendicular to forward.
fn control_right(yaw: f32) -> Vec3 {
    Vec3::new(yaw.cos(), 0.0, yaw.sin())
}

/// Wrap an angle to the (-PI, PI] range.
fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle % TAU;
    if wrapped > PI {
        wrapped - TAU
    } else if wrapped < -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}
