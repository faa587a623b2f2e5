//! Camera Boom Module
//!
//! Third-person spring arm: positions the camera behind and above the
//! character with an over-the-shoulder offset, lags it smoothly toward that
//! target, and optionally pulls it in when geometry sits between the
//! character and the ideal camera spot.
//!
//! The boom only produces a position; orientation comes from the control
//! rotation and is applied to the camera view by the caller.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Longest tick the lag interpolator will integrate; hitches clamp here.
const MAX_TICK_DT: f32 = 0.1;

/// Spring arm tunables. Distances in world units (cm), lag speed per second.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoomConfig {
    /// Distance from the pivot to the ideal camera position
    pub arm_length: f32,
    /// Height of the boom pivot above the character position
    pub pivot_height: f32,
    /// Sideways shoulder offset applied at the arm end
    pub socket_offset_right: f32,
    /// Vertical offset applied at the arm end
    pub socket_offset_up: f32,
    /// Exponential lag speed of the camera position
    pub lag_speed: f32,
    /// Keep-out distance between the camera and blocking geometry
    pub probe_radius: f32,
}

impl Default for BoomConfig {
    fn default() -> Self {
        Self {
            arm_length: 300.0,
            pivot_height: 90.0,
            socket_offset_right: 50.0, // over the right shoulder
            socket_offset_up: 70.0,
            lag_speed: 5.0,
            probe_radius: 12.0,
        }
    }
}

/// Lagged third-person camera position.
#[derive(Debug, Clone, Copy)]
pub struct CameraBoom {
    config: BoomConfig,
    position: Vec3,
    initialized: bool,
}

impl Default for CameraBoom {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraBoom {
    /// Creates a boom with default tunables.
    pub fn new() -> Self {
        Self::with_config(BoomConfig::default())
    }

    /// Creates a boom from explicit tunables.
    pub fn with_config(config: BoomConfig) -> Self {
        Self {
            config,
            position: Vec3::ZERO,
            initialized: false,
        }
    }

    /// The tunables this boom was built with.
    #[inline]
    pub fn config(&self) -> &BoomConfig {
        &self.config
    }

    /// The current (lagged) camera position.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// The boom pivot for a character position: where the arm attaches.
    #[inline]
    pub fn anchor(&self, character_position: Vec3) -> Vec3 {
        character_position + Vec3::Y * self.config.pivot_height
    }

    /// The ideal (un-lagged, un-collided) camera position for a pose.
    ///
    /// Angles are the control rotation in radians; yaw 0 faces -Z.
    pub fn ideal_position(&self, character_position: Vec3, yaw: f32, pitch: f32) -> Vec3 {
        let forward = Vec3::new(
            yaw.sin() * pitch.cos(),
            pitch.sin(),
            -yaw.cos() * pitch.cos(),
        );
        let right = Vec3::new(yaw.cos(), 0.0, yaw.sin());

        self.anchor(character_position) - forward * self.config.arm_length
            + right * self.config.socket_offset_right
            + Vec3::Y * self.config.socket_offset_up
    }

    /// Advances the boom one tick without any collision probing.
    pub fn update(&mut self, character_position: Vec3, yaw: f32, pitch: f32, dt: f32) -> Vec3 {
        self.update_with_collision(character_position, yaw, pitch, dt, |_, _, _| None)
    }

    /// Advances the boom one tick, probing for geometry along the arm.
    ///
    /// `collision_check` receives `(origin, direction, max_distance)` for the
    /// anchor-to-ideal-camera segment and returns the distance to the first
    /// blocking hit, if any; the camera is pulled in to `probe_radius` short
    /// of that hit. The caller decides which trace channel the probe uses.
    ///
    /// The first update snaps to the target; later updates lag exponentially
    /// at `lag_speed`.
    pub fn update_with_collision<F>(
        &mut self,
        character_position: Vec3,
        yaw: f32,
        pitch: f32,
        dt: f32,
        collision_check: F,
    ) -> Vec3
    where
        F: FnOnce(Vec3, Vec3, f32) -> Option<f32>,
    {
        let anchor = self.anchor(character_position);
        let mut target = self.ideal_position(character_position, yaw, pitch);

        let to_camera = target - anchor;
        let distance = to_camera.length();
        if distance > 1e-3 {
            let direction = to_camera / distance;
            if let Some(hit_distance) = collision_check(anchor, direction, distance) {
                let safe = (hit_distance - self.config.probe_radius)
                    .clamp(self.config.probe_radius, distance);
                target = anchor + direction * safe;
            }
        }

        if self.initialized {
            let fraction = 1.0 - (-self.config.lag_speed * dt.clamp(0.0, MAX_TICK_DT)).exp();
            self.position += (target - self.position) * fraction;
        } else {
            self.position = target;
            self.initialized = true;
        }
        self.position
    }

    /// Teleports the boom to the ideal position for a pose (no lag).
    pub fn snap_to(&mut self, character_position: Vec3, yaw: f32, pitch: f32) {
        self.position = self.ideal_position(character_position, yaw, pitch);
        self.initialized = true;
    }
}
