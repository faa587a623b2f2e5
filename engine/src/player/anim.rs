//! Animation Sampling Module
//!
//! Derives the per-tick values an animation layer blends on: ground speed,
//! airborne state, whether input is accelerating the character, how far the
//! movement direction is offset from the aim direction, and the aim state.
//! The engine plays no animations itself; this is the data feed.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

/// Lateral speeds below this count as standing still, in cm/s.
const MOVING_SPEED_EPSILON: f32 = 1.0;

/// One tick of animation-facing state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationSample {
    /// Lateral speed in cm/s (vertical motion excluded)
    pub ground_speed: f32,
    /// True while off the ground
    pub is_in_air: bool,
    /// True while movement input is being applied
    pub is_accelerating: bool,
    /// Signed angle from aim forward to movement direction, radians.
    /// Positive means moving to the right of the aim; zero when still.
    pub movement_offset_yaw: f32,
    /// The last nonzero movement offset, held through stops so a stopping
    /// animation knows which way the character was going
    pub last_movement_offset_yaw: f32,
    /// True while aiming down sights
    pub is_aiming: bool,
}

/// Produces [`AnimationSample`]s, carrying the held offset across ticks.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnimSampler {
    last_movement_offset_yaw: f32,
}

impl AnimSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample the animation state for this tick.
    ///
    /// `aim_yaw` is the control yaw in radians (where the camera points);
    /// the offset compares the velocity direction against it.
    pub fn sample(
        &mut self,
        velocity: Vec3,
        aim_yaw: f32,
        is_grounded: bool,
        is_accelerating: bool,
        is_aiming: bool,
    ) -> AnimationSample {
        let lateral = Vec3::new(velocity.x, 0.0, velocity.z);
        let ground_speed = lateral.length();

        let movement_offset_yaw = if ground_speed > MOVING_SPEED_EPSILON {
            let velocity_yaw = lateral.x.atan2(-lateral.z);
            let offset = wrap_angle(velocity_yaw - aim_yaw);
            self.last_movement_offset_yaw = offset;
            offset
        } else {
            0.0
        };

        AnimationSample {
            ground_speed,
            is_in_air: !is_grounded,
            is_accelerating,
            movement_offset_yaw,
            last_movement_offset_yaw: self.last_movement_offset_yaw,
            is_aiming,
        }
    }
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
