//! Aim Zoom Module
//!
//! Tracks the aim-down-sights state and drives camera field-of-view toward
//! the matching target each tick. This is the single source of truth for
//! "is the player aiming"; turn-rate selection and spread aggregation read
//! it from here instead of keeping their own copies.
//!
//! Key features:
//! - Edge-triggered aim state (press/release events, never polled)
//! - Exponential FOV approach: no overshoot, frame-rate independent
//! - Pure state update, no failure modes

use serde::{Deserialize, Serialize};

/// Longest tick the interpolator will integrate; hitches clamp here.
const MAX_TICK_DT: f32 = 0.1;

/// Tunables for the aim zoom. Angles in degrees, speed per second.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomConfig {
    /// Camera field of view when not aiming
    pub default_fov: f32,
    /// Field of view when fully zoomed in
    pub zoomed_fov: f32,
    /// Exponential interpolation speed toward the target FOV
    pub interp_speed: f32,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            default_fov: 90.0, // hip view
            zoomed_fov: 35.0,  // sighted view
            interp_speed: 20.0,
        }
    }
}

/// Aim state plus the interpolated camera FOV it drives.
///
/// `current_fov` starts at `default_fov` and always stays inside
/// `[min(default_fov, zoomed_fov), max(default_fov, zoomed_fov)]`: the
/// per-tick movement fraction `1 - exp(-interp_speed * dt)` is below 1, so
/// the value can approach a target inside that interval but never cross it.
#[derive(Debug, Clone, Copy)]
pub struct AimZoom {
    config: ZoomConfig,
    is_aiming: bool,
    current_fov: f32,
}

impl Default for AimZoom {
    fn default() -> Self {
        Self::new()
    }
}

impl AimZoom {
    /// Creates a zoom controller with default tunables, not aiming.
    pub fn new() -> Self {
        Self::with_config(ZoomConfig::default())
    }

    /// Creates a zoom controller from explicit tunables.
    pub fn with_config(config: ZoomConfig) -> Self {
        Self {
            config,
            is_aiming: false,
            current_fov: config.default_fov,
        }
    }

    /// Aim button went down this tick.
    pub fn aim_pressed(&mut self) {
        self.is_aiming = true;
    }

    /// Aim button came up this tick.
    pub fn aim_released(&mut self) {
        self.is_aiming = false;
    }

    /// Whether the player is currently aiming.
    #[inline]
    pub fn is_aiming(&self) -> bool {
        self.is_aiming
    }

    /// The interpolated field of view in degrees.
    #[inline]
    pub fn current_fov(&self) -> f32 {
        self.current_fov
    }

    /// The FOV this controller is currently moving toward.
    #[inline]
    pub fn target_fov(&self) -> f32 {
        if self.is_aiming {
            self.config.zoomed_fov
        } else {
            self.config.default_fov
        }
    }

    /// The tunables this controller was built with.
    #[inline]
    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    /// Advances the FOV one tick toward the current target.
    ///
    /// Exponential-decay interpolation: the remaining distance shrinks by
    /// `exp(-interp_speed * dt)` per tick, so two 8 ms steps land where one
    /// 16 ms step does and the value never overshoots the target.
    pub fn advance(&mut self, dt: f32) {
        let dt = dt.clamp(0.0, MAX_TICK_DT);
        let target = self.target_fov();
        let fraction = 1.0 - (-self.config.interp_speed * dt).exp();
        self.current_fov += (target - self.current_fov) * fraction;
    }
}
