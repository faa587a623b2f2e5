//! Crosshair Spread Module
//!
//! Folds the character's kinematic and combat state into one scalar the HUD
//! scales its crosshair by. Recomputed every tick from that tick's snapshot;
//! the only state carried across ticks is the interpolated air/aim factors
//! and the shooting timer.
//!
//! Factor summary:
//! - velocity: lateral speed remapped [0, max walk speed] -> [0, 1], clamped
//! - in-air: eases toward a constant while airborne, eases back on landing
//! - aim: a tightening (subtracted) magnitude while aiming
//! - shooting: retriggerable one-shot kick that decays over a fixed window

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Longest tick the interpolators will integrate; hitches clamp here.
const MAX_TICK_DT: f32 = 0.1;

/// Spread tunables. Speeds in units/s, durations in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpreadConfig {
    /// Spread with no factors contributing
    pub baseline: f32,
    /// Lateral speed that maps to a full velocity factor of 1
    pub max_walk_speed: f32,
    /// In-air factor target while airborne
    pub in_air_target: f32,
    /// Interpolation speed of the in-air factor while rising
    pub in_air_rise_speed: f32,
    /// Interpolation speed of the in-air factor after landing
    pub in_air_recover_speed: f32,
    /// Aim factor magnitude (subtracted from the total while aiming)
    pub aim_tightening: f32,
    /// Interpolation speed of the aim factor both ways
    pub aim_interp_speed: f32,
    /// Shooting factor value at the moment of firing
    pub shoot_peak: f32,
    /// Time for the shooting factor to decay back to zero
    pub shoot_duration: f32,
    /// Lower clamp on the final multiplier
    pub min_spread: f32,
    /// Upper clamp on the final multiplier
    pub max_spread: f32,
}

impl Default for SpreadConfig {
    fn default() -> Self {
        Self {
            baseline: 0.5,
            max_walk_speed: 600.0,
            in_air_target: 2.25,
            in_air_rise_speed: 2.25,    // drift wide slowly while falling
            in_air_recover_speed: 30.0, // tighten fast on landing
            aim_tightening: 0.6,
            aim_interp_speed: 30.0,
            shoot_peak: 0.3,
            shoot_duration: 0.2,
            min_spread: 0.0,
            max_spread: 3.0,
        }
    }
}

/// Read-only view of the individual factor values from the last recompute.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpreadFactors {
    /// Lateral speed contribution in [0, 1]
    pub velocity_factor: f32,
    /// Airborne contribution in [0, in_air_target]
    pub in_air_factor: f32,
    /// Aim tightening magnitude in [0, aim_tightening]; subtracted
    pub aim_factor: f32,
    /// Recent-fire contribution in [0, shoot_peak]
    pub shooting_factor: f32,
}

/// Per-tick crosshair spread aggregator.
#[derive(Debug, Clone, Copy)]
pub struct CrosshairSpread {
    config: SpreadConfig,
    factors: SpreadFactors,
    /// Time since the last fire event; at or past `shoot_duration` the
    /// shooting factor is zero.
    shoot_elapsed: f32,
    multiplier: f32,
}

/// First-order exponential approach used by the interpolated factors.
fn approach(current: f32, target: f32, speed: f32, dt: f32) -> f32 {
    current + (target - current) * (1.0 - (-speed * dt).exp())
}

impl Default for CrosshairSpread {
    fn default() -> Self {
        Self::new()
    }
}

impl CrosshairSpread {
    /// Creates an aggregator with default tunables.
    pub fn new() -> Self {
        Self::with_config(SpreadConfig::default())
    }

    /// Creates an aggregator from explicit tunables.
    pub fn with_config(config: SpreadConfig) -> Self {
        Self {
            config,
            factors: SpreadFactors::default(),
            shoot_elapsed: config.shoot_duration,
            multiplier: config.baseline.clamp(config.min_spread, config.max_spread),
        }
    }

    /// The tunables this aggregator was built with.
    #[inline]
    pub fn config(&self) -> &SpreadConfig {
        &self.config
    }

    /// The multiplier from the last recompute.
    #[inline]
    pub fn multiplier(&self) -> f32 {
        self.multiplier
    }

    /// The factor breakdown from the last recompute.
    #[inline]
    pub fn factors(&self) -> SpreadFactors {
        self.factors
    }

    /// Recomputes the spread for this tick and returns the new multiplier.
    ///
    /// `just_fired` retriggers the shooting timer: the factor jumps to its
    /// peak immediately and a shot fired mid-decay resets the timer rather
    /// than stacking on top of it.
    pub fn recompute(
        &mut self,
        velocity: Vec3,
        is_airborne: bool,
        is_aiming: bool,
        just_fired: bool,
        dt: f32,
    ) -> f32 {
        let dt = dt.clamp(0.0, MAX_TICK_DT);
        let cfg = &self.config;

        // Lateral speed only; falling fast is the in-air factor's business
        let lateral = Vec3::new(velocity.x, 0.0, velocity.z);
        self.factors.velocity_factor = if cfg.max_walk_speed > 0.0 {
            (lateral.length() / cfg.max_walk_speed).clamp(0.0, 1.0)
        } else {
            0.0
        };

        let (air_target, air_speed) = if is_airborne {
            (cfg.in_air_target, cfg.in_air_rise_speed)
        } else {
            (0.0, cfg.in_air_recover_speed)
        };
        self.factors.in_air_factor = approach(self.factors.in_air_factor, air_target, air_speed, dt);

        let aim_target = if is_aiming { cfg.aim_tightening } else { 0.0 };
        self.factors.aim_factor =
            approach(self.factors.aim_factor, aim_target, cfg.aim_interp_speed, dt);

        if just_fired {
            self.shoot_elapsed = 0.0;
        } else {
            self.shoot_elapsed = (self.shoot_elapsed + dt).min(cfg.shoot_duration);
        }
        self.factors.shooting_factor = if self.shoot_elapsed < cfg.shoot_duration {
            cfg.shoot_peak * (1.0 - self.shoot_elapsed / cfg.shoot_duration)
        } else {
            0.0
        };

        self.multiplier = (cfg.baseline + self.factors.velocity_factor + self.factors.in_air_factor
            - self.factors.aim_factor
            + self.factors.shooting_factor)
            .clamp(cfg.min_spread, cfg.max_spread);
        self.multiplier
    }
}
