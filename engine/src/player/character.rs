//! Shooter Character Module
//!
//! The playable character: owns movement, the control rotation, aim zoom,
//! crosshair spread, the rig, and the fire loadout, and advances them in a
//! fixed order from one input snapshot per tick.
//!
//! # Tick order
//!
//! 1. Aim edges update the zoom state (the single source of aim truth)
//! 2. Look input rotates the control yaw/pitch at the aim-dependent rate
//! 3. Jump edge, then movement integration against the ground height
//! 4. FOV interpolation
//! 5. Fire edge resolves the shot and dispatches effects
//! 6. Spread recomputes from this tick's settled state
//! 7. Animation values are sampled last
//!
//! Every stage reads the same snapshot, so a tick is one consistent unit:
//! firing, spread, and animation all see the aim state the snapshot's edges
//! produced, never a half-updated mix.
//!
//! # Usage
//!
//! ```rust,ignore
//! use hipfire_engine::player::ShooterCharacter;
//!
//! let mut character = ShooterCharacter::new();
//!
//! // Each tick:
//! let snapshot = input.begin_tick();
//! let shot = character.update(&snapshot, dt, 0.0, &camera_view, &scene, &mut effects);
//! if let Some(result) = shot {
//!     // result.impact_point is where the round landed
//! }
//! ```

use glam::Vec3;

use crate::camera::look::LookController;
use crate::camera::view::ScreenProjector;
use crate::camera::zoom::AimZoom;
use crate::combat::effects::{EffectKind, EffectSink, FireLoadout, FIRE_MONTAGE_SECTION};
use crate::combat::spread::{CrosshairSpread, SpreadFactors};
use crate::combat::trace::{crosshair_aim_point, resolve_impact, TraceRequest, TraceResult};
use crate::config::ShooterConfig;
use crate::input::InputSnapshot;
use crate::physics::collision::RayCaster;

use super::anim::{AnimSampler, AnimationSample};
use super::movement::CharacterMovement;
use super::rig::{CharacterRig, BARREL_SOCKET};

/// The playable third-person shooter character.
#[derive(Debug, Clone)]
pub struct ShooterCharacter {
    movement: CharacterMovement,
    look: LookController,
    zoom: AimZoom,
    spread: CrosshairSpread,
    rig: CharacterRig,
    anim: AnimSampler,
    loadout: FireLoadout,
    /// Animation values from the end of the last tick
    last_anim: AnimationSample,
}

impl Default for ShooterCharacter {
    fn default() -> Self {
        Self::new()
    }
}

impl ShooterCharacter {
    /// Create a character with default tuning and the stock rifle loadout.
    pub fn new() -> Self {
        Self::with_config(&ShooterConfig::default())
    }

    /// Create a character from explicit tuning.
    pub fn with_config(config: &ShooterConfig) -> Self {
        Self {
            movement: CharacterMovement::with_config(config.movement),
            look: LookController::with_config(config.look),
            zoom: AimZoom::with_config(config.zoom),
            spread: CrosshairSpread::with_config(config.spread),
            rig: CharacterRig::new(),
            anim: AnimSampler::new(),
            loadout: FireLoadout::rifle(),
            last_anim: AnimationSample::default(),
        }
    }

    /// Place the character at a position, facing and looking along a yaw.
    pub fn spawn_at(&mut self, position: Vec3, yaw: f32) {
        self.movement.set_position(position);
        self.movement.set_facing_yaw(yaw);
        self.look.set_yaw(yaw);
        self.look.set_pitch(0.0);
    }

    /// World position of the character's feet.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.movement.position()
    }

    /// Current velocity, vertical included.
    #[inline]
    pub fn velocity(&self) -> Vec3 {
        self.movement.velocity()
    }

    /// Whether the player is aiming down sights.
    #[inline]
    pub fn is_aiming(&self) -> bool {
        self.zoom.is_aiming()
    }

    /// Camera FOV the zoom has interpolated to, in degrees.
    #[inline]
    pub fn current_fov(&self) -> f32 {
        self.zoom.current_fov()
    }

    /// Crosshair spread multiplier from the last tick.
    #[inline]
    pub fn spread_multiplier(&self) -> f32 {
        self.spread.multiplier()
    }

    /// Spread factor breakdown from the last tick.
    #[inline]
    pub fn spread_factors(&self) -> SpreadFactors {
        self.spread.factors()
    }

    /// Animation values sampled at the end of the last tick.
    #[inline]
    pub fn animation(&self) -> AnimationSample {
        self.last_anim
    }

    #[inline]
    pub fn movement(&self) -> &CharacterMovement {
        &self.movement
    }

    #[inline]
    pub fn movement_mut(&mut self) -> &mut CharacterMovement {
        &mut self.movement
    }

    #[inline]
    pub fn look(&self) -> &LookController {
        &self.look
    }

    #[inline]
    pub fn look_mut(&mut self) -> &mut LookController {
        &mut self.look
    }

    #[inline]
    pub fn zoom(&self) -> &AimZoom {
        &self.zoom
    }

    #[inline]
    pub fn spread(&self) -> &CrosshairSpread {
        &self.spread
    }

    #[inline]
    pub fn rig(&self) -> &CharacterRig {
        &self.rig
    }

    #[inline]
    pub fn rig_mut(&mut self) -> &mut CharacterRig {
        &mut self.rig
    }

    #[inline]
    pub fn loadout(&self) -> &FireLoadout {
        &self.loadout
    }

    /// Replace the fire loadout.
    pub fn set_loadout(&mut self, loadout: FireLoadout) {
        self.loadout = loadout;
    }

    /// Advance the character by one tick.
    ///
    /// `ground_height` is the ground Y under the character this tick. The
    /// projector and scene are the camera and world the shot (if any)
    /// resolves against; effects go to `effects`.
    ///
    /// Returns the fire resolution when a shot was fired this tick: `None`
    /// means no fire edge, or the shot was aborted (no muzzle socket, or the
    /// aim point would not project).
    pub fn update<P, R, E>(
        &mut self,
        snapshot: &InputSnapshot,
        dt: f32,
        ground_height: f32,
        projector: &P,
        scene: &R,
        effects: &mut E,
    ) -> Option<TraceResult>
    where
        P: ScreenProjector + ?Sized,
        R: RayCaster + ?Sized,
        E: EffectSink + ?Sized,
    {
        if snapshot.aim_pressed {
            self.zoom.aim_pressed();
        }
        if snapshot.aim_released {
            self.zoom.aim_released();
        }
        let is_aiming = self.zoom.is_aiming();

        self.look
            .apply_mouse_delta(snapshot.mouse_delta.x, snapshot.mouse_delta.y, is_aiming);
        self.look.turn_at_rate(snapshot.turn_axis, is_aiming, dt);
        self.look.look_up_at_rate(snapshot.look_axis, is_aiming, dt);

        if snapshot.jump_pressed && self.movement.try_jump() {
            log::debug!("[Character] jump");
        }
        self.movement.update(
            dt,
            snapshot.move_forward,
            snapshot.move_right,
            self.look.yaw,
            ground_height,
        );

        self.zoom.advance(dt);

        let shot = if snapshot.fire_pressed {
            self.fire(projector, scene, effects)
        } else {
            None
        };

        self.spread.recompute(
            self.movement.velocity(),
            !self.movement.is_grounded(),
            is_aiming,
            shot.is_some(),
            dt,
        );

        self.last_anim = self.anim.sample(
            self.movement.velocity(),
            self.look.yaw,
            self.movement.is_grounded(),
            self.movement.is_accelerating(),
            is_aiming,
        );

        shot
    }

    /// Resolve one shot and dispatch its effects.
    ///
    /// Aborts (returning `None`, with nothing dispatched) when the rig has
    /// no muzzle socket or the aim point cannot be projected. Every loadout
    /// entry is optional on its own; a missing one skips only that effect.
    fn fire<P, R, E>(&mut self, projector: &P, scene: &R, effects: &mut E) -> Option<TraceResult>
    where
        P: ScreenProjector + ?Sized,
        R: RayCaster + ?Sized,
        E: EffectSink + ?Sized,
    {
        let Some(muzzle) = self.rig.socket_transform(
            BARREL_SOCKET,
            self.movement.position(),
            self.movement.facing_yaw(),
        ) else {
            log::warn!("[FireControl] rig has no '{BARREL_SOCKET}' socket; shot aborted");
            return None;
        };

        let request = TraceRequest {
            muzzle_location: muzzle.position,
            screen_aim_point: crosshair_aim_point(projector.viewport_size()),
        };
        let result = resolve_impact(projector, scene, &request);
        if !result.hit {
            log::warn!("[FireControl] aim point would not project; shot aborted");
            return None;
        }

        if let Some(cue) = &self.loadout.fire_sound {
            effects.play_sound(cue);
        }
        if let Some(flash) = &self.loadout.muzzle_flash {
            effects.spawn_effect(flash, EffectKind::MuzzleFlash, muzzle.position, None);
        }
        if let Some(impact) = &self.loadout.impact_particles {
            effects.spawn_effect(impact, EffectKind::Impact, result.impact_point, None);
        }
        if let Some(beam) = &self.loadout.beam_particles {
            effects.spawn_effect(beam, EffectKind::Beam, muzzle.position, Some(result.impact_point));
        }
        if let Some(montage) = &self.loadout.hip_fire_montage {
            effects.play_montage(montage, FIRE_MONTAGE_SECTION);
        }

        log::debug!(
            "[FireControl] impact at ({:.1}, {:.1}, {:.1})",
            result.impact_point.x,
            result.impact_point.y,
            result.impact_point.z
        );
        Some(result)
    }
}
