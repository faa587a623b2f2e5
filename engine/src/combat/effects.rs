//! Fire Effects Module
//!
//! Handles and the sink trait for the audio/visual side of a shot. The
//! engine does not render or mix anything; it names content (handles) and
//! hands spawn requests to whatever sink the runtime installed. Every handle
//! on a loadout is optional and a missing one simply skips that side effect.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Montage section jumped to when a shot plays the fire animation.
pub const FIRE_MONTAGE_SECTION: &str = "StartFire";

/// What role a spawned effect plays; sinks may use this to pick behavior
/// beyond the asset name (beam orientation, attachment, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectKind {
    /// Flash at the muzzle socket
    MuzzleFlash,
    /// Burst at the impact point
    Impact,
    /// Smoke trail from muzzle to impact; carries a beam target
    Beam,
}

/// Named reference to an external sound asset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SoundCue(pub String);

impl SoundCue {
    pub fn new(name: &str) -> Self {
        Self(name.to_string())
    }
}

/// Named reference to an external particle system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticleHandle(pub String);

impl ParticleHandle {
    pub fn new(name: &str) -> Self {
        Self(name.to_string())
    }
}

/// Named reference to an external animation montage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MontageHandle(pub String);

impl MontageHandle {
    pub fn new(name: &str) -> Self {
        Self(name.to_string())
    }
}

/// The optional content a character fires with.
///
/// `None` anywhere means "no such asset": the shot still happens and only
/// that side effect is skipped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FireLoadout {
    /// Sound played when the trigger is pulled
    pub fire_sound: Option<SoundCue>,
    /// Particles at the muzzle socket
    pub muzzle_flash: Option<ParticleHandle>,
    /// Particles at the resolved impact point
    pub impact_particles: Option<ParticleHandle>,
    /// Trail particles from muzzle toward the impact point
    pub beam_particles: Option<ParticleHandle>,
    /// Upper-body fire animation
    pub hip_fire_montage: Option<MontageHandle>,
}

impl FireLoadout {
    /// A fully-populated loadout with stock rifle content names.
    pub fn rifle() -> Self {
        Self {
            fire_sound: Some(SoundCue::new("RifleShot")),
            muzzle_flash: Some(ParticleHandle::new("RifleMuzzleFlash")),
            impact_particles: Some(ParticleHandle::new("RifleImpact")),
            beam_particles: Some(ParticleHandle::new("RifleBeam")),
            hip_fire_montage: Some(MontageHandle::new("HipFireMontage")),
        }
    }
}

/// Where effect requests go.
///
/// Implemented by the runtime that owns particles/audio/animation. The
/// engine calls these synchronously during fire resolution, so positions
/// are never stale by more than the current tick.
pub trait EffectSink {
    /// Spawn a particle effect at a world position.
    ///
    /// `beam_target` is only present for [`EffectKind::Beam`] and carries
    /// the far endpoint of the trail.
    fn spawn_effect(
        &mut self,
        handle: &ParticleHandle,
        kind: EffectKind,
        position: Vec3,
        beam_target: Option<Vec3>,
    );

    /// Play a one-shot sound.
    fn play_sound(&mut self, cue: &SoundCue);

    /// Play a montage section on the character.
    fn play_montage(&mut self, montage: &MontageHandle, section: &str);
}

/// Sink that drops every request; useful for headless simulation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullEffectSink;

impl EffectSink for NullEffectSink {
    fn spawn_effect(
        &mut self,
        _handle: &ParticleHandle,
        _kind: EffectKind,
        _position: Vec3,
        _beam_target: Option<Vec3>,
    ) {
    }

    fn play_sound(&mut self, _cue: &SoundCue) {}

    fn play_montage(&mut self, _montage: &MontageHandle, _section: &str) {}
}

/// Sink that logs every request; what the demo binary installs.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogEffectSink;

impl EffectSink for LogEffectSink {
    fn spawn_effect(
        &mut self,
        handle: &ParticleHandle,
        kind: EffectKind,
        position: Vec3,
        beam_target: Option<Vec3>,
    ) {
        match beam_target {
            Some(target) => log::info!(
                "[Effects] {:?} '{}' at {:?} -> {:?}",
                kind,
                handle.0,
                position,
                target
            ),
            None => log::info!("[Effects] {:?} '{}' at {:?}", kind, handle.0, position),
        }
    }

    fn play_sound(&mut self, cue: &SoundCue) {
        log::info!("[Effects] sound '{}'", cue.0);
    }

    fn play_montage(&mut self, montage: &MontageHandle, section: &str) {
        log::info!("[Effects] montage '{}' section '{}'", montage.0, section);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_loadout_is_empty() {
        let loadout = FireLoadout::default();
        assert!(loadout.fire_sound.is_none());
        assert!(loadout.muzzle_flash.is_none());
        assert!(loadout.impact_particles.is_none());
        assert!(loadout.beam_particles.is_none());
        assert!(loadout.hip_fire_montage.is_none());
    }

    #[test]
    fn test_rifle_loadout_is_fully_populated() {
        let loadout = FireLoadout::rifle();
        assert!(loadout.fire_sound.is_some());
        assert!(loadout.muzzle_flash.is_some());
        assert!(loadout.impact_particles.is_some());
        assert!(loadout.beam_particles.is_some());
        assert!(loadout.hip_fire_montage.is_some());
    }

    #[test]
    fn test_null_sink_swallows_requests() {
        let mut sink = NullEffectSink;
        sink.play_sound(&SoundCue::new("Anything"));
        sink.spawn_effect(
            &ParticleHandle::new("Flash"),
            EffectKind::MuzzleFlash,
            Vec3::ZERO,
            None,
        );
        sink.play_montage(&MontageHandle::new("M"), FIRE_MONTAGE_SECTION);
    }
}
