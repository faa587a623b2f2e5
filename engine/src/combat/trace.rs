//! Weapon Trace Module
//!
//! Resolves where a shot lands: a 2D screen aim point plus the weapon muzzle
//! position go in, a world-space impact point comes out. Resolution is a
//! two-stage hitscan:
//!
//! 1. Deproject the aim point into a world ray and trace it out to
//!    [`MAX_TRACE_DISTANCE`]. The hit (or the far point) is where the
//!    crosshair is aimed, independent of where the weapon is.
//! 2. Trace from the muzzle to that aim point. Anything blocking this second
//!    segment (a wall edge right of the shoulder camera, say) becomes the
//!    impact instead.
//!
//! The muzzle and camera are offset in an over-the-shoulder view, so a single
//! muzzle-forward trace would land beside the crosshair; the two-stage form
//! keeps visual aim exact while still respecting occlusion near the weapon.
//!
//! Resolution is deterministic: identical geometry and inputs always produce
//! the same result, and nothing here draws random numbers.

use glam::{Vec2, Vec3};

use crate::camera::view::ScreenProjector;
use crate::physics::collision::{RayCaster, TraceChannel};

/// How far a shot reaches when it hits nothing, in world units.
/// Effectively "as far as geometry can exist".
pub const MAX_TRACE_DISTANCE: f32 = 50_000.0;

/// How far above viewport center the crosshair sits, in pixels.
pub const CROSSHAIR_RAISE_PX: f32 = 50.0;

/// Screen position of the crosshair for a given viewport size.
///
/// The crosshair is drawn slightly above center so the character does not
/// cover the aim point; shots are resolved through this point, not through
/// the exact center.
pub fn crosshair_aim_point(viewport_size: Vec2) -> Vec2 {
    Vec2::new(
        viewport_size.x * 0.5,
        viewport_size.y * 0.5 - CROSSHAIR_RAISE_PX,
    )
}

/// Input to a single shot resolution, built fresh per fire event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceRequest {
    /// World position of the weapon muzzle
    pub muzzle_location: Vec3,
    /// Screen-space aim point in pixels (top-left origin)
    pub screen_aim_point: Vec2,
}

/// Output of a shot resolution.
///
/// `hit` is false only when the screen point could not be projected (no
/// valid camera/viewport), which callers treat as "no shot fired". A shot
/// into empty sky still resolves with `hit: true` at the far point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceResult {
    /// Where the shot landed (or the far point for a clean miss)
    pub impact_point: Vec3,
    /// Whether the shot resolved at all
    pub hit: bool,
}

impl TraceResult {
    /// The "no shot fired" result used when projection fails.
    pub fn no_shot() -> Self {
        Self {
            impact_point: Vec3::ZERO,
            hit: false,
        }
    }
}

/// Resolves the impact point for one shot.
///
/// Both collaborators are injected so tests can script them: `projector`
/// supplies the camera ray for the aim point, `caster` answers the two
/// visibility-channel segment queries.
pub fn resolve_impact<P, R>(projector: &P, caster: &R, request: &TraceRequest) -> TraceResult
where
    P: ScreenProjector + ?Sized,
    R: RayCaster + ?Sized,
{
    let Some(ray) = projector.deproject(request.screen_aim_point) else {
        return TraceResult::no_shot();
    };

    // Stage one: where is the crosshair aimed in the world?
    let screen_far = ray.origin + ray.direction * MAX_TRACE_DISTANCE;
    let beam_end = match caster.cast(ray.origin, screen_far, TraceChannel::Visibility) {
        Some(hit) => hit.position,
        None => screen_far,
    };

    // Stage two: can the muzzle actually reach that point?
    let impact_point = match caster.cast(request.muzzle_location, beam_end, TraceChannel::Visibility)
    {
        Some(hit) => hit.position,
        None => beam_end,
    };

    TraceResult {
        impact_point,
        hit: true,
    }
}
