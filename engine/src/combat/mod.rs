//! Combat Module
//!
//! Weapon fire resolution and its feedback:
//! - `trace`: two-stage hitscan from the screen aim point to a world impact
//! - `spread`: crosshair bloom driven by movement, air time, aiming and firing
//! - `effects`: optional content handles and the sink the runtime implements

pub mod effects;
pub mod spread;
pub mod trace;

pub use effects::{
    EffectKind, EffectSink, FireLoadout, LogEffectSink, MontageHandle, NullEffectSink,
    ParticleHandle, SoundCue, FIRE_MONTAGE_SECTION,
};
pub use spread::{CrosshairSpread, SpreadConfig, SpreadFactors};
pub use trace::{
    crosshair_aim_point, resolve_impact, TraceRequest, TraceResult, CROSSHAIR_RAISE_PX,
    MAX_TRACE_DISTANCE,
};
