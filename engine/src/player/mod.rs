//! Player Module
//!
//! The playable character and its parts.
//!
//! # Components
//!
//! - [`ShooterCharacter`] - The orchestrator: one input snapshot in, one tick
//!   of movement/look/zoom/fire/spread out
//! - [`CharacterMovement`] - Camera-relative ground movement with jumping,
//!   gravity, coyote time, and orient-to-movement body rotation
//! - [`CharacterRig`] - Named socket offsets; the fire path resolves the
//!   muzzle through [`BARREL_SOCKET`]
//! - [`AnimSampler`] - Per-tick values an animation layer blends on

pub mod anim;
pub mod character;
pub mod movement;
pub mod rig;

pub use anim::{AnimSampler, AnimationSample};
pub use character::ShooterCharacter;
pub use movement::{
    CharacterMovement, MovementConfig,
    MAX_WALK_SPEED, ACCELERATION, BRAKING_DECELERATION,
    JUMP_VELOCITY, GRAVITY, AIR_CONTROL, COYOTE_TIME, ORIENT_RATE_DEG,
};
pub use rig::{CharacterRig, SocketTransform, BARREL_SOCKET};
