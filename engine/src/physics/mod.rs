//! Physics module
//!
//! Collision geometry and ray queries for the shooter simulation. Built from
//! scratch without an external physics library dependency (no Rapier).
//!
//! # Unit System
//!
//! **1 unit = 1 centimeter** throughout the crate.
//!
//! - Distances in units (cm)
//! - Velocities in units/s
//! - Accelerations in units/s²
//!
//! # Submodules
//!
//! - [`collision`] - AABB blocks, slab-method ray intersection, the
//!   [`collision::BlockScene`] query scene and the [`collision::RayCaster`]
//!   trait weapon traces go through

pub mod collision;

// Re-export commonly used types at the physics module level
pub use collision::{
    Aabb, Block, BlockScene, RayCaster, TraceChannel, TraceHit, ray_aabb_intersect,
};
