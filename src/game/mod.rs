//! Game Module
//!
//! Contains game-specific systems that build on top of the engine: the
//! firing range scene and its fixed-step session driver.

pub mod range;

pub use range::{FiringRange, RangeTarget, TICK_RATE};
