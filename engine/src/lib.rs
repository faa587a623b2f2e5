//! Hipfire Engine Library
//!
//! A headless third-person shooter character engine: movement, over-the-
//! shoulder camera, aim-down-sights zoom, crosshair-driven weapon traces,
//! and crosshair spread, all advanced on a fixed tick from input snapshots.
//! Rendering, audio, and animation playback stay outside; the engine hands
//! them data through small traits.
//!
//! # Modules
//!
//! - [`player`] - The shooter character: movement, rig, animation values,
//!   and the per-tick orchestrator
//! - [`camera`] - Control rotation, follow boom, aim zoom, and the screen
//!   projection the fire path aims through
//! - [`combat`] - Two-stage weapon traces, crosshair spread, fire effects
//! - [`input`] - Platform-agnostic input collection and per-tick snapshots
//! - [`physics`] - Axis-aligned block scenes with channel-filtered ray casts
//! - [`config`] - JSON tuning for every subsystem
//!
//! # Example
//!
//! ```ignore
//! use hipfire_engine::input::{InputState, KeyCode, MouseButton};
//! use hipfire_engine::physics::{Aabb, Block, BlockScene};
//! use hipfire_engine::camera::CameraView;
//! use hipfire_engine::combat::NullEffectSink;
//! use hipfire_engine::player::ShooterCharacter;
//!
//! let mut input = InputState::new();
//! let mut character = ShooterCharacter::new();
//! let mut effects = NullEffectSink;
//! let view = CameraView::default();
//!
//! let mut scene = BlockScene::new();
//! scene.add(Block::new(Aabb::from_center_half_extents(
//!     glam::Vec3::new(0.0, 150.0, -1000.0),
//!     glam::Vec3::splat(50.0),
//! )));
//!
//! // Platform layer feeds events...
//! input.handle_mouse_button(MouseButton::Left, true);
//!
//! // ...and the game loop ticks:
//! let snapshot = input.begin_tick();
//! if let Some(shot) = character.update(&snapshot, 1.0 / 60.0, 0.0, &view, &scene, &mut effects) {
//!     println!("impact at {:?}", shot.impact_point);
//! }
//! ```

pub mod camera;
pub mod combat;
pub mod config;
pub mod input;
pub mod physics;
pub mod player;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

// Re-export commonly used input types
pub use input::{InputSnapshot, InputState, KeyCode, MouseButton};
// Re-export the character and its camera
pub use camera::{AimZoom, CameraBoom, CameraView, LookController};
pub use player::ShooterCharacter;
// Re-export config loading
pub use config::{load_config, save_config, ConfigError, ShooterConfig};
