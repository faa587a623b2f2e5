//! Character Tests - Events Through the Full Shooter Tick
//!
//! Drives `ShooterCharacter` the way the game layer does: raw key and
//! mouse events into `InputState`, one snapshot per tick, real camera
//! projection and scene traces on the fire path.

use glam::{Vec2, Vec3};
use hipfire_engine::camera::CameraView;
use hipfire_engine::combat::{EffectKind, EffectSink, MontageHandle, NullEffectSink, ParticleHandle, SoundCue};
use hipfire_engine::input::{InputState, KeyCode, MouseButton};
use hipfire_engine::physics::{Aabb, Block, BlockScene};
use hipfire_engine::player::ShooterCharacter;

const DT: f32 = 1.0 / 60.0;

/// Over-the-shoulder camera: 160 cm up, 300 cm behind the origin, level.
fn shoulder_view() -> CameraView {
    let mut view = CameraView::new(Vec2::new(1920.0, 1080.0));
    view.set_pose(Vec3::new(0.0, 160.0, 300.0), 0.0, 0.0);
    view
}

/// A wide wall downrange whose near face sits at z = -950.
fn wall_scene() -> BlockScene {
    let mut scene = BlockScene::new();
    scene.add(Block::new(Aabb::new(
        Vec3::new(-2000.0, -100.0, -1050.0),
        Vec3::new(2000.0, 3000.0, -950.0),
    )));
    scene
}

/// Effect sink that records everything it is handed.
#[derive(Default)]
struct RecordingSink {
    sounds: Vec<String>,
    effects: Vec<(EffectKind, Vec3, Option<Vec3>)>,
    montages: Vec<(String, String)>,
}

impl EffectSink for RecordingSink {
    fn spawn_effect(
        &mut self,
        _handle: &ParticleHandle,
        kind: EffectKind,
        position: Vec3,
        beam_target: Option<Vec3>,
    ) {
        self.effects.push((kind, position, beam_target));
    }

    fn play_sound(&mut self, cue: &SoundCue) {
        self.sounds.push(cue.0.clone());
    }

    fn play_montage(&mut self, montage: &MontageHandle, section: &str) {
        self.montages.push((montage.0.clone(), section.to_string()));
    }
}

// ============================================================================
// Input Events to Locomotion
// ============================================================================

#[test]
fn test_held_key_walks_the_character_downrange() {
    let mut input = InputState::new();
    let mut character = ShooterCharacter::new();
    let view = shoulder_view();
    let scene = wall_scene();
    let mut effects = NullEffectSink;

    input.handle_key(KeyCode::W, true);
    for _ in 0..60 {
        let snapshot = input.begin_tick();
        character.update(&snapshot, DT, 0.0, &view, &scene, &mut effects);
    }

    assert!(
        character.velocity().z < -599.0,
        "a second of held W should reach walk speed, got {:?}",
        character.velocity()
    );
    assert!(character.position().z < -450.0);
    assert!(character.movement().is_grounded());
}

#[test]
fn test_jump_key_leaves_the_ground_and_opens_spread() {
    let mut input = InputState::new();
    let mut character = ShooterCharacter::new();
    let view = shoulder_view();
    let scene = wall_scene();
    let mut effects = NullEffectSink;

    input.handle_key(KeyCode::Space, true);
    for _ in 0..12 {
        let snapshot = input.begin_tick();
        character.update(&snapshot, DT, 0.0, &view, &scene, &mut effects);
    }

    assert!(!character.movement().is_grounded());
    assert!(character.position().y > 50.0);
    assert!(
        character.spread_multiplier() > 0.7,
        "airborne spread should have drifted wide, got {}",
        character.spread_multiplier()
    );
}

// ============================================================================
// Fire Edge Semantics
// ============================================================================

#[test]
fn test_fire_resolves_once_per_press() {
    let mut input = InputState::new();
    let mut character = ShooterCharacter::new();
    let view = shoulder_view();
    let scene = wall_scene();
    let mut effects = NullEffectSink;

    input.handle_mouse_button(MouseButton::Left, true);
    let press = input.begin_tick();
    assert!(press.fire_pressed);
    let first = character.update(&press, DT, 0.0, &view, &scene, &mut effects);
    assert!(first.is_some());

    // Holding the trigger does not refire.
    let held = input.begin_tick();
    assert!(!held.fire_pressed);
    let second = character.update(&held, DT, 0.0, &view, &scene, &mut effects);
    assert!(second.is_none());

    // Release, press again: a fresh edge, a fresh shot.
    input.handle_mouse_button(MouseButton::Left, false);
    let release = input.begin_tick();
    let third = character.update(&release, DT, 0.0, &view, &scene, &mut effects);
    assert!(third.is_none());

    input.handle_mouse_button(MouseButton::Left, true);
    let repress = input.begin_tick();
    let fourth = character.update(&repress, DT, 0.0, &view, &scene, &mut effects);
    assert!(fourth.is_some());
}

#[test]
fn test_shot_plays_the_full_rifle_loadout() {
    let mut input = InputState::new();
    let mut character = ShooterCharacter::new();
    let view = shoulder_view();
    let scene = wall_scene();
    let mut effects = RecordingSink::default();

    input.handle_mouse_button(MouseButton::Left, true);
    let snapshot = input.begin_tick();
    let result = character
        .update(&snapshot, DT, 0.0, &view, &scene, &mut effects)
        .expect("the press edge should fire");
    assert!(result.hit);

    assert_eq!(effects.sounds, vec!["RifleShot".to_string()]);
    assert_eq!(
        effects.montages,
        vec![("HipFireMontage".to_string(), "StartFire".to_string())]
    );

    let (_, flash_pos, flash_target) = effects
        .effects
        .iter()
        .find(|(kind, _, _)| *kind == EffectKind::MuzzleFlash)
        .expect("a muzzle flash should spawn");
    // Barrel socket at yaw 0 from the origin: right 15, up 135, forward 80.
    assert!((*flash_pos - Vec3::new(15.0, 135.0, -80.0)).length() < 1e-4);
    assert_eq!(*flash_target, None);

    let (_, impact_pos, _) = effects
        .effects
        .iter()
        .find(|(kind, _, _)| *kind == EffectKind::Impact)
        .expect("an impact effect should spawn");
    assert!((impact_pos.z + 950.0).abs() < 0.1, "impact on the wall face");

    let (_, beam_pos, beam_target) = effects
        .effects
        .iter()
        .find(|(kind, _, _)| *kind == EffectKind::Beam)
        .expect("a beam effect should spawn");
    assert!((*beam_pos - Vec3::new(15.0, 135.0, -80.0)).length() < 1e-4);
    assert_eq!(*beam_target, Some(result.impact_point));
}

#[test]
fn test_removing_the_barrel_socket_aborts_the_shot() {
    let mut input = InputState::new();
    let mut character = ShooterCharacter::new();
    let view = shoulder_view();
    let scene = wall_scene();
    let mut effects = RecordingSink::default();

    character.rig_mut().remove_socket("BarrelSocket");

    input.handle_mouse_button(MouseButton::Left, true);
    let snapshot = input.begin_tick();
    let result = character.update(&snapshot, DT, 0.0, &view, &scene, &mut effects);

    assert!(result.is_none());
    assert!(effects.sounds.is_empty());
    assert!(effects.effects.is_empty());
    assert!(effects.montages.is_empty());
}

// ============================================================================
// Aim State Across Systems
// ============================================================================

#[test]
fn test_right_mouse_aim_tightens_everything() {
    let mut input = InputState::new();
    let mut character = ShooterCharacter::new();
    let view = shoulder_view();
    let scene = wall_scene();
    let mut effects = NullEffectSink;

    input.handle_mouse_button(MouseButton::Right, true);
    for _ in 0..60 {
        let snapshot = input.begin_tick();
        character.update(&snapshot, DT, 0.0, &view, &scene, &mut effects);
    }

    assert!(character.is_aiming());
    assert!((character.current_fov() - 35.0).abs() < 0.01);
    assert!(
        character.spread_multiplier() < 0.01,
        "aimed standing spread bottoms out, got {}",
        character.spread_multiplier()
    );

    // Mouse response shrinks to the aim scale: 100 px turns 0.04 rad.
    input.accumulate_mouse_delta(100.0, 0.0);
    let snapshot = input.begin_tick();
    character.update(&snapshot, DT, 0.0, &view, &scene, &mut effects);
    assert!((character.look().yaw - 0.04).abs() < 1e-5);

    input.handle_mouse_button(MouseButton::Right, false);
    for _ in 0..60 {
        let snapshot = input.begin_tick();
        character.update(&snapshot, DT, 0.0, &view, &scene, &mut effects);
    }
    assert!(!character.is_aiming());
    assert!((character.current_fov() - 90.0).abs() < 0.01);
}

// ============================================================================
// Animation Sampling
// ============================================================================

#[test]
fn test_strafe_reports_a_right_offset() {
    let mut input = InputState::new();
    let mut character = ShooterCharacter::new();
    let view = shoulder_view();
    let scene = wall_scene();
    let mut effects = NullEffectSink;

    input.handle_key(KeyCode::D, true);
    for _ in 0..30 {
        let snapshot = input.begin_tick();
        character.update(&snapshot, DT, 0.0, &view, &scene, &mut effects);
    }

    let sample = character.animation();
    assert!(sample.ground_speed > 599.0);
    assert!(!sample.is_in_air);
    assert!(sample.is_accelerating);
    // Moving due right while looking forward: 90 degrees to the right.
    assert!((sample.movement_offset_yaw - std::f32::consts::FRAC_PI_2).abs() < 0.01);
}

#[test]
fn test_stopping_holds_the_last_offset() {
    let mut input = InputState::new();
    let mut character = ShooterCharacter::new();
    let view = shoulder_view();
    let scene = wall_scene();
    let mut effects = NullEffectSink;

    input.handle_key(KeyCode::D, true);
    for _ in 0..30 {
        let snapshot = input.begin_tick();
        character.update(&snapshot, DT, 0.0, &view, &scene, &mut effects);
    }
    input.handle_key(KeyCode::D, false);
    for _ in 0..30 {
        let snapshot = input.begin_tick();
        character.update(&snapshot, DT, 0.0, &view, &scene, &mut effects);
    }

    let sample = character.animation();
    assert!(sample.ground_speed < 1.0);
    assert!(!sample.is_accelerating);
    // The last movement direction survives the stop for blend continuity.
    assert!((sample.last_movement_offset_yaw - std::f32::consts::FRAC_PI_2).abs() < 0.01);
}
