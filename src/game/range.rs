//! Firing Range
//!
//! A self-contained practice range: a walled box with raised target
//! plates, one shooter character, and the follow camera, advanced on a
//! fixed simulation tick. The demo binary drives this scene headlessly;
//! a renderer would read the same state once per frame.
//!
//! Tick order (see [`FiringRange::advance`]):
//! 1. Freeze pending input events into an [`InputSnapshot`].
//! 2. Update the character. Shots deproject through the camera view left
//!    by the previous tick, so the trace matches the frame the player saw.
//! 3. Update the camera boom, probing the scene on the camera channel.
//! 4. Refresh the camera view from the boom pose, look angles, and zoom.

use glam::{Vec2, Vec3};

use crate::camera::{CameraBoom, CameraView};
use crate::combat::{EffectSink, TraceResult};
use crate::config::ShooterConfig;
use crate::input::{InputSnapshot, InputState};
use crate::physics::{Aabb, Block, BlockScene, TraceChannel};
use crate::player::ShooterCharacter;

/// Fixed simulation tick rate, in Hz.
pub const TICK_RATE: f32 = 60.0;

/// Viewport the headless camera projects through, in pixels.
pub const RANGE_VIEWPORT: Vec2 = Vec2::new(1920.0, 1080.0);

// Range box dimensions, in cm. The shooter spawns at the origin facing
// downrange (-Z); the backstop wall is the far end.
const RANGE_HALF_WIDTH: f32 = 1500.0;
const RANGE_NEAR_Z: f32 = 600.0;
const RANGE_FAR_Z: f32 = -5000.0;
const WALL_HEIGHT: f32 = 1000.0;
const WALL_THICKNESS: f32 = 100.0;
const FLOOR_THICKNESS: f32 = 100.0;

/// Ground height fed to the character every tick. The range floor is flat.
const GROUND_HEIGHT: f32 = 0.0;

/// Target plates are this size: 1 m square faces, 20 cm deep.
const TARGET_HALF_EXTENTS: Vec3 = Vec3::new(50.0, 50.0, 10.0);

/// Impacts sit exactly on a target face, so membership tests inflate the
/// plate bounds by this margin, in cm.
const HIT_MARGIN: f32 = 0.5;

// =============================================================================
// RangeTarget
// =============================================================================

/// One shootable target plate: its block index in the collision scene plus
/// a label and distance for session logs.
#[derive(Debug, Clone)]
pub struct RangeTarget {
    /// Index of the plate's block in the collision scene
    pub block: usize,
    /// Short name used in logs ("near", "mid", "far")
    pub label: &'static str,
    /// Straight-line distance from the spawn point, in cm
    pub range_cm: f32,
}

// =============================================================================
// FiringRange
// =============================================================================

/// The whole practice-range session: scene geometry, the character, the
/// follow camera, and the input queue, stepped together on a fixed tick.
#[derive(Debug)]
pub struct FiringRange {
    scene: BlockScene,
    character: ShooterCharacter,
    boom: CameraBoom,
    view: CameraView,
    input: InputState,
    targets: Vec<RangeTarget>,
    tick: u64,
}

impl FiringRange {
    /// Builds the range with default tuning.
    pub fn new() -> Self {
        Self::with_config(&ShooterConfig::default())
    }

    /// Builds the range with explicit tuning.
    pub fn with_config(config: &ShooterConfig) -> Self {
        let mut scene = BlockScene::new();

        // Floor slab under the whole range. Stops both weapon and camera rays.
        scene.add(Block::new(Aabb::new(
            Vec3::new(
                -RANGE_HALF_WIDTH - WALL_THICKNESS,
                -FLOOR_THICKNESS,
                RANGE_FAR_Z - WALL_THICKNESS,
            ),
            Vec3::new(
                RANGE_HALF_WIDTH + WALL_THICKNESS,
                0.0,
                RANGE_NEAR_Z + WALL_THICKNESS,
            ),
        )));

        // Backstop at the far end, side walls, and a wall behind the spawn.
        scene.add(Block::new(Aabb::new(
            Vec3::new(-RANGE_HALF_WIDTH, 0.0, RANGE_FAR_Z - WALL_THICKNESS),
            Vec3::new(RANGE_HALF_WIDTH, WALL_HEIGHT, RANGE_FAR_Z),
        )));
        scene.add(Block::new(Aabb::new(
            Vec3::new(-RANGE_HALF_WIDTH - WALL_THICKNESS, 0.0, RANGE_FAR_Z),
            Vec3::new(-RANGE_HALF_WIDTH, WALL_HEIGHT, RANGE_NEAR_Z),
        )));
        scene.add(Block::new(Aabb::new(
            Vec3::new(RANGE_HALF_WIDTH, 0.0, RANGE_FAR_Z),
            Vec3::new(RANGE_HALF_WIDTH + WALL_THICKNESS, WALL_HEIGHT, RANGE_NEAR_Z),
        )));
        scene.add(Block::new(Aabb::new(
            Vec3::new(-RANGE_HALF_WIDTH, 0.0, RANGE_NEAR_Z),
            Vec3::new(RANGE_HALF_WIDTH, WALL_HEIGHT, RANGE_NEAR_Z + WALL_THICKNESS),
        )));

        // Target plates at staggered distances and heights. Visibility-only
        // channels: weapon traces stop on them, the camera probe ignores them.
        let mut targets = Vec::new();
        for (label, center) in [
            ("near", Vec3::new(-250.0, 150.0, -1200.0)),
            ("mid", Vec3::new(150.0, 175.0, -2400.0)),
            ("far", Vec3::new(0.0, 200.0, -4200.0)),
        ] {
            let bounds = Aabb::from_center_half_extents(center, TARGET_HALF_EXTENTS);
            let block = scene.add(Block::with_channels(
                bounds,
                TraceChannel::Visibility.mask(),
            ));
            targets.push(RangeTarget {
                block,
                label,
                range_cm: center.length(),
            });
        }

        let mut character = ShooterCharacter::with_config(config);
        character.spawn_at(Vec3::ZERO, 0.0);

        let mut boom = CameraBoom::with_config(config.boom);
        boom.snap_to(character.position(), 0.0, 0.0);

        let mut view = CameraView::new(RANGE_VIEWPORT);
        view.set_pose(boom.position(), 0.0, 0.0);
        view.set_fov_deg(character.current_fov());

        Self {
            scene,
            character,
            boom,
            view,
            input: InputState::new(),
            targets,
            tick: 0,
        }
    }

    // =========================================================================
    // Simulation
    // =========================================================================

    /// Advances one fixed tick: freezes pending input events into a snapshot
    /// and steps the simulation. Returns the trace result if a shot fired.
    pub fn advance<E>(&mut self, dt: f32, effects: &mut E) -> Option<TraceResult>
    where
        E: EffectSink + ?Sized,
    {
        let snapshot = self.input.begin_tick();
        self.step(&snapshot, dt, effects)
    }

    /// Steps the simulation with an already-built snapshot. Scripted drills
    /// and tests feed snapshots directly; interactive callers go through
    /// [`FiringRange::advance`].
    pub fn step<E>(
        &mut self,
        snapshot: &InputSnapshot,
        dt: f32,
        effects: &mut E,
    ) -> Option<TraceResult>
    where
        E: EffectSink + ?Sized,
    {
        let shot = self
            .character
            .update(snapshot, dt, GROUND_HEIGHT, &self.view, &self.scene, effects);

        let position = self.character.position();
        let (yaw, pitch) = (self.character.look().yaw, self.character.look().pitch);
        let scene = &self.scene;
        self.boom
            .update_with_collision(position, yaw, pitch, dt, |origin, direction, distance| {
                scene
                    .ray_cast(origin, direction, distance, TraceChannel::Camera)
                    .map(|hit| hit.distance)
            });

        self.view.set_pose(self.boom.position(), yaw, pitch);
        self.view.set_fov_deg(self.character.current_fov());
        self.tick += 1;
        shot
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The shooter character.
    #[inline]
    pub fn character(&self) -> &ShooterCharacter {
        &self.character
    }

    /// The camera view left by the last tick.
    #[inline]
    pub fn view(&self) -> &CameraView {
        &self.view
    }

    /// The collision scene (walls, floor, target plates).
    #[inline]
    pub fn scene(&self) -> &BlockScene {
        &self.scene
    }

    /// Mutable input queue. Feed key and mouse events here between ticks.
    #[inline]
    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    /// The target plates, in the order they were placed.
    #[inline]
    pub fn targets(&self) -> &[RangeTarget] {
        &self.targets
    }

    /// Number of ticks advanced so far.
    #[inline]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Finds which target plate (if any) an impact point landed on. Impacts
    /// sit on a plate face, so the plate bounds are inflated by a small
    /// margin before the containment test. Returns an index into
    /// [`FiringRange::targets`].
    pub fn target_containing(&self, point: Vec3) -> Option<usize> {
        self.targets.iter().position(|target| {
            match self.scene.block(target.block) {
                Some(block) => {
                    let min = block.bounds.min - Vec3::splat(HIT_MARGIN);
                    let max = block.bounds.max + Vec3::splat(HIT_MARGIN);
                    point.cmpge(min).all() && point.cmple(max).all()
                }
                None => false,
            }
        })
    }
}

impl Default for FiringRange {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::NullEffectSink;
    use crate::input::KeyCode;

    const DT: f32 = 1.0 / TICK_RATE;

    fn idle() -> InputSnapshot {
        InputSnapshot::default()
    }

    #[test]
    fn test_range_spawns_facing_downrange() {
        let range = FiringRange::new();

        assert_eq!(range.character().position(), Vec3::ZERO);
        assert_eq!(range.view().fov_y_deg, 90.0);
        assert_eq!(range.targets().len(), 3);
        // Floor, four walls, three target plates.
        assert_eq!(range.scene().len(), 8);
        // Camera spawns behind the shooter, on the +Z side.
        assert!(
            range.view().position.z > 0.0,
            "camera should start behind the spawn, got z {}",
            range.view().position.z
        );
    }

    #[test]
    fn test_unaimed_shot_hits_backstop() {
        let mut range = FiringRange::new();
        let mut effects = NullEffectSink;

        let fire = InputSnapshot {
            fire_pressed: true,
            ..InputSnapshot::default()
        };
        let shot = range.step(&fire, DT, &mut effects);

        let result = shot.expect("pressing fire should resolve a shot");
        assert!(result.hit);
        // The raised crosshair tilts the ray slightly upward; from the spawn
        // pose it clears every plate and lands on the far backstop.
        assert!(
            (result.impact_point.z - RANGE_FAR_Z).abs() < 0.1,
            "expected a backstop impact, got {:?}",
            result.impact_point
        );
        assert_eq!(range.target_containing(result.impact_point), None);
    }

    #[test]
    fn test_pitched_down_shot_lands_on_floor() {
        let mut range = FiringRange::new();
        let mut effects = NullEffectSink;

        // Hold the look stick down for half a second, then fire.
        let look_down = InputSnapshot {
            look_axis: -1.0,
            ..InputSnapshot::default()
        };
        for _ in 0..30 {
            range.step(&look_down, DT, &mut effects);
        }
        let fire = InputSnapshot {
            fire_pressed: true,
            ..InputSnapshot::default()
        };
        let result = range
            .step(&fire, DT, &mut effects)
            .expect("pressing fire should resolve a shot");

        assert!(result.hit);
        assert!(
            result.impact_point.y.abs() < 0.1,
            "expected a floor impact, got {:?}",
            result.impact_point
        );
    }

    #[test]
    fn test_target_containing_matches_plate_faces() {
        let range = FiringRange::new();

        // Plate centers and front-face centers resolve to their own plate.
        assert_eq!(
            range.target_containing(Vec3::new(-250.0, 150.0, -1200.0)),
            Some(0)
        );
        assert_eq!(
            range.target_containing(Vec3::new(150.0, 175.0, -2390.0)),
            Some(1)
        );
        assert_eq!(
            range.target_containing(Vec3::new(0.0, 200.0, -4190.0)),
            Some(2)
        );
        // A backstop impact belongs to no plate.
        assert_eq!(
            range.target_containing(Vec3::new(0.0, 500.0, RANGE_FAR_Z)),
            None
        );
    }

    #[test]
    fn test_camera_follows_a_moving_character() {
        let mut range = FiringRange::new();
        let mut effects = NullEffectSink;

        let forward = InputSnapshot {
            move_forward: 1.0,
            ..InputSnapshot::default()
        };
        for _ in 0..60 {
            range.step(&forward, DT, &mut effects);
        }

        let character_z = range.character().position().z;
        let camera_z = range.view().position.z;
        assert!(character_z < -300.0, "character should have moved downrange");
        assert!(camera_z < 300.0, "camera should have followed, got z {camera_z}");
        assert!(
            camera_z > character_z,
            "camera should stay behind the character"
        );
    }

    #[test]
    fn test_zoom_shows_up_in_the_view() {
        let mut range = FiringRange::new();
        let mut effects = NullEffectSink;

        let aim = InputSnapshot {
            aim_pressed: true,
            aim_held: true,
            ..InputSnapshot::default()
        };
        range.step(&aim, DT, &mut effects);
        let hold = InputSnapshot {
            aim_held: true,
            ..InputSnapshot::default()
        };
        for _ in 0..59 {
            range.step(&hold, DT, &mut effects);
        }

        let aimed_fov = range.view().fov_y_deg;
        assert!(
            aimed_fov < 60.0 && aimed_fov >= 35.0,
            "one second of aiming should have zoomed well in, got {aimed_fov}"
        );

        let release = InputSnapshot {
            aim_released: true,
            ..InputSnapshot::default()
        };
        range.step(&release, DT, &mut effects);
        for _ in 0..59 {
            range.step(&idle(), DT, &mut effects);
        }
        assert!(
            range.view().fov_y_deg > aimed_fov + 10.0,
            "releasing aim should widen the view again"
        );
    }

    #[test]
    fn test_near_wall_pulls_the_camera_in() {
        let mut range = FiringRange::new();
        let mut effects = NullEffectSink;

        // Back up toward the wall behind the spawn, then stand still so the
        // boom settles against its probe.
        let back = InputSnapshot {
            move_forward: -1.0,
            ..InputSnapshot::default()
        };
        for _ in 0..45 {
            range.step(&back, DT, &mut effects);
        }
        for _ in 0..60 {
            range.step(&idle(), DT, &mut effects);
        }

        let camera_z = range.view().position.z;
        assert!(
            camera_z < RANGE_NEAR_Z,
            "camera should be pulled inside the near wall, got z {camera_z}"
        );
    }

    #[test]
    fn test_advance_consumes_queued_input_events() {
        let mut range = FiringRange::new();
        let mut effects = NullEffectSink;

        range.input_mut().handle_key(KeyCode::W, true);
        for _ in 0..10 {
            range.advance(DT, &mut effects);
        }

        assert!(
            range.character().velocity().z < -100.0,
            "held W should move the character downrange"
        );
        assert_eq!(range.tick(), 10);
    }
}
