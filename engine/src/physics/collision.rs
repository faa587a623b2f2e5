//! Collision scene module
//!
//! Axis-aligned-box collision geometry and the ray query surface the combat
//! code traces against. Blocks carry a channel mask so camera probes and
//! weapon traces can ignore different geometry.
//!
//! # Ray-AABB Intersection
//!
//! The slab method is used for ray-AABB intersection, which finds the
//! intersection points by computing entry and exit times for each axis.
//!
//! # Example
//!
//! ```ignore
//! use hipfire_engine::physics::collision::{Aabb, Block, BlockScene, RayCaster, TraceChannel};
//! use glam::Vec3;
//!
//! let mut scene = BlockScene::new();
//! scene.add(Block::new(Aabb::from_center_half_extents(
//!     Vec3::new(0.0, 100.0, -500.0),
//!     Vec3::new(50.0, 100.0, 10.0),
//! )));
//!
//! let start = Vec3::new(0.0, 100.0, 0.0);
//! let end = Vec3::new(0.0, 100.0, -2000.0);
//! if let Some(hit) = scene.cast(start, end, TraceChannel::Visibility) {
//!     println!("blocked at {:?} ({} units out)", hit.position, hit.distance);
//! }
//! ```

use glam::Vec3;

/// Collision channels a ray query can filter on.
///
/// `Visibility` is what weapon traces use; `Camera` is probed by the boom to
/// keep the view out of walls. A block only stops rays on channels it has
/// enabled in its mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraceChannel {
    /// Line-of-sight and weapon fire.
    Visibility,
    /// Camera placement probes.
    Camera,
}

impl TraceChannel {
    /// Bit for this channel in a block's channel mask.
    pub const fn mask(self) -> u8 {
        match self {
            TraceChannel::Visibility => 0b01,
            TraceChannel::Camera => 0b10,
        }
    }
}

/// Mask enabling every trace channel.
pub const ALL_CHANNELS: u8 = 0b11;

/// Information about a ray-block collision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceHit {
    /// World-space position where the ray was blocked
    pub position: Vec3,
    /// Surface normal at the hit point (normalized, axis-aligned)
    pub normal: Vec3,
    /// Distance from ray origin to hit point
    pub distance: f32,
}

impl TraceHit {
    /// Creates a new TraceHit with the given parameters.
    pub fn new(position: Vec3, normal: Vec3, distance: f32) -> Self {
        Self {
            position,
            normal,
            distance,
        }
    }
}

/// Anything the combat code can trace rays against.
///
/// `cast` is a segment query: it returns the nearest blocking surface strictly
/// between `start` and `end` on the given channel, or `None` when the segment
/// is clear. Implemented by [`BlockScene`]; tests substitute scripted casters.
pub trait RayCaster {
    /// Returns the nearest blocking hit on the segment `start -> end`, if any.
    fn cast(&self, start: Vec3, end: Vec3, channel: TraceChannel) -> Option<TraceHit>;
}

// =============================================================================
// Aabb
// =============================================================================

/// An axis-aligned bounding box in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
}

impl Aabb {
    /// Creates an AABB from explicit corners.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Creates an AABB from a center point and half extents.
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Center of the box.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Returns true if the point lies inside or on the surface of the box.
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Computes the outward surface normal for a point on the box surface.
    ///
    /// Picks the face whose plane the point is closest to in normalized box
    /// space, so slightly-off-surface points (from ray t rounding) still get
    /// a sensible axis-aligned normal.
    pub fn surface_normal(&self, point: Vec3) -> Vec3 {
        let half_extents = (self.max - self.min) * 0.5;
        let local = point - self.center();

        // Normalize to unit cube space
        let normalized = Vec3::new(
            local.x / half_extents.x,
            local.y / half_extents.y,
            local.z / half_extents.z,
        );
        let a = normalized.abs();

        if a.x >= a.y && a.x >= a.z {
            Vec3::new(normalized.x.signum(), 0.0, 0.0)
        } else if a.y >= a.x && a.y >= a.z {
            Vec3::new(0.0, normalized.y.signum(), 0.0)
        } else {
            Vec3::new(0.0, 0.0, normalized.z.signum())
        }
    }
}

/// Performs a ray-AABB intersection test using the slab method.
///
/// The slab method intersects the ray with each pair of axis-aligned planes
/// making up the box. If the latest entry time is not after the earliest exit
/// time and the exit is in front of the origin, the ray hits.
///
/// # Arguments
///
/// * `ray_origin` - Starting point of the ray
/// * `ray_dir` - Direction of the ray (must be normalized)
/// * `aabb` - The box to test against
///
/// # Returns
///
/// * `Some(t)` - Distance along the ray to the intersection point (t >= 0).
///   A ray starting inside the box reports the exit face.
/// * `None` - No intersection, or the box is entirely behind the origin
pub fn ray_aabb_intersect(ray_origin: Vec3, ray_dir: Vec3, aabb: &Aabb) -> Option<f32> {
    let mut t_min = f32::NEG_INFINITY;
    let mut t_max = f32::INFINITY;

    for axis in 0..3 {
        // Near-zero components get a huge finite inverse instead of infinity
        // so that on-boundary origins produce 0 * MAX = 0 rather than NaN.
        let d = ray_dir[axis];
        let inv = if d.abs() > 1e-10 {
            1.0 / d
        } else {
            f32::MAX * d.signum()
        };

        let t1 = (aabb.min[axis] - ray_origin[axis]) * inv;
        let t2 = (aabb.max[axis] - ray_origin[axis]) * inv;

        t_min = t_min.max(t1.min(t2));
        t_max = t_max.min(t1.max(t2));
    }

    if t_max >= t_min && t_max >= 0.0 {
        if t_min >= 0.0 {
            Some(t_min)
        } else {
            // Ray starts inside the box
            Some(t_max)
        }
    } else {
        None
    }
}

// =============================================================================
// Block / BlockScene
// =============================================================================

/// A solid axis-aligned block in the collision scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    /// World-space bounds of the block
    pub bounds: Aabb,
    /// Channel mask; the block only stops rays on enabled channels
    pub channels: u8,
}

impl Block {
    /// Creates a block that stops rays on every channel.
    pub fn new(bounds: Aabb) -> Self {
        Self {
            bounds,
            channels: ALL_CHANNELS,
        }
    }

    /// Creates a block with an explicit channel mask.
    pub fn with_channels(bounds: Aabb, channels: u8) -> Self {
        Self { bounds, channels }
    }

    /// Returns true if this block stops rays on the given channel.
    pub fn blocks(&self, channel: TraceChannel) -> bool {
        self.channels & channel.mask() != 0
    }
}

/// A collection of solid blocks supporting nearest-hit ray queries.
///
/// Storage is a flat `Vec` and queries are brute force over all blocks, which
/// is plenty for a firing range worth of geometry. Swap in spatial
/// partitioning behind [`RayCaster`] if scenes ever grow past a few hundred
/// blocks.
#[derive(Debug, Clone, Default)]
pub struct BlockScene {
    blocks: Vec<Block>,
}

impl BlockScene {
    /// Creates a new empty scene.
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Adds a block and returns its index.
    pub fn add(&mut self, block: Block) -> usize {
        self.blocks.push(block);
        self.blocks.len() - 1
    }

    /// Returns the block at the given index, if it exists.
    pub fn block(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    /// Returns the index of the first block containing the point, if any.
    ///
    /// Used by callers that want to identify what an impact point landed on.
    pub fn block_containing(&self, point: Vec3) -> Option<usize> {
        self.blocks.iter().position(|b| b.bounds.contains_point(point))
    }

    /// Returns the number of blocks in the scene.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns true if the scene contains no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Returns an iterator over all blocks.
    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter()
    }

    /// Casts a ray against every block on the channel and returns the closest hit.
    ///
    /// # Arguments
    ///
    /// * `origin` - Ray starting position
    /// * `direction` - Ray direction (should be normalized)
    /// * `max_dist` - Maximum distance to check for intersections
    /// * `channel` - Channel the ray traces on
    ///
    /// # Returns
    ///
    /// `Some(TraceHit)` for the closest hit, or `None` if nothing blocks the ray
    pub fn ray_cast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_dist: f32,
        channel: TraceChannel,
    ) -> Option<TraceHit> {
        let mut closest: Option<TraceHit> = None;
        let mut closest_dist = max_dist;

        for block in &self.blocks {
            if !block.blocks(channel) {
                continue;
            }

            if let Some(t) = ray_aabb_intersect(origin, direction, &block.bounds) {
                if t >= 0.0 && t < closest_dist {
                    let position = origin + direction * t;
                    closest = Some(TraceHit {
                        position,
                        normal: block.bounds.surface_normal(position),
                        distance: t,
                    });
                    closest_dist = t;
                }
            }
        }

        closest
    }
}

impl RayCaster for BlockScene {
    fn cast(&self, start: Vec3, end: Vec3, channel: TraceChannel) -> Option<TraceHit> {
        let delta = end - start;
        let dist = delta.length();
        if dist <= f32::EPSILON {
            return None;
        }
        self.ray_cast(start, delta / dist, dist, channel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> Aabb {
        Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0))
    }

    #[test]
    fn test_ray_hits_aabb_from_front() {
        let origin = Vec3::new(0.0, 0.0, 5.0);
        let dir = Vec3::new(0.0, 0.0, -1.0);

        let result = ray_aabb_intersect(origin, dir, &unit_box());
        assert!(result.is_some());
        let t = result.unwrap();
        assert!((t - 4.0).abs() < 0.001, "Expected t=4.0, got t={}", t);
    }

    #[test]
    fn test_ray_misses_aabb() {
        let origin = Vec3::new(0.0, 5.0, 5.0);
        let dir = Vec3::new(0.0, 0.0, -1.0);

        assert!(ray_aabb_intersect(origin, dir, &unit_box()).is_none());
    }

    #[test]
    fn test_ray_starts_inside_aabb() {
        let origin = Vec3::ZERO;
        let dir = Vec3::new(0.0, 0.0, -1.0);

        let t = ray_aabb_intersect(origin, dir, &unit_box()).unwrap();
        // Exit face at z = -1
        assert!((t - 1.0).abs() < 0.001, "Expected t=1.0, got t={}", t);
    }

    #[test]
    fn test_ray_aabb_behind_origin() {
        let origin = Vec3::new(0.0, 0.0, -5.0);
        let dir = Vec3::new(0.0, 0.0, -1.0);

        assert!(ray_aabb_intersect(origin, dir, &unit_box()).is_none());
    }

    #[test]
    fn test_surface_normal_faces() {
        let aabb = unit_box();

        assert_eq!(aabb.surface_normal(Vec3::new(1.0, 0.0, 0.0)), Vec3::X);
        assert_eq!(aabb.surface_normal(Vec3::new(-1.0, 0.0, 0.0)), Vec3::NEG_X);
        assert_eq!(aabb.surface_normal(Vec3::new(0.0, 1.0, 0.0)), Vec3::Y);
        assert_eq!(aabb.surface_normal(Vec3::new(0.3, -1.0, 0.2)), Vec3::NEG_Y);
    }

    #[test]
    fn test_aabb_contains_point() {
        let aabb = unit_box();
        assert!(aabb.contains_point(Vec3::ZERO));
        assert!(aabb.contains_point(Vec3::new(1.0, 1.0, 1.0)));
        assert!(!aabb.contains_point(Vec3::new(1.1, 0.0, 0.0)));
    }

    #[test]
    fn test_scene_nearest_hit_wins() {
        let mut scene = BlockScene::new();
        let near = Block::new(Aabb::from_center_half_extents(
            Vec3::new(0.0, 0.0, -10.0),
            Vec3::splat(1.0),
        ));
        let far = Block::new(Aabb::from_center_half_extents(
            Vec3::new(0.0, 0.0, -30.0),
            Vec3::splat(1.0),
        ));
        // Insert far first so nearest-hit cannot be insertion order
        scene.add(far);
        scene.add(near);

        let hit = scene
            .ray_cast(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), 100.0, TraceChannel::Visibility)
            .expect("ray should hit the near block");
        assert!((hit.distance - 9.0).abs() < 0.001, "got {}", hit.distance);
        assert_eq!(hit.normal, Vec3::Z);
    }

    #[test]
    fn test_channel_mask_filters_blocks() {
        let mut scene = BlockScene::new();
        // Visible to weapon traces only; camera probes pass through
        scene.add(Block::with_channels(
            Aabb::from_center_half_extents(Vec3::new(0.0, 0.0, -10.0), Vec3::splat(1.0)),
            TraceChannel::Visibility.mask(),
        ));

        let dir = Vec3::new(0.0, 0.0, -1.0);
        assert!(scene.ray_cast(Vec3::ZERO, dir, 100.0, TraceChannel::Visibility).is_some());
        assert!(scene.ray_cast(Vec3::ZERO, dir, 100.0, TraceChannel::Camera).is_none());
    }

    #[test]
    fn test_segment_cast_respects_range() {
        let mut scene = BlockScene::new();
        scene.add(Block::new(Aabb::from_center_half_extents(
            Vec3::new(0.0, 0.0, -50.0),
            Vec3::splat(1.0),
        )));

        // Segment ends before the block
        let short = scene.cast(Vec3::ZERO, Vec3::new(0.0, 0.0, -20.0), TraceChannel::Visibility);
        assert!(short.is_none());

        // Segment reaches through the block
        let long = scene
            .cast(Vec3::ZERO, Vec3::new(0.0, 0.0, -100.0), TraceChannel::Visibility)
            .expect("segment should be blocked");
        assert!((long.distance - 49.0).abs() < 0.001, "got {}", long.distance);

        // Degenerate segment
        assert!(scene.cast(Vec3::ZERO, Vec3::ZERO, TraceChannel::Visibility).is_none());
    }

    #[test]
    fn test_block_containing() {
        let mut scene = BlockScene::new();
        scene.add(Block::new(Aabb::from_center_half_extents(
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::splat(1.0),
        )));
        let idx = scene.add(Block::new(Aabb::from_center_half_extents(
            Vec3::new(-10.0, 0.0, 0.0),
            Vec3::splat(1.0),
        )));

        assert_eq!(scene.block_containing(Vec3::new(-10.0, 0.5, 0.0)), Some(idx));
        assert_eq!(scene.block_containing(Vec3::ZERO), None);
    }
}
