//! Camera View Module
//!
//! A pinhole camera pose plus viewport, and the screen-to-world deprojection
//! the firing pipeline aims through. This is camera math only; rendering is
//! someone else's problem.
//!
//! Screen coordinates are pixels with the origin at the top-left corner and
//! Y increasing downward, matching windowing systems. World space is
//! +X right, +Y up, -Z forward.

use glam::{Vec2, Vec3};

/// A world-space ray produced by deprojecting a screen point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRay {
    /// Ray origin (the camera position)
    pub origin: Vec3,
    /// Normalized ray direction
    pub direction: Vec3,
}

/// Anything that can turn a screen point into a world ray.
///
/// `deproject` returns `None` when there is no valid camera or viewport to
/// project through; callers treat that as "no shot fired", never a panic.
pub trait ScreenProjector {
    /// Current viewport size in pixels.
    fn viewport_size(&self) -> Vec2;

    /// Converts a screen-space point (pixels, top-left origin) into a world ray.
    fn deproject(&self, screen_point: Vec2) -> Option<ScreenRay>;
}

/// Pinhole camera state: pose, vertical field of view, and viewport.
///
/// Yaw 0 faces -Z; positive yaw turns right (viewed from above); positive
/// pitch looks up. The zoom controller drives `fov_y_deg` every tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraView {
    /// Camera position in world space
    pub position: Vec3,
    /// Yaw angle in radians
    pub yaw: f32,
    /// Pitch angle in radians
    pub pitch: f32,
    /// Vertical field of view in degrees
    pub fov_y_deg: f32,
    /// Viewport size in pixels
    pub viewport: Vec2,
}

impl Default for CameraView {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            fov_y_deg: 90.0,       // matches the default (un-zoomed) camera
            viewport: Vec2::new(1920.0, 1080.0),
        }
    }
}

impl CameraView {
    /// Creates a camera with the given viewport and default pose.
    pub fn new(viewport: Vec2) -> Self {
        Self {
            viewport,
            ..Default::default()
        }
    }

    /// Moves the camera to a new pose. Angles in radians.
    pub fn set_pose(&mut self, position: Vec3, yaw: f32, pitch: f32) {
        self.position = position;
        self.yaw = yaw;
        self.pitch = pitch;
    }

    /// Sets the vertical field of view in degrees.
    pub fn set_fov_deg(&mut self, fov_y_deg: f32) {
        self.fov_y_deg = fov_y_deg;
    }

    /// Forward direction derived from yaw and pitch.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            -self.yaw.cos() * self.pitch.cos(),
        )
    }

    /// Returns true if the camera can meaningfully project: a viewport with
    /// area and a finite FOV strictly inside (0, 180) degrees.
    pub fn is_valid(&self) -> bool {
        self.viewport.x > 0.0
            && self.viewport.y > 0.0
            && self.fov_y_deg.is_finite()
            && self.fov_y_deg > 0.0
            && self.fov_y_deg < 180.0
    }
}

impl ScreenProjector for CameraView {
    fn viewport_size(&self) -> Vec2 {
        self.viewport
    }

    fn deproject(&self, screen_point: Vec2) -> Option<ScreenRay> {
        if !self.is_valid() {
            return None;
        }

        // Pixel -> NDC: x in [-1, 1] left to right, y in [-1, 1] bottom to top
        let ndc_x = (screen_point.x / self.viewport.x) * 2.0 - 1.0;
        let ndc_y = 1.0 - (screen_point.y / self.viewport.y) * 2.0;

        let aspect = self.viewport.x / self.viewport.y;
        let tan_half_fov = (self.fov_y_deg.to_radians() * 0.5).tan();

        let forward = self.forward();
        let up_world = Vec3::Y;

        // Looking straight up or down collapses the usual basis; fall back to
        // world X as the right vector.
        let (right, up) = if forward.y.abs() > 0.999 {
            let right = Vec3::X;
            let up = right.cross(forward).normalize();
            (right, up)
        } else {
            let right = forward.cross(up_world).normalize();
            let up = right.cross(forward);
            (right, up)
        };

        let direction = (forward
            + right * (ndc_x * aspect * tan_half_fov)
            + up * (ndc_y * tan_half_fov))
            .normalize();

        Some(ScreenRay {
            origin: self.position,
            direction,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_center_pixel_deprojects_to_forward() {
        let mut view = CameraView::new(Vec2::new(1920.0, 1080.0));
        view.set_pose(Vec3::new(3.0, 160.0, 7.0), 0.7, -0.2);

        let center = view.viewport * 0.5;
        let ray = view.deproject(center).expect("valid camera should project");

        assert_eq!(ray.origin, view.position);
        let fwd = view.forward();
        assert!(
            (ray.direction - fwd).length() < EPS,
            "center ray {:?} should match forward {:?}",
            ray.direction,
            fwd
        );
    }

    #[test]
    fn test_deprojected_rays_are_normalized() {
        let view = CameraView::new(Vec2::new(1280.0, 720.0));

        for px in [0.0, 320.0, 640.0, 960.0, 1280.0] {
            for py in [0.0, 180.0, 360.0, 540.0, 720.0] {
                let ray = view.deproject(Vec2::new(px, py)).unwrap();
                let len = ray.direction.length();
                assert!(
                    (len - 1.0).abs() < EPS,
                    "Ray should be normalized, got length {}",
                    len
                );
            }
        }
    }

    #[test]
    fn test_screen_offsets_tilt_the_ray() {
        // Default pose faces -Z with +X to the right
        let view = CameraView::new(Vec2::new(1000.0, 1000.0));
        let center = view.viewport * 0.5;

        let right = view.deproject(center + Vec2::new(200.0, 0.0)).unwrap();
        assert!(right.direction.x > 0.0, "right of center should tilt +X");

        let above = view.deproject(center - Vec2::new(0.0, 200.0)).unwrap();
        assert!(above.direction.y > 0.0, "above center should tilt up");
    }

    #[test]
    fn test_crosshair_height_offset_matches_fov() {
        // 50 px above center on a 1080p viewport with 90 degree vertical FOV:
        // expected elevation angle = atan((50/540) * tan(45 deg))
        let view = CameraView::new(Vec2::new(1920.0, 1080.0));
        let aim = view.viewport * 0.5 - Vec2::new(0.0, 50.0);

        let ray = view.deproject(aim).unwrap();
        let expected = ((50.0 / 540.0_f32) * 45.0_f32.to_radians().tan()).atan();
        let actual = ray.direction.y.asin();
        assert!(
            (actual - expected).abs() < EPS,
            "expected elevation {expected}, got {actual}"
        );
    }

    #[test]
    fn test_zero_viewport_fails_projection() {
        let view = CameraView::new(Vec2::ZERO);
        assert!(view.deproject(Vec2::new(10.0, 10.0)).is_none());
    }

    #[test]
    fn test_degenerate_fov_fails_projection() {
        let mut view = CameraView::new(Vec2::new(800.0, 600.0));
        view.set_fov_deg(0.0);
        assert!(view.deproject(Vec2::new(400.0, 300.0)).is_none());

        view.set_fov_deg(180.0);
        assert!(view.deproject(Vec2::new(400.0, 300.0)).is_none());
    }

    #[test]
    fn test_straight_down_pose_still_projects() {
        let mut view = CameraView::new(Vec2::new(800.0, 600.0));
        view.set_pose(Vec3::new(0.0, 500.0, 0.0), 0.0, -std::f32::consts::FRAC_PI_2);

        let ray = view.deproject(view.viewport * 0.5).unwrap();
        assert!(
            (ray.direction - Vec3::NEG_Y).length() < 1e-3,
            "looking straight down, center ray should be -Y, got {:?}",
            ray.direction
        );
    }

    #[test]
    fn test_yawed_camera_keeps_screen_right_consistent() {
        // Facing +X (yaw 90 degrees): screen-right should tilt toward +Z
        let mut view = CameraView::new(Vec2::new(1000.0, 1000.0));
        view.set_pose(Vec3::ZERO, std::f32::consts::FRAC_PI_2, 0.0);

        let ray = view
            .deproject(view.viewport * 0.5 + Vec2::new(300.0, 0.0))
            .unwrap();
        assert!(ray.direction.z > 0.0, "screen right should be +Z here, got {:?}", ray.direction);
        assert!(ray.direction.x > 0.5, "still mostly facing +X");
    }
}
