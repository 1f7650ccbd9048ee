use glam::{Vec2, Vec3};

use super::core::Camera;
use crate::frame::FrameSnapshot;
use crate::options::CameraOptions;

/// A camera mounted on a parallax rig.
///
/// The rig sits at `(rig.x, rig.y, 0)`; the camera hangs below it at the
/// scroll-driven height and `distance` back along +Z, always looking
/// straight down -Z.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraRig {
    /// The placed camera.
    pub camera: Camera,
    rig_offset: Vec2,
    camera_y: f32,
    distance: f32,
}

impl CameraRig {
    /// Rig at the origin for a viewport of the given aspect ratio.
    #[must_use]
    pub fn new(options: &CameraOptions, aspect: f32) -> Self {
        let mut rig = Self {
            camera: Camera {
                eye: Vec3::ZERO,
                target: Vec3::NEG_Z,
                up: Vec3::Y,
                aspect,
                fovy: options.fovy,
                znear: options.znear,
                zfar: options.zfar,
            },
            rig_offset: Vec2::ZERO,
            camera_y: 0.0,
            distance: options.distance,
        };
        rig.place();
        rig
    }

    /// Apply projection and distance settings, keeping the placement.
    pub fn apply_options(&mut self, options: &CameraOptions) {
        self.camera.fovy = options.fovy;
        self.camera.znear = options.znear;
        self.camera.zfar = options.zfar;
        self.distance = options.distance;
        self.place();
    }

    /// Move the rig and camera to where `snapshot` puts them.
    pub fn follow(&mut self, snapshot: &FrameSnapshot) {
        self.rig_offset = snapshot.rig_offset;
        self.camera_y = snapshot.camera_y;
        self.place();
    }

    /// Update the aspect ratio. Ignores degenerate sizes.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.camera.aspect = width as f32 / height as f32;
        }
    }

    /// Current rig displacement.
    #[must_use]
    pub fn rig_offset(&self) -> Vec2 {
        self.rig_offset
    }

    fn place(&mut self) {
        let eye = Vec3::new(
            self.rig_offset.x,
            self.rig_offset.y + self.camera_y,
            self.distance,
        );
        self.camera.eye = eye;
        self.camera.target = eye + Vec3::NEG_Z;
        self.camera.up = Vec3::Y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::FrameTime;

    fn snapshot(rig_offset: Vec2, camera_y: f32) -> FrameSnapshot {
        FrameSnapshot {
            time: FrameTime::default(),
            mesh_rotations: Vec::new(),
            camera_y,
            rig_offset,
            section: 0,
        }
    }

    #[test]
    fn starts_at_distance_on_z() {
        let rig = CameraRig::new(&CameraOptions::default(), 1.0);
        assert_eq!(rig.camera.eye, Vec3::new(0.0, 0.0, 6.0));
        assert_eq!(rig.camera.target, Vec3::new(0.0, 0.0, 5.0));
    }

    #[test]
    fn follow_adds_scroll_height_to_rig() {
        let mut rig = CameraRig::new(&CameraOptions::default(), 1.0);
        rig.follow(&snapshot(Vec2::new(0.1, -0.2), -4.0));
        assert_eq!(rig.camera.eye, Vec3::new(0.1, -4.2, 6.0));
        // always looking straight ahead
        assert_eq!(rig.camera.target - rig.camera.eye, Vec3::NEG_Z);
    }

    #[test]
    fn options_keep_placement() {
        let mut rig = CameraRig::new(&CameraOptions::default(), 1.0);
        rig.follow(&snapshot(Vec2::new(0.3, 0.0), -2.0));
        let options = CameraOptions {
            distance: 10.0,
            fovy: 50.0,
            ..CameraOptions::default()
        };
        rig.apply_options(&options);
        assert_eq!(rig.camera.eye, Vec3::new(0.3, -2.0, 10.0));
        assert_eq!(rig.camera.fovy, 50.0);
    }

    #[test]
    fn resize_ignores_zero_height() {
        let mut rig = CameraRig::new(&CameraOptions::default(), 1.5);
        rig.resize(800, 0);
        assert_eq!(rig.camera.aspect, 1.5);
        rig.resize(800, 400);
        assert_eq!(rig.camera.aspect, 2.0);
    }
}
