//! Group-level parallax, pointer tilt and idle spin.

use crate::constants::*;
use crate::morph::lerp;
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};

/// Smoothed transform applied above all instances.
///
/// Channels are eased with fixed per-frame blend factors rather than
/// dt-scaled damping. That is a latent frame-rate dependency, kept on
/// purpose: the tuned visual feel assumes the ~60 fps the site targets.
#[derive(Clone, Copy, Debug)]
pub struct GroupTransform {
    pub position: Vec3,
    /// XYZ Euler angles, radians.
    pub rotation: Vec3,
    spin: f32,
}

impl Default for GroupTransform {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, GROUP_Z_NEAR),
            rotation: Vec3::ZERO,
            spin: 0.0,
        }
    }
}

impl GroupTransform {
    /// Advance one frame toward targets derived from the scroll fraction
    /// `s`, the normalized pointer and the current morph progress.
    pub fn update(&mut self, dt: f32, s: f32, pointer: Vec2, morph: f32) {
        let target_z = lerp(GROUP_Z_NEAR, GROUP_Z_FAR, s);
        let target_y = lerp(0.0, GROUP_Y_DRIFT, s);
        let parallax_rz = lerp(0.0, PARALLAX_RZ_MAX, s);
        let tilt = lerp(TILT_MIN, TILT_MAX, s);

        self.position.z = lerp(self.position.z, target_z, POS_SMOOTHING);
        self.position.y = lerp(self.position.y, target_y, POS_SMOOTHING);
        self.rotation.x = lerp(self.rotation.x, -pointer.y * tilt, TILT_SMOOTHING);
        self.rotation.y = lerp(self.rotation.y, pointer.x * tilt, TILT_SMOOTHING);

        // Slow idle spin accumulates while the tunnel is showing; once the
        // morph is underway the target snaps back to bare parallax so the
        // logo settles un-rotated.
        let target_rz = if morph < SPIN_SUPPRESS_THRESHOLD {
            self.spin += dt.max(0.0) * IDLE_SPIN_RATE;
            parallax_rz + self.spin
        } else {
            self.spin = 0.0;
            parallax_rz
        };
        self.rotation.z = lerp(self.rotation.z, target_rz, SPIN_SMOOTHING);
    }

    pub fn matrix(&self) -> Mat4 {
        let rot = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_rotation_translation(rot, self.position)
    }
}
