use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Orbit camera for 3D rendering: the eye circles a target point at a
/// given distance, steered by pointer drags and wheel zoom.
/// Produces a perspective view-projection matrix for the host renderer.
pub struct OrbitCamera {
    /// Point the camera looks at.
    pub target: Vec3,
    /// Horizontal angle around the target, in radians.
    pub yaw: f32,
    /// Vertical angle above the horizontal plane, in radians.
    pub pitch: f32,
    /// Distance from the target.
    pub distance: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

/// Pitch is kept just shy of the poles so the up vector never degenerates.
const PITCH_LIMIT: f32 = 1.5;
const DISTANCE_MIN: f32 = 10.0;
const DISTANCE_MAX: f32 = 800.0;
/// Radians of orbit per pixel of drag.
const ORBIT_SENSITIVITY: f32 = 0.005;
/// Multiplicative zoom per wheel tick.
const ZOOM_STEP: f32 = 1.1;

/// Default view: pulled back and slightly above the orbital plane.
const DEFAULT_DISTANCE: f32 = 180.0;
const DEFAULT_PITCH: f32 = 0.55;

/// GPU-side camera data: view-projection matrix plus eye position
/// (the eye feeds the host's specular term).
/// Wire format: 20 floats / 80 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub eye: [f32; 3],
    pub _pad: f32,
}

impl CameraUniform {
    pub const FLOATS: usize = 20;
}

impl OrbitCamera {
    pub fn new() -> Self {
        Self {
            target: Vec3::ZERO,
            yaw: 0.0,
            pitch: DEFAULT_PITCH,
            distance: DEFAULT_DISTANCE,
            aspect: 16.0 / 9.0,
            fov_y: 50.0_f32.to_radians(),
            near: 0.1,
            far: 4000.0,
        }
    }

    /// Apply a pointer drag of (dx, dy) pixels.
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.yaw -= dx * ORBIT_SENSITIVITY;
        self.pitch = (self.pitch + dy * ORBIT_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Apply a wheel tick: positive delta zooms out, negative zooms in.
    pub fn zoom(&mut self, delta: f32) {
        let factor = if delta > 0.0 { ZOOM_STEP } else { 1.0 / ZOOM_STEP };
        self.distance = (self.distance * factor).clamp(DISTANCE_MIN, DISTANCE_MAX);
    }

    /// Update the aspect ratio (e.g. on canvas resize).
    pub fn set_aspect(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    /// Restore the default view, keeping the current aspect ratio.
    pub fn reset(&mut self) {
        let aspect = self.aspect;
        *self = Self::new();
        self.aspect = aspect;
    }

    /// Eye position in world space, from the spherical orbit parameters.
    pub fn eye(&self) -> Vec3 {
        let horizontal = self.distance * self.pitch.cos();
        self.target
            + Vec3::new(
                horizontal * self.yaw.cos(),
                self.distance * self.pitch.sin(),
                horizontal * self.yaw.sin(),
            )
    }

    /// Build the combined view-projection matrix.
    pub fn view_proj(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye(), self.target, Vec3::Y);
        let proj = Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far);
        proj * view
    }

    pub fn uniform(&self) -> CameraUniform {
        let eye = self.eye();
        CameraUniform {
            view_proj: self.view_proj().to_cols_array_2d(),
            eye: [eye.x, eye.y, eye.z],
            _pad: 0.0,
        }
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eye_distance_matches_parameter() {
        let cam = OrbitCamera::new();
        let d = (cam.eye() - cam.target).length();
        assert!((d - cam.distance).abs() < 1e-3, "eye distance {d}");
    }

    #[test]
    fn orbit_clamps_pitch() {
        let mut cam = OrbitCamera::new();
        cam.orbit(0.0, 1e6);
        assert!(cam.pitch <= PITCH_LIMIT);
        cam.orbit(0.0, -1e6);
        assert!(cam.pitch >= -PITCH_LIMIT);
    }

    #[test]
    fn zoom_clamps_distance() {
        let mut cam = OrbitCamera::new();
        for _ in 0..200 {
            cam.zoom(-1.0);
        }
        assert!((cam.distance - DISTANCE_MIN).abs() < 1e-3);
        for _ in 0..200 {
            cam.zoom(1.0);
        }
        assert!((cam.distance - DISTANCE_MAX).abs() < 1e-3);
    }

    #[test]
    fn reset_restores_defaults_but_keeps_aspect() {
        let mut cam = OrbitCamera::new();
        cam.set_aspect(1024.0, 512.0);
        cam.orbit(300.0, 100.0);
        cam.zoom(1.0);
        cam.reset();
        assert_eq!(cam.distance, DEFAULT_DISTANCE);
        assert_eq!(cam.pitch, DEFAULT_PITCH);
        assert_eq!(cam.yaw, 0.0);
        assert!((cam.aspect - 2.0).abs() < 1e-6);
    }

    #[test]
    fn uniform_is_20_floats() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), CameraUniform::FLOATS * 4);
    }

    #[test]
    fn view_proj_maps_target_in_front_of_eye() {
        let cam = OrbitCamera::new();
        let clip = cam.view_proj() * cam.target.extend(1.0);
        // Target sits on the view axis: inside clip space after divide.
        let ndc_z = clip.z / clip.w;
        assert!(ndc_z > 0.0 && ndc_z < 1.0, "ndc z was {ndc_z}");
    }
}
