use super::constants::{
    CAMERA_FAR, CAMERA_FOLLOW_SCALE, CAMERA_FOVY_DEGREES, CAMERA_NEAR, CAMERA_Z,
};
use super::input::{PointerState, Ray};
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Right-handed perspective camera.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY_DEGREES.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn set_aspect(&mut self, width: f32, height: f32) {
        self.aspect = width / height.max(1.0);
    }

    /// Jump the eye to a fixed scale of the pointer offset. No easing.
    pub fn follow_pointer(&mut self, pointer: &PointerState) {
        self.eye.x = pointer.x * CAMERA_FOLLOW_SCALE;
        self.eye.y = pointer.y * CAMERA_FOLLOW_SCALE;
    }

    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Unit viewing direction. `(p - eye).dot(forward)` is the view-space depth of `p`.
    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).normalize_or_zero()
    }

    /// World-space ray from the eye through a point given in normalized device
    /// coordinates (`[-1, 1]`, +y up).
    pub fn pick_ray(&self, ndc: Vec2) -> Ray {
        let inv = self.view_proj().inverse();
        let p_mid = inv * Vec4::new(ndc.x, ndc.y, 0.5, 1.0);
        let p1: Vec3 = p_mid.truncate() / p_mid.w;
        Ray {
            origin: self.eye,
            direction: (p1 - self.eye).normalize(),
        }
    }
}
