use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};
use winit::event::KeyEvent;
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::traits::CameraController;

/// World units per second
pub const CAMERA_SPEED: f32 = 6.0;
/// Radians per second
pub const CAMERA_ROTATION_SPEED: f32 = 1.5;

const MAX_PITCH: f32 = 1.55;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: Vec3,
    pub target: Vec3,
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(-20.0, 3.0, 30.0),
            target: Vec3::ZERO,
            fov_degrees: 75.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MovementState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub pitch_up: bool,
    pub pitch_down: bool,
}

impl MovementState {
    const fn to_direction(positive: bool, negative: bool) -> f32 {
        match (positive, negative) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }

    const fn velocity(&self) -> (f32, f32, f32) {
        (
            Self::to_direction(self.forward, self.backward),
            Self::to_direction(self.right, self.left),
            Self::to_direction(self.up, self.down),
        )
    }

    const fn rotation_velocity(&self) -> (f32, f32) {
        (
            Self::to_direction(self.rotate_left, self.rotate_right),
            Self::to_direction(self.pitch_up, self.pitch_down),
        )
    }
}

/// Perspective fly camera
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub movement: MovementState,
}

impl Camera {
    pub fn new(config: &CameraConfig, aspect: f32) -> Self {
        let mut camera = Self {
            position: config.position,
            yaw: 0.0,
            pitch: 0.0,
            fov_y: config.fov_degrees.to_radians(),
            aspect,
            near: config.near,
            far: config.far,
            movement: MovementState::default(),
        };
        camera.look_at(config.target);
        camera
    }

    /// Turns the camera towards `target`. No-op when target is the camera position.
    pub fn look_at(&mut self, target: Vec3) {
        let Some(direction) = (target - self.position).try_normalize() else {
            return;
        };
        self.yaw = direction.x.atan2(direction.z);
        self.pitch = direction.y.asin().clamp(-MAX_PITCH, MAX_PITCH);
    }

    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.cos() * self.pitch.cos(),
        )
        .normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, self.forward(), Vec3::Y)
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn process_keyboard(&mut self, event: &KeyEvent) {
        let is_pressed = event.state.is_pressed();
        if let PhysicalKey::Code(keycode) = event.physical_key {
            match keycode {
                KeyCode::KeyW => self.movement.forward = is_pressed,
                KeyCode::KeyS => self.movement.backward = is_pressed,
                KeyCode::KeyA => self.movement.left = is_pressed,
                KeyCode::KeyD => self.movement.right = is_pressed,
                KeyCode::Space => self.movement.up = is_pressed,
                KeyCode::ShiftLeft => self.movement.down = is_pressed,
                KeyCode::KeyQ => self.movement.rotate_left = is_pressed,
                KeyCode::KeyE => self.movement.rotate_right = is_pressed,
                KeyCode::KeyR => self.movement.pitch_up = is_pressed,
                KeyCode::KeyF => self.movement.pitch_down = is_pressed,
                _ => {}
            }
        }
    }
}

impl CameraController for Camera {
    fn update(&mut self, delta_time: f32) {
        let (fwd, right_dir, up_dir) = self.movement.velocity();
        let step = CAMERA_SPEED * delta_time;

        self.position += self.forward() * fwd * step
            + self.right() * right_dir * step
            + Vec3::Y * up_dir * step;

        let (yaw, pitch) = self.movement.rotation_velocity();
        self.yaw += yaw * CAMERA_ROTATION_SPEED * delta_time;
        self.pitch = (self.pitch + pitch * CAMERA_ROTATION_SPEED * delta_time)
            .clamp(-MAX_PITCH, MAX_PITCH);
    }

    fn view_projection(&self) -> Mat4 {
        self.projection() * self.view()
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }
}
