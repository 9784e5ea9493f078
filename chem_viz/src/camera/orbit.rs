//! OrbitCamera component and system: drag to rotate, scroll to zoom.

use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll};
use bevy::prelude::*;
use bevy_egui::EguiContexts;

const ROTATE_SENSITIVITY: f32 = 0.006;
const ZOOM_SENSITIVITY: f32 = 0.1;
const MIN_RADIUS: f32 = 2.0;
const MAX_RADIUS: f32 = 60.0;
const PITCH_LIMIT: f32 = 1.5;

/// Spherical camera rig around `focus`.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct OrbitCamera {
    pub focus: Vec3,
    pub radius: f32,
    pub yaw: f32,
    pub pitch: f32,
}

impl OrbitCamera {
    /// Rig that places the camera at `position` looking at `focus`.
    pub fn looking_from(position: Vec3, focus: Vec3) -> Self {
        let offset = position - focus;
        let radius = offset.length().max(MIN_RADIUS);
        let pitch = (offset.y / radius).clamp(-1.0, 1.0).asin();
        let yaw = offset.x.atan2(offset.z);
        Self {
            focus,
            radius,
            yaw,
            pitch,
        }
    }

    pub fn position(&self) -> Vec3 {
        let horizontal = self.radius * self.pitch.cos();
        self.focus
            + Vec3::new(
                horizontal * self.yaw.sin(),
                self.radius * self.pitch.sin(),
                horizontal * self.yaw.cos(),
            )
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position()).looking_at(self.focus, Vec3::Y)
    }

    pub fn rotate(&mut self, delta: Vec2) {
        self.yaw -= delta.x * ROTATE_SENSITIVITY;
        self.pitch = (self.pitch + delta.y * ROTATE_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    pub fn zoom(&mut self, scroll: f32) {
        self.radius = (self.radius * (1.0 - scroll * ZOOM_SENSITIVITY)).clamp(MIN_RADIUS, MAX_RADIUS);
    }
}

pub fn orbit_camera_plugin(app: &mut App) {
    app.add_systems(Update, orbit_camera_system);
}

fn orbit_camera_system(
    mouse: Res<ButtonInput<MouseButton>>,
    motion: Res<AccumulatedMouseMotion>,
    scroll: Res<AccumulatedMouseScroll>,
    mut contexts: EguiContexts,
    mut cameras: Query<(&mut OrbitCamera, &mut Transform)>,
) {
    if contexts.ctx_mut().wants_pointer_input() {
        return;
    }
    let dragging = mouse.pressed(MouseButton::Left) && motion.delta != Vec2::ZERO;
    if !dragging && scroll.delta.y == 0.0 {
        return;
    }
    for (mut orbit, mut tf) in &mut cameras {
        if dragging {
            orbit.rotate(motion.delta);
        }
        orbit.zoom(scroll.delta.y);
        *tf = orbit.transform();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rig_reproduces_start_position() {
        let start = Vec3::new(3.0, 4.0, 8.0);
        let orbit = OrbitCamera::looking_from(start, Vec3::ZERO);
        assert!(orbit.position().distance(start) < 1e-4);
    }

    #[test]
    fn zoom_and_pitch_are_clamped() {
        let mut orbit = OrbitCamera::looking_from(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        orbit.zoom(100.0);
        assert_eq!(orbit.radius, MIN_RADIUS);
        orbit.rotate(Vec2::new(0.0, 10_000.0));
        assert_eq!(orbit.pitch, PITCH_LIMIT);
    }

    #[test]
    fn rotation_keeps_distance_to_focus() {
        let focus = Vec3::new(1.0, 0.5, -2.0);
        let mut orbit = OrbitCamera::looking_from(Vec3::new(4.0, 2.0, 5.0), focus);
        let radius = orbit.radius;
        orbit.rotate(Vec2::new(120.0, -40.0));
        assert!((orbit.position().distance(focus) - radius).abs() < 1e-4);
    }
}
