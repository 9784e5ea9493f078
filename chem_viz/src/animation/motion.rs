//! Positional animators: oscillation, orbits, recycling, drift, spin, glide.

use bevy::prelude::*;

use super::SceneClock;
use crate::layout::OrbitPath;

const GLIDE_SNAP: f32 = 1e-3;

/// Sinusoidal offset along `axis` around `origin`.
#[derive(Component, Clone, Copy, Debug)]
pub struct Oscillator {
    pub origin: Vec3,
    pub axis: Vec3,
    pub amplitude: f32,
    pub speed: f32,
    pub phase: f32,
}

impl Oscillator {
    pub fn new(origin: Vec3, axis: Vec3, amplitude: f32, speed: f32) -> Self {
        Self {
            origin,
            axis,
            amplitude,
            speed,
            phase: 0.0,
        }
    }

    pub fn with_phase(mut self, phase: f32) -> Self {
        self.phase = phase;
        self
    }
}

/// Follows a circular path around `center`.
#[derive(Component, Clone, Copy, Debug)]
pub struct Orbiter {
    pub center: Vec3,
    pub path: OrbitPath,
}

/// Moves along `axis` at `rate` units/s and jumps back to `lower` past `upper`.
#[derive(Component, Clone, Copy, Debug)]
pub struct Recycler {
    pub axis: Vec3,
    pub rate: f32,
    pub lower: f32,
    pub upper: f32,
}

impl Recycler {
    pub fn rising(rate: f32, lower: f32, upper: f32) -> Self {
        Self {
            axis: Vec3::Y,
            rate,
            lower,
            upper,
        }
    }
}

/// Straight-line motion inside a box; leaving one wall re-enters at the other.
#[derive(Component, Clone, Copy, Debug)]
pub struct Drifter {
    pub velocity: Vec3,
    /// Multiplier applied on top of `velocity` (temperature, current).
    pub speed: f32,
    pub center: Vec3,
    pub half_extents: Vec3,
}

/// Rotates the entity about `pivot`, orbiting its translation with it.
#[derive(Component, Clone, Copy, Debug)]
pub struct Spin {
    pub pivot: Vec3,
    pub axis: Vec3,
    /// Radians per second.
    pub speed: f32,
}

impl Spin {
    pub fn about_y(speed: f32) -> Self {
        Self {
            pivot: Vec3::ZERO,
            axis: Vec3::Y,
            speed,
        }
    }
}

/// Eases the translation toward `target` by `factor` of the gap per frame.
#[derive(Component, Clone, Copy, Debug)]
pub struct Glide {
    pub target: Vec3,
    pub factor: f32,
}

pub fn oscillate(amplitude: f32, speed: f32, phase: f32, t: f32) -> f32 {
    amplitude * (t * speed + phase).sin()
}

pub fn rise_and_recycle(value: f32, step: f32, lower: f32, upper: f32) -> f32 {
    let next = value + step;
    if next > upper {
        lower
    } else {
        next
    }
}

pub fn wrap_in_bounds(position: Vec3, center: Vec3, half_extents: Vec3) -> Vec3 {
    let wrap = |v: f32, h: f32| {
        if v > h {
            -h
        } else if v < -h {
            h
        } else {
            v
        }
    };
    let local = position - center;
    center
        + Vec3::new(
            wrap(local.x, half_extents.x),
            wrap(local.y, half_extents.y),
            wrap(local.z, half_extents.z),
        )
}

pub fn glide_toward(current: Vec3, target: Vec3, factor: f32) -> Vec3 {
    let next = current.lerp(target, factor);
    if next.distance(target) < GLIDE_SNAP {
        target
    } else {
        next
    }
}

pub(super) fn oscillate_system(
    clock: Res<SceneClock>,
    mut query: Query<(&Oscillator, &mut Transform)>,
) {
    for (osc, mut tf) in &mut query {
        let offset = oscillate(osc.amplitude, osc.speed, osc.phase, clock.elapsed);
        tf.translation = osc.origin + osc.axis * offset;
    }
}

pub(super) fn orbit_system(clock: Res<SceneClock>, mut query: Query<(&Orbiter, &mut Transform)>) {
    for (orbiter, mut tf) in &mut query {
        tf.translation = orbiter.center + orbiter.path.position(clock.elapsed);
    }
}

pub(super) fn recycle_system(
    clock: Res<SceneClock>,
    mut query: Query<(&Recycler, &mut Transform)>,
) {
    for (recycler, mut tf) in &mut query {
        let along = tf.translation.dot(recycler.axis);
        let next = rise_and_recycle(
            along,
            recycler.rate * clock.delta,
            recycler.lower,
            recycler.upper,
        );
        tf.translation += recycler.axis * (next - along);
    }
}

pub(super) fn drift_system(clock: Res<SceneClock>, mut query: Query<(&Drifter, &mut Transform)>) {
    for (drifter, mut tf) in &mut query {
        let moved = tf.translation + drifter.velocity * drifter.speed * clock.delta;
        tf.translation = wrap_in_bounds(moved, drifter.center, drifter.half_extents);
    }
}

pub(super) fn spin_system(clock: Res<SceneClock>, mut query: Query<(&Spin, &mut Transform)>) {
    for (spin, mut tf) in &mut query {
        let rotation = Quat::from_axis_angle(spin.axis, spin.speed * clock.delta);
        tf.rotate_around(spin.pivot, rotation);
    }
}

pub(super) fn glide_system(mut query: Query<(&Glide, &mut Transform)>) {
    for (glide, mut tf) in &mut query {
        if tf.translation != glide.target {
            tf.translation = glide_toward(tf.translation, glide.target, glide.factor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oscillation_is_bounded_by_amplitude() {
        for i in 0..500 {
            let v = oscillate(0.3, 2.0, 0.5, i as f32 * 0.01);
            assert!(v.abs() <= 0.3 + 1e-6);
        }
        assert_eq!(oscillate(1.0, 1.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn recycled_value_never_exceeds_upper() {
        let (lower, upper) = (-1.0, 2.0);
        let mut y = lower;
        for _ in 0..1_000 {
            let next = rise_and_recycle(y, 0.07, lower, upper);
            assert!(next <= upper);
            if next < y {
                // reset lands at-or-below the lower bound
                assert!(next <= lower);
            }
            y = next;
        }
    }

    #[test]
    fn recycling_is_idempotent_once_reset() {
        let once = rise_and_recycle(1.95, 0.1, 0.0, 2.0);
        assert_eq!(once, 0.0);
        let twice = rise_and_recycle(5.0, 0.1, 0.0, 2.0);
        assert_eq!(twice, once);
    }

    #[test]
    fn wrap_resets_to_opposite_wall() {
        let half = Vec3::splat(1.0);
        let wrapped = wrap_in_bounds(Vec3::new(1.2, 0.5, -1.1), Vec3::ZERO, half);
        assert_eq!(wrapped, Vec3::new(-1.0, 0.5, 1.0));
        let offset = wrap_in_bounds(Vec3::new(3.5, 2.0, 0.0), Vec3::new(2.0, 2.0, 0.0), half);
        assert_eq!(offset, Vec3::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn glide_converges_and_snaps() {
        let target = Vec3::new(1.0, -2.0, 0.5);
        let mut p = Vec3::ZERO;
        let mut last = p.distance(target);
        for _ in 0..400 {
            p = glide_toward(p, target, 0.08);
            let d = p.distance(target);
            assert!(d <= last);
            last = d;
        }
        assert_eq!(p, target);
    }

    #[test]
    fn systems_move_entities_in_place() {
        let mut app = App::new();
        app.insert_resource(SceneClock {
            elapsed: 1.0,
            delta: 0.5,
        });
        app.add_systems(Update, (oscillate_system, recycle_system, spin_system));

        let osc = app
            .world_mut()
            .spawn((
                Oscillator::new(Vec3::ZERO, Vec3::Y, 2.0, std::f32::consts::FRAC_PI_2),
                Transform::default(),
            ))
            .id();
        let bubble = app
            .world_mut()
            .spawn((Recycler::rising(1.0, 0.0, 1.2), Transform::from_xyz(3.0, 1.0, 0.0)))
            .id();
        let spinner = app
            .world_mut()
            .spawn((
                Spin::about_y(std::f32::consts::PI),
                Transform::from_xyz(1.0, 0.0, 0.0),
            ))
            .id();

        app.update();

        let world = app.world();
        let osc_y = world.get::<Transform>(osc).unwrap().translation.y;
        assert!((osc_y - 2.0).abs() < 1e-5);
        // 1.0 + 0.5 passes 1.2, so the bubble resets and keeps its x
        assert_eq!(
            world.get::<Transform>(bubble).unwrap().translation,
            Vec3::new(3.0, 0.0, 0.0)
        );
        let spun = world.get::<Transform>(spinner).unwrap().translation;
        assert!(spun.distance(Vec3::new(0.0, 0.0, -1.0)) < 1e-4);
    }
}
