//! Per-frame animators.
//!
//! Every animator is a component plus a pure step function; the systems here
//! only read the [`SceneClock`] and apply the step to the entity's transform
//! or material in place.

mod fade;
mod motion;

use bevy::prelude::*;

pub use fade::{color_distance, decay_scale, lerp_color_toward, ColorFade, ScaleDecay};
pub use motion::{
    glide_toward, oscillate, rise_and_recycle, wrap_in_bounds, Drifter, Glide, Orbiter,
    Oscillator, Recycler, Spin,
};

/// Seconds since the current scene was mounted.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct SceneClock {
    pub elapsed: f32,
    pub delta: f32,
}

impl SceneClock {
    pub fn advance(&mut self, delta: f32) {
        self.delta = delta;
        self.elapsed += delta;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationSet {
    Clock,
    Animate,
}

pub fn animation_plugin(app: &mut App) {
    app.init_resource::<SceneClock>()
        .configure_sets(Update, (AnimationSet::Clock, AnimationSet::Animate).chain())
        .add_systems(Update, tick_scene_clock.in_set(AnimationSet::Clock))
        .add_systems(
            Update,
            (
                motion::oscillate_system,
                motion::orbit_system,
                motion::recycle_system,
                motion::drift_system,
                motion::spin_system,
                motion::glide_system,
                fade::color_fade_system,
                fade::scale_decay_system,
            )
                .in_set(AnimationSet::Animate),
        );
}

fn tick_scene_clock(time: Res<Time>, mut clock: ResMut<SceneClock>) {
    clock.advance(time.delta_secs());
}
