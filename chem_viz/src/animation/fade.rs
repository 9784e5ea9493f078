//! Material and scale animators: color lerp and scale decay.

use bevy::prelude::*;

const COLOR_SNAP: f32 = 1e-3;

/// Moves the entity's material color toward `target` each frame.
#[derive(Component, Clone, Copy, Debug)]
pub struct ColorFade {
    pub target: LinearRgba,
    pub factor: f32,
}

impl ColorFade {
    pub fn toward(target: Color, factor: f32) -> Self {
        Self {
            target: target.to_linear(),
            factor,
        }
    }
}

/// Shrinks a transient entity by `factor` per frame, despawning it below `cutoff`.
#[derive(Component, Clone, Copy, Debug)]
pub struct ScaleDecay {
    pub factor: f32,
    pub cutoff: f32,
}

impl Default for ScaleDecay {
    fn default() -> Self {
        Self {
            factor: 0.97,
            cutoff: 0.02,
        }
    }
}

pub fn color_distance(a: LinearRgba, b: LinearRgba) -> f32 {
    let d = [
        a.red - b.red,
        a.green - b.green,
        a.blue - b.blue,
        a.alpha - b.alpha,
    ];
    d.iter().map(|c| c * c).sum::<f32>().sqrt()
}

pub fn lerp_color_toward(current: LinearRgba, target: LinearRgba, factor: f32) -> LinearRgba {
    let mix = |a: f32, b: f32| a + (b - a) * factor;
    let next = LinearRgba::new(
        mix(current.red, target.red),
        mix(current.green, target.green),
        mix(current.blue, target.blue),
        mix(current.alpha, target.alpha),
    );
    if color_distance(next, target) < COLOR_SNAP {
        target
    } else {
        next
    }
}

/// Next scale after one frame of decay; collapses to zero below `cutoff`.
pub fn decay_scale(scale: f32, factor: f32, cutoff: f32) -> f32 {
    let next = scale * factor;
    if next < cutoff {
        0.0
    } else {
        next
    }
}

pub(super) fn color_fade_system(
    query: Query<(&ColorFade, &MeshMaterial3d<StandardMaterial>)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (fade, handle) in &query {
        let Some(current) = materials.get(&handle.0).map(|m| m.base_color.to_linear()) else {
            continue;
        };
        if current == fade.target {
            continue;
        }
        if let Some(material) = materials.get_mut(&handle.0) {
            material.base_color = lerp_color_toward(current, fade.target, fade.factor).into();
        }
    }
}

pub(super) fn scale_decay_system(
    mut commands: Commands,
    mut query: Query<(Entity, &ScaleDecay, &mut Transform)>,
) {
    for (entity, decay, mut tf) in &mut query {
        let next = decay_scale(tf.scale.max_element(), decay.factor, decay.cutoff);
        if next == 0.0 {
            commands.entity(entity).despawn_recursive();
        } else {
            tf.scale *= decay.factor;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_lerp_monotonically_reaches_target() {
        let target = LinearRgba::new(0.1, 0.9, 0.2, 1.0);
        let mut color = LinearRgba::new(1.0, 0.0, 1.0, 0.3);
        let factor = 0.05;
        let mut last = color_distance(color, target);
        let mut steps = 0;
        while color != target {
            color = lerp_color_toward(color, target, factor);
            let d = color_distance(color, target);
            assert!(d < last, "distance must shrink each step");
            last = d;
            steps += 1;
            assert!(steps <= 200, "target not reached in bounded steps");
        }
    }

    #[test]
    fn scale_decays_to_zero() {
        let mut scale = 1.0;
        let mut frames = 0;
        while scale > 0.0 {
            let next = decay_scale(scale, 0.9, 0.01);
            assert!(next < scale);
            scale = next;
            frames += 1;
        }
        assert!(frames < 60);
    }

    #[test]
    fn fade_system_updates_material_and_decay_despawns() {
        let mut app = App::new();
        app.init_resource::<Assets<StandardMaterial>>();
        app.add_systems(Update, (color_fade_system, scale_decay_system));

        let handle = app
            .world_mut()
            .resource_mut::<Assets<StandardMaterial>>()
            .add(StandardMaterial {
                base_color: Color::BLACK,
                ..default()
            });
        app.world_mut().spawn((
            MeshMaterial3d(handle.clone()),
            ColorFade::toward(Color::WHITE, 1.0),
        ));
        let fading = app
            .world_mut()
            .spawn((
                Transform::from_scale(Vec3::splat(0.015)),
                ScaleDecay::default(),
            ))
            .id();

        app.update();

        let materials = app.world().resource::<Assets<StandardMaterial>>();
        let color = materials.get(&handle).unwrap().base_color.to_linear();
        assert_eq!(color, Color::WHITE.to_linear());
        assert!(app.world().get_entity(fading).is_err());
    }
}
