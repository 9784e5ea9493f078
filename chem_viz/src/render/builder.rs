use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::catalog::Page;
use crate::layout::Segment;
use crate::render::SceneContent;

/// Spawns scene geometry from primitives. Every entity it creates is tagged
/// [`SceneContent`] and scoped to the scene's page, so leaving the page or
/// rebuilding the scene removes it.
pub struct SceneBuilder<'a, 'w, 's> {
    commands: &'a mut Commands<'w, 's>,
    meshes: &'a mut Assets<Mesh>,
    materials: &'a mut Assets<StandardMaterial>,
    page: Page,
    rng: StdRng,
}

impl<'a, 'w, 's> SceneBuilder<'a, 'w, 's> {
    pub fn new(
        commands: &'a mut Commands<'w, 's>,
        meshes: &'a mut Assets<Mesh>,
        materials: &'a mut Assets<StandardMaterial>,
        page: Page,
        seed: u64,
    ) -> Self {
        Self {
            commands,
            meshes,
            materials,
            page,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Random source seeded once per mount.
    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    pub fn material(&mut self, color: Color) -> Handle<StandardMaterial> {
        self.materials.add(StandardMaterial {
            base_color: color,
            perceptual_roughness: 0.45,
            ..default()
        })
    }

    pub fn glowing(&mut self, color: Color, intensity: f32) -> Handle<StandardMaterial> {
        let lin = color.to_linear();
        self.materials.add(StandardMaterial {
            base_color: color,
            emissive: LinearRgba::rgb(
                lin.red * intensity,
                lin.green * intensity,
                lin.blue * intensity,
            ),
            ..default()
        })
    }

    pub fn translucent(&mut self, color: Color) -> Handle<StandardMaterial> {
        self.materials.add(StandardMaterial {
            base_color: color,
            alpha_mode: AlphaMode::Blend,
            ..default()
        })
    }

    pub fn spawn(
        &mut self,
        mesh: impl Into<Mesh>,
        material: Handle<StandardMaterial>,
        transform: Transform,
    ) -> EntityCommands<'_> {
        let mesh = self.meshes.add(mesh);
        self.commands.spawn((
            Mesh3d(mesh),
            MeshMaterial3d(material),
            transform,
            SceneContent,
            StateScoped(self.page),
        ))
    }

    pub fn atom(&mut self, center: Vec3, radius: f32, color: Color) -> EntityCommands<'_> {
        let material = self.material(color);
        self.spawn(
            Sphere::new(radius),
            material,
            Transform::from_translation(center),
        )
    }

    /// Cylinder stretched along `segment`.
    pub fn bond(&mut self, segment: Segment, radius: f32, color: Color) -> EntityCommands<'_> {
        let material = self.material(color);
        self.spawn(
            Cylinder::new(radius, segment.length()),
            material,
            segment.transform(),
        )
    }

    pub fn block(&mut self, center: Vec3, size: Vec3, color: Color) -> EntityCommands<'_> {
        let material = self.material(color);
        self.spawn(
            Cuboid::from_size(size),
            material,
            Transform::from_translation(center),
        )
    }

    /// See-through box: beakers, containers, solution volumes.
    pub fn glass(&mut self, center: Vec3, size: Vec3, color: Color) -> EntityCommands<'_> {
        let material = self.translucent(color);
        self.spawn(
            Cuboid::from_size(size),
            material,
            Transform::from_translation(center),
        )
    }

    /// Flat ring in the XZ plane (orbit guides, π clouds).
    pub fn torus(
        &mut self,
        center: Vec3,
        major_radius: f32,
        minor_radius: f32,
        color: Color,
    ) -> EntityCommands<'_> {
        let material = self.translucent(color);
        self.spawn(
            Torus::new(major_radius - minor_radius, major_radius + minor_radius),
            material,
            Transform::from_translation(center),
        )
    }
}
