use std::collections::HashSet;

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use chem_viz::animation::{animation_plugin, Drifter, Glide, ScaleDecay};
use chem_viz::catalog::{Page, SimulationId};
use chem_viz::render::{SceneContent, SceneSeed, SceneShell};
use chem_viz::scene::atomic_structure::AtomControls;
use chem_viz::scene::elements::Element;
use chem_viz::scene::gas_laws::{thermal_speed_scale, GasControls, GasParticle};
use chem_viz::scene::polymerization::{PolymerControls, PolymerKind};
use chem_viz::scene::precipitation::{PrecipitateSite, PrecipitationControls};
use chem_viz::scene::register_scenes;
use chem_viz::scene::sn2_mechanism::{keyframe, MechanismPart, Role, Sn2Controls};

fn headless_app(start: Page) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin))
        .init_resource::<Assets<Mesh>>()
        .init_resource::<Assets<StandardMaterial>>()
        .insert_resource(SceneSeed(Some(7)))
        .insert_state(start)
        .enable_state_scoped_entities::<Page>();
    animation_plugin(&mut app);
    register_scenes(&mut app, false);
    app
}

fn mounted(id: SimulationId) -> App {
    let mut app = headless_app(Page::Simulation(id));
    app.update();
    app.update();
    app
}

fn content(app: &mut App) -> HashSet<Entity> {
    let mut query = app
        .world_mut()
        .query_filtered::<Entity, With<SceneContent>>();
    query.iter(app.world()).collect()
}

fn count<C: Component>(app: &mut App) -> usize {
    let mut query = app.world_mut().query_filtered::<(), With<C>>();
    query.iter(app.world()).count()
}

fn navigate(app: &mut App, page: Page) {
    app.world_mut().resource_mut::<NextState<Page>>().set(page);
    app.update();
    app.update();
}

#[test]
fn every_scene_mounts_and_tears_down() {
    let mut app = headless_app(Page::Catalog);
    app.update();

    for id in SimulationId::ALL {
        navigate(&mut app, Page::Simulation(id));
        assert!(!content(&mut app).is_empty(), "{id} spawned nothing");
        assert_eq!(count::<Camera3d>(&mut app), 1, "{id} camera");
        let shell = app.world().resource::<SceneShell>();
        assert_eq!(shell.page, Page::Simulation(id));
        assert_eq!(shell.title, id.descriptor().title);

        navigate(&mut app, Page::Catalog);
        assert!(content(&mut app).is_empty(), "{id} left entities behind");
        assert_eq!(count::<Camera3d>(&mut app), 0);
        assert!(!app.world().contains_resource::<SceneShell>());
    }
}

#[test]
fn structural_change_rebuilds_the_scene() {
    let mut app = mounted(SimulationId::AtomicStructure);
    // carbon: nucleus, two orbit guides, six electrons
    assert_eq!(content(&mut app).len(), 9);

    app.world_mut().resource_mut::<AtomControls>().element = Element::Na;
    app.update();

    // sodium: nucleus, three orbit guides, eleven electrons
    assert_eq!(content(&mut app).len(), 15);
}

#[test]
fn temperature_retunes_particles_in_place() {
    let mut app = mounted(SimulationId::GasLaws);
    let before = content(&mut app);
    assert_eq!(count::<GasParticle>(&mut app), GasControls::default().particle_count);

    app.world_mut().resource_mut::<GasControls>().temperature = 600.0;
    app.update();

    assert_eq!(content(&mut app), before);
    let expected = thermal_speed_scale(600.0);
    let mut drifters = app
        .world_mut()
        .query_filtered::<&Drifter, With<GasParticle>>();
    assert!(drifters
        .iter(app.world())
        .all(|d| (d.speed - expected).abs() < 1e-6));
}

#[test]
fn mechanism_stage_retargets_glides() {
    let mut app = mounted(SimulationId::Sn2Mechanism);
    let before = content(&mut app);

    {
        let mut controls = app.world_mut().resource_mut::<Sn2Controls>();
        controls.playing = false;
        controls.steps.set(1);
    }
    app.update();

    assert_eq!(content(&mut app), before);
    let mut parts = app.world_mut().query::<(&MechanismPart, &Glide)>();
    for (part, glide) in parts.iter(app.world()) {
        assert_eq!(glide.target, keyframe(part.role, 1));
    }
    let nucleophile = parts
        .iter(app.world())
        .find(|(part, _)| part.role == Role::Nucleophile);
    assert!(nucleophile.is_some());
}

#[test]
fn precipitate_appears_from_the_center_outward() {
    let mut app = mounted(SimulationId::Precipitation);
    {
        let mut controls = app.world_mut().resource_mut::<PrecipitationControls>();
        controls.playing = false;
        controls.steps.set(2);
    }
    app.update();

    let mut sites = app
        .world_mut()
        .query::<(&PrecipitateSite, &Visibility)>();
    let visible: Vec<i32> = sites
        .iter(app.world())
        .filter(|(_, v)| **v != Visibility::Hidden)
        .map(|(site, _)| site.shell)
        .collect();
    assert_eq!(visible, vec![0]);
}

#[test]
fn condensation_water_shrinks_away() {
    let mut app = mounted(SimulationId::Polymerization);
    {
        let mut controls = app.world_mut().resource_mut::<PolymerControls>();
        controls.playing = false;
        controls.kind = PolymerKind::Condensation;
        controls.steps.set(1);
    }
    app.update();
    assert_eq!(count::<ScaleDecay>(&mut app), 3);

    for _ in 0..200 {
        app.update();
    }
    assert_eq!(count::<ScaleDecay>(&mut app), 0);
}

#[test]
fn pausing_keeps_the_polymer_in_place() {
    let mut app = mounted(SimulationId::Polymerization);
    {
        let mut controls = app.world_mut().resource_mut::<PolymerControls>();
        controls.playing = false;
        controls.kind = PolymerKind::Condensation;
        controls.steps.set(2);
    }
    app.update();
    for _ in 0..200 {
        app.update();
    }
    assert_eq!(count::<ScaleDecay>(&mut app), 0);
    let before = content(&mut app);

    app.world_mut().resource_mut::<PolymerControls>().playing = true;
    app.update();
    app.world_mut().resource_mut::<PolymerControls>().playing = false;
    app.update();

    assert_eq!(content(&mut app), before);
    assert_eq!(count::<ScaleDecay>(&mut app), 0);
}

#[test]
fn gas_particles_carry_no_baked_glow() {
    let mut app = mounted(SimulationId::GasLaws);
    let mut particles = app
        .world_mut()
        .query_filtered::<&MeshMaterial3d<StandardMaterial>, With<GasParticle>>();
    let handles: Vec<_> = particles
        .iter(app.world())
        .map(|m| m.0.clone())
        .collect();
    assert!(!handles.is_empty());

    let materials = app.world().resource::<Assets<StandardMaterial>>();
    for handle in &handles {
        let material = materials.get(handle).unwrap();
        assert_eq!(material.emissive, LinearRgba::BLACK);
    }
}
