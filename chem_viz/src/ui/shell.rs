//! Scene sidebar: title, description, navigation and the scene's own controls.

use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use super::{apply_panel_style, panel_frame, premium_badge, ACCENT};
use crate::catalog::Page;
use crate::render::{ChemScene, SceneShell};

/// Adds the sidebar for scene `S` while its page is active.
pub fn scene_panel_plugin<S: ChemScene>(app: &mut App) {
    app.add_systems(
        Update,
        scene_panel_system::<S>
            .run_if(in_state(S::page()))
            .run_if(resource_exists::<S::Controls>)
            .run_if(resource_exists::<SceneShell>),
    );
}

fn scene_panel_system<S: ChemScene>(
    mut contexts: EguiContexts,
    shell: Res<SceneShell>,
    mut controls: ResMut<S::Controls>,
    mut next: ResMut<NextState<Page>>,
    diagnostics: Option<Res<DiagnosticsStore>>,
) {
    let fps = diagnostics
        .as_ref()
        .and_then(|d| d.get(&FrameTimeDiagnosticsPlugin::FPS))
        .and_then(|d| d.smoothed());

    // only a real edit marks the controls changed
    let mut draft = controls.clone();

    egui::SidePanel::left("scene_shell")
        .default_width(300.0)
        .frame(panel_frame())
        .show(contexts.ctx_mut(), |ui| {
            apply_panel_style(ui);
            if ui.link("← All simulations").clicked() {
                next.set(Page::Catalog);
            }
            ui.add_space(6.0);
            ui.label(egui::RichText::new(shell.title.as_str()).size(18.0).color(ACCENT));
            if shell.is_premium {
                ui.horizontal(|ui| {
                    premium_badge(ui);
                    if ui.link("Pricing").clicked() {
                        next.set(Page::Pricing);
                    }
                });
            }
            ui.add_space(4.0);
            ui.label(shell.description.as_str());
            ui.separator();

            S::controls_ui(ui, &mut draft);

            ui.separator();
            ui.label(shell.page.path());
            match fps {
                Some(fps) => ui.label(format!("FPS  {fps:.0}")),
                None => ui.label("Drag to orbit, scroll to zoom"),
            };
        });

    controls.set_if_neq(draft);
}
