//! HUD overlay: route, scene clock, entity count, FPS counter.

use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use super::{apply_panel_style, panel_frame, ACCENT};
use crate::animation::SceneClock;
use crate::render::{SceneContent, SceneShell};

pub fn hud_plugin(app: &mut App) {
    app.add_plugins(FrameTimeDiagnosticsPlugin)
        .add_systems(Update, hud_overlay_system.run_if(resource_exists::<SceneShell>));
}

fn hud_overlay_system(
    mut contexts: EguiContexts,
    shell: Res<SceneShell>,
    clock: Res<SceneClock>,
    content: Query<(), With<SceneContent>>,
    diagnostics: Res<DiagnosticsStore>,
) {
    let fps = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|d| d.smoothed())
        .unwrap_or(0.0);

    egui::Window::new("Scene")
        .anchor(egui::Align2::RIGHT_TOP, [-10.0, 10.0])
        .resizable(false)
        .collapsible(false)
        .title_bar(false)
        .frame(panel_frame())
        .show(contexts.ctx_mut(), |ui| {
            apply_panel_style(ui);
            ui.label(egui::RichText::new(shell.page.path()).color(ACCENT));
            ui.label(format!("t  {}", format_elapsed(clock.elapsed)));
            ui.label(format!("Objects  {}", content.iter().count()));
            ui.label(format!("FPS  {fps:.0}"));
        });
}

/// `mm:ss.s` since the scene was mounted.
pub fn format_elapsed(secs: f32) -> String {
    let secs = secs.max(0.0);
    let mins = (secs / 60.0).floor() as u32;
    format!("{mins:02}:{:04.1}", secs - mins as f32 * 60.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_formats_minutes_and_tenths() {
        assert_eq!(format_elapsed(0.0), "00:00.0");
        assert_eq!(format_elapsed(75.3), "01:15.3");
        assert_eq!(format_elapsed(-3.0), "00:00.0");
    }
}
