//! Landing page: free and premium simulation cards.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use super::{apply_panel_style, panel_frame, premium_badge, ACCENT};
use crate::catalog::{partition, Page, SimulationDescriptor, CATALOG};

const FALLBACK_SWATCH: egui::Color32 = egui::Color32::from_rgb(120, 120, 130);

pub fn catalog_page_plugin(app: &mut App) {
    app.add_systems(OnEnter(Page::Catalog), spawn_page_camera)
        .add_systems(
            Update,
            catalog_page_system.run_if(in_state(Page::Catalog)),
        );
}

/// 2D camera for the egui-only pages.
#[derive(Component)]
pub struct PageCamera;

pub(super) fn spawn_page_camera(mut commands: Commands, page: Res<State<Page>>) {
    commands.spawn((Camera2d, PageCamera, StateScoped(*page.get())));
}

/// Card swatch from a `#rrggbb` catalog color; malformed hex falls back to gray.
pub fn swatch_color(hex: &str) -> egui::Color32 {
    let Ok(color) = Srgba::hex(hex) else {
        return FALLBACK_SWATCH;
    };
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgb(channel(color.red), channel(color.green), channel(color.blue))
}

fn catalog_page_system(mut contexts: EguiContexts, mut next: ResMut<NextState<Page>>) {
    let sections = partition(CATALOG);
    egui::CentralPanel::default()
        .frame(panel_frame())
        .show(contexts.ctx_mut(), |ui| {
            apply_panel_style(ui);
            ui.label(egui::RichText::new("ChemScope").size(26.0).color(ACCENT));
            ui.label("Interactive 3D chemistry, one concept per scene.");
            ui.horizontal(|ui| {
                if ui.link("Plans & pricing").clicked() {
                    next.set(Page::Pricing);
                }
            });
            ui.add_space(8.0);

            egui::ScrollArea::vertical().show(ui, |ui| {
                section(ui, "Free", &sections.free, &mut next);
                section(ui, "Premium · General", &sections.general_premium, &mut next);
                section(ui, "Premium · Organic", &sections.organic_premium, &mut next);
            });
        });
}

fn section(
    ui: &mut egui::Ui,
    heading: &str,
    cards: &[&SimulationDescriptor],
    next: &mut NextState<Page>,
) {
    if cards.is_empty() {
        return;
    }
    ui.add_space(6.0);
    ui.label(egui::RichText::new(heading).size(18.0).strong());
    ui.separator();
    ui.horizontal_wrapped(|ui| {
        for descriptor in cards {
            card(ui, descriptor, next);
        }
    });
}

fn card(ui: &mut egui::Ui, descriptor: &SimulationDescriptor, next: &mut NextState<Page>) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(8))
        .show(ui, |ui| {
            ui.set_width(260.0);
            ui.horizontal(|ui| {
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                ui.painter()
                    .rect_filled(rect, 3.0, swatch_color(descriptor.color));
                ui.label(egui::RichText::new(descriptor.title).strong());
                ui.weak(format!("[{}]", descriptor.icon));
            });
            ui.label(descriptor.desc);
            ui.horizontal(|ui| {
                if ui.button("Open").clicked() {
                    next.set(Page::Simulation(descriptor.id));
                }
                // the badge is presentation only; premium scenes still open
                if descriptor.is_premium {
                    premium_badge(ui);
                    if ui.link("Pricing").clicked() {
                        next.set(Page::Pricing);
                    }
                }
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swatch_parses_catalog_hex() {
        assert_eq!(swatch_color("#ff8000"), egui::Color32::from_rgb(255, 128, 0));
        assert_eq!(swatch_color("not a color"), FALLBACK_SWATCH);
    }

    #[test]
    fn every_catalog_color_is_valid_hex() {
        for descriptor in CATALOG {
            assert!(Srgba::hex(descriptor.color).is_ok(), "{}", descriptor.id);
        }
    }
}
