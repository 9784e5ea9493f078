mod catalog_page;
mod hud;
mod pricing;
mod shell;

use bevy::prelude::*;
use bevy_egui::{egui, EguiPlugin};

use crate::catalog::Page;

pub use catalog_page::{catalog_page_plugin, swatch_color};
pub use hud::{format_elapsed, hud_plugin};
pub use pricing::{pricing_plugin, PricingTier, PRICING_TIERS};
pub use shell::scene_panel_plugin;

pub(crate) const ACCENT: egui::Color32 = egui::Color32::from_rgb(100, 220, 180);
pub(crate) const PREMIUM: egui::Color32 = egui::Color32::from_rgb(240, 190, 90);
const TEXT: egui::Color32 = egui::Color32::from_rgb(200, 220, 240);

pub(crate) fn panel_frame() -> egui::Frame {
    egui::Frame::default()
        .fill(egui::Color32::from_rgba_premultiplied(15, 15, 25, 210))
        .inner_margin(egui::Margin::same(12))
        .corner_radius(egui::CornerRadius::same(6))
}

pub(crate) fn apply_panel_style(ui: &mut egui::Ui) {
    ui.style_mut().override_text_style = Some(egui::TextStyle::Monospace);
    ui.visuals_mut().override_text_color = Some(TEXT);
}

pub(crate) fn premium_badge(ui: &mut egui::Ui) {
    ui.label(egui::RichText::new("★ Premium").color(PREMIUM).strong());
}

/// Egui chrome shared by every page: catalog, pricing, Escape-to-catalog.
pub fn ui_plugin(app: &mut App) {
    app.add_plugins(EguiPlugin)
        .add_plugins((catalog_page_plugin, pricing_plugin))
        .add_systems(Update, escape_to_catalog_system);
}

fn escape_to_catalog_system(
    keys: Res<ButtonInput<KeyCode>>,
    page: Res<State<Page>>,
    mut next: ResMut<NextState<Page>>,
) {
    if keys.just_pressed(KeyCode::Escape) && *page.get() != Page::Catalog {
        next.set(Page::Catalog);
    }
}
