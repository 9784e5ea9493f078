//! Static pricing table. Nothing here checks or grants access.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use super::catalog_page::spawn_page_camera;
use super::{apply_panel_style, panel_frame, ACCENT, PREMIUM};
use crate::catalog::Page;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PricingTier {
    pub name: &'static str,
    pub price: &'static str,
    pub features: &'static [&'static str],
    pub highlighted: bool,
}

pub const PRICING_TIERS: [PricingTier; 3] = [
    PricingTier {
        name: "Free",
        price: "$0",
        features: &[
            "Atomic structure",
            "Molecular geometry",
            "Ionic lattices",
        ],
        highlighted: false,
    },
    PricingTier {
        name: "Student",
        price: "$4 / month",
        features: &[
            "Every simulation",
            "Organic mechanisms",
            "Electrochemistry",
        ],
        highlighted: true,
    },
    PricingTier {
        name: "Classroom",
        price: "$49 / year",
        features: &[
            "Everything in Student",
            "Up to 40 seats",
            "Presentation mode",
        ],
        highlighted: false,
    },
];

pub fn pricing_plugin(app: &mut App) {
    app.add_systems(OnEnter(Page::Pricing), spawn_page_camera)
        .add_systems(Update, pricing_page_system.run_if(in_state(Page::Pricing)));
}

fn pricing_page_system(mut contexts: EguiContexts, mut next: ResMut<NextState<Page>>) {
    egui::CentralPanel::default()
        .frame(panel_frame())
        .show(contexts.ctx_mut(), |ui| {
            apply_panel_style(ui);
            if ui.link("← All simulations").clicked() {
                next.set(Page::Catalog);
            }
            ui.add_space(6.0);
            ui.label(egui::RichText::new("Plans").size(24.0).color(ACCENT));
            ui.add_space(8.0);

            ui.horizontal_wrapped(|ui| {
                for tier in &PRICING_TIERS {
                    egui::Frame::group(ui.style())
                        .inner_margin(egui::Margin::same(10))
                        .show(ui, |ui| {
                            ui.set_width(200.0);
                            let name = egui::RichText::new(tier.name).size(18.0).strong();
                            ui.label(if tier.highlighted {
                                name.color(PREMIUM)
                            } else {
                                name
                            });
                            ui.label(egui::RichText::new(tier.price).size(16.0));
                            ui.separator();
                            for feature in tier.features {
                                ui.label(format!("• {feature}"));
                            }
                        });
                }
            });
        });
}
