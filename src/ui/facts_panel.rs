//! Facts sidebar - a collapsible panel of solar data on the left edge.
//!
//! Slides in from the left with a short animation. The edge toggle button
//! rides along with the panel so it always sits on the visible border.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::facts::SOLAR_FACTS;

use super::icons;

/// Sidebar width in points.
pub const PANEL_WIDTH: f32 = 288.0;

/// Toggle button dimensions.
const BUTTON_WIDTH: f32 = 36.0;
const BUTTON_HEIGHT: f32 = 128.0;

/// Resource for facts sidebar state.
#[derive(Resource, Default)]
pub struct FactsPanelState {
    /// Whether the sidebar is open.
    pub open: bool,
    /// Animation progress (0.0 = closed, 1.0 = open).
    pub animation_progress: f32,
}

/// Colors for the sidebar UI.
mod colors {
    use bevy_egui::egui::Color32;

    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(10, 10, 16, 235);
    pub const BORDER: Color32 = Color32::WHITE;
    pub const LABEL: Color32 = Color32::from_rgb(230, 230, 240);
    pub const VALUE: Color32 = Color32::from_rgb(190, 190, 205);
}

/// System to render the facts sidebar.
pub fn facts_panel_system(
    mut contexts: EguiContexts,
    mut state: ResMut<FactsPanelState>,
    time: Res<Time>,
) {
    // Animate open/close (~150ms duration)
    let target = if state.open { 1.0 } else { 0.0 };
    let speed = 12.0; // Higher = faster, 12.0 ~ 150ms to 90% completion
    let delta = target - state.animation_progress;
    state.animation_progress += delta * speed * time.delta_secs();
    state.animation_progress = state.animation_progress.clamp(0.0, 1.0);

    if state.animation_progress < 0.01 {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let screen_height = ctx.screen_rect().height();
    let x = -PANEL_WIDTH * (1.0 - state.animation_progress);

    egui::Area::new(egui::Id::new("facts_panel"))
        .fixed_pos(egui::pos2(x, 0.0))
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(colors::PANEL_BG)
                .stroke(egui::Stroke::new(2.0, colors::BORDER))
                .inner_margin(egui::Margin::symmetric(20, 24))
                .show(ui, |ui| {
                    ui.set_width(PANEL_WIDTH - 40.0);
                    ui.set_min_height(screen_height - 48.0);

                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new("About Our Sun")
                                .size(22.0)
                                .strong()
                                .color(colors::LABEL),
                        );
                    });
                    ui.add_space(16.0);

                    egui::ScrollArea::vertical().show(ui, |ui| {
                        for fact in SOLAR_FACTS {
                            ui.horizontal(|ui| {
                                ui.label(
                                    egui::RichText::new(fact.label)
                                        .size(13.0)
                                        .strong()
                                        .color(colors::LABEL),
                                );
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Min),
                                    |ui| {
                                        ui.label(
                                            egui::RichText::new(fact.value)
                                                .size(13.0)
                                                .color(colors::VALUE),
                                        );
                                    },
                                );
                            });
                            ui.separator();
                        }
                    });
                });
        });
}

/// System to render the edge toggle button.
///
/// Sits at the left edge when the sidebar is closed and rides the sidebar's
/// right border while it slides.
pub fn facts_toggle_button(mut contexts: EguiContexts, mut state: ResMut<FactsPanelState>) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let x = PANEL_WIDTH * state.animation_progress;
    let y = ctx.screen_rect().height() / 2.0 - BUTTON_HEIGHT / 2.0;

    egui::Area::new(egui::Id::new("facts_toggle"))
        .fixed_pos(egui::pos2(x, y))
        .show(ctx, |ui| {
            let icon = if state.open { icons::CLOSE } else { icons::SUN };
            let button = egui::Button::new(egui::RichText::new(icon).size(18.0))
                .min_size(egui::vec2(BUTTON_WIDTH, BUTTON_HEIGHT));

            let tooltip = if state.open {
                "Collapse sun facts panel (F)"
            } else {
                "About Our Sun (F)"
            };

            if ui.add(button).on_hover_text(tooltip).clicked() {
                state.open = !state.open;
            }
        });
}

/// System to handle the keyboard shortcut for the sidebar.
pub fn facts_panel_keyboard(
    keys: Res<ButtonInput<KeyCode>>,
    mut state: ResMut<FactsPanelState>,
) {
    if keys.just_pressed(KeyCode::KeyF) {
        state.open = !state.open;
    }
}
