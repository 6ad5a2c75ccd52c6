//! Rotation controls dock at the bottom of the screen.
//!
//! Play/pause toggle, elapsed-days readout, mode selection, speed slider,
//! and reset.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::types::{RotationMode, SolarClock, MAX_SPEED, MIN_SPEED};

use super::icons;

/// Colors for the dock UI.
mod colors {
    use bevy_egui::egui::Color32;

    pub const DOCK_BG: Color32 = Color32::from_rgba_premultiplied(20, 20, 30, 230);
    pub const PLAY_ICON: Color32 = Color32::from_rgb(85, 221, 136);
    pub const PAUSE_ICON: Color32 = Color32::from_rgb(221, 170, 85);
    pub const TEXT: Color32 = Color32::from_rgb(220, 220, 230);
    pub const CAPTION: Color32 = Color32::from_rgb(160, 160, 175);
}

/// System that renders the rotation controls dock.
pub fn controls_panel(mut contexts: EguiContexts, mut clock: ResMut<SolarClock>) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::TopBottomPanel::bottom("rotation_controls")
        .exact_height(56.0)
        .frame(
            egui::Frame::new()
                .fill(colors::DOCK_BG)
                .inner_margin(egui::Margin::symmetric(16, 8)),
        )
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.spacing_mut().item_spacing.x = 12.0;

                render_play_pause(ui, &mut clock);

                ui.separator();

                // Elapsed time display
                ui.label(
                    egui::RichText::new(format!("{:8.2} days", clock.elapsed_days))
                        .monospace()
                        .size(15.0)
                        .color(colors::TEXT),
                );

                ui.separator();

                render_mode_buttons(ui, &mut clock);

                ui.separator();

                render_speed_slider(ui, &mut clock);

                // Reset button, pushed to the right edge
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button(egui::RichText::new(icons::RESET).size(18.0))
                        .on_hover_text("Reset (R)")
                        .clicked()
                    {
                        clock.reset();
                    }
                });
            });
        });
}

/// Render the play/pause toggle button.
fn render_play_pause(ui: &mut egui::Ui, clock: &mut SolarClock) {
    let (icon, color, tooltip) = if clock.playing {
        (icons::PAUSE, colors::PAUSE_ICON, "Pause (Space)")
    } else {
        (icons::PLAY, colors::PLAY_ICON, "Play (Space)")
    };

    let button = egui::Button::new(egui::RichText::new(icon).size(20.0).color(color))
        .min_size(egui::vec2(36.0, 32.0));

    if ui.add(button).on_hover_text(tooltip).clicked() {
        clock.toggle_play();
    }
}

/// Render the mode buttons (mutually exclusive) with the current period caption.
fn render_mode_buttons(ui: &mut egui::Ui, clock: &mut SolarClock) {
    for mode in [RotationMode::Sidereal, RotationMode::Synodic] {
        let selected = clock.mode == mode;
        if ui
            .selectable_label(selected, mode.label())
            .on_hover_text(mode.caption())
            .clicked()
        {
            clock.set_mode(mode);
        }
    }

    ui.label(
        egui::RichText::new(clock.mode.caption())
            .size(11.5)
            .color(colors::CAPTION),
    );
}

/// Render the speed slider.
fn render_speed_slider(ui: &mut egui::Ui, clock: &mut SolarClock) {
    ui.label(egui::RichText::new("Speed").color(colors::TEXT));

    let mut speed = clock.speed;
    if ui
        .add(
            egui::Slider::new(&mut speed, MIN_SPEED..=MAX_SPEED)
                .suffix("x")
                .fixed_decimals(1),
        )
        .on_hover_text("Animation speed (Up/Down)")
        .changed()
    {
        clock.set_speed(speed);
    }
}
