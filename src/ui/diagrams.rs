//! Static explanatory panels: the proton-proton chain and the Sun-to-Earth
//! journey diagram.

use bevy_egui::{egui, EguiContexts};

use crate::facts::{
    PathStyle, FUSION_INTRO, FUSION_STEPS, TRAVEL_DISTANCE, TRAVEL_FUN_FACT, TRAVEL_PATHS,
};

/// Right panel width in points.
const PANEL_WIDTH: f32 = 380.0;

/// Colors for the explanatory panels.
mod colors {
    use bevy_egui::egui::Color32;

    pub const SECTION_BG: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 180);
    pub const BORDER: Color32 = Color32::WHITE;
    pub const HEADING: Color32 = Color32::WHITE;
    pub const TEXT: Color32 = Color32::from_rgb(225, 225, 235);
    pub const NOTE: Color32 = Color32::from_rgb(175, 175, 190);
}

/// System that renders both explanatory panels on the right side.
pub fn diagrams_panel(mut contexts: EguiContexts) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::SidePanel::right("explainers")
        .exact_width(PANEL_WIDTH)
        .resizable(false)
        .frame(
            egui::Frame::new()
                .fill(egui::Color32::TRANSPARENT)
                .inner_margin(egui::Margin::same(12)),
        )
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                section_frame().show(ui, fusion_section);
                ui.add_space(16.0);
                section_frame().show(ui, travel_section);
            });
        });
}

fn section_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::SECTION_BG)
        .stroke(egui::Stroke::new(2.0, colors::BORDER))
        .inner_margin(egui::Margin::same(16))
}

fn heading(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(16.0)
            .strong()
            .underline()
            .color(colors::HEADING),
    );
}

/// The "What is Nuclear Fusion?" section with the proton-proton chain steps.
fn fusion_section(ui: &mut egui::Ui) {
    ui.set_width(PANEL_WIDTH - 56.0);

    heading(ui, "What is Nuclear Fusion?");
    ui.add_space(6.0);
    for paragraph in FUSION_INTRO {
        ui.label(egui::RichText::new(*paragraph).size(12.5).color(colors::TEXT));
        ui.add_space(6.0);
    }

    ui.add_space(8.0);
    ui.vertical_centered(|ui| {
        heading(ui, "Proton-Proton Chain Reaction");
        ui.add_space(8.0);

        for step in FUSION_STEPS {
            ui.label(egui::RichText::new(step.title).size(12.5).color(colors::TEXT));
            ui.label(
                egui::RichText::new(step.reaction)
                    .size(15.0)
                    .color(colors::HEADING),
            );
            ui.label(
                egui::RichText::new(step.note)
                    .size(11.0)
                    .italics()
                    .color(colors::NOTE),
            );
            ui.add_space(10.0);
        }
    });
}

/// The Sun-to-Earth journey section with one line per travel path.
fn travel_section(ui: &mut egui::Ui) {
    ui.set_width(PANEL_WIDTH - 56.0);

    ui.vertical_centered(|ui| {
        heading(ui, "Journey from the Sun to Earth");
        ui.add_space(4.0);
        ui.label(
            egui::RichText::new(TRAVEL_DISTANCE)
                .size(11.5)
                .italics()
                .color(colors::NOTE),
        );
    });
    ui.add_space(10.0);

    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new("SUN")
                .size(20.0)
                .strong()
                .color(colors::HEADING),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new("EARTH")
                    .size(20.0)
                    .strong()
                    .color(colors::HEADING),
            );
        });
    });
    ui.add_space(6.0);

    for path in TRAVEL_PATHS {
        ui.label(egui::RichText::new(path.name).size(12.5).color(colors::TEXT));
        draw_travel_line(ui, path.style, path.duration);
        ui.add_space(10.0);
    }

    ui.add_space(4.0);
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(TRAVEL_FUN_FACT)
                .size(11.0)
                .italics()
                .color(colors::NOTE),
        );
    });
}

/// Paint one travel path as a styled horizontal line with the duration
/// centered above it.
fn draw_travel_line(ui: &mut egui::Ui, style: PathStyle, duration: &str) {
    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 18.0), egui::Sense::hover());

    let painter = ui.painter();
    let y = rect.bottom() - 4.0;
    let left = egui::pos2(rect.left(), y);
    let right = egui::pos2(rect.right(), y);
    let stroke = egui::Stroke::new(1.5, colors::HEADING);

    match style {
        PathStyle::Solid => {
            painter.line_segment([left, right], stroke);
        }
        PathStyle::Dashed => {
            painter.extend(egui::Shape::dashed_line(&[left, right], stroke, 6.0, 4.0));
        }
        PathStyle::Dotted => {
            painter.extend(egui::Shape::dashed_line(&[left, right], stroke, 1.5, 4.0));
        }
    }

    painter.text(
        egui::pos2(rect.center().x, y - 3.0),
        egui::Align2::CENTER_BOTTOM,
        duration,
        egui::FontId::proportional(10.5),
        colors::NOTE,
    );
}
