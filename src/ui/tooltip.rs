//! Floating info tooltip for the hovered shell.
//!
//! Follows the cursor with a small offset and is clamped to the screen so it
//! never renders off the edge.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::layers;
use crate::render::HoveredLayer;

/// Tooltip box width in points.
const TOOLTIP_WIDTH: f32 = 256.0;

/// Estimated tooltip height used for edge clamping.
const TOOLTIP_HEIGHT: f32 = 140.0;

/// Offset from the cursor to the tooltip corner.
const CURSOR_OFFSET: f32 = 15.0;

/// Anchor position for a tooltip of `size` near `cursor`.
///
/// Prefers below-right of the cursor; flips to the other side of the cursor
/// when it would leave the screen, then clamps to the screen rect.
pub fn anchored_pos(screen: egui::Rect, cursor: egui::Pos2, size: egui::Vec2) -> egui::Pos2 {
    let mut x = cursor.x + CURSOR_OFFSET;
    if x + size.x > screen.right() {
        x = cursor.x - CURSOR_OFFSET - size.x;
    }

    let mut y = cursor.y + CURSOR_OFFSET;
    if y + size.y > screen.bottom() {
        y = cursor.y - CURSOR_OFFSET - size.y;
    }

    egui::pos2(x.max(screen.left()), y.max(screen.top()))
}

/// System to render the tooltip for the hovered shell.
pub fn layer_tooltip(mut contexts: EguiContexts, hovered: Res<HoveredLayer>) {
    let Some(id) = hovered.layer else {
        return;
    };
    let layer = layers::get(id);

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let Some(cursor) = ctx.input(|i| i.pointer.hover_pos()) else {
        return;
    };

    let pos = anchored_pos(
        ctx.screen_rect(),
        cursor,
        egui::vec2(TOOLTIP_WIDTH, TOOLTIP_HEIGHT),
    );

    egui::Area::new(egui::Id::new("layer_tooltip"))
        .fixed_pos(pos)
        .order(egui::Order::Tooltip)
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(egui::Color32::BLACK)
                .stroke(egui::Stroke::new(2.0, egui::Color32::WHITE))
                .inner_margin(egui::Margin::same(12))
                .show(ui, |ui| {
                    ui.set_width(TOOLTIP_WIDTH - 24.0);

                    ui.label(
                        egui::RichText::new(layer.name)
                            .size(20.0)
                            .strong()
                            .color(egui::Color32::WHITE),
                    );
                    ui.add_space(6.0);
                    ui.label(
                        egui::RichText::new(layer.description)
                            .size(13.0)
                            .color(egui::Color32::WHITE),
                    );
                });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> egui::Rect {
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1280.0, 720.0))
    }

    #[test]
    fn test_anchor_below_right_of_cursor() {
        let pos = anchored_pos(screen(), egui::pos2(100.0, 100.0), egui::vec2(256.0, 140.0));
        assert_eq!(pos, egui::pos2(115.0, 115.0));
    }

    #[test]
    fn test_anchor_flips_at_right_edge() {
        let pos = anchored_pos(screen(), egui::pos2(1200.0, 100.0), egui::vec2(256.0, 140.0));
        assert_eq!(pos.x, 1200.0 - 15.0 - 256.0);
        assert_eq!(pos.y, 115.0);
    }

    #[test]
    fn test_anchor_flips_at_bottom_edge() {
        let pos = anchored_pos(screen(), egui::pos2(100.0, 700.0), egui::vec2(256.0, 140.0));
        assert_eq!(pos.x, 115.0);
        assert_eq!(pos.y, 700.0 - 15.0 - 140.0);
    }

    #[test]
    fn test_anchor_never_leaves_screen() {
        for cursor in [
            egui::pos2(0.0, 0.0),
            egui::pos2(1280.0, 720.0),
            egui::pos2(0.0, 720.0),
            egui::pos2(1280.0, 0.0),
        ] {
            let size = egui::vec2(256.0, 140.0);
            let pos = anchored_pos(screen(), cursor, size);
            assert!(pos.x >= 0.0 && pos.y >= 0.0, "off-screen at {cursor:?}");
            assert!(
                pos.x + size.x <= 1280.0 && pos.y + size.y <= 720.0,
                "overflow at {cursor:?}"
            );
        }
    }
}
