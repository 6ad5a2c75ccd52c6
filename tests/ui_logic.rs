//! UI logic tests for shell hover picking and tooltip anchoring.
//!
//! Tests pure logic functions extracted from the render and UI systems.

use bevy_egui::egui;
use helioscope::layers::{self, SunLayerId};
use helioscope::render::SUN_SCALE;
use helioscope::ui::tooltip::anchored_pos;

// ============================================================================
// Shell hover picking (concentric disc hit testing)
// ============================================================================

/// Mirror of the hover system's distance mapping: world distance to catalog
/// units before the lookup.
fn pick_at_world_distance(world_distance: f32) -> Option<SunLayerId> {
    layers::layer_at(world_distance / SUN_SCALE).map(|l| l.id)
}

#[test]
fn test_center_hits_core() {
    assert_eq!(pick_at_world_distance(0.0), Some(SunLayerId::Core));
}

#[test]
fn test_each_band_hits_its_own_shell() {
    // Catalog radii: 18, 40, 65, 70, 75, 95; world distances are scaled 0.7.
    let cases = [
        (10.0, SunLayerId::Core),
        (30.0, SunLayerId::RadiativeZone),
        (50.0, SunLayerId::ConvectiveZone),
        (67.0, SunLayerId::Photosphere),
        (72.0, SunLayerId::Chromosphere),
        (90.0, SunLayerId::Corona),
    ];

    for (catalog_distance, expected) in cases {
        let world_distance = catalog_distance * SUN_SCALE;
        assert_eq!(
            pick_at_world_distance(world_distance),
            Some(expected),
            "at catalog distance {catalog_distance}"
        );
    }
}

#[test]
fn test_outside_corona_hits_nothing() {
    assert_eq!(pick_at_world_distance(95.1 * SUN_SCALE), None);
    assert_eq!(pick_at_world_distance(500.0), None);
}

#[test]
fn test_inner_shell_wins_on_shared_boundary() {
    // Discs paint inner-over-outer, so the boundary belongs to the inner shell.
    assert_eq!(layers::layer_at(18.0).map(|l| l.id), Some(SunLayerId::Core));
    assert_eq!(layers::layer_at(70.0).map(|l| l.id), Some(SunLayerId::Photosphere));
}

// ============================================================================
// Tooltip anchoring (screen-edge handling)
// ============================================================================

fn screen() -> egui::Rect {
    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1280.0, 720.0))
}

const SIZE: egui::Vec2 = egui::Vec2 { x: 256.0, y: 140.0 };

#[test]
fn test_tooltip_sits_below_right_of_cursor() {
    let pos = anchored_pos(screen(), egui::pos2(300.0, 200.0), SIZE);
    assert_eq!(pos, egui::pos2(315.0, 215.0));
}

#[test]
fn test_tooltip_flips_left_near_right_edge() {
    let pos = anchored_pos(screen(), egui::pos2(1250.0, 200.0), SIZE);
    assert!(pos.x + SIZE.x <= 1250.0, "tooltip overlaps the right edge");
    assert_eq!(pos.y, 215.0);
}

#[test]
fn test_tooltip_flips_up_near_bottom_edge() {
    let pos = anchored_pos(screen(), egui::pos2(300.0, 700.0), SIZE);
    assert_eq!(pos.x, 315.0);
    assert!(pos.y + SIZE.y <= 700.0, "tooltip overlaps the bottom edge");
}

#[test]
fn test_tooltip_stays_on_screen_from_all_corners() {
    for cursor in [
        egui::pos2(0.0, 0.0),
        egui::pos2(1280.0, 0.0),
        egui::pos2(0.0, 720.0),
        egui::pos2(1280.0, 720.0),
    ] {
        let pos = anchored_pos(screen(), cursor, SIZE);
        assert!(pos.x >= 0.0 && pos.y >= 0.0, "clipped at {cursor:?}");
        assert!(
            pos.x + SIZE.x <= 1280.0 && pos.y + SIZE.y <= 720.0,
            "overflow at {cursor:?}"
        );
    }
}
