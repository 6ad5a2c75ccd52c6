//! UI module providing the egui-based interface.
//!
//! Bottom control dock, floating shell tooltip, sliding facts sidebar, and
//! the static explanatory panels.

mod controls;
mod diagrams;
mod facts_panel;
pub mod icons;
pub mod tooltip;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub use facts_panel::FactsPanelState;

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize resources
            .init_resource::<FactsPanelState>()
            .init_resource::<icons::FontsInitialized>()
            // Keyboard shortcuts don't need egui context - can stay in Update
            .add_systems(Update, facts_panel::facts_panel_keyboard)
            // Font initialization MUST run before any UI systems that use icons
            .add_systems(EguiPrimaryContextPass, icons::setup_fonts)
            // UI systems run in EguiPrimaryContextPass AFTER fonts are initialized
            .add_systems(
                EguiPrimaryContextPass,
                (
                    // Control dock (bottom bar)
                    controls::controls_panel,
                    // Explanatory panels (right side)
                    diagrams::diagrams_panel,
                    // Facts sidebar (slides in from the left)
                    facts_panel::facts_panel_system,
                    facts_panel::facts_toggle_button,
                    // Floating tooltip near the cursor
                    tooltip::layer_tooltip,
                )
                    .after(icons::setup_fonts)
                    .run_if(|init: Res<icons::FontsInitialized>| init.0),
            );
    }
}
