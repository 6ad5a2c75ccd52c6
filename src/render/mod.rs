//! Rendering systems for the Sun cross-section.
//!
//! Provides the starfield background, the shell diagram with sunspots and
//! rotation marker, the mode-dependent orbit overlay, and hover highlighting.

use bevy::prelude::*;

mod background;
pub mod highlight;
mod orbit;
pub mod sun;

use self::background::BackgroundPlugin;
use self::highlight::HighlightPlugin;
use self::orbit::OrbitPlugin;
use self::sun::SunPlugin;

// Re-export for use in other modules
pub use self::highlight::HoveredLayer;

/// Scale applied to catalog radii when rendering the shell diagram.
pub const SUN_SCALE: f32 = 0.7;

/// Radius of the Earth orbit overlay in world units (unscaled).
pub const ORBIT_RADIUS: f32 = 85.0;

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((BackgroundPlugin, SunPlugin, OrbitPlugin, HighlightPlugin));
    }
}

/// Z-layer constants for rendering order.
pub mod z_layers {
    /// Background elements (starfield).
    pub const BACKGROUND: f32 = 0.0;
    /// Base of the shell stack; shells step upward from here, outermost lowest.
    pub const SUN_BASE: f32 = 2.0;
    /// Sunspots and the rotation marker, above the shells.
    pub const SUN_MARKS: f32 = 2.8;
    /// The Earth marker on its orbit.
    pub const EARTH: f32 = 3.0;
    /// Gizmo overlays (orbit ring, arrows, hover highlight).
    pub const OVERLAY: f32 = 4.0;
}
