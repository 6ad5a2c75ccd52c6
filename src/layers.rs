//! Shell-layer catalog for the Sun cross-section.
//!
//! The catalog is static configuration: an ordered list of shells from the
//! core outward, each with display data used for rendering order and
//! hover-info lookup. Colors are stored as `#RRGGBB` strings and parsed at
//! spawn time.

use bevy::prelude::*;
use thiserror::Error;

/// Identifier for the shells of the Sun, ordered from the core outward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SunLayerId {
    Core,
    RadiativeZone,
    ConvectiveZone,
    Photosphere,
    Chromosphere,
    Corona,
}

/// Static display data for one shell.
#[derive(Clone, Debug)]
pub struct SunLayer {
    pub id: SunLayerId,
    /// Human-readable name shown in the tooltip header.
    pub name: &'static str,
    /// Tooltip body text.
    pub description: &'static str,
    /// Display color as a `#RRGGBB` hex string.
    pub color: &'static str,
    /// Shell radius in diagram units (unscaled).
    pub radius: f32,
    /// Whether the shell gets an emissive glow.
    pub glow: bool,
    /// Fill opacity in (0, 1].
    pub opacity: f32,
}

/// The shells of the Sun, innermost first.
static LAYERS: [SunLayer; 6] = [
    SunLayer {
        id: SunLayerId::Core,
        name: "Core",
        description: "The Sun's dense central region where nuclear fusion produces \
                      immense energy. Temperatures soar to 15 million \u{b0}C.",
        color: "#FFFFFF",
        radius: 18.0,
        glow: false,
        opacity: 1.0,
    },
    SunLayer {
        id: SunLayerId::RadiativeZone,
        name: "Radiative Zone",
        description: "Energy from the core travels through this layer as \
                      electromagnetic radiation. This journey can take up to \
                      170,000 years.",
        color: "#FF0000",
        radius: 40.0,
        glow: false,
        opacity: 1.0,
    },
    SunLayer {
        id: SunLayerId::ConvectiveZone,
        name: "Convective Zone",
        description: "The outermost layer of the solar interior. Hot plasma rises, \
                      cools at the surface, and sinks, creating convection currents \
                      that transport heat.",
        color: "#FFA500",
        radius: 65.0,
        glow: false,
        opacity: 1.0,
    },
    SunLayer {
        id: SunLayerId::Photosphere,
        name: "Photosphere",
        description: "The visible surface of the Sun that we see. It's a 500 \
                      km-thick region where most of the Sun's light is emitted.",
        color: "#FFFF00",
        radius: 70.0,
        glow: false,
        opacity: 1.0,
    },
    SunLayer {
        id: SunLayerId::Chromosphere,
        name: "Chromosphere",
        description: "An irregular layer of gas above the photosphere. It appears \
                      as a reddish glow during a solar eclipse.",
        color: "#FF4500",
        radius: 75.0,
        glow: false,
        opacity: 1.0,
    },
    SunLayer {
        id: SunLayerId::Corona,
        name: "Corona",
        description: "The Sun's tenuous outer atmosphere, extending millions of \
                      kilometers into space. It's only visible during a total \
                      solar eclipse.",
        color: "#FFFFE0",
        radius: 95.0,
        glow: true,
        opacity: 0.5,
    },
];

/// All shells, innermost first.
pub fn all_layers() -> &'static [SunLayer] {
    &LAYERS
}

/// Look up a shell by id.
pub fn get(id: SunLayerId) -> &'static SunLayer {
    LAYERS.iter().find(|l| l.id == id).unwrap_or(&LAYERS[0])
}

/// The shell under a point at the given distance from the Sun's center
/// (in unscaled diagram units).
///
/// Concentric discs are painted inner-over-outer, so the hit is the innermost
/// shell whose radius contains the distance. Beyond the corona there is no
/// shell.
pub fn layer_at(distance: f32) -> Option<&'static SunLayer> {
    if distance < 0.0 {
        return None;
    }
    LAYERS.iter().find(|l| distance <= l.radius)
}

/// Errors in catalog data.
#[derive(Error, Debug, PartialEq)]
pub enum CatalogError {
    #[error("invalid hex color {0:?} (expected #RRGGBB)")]
    BadColor(String),

    #[error("layer radii must increase outward ({outer} follows {inner})")]
    NonMonotonicRadius { inner: f32, outer: f32 },

    #[error("opacity {0} outside (0, 1]")]
    OpacityOutOfRange(f32),
}

/// Parse a `#RRGGBB` hex string into a color.
pub fn parse_hex_color(hex: &str) -> Result<Color, CatalogError> {
    let bad = || CatalogError::BadColor(hex.to_string());

    let digits = hex.strip_prefix('#').ok_or_else(bad)?;
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(bad());
    }

    let r = u8::from_str_radix(&digits[0..2], 16).map_err(|_| bad())?;
    let g = u8::from_str_radix(&digits[2..4], 16).map_err(|_| bad())?;
    let b = u8::from_str_radix(&digits[4..6], 16).map_err(|_| bad())?;

    Ok(Color::srgb_u8(r, g, b))
}

/// Check catalog invariants: parseable colors, strictly increasing radii,
/// opacities in (0, 1].
pub fn validate() -> Result<(), CatalogError> {
    let mut prev_radius = 0.0f32;

    for layer in &LAYERS {
        parse_hex_color(layer.color)?;

        if layer.radius <= prev_radius {
            return Err(CatalogError::NonMonotonicRadius {
                inner: prev_radius,
                outer: layer.radius,
            });
        }
        prev_radius = layer.radius;

        if layer.opacity <= 0.0 || layer.opacity > 1.0 {
            return Err(CatalogError::OpacityOutOfRange(layer.opacity));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        assert_eq!(validate(), Ok(()));
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#FFFFFF"), Ok(Color::srgb_u8(255, 255, 255)));
        assert_eq!(parse_hex_color("#FF4500"), Ok(Color::srgb_u8(255, 69, 0)));
        assert_eq!(parse_hex_color("#000000"), Ok(Color::srgb_u8(0, 0, 0)));
    }

    #[test]
    fn test_parse_hex_color_rejects_malformed() {
        for bad in ["FFFFFF", "#FFF", "#GGGGGG", "#FFFFF", "#FFFFFFF", ""] {
            assert!(
                matches!(parse_hex_color(bad), Err(CatalogError::BadColor(_))),
                "expected rejection for {bad:?}"
            );
        }
    }

    #[test]
    fn test_layer_at_picks_innermost_containing_shell() {
        assert_eq!(layer_at(0.0).map(|l| l.id), Some(SunLayerId::Core));
        assert_eq!(layer_at(10.0).map(|l| l.id), Some(SunLayerId::Core));
        // Boundary distance belongs to the inner shell.
        assert_eq!(layer_at(18.0).map(|l| l.id), Some(SunLayerId::Core));
        assert_eq!(layer_at(18.1).map(|l| l.id), Some(SunLayerId::RadiativeZone));
        assert_eq!(layer_at(67.0).map(|l| l.id), Some(SunLayerId::Photosphere));
        assert_eq!(layer_at(72.0).map(|l| l.id), Some(SunLayerId::Chromosphere));
        assert_eq!(layer_at(90.0).map(|l| l.id), Some(SunLayerId::Corona));
    }

    #[test]
    fn test_layer_at_misses_outside_corona() {
        assert_eq!(layer_at(95.1).map(|l| l.id), None);
        assert_eq!(layer_at(1000.0).map(|l| l.id), None);
        assert_eq!(layer_at(-1.0).map(|l| l.id), None);
    }

    #[test]
    fn test_get_returns_requested_layer() {
        assert_eq!(get(SunLayerId::Corona).name, "Corona");
        assert_eq!(get(SunLayerId::Core).radius, 18.0);
    }
}
