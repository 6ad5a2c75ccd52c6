//! Static data for the facts sidebar and the explanatory panels.

/// One key/value row in the facts sidebar.
#[derive(Clone, Copy, Debug)]
pub struct SolarFact {
    pub label: &'static str,
    pub value: &'static str,
}

/// Physical data shown in the "About Our Sun" sidebar.
pub const SOLAR_FACTS: &[SolarFact] = &[
    SolarFact {
        label: "Spectral Type",
        value: "G2V",
    },
    SolarFact {
        label: "Radius",
        value: "696,340 km",
    },
    SolarFact {
        label: "Volume",
        value: "1.41 \u{d7} 10\u{b9}\u{2078} km\u{b3}",
    },
    SolarFact {
        label: "Surface Area",
        value: "6.09 \u{d7} 10\u{b9}\u{b2} km\u{b2}",
    },
    SolarFact {
        label: "Mass",
        value: "1.989 \u{d7} 10\u{b3}\u{2070} kg",
    },
    SolarFact {
        label: "Mean Density",
        value: "1.41 g/cm\u{b3}",
    },
    SolarFact {
        label: "Surface Gravity",
        value: "274 m/s\u{b2} (28 g)",
    },
    SolarFact {
        label: "Escape Velocity",
        value: "617.7 km/s",
    },
    SolarFact {
        label: "Age",
        value: "\u{2248}4.6 Billion Years",
    },
    SolarFact {
        label: "Velocity",
        value: "\u{2248}20 km/s relative to nearby stars",
    },
];

/// One reaction step in the proton-proton chain panel.
#[derive(Clone, Copy, Debug)]
pub struct FusionStep {
    pub title: &'static str,
    pub reaction: &'static str,
    pub note: &'static str,
}

/// Introductory paragraphs for the fusion panel.
pub const FUSION_INTRO: &[&str] = &[
    "Nuclear fusion is a reaction in which two or more atomic nuclei are \
     combined to form one or more different atomic nuclei and subatomic \
     particles (neutrons or protons). The process releases an immense amount \
     of energy.",
    "Inside the Sun's core, extreme pressure and temperatures of 15 million \
     \u{b0}C cause hydrogen nuclei to collide with enough speed to overcome \
     their mutual repulsion and fuse. This ongoing reaction is what powers \
     the Sun, releasing the energy that sustains our solar system.",
];

/// The three steps of the proton-proton chain.
pub const FUSION_STEPS: &[FusionStep] = &[
    FusionStep {
        title: "Step 1: Two Protons Fuse",
        reaction: "(\u{b9}H) + (\u{b9}H) \u{2192} (\u{b2}H) + e\u{207a} + \u{3bd}",
        note: "(Forms Deuterium, a Positron, and a Neutrino)",
    },
    FusionStep {
        title: "Step 2: Deuterium Fuses with a Proton",
        reaction: "(\u{b2}H) + (\u{b9}H) \u{2192} (\u{b3}He) + \u{3b3}",
        note: "(Forms Helium-3 and a Gamma Ray)",
    },
    FusionStep {
        title: "Step 3: Two Helium-3 Nuclei Fuse",
        reaction: "(\u{b3}He) + (\u{b3}He) \u{2192} (\u{2074}He) + (\u{b9}H) + (\u{b9}H)",
        note: "(Forms Helium-4 and releases two Protons)",
    },
];

/// Line style for a travel path in the journey panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathStyle {
    Solid,
    Dashed,
    Dotted,
}

/// One Sun-to-Earth travel path.
#[derive(Clone, Copy, Debug)]
pub struct TravelPath {
    pub name: &'static str,
    pub duration: &'static str,
    pub style: PathStyle,
}

/// Average Sun-Earth distance caption for the journey panel.
pub const TRAVEL_DISTANCE: &str =
    "Average Distance: 149.6 million km (93 million miles)";

/// The three travel paths in the journey panel.
pub const TRAVEL_PATHS: &[TravelPath] = &[
    TravelPath {
        name: "Photons (Light)",
        duration: "8 min, 20 sec",
        style: PathStyle::Solid,
    },
    TravelPath {
        name: "Neutrinos",
        duration: "8 min, 20 sec",
        style: PathStyle::Dashed,
    },
    TravelPath {
        name: "Solar Wind",
        duration: "1-4 Days",
        style: PathStyle::Dotted,
    },
];

/// Footer note for the journey panel.
pub const TRAVEL_FUN_FACT: &str =
    "Fun Fact: While light takes ~8 minutes to reach us from the Sun's \
     surface, the energy can take over 100,000 years to escape the core!";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_populated() {
        assert_eq!(SOLAR_FACTS.len(), 10);
        assert_eq!(FUSION_STEPS.len(), 3);
        assert_eq!(TRAVEL_PATHS.len(), 3);
        assert_eq!(FUSION_INTRO.len(), 2);
    }

    #[test]
    fn test_no_empty_strings() {
        for fact in SOLAR_FACTS {
            assert!(!fact.label.is_empty());
            assert!(!fact.value.is_empty());
        }
        for step in FUSION_STEPS {
            assert!(!step.title.is_empty());
            assert!(!step.reaction.is_empty());
            assert!(!step.note.is_empty());
        }
    }
}
