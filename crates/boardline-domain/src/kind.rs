//! Shape catalog - the fixed set of component kinds

/// Kind of a component
///
/// The set is closed: every kind has a fixed footprint and a single-character
/// type code used when a board is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// 1×1 resistor
    Resistor,

    /// 5×2 logic chip
    LogicChip,

    /// 2×2 LED light
    LedLight,

    /// 4×4 flux capacitor
    FluxCapacitor,
}

/// Footprint and glyph of a component kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    /// Width in cells
    pub width: u32,
    /// Height in cells
    pub height: u32,
    /// Type code drawn in every covered cell
    pub glyph: char,
}

const CATALOG: [(ComponentKind, Shape); 4] = [
    (ComponentKind::Resistor, Shape { width: 1, height: 1, glyph: '1' }),
    (ComponentKind::LogicChip, Shape { width: 5, height: 2, glyph: '2' }),
    (ComponentKind::LedLight, Shape { width: 2, height: 2, glyph: '3' }),
    (ComponentKind::FluxCapacitor, Shape { width: 4, height: 4, glyph: '4' }),
];

impl ComponentKind {
    /// Every kind, in type code order
    pub const ALL: [ComponentKind; 4] = [
        ComponentKind::Resistor,
        ComponentKind::LogicChip,
        ComponentKind::LedLight,
        ComponentKind::FluxCapacitor,
    ];

    /// Look up the shape of this kind
    pub fn shape(&self) -> Shape {
        CATALOG[*self as usize].1
    }

    /// Width in cells
    pub fn width(&self) -> u32 {
        self.shape().width
    }

    /// Height in cells
    pub fn height(&self) -> u32 {
        self.shape().height
    }

    /// Type code used by the renderer
    pub fn glyph(&self) -> char {
        self.shape().glyph
    }

    /// Get the kind name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Resistor => "resistor",
            ComponentKind::LogicChip => "logic-chip",
            ComponentKind::LedLight => "led-light",
            ComponentKind::FluxCapacitor => "flux-capacitor",
        }
    }

    /// Parse a kind from a string
    ///
    /// Case-insensitive; `_` and `-` are interchangeable and may be omitted.
    pub fn parse(s: &str) -> Option<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "resistor" => Some(ComponentKind::Resistor),
            "logicchip" => Some(ComponentKind::LogicChip),
            "ledlight" | "led" => Some(ComponentKind::LedLight),
            "fluxcapacitor" => Some(ComponentKind::FluxCapacitor),
            _ => None,
        }
    }
}

impl std::str::FromStr for ComponentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid component kind: {}", s))
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
