// File: crates/simplify-core/src/palette.rs
// Summary: Named color schemes and a cycling palette for assigning series colors.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self { Self { r, g, b, a } }

    /// Parse `#rrggbb` (leading `#` optional); alpha is opaque.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let h = hex.strip_prefix('#').unwrap_or(hex);
        if h.len() != 6 || !h.is_ascii() { return None; }
        let byte = |i: usize| u8::from_str_radix(&h[i..i + 2], 16).ok();
        Some(Self::new(byte(0)?, byte(2)?, byte(4)?, 255))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

// Schemes are listed in the order colors are handed out.
const CLASSIC9: &[&str] = &[
    "#2f254a", "#491d37", "#7c2626", "#963b20", "#7d5836", "#c5a32f",
    "#ddcb53", "#a2b73c", "#848f39", "#4a6860", "#423d4f",
];
const SPECTRUM14: &[&str] = &[
    "#387aa3", "#649eb9", "#9dc2d3", "#a888c2", "#d8aad6", "#e7cbe6", "#a1d05d",
    "#bbe468", "#d2ed82", "#716c49", "#92875a", "#b2a470", "#dc8f70", "#ecb796",
];
const COLORWHEEL: &[&str] = &[
    "#cb513a", "#73c03a", "#65b9ac", "#4682b4", "#96557e", "#785f43", "#858772", "#b5b6a9",
];

/// Scheme names accepted by [`Palette::find`].
pub const SCHEMES: &[&str] = &["classic9", "spectrum14", "colorwheel"];

/// Hands out colors from a scheme in order, wrapping around when exhausted.
#[derive(Clone, Debug)]
pub struct Palette {
    pub name: &'static str,
    colors: Vec<Rgba>,
    next: usize,
}

impl Palette {
    fn from_scheme(name: &'static str, hexes: &[&str]) -> Self {
        let colors = hexes.iter().filter_map(|h| Rgba::from_hex(h)).collect();
        Self { name, colors, next: 0 }
    }

    pub fn classic9() -> Self { Self::from_scheme("classic9", CLASSIC9) }
    pub fn spectrum14() -> Self { Self::from_scheme("spectrum14", SPECTRUM14) }
    pub fn colorwheel() -> Self { Self::from_scheme("colorwheel", COLORWHEEL) }

    /// Find a scheme by name, falling back to classic9.
    pub fn find(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "spectrum14" => Self::spectrum14(),
            "colorwheel" => Self::colorwheel(),
            _ => Self::classic9(),
        }
    }

    pub fn len(&self) -> usize { self.colors.len() }

    pub fn is_empty(&self) -> bool { self.colors.is_empty() }

    /// Next color in the scheme.
    pub fn color(&mut self) -> Rgba {
        let c = self.colors[self.next % self.colors.len()];
        self.next = (self.next + 1) % self.colors.len();
        c
    }

    pub fn reset(&mut self) { self.next = 0; }
}

impl Default for Palette {
    fn default() -> Self { Self::classic9() }
}
