//! Palette colors and pixel conversions.

/// A palette color.
///
/// `code` is the CSS-style text shown to users, `hex` the same color packed as
/// `0xAABBGGRR` (an RGBA pixel read as a little-endian `u32`).
///
/// # Examples
///
/// ```
/// use paintboard::draw::color::{PALETTE, Rgba};
/// let green = PALETTE[2];
/// assert_eq!(green.code, "#2ecc71");
/// assert_eq!(green.rgba(), Rgba { r: 0x2e, g: 0xcc, b: 0x71, a: 0xff });
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    /// Display code (`#rgb` or `#rrggbb`)
    pub code: &'static str,
    /// Packed `0xAABBGGRR` value
    pub hex: u32,
}

impl Color {
    /// Unpacks the color into straight-alpha channels.
    pub fn rgba(&self) -> Rgba {
        let [r, g, b, a] = self.hex.to_le_bytes();
        Rgba { r, g, b, a }
    }

    /// Sets this color as the Cairo source.
    pub fn apply(&self, ctx: &cairo::Context) {
        let px = self.rgba();
        ctx.set_source_rgba(
            px.r as f64 / 255.0,
            px.g as f64 / 255.0,
            px.b as f64 / 255.0,
            px.a as f64 / 255.0,
        );
    }
}

/// Number of entries in [`PALETTE`].
pub const PALETTE_SIZE: usize = 10;

/// Fixed drawing palette, in picker order.
pub const PALETTE: [Color; PALETTE_SIZE] = [
    Color {
        code: "#333",
        hex: 0xFF33_3333,
    },
    Color {
        code: "#fff",
        hex: 0xFFFF_FFFF,
    },
    Color {
        code: "#2ecc71",
        hex: 0xFF71_CC2E,
    },
    Color {
        code: "#3498db",
        hex: 0xFFDB_9834,
    },
    Color {
        code: "#e74c3c",
        hex: 0xFF3C_4CE7,
    },
    Color {
        code: "#8e44ad",
        hex: 0xFFAD_448E,
    },
    Color {
        code: "#ecf0f1",
        hex: 0xFFF1_F0EC,
    },
    Color {
        code: "#f39c12",
        hex: 0xFF12_9CF3,
    },
    Color {
        code: "#bdc3c7",
        hex: 0xFFC7_C3BD,
    },
    Color {
        code: "#f1c40f",
        hex: 0xFF0F_C4F1,
    },
];

/// Returns the palette entry at `index`, if any.
pub fn palette_color(index: usize) -> Option<Color> {
    PALETTE.get(index).copied()
}

/// A sampled pixel with straight (non-premultiplied) alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black, the blank canvas pixel.
    pub const TRANSPARENT: Rgba = Rgba {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    /// Decodes a Cairo ARGB32 word (premultiplied alpha).
    pub fn from_argb32(word: u32) -> Self {
        let a = (word >> 24) as u8;
        if a == 0 {
            return Self::TRANSPARENT;
        }
        let unpremultiply = |c: u32| -> u8 {
            let c = c & 0xFF;
            ((c * 255 + a as u32 / 2) / a as u32).min(255) as u8
        };
        Self {
            r: unpremultiply(word >> 16),
            g: unpremultiply(word >> 8),
            b: unpremultiply(word),
            a,
        }
    }

    /// Encodes into a Cairo ARGB32 word (premultiplied alpha).
    pub fn to_argb32(self) -> u32 {
        let a = self.a as u32;
        let premultiply = |c: u8| -> u32 { (c as u32 * a + 127) / 255 };
        (a << 24) | (premultiply(self.r) << 16) | (premultiply(self.g) << 8) | premultiply(self.b)
    }

    /// Largest per-channel difference between two pixels.
    pub fn max_channel_delta(self, other: Rgba) -> u8 {
        let delta = |a: u8, b: u8| a.abs_diff(b);
        delta(self.r, other.r)
            .max(delta(self.g, other.g))
            .max(delta(self.b, other.b))
            .max(delta(self.a, other.a))
    }
}

impl From<Color> for Rgba {
    fn from(color: Color) -> Self {
        color.rgba()
    }
}
