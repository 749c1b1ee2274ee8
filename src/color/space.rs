use std::fmt;

use crate::foundation::math::{clamp, fmt_compact, wrap_hue};

/// Straight 8-bit sRGB triple.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Build from channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Canonical HSL triple: hue in `[0, 360)`, saturation and lightness in `[0, 100]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Hsl {
    /// Hue in degrees.
    pub h: f64,
    /// Saturation in percent.
    pub s: f64,
    /// Lightness in percent.
    pub l: f64,
}

impl Hsl {
    /// Build a normalized triple (hue wrapped, saturation/lightness clamped).
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: wrap_hue(h),
            s: clamp(s, 0.0, 100.0),
            l: clamp(l, 0.0, 100.0),
        }
    }

    /// Add deltas in HSL space and renormalize.
    pub fn shifted(self, dh: f64, ds: f64, dl: f64) -> Self {
        Self::new(self.h + dh, self.s + ds, self.l + dl)
    }
}

/// A color value, tagged by the notation it was authored in.
///
/// Every consumer goes through [`Color::to_hsl`] / [`Color::to_rgb`], so the notation never
/// changes how a color behaves, only how it is printed back.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Color {
    /// `#rrggbb` / `#rgb` notation.
    Hex(Rgb8),
    /// `hsl(h, s%, l%)` notation.
    Hsl(Hsl),
}

impl Default for Color {
    fn default() -> Self {
        Self::Hex(Rgb8::default())
    }
}

impl Color {
    /// Shorthand for a normalized HSL color.
    pub fn hsl(h: f64, s: f64, l: f64) -> Self {
        Self::Hsl(Hsl::new(h, s, l))
    }

    /// Parse a color string. Never fails: unrecognized input yields black.
    ///
    /// Strings starting with `hsl` are read with [`parse_hsl`], everything else as hex.
    pub fn parse(s: &str) -> Self {
        let t = s.trim();
        if t.get(..3).is_some_and(|p| p.eq_ignore_ascii_case("hsl")) {
            return Self::Hsl(parse_hsl(t));
        }
        match parse_hex(t) {
            Some(rgb) => Self::Hex(rgb),
            None => Self::Hsl(Hsl::default()),
        }
    }

    /// Canonical HSL form.
    pub fn to_hsl(self) -> Hsl {
        match self {
            Self::Hex(rgb) => rgb_to_hsl(rgb),
            Self::Hsl(hsl) => hsl,
        }
    }

    /// sRGB form.
    pub fn to_rgb(self) -> Rgb8 {
        match self {
            Self::Hex(rgb) => rgb,
            Self::Hsl(hsl) => hsl_to_rgb(hsl),
        }
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }

    /// Print in the notation the color is tagged with.
    pub fn to_css(self) -> String {
        match self {
            Self::Hex(rgb) => rgb.to_hex(),
            Self::Hsl(hsl) => format_hsl(hsl),
        }
    }

    /// Re-tag as [`Color::Hsl`].
    pub fn normalized(self) -> Self {
        Self::Hsl(self.to_hsl())
    }

    /// Lightness below 50%.
    pub fn is_dark(self) -> bool {
        self.to_hsl().l < 50.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl From<String> for Color {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_css()
    }
}

impl From<Rgb8> for Color {
    fn from(rgb: Rgb8) -> Self {
        Self::Hex(rgb)
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        Self::Hsl(hsl)
    }
}

/// Parse `#rrggbb` or `#rgb` (leading `#` optional, case-insensitive).
pub fn parse_hex(s: &str) -> Option<Rgb8> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);
    if !s.is_ascii() {
        return None;
    }

    fn nibble(c: &str) -> Option<u8> {
        let v = u8::from_str_radix(c, 16).ok()?;
        Some(v * 17)
    }

    match s.len() {
        3 => Some(Rgb8::new(
            nibble(&s[0..1])?,
            nibble(&s[1..2])?,
            nibble(&s[2..3])?,
        )),
        6 => Some(Rgb8::new(
            u8::from_str_radix(&s[0..2], 16).ok()?,
            u8::from_str_radix(&s[2..4], 16).ok()?,
            u8::from_str_radix(&s[4..6], 16).ok()?,
        )),
        _ => None,
    }
}

/// Hex string to HSL. Unsupported lengths or digits fall back to the zero triple.
pub fn hex_to_hsl(hex: &str) -> Hsl {
    parse_hex(hex).map(rgb_to_hsl).unwrap_or_default()
}

/// HSL to lowercase `#rrggbb`.
pub fn hsl_to_hex(hsl: Hsl) -> String {
    hsl_to_rgb(hsl).to_hex()
}

/// Parse an `hsl(h, s%, l%)`-style string.
///
/// Every character that is not an ASCII digit or `.` is treated as a separator, so any
/// punctuation and whitespace is accepted (and signs are dropped). Fewer than three numeric
/// components, or a component that is not a number, yields the zero triple.
pub fn parse_hsl(s: &str) -> Hsl {
    let nums: Vec<&str> = s
        .split(|c: char| !(c.is_ascii_digit() || c == '.'))
        .filter(|p| !p.is_empty())
        .collect();
    if nums.len() < 3 {
        return Hsl::default();
    }
    let mut parsed = [0.0f64; 3];
    for (slot, raw) in parsed.iter_mut().zip(&nums) {
        match raw.parse::<f64>() {
            Ok(v) => *slot = v,
            Err(_) => return Hsl::default(),
        }
    }
    Hsl::new(parsed[0], parsed[1], parsed[2])
}

/// Format as `hsl(h, s%, l%)` with at most two decimals per component.
pub fn format_hsl(hsl: Hsl) -> String {
    format!(
        "hsl({}, {}%, {}%)",
        fmt_compact(hsl.h, 2),
        fmt_compact(hsl.s, 2),
        fmt_compact(hsl.l, 2)
    )
}

/// Standard sRGB -> HSL conversion.
pub fn rgb_to_hsl(rgb: Rgb8) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0.0, 0.0, l * 100.0);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl::new(h * 60.0, s * 100.0, l * 100.0)
}

/// Standard HSL -> sRGB conversion, rounding to the nearest 8-bit value.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb8 {
    fn to_u8(x: f64) -> u8 {
        (clamp(x, 0.0, 1.0) * 255.0).round() as u8
    }

    let h = wrap_hue(hsl.h) / 360.0;
    let s = clamp(hsl.s, 0.0, 100.0) / 100.0;
    let l = clamp(hsl.l, 0.0, 100.0) / 100.0;

    if s == 0.0 {
        return Rgb8::new(to_u8(l), to_u8(l), to_u8(l));
    }

    fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        if t < 1.0 / 6.0 {
            return p + (q - p) * 6.0 * t;
        }
        if t < 1.0 / 2.0 {
            return q;
        }
        if t < 2.0 / 3.0 {
            return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
        }
        p
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    Rgb8::new(
        to_u8(hue_to_rgb(p, q, h + 1.0 / 3.0)),
        to_u8(hue_to_rgb(p, q, h)),
        to_u8(hue_to_rgb(p, q, h - 1.0 / 3.0)),
    )
}

/// Shift a color in HSL space: hue wraps modulo 360, saturation/lightness clamp to `[0, 100]`.
///
/// The result is always tagged [`Color::Hsl`], whatever the input notation.
pub fn shift_color(color: Color, dh: f64, ds: f64, dl: f64) -> Color {
    Color::Hsl(color.to_hsl().shifted(dh, ds, dl))
}

/// String convenience over [`shift_color`]: parses any supported notation, returns `hsl(...)`.
pub fn shift_color_str(color: &str, dh: f64, ds: f64, dl: f64) -> String {
    shift_color(Color::parse(color), dh, ds, dl).to_css()
}

#[cfg(test)]
#[path = "../../tests/unit/color/space.rs"]
mod tests;
