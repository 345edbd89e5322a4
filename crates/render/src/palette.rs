//! Colour scales for field magnitude plots.
//!
//! A palette is a list of sRGB stops sampled by linear interpolation in
//! linear-light RGB, so gradients do not darken between stops the way naive
//! sRGB blending does.

use gravity_field_core::FieldError;

/// sRGB colour with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Srgb {
    pub const WHITE: Srgb = Srgb {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    /// Parses `"#rrggbb"` or `"rrggbb"` (case insensitive).
    ///
    /// Returns `FieldError::InvalidColor` for anything else.
    pub fn from_hex(hex: &str) -> Result<Srgb, FieldError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(FieldError::InvalidColor(format!(
                "expected 6 hex digits, got {hex:?}"
            )));
        }
        let bad = || FieldError::InvalidColor(format!("bad hex digits in {hex:?}"));
        let channel = |k: usize| {
            u8::from_str_radix(&digits[k..k + 2], 16)
                .map(|v| f64::from(v) / 255.0)
                .map_err(|_| bad())
        };
        Ok(Srgb {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    /// Quantizes to 8-bit channels.
    pub fn to_rgb8(self) -> [u8; 3] {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b)]
    }

    fn to_linear(self) -> [f64; 3] {
        [self.r, self.g, self.b].map(srgb_component_to_linear)
    }

    fn from_linear(c: [f64; 3]) -> Srgb {
        let [r, g, b] = c.map(linear_component_to_srgb);
        Srgb { r, g, b }
    }
}

fn srgb_component_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_component_to_srgb(c: f64) -> f64 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

/// Names accepted by [`Palette::from_name`].
const PALETTE_NAMES: &[&str] = &["viridis", "plasma", "ocean", "monochrome"];

/// Evenly spaced colour stops: `sample(0.0)` is the first, `sample(1.0)`
/// the last.
#[derive(Debug, Clone)]
pub struct Palette {
    stops: Vec<[f64; 3]>,
}

impl Palette {
    /// Builds a palette from hex colour strings. Requires at least one.
    pub fn from_hex(hexes: &[&str]) -> Result<Self, FieldError> {
        if hexes.is_empty() {
            return Err(FieldError::InvalidPalette(
                "palette requires at least 1 color".to_string(),
            ));
        }
        let stops = hexes
            .iter()
            .map(|h| Srgb::from_hex(h).map(Srgb::to_linear))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { stops })
    }

    /// Looks up a built-in palette.
    ///
    /// Returns `FieldError::UnknownPalette` for unrecognized names.
    pub fn from_name(name: &str) -> Result<Self, FieldError> {
        match name {
            "viridis" => Ok(Self::viridis()),
            "plasma" => Ok(Self::plasma()),
            "ocean" => Ok(Self::ocean()),
            "monochrome" => Ok(Self::monochrome()),
            _ => Err(FieldError::UnknownPalette(name.to_string())),
        }
    }

    pub fn list_names() -> &'static [&'static str] {
        PALETTE_NAMES
    }

    /// Samples the palette at `t`, clamped to [0, 1]. NaN maps to 0.
    pub fn sample(&self, t: f64) -> Srgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let n = self.stops.len();
        if n == 1 {
            return Srgb::from_linear(self.stops[0]);
        }
        let scaled = t * (n - 1) as f64;
        let idx = (scaled as usize).min(n - 2);
        let frac = scaled - idx as f64;
        let (c0, c1) = (self.stops[idx], self.stops[idx + 1]);
        Srgb::from_linear([0, 1, 2].map(|k| c0[k] + frac * (c1[k] - c0[k])))
    }

    /// Dark purple through teal to yellow (the common sequential default).
    pub fn viridis() -> Self {
        Self::from_hex(&["#440154", "#3b528b", "#21918c", "#5ec962", "#fde725"])
            .expect("viridis palette hex values are valid")
    }

    /// Deep blue through magenta to yellow.
    pub fn plasma() -> Self {
        Self::from_hex(&["#0d0887", "#7e03a8", "#cc4778", "#f89540", "#f0f921"])
            .expect("plasma palette hex values are valid")
    }

    /// Deep blues to cyan.
    pub fn ocean() -> Self {
        Self::from_hex(&["#001f3f", "#003366", "#005f73", "#0a9396", "#94d2bd"])
            .expect("ocean palette hex values are valid")
    }

    /// Black to white.
    pub fn monochrome() -> Self {
        Self::from_hex(&["#000000", "#ffffff"]).expect("monochrome palette hex values are valid")
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::viridis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_parses_with_and_without_hash() {
        let a = Srgb::from_hex("#FF8000").unwrap();
        let b = Srgb::from_hex("ff8000").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_rgb8(), [255, 128, 0]);
    }

    #[test]
    fn from_hex_rejects_bad_input() {
        for bad in ["", "#fff", "#gggggg", "12345678", "#ééé"] {
            assert!(
                matches!(Srgb::from_hex(bad), Err(FieldError::InvalidColor(_))),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn empty_palette_is_rejected() {
        assert!(matches!(
            Palette::from_hex(&[]),
            Err(FieldError::InvalidPalette(_))
        ));
    }

    #[test]
    fn endpoints_return_first_and_last_stop() {
        let p = Palette::from_hex(&["#102030", "#a0b0c0", "#405060"]).unwrap();
        assert_eq!(p.sample(0.0).to_rgb8(), [0x10, 0x20, 0x30]);
        assert_eq!(p.sample(1.0).to_rgb8(), [0x40, 0x50, 0x60]);
        assert_eq!(p.sample(0.5).to_rgb8(), [0xa0, 0xb0, 0xc0]);
    }

    #[test]
    fn sample_clamps_out_of_range_and_nan() {
        let p = Palette::monochrome();
        assert_eq!(p.sample(-3.0).to_rgb8(), [0, 0, 0]);
        assert_eq!(p.sample(7.0).to_rgb8(), [255, 255, 255]);
        assert_eq!(p.sample(f64::NAN).to_rgb8(), [0, 0, 0]);
    }

    #[test]
    fn linear_light_midpoint_is_brighter_than_srgb_midpoint() {
        let mid = Palette::monochrome().sample(0.5).to_rgb8();
        assert!(mid[0] > 128, "got {}", mid[0]);
        assert_eq!(mid[0], mid[1]);
        assert_eq!(mid[1], mid[2]);
    }

    #[test]
    fn single_stop_palette_is_constant() {
        let p = Palette::from_hex(&["#336699"]).unwrap();
        assert_eq!(p.sample(0.0), p.sample(0.9));
    }

    #[test]
    fn every_listed_name_resolves() {
        for name in Palette::list_names() {
            assert!(Palette::from_name(name).is_ok(), "{name}");
        }
        assert!(matches!(
            Palette::from_name("rainbow"),
            Err(FieldError::UnknownPalette(_))
        ));
    }
}
