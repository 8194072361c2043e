//! HSL custom-property values to terminal colours.
//!
//! Theme colours are stored the way CSS `hsl()` consumes them: a bare
//! `hue saturation% lightness%` triple such as `262 83% 58%`.

use crate::theme::ThemeRecord;
use crossterm::style::Color;

/// Parsed HSL triple: hue in degrees, saturation and lightness in `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl Hsl {
    /// Parse `"262 83% 58%"`. Commas between components are tolerated.
    pub fn parse(value: &str) -> Option<Self> {
        let mut parts = value
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|part| !part.is_empty());
        let hue: f32 = parts.next()?.trim_end_matches("deg").parse().ok()?;
        let saturation = parse_percent(parts.next()?)?;
        let lightness = parse_percent(parts.next()?)?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self {
            hue: hue.rem_euclid(360.0),
            saturation,
            lightness,
        })
    }

    /// Convert to 8-bit RGB.
    pub fn to_rgb(self) -> (u8, u8, u8) {
        let chroma = (1.0 - (2.0 * self.lightness - 1.0).abs()) * self.saturation;
        let sector = self.hue / 60.0;
        let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
        let (r, g, b) = match sector as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        let m = self.lightness - chroma / 2.0;
        let channel = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        (channel(r), channel(g), channel(b))
    }

    pub fn to_color(self) -> Color {
        let (r, g, b) = self.to_rgb();
        Color::Rgb { r, g, b }
    }
}

fn parse_percent(part: &str) -> Option<f32> {
    let value: f32 = part.strip_suffix('%')?.parse().ok()?;
    (0.0..=100.0).contains(&value).then_some(value / 100.0)
}

/// Terminal colour for one theme property, when it holds an HSL triple.
pub fn property_color(theme: &ThemeRecord, property: &str) -> Option<Color> {
    theme.property(property).and_then(Hsl::parse).map(Hsl::to_color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_css_style_triples() {
        let hsl = Hsl::parse("222.2 84% 4.9%").expect("parse");
        assert!((hsl.hue - 222.2).abs() < 1e-3);
        assert!((hsl.saturation - 0.84).abs() < 1e-6);
        assert!((hsl.lightness - 0.049).abs() < 1e-6);
        assert!(Hsl::parse("120, 100%, 50%").is_some());
    }

    #[test]
    fn rejects_non_hsl_values() {
        assert_eq!(Hsl::parse("0.75rem"), None);
        assert_eq!(Hsl::parse("10 20 30"), None);
        assert_eq!(Hsl::parse("10 120% 30%"), None);
        assert_eq!(Hsl::parse("10 20% 30% 40%"), None);
    }

    #[test]
    fn converts_primary_hues() {
        assert_eq!(Hsl::parse("0 100% 50%").unwrap().to_rgb(), (255, 0, 0));
        assert_eq!(Hsl::parse("120 100% 50%").unwrap().to_rgb(), (0, 255, 0));
        assert_eq!(Hsl::parse("240 100% 50%").unwrap().to_rgb(), (0, 0, 255));
        assert_eq!(Hsl::parse("0 0% 100%").unwrap().to_rgb(), (255, 255, 255));
        assert_eq!(Hsl::parse("360 0% 0%").unwrap().to_rgb(), (0, 0, 0));
    }

    #[test]
    fn property_color_skips_radius() {
        let theme = ThemeRecord::from_short_keys("t", "T", [("primary", "0 100% 50%"), ("radius", "1rem")]);
        assert_eq!(
            property_color(&theme, "--primary"),
            Some(Color::Rgb { r: 255, g: 0, b: 0 })
        );
        assert_eq!(property_color(&theme, "--radius"), None);
    }
}
