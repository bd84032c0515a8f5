//! HLS color mapping and RGB conversion.
//!
//! Notes map to colors deterministically: hue comes from the note name,
//! lightness from the octave, saturation is constant. Conversion between
//! HLS and RGB follows the standard cylindrical-model formulas.

use serde::{Deserialize, Serialize};

/// Saturation used for every note color.
pub const SATURATION: f64 = 1.0;

/// Default lightness clamp: octave 0 maps near-black, octave 8 near-white.
pub const LIGHTNESS_CLAMP: (f64, f64) = (0.1, 0.9);

/// Lightness for an octave, linearly interpolated inside the default
/// clamp range.
pub fn octave_to_lightness(octave: u8) -> f64 {
    octave_to_lightness_clamped(octave, LIGHTNESS_CLAMP)
}

/// Lightness for an octave, linearly interpolated inside `(l_min, l_max)`.
///
/// The divisor is 9, not 8, so octave 8 lands strictly below `l_max`
/// and the top of the keyboard never washes out to pure white.
pub fn octave_to_lightness_clamped(octave: u8, (l_min, l_max): (f64, f64)) -> f64 {
    l_min + octave as f64 * (l_max - l_min) / 9.0
}

/// HLS color triple (hue, lightness, saturation), each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hls {
    /// Hue as a fraction of the color wheel.
    pub h: f64,
    /// Lightness.
    pub l: f64,
    /// Saturation.
    pub s: f64,
}

/// RGB color with f64 components (0.0 to 1.0 range).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    /// Create a new color.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create a color from an HLS triple.
    pub fn from_hls(hls: Hls) -> Self {
        let Hls { h, l, s } = hls;

        if s <= 0.0 {
            return Self::rgb(l, l, l);
        }

        let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let m1 = 2.0 * l - m2;

        Self::rgb(
            hls_component(m1, m2, h + 1.0 / 3.0),
            hls_component(m1, m2, h),
            hls_component(m1, m2, h - 1.0 / 3.0),
        )
    }

    /// Convert to an HLS triple. Inverse of [`Color::from_hls`] within
    /// floating-point tolerance.
    pub fn to_hls(&self) -> Hls {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let l = (min + max) / 2.0;

        let delta = max - min;
        if delta < 1e-10 {
            return Hls { h: 0.0, l, s: 0.0 };
        }

        let s = if l <= 0.5 {
            delta / (max + min)
        } else {
            delta / (2.0 - max - min)
        };

        let rc = (max - self.r) / delta;
        let gc = (max - self.g) / delta;
        let bc = (max - self.b) / delta;

        let h = if (self.r - max).abs() < 1e-10 {
            bc - gc
        } else if (self.g - max).abs() < 1e-10 {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };

        Hls {
            h: (h / 6.0).rem_euclid(1.0),
            l,
            s,
        }
    }

    /// Clamp all components to [0.0, 1.0].
    pub fn clamp(&self) -> Color {
        Color {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }

    /// Convert to 8-bit RGB.
    pub fn to_rgb8(&self) -> [u8; 3] {
        let c = self.clamp();
        [
            (c.r * 255.0).round() as u8,
            (c.g * 255.0).round() as u8,
            (c.b * 255.0).round() as u8,
        ]
    }
}

/// One RGB component from the HLS helper values, hue wrapped into [0, 1).
fn hls_component(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < 1.0 / 6.0 {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < 2.0 / 3.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0
    } else {
        m1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::{Note, NoteName};

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn test_lightness_interpolation() {
        assert_close(octave_to_lightness(0), 0.1);
        assert_close(octave_to_lightness(4), 0.1 + 4.0 * 0.8 / 9.0);

        // Divisor 9 means octave 8 never reaches the upper clamp.
        let top = octave_to_lightness(8);
        assert!(top < 0.9);
        assert_close(top, 0.1 + 8.0 * 0.8 / 9.0);
    }

    #[test]
    fn test_primary_hues() {
        // Hue 0 at full saturation and mid lightness is pure red.
        let red = Color::from_hls(Hls { h: 0.0, l: 0.5, s: 1.0 });
        assert_close(red.r, 1.0);
        assert_close(red.g, 0.0);
        assert_close(red.b, 0.0);

        let green = Color::from_hls(Hls { h: 1.0 / 3.0, l: 0.5, s: 1.0 });
        assert_close(green.g, 1.0);

        let blue = Color::from_hls(Hls { h: 2.0 / 3.0, l: 0.5, s: 1.0 });
        assert_close(blue.b, 1.0);
    }

    #[test]
    fn test_zero_saturation_is_gray() {
        let gray = Color::from_hls(Hls { h: 0.42, l: 0.3, s: 0.0 });
        assert_close(gray.r, 0.3);
        assert_close(gray.g, 0.3);
        assert_close(gray.b, 0.3);
    }

    #[test]
    fn test_hls_round_trip_for_every_piano_note() {
        for key in crate::note::keyboard() {
            let hls = key.hls();
            let back = Color::from_hls(hls).to_hls();
            assert!((back.h - hls.h).abs() < 1e-9, "{key} hue drifted");
            assert!((back.l - hls.l).abs() < 1e-9, "{key} lightness drifted");
            assert!((back.s - hls.s).abs() < 1e-9, "{key} saturation drifted");
        }
    }

    #[test]
    fn test_to_rgb8() {
        assert_eq!(Color::rgb(1.0, 0.0, 0.5).to_rgb8(), [255, 0, 128]);
        assert_eq!(Color::rgb(2.0, -1.0, 0.0).to_rgb8(), [255, 0, 0]);
    }

    #[test]
    fn test_note_colors_are_deterministic() {
        let note = Note::new(NoteName::FSharp, 5);
        assert_eq!(note.color(), note.color());
        assert_eq!(note.color().to_rgb8(), note.color().to_rgb8());
    }
}
