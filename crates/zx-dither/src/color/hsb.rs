//! Hue/saturation/brightness conversion.
//!
//! Uses the classic hexcone model with all three components in `0.0..=1.0`.
//! Saturation adjustment in preprocessing and the GigaScreen flicker score
//! both read colours through this model.

use super::Rgb;

/// A colour in HSB space. All components are in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsb {
    /// Hue as a fraction of a full turn.
    pub hue: f32,
    /// Saturation (0 = grey).
    pub saturation: f32,
    /// Brightness (max channel / 255).
    pub brightness: f32,
}

impl From<Rgb> for Hsb {
    fn from(c: Rgb) -> Self {
        let r = c.r as f32;
        let g = c.g as f32;
        let b = c.b as f32;
        let cmax = r.max(g).max(b);
        let cmin = r.min(g).min(b);

        let brightness = cmax / 255.0;
        let saturation = if cmax != 0.0 {
            (cmax - cmin) / cmax
        } else {
            0.0
        };

        let hue = if saturation == 0.0 {
            0.0
        } else {
            let span = cmax - cmin;
            let redc = (cmax - r) / span;
            let greenc = (cmax - g) / span;
            let bluec = (cmax - b) / span;
            let sextant = if r == cmax {
                bluec - greenc
            } else if g == cmax {
                2.0 + redc - bluec
            } else {
                4.0 + greenc - redc
            };
            let h = sextant / 6.0;
            if h < 0.0 {
                h + 1.0
            } else {
                h
            }
        };

        Hsb {
            hue,
            saturation,
            brightness,
        }
    }
}

impl From<Hsb> for Rgb {
    fn from(hsb: Hsb) -> Self {
        let v = hsb.brightness;
        let to_byte = |x: f32| (x * 255.0 + 0.5) as i32;

        if hsb.saturation == 0.0 {
            let grey = to_byte(v);
            return Rgb::from_clamped(grey, grey, grey);
        }

        let h = (hsb.hue - hsb.hue.floor()) * 6.0;
        let f = h - h.floor();
        let s = hsb.saturation;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let (r, g, b) = match h as u32 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        Rgb::from_clamped(to_byte(r), to_byte(g), to_byte(b))
    }
}
