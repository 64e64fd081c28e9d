//! Colour space math — direct conversions without external dependencies.
//! All functions use normalized f64 in 0.0–1.0.

use crate::constants::{LIGHTNESS_THRESHOLD, LUMA_B, LUMA_G, LUMA_R};

/// HSV → RGB. All values 0.0–1.0.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    let h6 = (h * 6.0).rem_euclid(6.0);
    let i = h6.floor() as u32;
    let f = h6 - h6.floor();
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match i % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// RGB → HSV. All values 0.0–1.0, hue in [0, 1).
///
/// When several channels share the maximum, the red branch wins over green,
/// and green over blue.
pub fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let v = r.max(g).max(b);
    let c = v - r.min(g).min(b);

    let h = if c == 0.0 {
        0.0
    } else if v == r {
        let h = ((g - b) / c).rem_euclid(6.0) / 6.0;
        // rem_euclid rounds tiny negative quotients up to exactly 6.
        if h >= 1.0 {
            0.0
        } else {
            h
        }
    } else if v == g {
        ((b - r) / c + 2.0) / 6.0
    } else {
        ((r - g) / c + 4.0) / 6.0
    };
    let s = if v == 0.0 { 0.0 } else { c / v };

    (h, s, v)
}

/// HSV → HSL. Hue passes through unchanged.
pub fn hsv_to_hsl(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let l = (2.0 - s) * v / 2.0;
    let s_l = if l == 0.0 || l == 1.0 {
        0.0
    } else if l < 0.5 {
        s * v / (l * 2.0)
    } else {
        s * v / (2.0 - l * 2.0)
    };
    (h, s_l, l)
}

/// HSL → HSV. Hue passes through unchanged.
pub fn hsl_to_hsv(h: f64, s_l: f64, l: f64) -> (f64, f64, f64) {
    let v = l + s_l * l.min(1.0 - l);
    let s = if v == 0.0 { 0.0 } else { 2.0 * (1.0 - l / v) };
    (h, s, v)
}

/// Rec. 601 weighted luma of an RGB triple.
pub fn luminance(r: f64, g: f64, b: f64) -> f64 {
    LUMA_R * r + LUMA_G * g + LUMA_B * b
}

/// `true` when the colour is perceptually light, i.e. dark text reads on it.
pub fn luminance_threshold(r: f64, g: f64, b: f64) -> bool {
    luminance(r, g, b) > LIGHTNESS_THRESHOLD
}
