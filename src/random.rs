//! Random "pleasing" colours: random hue, saturation halved, value lifted.

use rand::Rng;

use crate::color::Colour;
use crate::math;

/// Draw a pleasing colour from the thread-local RNG.
pub fn pleasing_colour() -> Colour {
    pleasing_colour_with(&mut rand::thread_rng())
}

/// Draw a pleasing colour from `rng`.
///
/// A uniform RGB sample is converted to HSV; the hue is kept, saturation
/// becomes `s / 2` and value `(1 + s) / 2`. Results land in the
/// mid-saturation, high-value band.
pub fn pleasing_colour_with(rng: &mut impl Rng) -> Colour {
    let r = rng.gen_range(0.0..=1.0);
    let g = rng.gen_range(0.0..=1.0);
    let b = rng.gen_range(0.0..=1.0);
    let (h, s, _) = math::rgb_to_hsv(r, g, b);
    Colour::from_hsv(h, s / 2.0, (1.0 + s) / 2.0)
}
