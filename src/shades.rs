//! Tint/shade palette generation.
//!
//! A palette of `n` steps holds `2n` colours. Tints interpolate linearly
//! toward white, shades scale linearly toward black, and the combined
//! `shades ++ tints` sequence is reversed so the palette runs from the
//! near-white tint at index 0 down to pure black at index `2n - 1`.

use std::fmt;
use std::ops::Index;

use crate::color::Colour;
use crate::constants::SHADE_STEPS;
use crate::error::ShadeError;

/// An ordered run of tints followed by shades.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    steps: usize,
    colours: Vec<Colour>,
}

/// Whether a swatch sits on the tint or the shade half of a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwatchKind {
    Tint,
    Shade,
}

impl fmt::Display for SwatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwatchKind::Tint => f.write_str("Tint"),
            SwatchKind::Shade => f.write_str("Shade"),
        }
    }
}

/// One palette entry together with its position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swatch {
    pub colour: Colour,
    pub index: usize,
    pub kind: SwatchKind,
    /// 1-based position within its half.
    pub ordinal: usize,
}

impl Swatch {
    /// Detail title, e.g. `"Tint 3 for #3B82F6"`.
    pub fn title(&self, base_hex: &str) -> String {
        format!(
            "{} {} for #{}",
            self.kind,
            self.ordinal,
            base_hex.to_ascii_uppercase()
        )
    }
}

impl Palette {
    /// Generate `steps` tints and `steps` shades of `base`.
    pub fn generate(base: Colour, steps: usize) -> Result<Self, ShadeError> {
        if steps == 0 {
            return Err(ShadeError::ZeroSteps);
        }
        Ok(Self::build(base, steps))
    }

    /// Palette with the default 18 steps per side.
    pub fn standard(base: Colour) -> Self {
        Self::build(base, SHADE_STEPS)
    }

    /// `steps` must be non-zero.
    pub(crate) fn build(base: Colour, steps: usize) -> Self {
        let factor = 1.0 / steps as f64;
        let (r, g, b) = base.components();

        let mut shades = Vec::with_capacity(steps * 2);
        let mut tints = Vec::with_capacity(steps);
        for k in 0..steps {
            let o = k as f64 * factor;
            let lift = o + factor;
            let keep = 1.0 - o - factor;
            tints.push(Colour::new(lift + keep * r, lift + keep * g, lift + keep * b));
            shades.push(Colour::new(o * r, o * g, o * b));
        }

        let mut colours = shades;
        colours.append(&mut tints);
        colours.reverse();

        log::trace!(
            "generated {} swatches from {} ({} steps)",
            colours.len(),
            base,
            steps
        );
        Self { steps, colours }
    }

    /// Steps per side.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Total number of swatches (`2 * steps`).
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Colour> {
        self.colours.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Colour> + '_ {
        self.colours.iter().copied()
    }

    pub fn as_slice(&self) -> &[Colour] {
        &self.colours
    }

    /// The swatch at `index`, labelled with its half and ordinal.
    pub fn swatch(&self, index: usize) -> Option<Swatch> {
        let colour = self.get(index)?;
        let kind = if index < self.steps {
            SwatchKind::Tint
        } else {
            SwatchKind::Shade
        };
        Some(Swatch {
            colour,
            index,
            kind,
            ordinal: index % self.steps + 1,
        })
    }
}

impl Index<usize> for Palette {
    type Output = Colour;

    fn index(&self, index: usize) -> &Colour {
        &self.colours[index]
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Colour;
    type IntoIter = std::slice::Iter<'a, Colour>;

    fn into_iter(self) -> Self::IntoIter {
        self.colours.iter()
    }
}
