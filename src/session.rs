//! Palette session: the current base colour and everything derived from it.
//!
//! The session is either empty or holds a committed hex string together
//! with its base colour, palette and outline colour. All derived values are
//! replaced in one assignment, so readers never see a mix of old and new
//! state.

use crate::color::Colour;
use crate::constants::{HEX_LEN, OUTLINE_DIVISOR, SHADE_STEPS};
use crate::error::ShadeError;
use crate::hex;
use crate::shades::{Palette, Swatch};

/// Derived state for a committed colour.
#[derive(Debug, Clone, PartialEq)]
struct ActivePalette {
    hex: String,
    base: Colour,
    palette: Palette,
    outline: Colour,
}

#[derive(Debug, Clone, PartialEq)]
enum State {
    Empty,
    Active(ActivePalette),
}

/// Owns the current base colour, its palette, and its outline colour.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteSession {
    steps: usize,
    state: State,
}

impl Default for PaletteSession {
    fn default() -> Self {
        Self {
            steps: SHADE_STEPS,
            state: State::Empty,
        }
    }
}

impl PaletteSession {
    /// Empty session with 18 steps per side.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty session generating `steps` tints and `steps` shades.
    pub fn with_steps(steps: usize) -> Result<Self, ShadeError> {
        if steps == 0 {
            return Err(ShadeError::ZeroSteps);
        }
        Ok(Self {
            steps,
            state: State::Empty,
        })
    }

    /// Session already showing a random pleasing colour.
    #[cfg(feature = "random")]
    pub fn random() -> Self {
        let mut session = Self::new();
        let hex = crate::random::pleasing_colour().to_hex();
        // A freshly formatted colour is always six valid digits.
        if session.set_hex(&hex).is_err() {
            log::warn!("random colour {hex} was rejected");
        }
        session
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Commit text typed into the hex field.
    ///
    /// Empty text clears the session; six hex digits (optionally prefixed by
    /// `#`) make it active; one to five characters leave it untouched.
    pub fn set_hex(&mut self, text: &str) -> Result<(), ShadeError> {
        let stripped = hex::strip(text);
        let len = stripped.chars().count();
        match len {
            0 => {
                self.clear();
                Ok(())
            }
            HEX_LEN => {
                let base = hex::parse(stripped)?;
                self.activate(stripped.to_ascii_uppercase(), base);
                Ok(())
            }
            n if n > HEX_LEN => Err(ShadeError::InvalidLength(n)),
            _ => Ok(()),
        }
    }

    fn activate(&mut self, hex: String, base: Colour) {
        let palette = Palette::build(base, self.steps);
        let outline = palette[self.outline_index(base.is_light())];
        log::debug!(
            "palette session active: #{} ({} swatches, outline {})",
            hex,
            palette.len(),
            outline
        );
        self.state = State::Active(ActivePalette {
            hex,
            base,
            palette,
            outline,
        });
    }

    /// Light bases get an outline from the dark end, dark bases from the
    /// light end. With 18 steps this is index 30 or 6.
    fn outline_index(&self, is_light: bool) -> usize {
        let inset = self.steps / OUTLINE_DIVISOR;
        if is_light {
            (2 * self.steps - inset).min(2 * self.steps - 1)
        } else {
            inset
        }
    }

    /// Return to the empty state.
    pub fn clear(&mut self) {
        if self.is_active() {
            log::debug!("palette session cleared");
        }
        self.state = State::Empty;
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, State::Active(_))
    }

    fn active(&self) -> Result<&ActivePalette, ShadeError> {
        match &self.state {
            State::Active(active) => Ok(active),
            State::Empty => Err(ShadeError::NotReady),
        }
    }

    /// Committed hex, uppercase without `#`.
    pub fn current_hex(&self) -> Result<&str, ShadeError> {
        Ok(&self.active()?.hex)
    }

    pub fn current_base(&self) -> Result<Colour, ShadeError> {
        Ok(self.active()?.base)
    }

    pub fn current_palette(&self) -> Result<&Palette, ShadeError> {
        Ok(&self.active()?.palette)
    }

    pub fn current_outline(&self) -> Result<Colour, ShadeError> {
        Ok(self.active()?.outline)
    }

    /// Black or white, whichever reads on the base colour.
    pub fn current_foreground(&self) -> Result<Colour, ShadeError> {
        Ok(self.active()?.base.foreground())
    }

    /// Swatch at `index`, or `None` when out of range.
    pub fn current_swatch(&self, index: usize) -> Result<Option<Swatch>, ShadeError> {
        Ok(self.active()?.palette.swatch(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let session = PaletteSession::new();
        assert!(!session.is_active());
        assert!(matches!(session.current_palette(), Err(ShadeError::NotReady)));
        assert!(matches!(session.current_outline(), Err(ShadeError::NotReady)));
        assert!(matches!(session.current_base(), Err(ShadeError::NotReady)));
        assert!(matches!(session.current_hex(), Err(ShadeError::NotReady)));
    }

    #[test]
    fn empty_text_clears() {
        let mut session = PaletteSession::new();
        session.set_hex("3B82F6").unwrap();
        assert!(session.is_active());
        session.set_hex("").unwrap();
        assert!(matches!(session.current_palette(), Err(ShadeError::NotReady)));
        assert!(matches!(session.current_outline(), Err(ShadeError::NotReady)));
    }

    #[test]
    fn six_digits_activate_everything_together() {
        let mut session = PaletteSession::new();
        session.set_hex("#3b82f6").unwrap();
        assert_eq!(session.current_hex().unwrap(), "3B82F6");
        let base = session.current_base().unwrap();
        assert_eq!(base.to_rgb8(), (0x3B, 0x82, 0xF6));
        let palette = session.current_palette().unwrap();
        assert_eq!(palette, &Palette::standard(base));
        assert_eq!(palette.len(), 36);
    }

    #[test]
    fn dark_base_outlines_from_the_tint_end() {
        let mut session = PaletteSession::new();
        session.set_hex("1A237E").unwrap();
        let palette = session.current_palette().unwrap();
        assert_eq!(session.current_outline().unwrap(), palette[6]);
        assert_eq!(session.current_foreground().unwrap(), Colour::WHITE);
    }

    #[test]
    fn light_base_outlines_from_the_shade_end() {
        let mut session = PaletteSession::new();
        session.set_hex("FFEB3B").unwrap();
        let palette = session.current_palette().unwrap();
        assert_eq!(session.current_outline().unwrap(), palette[30]);
        assert_eq!(session.current_foreground().unwrap(), Colour::BLACK);
    }

    #[test]
    fn partial_input_keeps_previous_state() {
        let mut session = PaletteSession::new();
        session.set_hex("ABC").unwrap();
        assert!(!session.is_active());

        session.set_hex("3B82F6").unwrap();
        let before = session.clone();
        session.set_hex("3B82F").unwrap();
        assert_eq!(session, before);
    }

    #[test]
    fn overlong_input_is_rejected() {
        let mut session = PaletteSession::new();
        session.set_hex("3B82F6").unwrap();
        assert!(matches!(
            session.set_hex("3B82F6A"),
            Err(ShadeError::InvalidLength(7))
        ));
        assert_eq!(session.current_hex().unwrap(), "3B82F6");
    }

    #[test]
    fn invalid_digits_leave_state_alone() {
        let mut session = PaletteSession::new();
        session.set_hex("3B82F6").unwrap();
        assert!(matches!(
            session.set_hex("ZZZZZZ"),
            Err(ShadeError::InvalidFormat(_))
        ));
        assert_eq!(session.current_hex().unwrap(), "3B82F6");
    }

    #[test]
    fn custom_steps_scale_outline() {
        let mut session = PaletteSession::with_steps(6).unwrap();
        session.set_hex("000000").unwrap();
        let palette = session.current_palette().unwrap();
        assert_eq!(palette.len(), 12);
        assert_eq!(session.current_outline().unwrap(), palette[2]);

        session.set_hex("FFFFFF").unwrap();
        let palette = session.current_palette().unwrap();
        assert_eq!(session.current_outline().unwrap(), palette[10]);
    }

    #[test]
    fn single_step_outline_stays_in_range() {
        let mut session = PaletteSession::with_steps(1).unwrap();
        session.set_hex("FFFFFF").unwrap();
        assert_eq!(session.current_outline().unwrap(), Colour::BLACK);
        session.set_hex("000000").unwrap();
        assert_eq!(session.current_outline().unwrap(), Colour::WHITE);
    }

    #[test]
    fn zero_steps_is_rejected() {
        assert!(matches!(
            PaletteSession::with_steps(0),
            Err(ShadeError::ZeroSteps)
        ));
    }

    #[test]
    fn swatch_lookup() {
        let mut session = PaletteSession::new();
        assert!(matches!(session.current_swatch(0), Err(ShadeError::NotReady)));
        session.set_hex("3B82F6").unwrap();
        let swatch = session.current_swatch(20).unwrap().unwrap();
        assert_eq!(swatch.title(session.current_hex().unwrap()), "Shade 3 for #3B82F6");
        assert!(session.current_swatch(36).unwrap().is_none());
    }

    #[cfg(feature = "random")]
    #[test]
    fn random_session_is_active() {
        let session = PaletteSession::random();
        assert!(session.is_active());
        assert_eq!(session.current_palette().unwrap().len(), 36);
    }
}
