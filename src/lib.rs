//! # shade-palette
//!
//! Tint and shade palettes from a single base colour.
//!
//! Provides hex parsing, RGB/HSV/HSL conversion, an 18-step tint/shade
//! generator, a light/dark classifier for picking readable foreground and
//! outline colours, random "pleasing" colours, and the textual encodings a
//! detail view shows for each swatch.
//!
//! ## Usage
//!
//! ```rust
//! use shade_palette::PaletteSession;
//!
//! let mut session = PaletteSession::new();
//! session.set_hex("3B82F6").unwrap();
//! let palette = session.current_palette().unwrap();
//! assert_eq!(palette.len(), 36);
//! ```

mod color;
pub mod constants;
pub mod encodings;
mod error;
pub mod hex;
pub mod math;
#[cfg(feature = "random")]
pub mod random;
mod session;
mod shades;

pub use color::Colour;
pub use encodings::{describe_all_encodings, Encoding, EncodingKind};
pub use error::ShadeError;
pub use session::PaletteSession;
pub use shades::{Palette, Swatch, SwatchKind};
