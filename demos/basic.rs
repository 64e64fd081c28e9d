//! Standalone demo: prints the palette and encodings for a colour.
//!
//! `cargo run --example basic -- 3B82F6`, or no argument for a random colour.
//! Pass `--copy` to put the base colour's hex on the clipboard.

use shade_palette::{describe_all_encodings, Encoding, EncodingKind, PaletteSession, ShadeError};

fn main() -> Result<(), ShadeError> {
    env_logger::init();

    let (flags, args): (Vec<String>, Vec<String>) =
        std::env::args().skip(1).partition(|a| a.starts_with("--"));

    let session = match args.first() {
        Some(hex) => {
            let mut session = PaletteSession::new();
            session.set_hex(hex)?;
            session
        }
        None => PaletteSession::random(),
    };

    let hex = session.current_hex()?;
    println!("base #{hex}, outline {}", session.current_outline()?);
    for (index, colour) in session.current_palette()?.iter().enumerate() {
        if let Some(swatch) = session.current_swatch(index)? {
            println!("{:>2}  {colour}  {}", index, swatch.title(hex));
        }
    }

    println!();
    let encodings = describe_all_encodings(session.current_base()?);
    for encoding in &encodings {
        println!("{:<14} {}", encoding.label(), encoding.text);
    }

    if flags.iter().any(|f| f == "--copy") {
        copy_hex(&encodings)?;
    }
    Ok(())
}

#[cfg(feature = "clipboard")]
fn copy_hex(encodings: &[Encoding]) -> Result<(), ShadeError> {
    if let Some(hex) = encodings.iter().find(|e| e.kind == EncodingKind::Hex) {
        shade_palette::encodings::copy_to_clipboard(hex)?;
        println!("copied {}", hex.text);
    }
    Ok(())
}

#[cfg(not(feature = "clipboard"))]
fn copy_hex(_: &[Encoding]) -> Result<(), ShadeError> {
    eprintln!("built without the `clipboard` feature");
    Ok(())
}
