//! Braille glyph packing and escape-coded output.

use std::fmt;
use std::io::Write;

use crossterm::{
    Command, queue,
    style::{Print, ResetColor},
};

use crate::color::ColorGrid;
use crate::error::{Error, Result};
use crate::luma::LumaBitmap;

/// Base Braille character (U+2800, no dots).
pub const BRAILLE_BASE: u32 = 0x2800;

// Braille Unicode dot layout, relative to the cell's top-left pixel:
// (0,0) -> 0x01   (1,0) -> 0x08
// (0,1) -> 0x02   (1,1) -> 0x10
// (0,2) -> 0x04   (1,2) -> 0x20
// (0,3) -> 0x40   (1,3) -> 0x80
const DOTS: [(u32, u32, u8); 8] = [
    (0, 0, 0x01), (0, 1, 0x02), (0, 2, 0x04), (1, 0, 0x08),
    (1, 1, 0x10), (1, 2, 0x20), (0, 3, 0x40), (1, 3, 0x80),
];

/// SGR `38;5;n`: set the foreground to palette index `n`.
///
/// crossterm's `SetForegroundColor` writes an empty SGR when `NO_COLOR` is
/// set, which would turn every color change into a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetForeground256(pub u8);

/// SGR `48;5;n`: set the background to palette index `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetBackground256(pub u8);

impl Command for SetForeground256 {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write!(f, "\x1b[38;5;{}m", self.0)
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> std::io::Result<()> {
        Err(std::io::Error::other("256-color escapes need ANSI support"))
    }

    #[cfg(windows)]
    fn is_ansi_code_supported(&self) -> bool {
        true
    }
}

impl Command for SetBackground256 {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write!(f, "\x1b[48;5;{}m", self.0)
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> std::io::Result<()> {
        Err(std::io::Error::other("256-color escapes need ANSI support"))
    }

    #[cfg(windows)]
    fn is_ansi_code_supported(&self) -> bool {
        true
    }
}

/// Pack the 2x4 block whose top-left pixel is `(x, y)` into a dot mask.
pub fn pack_cell(luma: &LumaBitmap, x: u32, y: u32) -> u8 {
    DOTS.iter()
        .filter(|&&(dx, dy, _)| luma.get(x + dx, y + dy))
        .fold(0, |mask, &(_, _, bit)| mask | bit)
}

/// The Braille glyph for a dot mask.
pub fn braille_char(mask: u8) -> char {
    // Every u8 offset lands inside U+2800..=U+28FF.
    char::from_u32(BRAILLE_BASE + mask as u32).unwrap_or('\u{2800}')
}

/// Write the image as colored Braille text.
///
/// A foreground escape is written only when a cell's color differs from the
/// previous cell's. The output always opens with a black background on a line
/// of its own and ends with an attribute reset.
pub fn render<W: Write>(luma: &LumaBitmap, colors: &ColorGrid, out: &mut W) -> Result<()> {
    let (width, height) = luma.dimensions();
    if (width, height) != (colors.width() * 2, colors.height() * 4) {
        return Err(Error::GridMismatch {
            luma: luma.dimensions(),
            colors: colors.dimensions(),
        });
    }

    queue!(out, SetBackground256(0), Print('\n'))?;

    let mut last_color: Option<u8> = None;
    let mut color_changes = 0usize;
    for y in (0..height).step_by(4) {
        for x in (0..width).step_by(2) {
            let color = colors.get(x / 2, y / 4);
            if last_color != Some(color) {
                queue!(out, SetForeground256(color))?;
                last_color = Some(color);
                color_changes += 1;
            }
            queue!(out, Print(braille_char(pack_cell(luma, x, y))))?;
        }
        queue!(out, Print('\n'))?;
    }

    queue!(out, ResetColor, Print('\n'))?;
    out.flush()?;

    log::trace!("rendered {} rows with {} color escapes", colors.height(), color_changes);
    Ok(())
}

/// Render into a `String` instead of a writer.
pub fn render_to_string(luma: &LumaBitmap, colors: &ColorGrid) -> Result<String> {
    let mut buf = Vec::new();
    render(luma, colors, &mut buf)?;
    // Only escapes and chars are written, so this is always valid UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
