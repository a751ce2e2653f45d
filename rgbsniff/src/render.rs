//! Bordered color-grid preview of an RGB24 buffer
//!
//! Each pixel becomes two background-colored spaces so cells are roughly
//! square in a terminal.

use std::io::{self, Write};

use crate::error::RenderError;
use crate::rgb::BYTES_PER_PIXEL;

const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCapability {
    TrueColor,
    Colors256,
}

impl ColorCapability {
    /// Escape sequence setting the background to `(r, g, b)`
    #[inline]
    pub fn background(&self, r: u8, g: u8, b: u8) -> String {
        match self {
            ColorCapability::TrueColor => format!("\x1b[48;2;{r};{g};{b}m"),
            ColorCapability::Colors256 => {
                let index = ansi_colours::ansi256_from_rgb((r, g, b));
                format!("\x1b[48;5;{index}m")
            }
        }
    }
}

/// Draw `pixels` as a `width` x `height` grid, top row first.
pub fn render_grid(
    out: &mut impl Write,
    pixels: &[u8],
    width: usize,
    height: usize,
    capability: ColorCapability,
) -> Result<(), RenderError> {
    let expected = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(BYTES_PER_PIXEL));
    if expected != Some(pixels.len()) {
        return Err(RenderError::DimensionMismatch {
            width,
            height,
            byte_len: pixels.len(),
        });
    }

    log::debug!("Rendering {width}x{height} preview");
    write_grid(out, pixels, width, height, capability)?;
    Ok(())
}

fn write_grid(
    out: &mut impl Write,
    pixels: &[u8],
    width: usize,
    height: usize,
    capability: ColorCapability,
) -> io::Result<()> {
    let edge = "──".repeat(width);

    writeln!(out, "\nImage preview ({width}x{height}):")?;
    writeln!(out, "┌{edge}┐")?;

    if width > 0 {
        for row in pixels.chunks_exact(width * BYTES_PER_PIXEL) {
            let mut line = String::from("│");
            for px in row.chunks_exact(BYTES_PER_PIXEL) {
                line.push_str(&capability.background(px[0], px[1], px[2]));
                line.push_str("  ");
                line.push_str(RESET);
            }
            line.push('│');
            writeln!(out, "{line}")?;
        }
    }

    writeln!(out, "└{edge}┘")?;
    out.flush()
}
