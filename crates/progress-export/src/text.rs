//! Text measurement for the built-in PDF fonts.
//!
//! Widths are estimated from an average glyph width, which is close enough
//! for Helvetica body text. Layout and PDF drawing both wrap through
//! [`wrap_text`] so block heights match what is drawn.

use crate::styles::PT_TO_MM;

/// Average Helvetica glyph width as a fraction of the font size.
const AVG_GLYPH_EM: f32 = 0.55;

pub fn glyph_width_mm(size_pt: f32) -> f32 {
    size_pt * PT_TO_MM * AVG_GLYPH_EM
}

pub fn text_width_mm(text: &str, size_pt: f32) -> f32 {
    text.chars().count() as f32 * glyph_width_mm(size_pt)
}

/// Break `text` into lines no wider than `width_mm`.
///
/// Lines break at whitespace. A word longer than a whole line is split
/// across lines. Always returns at least one line, so an empty cell still
/// takes up a row.
pub fn wrap_text(text: &str, width_mm: f32, size_pt: f32) -> Vec<String> {
    let glyph = glyph_width_mm(size_pt);
    let capacity = if glyph > 0.0 {
        ((width_mm / glyph).floor() as usize).max(1)
    } else {
        usize::MAX
    };

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();

        if current_len > 0 && current_len + 1 + chars.len() > capacity {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }

        while chars.len() > capacity {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = chars.split_off(capacity);
            lines.push(chars.into_iter().collect());
            chars = rest;
        }

        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(chars.iter());
        current_len += chars.len();
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}
