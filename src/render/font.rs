//! Built-in 5x7 bitmap font
//!
//! Covers digits plus the handful of letters and punctuation the two games
//! put on screen (score line, winner banner, replay prompt). Unknown
//! characters advance the cursor without drawing.

use super::frame::{Color, Frame};

/// Glyph cell size in unscaled pixels
pub const GLYPH_W: u32 = 5;
pub const GLYPH_H: u32 = 7;
/// Horizontal advance, one blank column between glyphs
const ADVANCE: u32 = GLYPH_W + 1;

/// Glyph rows, top to bottom; bit 4 is the leftmost column
fn glyph(c: char) -> Option<[u8; 7]> {
    let rows = match c {
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'N' => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        '!' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        '?' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b00000, 0b00100],
        '/' => [0b00001, 0b00010, 0b00010, 0b00100, 0b01000, 0b01000, 0b10000],
        _ => return None,
    };
    Some(rows)
}

/// Pixel width of a rendered string at the given scale
pub fn text_width(text: &str, scale: u32) -> u32 {
    let chars = text.chars().count() as u32;
    if chars == 0 {
        return 0;
    }
    // No trailing advance after the last glyph
    chars * ADVANCE * scale - scale
}

/// Pixel height of rendered text at the given scale
pub fn text_height(scale: u32) -> u32 {
    GLYPH_H * scale
}

/// Draw a string with its top-left corner at (x, y)
pub fn draw_text(frame: &mut Frame, x: i32, y: i32, scale: u32, color: Color, text: &str) {
    let mut cursor = x;
    for c in text.chars() {
        if let Some(rows) = glyph(c) {
            for (row_idx, row) in rows.iter().enumerate() {
                for col in 0..GLYPH_W {
                    if row & (1 << (GLYPH_W - 1 - col)) != 0 {
                        frame.fill_rect(
                            cursor + (col * scale) as i32,
                            y + row_idx as i32 * scale as i32,
                            scale,
                            scale,
                            color,
                        );
                    }
                }
            }
        }
        cursor += (ADVANCE * scale) as i32;
    }
}

/// Draw a string centered on the given point
pub fn draw_text_centered(
    frame: &mut Frame,
    center_x: i32,
    center_y: i32,
    scale: u32,
    color: Color,
    text: &str,
) {
    let x = center_x - text_width(text, scale) as i32 / 2;
    let y = center_y - text_height(scale) as i32 / 2;
    draw_text(frame, x, y, scale, color, text);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_width_accounts_for_advance() {
        assert_eq!(text_width("", 1), 0);
        assert_eq!(text_width("5", 1), GLYPH_W);
        assert_eq!(text_width("55", 1), 2 * GLYPH_W + 1);
        assert_eq!(text_width("55", 3), 3 * (2 * GLYPH_W + 1));
    }

    #[test]
    fn test_every_hud_character_has_a_glyph() {
        for c in "0123456789 PLAYERCPUWINS!AGAIN?Y/N".chars() {
            if c == ' ' {
                continue; // space is the blank advance
            }
            assert!(glyph(c).is_some(), "missing glyph for {c:?}");
        }
    }

    #[test]
    fn test_draw_text_sets_pixels_inside_glyph_box_only() {
        let mut buf = vec![0; 16 * 8 * 4];
        let mut frame = Frame::new(&mut buf, 16, 8);
        let white: Color = [255; 4];
        draw_text(&mut frame, 0, 0, 1, white, "1");

        // '1' has its stem in the center column
        assert_eq!(frame.get(2, 2), Some(white));
        // Nothing outside the 5x7 box
        assert_eq!(frame.get(5, 0), Some([0, 0, 0, 0]));
        assert_eq!(frame.get(0, 7), Some([0, 0, 0, 0]));
    }
}
