//! Block-letter fonts for the sdf hero logo.

/// Height of every glyph, in rows.
pub const GLYPH_HEIGHT: usize = 7;

/// Letter S
pub const LETTER_S: [&str; GLYPH_HEIGHT] = [
    " █████",
    "██    ",
    "██    ",
    " ████ ",
    "    ██",
    "    ██",
    "█████ ",
];

/// Letter D
pub const LETTER_D: [&str; GLYPH_HEIGHT] = [
    "█████ ",
    "██  ██",
    "██  ██",
    "██  ██",
    "██  ██",
    "██  ██",
    "█████ ",
];

/// Letter F
pub const LETTER_F: [&str; GLYPH_HEIGHT] = [
    "██████",
    "██    ",
    "██    ",
    "█████ ",
    "██    ",
    "██    ",
    "██    ",
];

/// Percent sign (the prompt glyph)
pub const PERCENT: [&str; GLYPH_HEIGHT] = [
    "██   █",
    "██  ██",
    "   ██ ",
    "  ██  ",
    " ██   ",
    "██  ██",
    "█   ██",
];

/// Greater-than sign
pub const GREATER: [&str; GLYPH_HEIGHT] = [
    "██    ",
    " ██   ",
    "  ██  ",
    "   ██ ",
    "  ██  ",
    " ██   ",
    "██    ",
];

/// Period (2 chars wide)
pub const PERIOD: [&str; GLYPH_HEIGHT] = ["  ", "  ", "  ", "  ", "  ", "██", "██"];

/// Word gap (3 chars wide)
pub const SPACE: [&str; GLYPH_HEIGHT] = ["   "; GLYPH_HEIGHT];

/// Look up the glyph for a character, ignoring case.
pub fn glyph(ch: char) -> Option<&'static [&'static str; GLYPH_HEIGHT]> {
    match ch.to_ascii_uppercase() {
        'S' => Some(&LETTER_S),
        'D' => Some(&LETTER_D),
        'F' => Some(&LETTER_F),
        '%' => Some(&PERCENT),
        '>' => Some(&GREATER),
        '.' => Some(&PERIOD),
        ' ' => Some(&SPACE),
        _ => None,
    }
}

/// Build large block-letter art for `text`.
///
/// Characters without a glyph are rendered as a word gap so the banner
/// keeps its shape. Glyphs are separated by one blank column.
///
/// # Returns
/// A vector of [`GLYPH_HEIGHT`] strings, each one row of the art.
pub fn build_banner_art(text: &str) -> Vec<String> {
    let glyphs: Vec<_> = text.chars().map(|ch| glyph(ch).unwrap_or(&SPACE)).collect();

    let mut lines = Vec::with_capacity(GLYPH_HEIGHT);

    for row in 0..GLYPH_HEIGHT {
        let mut line = String::new();
        for (i, glyph) in glyphs.iter().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            line.push_str(glyph[row]);
        }
        lines.push(line);
    }

    lines
}

/// Width in columns of the banner [`build_banner_art`] produces for `text`.
pub fn banner_width(text: &str) -> usize {
    let glyph_widths: usize = text
        .chars()
        .map(|ch| glyph(ch).unwrap_or(&SPACE)[0].chars().count())
        .sum();
    glyph_widths + text.chars().count().saturating_sub(1)
}
