//! Color helpers for effects.

use ratatui::style::Color;

/// Background the page fades elements in from.
pub const PAGE_BACKGROUND: (u8, u8, u8) = (10, 10, 14);

/// Blend `color` toward the page background; `amount` 1.0 keeps the color,
/// 0.0 yields the background. Named colors are kept until half faded in.
pub fn fade_in(color: Color, amount: f32) -> Color {
    let amount = amount.clamp(0.0, 1.0);
    let (br, bg, bb) = PAGE_BACKGROUND;
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(
            lerp(br, r, amount),
            lerp(bg, g, amount),
            lerp(bb, b, amount),
        ),
        other if amount >= 0.5 => other,
        _ => Color::Rgb(br, bg, bb),
    }
}

fn lerp(from: u8, to: u8, amount: f32) -> u8 {
    (f32::from(from) + (f32::from(to) - f32::from(from)) * amount).round() as u8
}

/// Convert HSL to RGB color.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Color {
    if s == 0.0 {
        let v = (l * 255.0) as u8;
        return Color::Rgb(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    let h = h.rem_euclid(360.0) / 360.0;

    let r = hue_to_rgb(p, q, h + 1.0 / 3.0);
    let g = hue_to_rgb(p, q, h);
    let b = hue_to_rgb(p, q, h - 1.0 / 3.0);

    Color::Rgb((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_in_endpoints() {
        let color = Color::Rgb(200, 100, 50);
        assert_eq!(fade_in(color, 1.0), color);
        assert_eq!(fade_in(color, 0.0), Color::Rgb(10, 10, 14));
        assert_eq!(fade_in(Color::White, 0.2), Color::Rgb(10, 10, 14));
        assert_eq!(fade_in(Color::White, 0.8), Color::White);
    }

    #[test]
    fn test_hsl_primaries() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), Color::Rgb(255, 0, 0));
        assert_eq!(hsl_to_rgb(360.0, 1.0, 0.5), Color::Rgb(255, 0, 0));
        assert_eq!(hsl_to_rgb(0.0, 0.0, 0.0), Color::Rgb(0, 0, 0));
    }
}
