//! Core types shared by the sdf portfolio crates.

use std::fmt;
use std::str::FromStr;

use ratatui::{
    layout::{Position, Rect},
    style::Color,
};
use serde::{Deserialize, Serialize};

/// Accent color used for highlights, borders and the logo.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    #[default]
    Purple,
    Cyan,
    Green,
    Magenta,
    Yellow,
    Red,
    Blue,
}

impl Accent {
    /// Every accent, in cycling order.
    pub const ALL: [Accent; 7] = [
        Accent::Purple,
        Accent::Cyan,
        Accent::Green,
        Accent::Magenta,
        Accent::Yellow,
        Accent::Red,
        Accent::Blue,
    ];

    /// Cycle to the next accent.
    pub fn next(self) -> Self {
        match self {
            Accent::Purple => Accent::Cyan,
            Accent::Cyan => Accent::Green,
            Accent::Green => Accent::Magenta,
            Accent::Magenta => Accent::Yellow,
            Accent::Yellow => Accent::Red,
            Accent::Red => Accent::Blue,
            Accent::Blue => Accent::Purple,
        }
    }

    /// Full-strength accent color.
    pub fn color(self) -> Color {
        let (r, g, b) = self.rgb();
        Color::Rgb(r, g, b)
    }

    /// Accent blended halfway into the dark page background.
    pub fn soft(self) -> Color {
        let (r, g, b) = self.rgb();
        Color::Rgb(r / 2, g / 2, b / 2)
    }

    /// Base hue in degrees, used by the logo ring gradient.
    pub fn hue(self) -> f32 {
        match self {
            Accent::Purple => 271.0,
            Accent::Cyan => 187.0,
            Accent::Green => 142.0,
            Accent::Magenta => 300.0,
            Accent::Yellow => 48.0,
            Accent::Red => 0.0,
            Accent::Blue => 217.0,
        }
    }

    fn rgb(self) -> (u8, u8, u8) {
        match self {
            Accent::Purple => (168, 85, 247),
            Accent::Cyan => (34, 211, 238),
            Accent::Green => (74, 222, 128),
            Accent::Magenta => (232, 121, 249),
            Accent::Yellow => (250, 204, 21),
            Accent::Red => (248, 113, 113),
            Accent::Blue => (96, 165, 250),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Accent::Purple => "purple",
            Accent::Cyan => "cyan",
            Accent::Green => "green",
            Accent::Magenta => "magenta",
            Accent::Yellow => "yellow",
            Accent::Red => "red",
            Accent::Blue => "blue",
        }
    }
}

impl fmt::Display for Accent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Accent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Accent::ALL
            .into_iter()
            .find(|accent| accent.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown accent `{s}`"))
    }
}

/// Whether a cell position lies inside an area.
pub fn contains(area: Rect, pos: Position) -> bool {
    pos.x >= area.x
        && pos.y >= area.y
        && u32::from(pos.x) < u32::from(area.x) + u32::from(area.width)
        && u32::from(pos.y) < u32::from(area.y) + u32::from(area.height)
}

/// Geometric center of an area, in cell units.
pub fn center(area: Rect) -> (f32, f32) {
    (
        f32::from(area.x) + f32::from(area.width) / 2.0,
        f32::from(area.y) + f32::from(area.height) / 2.0,
    )
}

/// Number of cells covered by an area.
pub fn cell_count(area: Rect) -> u32 {
    u32::from(area.width) * u32::from(area.height)
}

/// Fraction (0.0-1.0) of `area` that lies inside `viewport`.
///
/// Zero-sized areas are never visible.
pub fn visible_fraction(area: Rect, viewport: Rect) -> f32 {
    let total = cell_count(area);
    if total == 0 {
        return 0.0;
    }

    let left = u32::from(area.x).max(u32::from(viewport.x));
    let top = u32::from(area.y).max(u32::from(viewport.y));
    let right = (u32::from(area.x) + u32::from(area.width))
        .min(u32::from(viewport.x) + u32::from(viewport.width));
    let bottom = (u32::from(area.y) + u32::from(area.height))
        .min(u32::from(viewport.y) + u32::from(viewport.height));

    if right <= left || bottom <= top {
        return 0.0;
    }

    ((right - left) * (bottom - top)) as f32 / total as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_accent_cycle_visits_every_accent() {
        let mut accent = Accent::default();
        let mut seen = Vec::new();
        for _ in 0..Accent::ALL.len() {
            seen.push(accent);
            accent = accent.next();
        }
        assert_eq!(accent, Accent::Purple);
        assert_eq!(seen, Accent::ALL.to_vec());
    }

    #[test]
    fn test_accent_parse() {
        assert_eq!("Cyan".parse::<Accent>(), Ok(Accent::Cyan));
        assert!("teal".parse::<Accent>().is_err());
        assert_eq!(Accent::Magenta.to_string(), "magenta");
    }

    #[test]
    fn test_contains_edges() {
        let area = Rect::new(2, 3, 4, 2);
        assert!(contains(area, Position::new(2, 3)));
        assert!(contains(area, Position::new(5, 4)));
        assert!(!contains(area, Position::new(6, 4)));
        assert!(!contains(area, Position::new(5, 5)));
        assert!(!contains(Rect::new(0, 0, 0, 0), Position::new(0, 0)));
    }

    #[test]
    fn test_visible_fraction() {
        let viewport = Rect::new(0, 10, 80, 20);
        assert_eq!(visible_fraction(Rect::new(0, 12, 10, 4), viewport), 1.0);
        assert_eq!(visible_fraction(Rect::new(0, 28, 10, 4), viewport), 0.5);
        assert_eq!(visible_fraction(Rect::new(0, 30, 10, 4), viewport), 0.0);
        assert_eq!(visible_fraction(Rect::new(0, 12, 0, 4), viewport), 0.0);
    }

    #[test]
    fn test_center() {
        assert_eq!(center(Rect::new(0, 0, 10, 4)), (5.0, 2.0));
    }
}
