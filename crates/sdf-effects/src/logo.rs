//! Spinning gradient ring framing the hero logo (stateless).

use std::f32::consts::TAU;

use ratatui::style::Color;

use crate::chars::RING_RAMP;
use crate::color::hsl_to_rgb;

/// One full revolution of the ring.
pub const RING_PERIOD_MS: u64 = 8000;

/// Cells below this intensity are transparent.
const MIN_INTENSITY: f32 = 0.15;

/// Ring cell at `(x, y)` of a `width` x `height` logo box.
///
/// The ring is an ellipse two columns and one row thick; its gradient
/// fades from solid to transparent around the circumference and spins
/// once per [`RING_PERIOD_MS`]. Returns `None` off the ring and where the
/// gradient is transparent.
pub fn ring_cell(
    x: u16,
    y: u16,
    width: u16,
    height: u16,
    elapsed_ms: u64,
    hue: f32,
) -> Option<(char, Color)> {
    let rx = f32::from(width) / 2.0;
    let ry = f32::from(height) / 2.0;
    if rx <= 2.0 || ry <= 1.0 {
        return None;
    }

    let dx = f32::from(x) + 0.5 - rx;
    let dy = f32::from(y) + 0.5 - ry;

    let outer = (dx / rx).powi(2) + (dy / ry).powi(2);
    let inner = (dx / (rx - 2.0)).powi(2) + (dy / (ry - 1.0)).powi(2);
    if outer > 1.0 || inner < 1.0 {
        return None;
    }

    let phase = (elapsed_ms % RING_PERIOD_MS) as f32 / RING_PERIOD_MS as f32 * TAU;
    let angle = (dy / ry).atan2(dx / rx);
    let intensity = ((angle - phase).cos() + 1.0) / 2.0;
    if intensity < MIN_INTENSITY {
        return None;
    }

    let index = ((intensity - MIN_INTENSITY) / (1.0 - MIN_INTENSITY) * RING_RAMP.len() as f32)
        as usize;
    let ch = RING_RAMP[index.min(RING_RAMP.len() - 1)];
    let color = hsl_to_rgb(hue + 30.0 * intensity, 0.85, 0.25 + 0.4 * intensity);

    Some((ch, color))
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: u16 = 40;
    const H: u16 = 11;

    #[test]
    fn test_center_is_empty() {
        for t in [0, 2000, 4000, 6000] {
            assert_eq!(ring_cell(W / 2, H / 2, W, H, t, 270.0), None);
        }
    }

    #[test]
    fn test_ring_spins() {
        // Right-middle cell sits at angle zero.
        let (ch, _) = ring_cell(W - 1, H / 2, W, H, 0, 270.0).unwrap();
        assert_eq!(ch, '█');
        assert_eq!(ring_cell(W - 1, H / 2, W, H, RING_PERIOD_MS / 2, 270.0), None);
        assert!(ring_cell(W - 1, H / 2, W, H, RING_PERIOD_MS, 270.0).is_some());
    }

    #[test]
    fn test_tiny_box_has_no_ring() {
        assert_eq!(ring_cell(0, 0, 4, 2, 0, 0.0), None);
    }

    #[test]
    fn test_outside_is_empty() {
        assert_eq!(ring_cell(0, 0, W, H, 0, 270.0), None);
    }
}
