//! Glyphs used by the effects.

/// Ring shading from faint to solid.
pub const RING_RAMP: &[char] = &['░', '▒', '▓', '█'];

/// Typewriter caret.
pub const CARET: char = '▌';

/// Cursor marker drawn at the pointer cell.
pub const CURSOR_MARK: char = '●';

/// Trail brackets around the pointer when idle.
pub const TRAIL_IDLE: (char, char) = ('(', ')');

/// Trail brackets around the pointer over an interactive element.
pub const TRAIL_HOVER: (char, char) = ('⟦', '⟧');
