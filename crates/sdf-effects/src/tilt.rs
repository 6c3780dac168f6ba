//! Pointer-relative tilt for card-like containers.

use ratatui::{
    layout::{Position, Rect},
    style::Color,
};
use sdf_core::{center, contains};

/// Default offset per cell of pointer distance from the card center.
pub const DEFAULT_COEFFICIENT: f32 = 0.1;

/// Border color of a resting card.
pub const NEUTRAL_BORDER: Color = Color::Rgb(64, 64, 72);

/// Drop shadow depth, in cells, of an active card.
pub const ACTIVE_SHADOW: u16 = 1;

/// Visual state of one card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltStyle {
    /// Exact pointer-relative offset in cells.
    pub offset: (f32, f32),
    pub border: Color,
    /// Shadow depth in cells; zero when resting.
    pub shadow: u16,
    pub active: bool,
}

impl TiltStyle {
    pub const NEUTRAL: TiltStyle = TiltStyle {
        offset: (0.0, 0.0),
        border: NEUTRAL_BORDER,
        shadow: 0,
        active: false,
    };

    /// Offset rounded to whole cells.
    pub fn translation(&self) -> (i16, i16) {
        (self.offset.0.round() as i16, self.offset.1.round() as i16)
    }
}

#[derive(Debug, Clone)]
struct Card<K> {
    key: K,
    /// Visible part of the resting slot, used for hit testing.
    area: Option<Rect>,
    /// Center of the whole card, which may extend past the screen.
    center: (f32, f32),
    offset: (f32, f32),
    active: bool,
}

impl<K> Card<K> {
    fn reset(&mut self) {
        self.offset = (0.0, 0.0);
        self.active = false;
    }
}

/// Tilt effect for every registered card.
///
/// Hit testing uses each card's resting slot, not its translated position,
/// so a moving card never moves itself out from under the pointer.
#[derive(Debug, Clone)]
pub struct TiltOnHover<K> {
    coefficient: f32,
    highlight: Color,
    attached: bool,
    cards: Vec<Card<K>>,
}

impl<K: Copy + Eq> TiltOnHover<K> {
    pub fn new(coefficient: f32, highlight: Color) -> Self {
        Self {
            coefficient,
            highlight,
            attached: false,
            cards: Vec::new(),
        }
    }

    pub fn attach(&mut self) {
        self.attached = true;
    }

    pub fn detach(&mut self) {
        self.attached = false;
        self.cards.clear();
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Border color used while a card is active.
    pub fn set_highlight(&mut self, highlight: Color) {
        self.highlight = highlight;
    }

    pub fn register(&mut self, key: K) {
        if !self.cards.iter().any(|card| card.key == key) {
            self.cards.push(Card {
                key,
                area: None,
                center: (0.0, 0.0),
                offset: (0.0, 0.0),
                active: false,
            });
        }
    }

    pub fn unregister(&mut self, key: K) {
        self.cards.retain(|card| card.key != key);
    }

    /// Update a card's resting slot, fully on screen. A hidden card is reset.
    pub fn set_area(&mut self, key: K, area: Option<Rect>) {
        let slot_center = area.map_or((0.0, 0.0), center);
        self.set_slot(key, area, slot_center);
    }

    /// Update a card that is partly off screen: `visible` is the slice the
    /// pointer can reach and `center` the center of the whole card, both in
    /// screen cells.
    pub fn set_slot(&mut self, key: K, visible: Option<Rect>, center: (f32, f32)) {
        if let Some(card) = self.cards.iter_mut().find(|card| card.key == key) {
            card.area = visible;
            card.center = center;
            if visible.is_none() {
                card.reset();
            }
        }
    }

    /// Tilt the card under the pointer and reset the ones it left.
    pub fn on_pointer_move(&mut self, pos: Position) {
        if !self.attached {
            return;
        }
        let coefficient = self.coefficient;
        let (px, py) = (f32::from(pos.x) + 0.5, f32::from(pos.y) + 0.5);

        for card in &mut self.cards {
            match card.area {
                Some(area) if contains(area, pos) => {
                    let (cx, cy) = card.center;
                    card.offset = ((px - cx) * coefficient, (py - cy) * coefficient);
                    card.active = true;
                }
                _ if card.active => card.reset(),
                _ => {}
            }
        }
    }

    /// The pointer left the window: every card goes back to rest.
    pub fn on_pointer_leave(&mut self) {
        self.cards.iter_mut().for_each(Card::reset);
    }

    /// Current style of a card; neutral for unknown keys.
    pub fn style(&self, key: K) -> TiltStyle {
        match self.cards.iter().find(|card| card.key == key) {
            Some(card) if card.active => TiltStyle {
                offset: card.offset,
                border: self.highlight,
                shadow: ACTIVE_SHADOW,
                active: true,
            },
            _ => TiltStyle::NEUTRAL,
        }
    }
}
