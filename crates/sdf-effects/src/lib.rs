//! Time-driven page effects for the sdf portfolio.
//!
//! Every effect is an independent state machine fed with explicit page time
//! (milliseconds) and pointer/viewport events, so the host decides when
//! things happen and tests never sleep:
//!
//! - [`TypewriterLoop`]: type, pause, delete, repeat.
//! - [`PointerFollower`]: cursor/trail markers and interactive hover.
//! - [`TiltOnHover`]: pointer-relative card offset and highlight.
//! - [`RevealWatcher`]: one-shot reveal when an element scrolls into view.
//! - [`Marquee`]: endlessly scrolling text strip.
//! - [`logo::ring_cell`]: spinning ring around the hero logo.
//!
//! [`Effects`] bundles one of each with a shared attach/detach lifecycle.

pub mod chars;
pub mod color;
pub mod logo;
mod marquee;
mod pointer;
mod reveal;
mod scheduler;
mod tilt;
mod typewriter;

use ratatui::{layout::Position, style::Color};
use tracing::info;

pub use marquee::{DEFAULT_STEP_MS, Marquee};
pub use pointer::{HoverChange, PointerFollower};
pub use reveal::{DEFAULT_THRESHOLD, REVEAL_ANIMATION_MS, RevealWatcher};
pub use scheduler::Timer;
pub use tilt::{ACTIVE_SHADOW, DEFAULT_COEFFICIENT, NEUTRAL_BORDER, TiltOnHover, TiltStyle};
pub use typewriter::{Phase, Step, TypewriterLoop, TypewriterTiming};

/// Settings for [`Effects::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct EffectSettings {
    pub headline: String,
    pub timing: TypewriterTiming,
    pub tilt_coefficient: f32,
    pub highlight: Color,
    pub reveal_threshold: f32,
    pub marquee_text: String,
    pub marquee_step_ms: u64,
}

impl Default for EffectSettings {
    fn default() -> Self {
        Self {
            headline: String::new(),
            timing: TypewriterTiming::default(),
            tilt_coefficient: DEFAULT_COEFFICIENT,
            highlight: Color::Rgb(168, 85, 247),
            reveal_threshold: DEFAULT_THRESHOLD,
            marquee_text: String::new(),
            marquee_step_ms: DEFAULT_STEP_MS,
        }
    }
}

/// Owner of every page effect.
///
/// Dropping the controller detaches all effects, so listeners and timers
/// are released on every exit path.
#[derive(Debug)]
pub struct Effects<K: Copy + Eq> {
    pub typewriter: TypewriterLoop,
    pub pointer: PointerFollower<K>,
    pub tilt: TiltOnHover<K>,
    pub reveal: RevealWatcher<K>,
    pub marquee: Marquee,
}

impl<K: Copy + Eq> Effects<K> {
    pub fn new(settings: EffectSettings) -> Self {
        Self {
            typewriter: TypewriterLoop::new(settings.headline, settings.timing),
            pointer: PointerFollower::new(),
            tilt: TiltOnHover::new(settings.tilt_coefficient, settings.highlight),
            reveal: RevealWatcher::new(settings.reveal_threshold),
            marquee: Marquee::new(&settings.marquee_text, settings.marquee_step_ms),
        }
    }

    pub fn attach(&mut self, now_ms: u64) {
        self.typewriter.attach(now_ms);
        self.pointer.attach();
        self.tilt.attach();
        self.reveal.attach();
        info!(now_ms, "effects attached");
    }

    pub fn detach(&mut self) {
        let was_attached = self.is_attached();
        self.typewriter.detach();
        self.pointer.detach();
        self.tilt.detach();
        self.reveal.detach();
        if was_attached {
            info!("effects detached");
        }
    }

    /// True while any effect is still attached.
    pub fn is_attached(&self) -> bool {
        self.typewriter.is_attached()
            || self.pointer.is_attached()
            || self.tilt.is_attached()
            || self.reveal.is_attached()
    }

    /// Advance timed effects.
    pub fn update(&mut self, now_ms: u64) -> Option<Step> {
        self.typewriter.update(now_ms)
    }

    /// Feed a pointer move to the pointer follower and the tilt cards.
    pub fn on_pointer_move(&mut self, pos: Position) -> Option<HoverChange<K>> {
        self.tilt.on_pointer_move(pos);
        self.pointer.on_pointer_move(pos)
    }

    /// The pointer left the window.
    pub fn on_pointer_leave(&mut self) -> Option<HoverChange<K>> {
        self.tilt.on_pointer_leave();
        self.pointer.on_pointer_leave()
    }
}

impl<K: Copy + Eq> Drop for Effects<K> {
    fn drop(&mut self) {
        self.detach();
    }
}
