//! One-shot scroll reveal driven by viewport intersection.

use ratatui::layout::Rect;
use sdf_core::visible_fraction;
use tracing::debug;

/// Default minimum visible fraction before an element is revealed.
pub const DEFAULT_THRESHOLD: f32 = 0.1;

/// Duration of the entrance animation that follows a reveal.
pub const REVEAL_ANIMATION_MS: u64 = 600;

#[derive(Debug, Clone)]
struct Observed<K> {
    key: K,
    revealed_at: Option<u64>,
}

/// Shared intersection watcher for every element tagged for reveal.
///
/// Once an element is revealed it stays revealed; later notifications,
/// including ones where it has scrolled back out, change nothing.
#[derive(Debug, Clone)]
pub struct RevealWatcher<K> {
    threshold: f32,
    attached: bool,
    observed: Vec<Observed<K>>,
}

impl<K: Copy + Eq> RevealWatcher<K> {
    /// Create the watcher. The threshold is clamped into `(0, 1]`.
    pub fn new(threshold: f32) -> Self {
        let threshold = if threshold.is_finite() {
            threshold.clamp(f32::EPSILON, 1.0)
        } else {
            DEFAULT_THRESHOLD
        };

        Self {
            threshold,
            attached: false,
            observed: Vec::new(),
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn attach(&mut self) {
        self.attached = true;
    }

    pub fn detach(&mut self) {
        self.attached = false;
        self.observed.clear();
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Start watching an element. Observing twice is a no-op.
    pub fn observe(&mut self, key: K) {
        if !self.observed.iter().any(|element| element.key == key) {
            self.observed.push(Observed {
                key,
                revealed_at: None,
            });
        }
    }

    pub fn unobserve(&mut self, key: K) {
        self.observed.retain(|element| element.key != key);
    }

    /// Deliver a batch of element areas for the current viewport.
    ///
    /// Areas and viewport share one coordinate space. Returns the keys
    /// revealed by this batch; unknown keys are skipped.
    pub fn notify<I>(&mut self, now_ms: u64, viewport: Rect, entries: I) -> Vec<K>
    where
        I: IntoIterator<Item = (K, Rect)>,
    {
        if !self.attached {
            return Vec::new();
        }

        let mut revealed = Vec::new();
        for (key, area) in entries {
            let Some(element) = self.observed.iter_mut().find(|element| element.key == key) else {
                continue;
            };
            if element.revealed_at.is_some() {
                continue;
            }
            if visible_fraction(area, viewport) >= self.threshold {
                element.revealed_at = Some(now_ms);
                revealed.push(key);
            }
        }

        if !revealed.is_empty() {
            debug!(count = revealed.len(), "elements revealed");
        }
        revealed
    }

    /// Whether an element has been revealed; false for unknown keys.
    pub fn is_revealed(&self, key: K) -> bool {
        self.revealed_at(key).is_some()
    }

    pub fn revealed_at(&self, key: K) -> Option<u64> {
        self.observed
            .iter()
            .find(|element| element.key == key)
            .and_then(|element| element.revealed_at)
    }

    /// Entrance animation progress from 0.0 (hidden) to 1.0 (settled).
    pub fn progress(&self, key: K, now_ms: u64) -> f32 {
        match self.revealed_at(key) {
            Some(at) => {
                (now_ms.saturating_sub(at) as f32 / REVEAL_ANIMATION_MS as f32).min(1.0)
            }
            None => 0.0,
        }
    }
}
