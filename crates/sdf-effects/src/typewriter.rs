//! Looping type-then-delete text effect.

use std::iter;

use tracing::debug;

use crate::scheduler::Timer;

/// Caret blink half-period in milliseconds.
const CARET_BLINK_MS: u64 = 500;

/// Delays driving the typewriter, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTiming {
    /// Delay before each typed character.
    pub type_delay_ms: u64,
    /// Delay before each deleted character.
    pub delete_delay_ms: u64,
    /// Dwell on the fully typed text before deleting starts.
    pub pause_ms: u64,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            type_delay_ms: 150,
            delete_delay_ms: 100,
            pause_ms: 2000,
        }
    }
}

/// Typewriter phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Typing,
    Pausing,
    Deleting,
}

/// What a single [`TypewriterLoop::update`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// One character was appended.
    Typed,
    /// The dwell ended; deleting starts with the next step.
    Reversed,
    /// One character was removed.
    Deleted,
}

/// Repeating type/pause/delete animation of a fixed string.
///
/// The shown text is always a prefix of the target and changes by exactly
/// one character per step. An empty target never schedules anything.
#[derive(Debug, Clone)]
pub struct TypewriterLoop {
    target: String,
    /// Byte offset of every char boundary, `0` and `target.len()` included.
    boundaries: Vec<usize>,
    /// Number of characters currently shown.
    shown: usize,
    phase: Phase,
    cycle_count: u64,
    timing: TypewriterTiming,
    timer: Timer,
    attached: bool,
}

impl TypewriterLoop {
    pub fn new(target: impl Into<String>, timing: TypewriterTiming) -> Self {
        let target = target.into();
        let boundaries = target
            .char_indices()
            .map(|(i, _)| i)
            .chain(iter::once(target.len()))
            .collect();

        Self {
            target,
            boundaries,
            shown: 0,
            phase: Phase::Typing,
            cycle_count: 0,
            timing,
            timer: Timer::new(),
            attached: false,
        }
    }

    /// Start from an empty string in the typing phase.
    pub fn attach(&mut self, now_ms: u64) {
        self.shown = 0;
        self.phase = Phase::Typing;
        self.cycle_count = 0;
        self.attached = true;
        self.timer.cancel();
        if self.char_len() > 0 {
            self.timer.schedule(now_ms, self.timing.type_delay_ms);
        }
    }

    /// Cancel the pending step. The text stays as it was.
    pub fn detach(&mut self) {
        self.timer.cancel();
        self.attached = false;
    }

    /// Advance by at most one step if the pending step is due.
    pub fn update(&mut self, now_ms: u64) -> Option<Step> {
        let fired_at = self.timer.fire(now_ms)?;
        let full = self.char_len();

        let step = match self.phase {
            Phase::Typing => {
                self.shown = (self.shown + 1).min(full);
                if self.shown == full {
                    self.phase = Phase::Pausing;
                    self.timer.schedule(fired_at, self.timing.pause_ms);
                } else {
                    self.timer.schedule(fired_at, self.timing.type_delay_ms);
                }
                Step::Typed
            }
            Phase::Pausing => {
                self.phase = Phase::Deleting;
                self.timer.schedule(fired_at, self.timing.delete_delay_ms);
                Step::Reversed
            }
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.phase = Phase::Typing;
                    self.cycle_count += 1;
                    debug!(cycle = self.cycle_count, "typewriter cycle complete");
                    self.timer.schedule(fired_at, self.timing.type_delay_ms);
                } else {
                    self.timer.schedule(fired_at, self.timing.delete_delay_ms);
                }
                Step::Deleted
            }
        };

        Some(step)
    }

    /// Currently shown prefix of the target.
    pub fn text(&self) -> &str {
        &self.target[..self.boundaries[self.shown]]
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of completed type/delete cycles since attach.
    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Deadline of the next step, if one is scheduled.
    pub fn next_step_at(&self) -> Option<u64> {
        self.timer.deadline()
    }

    /// Whether the blinking caret is lit at `elapsed_ms`.
    pub fn caret_visible(elapsed_ms: u64) -> bool {
        (elapsed_ms / CARET_BLINK_MS) % 2 == 0
    }

    fn char_len(&self) -> usize {
        self.boundaries.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn attached(target: &str) -> TypewriterLoop {
        let mut typewriter = TypewriterLoop::new(target, TypewriterTiming::default());
        typewriter.attach(0);
        typewriter
    }

    /// Drive the loop until `until_ms`, recording every change with its time.
    fn run(typewriter: &mut TypewriterLoop, until_ms: u64) -> Vec<(u64, String, Phase)> {
        let mut log = Vec::new();
        while let Some(at) = typewriter.next_step_at() {
            if at > until_ms {
                break;
            }
            typewriter.update(at);
            log.push((at, typewriter.text().to_string(), typewriter.phase()));
        }
        log
    }

    #[test]
    fn test_two_char_scenario() {
        let mut typewriter = attached("AB");
        let log = run(&mut typewriter, 2650);

        let expected = vec![
            (150, "A".to_string(), Phase::Typing),
            (300, "AB".to_string(), Phase::Pausing),
            (2300, "AB".to_string(), Phase::Deleting),
            (2400, "A".to_string(), Phase::Deleting),
            (2500, "".to_string(), Phase::Typing),
            (2650, "A".to_string(), Phase::Typing),
        ];
        assert_eq!(log, expected);
        assert_eq!(typewriter.cycle_count(), 1);
    }

    #[test]
    fn test_nothing_happens_before_deadline() {
        let mut typewriter = attached("AB");
        assert_eq!(typewriter.update(149), None);
        assert_eq!(typewriter.text(), "");
        assert_eq!(typewriter.update(150), Some(Step::Typed));
        assert_eq!(typewriter.text(), "A");
    }

    #[test]
    fn test_one_step_per_update_even_when_late() {
        let mut typewriter = attached("hello");
        assert_eq!(typewriter.update(10_000), Some(Step::Typed));
        assert_eq!(typewriter.text(), "h");
        // The next deadline follows the fired one, so the loop catches up.
        assert_eq!(typewriter.next_step_at(), Some(300));
    }

    #[test]
    fn test_length_invariants_over_many_cycles() {
        let target = "% SDF >..";
        let full = target.chars().count();
        let mut typewriter = attached(target);
        let mut previous_len = 0usize;
        let mut previous_cycles = 0u64;

        for _ in 0..200 {
            let at = typewriter.next_step_at().unwrap();
            let step = typewriter.update(at).unwrap();
            let len = typewriter.text().chars().count();

            assert!(len <= full);
            assert!(target.starts_with(typewriter.text()));
            match step {
                Step::Typed => assert_eq!(len, previous_len + 1),
                Step::Deleted => assert_eq!(len + 1, previous_len),
                Step::Reversed => assert_eq!(len, full),
            }
            if len == full {
                assert_ne!(typewriter.phase(), Phase::Typing);
            }
            if typewriter.cycle_count() != previous_cycles {
                assert_eq!(typewriter.cycle_count(), previous_cycles + 1);
                assert_eq!((previous_len, len), (1, 0));
                previous_cycles = typewriter.cycle_count();
            }
            previous_len = len;
        }
        assert!(typewriter.cycle_count() > 5);
    }

    #[test]
    fn test_multibyte_target() {
        let mut typewriter = attached("é✦");
        let at = typewriter.next_step_at().unwrap();
        typewriter.update(at);
        assert_eq!(typewriter.text(), "é");
        let at = typewriter.next_step_at().unwrap();
        typewriter.update(at);
        assert_eq!(typewriter.text(), "é✦");
        assert_eq!(typewriter.phase(), Phase::Pausing);
    }

    #[test]
    fn test_empty_target_stays_idle() {
        let mut typewriter = attached("");
        assert_eq!(typewriter.next_step_at(), None);
        assert_eq!(typewriter.update(u64::MAX), None);
        assert_eq!(typewriter.text(), "");
        assert_eq!(typewriter.cycle_count(), 0);
    }

    #[test]
    fn test_detach_stops_the_loop() {
        let mut typewriter = attached("AB");
        typewriter.update(150);
        typewriter.detach();

        assert!(!typewriter.is_attached());
        assert_eq!(typewriter.update(10_000), None);
        assert_eq!(typewriter.text(), "A");
    }

    #[test]
    fn test_reattach_restarts_from_empty() {
        let mut typewriter = attached("AB");
        typewriter.update(150);
        typewriter.update(300);
        typewriter.attach(1000);

        assert_eq!(typewriter.text(), "");
        assert_eq!(typewriter.phase(), Phase::Typing);
        assert_eq!(typewriter.next_step_at(), Some(1150));
    }

    #[test]
    fn test_caret_blink() {
        assert!(TypewriterLoop::caret_visible(0));
        assert!(!TypewriterLoop::caret_visible(500));
        assert!(TypewriterLoop::caret_visible(1000));
    }
}
