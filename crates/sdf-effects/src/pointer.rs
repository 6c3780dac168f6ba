//! Pointer follower: cursor/trail markers and interactive hover tracking.

use ratatui::layout::{Position, Rect};
use sdf_core::contains;
use tracing::trace;

/// Hover transition reported by [`PointerFollower`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverChange<K> {
    /// The pointer entered an interactive element from a non-interactive spot.
    Entered(K),
    /// The pointer left the interactive element for a non-interactive spot.
    Left(K),
    /// The pointer went straight from one interactive element to another.
    Moved { from: K, to: K },
}

#[derive(Debug, Clone)]
struct Region<K> {
    key: K,
    area: Option<Rect>,
}

/// Tracks the pointer and which registered interactive element it is over.
///
/// Interactive elements opt in with [`register`](Self::register) at any
/// time; the page reports their on-screen area with
/// [`set_area`](Self::set_area) as it lays them out. Later registrations are
/// hit-tested first.
#[derive(Debug, Clone)]
pub struct PointerFollower<K> {
    attached: bool,
    position: Option<Position>,
    hovered: Option<K>,
    regions: Vec<Region<K>>,
}

impl<K> Default for PointerFollower<K> {
    fn default() -> Self {
        Self {
            attached: false,
            position: None,
            hovered: None,
            regions: Vec::new(),
        }
    }
}

impl<K: Copy + Eq> PointerFollower<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self) {
        self.attached = true;
    }

    /// Release every registration and forget the pointer.
    pub fn detach(&mut self) {
        self.attached = false;
        self.position = None;
        self.hovered = None;
        self.regions.clear();
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Opt an element into hover tracking. Registering twice is a no-op.
    pub fn register(&mut self, key: K) {
        if !self.is_registered(key) {
            self.regions.push(Region { key, area: None });
        }
    }

    /// Remove an element. Hovering it ends immediately.
    pub fn unregister(&mut self, key: K) {
        self.regions.retain(|region| region.key != key);
        if self.hovered == Some(key) {
            self.hovered = None;
        }
    }

    pub fn is_registered(&self, key: K) -> bool {
        self.regions.iter().any(|region| region.key == key)
    }

    /// Update where a registered element is on screen; `None` hides it.
    ///
    /// Unknown keys are ignored.
    pub fn set_area(&mut self, key: K, area: Option<Rect>) {
        if let Some(region) = self.regions.iter_mut().find(|region| region.key == key) {
            region.area = area;
        }
    }

    /// Record a pointer move and re-evaluate hover.
    pub fn on_pointer_move(&mut self, pos: Position) -> Option<HoverChange<K>> {
        if !self.attached {
            return None;
        }
        self.position = Some(pos);
        self.set_hovered(self.hit(pos))
    }

    /// Re-evaluate hover at the last pointer position, e.g. after a scroll
    /// moved elements under a still pointer.
    pub fn resync(&mut self) -> Option<HoverChange<K>> {
        let pos = self.position?;
        self.on_pointer_move(pos)
    }

    /// The pointer left the window.
    pub fn on_pointer_leave(&mut self) -> Option<HoverChange<K>> {
        if !self.attached {
            return None;
        }
        self.set_hovered(None)
    }

    /// Topmost registered element under `pos`.
    pub fn hit(&self, pos: Position) -> Option<K> {
        self.regions
            .iter()
            .rev()
            .find(|region| region.area.is_some_and(|area| contains(area, pos)))
            .map(|region| region.key)
    }

    /// Position of the cursor marker.
    pub fn cursor(&self) -> Option<Position> {
        self.position
    }

    /// Position of the trail marker; always the cursor position.
    pub fn trail(&self) -> Option<Position> {
        self.position
    }

    pub fn is_hovering(&self) -> bool {
        self.hovered.is_some()
    }

    pub fn hovered(&self) -> Option<K> {
        self.hovered
    }

    fn set_hovered(&mut self, next: Option<K>) -> Option<HoverChange<K>> {
        let change = match (self.hovered, next) {
            (None, None) => None,
            (Some(from), Some(to)) if from == to => None,
            (None, Some(to)) => Some(HoverChange::Entered(to)),
            (Some(from), None) => Some(HoverChange::Left(from)),
            (Some(from), Some(to)) => Some(HoverChange::Moved { from, to }),
        };
        if change.is_some() {
            trace!(hovering = next.is_some(), "pointer hover changed");
        }
        self.hovered = next;
        change
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn follower() -> PointerFollower<&'static str> {
        let mut pointer = PointerFollower::new();
        pointer.attach();
        pointer.register("button");
        pointer.set_area("button", Some(Rect::new(10, 5, 8, 1)));
        pointer
    }

    #[test]
    fn test_enter_then_leave_button() {
        let mut pointer = follower();
        let mut observed = vec![pointer.is_hovering()];

        assert_eq!(
            pointer.on_pointer_move(Position::new(12, 5)),
            Some(HoverChange::Entered("button"))
        );
        observed.push(pointer.is_hovering());
        assert_eq!(
            pointer.on_pointer_move(Position::new(30, 5)),
            Some(HoverChange::Left("button"))
        );
        observed.push(pointer.is_hovering());

        assert_eq!(observed, vec![false, true, false]);
    }

    #[test]
    fn test_moving_within_element_reports_nothing() {
        let mut pointer = follower();
        pointer.on_pointer_move(Position::new(10, 5));
        assert_eq!(pointer.on_pointer_move(Position::new(17, 5)), None);
        assert!(pointer.is_hovering());
    }

    #[test]
    fn test_markers_track_pointer_exactly() {
        let mut pointer = follower();
        assert_eq!(pointer.cursor(), None);

        for (x, y) in [(0, 0), (79, 23), (12, 5), (3, 17)] {
            pointer.on_pointer_move(Position::new(x, y));
            assert_eq!(pointer.cursor(), Some(Position::new(x, y)));
            assert_eq!(pointer.cursor(), pointer.trail());
        }
    }

    #[test]
    fn test_late_registration_is_covered() {
        let mut pointer = follower();
        pointer.on_pointer_move(Position::new(2, 2));

        pointer.register("link");
        pointer.set_area("link", Some(Rect::new(0, 20, 4, 1)));

        assert_eq!(
            pointer.on_pointer_move(Position::new(1, 20)),
            Some(HoverChange::Entered("link"))
        );
    }

    #[test]
    fn test_adjacent_elements_report_move() {
        let mut pointer = follower();
        pointer.register("other");
        pointer.set_area("other", Some(Rect::new(18, 5, 4, 1)));

        pointer.on_pointer_move(Position::new(17, 5));
        assert_eq!(
            pointer.on_pointer_move(Position::new(18, 5)),
            Some(HoverChange::Moved {
                from: "button",
                to: "other"
            })
        );
        assert!(pointer.is_hovering());
    }

    #[test]
    fn test_later_registration_wins_overlap() {
        let mut pointer = follower();
        pointer.register("plate");
        pointer.set_area("plate", Some(Rect::new(0, 0, 40, 10)));
        assert_eq!(pointer.hit(Position::new(12, 5)), Some("plate"));
    }

    #[test]
    fn test_hidden_and_unknown_elements() {
        let mut pointer = follower();
        pointer.set_area("button", None);
        pointer.set_area("missing", Some(Rect::new(0, 0, 100, 100)));

        assert_eq!(pointer.on_pointer_move(Position::new(12, 5)), None);
        assert!(!pointer.is_hovering());
    }

    #[test]
    fn test_resync_after_scroll() {
        let mut pointer = follower();
        pointer.on_pointer_move(Position::new(12, 5));

        pointer.set_area("button", Some(Rect::new(10, 2, 8, 1)));
        assert_eq!(pointer.resync(), Some(HoverChange::Left("button")));
    }

    #[test]
    fn test_unregister_hovered_element() {
        let mut pointer = follower();
        pointer.on_pointer_move(Position::new(12, 5));
        pointer.unregister("button");

        assert!(!pointer.is_hovering());
        assert_eq!(pointer.on_pointer_move(Position::new(13, 5)), None);
    }

    #[test]
    fn test_pointer_leave_window() {
        let mut pointer = follower();
        pointer.on_pointer_move(Position::new(12, 5));
        assert_eq!(pointer.on_pointer_leave(), Some(HoverChange::Left("button")));
        assert_eq!(pointer.on_pointer_leave(), None);
    }

    #[test]
    fn test_detach_releases_everything() {
        let mut pointer = follower();
        pointer.on_pointer_move(Position::new(12, 5));
        pointer.detach();

        assert!(!pointer.is_registered("button"));
        assert_eq!(pointer.cursor(), None);
        assert_eq!(pointer.on_pointer_move(Position::new(12, 5)), None);
        assert_eq!(pointer.cursor(), None);
    }
}
