//! Carousel slide deck.
//!
//! The deck is a ring: [`Cursor`] holds the active index and the slide count
//! and every transition wraps. `Cursor` is a `Copy` value with a pure reducer
//! ([`Cursor::apply`]), so the ring arithmetic is testable without a browser.
//! [`SlideDeck`] pairs a cursor with the slides it indexes.

use tracing::debug;

use crate::config::RevealTiming;
use crate::error::{Result, StorefrontError};
use crate::overlay::Overlay;
use crate::types::Slide;

/// User navigation on the carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeckAction {
    Next,
    Previous,
    /// Jump to a slide by index; ignored when out of range
    Goto(usize),
}

/// Active slide index within a ring of `count` slides.
///
/// Invariant: `count >= 1` and `index < count`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cursor {
    index: usize,
    count: usize,
}

impl Cursor {
    /// Cursor at slide 0, or `None` for an empty ring.
    pub fn new(count: usize) -> Option<Self> {
        (count > 0).then_some(Self { index: 0, count })
    }

    pub fn index(self) -> usize {
        self.index
    }

    pub fn is_active(self, index: usize) -> bool {
        self.index == index
    }

    pub fn next(self) -> Self {
        Self {
            index: (self.index + 1) % self.count,
            ..self
        }
    }

    pub fn previous(self) -> Self {
        Self {
            index: (self.index + self.count - 1) % self.count,
            ..self
        }
    }

    /// Move to `index`, or stay put when it is outside `0..count`.
    pub fn goto(self, index: usize) -> Self {
        if index < self.count {
            Self { index, ..self }
        } else {
            self
        }
    }

    pub fn apply(self, action: DeckAction) -> Self {
        match action {
            DeckAction::Next => self.next(),
            DeckAction::Previous => self.previous(),
            DeckAction::Goto(index) => self.goto(index),
        }
    }
}

/// Ordered slides plus the cursor over them.
#[derive(Clone, Debug, PartialEq)]
pub struct SlideDeck {
    slides: Vec<Slide>,
    cursor: Cursor,
}

impl SlideDeck {
    /// Build a deck positioned on the first slide.
    pub fn new(slides: Vec<Slide>) -> Result<Self> {
        let cursor = Cursor::new(slides.len()).ok_or(StorefrontError::EmptyDeck)?;
        Ok(Self { slides, cursor })
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn current(&self) -> &Slide {
        // cursor.index < slides.len() by construction
        &self.slides[self.cursor.index()]
    }

    /// Apply `action` and report whether the active slide changed.
    ///
    /// `Goto` on the active index, `Goto` out of range and any step on a
    /// one-slide deck leave the cursor where it was and return `false`.
    pub fn apply(&mut self, action: DeckAction) -> bool {
        let from = self.cursor.index();
        self.cursor = self.cursor.apply(action);
        let to = self.cursor.index();
        if from == to {
            debug!(?action, index = to, "carousel cursor unchanged");
            false
        } else {
            debug!(?action, from, to, "carousel cursor moved");
            true
        }
    }

    pub fn next(&mut self) -> &Slide {
        self.apply(DeckAction::Next);
        self.current()
    }

    pub fn previous(&mut self) -> &Slide {
        self.apply(DeckAction::Previous);
        self.current()
    }

    pub fn goto(&mut self, index: usize) -> &Slide {
        self.apply(DeckAction::Goto(index));
        self.current()
    }

    /// Hotspot markers for the active slide.
    pub fn overlay(&self, timing: RevealTiming) -> Overlay {
        Overlay::for_slide(self.current(), self.cursor.index(), timing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Hotspot;
    use proptest::prelude::*;

    fn slides(count: usize) -> Vec<Slide> {
        (0..count)
            .map(|i| Slide {
                id: i as u32 + 1,
                title: format!("Look {}", i + 1),
                hotspots: (0..i)
                    .map(|h| Hotspot {
                        id: format!("s{i}-h{h}"),
                        label: format!("Piece {h}"),
                        ..Default::default()
                    })
                    .collect(),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn empty_ring_has_no_cursor() {
        assert_eq!(Cursor::new(0), None);
        assert!(matches!(
            SlideDeck::new(Vec::new()),
            Err(StorefrontError::EmptyDeck)
        ));
    }

    #[test]
    fn starts_on_first_slide() {
        let deck = SlideDeck::new(slides(3)).unwrap();
        assert_eq!(deck.cursor().index(), 0);
        assert_eq!(deck.current().id, 1);
    }

    #[test]
    fn next_three_times_on_three_slides_visits_1_2_0() {
        let mut deck = SlideDeck::new(slides(3)).unwrap();
        let visited: Vec<usize> = (0..3)
            .map(|_| {
                deck.next();
                deck.cursor().index()
            })
            .collect();
        assert_eq!(visited, vec![1, 2, 0]);
    }

    #[test]
    fn previous_wraps_from_first_to_last() {
        let mut deck = SlideDeck::new(slides(3)).unwrap();
        assert_eq!(deck.previous().id, 3);
    }

    #[test]
    fn goto_out_of_range_is_ignored() {
        let mut deck = SlideDeck::new(slides(3)).unwrap();
        deck.goto(2);
        deck.goto(3);
        deck.goto(usize::MAX);
        assert_eq!(deck.cursor().index(), 2);
    }

    #[test]
    fn single_slide_ring_stays_put() {
        let cursor = Cursor::new(1).unwrap();
        assert_eq!(cursor.next(), cursor);
        assert_eq!(cursor.previous(), cursor);
    }

    #[test]
    fn overlay_follows_cursor() {
        let mut deck = SlideDeck::new(slides(3)).unwrap();
        let timing = RevealTiming::default();
        for action in [
            DeckAction::Next,
            DeckAction::Next,
            DeckAction::Previous,
            DeckAction::Goto(0),
            DeckAction::Goto(2),
        ] {
            deck.apply(action);
            let expected: Vec<&str> = deck
                .current()
                .hotspots
                .iter()
                .map(|h| h.id.as_str())
                .collect();
            assert_eq!(deck.overlay(timing).hotspot_ids(), expected);
        }
    }

    #[test]
    fn apply_reports_whether_the_cursor_moved() {
        let mut deck = SlideDeck::new(slides(3)).unwrap();
        assert!(deck.apply(DeckAction::Next));
        assert!(!deck.apply(DeckAction::Goto(1)));
        assert!(!deck.apply(DeckAction::Goto(3)));
        assert!(deck.apply(DeckAction::Goto(0)));
        assert_eq!(deck.cursor().index(), 0);
    }

    #[test]
    fn steps_on_a_single_slide_deck_report_unchanged() {
        let mut deck = SlideDeck::new(slides(1)).unwrap();
        assert!(!deck.apply(DeckAction::Next));
        assert!(!deck.apply(DeckAction::Previous));
        assert!(!deck.apply(DeckAction::Goto(0)));
        assert_eq!(deck.cursor().index(), 0);
    }

    proptest! {
        #[test]
        fn next_count_times_closes_the_ring(count in 1usize..64, start in 0usize..64) {
            let cursor = Cursor::new(count).unwrap().goto(start % count);
            let mut moved = cursor;
            for _ in 0..count {
                moved = moved.next();
            }
            prop_assert_eq!(moved, cursor);
        }

        #[test]
        fn previous_undoes_next(count in 1usize..64, start in 0usize..64) {
            let cursor = Cursor::new(count).unwrap().goto(start % count);
            prop_assert_eq!(cursor.next().previous(), cursor);
            prop_assert_eq!(cursor.previous().next(), cursor);
        }

        #[test]
        fn goto_outside_ring_is_noop(
            count in 1usize..64,
            start in 0usize..64,
            beyond in 0usize..1000,
        ) {
            let cursor = Cursor::new(count).unwrap().goto(start % count);
            prop_assert_eq!(cursor.goto(count + beyond), cursor);
        }

        #[test]
        fn goto_inside_ring_lands_exactly(count in 1usize..64, target in 0usize..64) {
            let target = target % count;
            prop_assert_eq!(Cursor::new(count).unwrap().goto(target).index(), target);
        }
    }
}
