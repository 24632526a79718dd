//! Navigation bar state.
//!
//! Two independent flags: `scrolled` drives the solid bar style and
//! `menu_open` drives the mobile drawer. Neither action touches the other flag.

use tracing::debug;

/// Element ids of the page sections the menu links scroll to.
pub mod anchor {
    pub const HOME: &str = "home";
    pub const COLLECTION: &str = "collection";
    pub const ABOUT: &str = "about";
    pub const CONTACT: &str = "contact";

    /// In page order.
    pub const ALL: [&str; 4] = [HOME, COLLECTION, ABOUT, CONTACT];
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavAction {
    /// Window scrolled to this vertical offset
    Scrolled(f64),
    ToggleMenu,
    /// A drawer link was followed
    CloseMenu,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavState {
    pub scrolled: bool,
    pub menu_open: bool,
    threshold: f64,
}

impl NavState {
    /// Top-of-page state with the drawer closed.
    pub fn new(threshold: f64) -> Self {
        Self {
            scrolled: false,
            menu_open: false,
            threshold,
        }
    }

    pub fn apply(self, action: NavAction) -> Self {
        let next = match action {
            NavAction::Scrolled(offset) => Self {
                scrolled: offset > self.threshold,
                ..self
            },
            NavAction::ToggleMenu => Self {
                menu_open: !self.menu_open,
                ..self
            },
            NavAction::CloseMenu => Self {
                menu_open: false,
                ..self
            },
        };
        if next.menu_open != self.menu_open {
            debug!(open = next.menu_open, "mobile menu toggled");
        }
        next
    }

    pub fn bar_class(self) -> &'static str {
        if self.scrolled { "nav nav-solid" } else { "nav" }
    }

    /// Label for the mobile menu button.
    pub fn toggle_label(self) -> &'static str {
        if self.menu_open { "Close menu" } else { "Open menu" }
    }

    pub fn toggle_glyph(self) -> &'static str {
        if self.menu_open { "✕" } else { "☰" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolling_past_threshold_sets_scrolled() {
        let state = NavState::new(50.0);
        assert!(!state.apply(NavAction::Scrolled(50.0)).scrolled);
        assert!(state.apply(NavAction::Scrolled(50.5)).scrolled);
        let back = state
            .apply(NavAction::Scrolled(300.0))
            .apply(NavAction::Scrolled(0.0));
        assert!(!back.scrolled);
    }

    #[test]
    fn flags_are_independent() {
        let state = NavState::new(50.0)
            .apply(NavAction::Scrolled(200.0))
            .apply(NavAction::ToggleMenu);
        assert!(state.scrolled && state.menu_open);

        let state = state.apply(NavAction::Scrolled(0.0));
        assert!(state.menu_open);

        let state = state.apply(NavAction::ToggleMenu);
        assert!(!state.menu_open);
        assert!(!state.scrolled);
    }

    #[test]
    fn close_menu_is_idempotent() {
        let state = NavState::new(50.0).apply(NavAction::CloseMenu);
        assert_eq!(state, NavState::new(50.0));
        let opened = state.apply(NavAction::ToggleMenu);
        assert!(!opened.apply(NavAction::CloseMenu).menu_open);
    }

    #[test]
    fn classes_follow_flags() {
        let state = NavState::new(10.0);
        assert_eq!(state.bar_class(), "nav");
        assert_eq!(state.apply(NavAction::Scrolled(11.0)).bar_class(), "nav nav-solid");
        assert_eq!(state.apply(NavAction::ToggleMenu).toggle_label(), "Close menu");
    }
}
