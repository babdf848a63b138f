//! # Navigation
//!
//! Cursor over [`Step`]. Moving is pure pointer arithmetic: nothing about
//! the form data is touched, re-fetched or re-validated.
//!
//! ```text
//! state          advance        retreat        controls
//! details        -> datetime    no-op          [      Next ]
//! datetime       -> location    -> details     [Back  Next ]
//! ...
//! additional     no-op          -> particip.   [Back Submit]
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::step::Step;

/// What the forward button does on the current step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForwardAction {
    Next,
    Submit,
}

impl ForwardAction {
    pub fn label(&self) -> &'static str {
        match self {
            ForwardAction::Next => "Next",
            ForwardAction::Submit => "Create Event",
        }
    }
}

/// Which navigation controls a front end should render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavControls {
    /// Back is hidden on the first step
    pub show_back: bool,
    /// Next everywhere except the last step, which offers Submit
    pub forward: ForwardAction,
}

/// Tracks the active step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Navigator {
    active: Step,
}

impl Navigator {
    pub fn new() -> Self {
        Navigator { active: Step::FIRST }
    }

    pub fn active(&self) -> Step {
        self.active
    }

    /// Move forward one step. Returns `false` (and stays put) on the last step.
    pub fn advance(&mut self) -> bool {
        match self.active.next() {
            Some(next) => {
                debug!(from = self.active.code(), to = next.code(), "advance");
                self.active = next;
                true
            }
            None => false,
        }
    }

    /// Move back one step. Returns `false` (and stays put) on the first step.
    pub fn retreat(&mut self) -> bool {
        match self.active.previous() {
            Some(previous) => {
                debug!(from = self.active.code(), to = previous.code(), "retreat");
                self.active = previous;
                true
            }
            None => false,
        }
    }

    pub fn is_first_step(&self) -> bool {
        self.active.index() == 0
    }

    pub fn is_last_step(&self) -> bool {
        self.active.index() == Step::ALL.len() - 1
    }

    pub fn controls(&self) -> NavControls {
        NavControls {
            show_back: !self.is_first_step(),
            forward: if self.is_last_step() {
                ForwardAction::Submit
            } else {
                ForwardAction::Next
            },
        }
    }

    /// Position through the wizard, 0 on the first step and 100 on the last
    pub fn progress_percent(&self) -> u8 {
        let last = (Step::ALL.len() - 1) as f32;
        ((self.active.index() as f32 / last) * 100.0).round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let nav = Navigator::new();
        assert_eq!(nav.active(), Step::Details);
        assert!(nav.is_first_step());
        assert!(!nav.is_last_step());
        assert_eq!(nav, Navigator::default());
    }

    #[test]
    fn test_advance_reaches_terminal_then_stops() {
        let mut nav = Navigator::new();
        for _ in 0..Step::ALL.len() - 1 {
            assert!(nav.advance());
        }
        assert_eq!(nav.active(), Step::Additional);
        assert!(nav.is_last_step());

        let before = nav;
        assert!(!nav.advance());
        assert_eq!(nav, before);
    }

    #[test]
    fn test_retreat_from_initial_is_noop() {
        let mut nav = Navigator::new();
        assert!(!nav.retreat());
        assert_eq!(nav.active(), Step::Details);
    }

    #[test]
    fn test_retreat_walks_back() {
        let mut nav = Navigator::new();
        nav.advance();
        nav.advance();
        assert_eq!(nav.active(), Step::Location);
        assert!(nav.retreat());
        assert_eq!(nav.active(), Step::DateTime);
    }

    #[test]
    fn test_controls() {
        let mut nav = Navigator::new();
        assert_eq!(
            nav.controls(),
            NavControls { show_back: false, forward: ForwardAction::Next }
        );

        nav.advance();
        assert_eq!(
            nav.controls(),
            NavControls { show_back: true, forward: ForwardAction::Next }
        );

        while nav.advance() {}
        assert_eq!(
            nav.controls(),
            NavControls { show_back: true, forward: ForwardAction::Submit }
        );
    }

    #[test]
    fn test_progress_percent() {
        let mut nav = Navigator::new();
        assert_eq!(nav.progress_percent(), 0);
        nav.advance();
        assert_eq!(nav.progress_percent(), 25);
        while nav.advance() {}
        assert_eq!(nav.progress_percent(), 100);
    }
}
