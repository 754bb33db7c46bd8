//! Pointer hover state shared by the chart cards

/// Whether the pointer is over a card. The action overlay is shown exactly
/// while this is set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CardHover {
    hovered: bool,
}

impl CardHover {
    pub fn enter(&mut self) {
        self.hovered = true;
    }

    pub fn leave(&mut self) {
        self.hovered = false;
    }

    pub fn is_hovered(self) -> bool {
        self.hovered
    }

    pub fn shows_overlay(self) -> bool {
        self.hovered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_without_overlay() {
        let hover = CardHover::default();
        assert!(!hover.is_hovered());
        assert!(!hover.shows_overlay());
    }

    #[test]
    fn enter_and_leave_toggle_overlay() {
        let mut hover = CardHover::default();

        hover.enter();
        assert!(hover.is_hovered());
        assert!(hover.shows_overlay());

        hover.leave();
        assert!(!hover.is_hovered());
        assert!(!hover.shows_overlay());
    }

    #[test]
    fn repeated_events_are_idempotent() {
        let mut hover = CardHover::default();
        hover.enter();
        hover.enter();
        assert!(hover.shows_overlay());
        hover.leave();
        hover.leave();
        assert!(!hover.shows_overlay());
    }

    #[test]
    fn instances_are_independent() {
        let mut first = CardHover::default();
        let second = CardHover::default();
        first.enter();
        assert!(first.is_hovered());
        assert!(!second.is_hovered());
    }
}
