use pagedom::{MouseButton, NodeId};

/// Turns press/release pairs into clicks: a click fires on release, and
/// only when the button comes up over the node it went down on.
#[derive(Debug, Default)]
pub struct ClickTracker {
    pressed: Option<(NodeId, MouseButton)>,
}

impl ClickTracker {
    pub fn press(&mut self, target: Option<NodeId>, button: MouseButton) {
        self.pressed = target.map(|t| (t, button));
    }

    /// Returns the node to deliver a click to, if any.
    pub fn release(&mut self, target: Option<NodeId>, button: MouseButton) -> Option<NodeId> {
        let (pressed, pressed_button) = self.pressed.take()?;
        (target == Some(pressed) && button == pressed_button).then_some(pressed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagedom::{Document, Element, Selector};

    fn two_nodes() -> (NodeId, NodeId) {
        let doc = Document::new(Element::div().child(Element::div()).child(Element::div()));
        let all = doc.query_selector_all(&Selector::parse("div").unwrap());
        (all[1], all[2])
    }

    #[test]
    fn test_release_over_pressed_node_clicks() {
        let (a, _) = two_nodes();
        let mut tracker = ClickTracker::default();
        tracker.press(Some(a), MouseButton::Left);
        assert_eq!(tracker.release(Some(a), MouseButton::Left), Some(a));
    }

    #[test]
    fn test_release_elsewhere_cancels() {
        let (a, b) = two_nodes();
        let mut tracker = ClickTracker::default();
        tracker.press(Some(a), MouseButton::Left);
        assert_eq!(tracker.release(Some(b), MouseButton::Left), None);
        assert_eq!(tracker.release(Some(a), MouseButton::Left), None);
    }

    #[test]
    fn test_release_without_press() {
        let (a, _) = two_nodes();
        let mut tracker = ClickTracker::default();
        assert_eq!(tracker.release(Some(a), MouseButton::Left), None);
    }

    #[test]
    fn test_button_must_match() {
        let (a, _) = two_nodes();
        let mut tracker = ClickTracker::default();
        tracker.press(Some(a), MouseButton::Left);
        assert_eq!(tracker.release(Some(a), MouseButton::Right), None);
    }
}
