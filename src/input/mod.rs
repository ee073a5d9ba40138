use egui::{Pos2, Vec2};

mod router;
pub use router::route_drag;

/// A single pointer sample of a drag gesture
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragEvent {
    /// Current pointer position in canvas space
    pub location: Pos2,
    /// Offset from where the gesture started; exactly zero on the first sample
    pub translation: Vec2,
}

impl DragEvent {
    pub fn new(location: Pos2, translation: Vec2) -> Self {
        Self {
            location,
            translation,
        }
    }

    /// First sample of a gesture
    pub fn start(location: Pos2) -> Self {
        Self::new(location, Vec2::ZERO)
    }

    /// True when this sample begins a new gesture
    pub fn is_start(&self) -> bool {
        self.translation == Vec2::ZERO
    }
}

/// Turns per-frame pointer state into [`DragEvent`]s.
///
/// egui reports whether the pointer is held over the canvas and where it is
/// on every frame. The tracker remembers where the press began so it can
/// report the cumulative translation, and only emits an event when the
/// pointer actually moved (or was just pressed).
#[derive(Debug, Default, Clone)]
pub struct DragTracker {
    origin: Option<Pos2>,
    last_pos: Option<Pos2>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the pointer state for one frame
    pub fn update(&mut self, pointer_down: bool, pos: Option<Pos2>) -> Option<DragEvent> {
        let pos = match (pointer_down, pos) {
            (true, Some(pos)) => pos,
            _ => {
                self.reset();
                return None;
            }
        };

        match self.origin {
            None => {
                self.origin = Some(pos);
                self.last_pos = Some(pos);
                Some(DragEvent::start(pos))
            }
            Some(origin) => {
                if self.last_pos == Some(pos) {
                    return None;
                }
                self.last_pos = Some(pos);
                Some(DragEvent::new(pos, pos - origin))
            }
        }
    }

    /// Forget the gesture in progress
    pub fn reset(&mut self) {
        self.origin = None;
        self.last_pos = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.origin.is_some()
    }

    /// Read the pointer state of a canvas response and feed it to the tracker
    pub fn update_from_response(&mut self, response: &egui::Response) -> Option<DragEvent> {
        let down = response.is_pointer_button_down_on();
        self.update(down, response.interact_pointer_pos())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_emits_zero_translation() {
        let mut tracker = DragTracker::new();
        let event = tracker.update(true, Some(Pos2::new(10.0, 10.0))).unwrap();
        assert!(event.is_start());
        assert_eq!(event.location, Pos2::new(10.0, 10.0));
        assert!(tracker.is_dragging());
    }

    #[test]
    fn test_moves_report_cumulative_translation() {
        let mut tracker = DragTracker::new();
        tracker.update(true, Some(Pos2::new(10.0, 10.0)));
        let first = tracker.update(true, Some(Pos2::new(12.0, 11.0))).unwrap();
        let second = tracker.update(true, Some(Pos2::new(15.0, 9.0))).unwrap();
        assert_eq!(first.translation, Vec2::new(2.0, 1.0));
        assert_eq!(second.translation, Vec2::new(5.0, -1.0));
    }

    #[test]
    fn test_stationary_pointer_is_silent() {
        let mut tracker = DragTracker::new();
        tracker.update(true, Some(Pos2::new(1.0, 1.0)));
        assert_eq!(tracker.update(true, Some(Pos2::new(1.0, 1.0))), None);
    }

    #[test]
    fn test_release_starts_fresh_gesture() {
        let mut tracker = DragTracker::new();
        tracker.update(true, Some(Pos2::new(1.0, 1.0)));
        tracker.update(true, Some(Pos2::new(4.0, 1.0)));
        assert_eq!(tracker.update(false, Some(Pos2::new(4.0, 1.0))), None);
        assert!(!tracker.is_dragging());

        let event = tracker.update(true, Some(Pos2::new(8.0, 8.0))).unwrap();
        assert!(event.is_start());
    }

    #[test]
    fn test_lost_pointer_position_resets() {
        let mut tracker = DragTracker::new();
        tracker.update(true, Some(Pos2::new(1.0, 1.0)));
        assert_eq!(tracker.update(true, None), None);
        assert!(!tracker.is_dragging());
    }
}
