use crate::brush::Brush;
use crate::document::Document;

use super::DragEvent;

/// Apply one drag sample to the document.
///
/// A sample with zero translation starts a new stroke with the current
/// brush. Any other sample extends the most recent stroke. A continuation
/// that arrives before any stroke exists is dropped.
pub fn route_drag(event: &DragEvent, brush: &Brush, document: &mut Document) {
    if event.is_start() {
        let stroke = document.begin_stroke(event.location, brush.color().color32(), brush.width());
        log::debug!(
            "Started stroke {} at ({}, {})",
            stroke.id(),
            event.location.x,
            event.location.y
        );
    } else if !document.extend_last_stroke(event.location) {
        log::trace!("Dropped drag continuation with no stroke: {:?}", event);
    }
}
