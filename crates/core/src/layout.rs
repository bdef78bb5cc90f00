use std::collections::HashMap;

use folio_protocol::{Rect, SectionId};

/// An element the core may ask the host to locate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementRef {
    Section(SectionId),
    /// Timeline card by entry index.
    TimelineCard(usize),
}

/// Read-only view of the host's document layout.
///
/// Bounds are in document coordinates (origin at the top of the page). An
/// element that is not mounted, or whose layout is not ready yet, has no
/// bounds.
pub trait DocumentLayout {
    fn bounds(&self, element: ElementRef) -> Option<Rect>;

    /// Top offset of a section from the document origin.
    fn section_top(&self, id: SectionId) -> Option<f64> {
        self.bounds(ElementRef::Section(id)).map(|r| r.y)
    }
}

/// A layout backed by a fixed table of bounds.
///
/// Useful for hosts that compute layout up front and for driving the state
/// machines without a renderer.
#[derive(Debug, Clone, Default)]
pub struct StaticLayout {
    bounds: HashMap<ElementRef, Rect>,
}

impl StaticLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from section tops only; each section gets zero width and height.
    pub fn from_section_tops(tops: &[(SectionId, f64)]) -> Self {
        let mut layout = Self::new();
        for &(id, top) in tops {
            layout.insert(ElementRef::Section(id), Rect::new(0.0, top, 0.0, 0.0));
        }
        layout
    }

    pub fn insert(&mut self, element: ElementRef, rect: Rect) {
        self.bounds.insert(element, rect);
    }

    pub fn remove(&mut self, element: ElementRef) -> Option<Rect> {
        self.bounds.remove(&element)
    }
}

impl DocumentLayout for StaticLayout {
    fn bounds(&self, element: ElementRef) -> Option<Rect> {
        self.bounds.get(&element).copied()
    }
}
