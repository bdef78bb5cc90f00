use folio_protocol::SectionId;

use crate::layout::DocumentLayout;

/// Tracks which section the reader is currently in.
///
/// A section becomes active once the scroll position plus a fixed lookahead
/// has passed its top edge, and stays active until the next section's top
/// edge is passed the same way.
#[derive(Debug, Clone)]
pub struct ActiveSectionTracker {
    lookahead: f64,
    active: SectionId,
}

impl ActiveSectionTracker {
    pub fn new(lookahead: f64) -> Self {
        Self {
            lookahead,
            active: SectionId::Hero,
        }
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    /// Process one scroll sample. Returns the new active section when it
    /// changed.
    ///
    /// Sections are scanned from last to first and the first one whose top is
    /// at or above `scroll_y + lookahead` wins. Sections without layout are
    /// skipped. If none qualifies the previous value is kept.
    pub fn sample<L: DocumentLayout + ?Sized>(
        &mut self,
        scroll_y: f64,
        layout: &L,
    ) -> Option<SectionId> {
        let position = scroll_y + self.lookahead;
        let found = SectionId::ALL
            .iter()
            .rev()
            .copied()
            .find(|&id| layout.section_top(id).is_some_and(|top| top <= position));

        match found {
            Some(id) if id != self.active => {
                tracing::debug!(from = %self.active, to = %id, scroll_y, "active section changed");
                self.active = id;
                Some(id)
            }
            Some(_) => None,
            None => {
                tracing::trace!(scroll_y, "no section above scroll position");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::StaticLayout;

    fn layout() -> StaticLayout {
        StaticLayout::from_section_tops(&[
            (SectionId::Hero, 0.0),
            (SectionId::About, 800.0),
            (SectionId::Experience, 1800.0),
            (SectionId::Projects, 3000.0),
            (SectionId::Contact, 4200.0),
        ])
    }

    #[test]
    fn initial_section_is_hero() {
        assert_eq!(ActiveSectionTracker::new(100.0).active(), SectionId::Hero);
    }

    #[test]
    fn lookahead_activates_section_early() {
        let mut t = ActiveSectionTracker::new(100.0);
        assert_eq!(t.sample(750.0, &layout()), Some(SectionId::About));
        assert_eq!(t.active(), SectionId::About);
    }

    #[test]
    fn just_short_of_lookahead_stays() {
        let mut t = ActiveSectionTracker::new(100.0);
        assert_eq!(t.sample(699.0, &layout()), None);
        assert_eq!(t.active(), SectionId::Hero);
        // Exactly at the boundary counts.
        assert_eq!(t.sample(700.0, &layout()), Some(SectionId::About));
    }

    #[test]
    fn scrolling_back_up_reactivates_earlier_sections() {
        let mut t = ActiveSectionTracker::new(100.0);
        t.sample(5000.0, &layout());
        assert_eq!(t.active(), SectionId::Contact);
        t.sample(1750.0, &layout());
        assert_eq!(t.active(), SectionId::Experience);
        t.sample(0.0, &layout());
        assert_eq!(t.active(), SectionId::Hero);
    }

    #[test]
    fn unmounted_sections_are_skipped() {
        let mut layout = layout();
        layout.remove(crate::layout::ElementRef::Section(SectionId::Projects));
        let mut t = ActiveSectionTracker::new(100.0);
        t.sample(3100.0, &layout);
        assert_eq!(t.active(), SectionId::Experience);
    }

    #[test]
    fn keeps_previous_value_when_nothing_qualifies() {
        let layout = StaticLayout::from_section_tops(&[(SectionId::About, 800.0)]);
        let mut t = ActiveSectionTracker::new(100.0);
        t.sample(900.0, &layout);
        assert_eq!(t.active(), SectionId::About);
        assert_eq!(t.sample(0.0, &layout), None);
        assert_eq!(t.active(), SectionId::About);
    }
}
