use folio_protocol::{Rect, SectionId};

use crate::layout::DocumentLayout;

/// Computes scroll targets for navigation.
#[derive(Debug, Clone, Copy)]
pub struct ScrollNavigator {
    header_clearance: f64,
}

impl ScrollNavigator {
    pub fn new(header_clearance: f64) -> Self {
        Self { header_clearance }
    }

    /// Scroll offset that puts the section's top just below the fixed header,
    /// or `None` when the section is not mounted.
    pub fn target_for<L: DocumentLayout + ?Sized>(&self, id: SectionId, layout: &L) -> Option<f64> {
        let top = layout.section_top(id)?;
        Some((top - self.header_clearance).max(0.0))
    }
}

/// Scroll offset that centres `bounds` vertically in a viewport of
/// `viewport_height`.
pub fn scroll_into_view_top(bounds: &Rect, viewport_height: f64) -> f64 {
    (bounds.y + bounds.h / 2.0 - viewport_height / 2.0).max(0.0)
}

/// An eased scroll from one offset to another, for hosts that animate
/// scrolling themselves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    from: f64,
    to: f64,
    start_ms: f64,
    duration_ms: f64,
}

impl ScrollAnimation {
    pub fn new(from: f64, to: f64, start_ms: f64, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms,
        }
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    /// Offset at `now_ms` (ease-out cubic).
    pub fn offset_at(&self, now_ms: f64) -> f64 {
        let t = self.progress(now_ms);
        let eased = 1.0 - (1.0 - t).powi(3);
        self.from + (self.to - self.from) * eased
    }

    pub fn is_finished(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::StaticLayout;

    #[test]
    fn target_clears_header() {
        let layout = StaticLayout::from_section_tops(&[(SectionId::Projects, 3000.0)]);
        let nav = ScrollNavigator::new(80.0);
        assert_eq!(nav.target_for(SectionId::Projects, &layout), Some(2920.0));
    }

    #[test]
    fn target_is_clamped_at_top() {
        let layout = StaticLayout::from_section_tops(&[(SectionId::Hero, 0.0)]);
        let nav = ScrollNavigator::new(80.0);
        assert_eq!(nav.target_for(SectionId::Hero, &layout), Some(0.0));
    }

    #[test]
    fn unmounted_section_has_no_target() {
        let nav = ScrollNavigator::new(80.0);
        assert_eq!(nav.target_for(SectionId::Contact, &StaticLayout::new()), None);
    }

    #[test]
    fn centres_element() {
        let card = Rect::new(0.0, 2000.0, 400.0, 200.0);
        assert_eq!(scroll_into_view_top(&card, 800.0), 1700.0);
    }

    #[test]
    fn animation_eases_to_target() {
        let anim = ScrollAnimation::new(0.0, 1000.0, 0.0, 600.0);
        assert_eq!(anim.offset_at(0.0), 0.0);
        let mid = anim.offset_at(300.0);
        assert!(mid > 500.0 && mid < 1000.0);
        assert_eq!(anim.offset_at(600.0), 1000.0);
        assert!(anim.is_finished(601.0));
    }
}
