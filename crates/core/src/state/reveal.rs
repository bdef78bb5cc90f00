use std::collections::BTreeSet;

use folio_protocol::{Rect, SectionId, Viewport};

/// Records which sections have been seen at least once.
///
/// The set only grows: once a section is revealed it stays revealed for the
/// rest of the page view, whatever the scroll position does afterwards.
#[derive(Debug, Clone)]
pub struct RevealTracker {
    threshold: f64,
    observed: Vec<SectionId>,
    revealed: BTreeSet<SectionId>,
}

impl RevealTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            observed: Vec::new(),
            revealed: BTreeSet::new(),
        }
    }

    /// Start watching `ids`. Ids already watched are not duplicated.
    pub fn observe(&mut self, ids: &[SectionId]) {
        for &id in ids {
            if !self.observed.contains(&id) {
                self.observed.push(id);
            }
        }
    }

    /// Stop watching everything. Sections revealed so far stay revealed.
    pub fn disconnect(&mut self) {
        self.observed.clear();
    }

    pub fn observed(&self) -> &[SectionId] {
        &self.observed
    }

    /// Handle an intersection sample. Returns true when `id` was revealed by
    /// this sample.
    pub fn record(&mut self, id: SectionId, ratio: f64) -> bool {
        if !self.observed.contains(&id) {
            tracing::trace!(section = %id, "intersection for unobserved section ignored");
            return false;
        }
        if ratio < self.threshold || ratio <= 0.0 {
            return false;
        }
        let added = self.revealed.insert(id);
        if added {
            tracing::debug!(section = %id, ratio, "section revealed");
        }
        added
    }

    pub fn is_revealed(&self, id: SectionId) -> bool {
        self.revealed.contains(&id)
    }

    /// Revealed sections in declared order.
    pub fn revealed(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.revealed.iter().copied()
    }
}

/// Fraction of `bounds` inside the viewport once `margin` has been shaved off
/// every side of it.
///
/// Mirrors what a browser intersection detector reports for a root margin of
/// `-margin` px. Zero-area elements report 0.
pub fn intersection_ratio(bounds: &Rect, scroll_y: f64, viewport: &Viewport, margin: f64) -> f64 {
    let area = bounds.area();
    if area <= 0.0 {
        return 0.0;
    }
    let root = viewport.at_scroll(scroll_y).inset(margin);
    bounds
        .intersection(&root)
        .map_or(0.0, |overlap| overlap.area() / area)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> RevealTracker {
        let mut t = RevealTracker::new(0.1);
        t.observe(&SectionId::ALL);
        t
    }

    #[test]
    fn starts_empty() {
        let t = tracker();
        assert!(SectionId::ALL.iter().all(|&id| !t.is_revealed(id)));
    }

    #[test]
    fn reveals_once_threshold_met() {
        let mut t = tracker();
        assert!(!t.record(SectionId::About, 0.05));
        assert!(!t.is_revealed(SectionId::About));
        assert!(t.record(SectionId::About, 0.1));
        assert!(t.is_revealed(SectionId::About));
        // Second sample is a no-op.
        assert!(!t.record(SectionId::About, 0.9));
    }

    #[test]
    fn ignores_unobserved_sections() {
        let mut t = RevealTracker::new(0.1);
        t.observe(&[SectionId::About]);
        assert!(!t.record(SectionId::Projects, 1.0));
        assert!(!t.is_revealed(SectionId::Projects));
    }

    #[test]
    fn disconnect_keeps_reveals() {
        let mut t = tracker();
        t.record(SectionId::Experience, 0.5);
        t.disconnect();
        assert!(t.is_revealed(SectionId::Experience));
        assert!(!t.record(SectionId::Projects, 1.0));
    }

    #[test]
    fn ratio_accounts_for_margin() {
        let viewport = Viewport::new(1000.0, 800.0);
        // Section starts 40px above the viewport bottom: fully inside the
        // margin band, so nothing intersects.
        let section = Rect::new(0.0, 760.0, 1000.0, 1000.0);
        assert_eq!(intersection_ratio(&section, 0.0, &viewport, 50.0), 0.0);

        // Scrolled 250px: the shrunk root spans 300..1000 vertically.
        let ratio = intersection_ratio(&section, 250.0, &viewport, 50.0);
        assert!(ratio > 0.0);
        let root_bottom = 250.0 + 800.0 - 50.0;
        let visible_h = root_bottom - 760.0;
        let expected = (900.0 * visible_h) / (1000.0 * 1000.0);
        assert!((ratio - expected).abs() < 1e-9);
    }

    #[test]
    fn zero_height_section_never_intersects() {
        let viewport = Viewport::new(1000.0, 800.0);
        let section = Rect::new(0.0, 100.0, 1000.0, 0.0);
        assert_eq!(intersection_ratio(&section, 0.0, &viewport, 50.0), 0.0);
    }
}
