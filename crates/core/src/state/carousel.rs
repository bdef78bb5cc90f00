use std::ops::Range;

use folio_protocol::CarouselSnapshot;

/// A window of `window` consecutive projects over a fixed list of `len`.
///
/// The cursor clamps at both ends instead of wrapping:
/// `0 <= start <= len.saturating_sub(window)`.
#[derive(Debug, Clone)]
pub struct ProjectCarousel {
    len: usize,
    window: usize,
    start: usize,
}

impl ProjectCarousel {
    pub fn new(len: usize, window: usize) -> Self {
        Self {
            len,
            window: window.max(1),
            start: 0,
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn can_go_next(&self) -> bool {
        self.start + self.window < self.len
    }

    pub fn can_go_prev(&self) -> bool {
        self.start > 0
    }

    /// Advance one position. Returns false at the last window.
    pub fn next(&mut self) -> bool {
        if !self.can_go_next() {
            tracing::trace!(start = self.start, "carousel already at last window");
            return false;
        }
        self.start += 1;
        tracing::debug!(start = self.start, "carousel advanced");
        true
    }

    /// Step back one position. Returns false at the first window.
    pub fn prev(&mut self) -> bool {
        if !self.can_go_prev() {
            tracing::trace!("carousel already at first window");
            return false;
        }
        self.start -= 1;
        tracing::debug!(start = self.start, "carousel moved back");
        true
    }

    /// Indices of the visible projects.
    pub fn visible_range(&self) -> Range<usize> {
        self.start..(self.start + self.window).min(self.len)
    }

    /// The visible slice of `items`. Never reorders or copies the list.
    pub fn visible_window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.visible_range();
        let end = range.end.min(items.len());
        items.get(range.start..end).unwrap_or(&[])
    }

    /// Range label such as `"2-4"`, one-based and inclusive.
    pub fn label(&self) -> String {
        if self.len == 0 {
            return String::new();
        }
        let range = self.visible_range();
        format!("{}-{}", range.start + 1, range.end)
    }

    /// Number of distinct window positions.
    pub fn position_count(&self) -> usize {
        self.len.saturating_sub(self.window) + 1
    }

    /// One flag per window position, set at the current one.
    pub fn markers(&self) -> Vec<bool> {
        (0..self.position_count()).map(|i| i == self.start).collect()
    }

    pub fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot {
            start: self.start,
            visible: self.visible_range().collect(),
            label: self.label(),
            markers: self.markers(),
            can_prev: self.can_go_prev(),
            can_next: self.can_go_next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prev_at_start_is_noop() {
        let mut c = ProjectCarousel::new(6, 3);
        assert!(!c.prev());
        assert_eq!(c.start(), 0);
        assert!(!c.can_go_prev());
    }

    #[test]
    fn next_saturates_at_last_window() {
        let mut c = ProjectCarousel::new(6, 3);
        for _ in 0..10 {
            c.next();
        }
        assert_eq!(c.start(), 3);
        assert!(!c.can_go_next());
        assert!(c.can_go_prev());
    }

    #[test]
    fn can_go_next_false_only_at_end() {
        let mut c = ProjectCarousel::new(6, 3);
        for expected_start in 0..3 {
            assert_eq!(c.start(), expected_start);
            assert!(c.can_go_next());
            c.next();
        }
        assert!(!c.can_go_next());
    }

    #[test]
    fn labels_follow_start() {
        let mut c = ProjectCarousel::new(6, 3);
        let mut labels = vec![c.label()];
        while c.next() {
            labels.push(c.label());
        }
        assert_eq!(labels, ["1-3", "2-4", "3-5", "4-6"]);
    }

    #[test]
    fn markers_flag_current_position() {
        let mut c = ProjectCarousel::new(6, 3);
        assert_eq!(c.markers(), [true, false, false, false]);
        c.next();
        c.next();
        assert_eq!(c.markers(), [false, false, true, false]);
    }

    #[test]
    fn window_is_a_slice_of_the_list() {
        let items = ["a", "b", "c", "d", "e", "f"];
        let mut c = ProjectCarousel::new(items.len(), 3);
        c.next();
        assert_eq!(c.visible_window(&items), ["b", "c", "d"]);
    }

    #[test]
    fn short_list_has_single_position() {
        let mut c = ProjectCarousel::new(2, 3);
        assert!(!c.next());
        assert_eq!(c.label(), "1-2");
        assert_eq!(c.markers(), [true]);
        assert_eq!(c.visible_range(), 0..2);
    }

    #[test]
    fn empty_list() {
        let c = ProjectCarousel::new(0, 3);
        assert_eq!(c.label(), "");
        assert_eq!(c.markers(), [true]);
        assert!(c.visible_window::<u8>(&[]).is_empty());
    }
}
