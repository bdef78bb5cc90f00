/// Outcome of a timeline toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// The entry is now expanded. `collapsed` is the entry that was expanded
    /// before, if any.
    Expanded { index: usize, collapsed: Option<usize> },
    /// The entry was expanded and is now collapsed.
    Collapsed { index: usize },
}

/// At most one expanded timeline entry.
///
/// The state is a single optional index, so expanding an entry implicitly
/// collapses whichever one was open.
#[derive(Debug, Clone)]
pub struct TimelineExpansion {
    len: usize,
    expanded: Option<usize>,
}

impl TimelineExpansion {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            expanded: None,
        }
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    /// Toggle entry `index`. Indices past the end of the timeline are ignored.
    pub fn toggle(&mut self, index: usize) -> Option<Toggle> {
        if index >= self.len {
            tracing::trace!(index, len = self.len, "toggle for unknown timeline entry ignored");
            return None;
        }
        let outcome = if self.expanded == Some(index) {
            self.expanded = None;
            Toggle::Collapsed { index }
        } else {
            let collapsed = self.expanded.replace(index);
            Toggle::Expanded { index, collapsed }
        };
        tracing::debug!(?outcome, "timeline toggled");
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_collapsed() {
        assert_eq!(TimelineExpansion::new(2).expanded(), None);
    }

    #[test]
    fn toggle_twice_returns_to_none() {
        let mut t = TimelineExpansion::new(2);
        assert_eq!(
            t.toggle(1),
            Some(Toggle::Expanded {
                index: 1,
                collapsed: None
            })
        );
        assert_eq!(t.toggle(1), Some(Toggle::Collapsed { index: 1 }));
        assert_eq!(t.expanded(), None);
    }

    #[test]
    fn expanding_another_collapses_previous() {
        let mut t = TimelineExpansion::new(3);
        t.toggle(0);
        assert_eq!(
            t.toggle(2),
            Some(Toggle::Expanded {
                index: 2,
                collapsed: Some(0)
            })
        );
        assert!(!t.is_expanded(0));
        assert!(t.is_expanded(2));
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut t = TimelineExpansion::new(2);
        t.toggle(0);
        assert_eq!(t.toggle(2), None);
        assert_eq!(t.expanded(), Some(0));
    }
}
