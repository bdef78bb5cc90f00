use serde::{Deserialize, Serialize};

use crate::section::SectionId;

/// Everything a presentation layer needs to know about the view state.
///
/// Renderers are a pure function of this snapshot plus static content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewSnapshot {
    pub active_section: SectionId,
    /// Whether the initial load animation has been triggered.
    pub loaded: bool,
    /// Revealed sections, in declared order.
    pub revealed: Vec<SectionId>,
    pub expanded_job: Option<usize>,
    pub carousel: CarouselSnapshot,
}

impl ViewSnapshot {
    pub fn is_revealed(&self, id: SectionId) -> bool {
        self.revealed.contains(&id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselSnapshot {
    pub start: usize,
    /// Indices into the project list currently displayed.
    pub visible: Vec<usize>,
    /// Range label, e.g. `"2-4"`.
    pub label: String,
    /// One flag per window position; exactly the current one is set.
    pub markers: Vec<bool>,
    pub can_prev: bool,
    pub can_next: bool,
}
