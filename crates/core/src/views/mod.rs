//! View transforms: static content plus view state in, render commands out.
//!
//! The page is laid out top to bottom in document coordinates. The fixed
//! navigation bar is produced separately in screen coordinates because it
//! does not scroll with the document.

mod about;
mod builder;
mod contact;
mod experience;
mod hero;
mod nav;
mod projects;
pub mod text;

pub use nav::render_nav;

use folio_protocol::{Content, Rect, RenderCommand, SectionId, Viewport};

use crate::assets::AssetResolver;
use crate::layout::{DocumentLayout, ElementRef};
use crate::state::PortfolioState;

use builder::PageBuilder;

/// Height of the fixed navigation bar.
pub const NAV_HEIGHT: f64 = 64.0;
/// Widest column the page content uses.
pub const CONTENT_MAX_WIDTH: f64 = 896.0;
/// Horizontal page padding on each side.
pub const PAGE_PADDING: f64 = 24.0;
/// Viewport width at which two-column layouts kick in.
pub const MEDIUM_BREAKPOINT: f64 = 768.0;
/// Viewport width at which the carousel shows three columns.
pub const LARGE_BREAKPOINT: f64 = 1024.0;

pub const REVEAL_DURATION_MS: f64 = 1000.0;

/// Everything a section renderer reads.
pub(crate) struct SectionContext<'a> {
    pub content: &'a Content,
    pub state: &'a PortfolioState,
    pub viewport: &'a Viewport,
    pub resolver: &'a dyn AssetResolver,
}

impl SectionContext<'_> {
    /// Centred content column `(x, width)`, capped at `max_width`.
    pub fn column(&self, max_width: f64) -> (f64, f64) {
        let available = (self.viewport.width - 2.0 * PAGE_PADDING).max(0.0);
        let width = available.min(max_width);
        ((self.viewport.width - width) / 2.0, width)
    }

    pub fn is_wide(&self) -> bool {
        self.viewport.width >= MEDIUM_BREAKPOINT
    }
}

/// A laid-out page.
#[derive(Debug, Clone)]
pub struct Page {
    /// Render commands in document coordinates.
    pub commands: Vec<RenderCommand>,
    /// Total document height.
    pub height: f64,
    sections: Vec<(SectionId, Rect)>,
    cards: Vec<Rect>,
}

impl Page {
    pub fn section_bounds(&self, id: SectionId) -> Option<Rect> {
        self.sections
            .iter()
            .find(|(section, _)| *section == id)
            .map(|(_, rect)| *rect)
    }

    pub fn sections(&self) -> &[(SectionId, Rect)] {
        &self.sections
    }

    /// Largest valid scroll offset for a viewport of `viewport_height`.
    pub fn max_scroll(&self, viewport_height: f64) -> f64 {
        (self.height - viewport_height).max(0.0)
    }
}

impl DocumentLayout for Page {
    fn bounds(&self, element: ElementRef) -> Option<Rect> {
        match element {
            ElementRef::Section(id) => self.section_bounds(id),
            ElementRef::TimelineCard(index) => self.cards.get(index).copied(),
        }
    }
}

/// Lay out the whole document for the current view state.
pub fn render_page(
    content: &Content,
    state: &PortfolioState,
    viewport: &Viewport,
    resolver: &dyn AssetResolver,
) -> Page {
    let ctx = SectionContext {
        content,
        state,
        viewport,
        resolver,
    };
    let mut b = PageBuilder::default();
    let mut y = 0.0;

    for id in SectionId::ALL {
        b.begin_group(id.as_str(), Some(id.nav_label()));
        let height = match id {
            SectionId::Hero => hero::render(&mut b, &ctx, y),
            SectionId::About => about::render(&mut b, &ctx, y),
            SectionId::Experience => experience::render(&mut b, &ctx, y),
            SectionId::Projects => projects::render(&mut b, &ctx, y),
            SectionId::Contact => contact::render(&mut b, &ctx, y),
        };
        b.end_group();
        b.sections.push((id, Rect::new(0.0, y, viewport.width, height)));
        y += height;
    }

    Page {
        commands: b.commands,
        height: y,
        sections: b.sections,
        cards: b.cards,
    }
}

/// Whether a section's entrance animation should be at its end state.
///
/// The hero animates on load, the contact section is always shown, and the
/// rest wait for their first intersection.
pub fn section_visible(state: &PortfolioState, id: SectionId) -> bool {
    match id {
        SectionId::Hero => state.is_loaded(),
        SectionId::Contact => true,
        _ => state.is_revealed(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::BasePath;
    use crate::config::FolioConfig;
    use crate::content::reference_content;
    use crate::state::PortfolioEvent;
    use folio_protocol::HitTarget;

    fn page_for(state: &PortfolioState, width: f64) -> Page {
        let content = reference_content();
        render_page(
            &content,
            state,
            &Viewport::new(width, 900.0),
            &BasePath::default(),
        )
    }

    fn state() -> PortfolioState {
        let content = reference_content();
        PortfolioState::new(
            FolioConfig::default(),
            content.timeline.len(),
            content.projects.len(),
        )
    }

    fn targets(page: &Page) -> Vec<HitTarget> {
        page.commands
            .iter()
            .filter_map(|c| c.target().map(|(_, t)| t.clone()))
            .collect()
    }

    #[test]
    fn sections_are_stacked_in_order() {
        let page = page_for(&state(), 1280.0);
        let tops: Vec<f64> = SectionId::ALL
            .iter()
            .filter_map(|&id| page.section_top(id))
            .collect();
        assert_eq!(tops.len(), 5);
        assert_eq!(tops[0], 0.0);
        assert!(tops.windows(2).all(|w| w[0] < w[1]));
        let last = page.sections().last().map(|(_, r)| r.bottom());
        assert_eq!(last, Some(page.height));
    }

    #[test]
    fn full_height_sections_fill_viewport() {
        let page = page_for(&state(), 1280.0);
        for id in [SectionId::Hero, SectionId::About] {
            let bounds = page.section_bounds(id);
            assert!(bounds.is_some_and(|r| r.h >= 900.0), "{id} shorter than viewport");
        }
    }

    #[test]
    fn every_timeline_card_is_clickable_and_located() {
        let page = page_for(&state(), 1280.0);
        let t = targets(&page);
        for i in 0..2 {
            assert!(t.contains(&HitTarget::TimelineCard(i)));
            assert!(page.bounds(ElementRef::TimelineCard(i)).is_some());
        }
        assert!(page.bounds(ElementRef::TimelineCard(2)).is_none());
    }

    #[test]
    fn expanding_a_card_makes_it_taller() {
        let mut s = state();
        let collapsed = page_for(&s, 1280.0);
        s.handle(PortfolioEvent::TimelineCardClicked(0), &collapsed, 0.0);
        let expanded = page_for(&s, 1280.0);
        let before = collapsed.bounds(ElementRef::TimelineCard(0)).map(|r| r.h);
        let after = expanded.bounds(ElementRef::TimelineCard(0)).map(|r| r.h);
        assert!(after > before);
        assert!(expanded.height > collapsed.height);
    }

    #[test]
    fn carousel_shows_window_and_controls() {
        let mut s = state();
        let page = page_for(&s, 1280.0);
        let t = targets(&page);
        assert!(t.contains(&HitTarget::CarouselNext));
        assert!(!t.contains(&HitTarget::CarouselPrev));
        // First window: NBA (live link) and Expense Tracker (live link) are
        // clickable, the chatbot has no link.
        assert!(t.contains(&HitTarget::Link("https://nba-predict.streamlit.app/".into())));
        assert!(t.contains(&HitTarget::Link(
            "https://danie1le.github.io/Expense-Budget/".into()
        )));

        for _ in 0..3 {
            s.handle(PortfolioEvent::CarouselNext, &page, 0.0);
        }
        let page = page_for(&s, 1280.0);
        let t = targets(&page);
        assert!(!t.contains(&HitTarget::CarouselNext));
        assert!(t.contains(&HitTarget::CarouselPrev));
        assert!(t.contains(&HitTarget::Link(
            "https://github.com/divPak9876/UpDownRiver".into()
        )));
    }

    #[test]
    fn narrow_layout_still_places_every_section() {
        let page = page_for(&state(), 360.0);
        assert!(SectionId::ALL.iter().all(|&id| page.section_top(id).is_some()));
    }

    #[test]
    fn hero_waits_for_load_and_contact_is_always_visible() {
        let mut s = state();
        assert!(!section_visible(&s, SectionId::Hero));
        assert!(section_visible(&s, SectionId::Contact));
        s.handle(PortfolioEvent::Loaded, &crate::layout::StaticLayout::new(), 0.0);
        assert!(section_visible(&s, SectionId::Hero));
    }
}
