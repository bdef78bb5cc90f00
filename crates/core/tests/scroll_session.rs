//! Integration test: drive a laid-out reference page through a reading
//! session the way a host would, and check the state the renderer sees.

use folio_core::layout::{DocumentLayout, ElementRef, StaticLayout};
use folio_core::state::{intersection_ratio, scroll_into_view_top};
use folio_core::views::{Page, render_page};
use folio_core::{BasePath, Effect, FolioConfig, PortfolioEvent, PortfolioState, reference_content};
use folio_protocol::{Content, SectionId, Viewport};

struct Host {
    content: Content,
    state: PortfolioState,
    viewport: Viewport,
    scroll_y: f64,
    now: f64,
    page: Page,
}

impl Host {
    fn new(width: f64, height: f64) -> Self {
        let content = reference_content();
        let state = PortfolioState::new(
            FolioConfig::default(),
            content.timeline.len(),
            content.projects.len(),
        );
        let viewport = Viewport::new(width, height);
        let page = render_page(&content, &state, &viewport, &BasePath::default());
        let mut host = Self {
            content,
            state,
            viewport,
            scroll_y: 0.0,
            now: 0.0,
            page,
        };
        host.dispatch(PortfolioEvent::Loaded);
        host.scroll_to(0.0);
        host
    }

    fn relayout(&mut self) {
        self.page = render_page(&self.content, &self.state, &self.viewport, &BasePath::default());
    }

    fn dispatch(&mut self, event: PortfolioEvent) {
        let effects = self.state.handle(event, &self.page, self.now);
        self.relayout();
        for effect in effects {
            match effect {
                // Hosts animate; the test jumps straight to the target.
                Effect::SmoothScrollTo { top } => self.scroll_to(top),
                Effect::ScrollIntoView { job_index } => {
                    if let Some(bounds) = self.page.bounds(ElementRef::TimelineCard(job_index)) {
                        let top = scroll_into_view_top(&bounds, self.viewport.height);
                        self.scroll_to(top);
                    }
                }
                Effect::WakeAt { .. } | Effect::OpenUrl(_) => {}
            }
        }
    }

    fn scroll_to(&mut self, top: f64) {
        self.scroll_y = top.clamp(0.0, self.page.max_scroll(self.viewport.height));
        self.dispatch_scroll_samples();
    }

    fn dispatch_scroll_samples(&mut self) {
        let effects = self.state.handle(
            PortfolioEvent::Scrolled {
                scroll_y: self.scroll_y,
            },
            &self.page,
            self.now,
        );
        assert!(effects.is_empty());
        for (section, bounds) in self.page.sections().to_vec() {
            let ratio = intersection_ratio(&bounds, self.scroll_y, &self.viewport, 50.0);
            self.state
                .handle(PortfolioEvent::Intersected { section, ratio }, &self.page, self.now);
        }
        self.relayout();
    }

    fn advance(&mut self, ms: f64) {
        self.now += ms;
        self.dispatch(PortfolioEvent::Tick);
    }
}

#[test]
fn navigation_reveals_and_activates_sections() {
    let mut host = Host::new(1280.0, 800.0);
    let snap = host.state.snapshot();
    assert_eq!(snap.active_section, SectionId::Hero);
    assert!(snap.loaded);
    assert!(!snap.is_revealed(SectionId::Projects));

    host.dispatch(PortfolioEvent::NavigateTo(SectionId::Projects));
    let snap = host.state.snapshot();
    assert_eq!(snap.active_section, SectionId::Projects);
    assert!(snap.is_revealed(SectionId::Projects));

    // Back to the top: active section follows, reveals stay.
    host.dispatch(PortfolioEvent::NavigateTo(SectionId::Hero));
    let snap = host.state.snapshot();
    assert_eq!(snap.active_section, SectionId::Hero);
    assert!(snap.is_revealed(SectionId::Projects));
}

#[test]
fn expanded_card_is_centred_after_delay() {
    let mut host = Host::new(1280.0, 800.0);
    host.dispatch(PortfolioEvent::NavigateTo(SectionId::Experience));
    let before = host.scroll_y;

    host.dispatch(PortfolioEvent::TimelineCardClicked(1));
    assert_eq!(host.state.expanded_job(), Some(1));
    assert_eq!(host.scroll_y, before, "scroll must wait for the delay");

    host.advance(100.0);
    let bounds = host.page.bounds(ElementRef::TimelineCard(1));
    let expected = bounds
        .map(|b| scroll_into_view_top(&b, 800.0).min(host.page.max_scroll(800.0)))
        .unwrap_or_default();
    assert!((host.scroll_y - expected).abs() < 1e-6);
}

#[test]
fn collapsing_before_delay_leaves_scroll_alone() {
    let mut host = Host::new(1280.0, 800.0);
    host.dispatch(PortfolioEvent::NavigateTo(SectionId::Experience));
    let before = host.scroll_y;
    host.dispatch(PortfolioEvent::TimelineCardClicked(0));
    host.now += 50.0;
    host.dispatch(PortfolioEvent::TimelineCardClicked(0));
    host.advance(200.0);
    assert_eq!(host.scroll_y, before);
    assert_eq!(host.state.expanded_job(), None);
}

#[test]
fn active_section_matches_reference_offsets() {
    let layout = StaticLayout::from_section_tops(&[
        (SectionId::Hero, 0.0),
        (SectionId::About, 800.0),
        (SectionId::Experience, 1800.0),
        (SectionId::Projects, 3000.0),
        (SectionId::Contact, 4200.0),
    ]);
    let mut state = PortfolioState::new(FolioConfig::default(), 2, 6);
    state.handle(PortfolioEvent::Scrolled { scroll_y: 750.0 }, &layout, 0.0);
    assert_eq!(state.active_section(), SectionId::About);
    assert_eq!(layout.section_top(SectionId::About), Some(800.0));
}
