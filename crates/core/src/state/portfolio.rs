use folio_protocol::{SectionId, SharedStr, ViewSnapshot};

use crate::config::FolioConfig;
use crate::layout::DocumentLayout;

use super::active::ActiveSectionTracker;
use super::carousel::ProjectCarousel;
use super::deferred::{DeferredQueue, TimerToken};
use super::navigator::ScrollNavigator;
use super::reveal::RevealTracker;
use super::timeline::{TimelineExpansion, Toggle};

/// Something that happened in the host.
#[derive(Debug, Clone, PartialEq)]
pub enum PortfolioEvent {
    /// The page finished mounting; starts the hero entrance animation.
    Loaded,
    /// The document scrolled to `scroll_y`.
    Scrolled { scroll_y: f64 },
    /// The host's intersection detector reported a sample for a section.
    Intersected { section: SectionId, ratio: f64 },
    /// A navigation item was activated.
    NavigateTo(SectionId),
    TimelineCardClicked(usize),
    CarouselNext,
    CarouselPrev,
    /// An outbound link was activated.
    OpenLink(SharedStr),
    /// The host clock reached a time requested through [`Effect::WakeAt`].
    Tick,
}

/// Something the host must do on behalf of the core.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Animate the document scroll to an absolute offset.
    SmoothScrollTo { top: f64 },
    /// Smoothly bring a timeline card to the centre of the viewport.
    ScrollIntoView { job_index: usize },
    /// Deliver [`PortfolioEvent::Tick`] once the host clock reaches `at_ms`.
    WakeAt { at_ms: f64 },
    /// Open a URL in a new browsing context.
    OpenUrl(SharedStr),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Deferred {
    ScrollIntoView(usize),
}

/// The page's view state and the only place it changes.
///
/// Every host event goes through [`PortfolioState::handle`], which applies the
/// transition and returns the effects the host must carry out. Nothing here
/// touches a real document or clock.
#[derive(Debug, Clone)]
pub struct PortfolioState {
    config: FolioConfig,
    loaded: bool,
    active: ActiveSectionTracker,
    reveal: RevealTracker,
    navigator: ScrollNavigator,
    timeline: TimelineExpansion,
    carousel: ProjectCarousel,
    deferred: DeferredQueue<Deferred>,
    pending_scroll: Option<TimerToken>,
}

impl PortfolioState {
    /// Create the state for a page with `timeline_len` experience entries and
    /// `project_len` projects. All sections are observed for reveal.
    pub fn new(config: FolioConfig, timeline_len: usize, project_len: usize) -> Self {
        let mut reveal = RevealTracker::new(config.reveal_threshold);
        reveal.observe(&SectionId::ALL);
        Self {
            loaded: false,
            active: ActiveSectionTracker::new(config.active_lookahead_px),
            reveal,
            navigator: ScrollNavigator::new(config.header_clearance_px),
            timeline: TimelineExpansion::new(timeline_len),
            carousel: ProjectCarousel::new(project_len, config.carousel_window),
            deferred: DeferredQueue::new(),
            pending_scroll: None,
            config,
        }
    }

    pub fn config(&self) -> &FolioConfig {
        &self.config
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn active_section(&self) -> SectionId {
        self.active.active()
    }

    pub fn is_revealed(&self, id: SectionId) -> bool {
        self.reveal.is_revealed(id)
    }

    pub fn expanded_job(&self) -> Option<usize> {
        self.timeline.expanded()
    }

    pub fn carousel(&self) -> &ProjectCarousel {
        &self.carousel
    }

    /// Whether a deferred scroll-into-view is waiting for its delay.
    pub fn has_pending_scroll(&self) -> bool {
        self.pending_scroll.is_some()
    }

    /// Earliest time the host should deliver a [`PortfolioEvent::Tick`].
    pub fn next_wake(&self) -> Option<f64> {
        self.deferred.next_due()
    }

    /// Stop reveal observation and drop pending callbacks. Call when the
    /// host view is torn down.
    pub fn teardown(&mut self) {
        self.reveal.disconnect();
        self.deferred = DeferredQueue::new();
        self.pending_scroll = None;
        tracing::debug!("view state torn down");
    }

    /// Observe every section again after [`teardown`](Self::teardown), for a
    /// host view that is mounted a second time. Reveals recorded so far stay.
    pub fn resume(&mut self) {
        self.reveal.observe(&SectionId::ALL);
        tracing::debug!("view state resumed");
    }

    /// Apply one host event at host time `now_ms`.
    pub fn handle<L: DocumentLayout + ?Sized>(
        &mut self,
        event: PortfolioEvent,
        layout: &L,
        now_ms: f64,
    ) -> Vec<Effect> {
        match event {
            PortfolioEvent::Loaded => {
                self.loaded = true;
                Vec::new()
            }
            PortfolioEvent::Scrolled { scroll_y } => {
                self.active.sample(scroll_y, layout);
                Vec::new()
            }
            PortfolioEvent::Intersected { section, ratio } => {
                self.reveal.record(section, ratio);
                Vec::new()
            }
            PortfolioEvent::NavigateTo(id) => match self.navigator.target_for(id, layout) {
                Some(top) => vec![Effect::SmoothScrollTo { top }],
                None => {
                    tracing::trace!(section = %id, "navigation target not mounted");
                    Vec::new()
                }
            },
            PortfolioEvent::TimelineCardClicked(index) => self.toggle_job(index, now_ms),
            PortfolioEvent::CarouselNext => {
                self.carousel.next();
                Vec::new()
            }
            PortfolioEvent::CarouselPrev => {
                self.carousel.prev();
                Vec::new()
            }
            PortfolioEvent::OpenLink(url) => vec![Effect::OpenUrl(url)],
            PortfolioEvent::Tick => self.fire_due(now_ms),
        }
    }

    fn toggle_job(&mut self, index: usize, now_ms: f64) -> Vec<Effect> {
        let Some(outcome) = self.timeline.toggle(index) else {
            return Vec::new();
        };
        // Whatever happened, a scroll queued for an earlier expansion is stale.
        if let Some(token) = self.pending_scroll.take() {
            self.deferred.cancel(token);
        }
        match outcome {
            Toggle::Expanded { index, .. } => {
                let delay = self.config.expand_scroll_delay_ms;
                let token = self
                    .deferred
                    .schedule(now_ms, delay, Deferred::ScrollIntoView(index));
                self.pending_scroll = Some(token);
                vec![Effect::WakeAt {
                    at_ms: now_ms + delay,
                }]
            }
            Toggle::Collapsed { .. } => Vec::new(),
        }
    }

    fn fire_due(&mut self, now_ms: f64) -> Vec<Effect> {
        let due = self.deferred.drain_due(now_ms);
        if due.is_empty() {
            return Vec::new();
        }
        if self.deferred.is_empty() {
            self.pending_scroll = None;
        }
        due.into_iter()
            .map(|deferred| match deferred {
                Deferred::ScrollIntoView(job_index) => Effect::ScrollIntoView { job_index },
            })
            .collect()
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            active_section: self.active.active(),
            loaded: self.loaded,
            revealed: self.reveal.revealed().collect(),
            expanded_job: self.timeline.expanded(),
            carousel: self.carousel.snapshot(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::StaticLayout;

    fn state() -> PortfolioState {
        PortfolioState::new(FolioConfig::default(), 2, 6)
    }

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
    fn navigate_emits_header_compensated_scroll() {
        let mut s = state();
        let effects = s.handle(PortfolioEvent::NavigateTo(SectionId::Experience), &layout(), 0.0);
        assert_eq!(effects, vec![Effect::SmoothScrollTo { top: 1720.0 }]);
    }

    #[test]
    fn navigate_to_unmounted_section_is_noop() {
        let mut s = state();
        let effects = s.handle(
            PortfolioEvent::NavigateTo(SectionId::Contact),
            &StaticLayout::new(),
            0.0,
        );
        assert!(effects.is_empty());
    }

    #[test]
    fn expand_scrolls_after_delay() {
        let mut s = state();
        let effects = s.handle(PortfolioEvent::TimelineCardClicked(1), &layout(), 1000.0);
        assert_eq!(effects, vec![Effect::WakeAt { at_ms: 1100.0 }]);
        assert!(s.handle(PortfolioEvent::Tick, &layout(), 1050.0).is_empty());
        assert_eq!(
            s.handle(PortfolioEvent::Tick, &layout(), 1100.0),
            vec![Effect::ScrollIntoView { job_index: 1 }]
        );
        assert!(!s.has_pending_scroll());
    }

    #[test]
    fn collapse_before_delay_cancels_scroll() {
        let mut s = state();
        s.handle(PortfolioEvent::TimelineCardClicked(0), &layout(), 0.0);
        let effects = s.handle(PortfolioEvent::TimelineCardClicked(0), &layout(), 50.0);
        assert!(effects.is_empty());
        assert_eq!(s.expanded_job(), None);
        assert!(s.handle(PortfolioEvent::Tick, &layout(), 200.0).is_empty());
    }

    #[test]
    fn switching_entries_only_scrolls_to_latest() {
        let mut s = state();
        s.handle(PortfolioEvent::TimelineCardClicked(0), &layout(), 0.0);
        s.handle(PortfolioEvent::TimelineCardClicked(1), &layout(), 40.0);
        assert_eq!(s.expanded_job(), Some(1));
        assert_eq!(
            s.handle(PortfolioEvent::Tick, &layout(), 500.0),
            vec![Effect::ScrollIntoView { job_index: 1 }]
        );
    }

    #[test]
    fn snapshot_reflects_transitions() {
        let mut s = state();
        let l = layout();
        s.handle(PortfolioEvent::Loaded, &l, 0.0);
        s.handle(PortfolioEvent::Scrolled { scroll_y: 750.0 }, &l, 0.0);
        s.handle(
            PortfolioEvent::Intersected {
                section: SectionId::About,
                ratio: 0.4,
            },
            &l,
            0.0,
        );
        s.handle(PortfolioEvent::CarouselNext, &l, 0.0);

        let snap = s.snapshot();
        assert!(snap.loaded);
        assert_eq!(snap.active_section, SectionId::About);
        assert_eq!(snap.revealed, vec![SectionId::About]);
        assert_eq!(snap.carousel.label, "2-4");
        assert_eq!(snap.carousel.visible, vec![1, 2, 3]);
    }

    #[test]
    fn open_link_is_forwarded() {
        let mut s = state();
        let effects = s.handle(
            PortfolioEvent::OpenLink("https://github.com/Danie1Le".into()),
            &layout(),
            0.0,
        );
        assert_eq!(
            effects,
            vec![Effect::OpenUrl("https://github.com/Danie1Le".into())]
        );
    }

    #[test]
    fn teardown_drops_pending_scroll() {
        let mut s = state();
        s.handle(PortfolioEvent::TimelineCardClicked(0), &layout(), 0.0);
        s.teardown();
        assert!(s.handle(PortfolioEvent::Tick, &layout(), 1000.0).is_empty());
        assert_eq!(s.expanded_job(), Some(0));
    }

    #[test]
    fn torn_down_state_ignores_intersections() {
        let mut s = state();
        s.teardown();
        let sample = PortfolioEvent::Intersected {
            section: SectionId::About,
            ratio: 0.9,
        };
        s.handle(sample, &layout(), 0.0);
        assert!(!s.is_revealed(SectionId::About));
    }

    #[test]
    fn resume_after_teardown_reveals_again() {
        let mut s = state();
        let l = layout();
        s.handle(
            PortfolioEvent::Intersected {
                section: SectionId::About,
                ratio: 0.5,
            },
            &l,
            0.0,
        );
        s.teardown();
        s.resume();
        assert!(s.is_revealed(SectionId::About));
        s.handle(
            PortfolioEvent::Intersected {
                section: SectionId::Projects,
                ratio: 0.9,
            },
            &l,
            0.0,
        );
        assert!(s.is_revealed(SectionId::Projects));
        assert!(!s.is_revealed(SectionId::Experience));
    }

    #[test]
    fn remount_schedules_fresh_scroll() {
        let mut s = state();
        let l = layout();
        s.handle(PortfolioEvent::TimelineCardClicked(0), &l, 0.0);
        s.teardown();
        s.resume();
        s.handle(PortfolioEvent::TimelineCardClicked(1), &l, 500.0);
        assert_eq!(s.next_wake(), Some(600.0));
        assert_eq!(
            s.handle(PortfolioEvent::Tick, &l, 600.0),
            vec![Effect::ScrollIntoView { job_index: 1 }]
        );
    }
}
