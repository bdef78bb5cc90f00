use std::time::Duration;

use eframe::egui;
use folio_core::state::{ScrollAnimation, intersection_ratio, scroll_into_view_top};
use folio_core::views::{self, Page};
use folio_core::{
    BasePath, DocumentLayout, Effect, ElementRef, FolioConfig, PortfolioEvent, PortfolioState,
    reference_content,
};
use folio_protocol::{Content, HitTarget, SectionId, ThemeToken, Viewport};

use crate::renderer::{self, RevealClock};
use crate::theme;

/// Pixels moved per arrow-key press.
const LINE_STEP: f32 = 48.0;

/// Main application state.
pub struct FolioApp {
    content: Content,
    state: PortfolioState,
    resolver: BasePath,
    /// Layout from the previous frame; the state machine queries it.
    page: Page,
    viewport: Viewport,
    /// Document scroll offset in pixels.
    scroll_y: f64,
    /// Geometry the state machine last sampled.
    reported: Option<SampleKey>,
    scroll_anim: Option<ScrollAnimation>,
    reveal_clock: RevealClock,
}

impl FolioApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_content(cc, reference_content(), FolioConfig::default())
    }

    pub fn with_content(
        cc: &eframe::CreationContext<'_>,
        content: Content,
        config: FolioConfig,
    ) -> Self {
        cc.egui_ctx.set_visuals(theme::folio_dark_visuals());

        let resolver = BasePath::new(config.asset_base_path.clone());
        let state = PortfolioState::new(config, content.timeline.len(), content.projects.len());
        let viewport = Viewport::new(1280.0, 800.0);
        let page = views::render_page(&content, &state, &viewport, &resolver);

        #[cfg(target_arch = "wasm32")]
        web_sys::console::log_1(
            &format!(
                "folio: {} timeline entries, {} projects",
                content.timeline.len(),
                content.projects.len()
            )
            .into(),
        );

        Self {
            content,
            state,
            resolver,
            page,
            viewport,
            scroll_y: 0.0,
            reported: None,
            scroll_anim: None,
            reveal_clock: RevealClock::default(),
        }
    }

    fn dispatch(&mut self, ctx: &egui::Context, event: PortfolioEvent, now_ms: f64) {
        let effects = self.state.handle(event, &self.page, now_ms);
        for effect in effects {
            self.apply(ctx, effect, now_ms);
        }
    }

    fn apply(&mut self, ctx: &egui::Context, effect: Effect, now_ms: f64) {
        tracing::debug!(?effect, "applying effect");
        match effect {
            Effect::SmoothScrollTo { top } => self.scroll_to(top, now_ms),
            Effect::ScrollIntoView { job_index } => {
                if let Some(bounds) = self.page.bounds(ElementRef::TimelineCard(job_index)) {
                    let top = scroll_into_view_top(&bounds, self.viewport.height);
                    self.scroll_to(top, now_ms);
                }
            }
            Effect::WakeAt { at_ms } => {
                let wait = (at_ms - now_ms).max(0.0);
                ctx.request_repaint_after(Duration::from_secs_f64(wait / 1000.0));
            }
            Effect::OpenUrl(url) => {
                ctx.open_url(egui::OpenUrl::new_tab(url.as_str()));
            }
        }
    }

    fn scroll_to(&mut self, top: f64, now_ms: f64) {
        let target = top.clamp(0.0, self.page.max_scroll(self.viewport.height));
        self.scroll_anim = Some(ScrollAnimation::new(
            self.scroll_y,
            target,
            now_ms,
            self.state.config().smooth_scroll_ms,
        ));
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        let page_step = (self.viewport.height * 0.9) as f32;
        let (wheel, keys) = ctx.input(|i| {
            let mut keys = 0.0_f32;
            if i.key_pressed(egui::Key::ArrowDown) {
                keys += LINE_STEP;
            }
            if i.key_pressed(egui::Key::ArrowUp) {
                keys -= LINE_STEP;
            }
            if i.key_pressed(egui::Key::PageDown) || i.key_pressed(egui::Key::Space) {
                keys += page_step;
            }
            if i.key_pressed(egui::Key::PageUp) {
                keys -= page_step;
            }
            if i.key_pressed(egui::Key::Home) {
                keys = f32::NEG_INFINITY;
            }
            if i.key_pressed(egui::Key::End) {
                keys = f32::INFINITY;
            }
            (i.smooth_scroll_delta.y, keys)
        });

        if wheel != 0.0 || keys != 0.0 {
            // Manual scrolling interrupts any programmatic scroll.
            self.scroll_anim = None;
            let max = self.page.max_scroll(self.viewport.height);
            self.scroll_y = (self.scroll_y - wheel as f64 + keys as f64).clamp(0.0, max);
        }
    }

    fn advance_scroll(&mut self, ctx: &egui::Context, now_ms: f64) {
        if let Some(anim) = &self.scroll_anim {
            self.scroll_y = anim.offset_at(now_ms);
            if anim.is_finished(now_ms) {
                self.scroll_anim = None;
            } else {
                ctx.request_repaint();
            }
        }
        let max = self.page.max_scroll(self.viewport.height);
        self.scroll_y = self.scroll_y.clamp(0.0, max);
    }

    /// Report scroll position and section visibility when the offset moved.
    fn report_scroll(&mut self, ctx: &egui::Context, now_ms: f64) {
        let key = SampleKey::new(self.scroll_y, &self.viewport, &self.page);
        if self.reported == Some(key) {
            return;
        }
        self.reported = Some(key);
        let scroll_y = self.scroll_y;
        self.dispatch(ctx, PortfolioEvent::Scrolled { scroll_y }, now_ms);

        let margin = self.state.config().reveal_margin_px;
        let samples: Vec<(SectionId, f64)> = self
            .page
            .sections()
            .iter()
            .map(|(id, bounds)| {
                (
                    *id,
                    intersection_ratio(bounds, scroll_y, &self.viewport, margin),
                )
            })
            .collect();
        for (section, ratio) in samples {
            self.dispatch(ctx, PortfolioEvent::Intersected { section, ratio }, now_ms);
        }
    }

    fn fire_timers(&mut self, ctx: &egui::Context, now_ms: f64) {
        if let Some(at_ms) = self.state.next_wake() {
            if now_ms >= at_ms {
                self.dispatch(ctx, PortfolioEvent::Tick, now_ms);
            } else {
                let wait = (at_ms - now_ms) / 1000.0;
                ctx.request_repaint_after(Duration::from_secs_f64(wait));
            }
        }
    }
}

/// Scroll offset, viewport size and document height at a sample. A change in
/// any of them can move a section into view.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SampleKey {
    scroll_y: f64,
    width: f64,
    height: f64,
    page_height: f64,
}

impl SampleKey {
    fn new(scroll_y: f64, viewport: &Viewport, page: &Page) -> Self {
        Self {
            scroll_y,
            width: viewport.width,
            height: viewport.height,
            page_height: page.height,
        }
    }
}

fn event_for(target: &HitTarget) -> PortfolioEvent {
    match target {
        HitTarget::Nav(id) => PortfolioEvent::NavigateTo(*id),
        HitTarget::TimelineCard(index) => PortfolioEvent::TimelineCardClicked(*index),
        HitTarget::CarouselPrev => PortfolioEvent::CarouselPrev,
        HitTarget::CarouselNext => PortfolioEvent::CarouselNext,
        HitTarget::Link(url) => PortfolioEvent::OpenLink(url.clone()),
    }
}

impl eframe::App for FolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now_ms = ctx.input(|i| i.time) * 1000.0;

        if !self.state.is_loaded() {
            self.dispatch(ctx, PortfolioEvent::Loaded, now_ms);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(theme::resolve(ThemeToken::Background)))
            .show(ctx, |ui| {
                let area = ui.max_rect();
                self.viewport = Viewport {
                    width: area.width() as f64,
                    height: area.height() as f64,
                    dpr: ctx.pixels_per_point() as f64,
                };

                self.handle_input(ctx);
                self.advance_scroll(ctx, now_ms);
                self.page =
                    views::render_page(&self.content, &self.state, &self.viewport, &self.resolver);
                self.report_scroll(ctx, now_ms);
                self.fire_timers(ctx, now_ms);

                // Lay out again so this frame shows transitions just applied.
                self.page =
                    views::render_page(&self.content, &self.state, &self.viewport, &self.resolver);
                let nav = views::render_nav(&self.content, &self.state, self.viewport.width);

                let response = ui.allocate_rect(area, egui::Sense::click());
                let painter = ui.painter_at(area);
                let page_origin = egui::pos2(area.left(), area.top() - self.scroll_y as f32);
                let page_result = renderer::render_commands(
                    &painter,
                    &self.page.commands,
                    page_origin,
                    &mut self.reveal_clock,
                    now_ms,
                );
                let nav_result = renderer::render_commands(
                    &painter,
                    &nav,
                    area.left_top(),
                    &mut self.reveal_clock,
                    now_ms,
                );
                if page_result.animating || nav_result.animating {
                    ctx.request_repaint();
                }

                let pointer = response.hover_pos();
                let hovered = pointer.and_then(|pos| {
                    nav_result
                        .hit_test(pos)
                        .or_else(|| page_result.hit_test(pos))
                        .cloned()
                });
                if hovered.is_some() {
                    ctx.set_cursor_icon(egui::CursorIcon::PointingHand);
                }
                if response.clicked() {
                    if let Some(target) = hovered {
                        tracing::debug!(?target, "clicked");
                        self.dispatch(ctx, event_for(&target), now_ms);
                        ctx.request_repaint();
                    }
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_for(content: &Content, state: &PortfolioState, viewport: &Viewport) -> Page {
        views::render_page(content, state, viewport, &BasePath::default())
    }

    fn reference_state(content: &Content) -> PortfolioState {
        PortfolioState::new(
            FolioConfig::default(),
            content.timeline.len(),
            content.projects.len(),
        )
    }

    #[test]
    fn sample_key_is_stable_without_changes() {
        let content = reference_content();
        let state = reference_state(&content);
        let viewport = Viewport::new(1280.0, 800.0);
        let page = page_for(&content, &state, &viewport);
        assert_eq!(
            SampleKey::new(120.0, &viewport, &page),
            SampleKey::new(120.0, &viewport, &page)
        );
    }

    #[test]
    fn resize_requires_a_new_sample() {
        let content = reference_content();
        let state = reference_state(&content);
        let small = Viewport::new(1280.0, 600.0);
        let tall = Viewport::new(1280.0, 1400.0);
        let before = SampleKey::new(0.0, &small, &page_for(&content, &state, &small));
        let after = SampleKey::new(0.0, &tall, &page_for(&content, &state, &tall));
        assert_ne!(before, after);
    }

    #[test]
    fn expanding_a_card_requires_a_new_sample() {
        let content = reference_content();
        let mut state = reference_state(&content);
        let viewport = Viewport::new(1280.0, 800.0);
        let page = page_for(&content, &state, &viewport);
        let before = SampleKey::new(0.0, &viewport, &page);

        state.handle(PortfolioEvent::TimelineCardClicked(1), &page, 0.0);
        let after = SampleKey::new(0.0, &viewport, &page_for(&content, &state, &viewport));
        assert_ne!(before, after);
    }

    #[test]
    fn hit_targets_map_to_events() {
        assert_eq!(
            event_for(&HitTarget::Nav(SectionId::Projects)),
            PortfolioEvent::NavigateTo(SectionId::Projects)
        );
        assert_eq!(
            event_for(&HitTarget::TimelineCard(1)),
            PortfolioEvent::TimelineCardClicked(1)
        );
        assert_eq!(event_for(&HitTarget::CarouselNext), PortfolioEvent::CarouselNext);
    }
}
