use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use folio_core::state::{ScrollAnimation, intersection_ratio, scroll_into_view_top};
use folio_core::views::{self, Page};
use folio_core::{
    BasePath, DocumentLayout, Effect, ElementRef, FolioConfig, PortfolioEvent, PortfolioState,
};
use folio_protocol::{Content, HitTarget, SectionId, ThemeToken, Viewport};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Paragraph},
};

use crate::raster::{self, CELL_HEIGHT, CELL_WIDTH, HitCell};

const LINE_STEP: f64 = 3.0 * CELL_HEIGHT;

/// One terminal session over the portfolio page.
pub struct Session {
    content: Content,
    state: PortfolioState,
    resolver: BasePath,
    page: Page,
    viewport: Viewport,
    scroll_y: f64,
    /// Scroll offset and document height at the last visibility report.
    reported: Option<(f64, f64)>,
    scroll_anim: Option<ScrollAnimation>,
    /// Last opened link, shown in the status line.
    status: Option<String>,
    hits: Vec<HitCell>,
}

impl Session {
    pub fn new(content: Content, config: FolioConfig) -> Self {
        let resolver = BasePath::new(config.asset_base_path.clone());
        let state = PortfolioState::new(config, content.timeline.len(), content.projects.len());
        let viewport = Viewport::new(120.0 * CELL_WIDTH, 39.0 * CELL_HEIGHT);
        let page = views::render_page(&content, &state, &viewport, &resolver);
        Self {
            content,
            state,
            resolver,
            page,
            viewport,
            scroll_y: 0.0,
            reported: None,
            scroll_anim: None,
            status: None,
            hits: Vec::new(),
        }
    }

    /// Size the page to a terminal of `cols` x `rows`; the last row is the
    /// status line.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        let viewport = Viewport::new(
            f64::from(cols) * CELL_WIDTH,
            f64::from(rows.saturating_sub(1)) * CELL_HEIGHT,
        );
        if viewport != self.viewport {
            self.viewport = viewport;
            self.relayout();
            // Section bounds moved; report visibility again.
            self.reported = None;
        }
    }

    fn relayout(&mut self) {
        self.page = views::render_page(&self.content, &self.state, &self.viewport, &self.resolver);
    }

    pub fn dispatch(&mut self, event: PortfolioEvent, now_ms: f64) {
        let effects = self.state.handle(event, &self.page, now_ms);
        for effect in effects {
            self.apply(effect, now_ms);
        }
        self.relayout();
    }

    fn apply(&mut self, effect: Effect, now_ms: f64) {
        tracing::debug!(?effect, "applying effect");
        match effect {
            Effect::SmoothScrollTo { top } => self.scroll_to(top, now_ms),
            Effect::ScrollIntoView { job_index } => {
                if let Some(bounds) = self.page.bounds(ElementRef::TimelineCard(job_index)) {
                    let top = scroll_into_view_top(&bounds, self.viewport.height);
                    self.scroll_to(top, now_ms);
                }
            }
            // The event loop polls `next_wake` every iteration.
            Effect::WakeAt { .. } => {}
            Effect::OpenUrl(url) => self.status = Some(format!("open {url}")),
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

    /// Manual scroll; interrupts any animated scroll.
    pub fn scroll_by(&mut self, delta: f64) {
        self.scroll_anim = None;
        let max = self.page.max_scroll(self.viewport.height);
        self.scroll_y = (self.scroll_y + delta).clamp(0.0, max);
    }

    /// Advance animations and timers to `now_ms`.
    pub fn step(&mut self, now_ms: f64) {
        if !self.state.is_loaded() {
            self.dispatch(PortfolioEvent::Loaded, now_ms);
        }
        if let Some(anim) = &self.scroll_anim {
            self.scroll_y = anim.offset_at(now_ms);
            if anim.is_finished(now_ms) {
                self.scroll_anim = None;
            }
        }
        self.scroll_y = self
            .scroll_y
            .clamp(0.0, self.page.max_scroll(self.viewport.height));

        // Expanding a card changes the document height without scrolling.
        let key = (self.scroll_y, self.page.height);
        if self.reported != Some(key) {
            self.reported = Some(key);
            let scroll_y = self.scroll_y;
            self.dispatch(PortfolioEvent::Scrolled { scroll_y }, now_ms);
            let margin = self.state.config().reveal_margin_px;
            let samples: Vec<(SectionId, f64)> = self
                .page
                .sections()
                .iter()
                .map(|(id, bounds)| {
                    (*id, intersection_ratio(bounds, scroll_y, &self.viewport, margin))
                })
                .collect();
            for (section, ratio) in samples {
                self.dispatch(PortfolioEvent::Intersected { section, ratio }, now_ms);
            }
        }

        if self.state.next_wake().is_some_and(|at| now_ms >= at) {
            self.dispatch(PortfolioEvent::Tick, now_ms);
        }
    }

    /// Whether the loop should wake soon rather than idle.
    pub fn is_busy(&self) -> bool {
        self.scroll_anim.is_some() || self.state.next_wake().is_some()
    }

    /// Handle a key press. Returns false when the session should end.
    pub fn handle_key(&mut self, code: KeyCode, now_ms: f64) -> bool {
        let page_step = (self.viewport.height * 0.9).max(CELL_HEIGHT);
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Char('j') | KeyCode::Down => self.scroll_by(LINE_STEP),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_by(-LINE_STEP),
            KeyCode::PageDown | KeyCode::Char(' ') => self.scroll_by(page_step),
            KeyCode::PageUp => self.scroll_by(-page_step),
            KeyCode::Home | KeyCode::Char('g') => self.scroll_by(f64::NEG_INFINITY),
            KeyCode::End | KeyCode::Char('G') => self.scroll_by(f64::INFINITY),
            KeyCode::Left | KeyCode::Char('h') => self.dispatch(PortfolioEvent::CarouselPrev, now_ms),
            KeyCode::Right | KeyCode::Char('l') => {
                self.dispatch(PortfolioEvent::CarouselNext, now_ms);
            }
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                if let Some(id) = SectionId::ALL.get(index) {
                    self.dispatch(PortfolioEvent::NavigateTo(*id), now_ms);
                }
            }
            _ => {}
        }
        true
    }

    /// Activate whatever was drawn at a cell in the last frame.
    pub fn click(&mut self, col: u16, row: u16, now_ms: f64) {
        let event = match raster::hit_test(&self.hits, col, row) {
            Some(HitTarget::Nav(id)) => PortfolioEvent::NavigateTo(*id),
            Some(HitTarget::TimelineCard(index)) => PortfolioEvent::TimelineCardClicked(*index),
            Some(HitTarget::CarouselPrev) => PortfolioEvent::CarouselPrev,
            Some(HitTarget::CarouselNext) => PortfolioEvent::CarouselNext,
            Some(HitTarget::Link(url)) => PortfolioEvent::OpenLink(url.clone()),
            None => return,
        };
        tracing::debug!(?event, col, row, "click");
        self.dispatch(event, now_ms);
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let page_area = Rect::new(area.x, area.y, area.width, area.height.saturating_sub(1));
        let status_area = Rect::new(
            area.x,
            area.y + area.height.saturating_sub(1),
            area.width,
            area.height.min(1),
        );

        let background = Block::default()
            .style(Style::default().bg(raster::theme_to_color(ThemeToken::Background)));
        frame.render_widget(background, page_area);

        let nav = views::render_nav(&self.content, &self.state, self.viewport.width);
        let buf = frame.buffer_mut();
        self.hits = raster::rasterize(buf, page_area, &self.page.commands, self.scroll_y);
        self.hits
            .extend(raster::rasterize(buf, page_area, &nav, 0.0));

        let section = self.state.active_section().nav_label();
        let status = match &self.status {
            Some(message) => format!(" {section} | {message}"),
            None => format!(
                " {section} | j/k scroll | 1-5 sections | ←/→ projects | click cards | q quit"
            ),
        };
        frame.render_widget(
            Paragraph::new(status).style(Style::default().fg(Color::White).bg(Color::DarkGray)),
            status_area,
        );
    }
}

pub fn render_tui(content: Content, config: FolioConfig) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, Session::new(content, config));

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    mut session: Session,
) -> Result<()> {
    let started = Instant::now();
    let now_ms = || started.elapsed().as_secs_f64() * 1000.0;

    loop {
        let size = terminal.size()?;
        session.resize(size.width, size.height);
        session.step(now_ms());
        terminal.draw(|frame| session.draw(frame))?;

        let timeout = if session.is_busy() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(250)
        };
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if !session.handle_key(key.code, now_ms()) {
                        break;
                    }
                }
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::ScrollDown => session.scroll_by(LINE_STEP),
                    MouseEventKind::ScrollUp => session.scroll_by(-LINE_STEP),
                    MouseEventKind::Down(MouseButton::Left) => {
                        session.click(mouse.column, mouse.row, now_ms());
                    }
                    _ => {}
                },
                _ => {}
            }
        }
    }

    Ok(())
}
