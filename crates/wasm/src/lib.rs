//! Browser bindings: drive the folio view state from a server-rendered page.
//!
//! The page markup gives each section an element id equal to its
//! [`SectionId`] and each timeline card a `data-job-index` attribute. The
//! bridge listens for scroll and intersection events, feeds them to
//! [`PortfolioState`], performs the resulting effects, and mirrors the state
//! back onto `data-*` attributes.

mod dom;
mod error;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use folio_core::{
    Effect, FolioConfig, PortfolioEvent, PortfolioState, parse_content, reference_content,
};
use folio_protocol::{Content, SectionId};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use dom::{DomBindings, DomLayout};
pub use error::HostError;

struct Inner {
    state: PortfolioState,
    timeline_len: usize,
    on_change: Option<js_sys::Function>,
    bindings: Option<DomBindings>,
}

type Shared = Rc<RefCell<Inner>>;

/// A mounted portfolio page.
#[wasm_bindgen]
pub struct PortfolioPage {
    inner: Shared,
}

#[wasm_bindgen]
impl PortfolioPage {
    /// Build the page state. Either argument may be empty to use defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str, content_json: &str) -> Result<PortfolioPage, JsError> {
        let config = if config_json.trim().is_empty() {
            FolioConfig::default()
        } else {
            FolioConfig::from_json(config_json.as_bytes()).map_err(HostError::from)?
        };
        let content: Content = if content_json.trim().is_empty() {
            reference_content()
        } else {
            parse_content(content_json.as_bytes()).map_err(HostError::from)?
        };
        let state = PortfolioState::new(config, content.timeline.len(), content.projects.len());
        Ok(PortfolioPage {
            inner: Rc::new(RefCell::new(Inner {
                state,
                timeline_len: content.timeline.len(),
                on_change: None,
                bindings: None,
            })),
        })
    }

    /// Start listening to the document and play the hero entrance.
    pub fn mount(&self) -> Result<(), JsError> {
        let window = dom::window()?;
        let document = dom::document()?;
        let (threshold, margin) = {
            let mut inner = self.inner.borrow_mut();
            // A page mounted again after `unmount` observes its sections anew.
            inner.state.resume();
            let config = inner.state.config();
            (config.reveal_threshold, config.reveal_margin_px)
        };

        let on_scroll = {
            let weak = Rc::downgrade(&self.inner);
            move || {
                if let Some(inner) = weak.upgrade() {
                    let scroll_y = web_sys::window()
                        .and_then(|w| w.scroll_y().ok())
                        .unwrap_or(0.0);
                    dispatch(&inner, PortfolioEvent::Scrolled { scroll_y });
                }
            }
        };
        let on_intersect = {
            let weak = Rc::downgrade(&self.inner);
            move |section: SectionId, ratio: f64| {
                if let Some(inner) = weak.upgrade() {
                    dispatch(&inner, PortfolioEvent::Intersected { section, ratio });
                }
            }
        };
        let bindings =
            DomBindings::attach(&window, &document, threshold, margin, on_scroll, on_intersect)?;
        self.inner.borrow_mut().bindings = Some(bindings);

        dispatch(&self.inner, PortfolioEvent::Loaded);
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        dispatch(&self.inner, PortfolioEvent::Scrolled { scroll_y });
        Ok(())
    }

    /// Scroll to a section by id (`hero`, `about`, ...).
    pub fn navigate(&self, section: &str) -> Result<(), JsError> {
        let id: SectionId = section.parse().map_err(HostError::from)?;
        dispatch(&self.inner, PortfolioEvent::NavigateTo(id));
        Ok(())
    }

    #[wasm_bindgen(js_name = toggleJob)]
    pub fn toggle_job(&self, index: usize) {
        dispatch(&self.inner, PortfolioEvent::TimelineCardClicked(index));
    }

    #[wasm_bindgen(js_name = nextProjects)]
    pub fn next_projects(&self) {
        dispatch(&self.inner, PortfolioEvent::CarouselNext);
    }

    #[wasm_bindgen(js_name = prevProjects)]
    pub fn prev_projects(&self) {
        dispatch(&self.inner, PortfolioEvent::CarouselPrev);
    }

    #[wasm_bindgen(js_name = openLink)]
    pub fn open_link(&self, url: &str) {
        dispatch(&self.inner, PortfolioEvent::OpenLink(url.into()));
    }

    /// Current view state as JSON.
    pub fn snapshot(&self) -> Result<String, JsError> {
        let snapshot = self.inner.borrow().state.snapshot();
        Ok(serde_json::to_string(&snapshot).map_err(HostError::from)?)
    }

    /// Call `callback(snapshotJson)` after every state change.
    #[wasm_bindgen(js_name = setOnChange)]
    pub fn set_on_change(&self, callback: Option<js_sys::Function>) {
        self.inner.borrow_mut().on_change = callback;
    }

    /// Stop listening and drop pending timers.
    pub fn unmount(&self) -> Result<(), JsError> {
        let mut inner = self.inner.borrow_mut();
        if inner.bindings.take().is_none() {
            return Err(HostError::NotMounted.into());
        }
        inner.state.teardown();
        Ok(())
    }
}

fn dispatch(inner: &Shared, event: PortfolioEvent) {
    if let Err(err) = try_dispatch(inner, event) {
        web_sys::console::error_1(&format!("folio: {err}").into());
    }
}

fn try_dispatch(inner: &Shared, event: PortfolioEvent) -> Result<(), HostError> {
    let window = dom::window()?;
    let document = dom::document()?;
    let now = dom::now_ms();
    let is_tick = event == PortfolioEvent::Tick;

    // Release the borrow before running effects or calling back into JS,
    // either of which may re-enter.
    let (effects, rewake, snapshot, timeline_len, on_change) = {
        let mut guard = inner.borrow_mut();
        let layout = DomLayout::new(&window, document.clone());
        let effects = guard.state.handle(event, &layout, now);
        // Timers can fire a little early; keep waiting for what is still due.
        let rewake = if is_tick { guard.state.next_wake() } else { None };
        (
            effects,
            rewake,
            guard.state.snapshot(),
            guard.timeline_len,
            guard.on_change.clone(),
        )
    };
    if let Some(at_ms) = rewake {
        schedule_tick(&window, Rc::downgrade(inner), at_ms - now)?;
    }

    for effect in effects {
        match effect {
            Effect::SmoothScrollTo { top } => dom::smooth_scroll_to(&window, top),
            Effect::ScrollIntoView { job_index } => {
                dom::scroll_card_into_view(&document, job_index);
            }
            Effect::WakeAt { at_ms } => schedule_tick(&window, Rc::downgrade(inner), at_ms - now)?,
            Effect::OpenUrl(url) => {
                window.open_with_url_and_target(url.as_str(), "_blank")?;
            }
        }
    }

    dom::reflect(&document, &snapshot, timeline_len);
    if let Some(callback) = on_change {
        let json = serde_json::to_string(&snapshot)?;
        callback.call1(&JsValue::NULL, &JsValue::from_str(&json))?;
    }
    Ok(())
}

/// Deliver a `Tick` after `delay_ms`. A tick that finds nothing due is a
/// no-op, so timers never need clearing.
fn schedule_tick(
    window: &web_sys::Window,
    inner: Weak<RefCell<Inner>>,
    delay_ms: f64,
) -> Result<(), HostError> {
    let callback = Closure::once_into_js(move || {
        if let Some(inner) = inner.upgrade() {
            dispatch(&inner, PortfolioEvent::Tick);
        }
    });
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        delay_ms.ceil().max(0.0) as i32,
    )?;
    Ok(())
}
