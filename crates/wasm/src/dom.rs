//! Thin wrappers over the browser document.

use folio_core::{DocumentLayout, ElementRef};
use folio_protocol::{Rect, SectionId, ViewSnapshot};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions, Window,
};

use crate::error::HostError;

/// Attribute carrying a timeline card's entry index.
pub const JOB_INDEX_ATTR: &str = "data-job-index";

pub fn window() -> Result<Window, HostError> {
    web_sys::window().ok_or(HostError::NoWindow)
}

pub fn document() -> Result<Document, HostError> {
    window()?.document().ok_or(HostError::NoDocument)
}

/// Milliseconds on the page's monotonic clock.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

pub fn card_selector(index: usize) -> String {
    format!("[{JOB_INDEX_ATTR}=\"{index}\"]")
}

/// Document-coordinate layout read from the live DOM.
///
/// Sections are found by element id; timeline cards by [`JOB_INDEX_ATTR`].
pub struct DomLayout {
    document: Document,
    scroll_y: f64,
}

impl DomLayout {
    pub fn new(window: &Window, document: Document) -> Self {
        Self {
            document,
            scroll_y: window.scroll_y().unwrap_or(0.0),
        }
    }

    fn element(&self, element: ElementRef) -> Option<Element> {
        match element {
            ElementRef::Section(id) => self.document.get_element_by_id(id.as_str()),
            ElementRef::TimelineCard(index) => self
                .document
                .query_selector(&card_selector(index))
                .ok()
                .flatten(),
        }
    }
}

impl DocumentLayout for DomLayout {
    fn bounds(&self, element: ElementRef) -> Option<Rect> {
        let rect = self.element(element)?.get_bounding_client_rect();
        // Detached or display:none elements report an empty box.
        if rect.width() == 0.0 && rect.height() == 0.0 {
            return None;
        }
        Some(Rect::new(
            rect.left(),
            rect.top() + self.scroll_y,
            rect.width(),
            rect.height(),
        ))
    }
}

pub fn smooth_scroll_to(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

pub fn scroll_card_into_view(document: &Document, index: usize) {
    let Ok(Some(card)) = document.query_selector(&card_selector(index)) else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Center);
    card.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Mirror the view state onto data attributes for the page's CSS.
pub fn reflect(document: &Document, snapshot: &ViewSnapshot, timeline_len: usize) {
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("data-active-section", snapshot.active_section.as_str());
        let _ = root.set_attribute("data-loaded", bool_attr(snapshot.loaded));
    }
    for id in SectionId::ALL {
        if let Some(section) = document.get_element_by_id(id.as_str()) {
            let _ = section.set_attribute("data-revealed", bool_attr(snapshot.is_revealed(id)));
        }
    }
    for index in 0..timeline_len {
        if let Ok(Some(card)) = document.query_selector(&card_selector(index)) {
            let expanded = snapshot.expanded_job == Some(index);
            let _ = card.set_attribute("data-expanded", bool_attr(expanded));
        }
    }
    if let Some(projects) = document.get_element_by_id(SectionId::Projects.as_str()) {
        let _ = projects.set_attribute(
            "data-carousel-start",
            &snapshot.carousel.start.to_string(),
        );
    }
}

fn bool_attr(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

type ScrollCallback = Closure<dyn FnMut()>;
type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Scroll listener and intersection observer registered for a mounted page.
///
/// Dropping the bindings removes the listener and disconnects the observer.
pub struct DomBindings {
    window: Window,
    scroll: ScrollCallback,
    observer: IntersectionObserver,
    _observer_callback: ObserverCallback,
}

impl DomBindings {
    /// Register `on_scroll` for window scroll events and report section
    /// intersection samples to `on_intersect`.
    pub fn attach(
        window: &Window,
        document: &Document,
        threshold: f64,
        margin_px: f64,
        on_scroll: impl FnMut() + 'static,
        mut on_intersect: impl FnMut(SectionId, f64) + 'static,
    ) -> Result<Self, HostError> {
        let scroll: ScrollCallback = Closure::new(on_scroll);
        window.add_event_listener_with_callback("scroll", scroll.as_ref().unchecked_ref())?;

        let observer_callback: ObserverCallback =
            Closure::new(move |entries: js_sys::Array, _: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if let Ok(id) = entry.target().id().parse::<SectionId>() {
                        on_intersect(id, entry.intersection_ratio());
                    }
                }
            });

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        init.set_root_margin(&format!("-{margin_px}px"));
        let observer = IntersectionObserver::new_with_options(
            observer_callback.as_ref().unchecked_ref(),
            &init,
        )?;
        for id in SectionId::ALL {
            match document.get_element_by_id(id.as_str()) {
                Some(element) => observer.observe(&element),
                None => web_sys::console::warn_1(
                    &format!("folio: no element with id '{}'", id.as_str()).into(),
                ),
            }
        }

        Ok(Self {
            window: window.clone(),
            scroll,
            observer,
            _observer_callback: observer_callback,
        })
    }
}

impl Drop for DomBindings {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.scroll.as_ref().unchecked_ref());
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_selector_quotes_the_index() {
        assert_eq!(card_selector(3), "[data-job-index=\"3\"]");
    }

    #[test]
    fn bool_attr_spells_out_values() {
        assert_eq!(bool_attr(true), "true");
        assert_eq!(bool_attr(false), "false");
    }
}
