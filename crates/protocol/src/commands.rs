use serde::{Deserialize, Serialize};

use crate::section::SectionId;
use crate::shared_str::SharedStr;
use crate::theme::ThemeToken;
use crate::types::{Point, Rect};

/// What a clickable region does when activated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HitTarget {
    /// Navigation bar item: scroll to the section.
    Nav(SectionId),
    /// Timeline card at this index: toggle its expansion.
    TimelineCard(usize),
    CarouselPrev,
    CarouselNext,
    /// Open a URL in a new browsing context.
    Link(SharedStr),
}

/// A single, stateless render instruction.
///
/// The core emits a `Vec<RenderCommand>` for the page and one for the
/// navigation bar. Renderers consume each list in order; every command
/// carries all the data it needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RenderCommand {
    /// Draw a filled rectangle, optionally rounded and outlined, optionally
    /// clickable.
    DrawRect {
        rect: Rect,
        color: ThemeToken,
        border_color: Option<ThemeToken>,
        corner_radius: f64,
        target: Option<HitTarget>,
    },

    /// Draw a single line of text. `position` is the top edge of the line box.
    DrawText {
        position: Point,
        text: SharedStr,
        color: ThemeToken,
        font_size: f64,
        align: TextAlign,
    },

    /// Draw a line segment.
    DrawLine {
        from: Point,
        to: Point,
        color: ThemeToken,
        width: f64,
    },

    /// Draw an image from a resolved asset URL into `rect`.
    DrawImage {
        rect: Rect,
        uri: SharedStr,
        alt: SharedStr,
    },

    /// Fade and slide everything until the matching `EndReveal`.
    ///
    /// `key` identifies the animated element across frames. While `visible`
    /// is false the content sits at `offset` with zero opacity; once it turns
    /// true it eases into place over `duration_ms` after `delay_ms`.
    BeginReveal {
        key: SharedStr,
        visible: bool,
        offset: Point,
        delay_ms: f64,
        duration_ms: f64,
    },

    EndReveal,

    /// Begin a logical group (a section, a card). Renderers may use this for
    /// batching or accessibility.
    BeginGroup {
        id: SharedStr,
        label: Option<SharedStr>,
    },

    /// End the current group.
    EndGroup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl RenderCommand {
    /// The clickable target of this command, if any.
    pub fn target(&self) -> Option<(&Rect, &HitTarget)> {
        match self {
            RenderCommand::DrawRect {
                rect,
                target: Some(target),
                ..
            } => Some((rect, target)),
            _ => None,
        }
    }
}
