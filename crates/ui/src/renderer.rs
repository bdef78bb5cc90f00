use std::collections::HashMap;

use egui::{Align2, CornerRadius, FontId, Pos2, Rect, Stroke, StrokeKind};
use folio_protocol::{HitTarget, RenderCommand, SharedStr, TextAlign, ThemeToken};

use crate::theme;

/// Opacity and slide applied by an enclosing `BeginReveal`.
#[derive(Debug, Clone, Copy)]
struct Reveal {
    alpha: f32,
    dx: f32,
    dy: f32,
}

impl Reveal {
    fn identity() -> Self {
        Self {
            alpha: 1.0,
            dx: 0.0,
            dy: 0.0,
        }
    }
}

/// Remembers when each reveal key first rendered as visible.
///
/// Start times are dropped when a key renders hidden again, so a re-hidden
/// element replays its entrance.
#[derive(Debug, Default)]
pub struct RevealClock {
    started: HashMap<SharedStr, f64>,
}

impl RevealClock {
    /// Eased progress in `0.0..=1.0` for `key` at `now_ms`.
    fn progress(
        &mut self,
        key: &SharedStr,
        visible: bool,
        now_ms: f64,
        delay_ms: f64,
        duration_ms: f64,
    ) -> f64 {
        if !visible {
            self.started.remove(key);
            return 0.0;
        }
        let start = *self.started.entry(key.clone()).or_insert(now_ms);
        let elapsed = now_ms - start - delay_ms;
        if duration_ms <= 0.0 {
            return if elapsed >= 0.0 { 1.0 } else { 0.0 };
        }
        let t = (elapsed / duration_ms).clamp(0.0, 1.0);
        1.0 - (1.0 - t).powi(3)
    }
}

/// A clickable area in screen space.
pub struct HitRegion {
    pub rect: Rect,
    pub target: HitTarget,
}

/// Result of rendering a command list: includes hit regions for interaction.
pub struct RenderResult {
    pub hit_regions: Vec<HitRegion>,
    /// Some reveal is still mid-animation; the caller should repaint.
    pub animating: bool,
}

impl RenderResult {
    /// The topmost region under `pos`.
    pub fn hit_test(&self, pos: Pos2) -> Option<&HitTarget> {
        self.hit_regions
            .iter()
            .rev()
            .find(|region| region.rect.contains(pos))
            .map(|region| &region.target)
    }
}

fn faded(color: egui::Color32, alpha: f32) -> egui::Color32 {
    if alpha >= 1.0 {
        color
    } else {
        color.gamma_multiply(alpha.max(0.0))
    }
}

/// Render a list of `RenderCommand` into an egui `Painter`.
///
/// `offset` is the screen position of the command list's origin.
/// Returns hit regions for click/hover interaction.
pub fn render_commands(
    painter: &egui::Painter,
    commands: &[RenderCommand],
    offset: Pos2,
    clock: &mut RevealClock,
    now_ms: f64,
) -> RenderResult {
    let mut reveal_stack: Vec<Reveal> = vec![Reveal::identity()];
    let mut hit_regions: Vec<HitRegion> = Vec::new();
    let mut animating = false;

    for cmd in commands {
        let rv = reveal_stack.last().copied().unwrap_or(Reveal::identity());
        let ox = offset.x + rv.dx;
        let oy = offset.y + rv.dy;

        match cmd {
            RenderCommand::DrawRect {
                rect,
                color,
                border_color,
                corner_radius,
                target,
            } => {
                let egui_rect = Rect::from_min_size(
                    Pos2::new(rect.x as f32 + ox, rect.y as f32 + oy),
                    egui::vec2(rect.w as f32, rect.h as f32),
                );
                if let Some(target) = target {
                    hit_regions.push(HitRegion {
                        rect: egui_rect,
                        target: target.clone(),
                    });
                }
                if rect.w < 0.5 || rect.h < 0.5 || rv.alpha <= 0.0 {
                    continue;
                }
                // Cull off-screen
                if !painter.clip_rect().intersects(egui_rect) {
                    continue;
                }

                let radius = CornerRadius::same(corner_radius.clamp(0.0, 255.0) as u8);
                painter.rect_filled(egui_rect, radius, faded(theme::resolve(*color), rv.alpha));
                if let Some(bc) = border_color {
                    painter.rect_stroke(
                        egui_rect,
                        radius,
                        Stroke::new(1.0, faded(theme::resolve(*bc), rv.alpha)),
                        StrokeKind::Inside,
                    );
                }
            }

            RenderCommand::DrawText {
                position,
                text,
                color,
                font_size,
                align,
            } => {
                let size = *font_size as f32;
                if size < 1.0 || rv.alpha <= 0.0 {
                    continue;
                }
                let anchor = match align {
                    TextAlign::Left => Align2::LEFT_TOP,
                    TextAlign::Center => Align2::CENTER_TOP,
                    TextAlign::Right => Align2::RIGHT_TOP,
                };
                // Commands place text by line box; egui places by glyph box.
                let leading = size * 0.25;
                painter.text(
                    Pos2::new(position.x as f32 + ox, position.y as f32 + oy + leading),
                    anchor,
                    text.as_str(),
                    FontId::proportional(size),
                    faded(theme::resolve(*color), rv.alpha),
                );
            }

            RenderCommand::DrawLine {
                from,
                to,
                color,
                width,
            } => {
                if rv.alpha <= 0.0 {
                    continue;
                }
                let p1 = Pos2::new(from.x as f32 + ox, from.y as f32 + oy);
                let p2 = Pos2::new(to.x as f32 + ox, to.y as f32 + oy);
                painter.line_segment(
                    [p1, p2],
                    Stroke::new(*width as f32, faded(theme::resolve(*color), rv.alpha)),
                );
            }

            RenderCommand::DrawImage { rect, uri, alt } => {
                if rv.alpha <= 0.0 {
                    continue;
                }
                let egui_rect = Rect::from_min_size(
                    Pos2::new(rect.x as f32 + ox, rect.y as f32 + oy),
                    egui::vec2(rect.w as f32, rect.h as f32),
                );
                if !painter.clip_rect().intersects(egui_rect) {
                    continue;
                }
                // No image loaders are installed; show a labelled frame.
                painter.rect_filled(
                    egui_rect,
                    CornerRadius::ZERO,
                    faded(theme::resolve(ThemeToken::ImagePlaceholder), rv.alpha),
                );
                let label = if alt.is_empty() { uri.as_str() } else { alt.as_str() };
                painter.text(
                    egui_rect.center(),
                    Align2::CENTER_CENTER,
                    label,
                    FontId::proportional(12.0),
                    faded(theme::resolve(ThemeToken::TextFaint), rv.alpha),
                );
            }

            RenderCommand::BeginReveal {
                key,
                visible,
                offset: slide,
                delay_ms,
                duration_ms,
            } => {
                let p = clock.progress(key, *visible, now_ms, *delay_ms, *duration_ms);
                if *visible && p < 1.0 {
                    animating = true;
                }
                let remaining = (1.0 - p) as f32;
                reveal_stack.push(Reveal {
                    alpha: rv.alpha * p as f32,
                    dx: rv.dx + slide.x as f32 * remaining,
                    dy: rv.dy + slide.y as f32 * remaining,
                });
            }

            RenderCommand::EndReveal => {
                if reveal_stack.len() > 1 {
                    reveal_stack.pop();
                }
            }

            RenderCommand::BeginGroup { .. } | RenderCommand::EndGroup => {
                // Groups are semantic; no visual effect in egui
            }
        }
    }

    RenderResult {
        hit_regions,
        animating,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_reveal_has_no_progress() {
        let mut clock = RevealClock::default();
        let key = SharedStr::from("about");
        assert_eq!(clock.progress(&key, false, 0.0, 0.0, 1000.0), 0.0);
    }

    #[test]
    fn reveal_waits_for_delay_then_eases_to_one() {
        let mut clock = RevealClock::default();
        let key = SharedStr::from("hero.name");
        assert_eq!(clock.progress(&key, true, 1000.0, 300.0, 1000.0), 0.0);
        let mid = clock.progress(&key, true, 1800.0, 300.0, 1000.0);
        assert!(mid > 0.5 && mid < 1.0);
        assert_eq!(clock.progress(&key, true, 2300.0, 300.0, 1000.0), 1.0);
    }

    #[test]
    fn rehiding_restarts_the_entrance() {
        let mut clock = RevealClock::default();
        let key = SharedStr::from("hero");
        clock.progress(&key, true, 0.0, 0.0, 100.0);
        assert_eq!(clock.progress(&key, true, 500.0, 0.0, 100.0), 1.0);
        clock.progress(&key, false, 600.0, 0.0, 100.0);
        assert_eq!(clock.progress(&key, true, 700.0, 0.0, 100.0), 0.0);
    }
}
