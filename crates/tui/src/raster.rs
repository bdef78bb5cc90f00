//! Rasterise pixel-space render commands onto a terminal cell grid.

use folio_protocol::{HitTarget, RenderCommand, TextAlign, ThemeToken};
use ratatui::{buffer::Buffer, layout::Rect, style::Color};

/// Logical pixels covered by one terminal cell.
pub const CELL_WIDTH: f64 = 8.0;
pub const CELL_HEIGHT: f64 = 16.0;

pub fn theme_to_color(token: ThemeToken) -> Color {
    match token {
        ThemeToken::Background => Color::Rgb(3, 7, 18),
        ThemeToken::Surface => Color::Rgb(17, 24, 39),
        ThemeToken::Border => Color::Rgb(31, 41, 55),
        ThemeToken::BorderStrong => Color::White,
        ThemeToken::TextPrimary => Color::White,
        ThemeToken::TextSecondary => Color::Rgb(209, 213, 219),
        ThemeToken::TextMuted => Color::Rgb(156, 163, 175),
        ThemeToken::TextFaint => Color::Rgb(107, 114, 128),
        ThemeToken::Accent => Color::Rgb(168, 85, 247),
        ThemeToken::AccentSecondary => Color::Rgb(236, 72, 153),
        ThemeToken::AccentSoft => Color::Rgb(40, 24, 64),
        ThemeToken::NavBackground => Color::Rgb(3, 7, 18),
        ThemeToken::NavItemActive => Color::White,
        ThemeToken::NavItemInactive => Color::Rgb(156, 163, 175),
        ThemeToken::ButtonPrimary => Color::White,
        ThemeToken::ButtonPrimaryText => Color::Rgb(3, 7, 18),
        ThemeToken::ButtonOutline => Color::Rgb(75, 85, 99),
        ThemeToken::BadgeBackground => Color::Rgb(31, 41, 55),
        ThemeToken::BadgeBorder => Color::Rgb(75, 85, 99),
        ThemeToken::BadgeText => Color::Rgb(209, 213, 219),
        ThemeToken::TimelineSpine => Color::Rgb(192, 78, 200),
        ThemeToken::TimelineNode => Color::Rgb(17, 24, 39),
        ThemeToken::TimelineNodeCurrent => Color::Rgb(168, 85, 247),
        ThemeToken::CardBackground => Color::Rgb(17, 24, 39),
        ThemeToken::CardBorder => Color::Rgb(31, 41, 55),
        ThemeToken::CardHighlight => Color::Rgb(75, 85, 99),
        ThemeToken::CarouselControl => Color::Rgb(156, 163, 175),
        ThemeToken::CarouselControlDisabled => Color::Rgb(55, 65, 81),
        ThemeToken::IndicatorActive => Color::White,
        ThemeToken::IndicatorInactive => Color::Rgb(55, 65, 81),
        ThemeToken::ImagePlaceholder => Color::Rgb(31, 41, 55),
    }
}

/// A clickable cell range.
#[derive(Debug, Clone)]
pub struct HitCell {
    pub area: Rect,
    pub target: HitTarget,
}

/// Topmost target under a cell.
pub fn hit_test(regions: &[HitCell], col: u16, row: u16) -> Option<&HitTarget> {
    regions
        .iter()
        .rev()
        .find(|r| {
            col >= r.area.x
                && col < r.area.x.saturating_add(r.area.width)
                && row >= r.area.y
                && row < r.area.y.saturating_add(r.area.height)
        })
        .map(|r| &r.target)
}

/// Maps pixel coordinates (shifted up by `scroll_px`) into `area`.
struct CellMap {
    area: Rect,
    scroll_px: f64,
}

impl CellMap {
    fn col(&self, x: f64) -> i64 {
        i64::from(self.area.x) + (x / CELL_WIDTH).floor() as i64
    }

    fn row(&self, y: f64) -> i64 {
        i64::from(self.area.y) + ((y - self.scroll_px) / CELL_HEIGHT).floor() as i64
    }

    fn in_bounds(&self, col: i64, row: i64) -> bool {
        col >= i64::from(self.area.x)
            && col < i64::from(self.area.x) + i64::from(self.area.width)
            && row >= i64::from(self.area.y)
            && row < i64::from(self.area.y) + i64::from(self.area.height)
    }

    /// Cell rectangle covering a pixel rect, clipped to the area.
    fn cells(&self, rect: &folio_protocol::Rect) -> Option<Rect> {
        let left = self.col(rect.x).max(i64::from(self.area.x));
        let top = self.row(rect.y).max(i64::from(self.area.y));
        let right = self
            .col(rect.right() - 0.01)
            .min(i64::from(self.area.x) + i64::from(self.area.width) - 1);
        let bottom = self
            .row(rect.bottom() - 0.01)
            .min(i64::from(self.area.y) + i64::from(self.area.height) - 1);
        if right < left || bottom < top {
            return None;
        }
        Some(Rect::new(
            left as u16,
            top as u16,
            (right - left + 1) as u16,
            (bottom - top + 1) as u16,
        ))
    }
}

fn put(buf: &mut Buffer, map: &CellMap, col: i64, row: i64, ch: char, fg: Color) {
    if map.in_bounds(col, row) {
        buf[(col as u16, row as u16)].set_char(ch).set_fg(fg);
    }
}

fn draw_border(buf: &mut Buffer, cells: Rect, fg: Color) {
    if cells.width < 2 || cells.height < 2 {
        return;
    }
    let (l, t) = (cells.x, cells.y);
    let (r, b) = (cells.x + cells.width - 1, cells.y + cells.height - 1);
    for x in l + 1..r {
        buf[(x, t)].set_char('─').set_fg(fg);
        buf[(x, b)].set_char('─').set_fg(fg);
    }
    for y in t + 1..b {
        buf[(l, y)].set_char('│').set_fg(fg);
        buf[(r, y)].set_char('│').set_fg(fg);
    }
    buf[(l, t)].set_char('╭').set_fg(fg);
    buf[(r, t)].set_char('╮').set_fg(fg);
    buf[(l, b)].set_char('╰').set_fg(fg);
    buf[(r, b)].set_char('╯').set_fg(fg);
}

/// Paint `commands` into `area`, with document row `scroll_px` at the top.
///
/// Content inside a hidden reveal is skipped; terminals show entrances
/// without animation. Returns the clickable regions in cell coordinates.
pub fn rasterize(
    buf: &mut Buffer,
    area: Rect,
    commands: &[RenderCommand],
    scroll_px: f64,
) -> Vec<HitCell> {
    let map = CellMap { area, scroll_px };
    let mut hits = Vec::new();
    // Reveal nesting depth, and the depth at which hiding began.
    let mut depth = 0usize;
    let mut hidden_from: Option<usize> = None;

    for cmd in commands {
        match cmd {
            RenderCommand::BeginReveal { visible, .. } => {
                depth += 1;
                if !*visible && hidden_from.is_none() {
                    hidden_from = Some(depth);
                }
                continue;
            }
            RenderCommand::EndReveal => {
                if hidden_from == Some(depth) {
                    hidden_from = None;
                }
                depth = depth.saturating_sub(1);
                continue;
            }
            _ if hidden_from.is_some() => continue,
            _ => {}
        }

        match cmd {
            RenderCommand::DrawRect {
                rect,
                color,
                border_color,
                target,
                ..
            } => {
                let Some(cells) = map.cells(rect) else {
                    continue;
                };
                if let Some(target) = target {
                    hits.push(HitCell {
                        area: cells,
                        target: target.clone(),
                    });
                }
                let bg = theme_to_color(*color);
                for y in cells.y..cells.y + cells.height {
                    for x in cells.x..cells.x + cells.width {
                        buf[(x, y)].set_char(' ').set_bg(bg);
                    }
                }
                if let Some(border) = border_color {
                    draw_border(buf, cells, theme_to_color(*border));
                }
            }
            RenderCommand::DrawText {
                position,
                text,
                color,
                font_size,
                align,
            } => {
                let fg = theme_to_color(*color);
                let len = text.chars().count() as i64;
                // Centre of the line box.
                let row = map.row(position.y + font_size * 0.75);
                let anchor = map.col(position.x);
                let start = match align {
                    TextAlign::Left => anchor,
                    TextAlign::Center => anchor - len / 2,
                    TextAlign::Right => anchor - len,
                };
                for (i, ch) in text.chars().enumerate() {
                    put(buf, &map, start + i as i64, row, ch, fg);
                }
            }
            RenderCommand::DrawLine {
                from, to, color, ..
            } => {
                let fg = theme_to_color(*color);
                let (c0, c1) = (map.col(from.x), map.col(to.x));
                let (r0, r1) = (map.row(from.y), map.row(to.y));
                if c0 == c1 {
                    for row in r0.min(r1)..=r0.max(r1) {
                        put(buf, &map, c0, row, '│', fg);
                    }
                } else if r0 == r1 {
                    for col in c0.min(c1)..=c0.max(c1) {
                        put(buf, &map, col, r0, '─', fg);
                    }
                }
            }
            RenderCommand::DrawImage { rect, alt, .. } => {
                let Some(cells) = map.cells(rect) else {
                    continue;
                };
                let fg = theme_to_color(ThemeToken::ImagePlaceholder);
                for y in cells.y..cells.y + cells.height {
                    for x in cells.x..cells.x + cells.width {
                        buf[(x, y)].set_char('░').set_fg(fg);
                    }
                }
                let label_len = alt.chars().count() as i64;
                let col = i64::from(cells.x) + (i64::from(cells.width) - label_len).max(0) / 2;
                let row = i64::from(cells.y) + i64::from(cells.height) / 2;
                let text_fg = theme_to_color(ThemeToken::TextFaint);
                for (i, ch) in alt.chars().take(cells.width as usize).enumerate() {
                    put(buf, &map, col + i as i64, row, ch, text_fg);
                }
            }
            RenderCommand::BeginGroup { .. }
            | RenderCommand::EndGroup
            | RenderCommand::BeginReveal { .. }
            | RenderCommand::EndReveal => {}
        }
    }

    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_protocol::{Point, SharedStr};

    fn text(x: f64, y: f64, s: &str) -> RenderCommand {
        RenderCommand::DrawText {
            position: Point::new(x, y),
            text: SharedStr::from(s),
            color: ThemeToken::TextPrimary,
            font_size: 16.0,
            align: TextAlign::Left,
        }
    }

    fn row_text(buf: &Buffer, row: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, row)].symbol().to_string())
            .collect()
    }

    #[test]
    fn text_lands_on_the_scrolled_row() {
        let area = Rect::new(0, 0, 20, 4);
        let mut buf = Buffer::empty(area);
        // Line box 32..56 centres on row 2; x 16 is column 2.
        rasterize(&mut buf, area, &[text(16.0, 32.0, "About")], 0.0);
        assert!(row_text(&buf, 2).starts_with("  About"));
    }

    #[test]
    fn hidden_reveal_content_is_skipped() {
        let area = Rect::new(0, 0, 20, 4);
        let mut buf = Buffer::empty(area);
        let commands = vec![
            RenderCommand::BeginReveal {
                key: SharedStr::from("about"),
                visible: false,
                offset: Point::new(0.0, 40.0),
                delay_ms: 0.0,
                duration_ms: 1000.0,
            },
            text(0.0, 0.0, "hidden"),
            RenderCommand::EndReveal,
            text(0.0, 16.0, "shown"),
        ];
        rasterize(&mut buf, area, &commands, 0.0);
        assert!(!row_text(&buf, 0).contains("hidden"));
        assert!(row_text(&buf, 1).starts_with("shown"));
    }

    #[test]
    fn clickable_rects_become_hit_cells() {
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        let commands = vec![RenderCommand::DrawRect {
            rect: folio_protocol::Rect::new(80.0, 32.0, 64.0, 32.0),
            color: ThemeToken::CardBackground,
            border_color: None,
            corner_radius: 0.0,
            target: Some(HitTarget::TimelineCard(1)),
        }];
        let hits = rasterize(&mut buf, area, &commands, 0.0);
        assert_eq!(hits[0].area, Rect::new(10, 2, 8, 2));
        assert_eq!(hit_test(&hits, 12, 3), Some(&HitTarget::TimelineCard(1)));
        assert_eq!(hit_test(&hits, 2, 3), None);
    }

    #[test]
    fn offscreen_rects_are_not_clickable() {
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        let commands = vec![RenderCommand::DrawRect {
            rect: folio_protocol::Rect::new(0.0, 400.0, 64.0, 32.0),
            color: ThemeToken::CardBackground,
            border_color: None,
            corner_radius: 0.0,
            target: Some(HitTarget::CarouselNext),
        }];
        assert!(rasterize(&mut buf, area, &commands, 0.0).is_empty());
    }
}
