use folio_protocol::{
    HitTarget, Point, Rect, RenderCommand, SectionId, SharedStr, TextAlign, ThemeToken,
};

use super::text;

/// Visual flavour of a badge row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BadgeStyle {
    /// Accent outline, used for interests and the current role's period.
    Accent,
    /// Muted outline, used for tech tags and past periods.
    Outline,
    /// Filled, used for skills.
    Filled,
}

impl BadgeStyle {
    fn colors(self) -> (ThemeToken, Option<ThemeToken>, ThemeToken) {
        match self {
            BadgeStyle::Accent => (
                ThemeToken::AccentSoft,
                Some(ThemeToken::Accent),
                ThemeToken::Accent,
            ),
            BadgeStyle::Outline => (
                ThemeToken::Background,
                Some(ThemeToken::BadgeBorder),
                ThemeToken::BadgeText,
            ),
            BadgeStyle::Filled => (ThemeToken::BadgeBackground, None, ThemeToken::BadgeText),
        }
    }
}

const BADGE_PAD_X: f64 = 10.0;
const BADGE_PAD_Y: f64 = 3.0;
const BADGE_GAP: f64 = 8.0;

/// Accumulates render commands and the element bounds the layout exposes.
#[derive(Debug, Default)]
pub(crate) struct PageBuilder {
    pub commands: Vec<RenderCommand>,
    pub sections: Vec<(SectionId, Rect)>,
    pub cards: Vec<Rect>,
}

impl PageBuilder {
    pub fn rect(&mut self, rect: Rect, color: ThemeToken, border: Option<ThemeToken>, radius: f64) {
        self.commands.push(RenderCommand::DrawRect {
            rect,
            color,
            border_color: border,
            corner_radius: radius,
            target: None,
        });
    }

    pub fn clickable(
        &mut self,
        rect: Rect,
        color: ThemeToken,
        border: Option<ThemeToken>,
        radius: f64,
        target: HitTarget,
    ) {
        self.commands.push(RenderCommand::DrawRect {
            rect,
            color,
            border_color: border,
            corner_radius: radius,
            target: Some(target),
        });
    }

    pub fn line(&mut self, from: Point, to: Point, color: ThemeToken, width: f64) {
        self.commands.push(RenderCommand::DrawLine {
            from,
            to,
            color,
            width,
        });
    }

    pub fn text(
        &mut self,
        x: f64,
        y: f64,
        content: impl Into<SharedStr>,
        color: ThemeToken,
        font_size: f64,
        align: TextAlign,
    ) {
        self.commands.push(RenderCommand::DrawText {
            position: Point::new(x, y),
            text: content.into(),
            color,
            font_size,
            align,
        });
    }

    /// Wrapped text inside `[x, x + width)`. Returns the height used.
    #[allow(clippy::too_many_arguments)]
    pub fn paragraph(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        content: &str,
        color: ThemeToken,
        font_size: f64,
        align: TextAlign,
    ) -> f64 {
        let lines = text::wrap(content, width, font_size);
        self.lines(x, y, width, &lines, color, font_size, align)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn lines(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        lines: &[String],
        color: ThemeToken,
        font_size: f64,
        align: TextAlign,
    ) -> f64 {
        let lh = text::line_height(font_size);
        let anchor = match align {
            TextAlign::Left => x,
            TextAlign::Center => x + width / 2.0,
            TextAlign::Right => x + width,
        };
        for (i, line) in lines.iter().enumerate() {
            self.text(anchor, y + i as f64 * lh, line.as_str(), color, font_size, align);
        }
        lines.len() as f64 * lh
    }

    /// Lay out a wrapping row of badges. Returns the height used.
    #[allow(clippy::too_many_arguments)]
    pub fn badges(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        items: &[SharedStr],
        style: BadgeStyle,
        font_size: f64,
        centered: bool,
    ) -> f64 {
        if items.is_empty() {
            return 0.0;
        }
        let badge_h = text::line_height(font_size) + 2.0 * BADGE_PAD_Y;
        let widths: Vec<f64> = items
            .iter()
            .map(|item| text::text_width(item, font_size) + 2.0 * BADGE_PAD_X)
            .collect();

        // Group into rows first so rows can be centred.
        let mut rows: Vec<Vec<usize>> = vec![Vec::new()];
        let mut row_w = 0.0;
        for (i, w) in widths.iter().enumerate() {
            let needed = if row_w > 0.0 { row_w + BADGE_GAP + w } else { *w };
            if needed > width && row_w > 0.0 {
                rows.push(vec![i]);
                row_w = *w;
            } else {
                if let Some(row) = rows.last_mut() {
                    row.push(i);
                }
                row_w = needed;
            }
        }

        let (fill, border, text_color) = style.colors();
        for (r, row) in rows.iter().enumerate() {
            let total: f64 =
                row.iter().map(|&i| widths[i]).sum::<f64>() + BADGE_GAP * (row.len() - 1) as f64;
            let mut bx = if centered {
                x + (width - total).max(0.0) / 2.0
            } else {
                x
            };
            let by = y + r as f64 * (badge_h + BADGE_GAP);
            for &i in row {
                self.rect(Rect::new(bx, by, widths[i], badge_h), fill, border, badge_h / 2.0);
                self.text(
                    bx + BADGE_PAD_X,
                    by + BADGE_PAD_Y,
                    items[i].clone(),
                    text_color,
                    font_size,
                    TextAlign::Left,
                );
                bx += widths[i] + BADGE_GAP;
            }
        }
        rows.len() as f64 * badge_h + (rows.len() - 1) as f64 * BADGE_GAP
    }

    pub fn begin_reveal(
        &mut self,
        key: impl Into<SharedStr>,
        visible: bool,
        offset: Point,
        delay_ms: f64,
    ) {
        self.commands.push(RenderCommand::BeginReveal {
            key: key.into(),
            visible,
            offset,
            delay_ms,
            duration_ms: super::REVEAL_DURATION_MS,
        });
    }

    pub fn end_reveal(&mut self) {
        self.commands.push(RenderCommand::EndReveal);
    }

    pub fn begin_group(&mut self, id: impl Into<SharedStr>, label: Option<&str>) {
        self.commands.push(RenderCommand::BeginGroup {
            id: id.into(),
            label: label.map(SharedStr::from),
        });
    }

    pub fn end_group(&mut self) {
        self.commands.push(RenderCommand::EndGroup);
    }
}
