use folio_protocol::{HitTarget, Rect, SharedStr, TextAlign, ThemeToken};

use super::builder::PageBuilder;
use super::{CONTENT_MAX_WIDTH, MEDIUM_BREAKPOINT, SectionContext, text};

const PADDING_Y: f64 = 80.0;
const HEADING_SIZE: f64 = 36.0;
const BLURB_SIZE: f64 = 20.0;
const CARD_HEIGHT: f64 = 120.0;
const CARD_GAP: f64 = 32.0;

/// Contact: heading, blurb and the email / LinkedIn / GitHub cards. Not
/// animated.
pub(super) fn render(b: &mut PageBuilder, ctx: &SectionContext<'_>, top: f64) -> f64 {
    let contact = &ctx.content.contact;
    let profile = &ctx.content.profile;
    let (x, w) = ctx.column(CONTENT_MAX_WIDTH);
    let mut y = top + PADDING_Y;

    b.text(
        x + w / 2.0,
        y,
        contact.heading.clone(),
        ThemeToken::TextPrimary,
        HEADING_SIZE,
        TextAlign::Center,
    );
    y += text::line_height(HEADING_SIZE) + 32.0;
    y += b.paragraph(
        x,
        y,
        w,
        &contact.blurb,
        ThemeToken::TextSecondary,
        BLURB_SIZE,
        TextAlign::Center,
    ) + 48.0;

    let cards: [(&str, SharedStr); 3] = [
        ("Email", profile.compose_email_url().into()),
        ("LinkedIn", profile.linkedin_url.clone()),
        ("GitHub", profile.github_url.clone()),
    ];
    let columns = if ctx.viewport.width >= MEDIUM_BREAKPOINT { 3 } else { 1 };
    let card_w = (w - CARD_GAP * (columns - 1) as f64) / columns as f64;
    for (i, (label, url)) in cards.into_iter().enumerate() {
        let col = i % columns;
        let row = i / columns;
        let rect = Rect::new(
            x + col as f64 * (card_w + CARD_GAP),
            y + row as f64 * (CARD_HEIGHT + CARD_GAP),
            card_w,
            CARD_HEIGHT,
        );
        b.clickable(
            rect,
            ThemeToken::CardBackground,
            Some(ThemeToken::CardBorder),
            8.0,
            HitTarget::Link(url),
        );
        // Icon disc above the label.
        let icon = Rect::new(rect.x + rect.w / 2.0 - 16.0, rect.y + 24.0, 32.0, 32.0);
        b.rect(icon, ThemeToken::AccentSoft, Some(ThemeToken::Accent), 16.0);
        b.text(
            rect.x + rect.w / 2.0,
            rect.y + 72.0,
            label,
            ThemeToken::TextPrimary,
            16.0,
            TextAlign::Center,
        );
    }
    let rows = cards_rows(3, columns);
    y += rows as f64 * CARD_HEIGHT + (rows - 1) as f64 * CARD_GAP + PADDING_Y;

    y - top
}

fn cards_rows(count: usize, columns: usize) -> usize {
    count.div_ceil(columns)
}
