use folio_protocol::{HitTarget, Point, Rect, SectionId, Side, TextAlign, ThemeToken, TimelineEntry};

use super::builder::{BadgeStyle, PageBuilder};
use super::{CONTENT_MAX_WIDTH, SectionContext, section_visible, text};

const PADDING_Y: f64 = 80.0;
const HEADING_SIZE: f64 = 36.0;
const CARD_PADDING: f64 = 24.0;
const CARD_GAP: f64 = 48.0;
const SPINE_WIDTH: f64 = 4.0;
const NODE_SIZE: f64 = 24.0;
/// Node centre sits this far below the card top.
const NODE_OFFSET: f64 = 32.0;
const CARD_STAGGER_MS: f64 = 200.0;

const TITLE_SIZE: f64 = 20.0;
const ORG_SIZE: f64 = 18.0;
const META_SIZE: f64 = 14.0;
const BODY_SIZE: f64 = 16.0;
const DETAIL_SIZE: f64 = 14.0;
const BADGE_SIZE: f64 = 12.0;

/// Career roadmap: a vertical spine with one card per timeline entry.
///
/// On wide viewports cards sit on their entry's side of the spine and take
/// 5/12 of the column; on narrow ones they span the full column.
pub(super) fn render(b: &mut PageBuilder, ctx: &SectionContext<'_>, top: f64) -> f64 {
    let visible = section_visible(ctx.state, SectionId::Experience);
    let (x, w) = ctx.column(CONTENT_MAX_WIDTH);
    let wide = ctx.is_wide();
    let spine_x = x + w / 2.0;

    // Measure cards first so the block can be vertically centred.
    let card_w = if wide { w * 5.0 / 12.0 } else { w };
    let expanded = ctx.state.expanded_job();
    let card_heights: Vec<f64> = ctx
        .content
        .timeline
        .iter()
        .enumerate()
        .map(|(i, entry)| card_height(entry, card_w, expanded == Some(i)))
        .collect();
    let cards_h = card_heights.iter().sum::<f64>()
        + CARD_GAP * card_heights.len().saturating_sub(1) as f64;
    let heading_h = text::line_height(HEADING_SIZE) + 64.0;
    let footer_h = 48.0 + 16.0 + text::line_height(13.0);
    let content_h = heading_h + cards_h + footer_h;
    let height = ctx.viewport.height.max(content_h + 2.0 * PADDING_Y);

    let mut y = top + (height - content_h) / 2.0;
    b.begin_reveal("experience", visible, Point::new(0.0, 40.0), 0.0);

    b.begin_reveal("experience.heading", visible, Point::new(0.0, 32.0), 200.0);
    b.text(
        x + w / 2.0,
        y,
        "Career Roadmap",
        ThemeToken::TextPrimary,
        HEADING_SIZE,
        TextAlign::Center,
    );
    b.end_reveal();
    y += heading_h;

    b.begin_reveal("experience.timeline", visible, Point::new(0.0, 32.0), 400.0);
    let spine_top = y;
    b.rect(
        Rect::new(spine_x - SPINE_WIDTH / 2.0, spine_top, SPINE_WIDTH, cards_h + 48.0),
        ThemeToken::TimelineSpine,
        None,
        SPINE_WIDTH / 2.0,
    );

    for (index, (entry, &card_h)) in ctx.content.timeline.iter().zip(&card_heights).enumerate() {
        let is_expanded = expanded == Some(index);
        let card_x = match (wide, entry.side) {
            (false, _) => x,
            (true, Side::Left) => spine_x - 32.0 - card_w,
            (true, Side::Right) => spine_x + 32.0,
        };
        let card = Rect::new(card_x, y, card_w, card_h);

        // Node on the spine.
        let node = Rect::new(
            spine_x - NODE_SIZE / 2.0,
            y + NODE_OFFSET - NODE_SIZE / 2.0,
            NODE_SIZE,
            NODE_SIZE,
        );
        let node_color = if entry.is_current {
            ThemeToken::TimelineNodeCurrent
        } else {
            ThemeToken::TimelineNode
        };
        b.rect(node, node_color, Some(ThemeToken::BorderStrong), NODE_SIZE / 2.0);

        let slide = match entry.side {
            Side::Left => -40.0,
            Side::Right => 40.0,
        };
        b.begin_reveal(
            format!("experience.card.{index}"),
            visible,
            Point::new(slide, 0.0),
            index as f64 * CARD_STAGGER_MS,
        );
        render_card(b, entry, index, card, is_expanded);
        b.end_reveal();

        b.cards.push(card);
        y += card_h + CARD_GAP;
    }
    y = y - CARD_GAP + 48.0;

    // Starting point.
    b.rect(
        Rect::new(spine_x - 8.0, y, 16.0, 16.0),
        ThemeToken::TimelineNode,
        Some(ThemeToken::Border),
        8.0,
    );
    b.text(
        spine_x,
        y + 32.0,
        "The journey begins...",
        ThemeToken::TextFaint,
        13.0,
        TextAlign::Center,
    );
    b.end_reveal();

    b.end_reveal();
    height
}

fn card_height(entry: &TimelineEntry, card_w: f64, expanded: bool) -> f64 {
    let inner = card_w - 2.0 * CARD_PADDING;
    let mut h = CARD_PADDING;
    h += badge_h() + 8.0;
    h += wrapped_h(&entry.title, inner, TITLE_SIZE);
    h += wrapped_h(&entry.organization, inner, ORG_SIZE);
    h += text::line_height(META_SIZE) + 4.0 + CARD_PADDING;
    h += wrapped_h(&entry.summary, inner, BODY_SIZE) + 16.0;
    if expanded {
        h += details_h(entry, inner);
    }
    h += skills_h(entry, inner);
    h + CARD_PADDING
}

fn badge_h() -> f64 {
    text::line_height(BADGE_SIZE) + 6.0
}

fn wrapped_h(content: &str, width: f64, size: f64) -> f64 {
    text::wrap(content, width, size).len() as f64 * text::line_height(size)
}

fn details_h(entry: &TimelineEntry, inner: f64) -> f64 {
    let bullets: f64 = entry
        .details
        .iter()
        .map(|d| wrapped_h(d, inner - 16.0, DETAIL_SIZE) + 4.0)
        .sum();
    16.0 + text::line_height(DETAIL_SIZE) + 8.0 + bullets + 16.0
}

fn skills_h(entry: &TimelineEntry, inner: f64) -> f64 {
    // Measured by laying the badges out into a scratch builder.
    let mut scratch = PageBuilder::default();
    scratch.badges(0.0, 0.0, inner, &entry.skills, BadgeStyle::Filled, BADGE_SIZE, false)
}

fn render_card(b: &mut PageBuilder, entry: &TimelineEntry, index: usize, card: Rect, expanded: bool) {
    let border = if expanded {
        ThemeToken::CardHighlight
    } else if entry.is_current {
        ThemeToken::Accent
    } else {
        ThemeToken::CardBorder
    };
    b.begin_group(format!("timeline.{index}"), Some(entry.title.as_str()));
    b.clickable(
        card,
        ThemeToken::CardBackground,
        Some(border),
        8.0,
        HitTarget::TimelineCard(index),
    );

    let x = card.x + CARD_PADDING;
    let inner = card.w - 2.0 * CARD_PADDING;
    let mut y = card.y + CARD_PADDING;

    let period_style = if entry.is_current {
        BadgeStyle::Accent
    } else {
        BadgeStyle::Outline
    };
    b.badges(
        x,
        y,
        inner,
        std::slice::from_ref(&entry.period),
        period_style,
        BADGE_SIZE,
        false,
    );
    if entry.is_current {
        let label = "Current";
        let w = text::text_width(label, BADGE_SIZE) + 20.0;
        b.rect(
            Rect::new(card.right() - CARD_PADDING - w, y, w, badge_h()),
            ThemeToken::AccentSecondary,
            None,
            badge_h() / 2.0,
        );
        b.text(
            card.right() - CARD_PADDING - w + 10.0,
            y + 3.0,
            label,
            ThemeToken::TextPrimary,
            BADGE_SIZE,
            TextAlign::Left,
        );
    }
    y += badge_h() + 8.0;

    y += b.paragraph(x, y, inner, &entry.title, ThemeToken::TextPrimary, TITLE_SIZE, TextAlign::Left);
    y += b.paragraph(
        x,
        y,
        inner,
        &entry.organization,
        ThemeToken::TextSecondary,
        ORG_SIZE,
        TextAlign::Left,
    );
    b.text(
        x,
        y + 4.0,
        entry.location.clone(),
        ThemeToken::TextMuted,
        META_SIZE,
        TextAlign::Left,
    );
    y += text::line_height(META_SIZE) + 4.0 + CARD_PADDING;

    y += b.paragraph(
        x,
        y,
        inner,
        &entry.summary,
        ThemeToken::TextSecondary,
        BODY_SIZE,
        TextAlign::Left,
    ) + 16.0;

    if expanded {
        y += 16.0;
        b.line(
            Point::new(x, y - 8.0),
            Point::new(x + inner, y - 8.0),
            ThemeToken::Border,
            1.0,
        );
        b.text(
            x,
            y,
            "Key Responsibilities",
            ThemeToken::TextPrimary,
            DETAIL_SIZE,
            TextAlign::Left,
        );
        y += text::line_height(DETAIL_SIZE) + 8.0;
        for detail in &entry.details {
            b.text(x, y, "•", ThemeToken::TextMuted, DETAIL_SIZE, TextAlign::Left);
            y += b.paragraph(
                x + 16.0,
                y,
                inner - 16.0,
                detail,
                ThemeToken::TextMuted,
                DETAIL_SIZE,
                TextAlign::Left,
            ) + 4.0;
        }
        y += 16.0;
    }

    b.badges(x, y, inner, &entry.skills, BadgeStyle::Filled, BADGE_SIZE, false);
    b.end_group();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::reference_content;

    #[test]
    fn expanded_height_includes_every_detail() {
        let content = reference_content();
        let entry = &content.timeline[1];
        let collapsed = card_height(entry, 400.0, false);
        let expanded = card_height(entry, 400.0, true);
        let min_growth = entry.details.len() as f64 * text::line_height(DETAIL_SIZE);
        assert!(expanded - collapsed >= min_growth);
    }
}
