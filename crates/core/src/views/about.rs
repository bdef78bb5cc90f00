use folio_protocol::{Point, SectionId, TextAlign, ThemeToken};

use super::builder::{BadgeStyle, PageBuilder};
use super::{CONTENT_MAX_WIDTH, SectionContext, section_visible, text};

const PADDING_Y: f64 = 48.0;
const HEADING_SIZE: f64 = 36.0;
const SUBHEADING_SIZE: f64 = 24.0;
const BODY_SIZE: f64 = 16.0;

pub(super) fn render(b: &mut PageBuilder, ctx: &SectionContext<'_>, top: f64) -> f64 {
    let about = &ctx.content.about;
    let visible = section_visible(ctx.state, SectionId::About);
    let (x, w) = ctx.column(CONTENT_MAX_WIDTH);

    // Measure first so the block can be vertically centred.
    let heading_h = text::line_height(HEADING_SIZE) + 64.0;
    let sub_h = text::wrap(&about.subheading, w, SUBHEADING_SIZE).len() as f64
        * text::line_height(SUBHEADING_SIZE)
        + 16.0;
    let paras_h: f64 = about
        .paragraphs
        .iter()
        .map(|p| text::wrap(p, w, BODY_SIZE).len() as f64 * text::line_height(BODY_SIZE) + 24.0)
        .sum();
    let interests_h = if about.interests.is_empty() {
        0.0
    } else {
        16.0 + text::line_height(18.0) + 12.0 + 64.0
    };
    let content_h = heading_h + sub_h + paras_h + interests_h;
    let height = ctx.viewport.height.max(content_h + 2.0 * PADDING_Y);

    let mut y = top + (height - content_h) / 2.0;
    b.begin_reveal("about", visible, Point::new(0.0, 40.0), 0.0);

    b.begin_reveal("about.heading", visible, Point::new(0.0, 32.0), 200.0);
    b.text(
        x + w / 2.0,
        y,
        about.heading.clone(),
        ThemeToken::TextPrimary,
        HEADING_SIZE,
        TextAlign::Center,
    );
    b.end_reveal();
    y += heading_h;

    b.begin_reveal("about.body", visible, Point::new(0.0, 32.0), 400.0);
    y += b.paragraph(
        x,
        y,
        w,
        &about.subheading,
        ThemeToken::TextPrimary,
        SUBHEADING_SIZE,
        TextAlign::Center,
    ) + 16.0;
    for paragraph in &about.paragraphs {
        y += b.paragraph(
            x,
            y,
            w,
            paragraph,
            ThemeToken::TextSecondary,
            BODY_SIZE,
            TextAlign::Center,
        ) + 24.0;
    }
    b.end_reveal();

    if !about.interests.is_empty() {
        b.begin_reveal("about.interests", visible, Point::new(0.0, 32.0), 600.0);
        y += 16.0;
        b.text(
            x + w / 2.0,
            y,
            "What I'm passionate about:",
            ThemeToken::TextPrimary,
            18.0,
            TextAlign::Center,
        );
        y += text::line_height(18.0) + 12.0;
        b.badges(x, y, w, &about.interests, BadgeStyle::Accent, 13.0, true);
        b.end_reveal();
    }

    b.end_reveal();
    height
}
