use folio_protocol::{
    HitTarget, Point, ProjectEntry, ProjectImage, Rect, RenderCommand, SectionId, TextAlign,
    ThemeToken,
};

use super::builder::{BadgeStyle, PageBuilder};
use super::{LARGE_BREAKPOINT, MEDIUM_BREAKPOINT, SectionContext, section_visible, text};

const PADDING_Y: f64 = 80.0;
const HEADING_SIZE: f64 = 36.0;
const GRID_MAX_WIDTH: f64 = 1152.0;
const GRID_GAP: f64 = 32.0;
const CARD_HEIGHT: f64 = 420.0;
const CARD_PADDING: f64 = 20.0;
const CONTROL_SIZE: f64 = 48.0;
const CONTROL_GAP: f64 = 16.0;
const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Projects: the carousel window, prev/next controls and the pagination
/// indicator.
pub(super) fn render(b: &mut PageBuilder, ctx: &SectionContext<'_>, top: f64) -> f64 {
    let visible = section_visible(ctx.state, SectionId::Projects);
    let carousel = ctx.state.carousel();
    let projects = carousel.visible_window(&ctx.content.projects);

    let (x, w) = ctx.column(GRID_MAX_WIDTH);
    let columns = if ctx.viewport.width >= LARGE_BREAKPOINT {
        3
    } else if ctx.viewport.width >= MEDIUM_BREAKPOINT {
        2
    } else {
        1
    };
    // Keep room for the side controls when the page is wide enough.
    let room_for_controls = x >= CONTROL_SIZE + CONTROL_GAP;
    let rows = projects.len().div_ceil(columns).max(1);
    let card_w = (w - GRID_GAP * (columns - 1) as f64) / columns as f64;
    let grid_h = rows as f64 * CARD_HEIGHT + (rows - 1) as f64 * GRID_GAP;
    let heading_h = text::line_height(HEADING_SIZE) + 64.0;
    let indicator_h = 32.0 + text::line_height(14.0);
    let content_h = heading_h + grid_h + indicator_h;
    let height = ctx.viewport.height.max(content_h + 2.0 * PADDING_Y);

    b.rect(
        Rect::new(0.0, top, ctx.viewport.width, height),
        ThemeToken::Surface,
        None,
        0.0,
    );

    let mut y = top + (height - content_h) / 2.0;
    b.begin_reveal("projects", visible, Point::new(0.0, 40.0), 0.0);

    b.begin_reveal("projects.heading", visible, Point::new(0.0, 32.0), 200.0);
    b.text(
        x + w / 2.0,
        y,
        "Projects",
        ThemeToken::TextPrimary,
        HEADING_SIZE,
        TextAlign::Center,
    );
    b.end_reveal();
    y += heading_h;

    b.begin_reveal("projects.carousel", visible, Point::new(0.0, 32.0), 400.0);
    for (i, project) in projects.iter().enumerate() {
        let col = i % columns;
        let row = i / columns;
        let card = Rect::new(
            x + col as f64 * (card_w + GRID_GAP),
            y + row as f64 * (CARD_HEIGHT + GRID_GAP),
            card_w,
            CARD_HEIGHT,
        );
        render_card(b, ctx, project, card);
    }

    let control_y = y + grid_h / 2.0 - CONTROL_SIZE / 2.0;
    let (prev_x, next_x) = if room_for_controls {
        (
            x - CONTROL_GAP - CONTROL_SIZE,
            x + w + CONTROL_GAP,
        )
    } else {
        (x + 8.0, x + w - 8.0 - CONTROL_SIZE)
    };
    control(
        b,
        Rect::new(prev_x, control_y, CONTROL_SIZE, CONTROL_SIZE),
        "‹",
        carousel.can_go_prev().then_some(HitTarget::CarouselPrev),
    );
    control(
        b,
        Rect::new(next_x, control_y, CONTROL_SIZE, CONTROL_SIZE),
        "›",
        carousel.can_go_next().then_some(HitTarget::CarouselNext),
    );
    y += grid_h + 32.0;

    // Pagination indicator: range label followed by one marker per position.
    let label = carousel.label();
    let markers = carousel.markers();
    let label_w = text::text_width(&label, 14.0);
    let markers_w: f64 = markers.iter().map(|&on| if on { 32.0 } else { 8.0 }).sum::<f64>()
        + 8.0 * markers.len().saturating_sub(1) as f64;
    let total = label_w + 16.0 + markers_w;
    let mut ix = x + (w - total) / 2.0;
    b.text(ix, y, label, ThemeToken::TextMuted, 14.0, TextAlign::Left);
    ix += label_w + 16.0;
    let marker_y = y + text::line_height(14.0) / 2.0 - 2.0;
    for on in markers {
        let mw = if on { 32.0 } else { 8.0 };
        let color = if on {
            ThemeToken::IndicatorActive
        } else {
            ThemeToken::IndicatorInactive
        };
        b.rect(Rect::new(ix, marker_y, mw, 4.0), color, None, 2.0);
        ix += mw + 8.0;
    }
    b.end_reveal();

    b.end_reveal();
    height
}

fn control(b: &mut PageBuilder, rect: Rect, glyph: &str, target: Option<HitTarget>) {
    let text_color = if target.is_some() {
        ThemeToken::CarouselControl
    } else {
        ThemeToken::CarouselControlDisabled
    };
    match target {
        Some(target) => b.clickable(
            rect,
            ThemeToken::NavBackground,
            Some(ThemeToken::Border),
            CONTROL_SIZE / 2.0,
            target,
        ),
        None => b.rect(
            rect,
            ThemeToken::NavBackground,
            Some(ThemeToken::Border),
            CONTROL_SIZE / 2.0,
        ),
    }
    b.text(
        rect.x + rect.w / 2.0,
        rect.y + (rect.h - text::line_height(24.0)) / 2.0,
        glyph,
        text_color,
        24.0,
        TextAlign::Center,
    );
}

fn render_card(b: &mut PageBuilder, ctx: &SectionContext<'_>, project: &ProjectEntry, card: Rect) {
    b.begin_group(format!("project.{}", project.title), Some(project.title.as_str()));
    match project.outbound_link() {
        Some(link) => b.clickable(
            card,
            ThemeToken::Background,
            Some(ThemeToken::CardBorder),
            8.0,
            HitTarget::Link(ctx.resolver.resolve(link).into()),
        ),
        None => b.rect(card, ThemeToken::Background, Some(ThemeToken::CardBorder), 8.0),
    }

    let image = Rect::new(card.x, card.y, card.w, card.w * 9.0 / 16.0);
    b.rect(image, ThemeToken::ImagePlaceholder, None, 8.0);
    match &project.image {
        ProjectImage::Single(path) => b.commands.push(RenderCommand::DrawImage {
            rect: image,
            uri: ctx.resolver.resolve(path).into(),
            alt: project.title.clone(),
        }),
        ProjectImage::Pair(left, right) => {
            let half = image.w / 2.0;
            for (k, path) in [left, right].into_iter().enumerate() {
                b.commands.push(RenderCommand::DrawImage {
                    rect: Rect::new(image.x + k as f64 * half, image.y, half, image.h),
                    uri: ctx.resolver.resolve(path).into(),
                    alt: format!("{} {}", project.title, k + 1).into(),
                });
            }
        }
        ProjectImage::Placeholder => b.commands.push(RenderCommand::DrawImage {
            rect: image,
            uri: ctx.resolver.resolve(PLACEHOLDER_IMAGE).into(),
            alt: project.title.clone(),
        }),
    }

    let x = card.x + CARD_PADDING;
    let inner = card.w - 2.0 * CARD_PADDING;
    let mut y = image.bottom() + CARD_PADDING;
    let title = text::clamp_lines(&project.title, inner, 18.0, 2);
    y += b.lines(x, y, inner, &title, ThemeToken::TextPrimary, 18.0, TextAlign::Left) + 4.0;
    let description = text::clamp_lines(&project.description, inner, 14.0, 3);
    y += b.lines(
        x,
        y,
        inner,
        &description,
        ThemeToken::TextMuted,
        14.0,
        TextAlign::Left,
    ) + 12.0;
    b.badges(x, y, inner, &project.tech, BadgeStyle::Outline, 11.0, false);
    b.end_group();
}
