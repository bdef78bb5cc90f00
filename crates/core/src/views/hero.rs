use folio_protocol::{HitTarget, Point, Rect, RenderCommand, SectionId, TextAlign, ThemeToken};

use super::builder::PageBuilder;
use super::{NAV_HEIGHT, SectionContext, section_visible, text};

const PORTRAIT_SIZE: f64 = 256.0;
const NAME_SIZE_WIDE: f64 = 72.0;
const NAME_SIZE_NARROW: f64 = 48.0;
const HEADLINE_SIZE: f64 = 24.0;
const BUTTON_HEIGHT: f64 = 44.0;
const BUTTON_GAP: f64 = 16.0;
const BUTTON_FONT: f64 = 16.0;
const GAP: f64 = 48.0;

/// Hero: portrait, name, headline and the three contact buttons.
pub(super) fn render(b: &mut PageBuilder, ctx: &SectionContext<'_>, top: f64) -> f64 {
    let profile = &ctx.content.profile;
    let visible = section_visible(ctx.state, SectionId::Hero);
    let wide = ctx.is_wide();
    let (col_x, col_w) = ctx.column(1152.0);

    let name_size = if wide { NAME_SIZE_WIDE } else { NAME_SIZE_NARROW };
    let buttons = [
        ("GitHub", HitTarget::Link(profile.github_url.clone()), false),
        ("LinkedIn", HitTarget::Link(profile.linkedin_url.clone()), false),
        (
            "Get In Touch",
            HitTarget::Link(profile.compose_email_url().into()),
            true,
        ),
    ];
    let button_widths: Vec<f64> = buttons
        .iter()
        .map(|(label, _, _)| text::text_width(label, BUTTON_FONT) + 48.0)
        .collect();
    let buttons_inline = wide || button_widths.iter().sum::<f64>() + 2.0 * BUTTON_GAP <= col_w;
    let buttons_h = if buttons_inline {
        BUTTON_HEIGHT
    } else {
        3.0 * BUTTON_HEIGHT + 2.0 * BUTTON_GAP
    };
    let text_block_h =
        text::line_height(name_size) + 16.0 + text::line_height(HEADLINE_SIZE) + 24.0 + buttons_h;

    let block_h = if wide {
        PORTRAIT_SIZE.max(text_block_h)
    } else {
        PORTRAIT_SIZE + GAP + text_block_h
    };
    let height = ctx.viewport.height.max(block_h + 2.0 * NAV_HEIGHT);
    let block_top = top + (height - block_h) / 2.0;

    let (portrait_x, portrait_y, text_x, text_y, text_w, align) = if wide {
        let name_w = text::text_width(&profile.name, name_size);
        let text_w = name_w.max(button_widths.iter().sum::<f64>() + 2.0 * BUTTON_GAP);
        let total = PORTRAIT_SIZE + GAP + text_w;
        let left = col_x + (col_w - total).max(0.0) / 2.0;
        (
            left,
            block_top + (block_h - PORTRAIT_SIZE) / 2.0,
            left + PORTRAIT_SIZE + GAP,
            block_top + (block_h - text_block_h) / 2.0,
            text_w,
            TextAlign::Left,
        )
    } else {
        (
            col_x + (col_w - PORTRAIT_SIZE) / 2.0,
            block_top,
            col_x,
            block_top + PORTRAIT_SIZE + GAP,
            col_w,
            TextAlign::Center,
        )
    };

    b.begin_reveal("hero", visible, Point::new(0.0, 40.0), 0.0);

    b.begin_reveal("hero.portrait", visible, Point::new(0.0, 24.0), 200.0);
    let frame = Rect::new(portrait_x, portrait_y, PORTRAIT_SIZE, PORTRAIT_SIZE);
    b.rect(
        frame.inset(-4.0),
        ThemeToken::Accent,
        None,
        PORTRAIT_SIZE / 2.0 + 4.0,
    );
    b.commands.push(RenderCommand::DrawImage {
        rect: frame,
        uri: ctx.resolver.resolve(&profile.portrait).into(),
        alt: profile.name.clone(),
    });
    b.end_reveal();

    let mut y = text_y;
    b.begin_reveal("hero.name", visible, Point::new(0.0, 32.0), 300.0);
    let lines = text::wrap(&profile.name, text_w, name_size);
    y += b.lines(text_x, y, text_w, &lines, ThemeToken::TextPrimary, name_size, align) + 16.0;
    b.end_reveal();

    b.begin_reveal("hero.headline", visible, Point::new(0.0, 32.0), 400.0);
    y += b.paragraph(
        text_x,
        y,
        text_w,
        &profile.headline,
        ThemeToken::TextSecondary,
        HEADLINE_SIZE,
        align,
    ) + 24.0;
    b.end_reveal();

    b.begin_reveal("hero.buttons", visible, Point::new(0.0, 32.0), 600.0);
    let row_w = button_widths.iter().sum::<f64>() + 2.0 * BUTTON_GAP;
    let mut bx = match align {
        TextAlign::Left => text_x,
        _ => text_x + (text_w - row_w).max(0.0) / 2.0,
    };
    for ((label, target, primary), w) in buttons.into_iter().zip(button_widths) {
        let (rect, next_x, next_y) = if buttons_inline {
            (Rect::new(bx, y, w, BUTTON_HEIGHT), bx + w + BUTTON_GAP, y)
        } else {
            let x = text_x + (text_w - w) / 2.0;
            (
                Rect::new(x, y, w, BUTTON_HEIGHT),
                bx,
                y + BUTTON_HEIGHT + BUTTON_GAP,
            )
        };
        let (fill, border, text_color) = if primary {
            (ThemeToken::ButtonPrimary, None, ThemeToken::ButtonPrimaryText)
        } else {
            (
                ThemeToken::Background,
                Some(ThemeToken::ButtonOutline),
                ThemeToken::TextPrimary,
            )
        };
        b.clickable(rect, fill, border, 6.0, target);
        b.text(
            rect.x + rect.w / 2.0,
            rect.y + (BUTTON_HEIGHT - text::line_height(BUTTON_FONT)) / 2.0,
            label,
            text_color,
            BUTTON_FONT,
            TextAlign::Center,
        );
        bx = next_x;
        y = next_y;
    }
    b.end_reveal();

    b.end_reveal();
    height
}
