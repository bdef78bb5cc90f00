use folio_protocol::{Content, HitTarget, Point, Rect, RenderCommand, SectionId, TextAlign, ThemeToken};

use super::builder::PageBuilder;
use super::{MEDIUM_BREAKPOINT, NAV_HEIGHT, PAGE_PADDING, text};
use crate::state::PortfolioState;

const BRAND_SIZE: f64 = 20.0;
const ITEM_SIZE: f64 = 16.0;
const ITEM_GAP: f64 = 24.0;

/// The fixed navigation bar, in screen coordinates.
///
/// Section links are hidden below the medium breakpoint; the active section
/// is highlighted.
pub fn render_nav(content: &Content, state: &PortfolioState, width: f64) -> Vec<RenderCommand> {
    let mut b = PageBuilder::default();
    b.begin_group("nav", Some("Navigation"));
    b.rect(
        Rect::new(0.0, 0.0, width, NAV_HEIGHT),
        ThemeToken::NavBackground,
        None,
        0.0,
    );
    b.line(
        Point::new(0.0, NAV_HEIGHT),
        Point::new(width, NAV_HEIGHT),
        ThemeToken::Border,
        1.0,
    );

    let text_y = |size: f64| (NAV_HEIGHT - text::line_height(size)) / 2.0;
    b.text(
        PAGE_PADDING,
        text_y(BRAND_SIZE),
        content.profile.name.clone(),
        ThemeToken::TextPrimary,
        BRAND_SIZE,
        TextAlign::Left,
    );

    if width >= MEDIUM_BREAKPOINT {
        let widths: Vec<f64> = SectionId::ALL
            .iter()
            .map(|id| text::text_width(id.nav_label(), ITEM_SIZE))
            .collect();
        let total = widths.iter().sum::<f64>() + ITEM_GAP * (widths.len() - 1) as f64;
        let mut x = width - PAGE_PADDING - total;
        for (id, w) in SectionId::ALL.into_iter().zip(widths) {
            let color = if state.active_section() == id {
                ThemeToken::NavItemActive
            } else {
                ThemeToken::NavItemInactive
            };
            b.clickable(
                Rect::new(x - 4.0, 0.0, w + 8.0, NAV_HEIGHT),
                ThemeToken::NavBackground,
                None,
                0.0,
                HitTarget::Nav(id),
            );
            b.text(x, text_y(ITEM_SIZE), id.nav_label(), color, ITEM_SIZE, TextAlign::Left);
            x += w + ITEM_GAP;
        }
    }
    b.end_group();
    b.commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FolioConfig;
    use crate::content::reference_content;
    use crate::layout::StaticLayout;
    use crate::state::PortfolioEvent;

    fn item_color(commands: &[RenderCommand], label: &str) -> Option<ThemeToken> {
        commands.iter().find_map(|c| match c {
            RenderCommand::DrawText { text, color, .. } if *text == label => Some(*color),
            _ => None,
        })
    }

    #[test]
    fn highlights_active_section() {
        let content = reference_content();
        let mut state = PortfolioState::new(FolioConfig::default(), 2, 6);
        let layout = StaticLayout::from_section_tops(&[
            (SectionId::Hero, 0.0),
            (SectionId::About, 800.0),
        ]);
        state.handle(PortfolioEvent::Scrolled { scroll_y: 750.0 }, &layout, 0.0);

        let commands = render_nav(&content, &state, 1280.0);
        assert_eq!(item_color(&commands, "About"), Some(ThemeToken::NavItemActive));
        assert_eq!(item_color(&commands, "Home"), Some(ThemeToken::NavItemInactive));
    }

    #[test]
    fn narrow_bar_hides_section_links() {
        let content = reference_content();
        let state = PortfolioState::new(FolioConfig::default(), 2, 6);
        let commands = render_nav(&content, &state, 480.0);
        assert!(commands.iter().all(|c| c.target().is_none()));
    }
}
