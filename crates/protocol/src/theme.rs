use serde::{Deserialize, Serialize};

/// Semantic color tokens resolved by the renderer's active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeToken {
    Background,
    Surface,
    Border,
    BorderStrong,

    TextPrimary,
    TextSecondary,
    TextMuted,
    TextFaint,

    Accent,
    AccentSecondary,
    AccentSoft,

    // Navigation
    NavBackground,
    NavItemActive,
    NavItemInactive,

    // Buttons and badges
    ButtonPrimary,
    ButtonPrimaryText,
    ButtonOutline,
    BadgeBackground,
    BadgeBorder,
    BadgeText,

    // Timeline
    TimelineSpine,
    TimelineNode,
    TimelineNodeCurrent,
    CardBackground,
    CardBorder,
    CardHighlight,

    // Carousel
    CarouselControl,
    CarouselControlDisabled,
    IndicatorActive,
    IndicatorInactive,
    ImagePlaceholder,
}
