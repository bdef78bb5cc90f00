use folio_protocol::ThemeToken;

/// Resolved RGBA color for egui rendering.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ResolvedColor {
    const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_color32(self) -> egui::Color32 {
        egui::Color32::from_rgba_unmultiplied(self.r, self.g, self.b, self.a)
    }
}

pub fn resolve(token: ThemeToken) -> egui::Color32 {
    resolve_dark(token).to_color32()
}

fn resolve_dark(token: ThemeToken) -> ResolvedColor {
    // Tailwind gray scale with purple/pink accents
    use ThemeToken::*;
    match token {
        Background => ResolvedColor::rgb(0x03, 0x07, 0x12), // gray-950
        Surface => ResolvedColor::rgb(0x11, 0x18, 0x27),    // gray-900
        Border => ResolvedColor::rgb(0x1f, 0x29, 0x37),     // gray-800
        BorderStrong => ResolvedColor::rgb(0xff, 0xff, 0xff),

        TextPrimary => ResolvedColor::rgb(0xff, 0xff, 0xff),
        TextSecondary => ResolvedColor::rgb(0xd1, 0xd5, 0xdb), // gray-300
        TextMuted => ResolvedColor::rgb(0x9c, 0xa3, 0xaf),     // gray-400
        TextFaint => ResolvedColor::rgb(0x6b, 0x72, 0x80),     // gray-500

        Accent => ResolvedColor::rgb(0xa8, 0x55, 0xf7),          // purple-500
        AccentSecondary => ResolvedColor::rgb(0xec, 0x48, 0x99), // pink-500
        AccentSoft => ResolvedColor::rgba(0xa8, 0x55, 0xf7, 26),

        NavBackground => ResolvedColor::rgba(0x03, 0x07, 0x12, 204),
        NavItemActive => ResolvedColor::rgb(0xff, 0xff, 0xff),
        NavItemInactive => ResolvedColor::rgb(0x9c, 0xa3, 0xaf),

        ButtonPrimary => ResolvedColor::rgb(0xff, 0xff, 0xff),
        ButtonPrimaryText => ResolvedColor::rgb(0x03, 0x07, 0x12),
        ButtonOutline => ResolvedColor::rgb(0x4b, 0x55, 0x63), // gray-600
        BadgeBackground => ResolvedColor::rgb(0x1f, 0x29, 0x37),
        BadgeBorder => ResolvedColor::rgb(0x4b, 0x55, 0x63),
        BadgeText => ResolvedColor::rgb(0xd1, 0xd5, 0xdb),

        TimelineSpine => ResolvedColor::rgb(0xc0, 0x4e, 0xc8), // purple→pink midpoint
        TimelineNode => ResolvedColor::rgb(0x11, 0x18, 0x27),
        TimelineNodeCurrent => ResolvedColor::rgb(0xa8, 0x55, 0xf7),
        CardBackground => ResolvedColor::rgb(0x11, 0x18, 0x27),
        CardBorder => ResolvedColor::rgb(0x1f, 0x29, 0x37),
        CardHighlight => ResolvedColor::rgb(0x4b, 0x55, 0x63),

        CarouselControl => ResolvedColor::rgb(0x9c, 0xa3, 0xaf),
        CarouselControlDisabled => ResolvedColor::rgba(0x37, 0x41, 0x51, 128), // gray-700
        IndicatorActive => ResolvedColor::rgb(0xff, 0xff, 0xff),
        IndicatorInactive => ResolvedColor::rgb(0x37, 0x41, 0x51),
        ImagePlaceholder => ResolvedColor::rgb(0x1f, 0x29, 0x37),
    }
}

/// Dark visuals for the few egui widgets drawn outside the command list.
pub fn folio_dark_visuals() -> egui::Visuals {
    let mut v = egui::Visuals::dark();
    v.panel_fill = resolve(ThemeToken::Background);
    v.window_fill = resolve(ThemeToken::Surface);
    v.extreme_bg_color = resolve(ThemeToken::Background);
    v.hyperlink_color = resolve(ThemeToken::Accent);
    v.selection.bg_fill = egui::Color32::from_rgba_unmultiplied(0xa8, 0x55, 0xf7, 60);
    v.selection.stroke = egui::Stroke::new(1.0, resolve(ThemeToken::Accent));
    v.error_fg_color = egui::Color32::from_rgb(0xf8, 0x71, 0x71);
    v
}
