use serde::{Deserialize, Serialize};

/// Semantic color tokens resolved by the renderer's active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeToken {
    Background,
    Surface,
    Border,

    TextPrimary,
    TextSecondary,
    TextMuted,

    Accent,
    Highlight,

    // Code sample
    CodeBackground,
    CodeText,

    // Timeline tabs
    TabActive,
    TabIdle,
}

impl ThemeToken {
    pub const ALL: [ThemeToken; 12] = [
        ThemeToken::Background,
        ThemeToken::Surface,
        ThemeToken::Border,
        ThemeToken::TextPrimary,
        ThemeToken::TextSecondary,
        ThemeToken::TextMuted,
        ThemeToken::Accent,
        ThemeToken::Highlight,
        ThemeToken::CodeBackground,
        ThemeToken::CodeText,
        ThemeToken::TabActive,
        ThemeToken::TabIdle,
    ];

    /// Kebab-case name, used for CSS custom properties.
    pub fn css_name(self) -> &'static str {
        match self {
            ThemeToken::Background => "background",
            ThemeToken::Surface => "surface",
            ThemeToken::Border => "border",
            ThemeToken::TextPrimary => "text-primary",
            ThemeToken::TextSecondary => "text-secondary",
            ThemeToken::TextMuted => "text-muted",
            ThemeToken::Accent => "accent",
            ThemeToken::Highlight => "highlight",
            ThemeToken::CodeBackground => "code-background",
            ThemeToken::CodeText => "code-text",
            ThemeToken::TabActive => "tab-active",
            ThemeToken::TabIdle => "tab-idle",
        }
    }
}
