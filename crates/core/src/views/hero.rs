use showcase_protocol::{RenderCommand, Role, TextStyle, ThemeToken};

use crate::content::{HERO_BODY, HERO_EYEBROW, HERO_HEADING};

/// Static banner: eyebrow, heading, and pitch paragraph.
pub fn render_hero() -> Vec<RenderCommand> {
    vec![
        RenderCommand::region("hero", Role::Banner),
        RenderCommand::Text {
            text: HERO_EYEBROW.into(),
            style: TextStyle::Eyebrow,
            class: Some("eyebrow".into()),
            color: ThemeToken::Accent,
        },
        RenderCommand::text(HERO_HEADING, TextStyle::Heading, ThemeToken::TextPrimary),
        RenderCommand::text(HERO_BODY, TextStyle::Body, ThemeToken::TextSecondary),
        RenderCommand::EndRegion,
    ]
}
