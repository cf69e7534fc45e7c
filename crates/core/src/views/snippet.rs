use showcase_protocol::{RenderCommand, Role, TextStyle, ThemeToken};

use crate::content::{SAMPLE_ARIA_LABEL, SAMPLE_LABEL, SAMPLE_LANGUAGE, SAMPLE_SNIPPET};

/// The labelled code sample block.
pub fn render_snippet() -> Vec<RenderCommand> {
    vec![
        RenderCommand::BeginRegion {
            class: "snippet".into(),
            role: Role::Article,
            label: Some(SAMPLE_ARIA_LABEL.into()),
        },
        RenderCommand::Text {
            text: SAMPLE_LABEL.into(),
            style: TextStyle::Label,
            class: Some("snippet__label".into()),
            color: ThemeToken::TextMuted,
        },
        RenderCommand::Code {
            text: SAMPLE_SNIPPET.into(),
            language: Some(SAMPLE_LANGUAGE.into()),
        },
        RenderCommand::EndRegion,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_is_passed_through_verbatim() {
        let code = render_snippet().into_iter().find_map(|cmd| match cmd {
            RenderCommand::Code { text, .. } => Some(text),
            _ => None,
        });
        assert_eq!(code.as_deref(), Some(SAMPLE_SNIPPET));
    }
}
