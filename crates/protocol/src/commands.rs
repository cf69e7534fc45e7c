use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::theme::ThemeToken;
use crate::types::Gradient;

/// Text carried by a command. Page content is `'static`, so borrowing is the
/// common case; deserialized commands own their strings.
pub type Text = Cow<'static, str>;

/// A single, stateless render instruction.
///
/// A view emits a `Vec<RenderCommand>` for its current state. Renderers walk
/// the list in order; `BeginRegion`/`EndRegion` and `BeginList`/`EndList`
/// pairs nest like elements in a document tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RenderCommand {
    /// Open a structural region (section, header, tab panel, ...).
    BeginRegion {
        class: Text,
        role: Role,
        /// Accessible name of the region, if any.
        label: Option<Text>,
    },

    /// Close the most recently opened region.
    EndRegion,

    /// A run of text in a given typographic style.
    Text {
        text: Text,
        style: TextStyle,
        class: Option<Text>,
        color: ThemeToken,
    },

    /// Preformatted source code. Whitespace is significant.
    Code { text: Text, language: Option<Text> },

    /// One selectable tab control inside a `Role::TabList` region.
    Tab {
        index: usize,
        label: Text,
        selected: bool,
        gradient: Gradient,
    },

    /// Open an unordered list.
    BeginList { class: Text, label: Option<Text> },

    /// A single list entry.
    ListItem { text: Text },

    /// Close the current list.
    EndList,
}

impl RenderCommand {
    pub fn text(text: impl Into<Text>, style: TextStyle, color: ThemeToken) -> Self {
        Self::Text {
            text: text.into(),
            style,
            class: None,
            color,
        }
    }

    pub fn region(class: impl Into<Text>, role: Role) -> Self {
        Self::BeginRegion {
            class: class.into(),
            role,
            label: None,
        }
    }
}

/// Semantic role of a region. Renderers pick their element or widget from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Top-level page section.
    Section,
    /// Introductory banner.
    Banner,
    /// Self-contained block of content.
    Article,
    /// Plain layout grouping without semantics.
    Group,
    /// Container for `Tab` commands.
    TabList,
    /// Content controlled by the selected tab.
    TabPanel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextStyle {
    /// Small caption above a heading.
    Eyebrow,
    Heading,
    Body,
    /// Short label naming the block that follows.
    Label,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    #[test]
    fn tab_json_shape() {
        let cmd = RenderCommand::Tab {
            index: 1,
            label: "Realtime Collaboration".into(),
            selected: true,
            gradient: Gradient::linear(135, Color::rgba(0, 0, 0, 10), Color::rgba(0, 0, 0, 20)),
        };
        let json = serde_json::to_value(&cmd).expect("tab serializes");
        assert_eq!(json["Tab"]["index"], 1);
        assert_eq!(json["Tab"]["label"], "Realtime Collaboration");
        assert_eq!(json["Tab"]["selected"], true);
    }

    #[test]
    fn unit_variants_serialize_as_strings() {
        let json = serde_json::to_string(&RenderCommand::EndRegion).expect("unit variant serializes");
        assert_eq!(json, "\"EndRegion\"");
    }

    #[test]
    fn deserialized_text_is_owned() {
        let cmd: RenderCommand = serde_json::from_str(r#"{"ListItem":{"text":"Redis"}}"#)
            .expect("list item deserializes");
        let RenderCommand::ListItem { text } = &cmd else {
            unreachable!("expected ListItem, got {cmd:?}");
        };
        assert_eq!(text, "Redis");
        assert!(matches!(text, Cow::Owned(_)));
    }

    #[test]
    fn helpers_fill_defaults() {
        let cmd = RenderCommand::region("hero", Role::Banner);
        assert_eq!(
            cmd,
            RenderCommand::BeginRegion {
                class: "hero".into(),
                role: Role::Banner,
                label: None,
            }
        );
        let cmd = RenderCommand::text("hi", TextStyle::Body, ThemeToken::TextPrimary);
        assert!(matches!(cmd, RenderCommand::Text { class: None, .. }));
    }
}
