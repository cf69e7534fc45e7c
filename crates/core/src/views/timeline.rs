use showcase_protocol::{RenderCommand, Role, TextStyle, ThemeToken};

use crate::content::{TECH_ARIA_LABEL, TIMELINE_ARIA_LABEL};
use crate::state::Showcase;

/// Tab strip plus the panel for the active phase.
///
/// Each phase gets one `Tab` command, in roadmap order, and exactly one of
/// them is `selected`. The panel below shows only the active phase.
pub fn render_timeline(showcase: &Showcase) -> Vec<RenderCommand> {
    let timeline = showcase.timeline();
    let active = showcase.active_phase();

    let mut commands = Vec::with_capacity(timeline.len() + active.tech.len() + 12);
    commands.push(RenderCommand::BeginRegion {
        class: "timeline".into(),
        role: Role::Article,
        label: Some(TIMELINE_ARIA_LABEL.into()),
    });

    commands.push(RenderCommand::region("timeline__tabs", Role::TabList));
    for entry in &timeline {
        commands.push(RenderCommand::Tab {
            index: entry.index.get(),
            label: entry.phase.phase.into(),
            selected: entry.active,
            gradient: entry.gradient,
        });
    }
    commands.push(RenderCommand::EndRegion);

    commands.push(RenderCommand::region("timeline__panel", Role::TabPanel));
    commands.push(RenderCommand::Text {
        text: active.description.into(),
        style: TextStyle::Body,
        class: Some("timeline__summary".into()),
        color: ThemeToken::TextPrimary,
    });
    commands.push(RenderCommand::BeginList {
        class: "timeline__tech".into(),
        label: Some(TECH_ARIA_LABEL.into()),
    });
    commands.extend(active.tech.iter().map(|&item| RenderCommand::ListItem {
        text: item.into(),
    }));
    commands.push(RenderCommand::EndList);
    commands.push(RenderCommand::Text {
        text: active.highlight.into(),
        style: TextStyle::Body,
        class: Some("timeline__highlight".into()),
        color: ThemeToken::Highlight,
    });
    commands.push(RenderCommand::EndRegion);

    commands.push(RenderCommand::EndRegion);
    commands
}
