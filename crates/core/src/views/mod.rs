//! View transforms: state in, `RenderCommand`s out.
//!
//! ```text
//!   Showcase ──▶ hero + snippet + timeline ──▶ RenderCommand[] ──▶ Renderer
//!   (state)          (this module)              (protocol)        (HTML, TUI, WASM)
//! ```

pub mod hero;
pub mod snippet;
pub mod timeline;

use showcase_protocol::{RenderCommand, Role};

use crate::state::Showcase;

/// Full view: hero banner, then the code sample and timeline side by side.
pub fn render_showcase(showcase: &Showcase) -> Vec<RenderCommand> {
    let mut commands = Vec::with_capacity(40);
    commands.push(RenderCommand::region("showcase", Role::Section));
    commands.extend(hero::render_hero());

    commands.push(RenderCommand::region("grid", Role::Group));
    commands.extend(snippet::render_snippet());
    commands.extend(timeline::render_timeline(showcase));
    commands.push(RenderCommand::EndRegion);

    commands.push(RenderCommand::EndRegion);
    commands
}
