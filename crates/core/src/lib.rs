//! Core of the C# skills showcase page.
//!
//! The page is static content plus one piece of state, the active timeline
//! tab. [`Showcase`] holds that state; [`Showcase::render`] turns it into
//! protocol [`RenderCommand`](showcase_protocol::RenderCommand)s that the
//! HTML renderer here, the terminal front end, and the WASM bridge consume.

pub mod content;
pub mod error;
pub mod gradient;
pub mod html;
pub mod shell;
pub mod state;
pub mod theme;
pub mod views;

pub use content::{PAGE_META, PageMeta, ROADMAP, RoadmapPhase, SAMPLE_SNIPPET};
pub use error::ShowcaseError;
pub use gradient::gradient_for_index;
pub use html::{HtmlOptions, render_body, render_document};
pub use shell::Document;
pub use state::{PhaseIndex, Showcase, TimelineEntry};
pub use theme::ThemeMode;
