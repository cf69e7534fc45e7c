//! Page shell: document metadata around arbitrary body content.

use serde::Serialize;
use showcase_protocol::RenderCommand;

use crate::content::{PAGE_META, PageMeta};
use crate::state::Showcase;

/// A complete page: fixed metadata plus the rendered body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub meta: PageMeta,
    pub body: Vec<RenderCommand>,
}

impl Document {
    pub fn new(body: Vec<RenderCommand>) -> Self {
        Self {
            meta: PAGE_META,
            body,
        }
    }

    /// The page as served: the showcase view hosted in the shell.
    pub fn for_showcase(showcase: &Showcase) -> Self {
        Self::new(showcase.render())
    }
}
