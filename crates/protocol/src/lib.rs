pub mod commands;
pub mod theme;
pub mod types;

pub use commands::{RenderCommand, Role, TextStyle};
pub use theme::ThemeToken;
pub use types::{Color, Gradient};
