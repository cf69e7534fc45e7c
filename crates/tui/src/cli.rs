use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use showcase_core::ThemeMode;

#[derive(Parser)]
#[command(name = "showcase")]
#[command(about = "Render the C# skills showcase page", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, value_parser = ["error", "warn", "info", "debug", "trace"], default_value = "warn", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the page as a standalone HTML document.
    Html {
        /// Output file. Writes to stdout when omitted.
        #[arg(long, short)]
        out: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = Theme::Dark)]
        theme: Theme,

        /// Leave out the inline stylesheet.
        #[arg(long)]
        no_styles: bool,

        /// Tab to select before rendering.
        #[arg(long, default_value = "0")]
        phase: usize,
    },

    /// Dump the render commands for the view as JSON.
    Commands {
        #[arg(long, default_value = "0")]
        phase: usize,

        #[arg(long)]
        pretty: bool,
    },

    /// Browse the page interactively in the terminal.
    Tui,
}

impl Commands {
    /// File that receives log output, if not stderr. The interactive view
    /// owns the terminal, so its logs go to a file.
    pub fn log_file(&self) -> Option<PathBuf> {
        matches!(self, Commands::Tui).then(|| std::env::temp_dir().join("showcase-tui.log"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Theme {
    Dark,
    Light,
}

impl From<Theme> for ThemeMode {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Dark => ThemeMode::Dark,
            Theme::Light => ThemeMode::Light,
        }
    }
}
