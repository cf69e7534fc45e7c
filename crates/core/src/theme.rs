use serde::{Deserialize, Serialize};
use showcase_protocol::ThemeToken;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// Hex color for a token in this palette.
    pub fn resolve(self, token: ThemeToken) -> &'static str {
        match self {
            ThemeMode::Dark => match token {
                ThemeToken::Background => "#0b1120",
                ThemeToken::Surface => "#111827",
                ThemeToken::Border => "#1f2937",
                ThemeToken::TextPrimary => "#f1f5f9",
                ThemeToken::TextSecondary => "#cbd5e1",
                ThemeToken::TextMuted => "#94a3b8",
                ThemeToken::Accent => "#60a5fa",
                ThemeToken::Highlight => "#34d399",
                ThemeToken::CodeBackground => "#020617",
                ThemeToken::CodeText => "#e2e8f0",
                ThemeToken::TabActive => "#3b82f6",
                ThemeToken::TabIdle => "#334155",
            },
            ThemeMode::Light => match token {
                ThemeToken::Background => "#f8fafc",
                ThemeToken::Surface => "#ffffff",
                ThemeToken::Border => "#e2e8f0",
                ThemeToken::TextPrimary => "#0f172a",
                ThemeToken::TextSecondary => "#334155",
                ThemeToken::TextMuted => "#64748b",
                ThemeToken::Accent => "#2563eb",
                ThemeToken::Highlight => "#059669",
                ThemeToken::CodeBackground => "#f1f5f9",
                ThemeToken::CodeText => "#1e293b",
                ThemeToken::TabActive => "#2563eb",
                ThemeToken::TabIdle => "#cbd5e1",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_token_resolves_to_hex() {
        for mode in [ThemeMode::Dark, ThemeMode::Light] {
            for token in ThemeToken::ALL {
                let hex = mode.resolve(token);
                assert!(hex.starts_with('#') && hex.len() == 7, "{token:?} -> {hex}");
            }
        }
    }
}
