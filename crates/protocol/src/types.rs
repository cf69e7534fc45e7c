use serde::{Deserialize, Serialize};

/// An sRGB color with alpha stored as a whole percentage (0..=100).
///
/// Percent alpha keeps CSS output exact: `Color::rgba(59, 130, 246, 45)`
/// always prints `rgba(59,130,246,.45)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha_pct: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, alpha_pct: u8) -> Self {
        Self { r, g, b, alpha_pct }
    }

    pub fn to_css(&self) -> String {
        format!(
            "rgba({},{},{},{})",
            self.r,
            self.g,
            self.b,
            css_alpha(self.alpha_pct)
        )
    }
}

fn css_alpha(pct: u8) -> String {
    match pct {
        0 => "0".to_string(),
        100.. => "1".to_string(),
        _ => format!(".{pct:02}").trim_end_matches('0').to_string(),
    }
}

/// A two-stop linear gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Gradient {
    pub angle_deg: u16,
    pub from: Color,
    pub to: Color,
}

impl Gradient {
    pub const fn linear(angle_deg: u16, from: Color, to: Color) -> Self {
        Self {
            angle_deg,
            from,
            to,
        }
    }

    /// CSS `linear-gradient(...)` value.
    pub fn to_css(&self) -> String {
        format!(
            "linear-gradient({}deg, {}, {})",
            self.angle_deg,
            self.from.to_css(),
            self.to.to_css()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_drops_leading_zero() {
        assert_eq!(Color::rgba(59, 130, 246, 45).to_css(), "rgba(59,130,246,.45)");
        assert_eq!(Color::rgba(0, 0, 0, 50).to_css(), "rgba(0,0,0,.5)");
        assert_eq!(Color::rgba(0, 0, 0, 5).to_css(), "rgba(0,0,0,.05)");
    }

    #[test]
    fn alpha_bounds() {
        assert_eq!(Color::rgba(1, 2, 3, 0).to_css(), "rgba(1,2,3,0)");
        assert_eq!(Color::rgba(1, 2, 3, 100).to_css(), "rgba(1,2,3,1)");
        assert_eq!(Color::rgba(1, 2, 3, 255).to_css(), "rgba(1,2,3,1)");
    }

    #[test]
    fn gradient_css() {
        let g = Gradient::linear(
            135,
            Color::rgba(16, 185, 129, 45),
            Color::rgba(5, 150, 105, 15),
        );
        assert_eq!(
            g.to_css(),
            "linear-gradient(135deg, rgba(16,185,129,.45), rgba(5,150,105,.15))"
        );
    }

    #[test]
    fn serializes_as_plain_struct() {
        let json = serde_json::to_string(&Color::rgba(1, 2, 3, 4)).expect("color serializes");
        assert_eq!(json, r#"{"r":1,"g":2,"b":3,"alpha_pct":4}"#);
    }
}
