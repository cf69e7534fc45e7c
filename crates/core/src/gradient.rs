use showcase_protocol::{Color, Gradient};

/// Tab background gradients, cycled by position.
pub const GRADIENTS: [Gradient; 3] = [
    Gradient::linear(
        135,
        Color::rgba(59, 130, 246, 45),
        Color::rgba(37, 99, 235, 15),
    ),
    Gradient::linear(
        135,
        Color::rgba(16, 185, 129, 45),
        Color::rgba(5, 150, 105, 15),
    ),
    Gradient::linear(
        135,
        Color::rgba(236, 72, 153, 45),
        Color::rgba(219, 39, 119, 15),
    ),
];

/// Gradient for the tab at `index`. Wraps every three positions.
pub fn gradient_for_index(index: usize) -> Gradient {
    GRADIENTS[index % GRADIENTS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_every_three() {
        assert_eq!(gradient_for_index(0), gradient_for_index(3));
        assert_eq!(gradient_for_index(3), gradient_for_index(6));
        assert_eq!(gradient_for_index(1), gradient_for_index(4));
        // usize::MAX is a multiple of three.
        assert_eq!(gradient_for_index(usize::MAX), gradient_for_index(0));
        assert_ne!(gradient_for_index(0), gradient_for_index(1));
        assert_ne!(gradient_for_index(1), gradient_for_index(2));
    }

    #[test]
    fn css_matches_page_styles() {
        assert_eq!(
            gradient_for_index(0).to_css(),
            "linear-gradient(135deg, rgba(59,130,246,.45), rgba(37,99,235,.15))"
        );
        assert_eq!(
            gradient_for_index(1).to_css(),
            "linear-gradient(135deg, rgba(16,185,129,.45), rgba(5,150,105,.15))"
        );
        assert_eq!(
            gradient_for_index(2).to_css(),
            "linear-gradient(135deg, rgba(236,72,153,.45), rgba(219,39,119,.15))"
        );
    }
}
