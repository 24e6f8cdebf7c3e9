//! Class-name contract between components and `shared.css`.
//!
//! Components never reach into each other's markup with selectors; a parent
//! that needs to restyle a child passes one of these classes down instead.

pub const SECTION: &str = "folio-section";
pub const CONTAINER: &str = "folio-container";
pub const SECTION_TITLE: &str = "section-title";
pub const SECTION_SUBTITLE: &str = "section-subtitle";
pub const GRADIENT_TEXT: &str = "gradient-text";
pub const CARD: &str = "folio-card";
pub const TAG: &str = "folio-tag";
pub const BUTTON_PRIMARY: &str = "btn-primary";
pub const BUTTON_GHOST: &str = "btn-ghost";
pub const LINK: &str = "folio-link";

/// Applied to a card's media while the card is hovered.
pub const MEDIA_ZOOMED: &str = "media-zoomed";

/// Join class names, skipping empty ones.
pub fn classes(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// `class` when `on`, empty otherwise.
pub fn when(on: bool, class: &'static str) -> &'static str {
    if on { class } else { "" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes_skips_empty() {
        assert_eq!(classes(&[CARD, "", TAG]), "folio-card folio-tag");
        assert_eq!(classes(&[CARD, when(false, MEDIA_ZOOMED)]), "folio-card");
        assert_eq!(classes(&[when(true, MEDIA_ZOOMED)]), "media-zoomed");
    }
}
