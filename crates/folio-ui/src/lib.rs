//! Shared UI building blocks for Folio.
//!
//! Provides the theme, design-token class names, motion helpers, the
//! reveal-on-view hook and the smooth-scroll wrapper used by the site's
//! section components.

pub mod image;
pub mod motion;
pub mod reveal;
pub mod smooth_scroll;
pub mod theme;
pub mod tokens;

pub use image::FallbackImage;
pub use motion::{motion_style, use_interaction, Interaction, Motion};
pub use reveal::use_reveal;
pub use smooth_scroll::{use_smooth_scroll, ScrollHandle, SmoothScroll};
pub use theme::{Theme, ThemeToggle, ThemedRoot, CURRENT_THEME};

/// Shared CSS containing design tokens, theme definitions, and base styles.
pub const SHARED_CSS: &str = include_str!("../assets/shared.css");
