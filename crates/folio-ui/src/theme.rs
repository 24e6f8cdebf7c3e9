//! Theme system for Folio.

use dioxus::prelude::*;

/// Available color themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Midnight,
    Daylight,
}

impl Theme {
    /// Returns the CSS data-theme attribute value.
    pub fn css_value(&self) -> &'static str {
        match self {
            Theme::Midnight => "midnight",
            Theme::Daylight => "daylight",
        }
    }

    /// The other theme.
    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Midnight => Theme::Daylight,
            Theme::Daylight => Theme::Midnight,
        }
    }

    /// Font Awesome icon for the toggle button.
    fn icon(&self) -> &'static str {
        match self {
            Theme::Midnight => "fas fa-sun",
            Theme::Daylight => "fas fa-moon",
        }
    }
}

/// Global signal for current theme.
pub static CURRENT_THEME: GlobalSignal<Theme> = GlobalSignal::new(|| Theme::default());

/// Themed root wrapper component.
#[component]
pub fn ThemedRoot(children: Element) -> Element {
    let theme = *CURRENT_THEME.read();

    rsx! {
        div {
            class: "themed-root",
            "data-theme": "{theme.css_value()}",
            {children}
        }
    }
}

/// Button flipping between the light and dark theme.
#[component]
pub fn ThemeToggle() -> Element {
    let theme = *CURRENT_THEME.read();

    rsx! {
        button {
            class: "theme-toggle",
            title: "Toggle theme",
            onclick: move |_| {
                let next = CURRENT_THEME.read().toggled();
                *CURRENT_THEME.write() = next;
            },
            i { class: "{theme.icon()}" }
        }
    }
}
