//! Page footer.

use chrono::Datelike;
use dioxus::prelude::*;
use folio_core::content::SOCIAL_LINKS;
use folio_ui::tokens;

/// Footer line for `year`.
pub fn footer_text(year: i32) -> String {
    format!("{year} | Crafted with passion")
}

#[component]
pub fn Footer() -> Element {
    let text = footer_text(chrono::Local::now().year());

    rsx! {
        footer {
            class: "footer",
            div {
                class: "footer-social",
                for link in SOCIAL_LINKS.iter() {
                    a {
                        key: "{link.label}",
                        class: tokens::LINK,
                        href: link.href,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "aria-label": link.label,
                        i { class: link.icon }
                    }
                }
            }
            p { "{text}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_text() {
        assert_eq!(footer_text(2026), "2026 | Crafted with passion");
    }
}
