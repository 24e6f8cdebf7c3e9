//! Fixed navigation bar.

use dioxus::prelude::*;
use folio_core::scroll::SCROLLED_THRESHOLD;
use folio_core::content::NAV_LINKS;
use folio_core::SectionId;
use folio_ui::tokens::{self, classes, when};
use folio_ui::{ScrollHandle, ThemeToggle};

use crate::state::SiteContext;

#[component]
pub fn Navbar() -> Element {
    let ctx = use_context::<SiteContext>();
    let scroll = use_context::<ScrollHandle>();
    let mut menu_open = use_signal(|| false);

    let owner = ctx.config.read().owner_name.clone();
    let nav_class = classes(&["navbar", when(scroll.is_past(SCROLLED_THRESHOLD), "scrolled")]);
    let menu_class = classes(&["nav-links", when(menu_open(), "open")]);
    let toggle_icon = if menu_open() { "fas fa-times" } else { "fas fa-bars" };

    rsx! {
        nav {
            class: "{nav_class}",
            a {
                class: classes(&["nav-logo", tokens::GRADIENT_TEXT]),
                href: SectionId::Hero.anchor(),
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    menu_open.set(false);
                    scroll.scroll_to_section(SectionId::Hero.dom_id());
                },
                "{owner}"
            }
            button {
                class: "nav-toggle",
                "aria-label": "Toggle navigation",
                onclick: move |_| {
                    let open = menu_open();
                    menu_open.set(!open);
                },
                i { class: toggle_icon }
            }
            ul {
                class: "{menu_class}",
                for link in NAV_LINKS.iter() {
                    li {
                        key: "{link.label}",
                        a {
                            class: tokens::LINK,
                            href: link.section.anchor(),
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                menu_open.set(false);
                                scroll.scroll_to_section(link.section.dom_id());
                            },
                            "{link.label}"
                        }
                    }
                }
                li { ThemeToggle {} }
            }
        }
    }
}
