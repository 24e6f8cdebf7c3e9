//! Landing section.

use dioxus::prelude::*;
use folio_core::motion::presets;
use folio_core::{ScrollMeta, SectionId};
use folio_ui::tokens::{self, classes};
use folio_ui::{use_reveal, Motion, ScrollHandle};

use crate::state::SiteContext;

#[component]
pub fn Hero(scroll: ScrollMeta) -> Element {
    let ctx = use_context::<SiteContext>();
    let scroller = use_context::<ScrollHandle>();
    let revealed = use_reveal(SectionId::Hero.dom_id(), ctx.policy());

    let (owner, role) = {
        let config = ctx.config.read();
        (config.owner_name.clone(), config.role.clone())
    };
    let container = presets::hero_container();
    let item = presets::hero_item();
    let stagger = container.visible.transition;
    let shown = revealed();

    rsx! {
        section {
            id: SectionId::Hero.dom_id(),
            class: classes(&[tokens::SECTION, "hero"]),
            "data-scroll": "",
            "data-scroll-speed": "{scroll.speed}",
            "data-scroll-position": "{scroll.position}",
            Motion {
                variants: container,
                revealed: shown,
                class: classes(&[tokens::CONTAINER, "hero-content"]),
                Motion {
                    variants: item,
                    revealed: shown,
                    stagger,
                    index: 0,
                    p { class: "hero-greeting", "Hi, I'm" }
                }
                Motion {
                    variants: item,
                    revealed: shown,
                    stagger,
                    index: 1,
                    h1 { class: classes(&["hero-name", tokens::GRADIENT_TEXT]), "{owner}" }
                }
                Motion {
                    variants: item,
                    revealed: shown,
                    stagger,
                    index: 2,
                    h2 { class: "hero-role", "{role}" }
                }
                Motion {
                    variants: item,
                    revealed: shown,
                    stagger,
                    index: 3,
                    p {
                        class: "hero-tagline",
                        "I build clean, fast and thoughtful software, from the first sketch to production."
                    }
                }
                Motion {
                    variants: item,
                    revealed: shown,
                    stagger,
                    index: 4,
                    class: "hero-actions",
                    a {
                        class: tokens::BUTTON_PRIMARY,
                        href: SectionId::Projects.anchor(),
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            scroller.scroll_to_section(SectionId::Projects.dom_id());
                        },
                        "View My Work"
                    }
                    a {
                        class: tokens::BUTTON_GHOST,
                        href: SectionId::Contact.anchor(),
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            scroller.scroll_to_section(SectionId::Contact.dom_id());
                        },
                        "Contact Me"
                    }
                }
            }
        }
    }
}
