//! Root application component.

use dioxus::prelude::*;
use folio_core::{ScrollMeta, SectionId};
use folio_ui::{use_smooth_scroll, SmoothScroll, ThemedRoot};

use crate::state::{site_options, SiteContext};

use super::{About, Contact, Footer, Hero, Navbar, Projects};

#[component]
pub fn App() -> Element {
    let options = site_options();
    use_context_provider(|| SiteContext::new(options));
    use_smooth_scroll(options.config.scroll_smoothing);

    rsx! {
        ThemedRoot {
            Navbar {}
            SmoothScroll {
                main {
                    class: "main-content",
                    for id in SectionId::all() {
                        Fragment { key: "{id.dom_id()}", {section(*id)} }
                    }
                    Footer {}
                }
            }
        }
    }
}

/// Render one page section with its scroll-speed metadata.
fn section(id: SectionId) -> Element {
    let scroll = ScrollMeta::for_index(id.index());
    match id {
        SectionId::Hero => rsx! { Hero { scroll } },
        SectionId::About => rsx! { About { scroll } },
        SectionId::Projects => rsx! { Projects { scroll } },
        SectionId::Contact => rsx! { Contact { scroll } },
    }
}
