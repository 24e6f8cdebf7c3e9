//! Projects gallery.

use dioxus::prelude::*;
use folio_core::content::PROJECTS;
use folio_core::motion::presets;
use folio_core::{Project, ScrollMeta, SectionId, Transition};
use folio_ui::tokens::{self, classes, when};
use folio_ui::{motion_style, use_interaction, use_reveal, FallbackImage, Motion};

use crate::state::SiteContext;

#[component]
pub fn Projects(scroll: ScrollMeta) -> Element {
    let ctx = use_context::<SiteContext>();
    let revealed = use_reveal(SectionId::Projects.dom_id(), ctx.policy());

    let shown = revealed();
    let container = presets::section_container();
    let stagger = container.visible.transition;

    rsx! {
        section {
            id: SectionId::Projects.dom_id(),
            class: classes(&[tokens::SECTION, "projects"]),
            "data-scroll": "",
            "data-scroll-speed": "{scroll.speed}",
            "data-scroll-position": "{scroll.position}",
            div {
                class: tokens::CONTAINER,
                Motion {
                    variants: presets::rise_item(),
                    revealed: shown,
                    h2 { class: classes(&[tokens::SECTION_TITLE, "centered"]), "Featured Projects" }
                }
                Motion {
                    variants: container,
                    revealed: shown,
                    class: "projects-grid",
                    for (i, project) in PROJECTS.iter().enumerate() {
                        ProjectCard {
                            key: "{project.title}",
                            project,
                            revealed: shown,
                            stagger,
                            index: i,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectCard(project: &'static Project, revealed: bool, stagger: Transition, index: usize) -> Element {
    let mut pointer = use_interaction();
    let style = motion_style(
        &presets::lift_card(),
        pointer.state(revealed),
        Some(&stagger),
        index,
    );
    let image_class = project_image_class(pointer.is_hovered());

    rsx! {
        article {
            class: classes(&[tokens::CARD, "project-card"]),
            style: "{style}",
            onmouseenter: move |_| pointer.enter(),
            onmouseleave: move |_| pointer.leave(),
            div {
                class: "project-media",
                FallbackImage {
                    src: "{project.image}",
                    alt: "{project.title}",
                    class: image_class,
                }
            }
            div {
                class: "project-body",
                h3 { "{project.title}" }
                p { "{project.description}" }
                div {
                    class: "project-tech",
                    for tech in project.tech.iter() {
                        span { key: "{tech}", class: tokens::TAG, "{tech}" }
                    }
                }
                div {
                    class: "project-links",
                    a {
                        class: tokens::LINK,
                        href: project.live_url,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        i { class: "fas fa-external-link-alt" }
                        "Live Demo"
                    }
                    a {
                        class: tokens::LINK,
                        href: project.source_url,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        i { class: "fab fa-github" }
                        "View Code"
                    }
                }
            }
        }
    }
}

/// Class list for a card's image; the image itself carries the hover zoom.
fn project_image_class(hovered: bool) -> String {
    classes(&["project-image", when(hovered, tokens::MEDIA_ZOOMED)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_zoom_lands_on_image() {
        assert_eq!(project_image_class(false), "project-image");
        assert_eq!(project_image_class(true), "project-image media-zoomed");
    }
}
