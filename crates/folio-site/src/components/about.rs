//! About section: bio, skills grid and profile photo.

use dioxus::prelude::*;
use folio_core::content::{ABOUT_LEAD, PROFILE_IMAGE, SKILLS};
use folio_core::motion::presets;
use folio_core::{AnimationState, ScrollMeta, SectionId, Skill, Transition};
use folio_ui::tokens::{self, classes};
use folio_ui::{motion_style, use_interaction, use_reveal, FallbackImage, Motion};

use crate::state::SiteContext;

#[component]
pub fn About(scroll: ScrollMeta) -> Element {
    let ctx = use_context::<SiteContext>();
    let revealed = use_reveal(SectionId::About.dom_id(), ctx.policy());

    let shown = revealed();
    let container = presets::section_container();
    let stagger = container.visible.transition;
    let item = presets::rise_item();
    let photo_style = motion_style(
        &presets::profile_image(),
        AnimationState::revealed(shown),
        None,
        0,
    );
    let owner = ctx.config.read().owner_name.clone();

    rsx! {
        section {
            id: SectionId::About.dom_id(),
            class: classes(&[tokens::SECTION, "about"]),
            "data-scroll": "",
            "data-scroll-speed": "{scroll.speed}",
            "data-scroll-position": "{scroll.position}",
            div {
                class: tokens::CONTAINER,
                div {
                    class: "about-content",
                    div {
                        class: "about-text",
                        Motion {
                            variants: item,
                            revealed: shown,
                            h2 { class: tokens::SECTION_TITLE, "About Me" }
                        }
                        Motion {
                            variants: item,
                            revealed: shown,
                            p {
                                class: "about-lead",
                                {ABOUT_LEAD}
                            }
                        }
                        Motion {
                            variants: container,
                            revealed: shown,
                            class: "skills-grid",
                            for (i, skill) in SKILLS.iter().enumerate() {
                                SkillCard {
                                    key: "{skill.title}",
                                    skill,
                                    revealed: shown,
                                    stagger,
                                    index: i,
                                }
                            }
                        }
                    }
                    div {
                        class: "about-image",
                        FallbackImage {
                            src: "{PROFILE_IMAGE}",
                            alt: "{owner}",
                            class: "profile-photo",
                            style: "{photo_style}",
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SkillCard(skill: &'static Skill, revealed: bool, stagger: Transition, index: usize) -> Element {
    let mut pointer = use_interaction();
    let style = motion_style(
        &presets::lift_card(),
        pointer.state(revealed),
        Some(&stagger),
        index,
    );

    rsx! {
        div {
            class: classes(&[tokens::CARD, "skill-card"]),
            style: "{style}",
            onmouseenter: move |_| pointer.enter(),
            onmouseleave: move |_| pointer.leave(),
            i { class: "fas {skill.icon}" }
            h3 { "{skill.title}" }
            p { "{skill.description}" }
        }
    }
}
