//! Contact section: social links and the contact form.

use dioxus::prelude::*;
use folio_core::content::{CONTACT_BLURB, SOCIAL_LINKS};
use folio_core::motion::presets;
use folio_core::{
    AnimationState, ContactForm, Field, FormStatus, ScrollMeta, SectionId, SocialLink, Transition,
};
use folio_ui::tokens::{self, classes};
use folio_ui::{motion_style, use_interaction, use_reveal, Motion};

use crate::state::{submit_contact, SiteContext};

#[component]
pub fn Contact(scroll: ScrollMeta) -> Element {
    let ctx = use_context::<SiteContext>();
    let revealed = use_reveal(SectionId::Contact.dom_id(), ctx.policy());
    let mut form = use_signal(ContactForm::new);
    let mut button_pointer = use_interaction();

    let shown = revealed();
    let container = presets::contact_container();
    let stagger = container.visible.transition;
    let item = presets::contact_item();
    // The form staggers its own rows, starting once its wrapper does.
    let form_index = 3 + SOCIAL_LINKS.len();
    let form_wrapper = item.resolve(AnimationState::revealed(shown), Some(&stagger), form_index);
    let form_stagger = presets::section_container()
        .visible
        .transition
        .starting_after(&form_wrapper);

    let (draft, status, button, message) = {
        let form = form.read();
        (
            form.draft().clone(),
            form.status(),
            form.submit_button(),
            form.status_message(),
        )
    };
    let button_style = motion_style(
        &presets::submit_button(),
        button_pointer.state(shown),
        Some(&form_stagger),
        Field::all().len(),
    );

    rsx! {
        section {
            id: SectionId::Contact.dom_id(),
            class: classes(&[tokens::SECTION, "contact"]),
            "data-scroll": "",
            "data-scroll-speed": "{scroll.speed}",
            "data-scroll-position": "{scroll.position}",
            Motion {
                variants: container,
                revealed: shown,
                class: classes(&[tokens::CONTAINER, "contact-card"]),
                Motion {
                    variants: item,
                    revealed: shown,
                    stagger,
                    index: 0,
                    h2 { class: tokens::SECTION_TITLE, "Get In Touch" }
                }
                Motion {
                    variants: item,
                    revealed: shown,
                    stagger,
                    index: 1,
                    p { class: tokens::SECTION_SUBTITLE, "Let's collaborate on your next project" }
                }
                div {
                    class: "contact-content",
                    div {
                        class: "contact-info",
                        Motion {
                            variants: item,
                            revealed: shown,
                            stagger,
                            index: 2,
                            p {
                                class: "contact-text",
                                {CONTACT_BLURB}
                            }
                        }
                        div {
                            class: "contact-methods",
                            for (i, link) in SOCIAL_LINKS.iter().enumerate() {
                                SocialLinkItem {
                                    key: "{link.label}",
                                    link,
                                    revealed: shown,
                                    stagger,
                                    index: i + 3,
                                }
                            }
                        }
                    }
                    Motion {
                        variants: item,
                        revealed: shown,
                        stagger,
                        index: form_index,
                        form {
                            class: "contact-form",
                            onsubmit: move |evt: FormEvent| {
                                evt.prevent_default();
                                let mailer = ctx.mailer();
                                spawn(async move {
                                    submit_contact(form, mailer).await;
                                });
                            },
                            for (i, field) in Field::all().iter().copied().enumerate() {
                                FormRow {
                                    key: "{field.key()}",
                                    field,
                                    value: draft.get(field).to_string(),
                                    disabled: status == FormStatus::Submitting,
                                    revealed: shown,
                                    stagger: form_stagger,
                                    index: i,
                                    on_input: move |value: String| form.write().update(field, value),
                                }
                            }
                            button {
                                r#type: "submit",
                                class: classes(&[tokens::BUTTON_PRIMARY, "submit-button"]),
                                style: "{button_style}",
                                disabled: button.disabled,
                                onmouseenter: move |_| button_pointer.enter(),
                                onmouseleave: move |_| button_pointer.leave(),
                                onmousedown: move |_| button_pointer.press(),
                                onmouseup: move |_| button_pointer.release(),
                                "{button.label}"
                            }
                            if let Some(text) = message {
                                StatusMessage {
                                    success: status == FormStatus::Success,
                                    text,
                                    on_dismiss: move |_| form.write().dismiss(),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SocialLinkItem(link: &'static SocialLink, revealed: bool, stagger: Transition, index: usize) -> Element {
    let mut pointer = use_interaction();
    let style = motion_style(
        &presets::social_link(),
        pointer.state(revealed),
        Some(&stagger),
        index,
    );

    rsx! {
        a {
            class: classes(&[tokens::LINK, "contact-method"]),
            style: "{style}",
            href: link.href,
            target: "_blank",
            rel: "noopener noreferrer",
            onmouseenter: move |_| pointer.enter(),
            onmouseleave: move |_| pointer.leave(),
            onmousedown: move |_| pointer.press(),
            onmouseup: move |_| pointer.release(),
            i { class: link.icon }
            span { "{link.label}" }
        }
    }
}

#[component]
fn FormRow(
    field: Field,
    value: String,
    disabled: bool,
    revealed: bool,
    stagger: Transition,
    index: usize,
    on_input: EventHandler<String>,
) -> Element {
    let style = motion_style(
        &presets::form_item(),
        AnimationState::revealed(revealed),
        Some(&stagger),
        index,
    );

    rsx! {
        div {
            class: "form-group",
            style: "{style}",
            label { r#for: field.key(), "{field.label()}" }
            if field == Field::Message {
                textarea {
                    id: field.key(),
                    name: field.key(),
                    rows: 5,
                    required: true,
                    disabled,
                    value: "{value}",
                    oninput: move |evt: FormEvent| on_input.call(evt.value()),
                }
            } else {
                input {
                    id: field.key(),
                    name: field.key(),
                    r#type: if field == Field::Email { "email" } else { "text" },
                    required: true,
                    disabled,
                    value: "{value}",
                    oninput: move |evt: FormEvent| on_input.call(evt.value()),
                }
            }
        }
    }
}

/// Success or error banner that pops in on mount.
#[component]
fn StatusMessage(success: bool, text: &'static str, on_dismiss: EventHandler<()>) -> Element {
    let mut entered = use_signal(|| false);
    use_effect(move || entered.set(true));

    let style = motion_style(
        &presets::status_message(),
        AnimationState::revealed(entered()),
        None,
        0,
    );
    let kind = if success { "success" } else { "error" };

    rsx! {
        div {
            class: "form-message {kind}",
            style: "{style}",
            role: "status",
            span { "{text}" }
            button {
                r#type: "button",
                class: "form-message-dismiss",
                "aria-label": "Dismiss",
                onclick: move |_| on_dismiss.call(()),
                i { class: "fas fa-times" }
            }
        }
    }
}
