//! Variant-driven motion for Dioxus elements.
//!
//! Styles are recomputed from [`Variants`] on every render and emitted
//! inline; the CSS `transition` in the style performs the interpolation.

use dioxus::prelude::*;
use folio_core::{AnimationState, Transition, Variants};

/// Inline style for the `index`-th child of an optional stagger container.
pub fn motion_style(
    variants: &Variants,
    state: AnimationState,
    stagger: Option<&Transition>,
    index: usize,
) -> String {
    variants.resolve(state, stagger, index).to_style()
}

/// Pointer state for hover and tap variants.
#[derive(Clone, Copy)]
pub struct Interaction {
    hovered: Signal<bool>,
    pressed: Signal<bool>,
}

impl Interaction {
    pub fn state(&self, revealed: bool) -> AnimationState {
        AnimationState {
            revealed,
            hovered: *self.hovered.read(),
            pressed: *self.pressed.read(),
        }
    }

    pub fn is_hovered(&self) -> bool {
        *self.hovered.read()
    }

    pub fn enter(&mut self) {
        self.hovered.set(true);
    }

    pub fn leave(&mut self) {
        self.hovered.set(false);
        self.pressed.set(false);
    }

    pub fn press(&mut self) {
        self.pressed.set(true);
    }

    pub fn release(&mut self) {
        self.pressed.set(false);
    }
}

pub fn use_interaction() -> Interaction {
    Interaction {
        hovered: use_signal(|| false),
        pressed: use_signal(|| false),
    }
}

/// Animated `div` following `variants`.
#[component]
pub fn Motion(
    variants: Variants,
    revealed: bool,
    /// Container transition whose stagger offsets this child.
    #[props(default)]
    stagger: Transition,
    #[props(default)] index: usize,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    let mut pointer = use_interaction();
    let style = motion_style(&variants, pointer.state(revealed), Some(&stagger), index);

    rsx! {
        div {
            class: "{class}",
            style: "{style}",
            onmouseenter: move |_| pointer.enter(),
            onmouseleave: move |_| pointer.leave(),
            onmousedown: move |_| pointer.press(),
            onmouseup: move |_| pointer.release(),
            {children}
        }
    }
}
