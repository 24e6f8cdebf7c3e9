//! Image with a placeholder for missing assets.

use dioxus::prelude::*;

/// `img` that swaps to a placeholder block if the asset fails to load.
#[component]
pub fn FallbackImage(
    src: String,
    alt: String,
    #[props(default)] class: String,
    #[props(default)] style: String,
) -> Element {
    let mut broken = use_signal(|| false);

    if broken() {
        return rsx! {
            div {
                class: "image-fallback {class}",
                style: "{style}",
                role: "img",
                "aria-label": "{alt}",
                i { class: "fas fa-image" }
                span { "{alt}" }
            }
        };
    }

    let failed_src = src.clone();

    rsx! {
        img {
            class: "{class}",
            style: "{style}",
            src: "{src}",
            alt: "{alt}",
            onerror: move |_| {
                tracing::debug!(src = %failed_src, "image failed to load, showing placeholder");
                broken.set(true);
            },
        }
    }
}
