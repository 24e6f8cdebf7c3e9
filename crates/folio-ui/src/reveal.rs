//! Reveal-on-view hook.
//!
//! Installs an `IntersectionObserver` in the webview for one section and
//! feeds its reports through a [`RevealController`]. When the observer API
//! is missing the script polls geometry on scroll instead; when the eval
//! channel itself fails the section is revealed immediately.

use dioxus::prelude::*;
use folio_core::reveal::ObserverReport;
use folio_core::{Observation, RevealController, RevealPolicy};

const OBSERVER_JS: &str = r#"
const id = "__ID__";
const once = __ONCE__;
let el = document.getElementById(id);
for (let i = 0; i < 60 && !el; i++) {
    await new Promise((r) => requestAnimationFrame(r));
    el = document.getElementById(id);
}
try {
    if (!el) {
        dioxus.send({ kind: "unsupported" });
    } else if ("IntersectionObserver" in window) {
        const observer = new IntersectionObserver((entries) => {
            for (const entry of entries) {
                dioxus.send({ kind: "intersection", intersecting: entry.isIntersecting });
                if (once && entry.isIntersecting) {
                    observer.disconnect();
                }
            }
        }, { rootMargin: "__MARGIN__" });
        observer.observe(el);
    } else {
        const report = () => {
            const r = el.getBoundingClientRect();
            dioxus.send({
                kind: "geometry",
                element: { x: r.x, y: r.y, width: r.width, height: r.height },
                viewport: { x: 0, y: 0, width: window.innerWidth, height: window.innerHeight },
            });
        };
        document.addEventListener("scroll", report, true);
        window.addEventListener("resize", report);
        report();
    }
} catch (e) {
    dioxus.send({ kind: "unsupported" });
}
"#;

fn observer_script(dom_id: &str, policy: &RevealPolicy) -> String {
    OBSERVER_JS
        .replace("__ID__", dom_id)
        .replace("__ONCE__", if policy.once { "true" } else { "false" })
        .replace("__MARGIN__", &policy.root_margin.to_string())
}

/// Visible flag for the element with `dom_id`, driven by `policy`.
///
/// The observer task belongs to the calling component and is dropped with it.
pub fn use_reveal(dom_id: &'static str, policy: RevealPolicy) -> Signal<bool> {
    let mut visible = use_signal(|| false);

    use_future(move || async move {
        let mut controller = RevealController::new(policy);
        let mut eval = document::eval(&observer_script(dom_id, &policy));

        while !controller.is_latched() {
            match eval.recv::<ObserverReport>().await {
                Ok(report) => {
                    if controller.apply(report) {
                        visible.set(controller.is_visible());
                    }
                }
                Err(e) => {
                    tracing::warn!(section = dom_id, error = ?e, "reveal observer failed, showing section");
                    controller.observe(Observation::Unsupported);
                    visible.set(true);
                }
            }
        }
        tracing::debug!(section = dom_id, "section revealed");
    });

    visible
}
