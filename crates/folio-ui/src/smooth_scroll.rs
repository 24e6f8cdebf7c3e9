//! Smooth-scroll wrapper.
//!
//! Page content lives in a full-height scroll container. Wheel input moves
//! the [`SmoothScroller`] target and a frame loop eases the container's
//! `scrollTop` toward it. Until the container has been measured, or when
//! scroll effects were never registered, wheel events are left alone and
//! the browser scrolls natively. The scroller still tracks the native
//! position so [`ScrollHandle::is_past`] stays accurate.

use std::time::Duration;

use dioxus::prelude::*;
use folio_core::{ScrollEffects, SmoothScroller};
use serde::Deserialize;
use tokio::time::{sleep, Instant};

/// DOM id of the scroll container.
pub const CONTAINER_ID: &str = "smooth-scroll";

const FRAME: Duration = Duration::from_millis(16);

const METRICS_JS: &str = r#"
const c = document.getElementById("smooth-scroll");
if (c) {
    dioxus.send({ top: c.scrollTop, limit: Math.max(0, c.scrollHeight - c.clientHeight) });
} else {
    dioxus.send(null);
}
"#;

const SECTION_OFFSET_JS: &str = r#"
const c = document.getElementById("smooth-scroll");
const t = document.getElementById("__ID__");
if (c && t) {
    dioxus.send(t.getBoundingClientRect().top - c.getBoundingClientRect().top + c.scrollTop);
} else {
    dioxus.send(null);
}
"#;

#[derive(Debug, Clone, Copy, Deserialize)]
struct ScrollMetrics {
    top: f64,
    limit: f64,
}

/// Shared handle to the page scroller, provided via context.
#[derive(Clone, Copy)]
pub struct ScrollHandle {
    scroller: Signal<SmoothScroller>,
    enabled: Signal<bool>,
}

impl ScrollHandle {
    /// Whether the page has scrolled past `threshold` px.
    pub fn is_past(&self, threshold: f64) -> bool {
        self.scroller.read().is_past(threshold)
    }

    pub fn is_smooth(&self) -> bool {
        *self.enabled.read()
    }

    /// Scroll so the element with `dom_id` sits at the top of the container.
    pub fn scroll_to_section(&self, dom_id: &'static str) {
        let mut scroller = self.scroller;
        let smooth = self.is_smooth();
        spawn(async move {
            if !smooth {
                document::eval(&format!(
                    r#"document.getElementById("{dom_id}")?.scrollIntoView({{ behavior: "smooth" }});"#
                ));
                return;
            }
            let mut eval = document::eval(&SECTION_OFFSET_JS.replace("__ID__", dom_id));
            match eval.recv::<Option<f64>>().await {
                Ok(Some(offset)) => scroller.write().scroll_to(offset),
                Ok(None) => tracing::debug!(section = dom_id, "scroll target not mounted"),
                Err(e) => tracing::warn!(section = dom_id, error = ?e, "failed to measure scroll target"),
            }
        });
    }

    /// Re-read position and extent from the container.
    async fn refresh(mut self) -> bool {
        let mut eval = document::eval(METRICS_JS);
        match eval.recv::<Option<ScrollMetrics>>().await {
            Ok(Some(metrics)) => {
                let mut scroller = self.scroller.write();
                scroller.set_limit(metrics.limit);
                scroller.sync(metrics.top);
                true
            }
            Ok(None) => false,
            Err(e) => {
                tracing::warn!(error = ?e, "failed to measure scroll container");
                self.enabled.set(false);
                false
            }
        }
    }
}

/// Create the page scroller and provide it to descendants.
pub fn use_smooth_scroll(smoothing: f64) -> ScrollHandle {
    use_context_provider(|| ScrollHandle {
        scroller: Signal::new(SmoothScroller::new(smoothing)),
        enabled: Signal::new(false),
    })
}

/// Scroll container applying inertial easing to wheel input.
#[component]
pub fn SmoothScroll(children: Element) -> Element {
    let handle = use_context::<ScrollHandle>();
    let mut scroller = handle.scroller;
    let mut enabled = handle.enabled;

    use_future(move || async move {
        if !ScrollEffects::is_registered() {
            tracing::info!("scroll effects not registered, using native scrolling");
            return;
        }
        if handle.refresh().await {
            enabled.set(true);
            tracing::debug!(limit = handle.scroller.peek().limit(), "smooth scrolling enabled");
        } else {
            tracing::info!("smooth scrolling unavailable, using native scrolling");
        }
    });

    use_future(move || async move {
        if !ScrollEffects::is_registered() {
            return;
        }
        let mut last = Instant::now();
        loop {
            sleep(FRAME).await;
            let now = Instant::now();
            let dt = now - last;
            last = now;

            if !*enabled.peek() || scroller.peek().is_settled() {
                continue;
            }
            let y = scroller.write().step(dt);
            document::eval(&format!(
                r#"document.getElementById("{CONTAINER_ID}").scrollTop = {y};"#
            ));
        }
    });

    rsx! {
        div {
            id: CONTAINER_ID,
            class: "smooth-scroll",
            onwheel: move |evt: WheelEvent| {
                if *enabled.peek() {
                    evt.prevent_default();
                    scroller.write().scroll_by(evt.delta().strip_units().y);
                }
            },
            onscroll: move |_| {
                if scroller.peek().adopts_native_scroll(*enabled.peek()) {
                    spawn(async move {
                        handle.refresh().await;
                    });
                }
            },
            {children}
        }
    }
}
