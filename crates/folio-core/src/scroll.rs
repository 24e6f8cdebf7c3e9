//! Smooth scrolling.
//!
//! Scroll effects are registered once per process before the first render.
//! The wrapper component checks the registration and falls back to native
//! scrolling when it is absent.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::error::ScrollError;

/// Whether scroll effects are currently registered.
static REGISTERED: AtomicBool = AtomicBool::new(false);

/// Scroll offset past which the navbar switches to its compact style.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

/// Remaining distance (px) below which the scroller snaps to its target.
const SNAP_DISTANCE: f64 = 0.5;

/// Process-wide scroll-effect registration.
pub struct ScrollEffects;

impl ScrollEffects {
    /// Register scroll effects. Keep the guard alive for the program's lifetime.
    pub fn register() -> Result<ScrollEffectsGuard, ScrollError> {
        REGISTERED
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| ScrollError::AlreadyRegistered)?;
        tracing::debug!("scroll effects registered");
        Ok(ScrollEffectsGuard { _private: () })
    }

    pub fn is_registered() -> bool {
        REGISTERED.load(Ordering::Acquire)
    }
}

/// Tears scroll effects down when dropped.
#[must_use = "scroll effects are torn down when the guard is dropped"]
pub struct ScrollEffectsGuard {
    _private: (),
}

impl Drop for ScrollEffectsGuard {
    fn drop(&mut self) {
        REGISTERED.store(false, Ordering::Release);
        tracing::debug!("scroll effects torn down");
    }
}

/// Inertial scroll position model.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothScroller {
    current: f64,
    target: f64,
    limit: f64,
    /// Fraction of the remaining distance covered per 60 Hz frame.
    smoothing: f64,
}

impl SmoothScroller {
    pub fn new(smoothing: f64) -> Self {
        Self {
            current: 0.0,
            target: 0.0,
            limit: 0.0,
            smoothing: smoothing.clamp(0.01, 1.0),
        }
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }

    /// Set the maximum scroll offset, clamping the positions into range.
    pub fn set_limit(&mut self, limit: f64) {
        self.limit = limit.max(0.0);
        self.target = self.target.clamp(0.0, self.limit);
        self.current = self.current.clamp(0.0, self.limit);
    }

    pub fn scroll_by(&mut self, delta: f64) {
        self.scroll_to(self.target + delta);
    }

    pub fn scroll_to(&mut self, y: f64) {
        self.target = y.clamp(0.0, self.limit);
    }

    /// Adopt a position observed from outside (scrollbar drag, keyboard).
    pub fn sync(&mut self, y: f64) {
        let y = y.clamp(0.0, self.limit);
        self.current = y;
        self.target = y;
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }

    /// Whether a `scroll` event should be adopted with [`sync`](Self::sync).
    ///
    /// Natively scrolled pages always adopt. In smooth mode the frame loop's
    /// own writes fire `scroll` too, so only events outside an animation
    /// (scrollbar drag, keyboard) count.
    pub fn adopts_native_scroll(&self, smooth: bool) -> bool {
        !smooth || self.is_settled()
    }

    /// Whether the page has scrolled past `threshold`.
    pub fn is_past(&self, threshold: f64) -> bool {
        self.current > threshold
    }

    /// Advance the animation by `dt` and return the new position.
    pub fn step(&mut self, dt: Duration) -> f64 {
        if self.is_settled() {
            return self.current;
        }
        let frames = dt.as_secs_f64() * 60.0;
        let factor = 1.0 - (1.0 - self.smoothing).powf(frames);
        self.current += (self.target - self.current) * factor;
        if (self.target - self.current).abs() < SNAP_DISTANCE {
            self.current = self.target;
        }
        self.current
    }
}

/// Scroll-speed metadata attached to a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollMeta {
    /// Parallax direction multiplier.
    pub speed: i8,
    pub position: &'static str,
}

impl ScrollMeta {
    /// Alternate direction by section index.
    pub fn for_index(index: usize) -> Self {
        Self {
            speed: if index % 2 == 0 { 1 } else { -1 },
            position: "center",
        }
    }
}
