//! Reveal-on-view controller.
//!
//! A section's entrance animation is driven by a single boolean. The
//! webview reports intersections (or raw geometry when it has no
//! `IntersectionObserver`), and the controller turns those reports into a
//! latched visible state.

use std::fmt;

use serde::Deserialize;

use crate::error::ConfigError;

/// Axis-aligned rectangle in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// One side of a root margin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarginValue {
    Px(f64),
    Percent(f64),
}

impl MarginValue {
    fn parse(token: &str) -> Option<Self> {
        if token == "0" {
            return Some(MarginValue::Px(0.0));
        }
        if let Some(n) = token.strip_suffix("px") {
            return finite(n).map(MarginValue::Px);
        }
        if let Some(n) = token.strip_suffix('%') {
            return finite(n).map(MarginValue::Percent);
        }
        None
    }

    /// Resolve to pixels against the given reference length.
    pub fn resolve(&self, reference: f64) -> f64 {
        match self {
            MarginValue::Px(px) => *px,
            MarginValue::Percent(pct) => reference * pct / 100.0,
        }
    }
}

/// CSS lengths are finite; `NaN` and `inf` would be rejected by the webview.
fn finite(n: &str) -> Option<f64> {
    n.parse::<f64>().ok().filter(|v| v.is_finite())
}

impl fmt::Display for MarginValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarginValue::Px(px) => write!(f, "{}px", px),
            MarginValue::Percent(pct) => write!(f, "{}%", pct),
        }
    }
}

/// CSS-style margin applied to the viewport before intersection tests.
///
/// Negative values shrink the viewport, so the section fires only once it
/// is that far inside the visible area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootMargin {
    pub top: MarginValue,
    pub right: MarginValue,
    pub bottom: MarginValue,
    pub left: MarginValue,
}

impl Default for RootMargin {
    fn default() -> Self {
        let zero = MarginValue::Px(0.0);
        Self {
            top: zero,
            right: zero,
            bottom: zero,
            left: zero,
        }
    }
}

impl RootMargin {
    /// Parse CSS margin shorthand (1 to 4 components).
    pub fn parse(input: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidRootMargin(input.to_string());
        let values = input
            .split_whitespace()
            .map(MarginValue::parse)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(invalid)?;

        let (top, right, bottom, left) = match values.as_slice() {
            [all] => (*all, *all, *all, *all),
            [v, h] => (*v, *h, *v, *h),
            [t, h, b] => (*t, *h, *b, *h),
            [t, r, b, l] => (*t, *r, *b, *l),
            _ => return Err(invalid()),
        };
        Ok(Self { top, right, bottom, left })
    }

    /// Grow (or shrink, for negative margins) the viewport rectangle.
    pub fn expand(&self, viewport: Rect) -> Rect {
        let top = self.top.resolve(viewport.height);
        let bottom = self.bottom.resolve(viewport.height);
        let left = self.left.resolve(viewport.width);
        let right = self.right.resolve(viewport.width);
        Rect {
            x: viewport.x - left,
            y: viewport.y - top,
            width: (viewport.width + left + right).max(0.0),
            height: (viewport.height + top + bottom).max(0.0),
        }
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

/// Whether `element` overlaps the margin-adjusted `viewport` with positive area.
pub fn intersects(element: Rect, viewport: Rect, margin: &RootMargin) -> bool {
    let root = margin.expand(viewport);
    let overlap_w = element.right().min(root.right()) - element.x.max(root.x);
    let overlap_h = element.bottom().min(root.bottom()) - element.y.max(root.y);
    overlap_w > 0.0 && overlap_h > 0.0
}

/// How a section decides when to reveal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealPolicy {
    /// Latch the first intersection for the lifetime of the element.
    pub once: bool,
    pub root_margin: RootMargin,
}

impl Default for RevealPolicy {
    fn default() -> Self {
        Self {
            once: true,
            root_margin: RootMargin {
                top: MarginValue::Px(-100.0),
                right: MarginValue::Px(-100.0),
                bottom: MarginValue::Px(-100.0),
                left: MarginValue::Px(-100.0),
            },
        }
    }
}

impl RevealPolicy {
    /// Latching policy with the given margin shorthand.
    pub fn once_with_margin(margin: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            once: true,
            root_margin: RootMargin::parse(margin)?,
        })
    }
}

/// Per-section animation trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealState {
    pub triggered: bool,
}

/// A single notification from the viewport observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    Intersecting,
    NotIntersecting,
    /// The platform cannot observe intersections.
    Unsupported,
}

/// Message posted by the webview observer script.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ObserverReport {
    /// Native observer result, margin already applied.
    Intersection { intersecting: bool },
    /// Raw geometry from the scroll-polling fallback.
    Geometry { element: Rect, viewport: Rect },
    Unsupported,
}

/// Latches [`RevealState`] according to a [`RevealPolicy`].
#[derive(Debug, Clone)]
pub struct RevealController {
    policy: RevealPolicy,
    state: RevealState,
}

impl RevealController {
    pub fn new(policy: RevealPolicy) -> Self {
        Self {
            policy,
            state: RevealState::default(),
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state.triggered
    }

    /// Whether further observations can still change the state.
    pub fn is_latched(&self) -> bool {
        self.policy.once && self.state.triggered
    }

    /// Apply an observation. Returns `true` if the visible state changed.
    pub fn observe(&mut self, observation: Observation) -> bool {
        let next = match observation {
            Observation::Intersecting => true,
            Observation::NotIntersecting if self.is_latched() => true,
            Observation::NotIntersecting => false,
            Observation::Unsupported => {
                tracing::debug!("intersection observation unsupported, revealing");
                self.policy.once = true;
                true
            }
        };

        let changed = next != self.state.triggered;
        self.state.triggered = next;
        if changed && self.is_latched() {
            tracing::debug!("reveal latched");
        }
        changed
    }

    /// Apply a raw report from the observer script.
    pub fn apply(&mut self, report: ObserverReport) -> bool {
        let observation = match report {
            ObserverReport::Intersection { intersecting: true } => Observation::Intersecting,
            ObserverReport::Intersection { intersecting: false } => Observation::NotIntersecting,
            ObserverReport::Geometry { element, viewport } => {
                if intersects(element, viewport, &self.policy.root_margin) {
                    Observation::Intersecting
                } else {
                    Observation::NotIntersecting
                }
            }
            ObserverReport::Unsupported => Observation::Unsupported,
        };
        self.observe(observation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Rect {
        Rect::new(0.0, 0.0, 1000.0, 800.0)
    }

    #[test]
    fn test_parse_single_value() {
        let m = RootMargin::parse("-100px").unwrap();
        assert_eq!(m.top, MarginValue::Px(-100.0));
        assert_eq!(m.left, MarginValue::Px(-100.0));
    }

    #[test]
    fn test_parse_shorthand_forms() {
        let two = RootMargin::parse("10px 5%").unwrap();
        assert_eq!(two.top, MarginValue::Px(10.0));
        assert_eq!(two.right, MarginValue::Percent(5.0));
        assert_eq!(two.bottom, MarginValue::Px(10.0));

        let three = RootMargin::parse("1px 2px 3px").unwrap();
        assert_eq!(three.bottom, MarginValue::Px(3.0));
        assert_eq!(three.left, MarginValue::Px(2.0));

        let four = RootMargin::parse("0 0px -50px 0").unwrap();
        assert_eq!(four.bottom, MarginValue::Px(-50.0));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(RootMargin::parse("").is_err());
        assert!(RootMargin::parse("10em").is_err());
        assert!(RootMargin::parse("1px 2px 3px 4px 5px").is_err());
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        for margin in ["NaNpx", "infpx", "-infpx", "infinity%", "0 NaN%"] {
            assert!(RootMargin::parse(margin).is_err(), "{margin} accepted");
        }
    }

    #[test]
    fn test_display_round_trips() {
        let m = RootMargin::parse("0 0 -50px 10%").unwrap();
        assert_eq!(m.to_string(), "0px 0px -50px 10%");
        assert_eq!(RootMargin::parse(&m.to_string()).unwrap(), m);
    }

    #[test]
    fn test_negative_margin_delays_intersection() {
        let margin = RootMargin::parse("-100px").unwrap();
        // Top edge 50px inside the viewport: visible, but not past the margin.
        let barely = Rect::new(100.0, 750.0, 400.0, 400.0);
        assert!(intersects(barely, viewport(), &RootMargin::default()));
        assert!(!intersects(barely, viewport(), &margin));

        let inside = Rect::new(100.0, 600.0, 400.0, 400.0);
        assert!(intersects(inside, viewport(), &margin));
    }

    #[test]
    fn test_percent_margin_resolves_against_viewport() {
        let margin = RootMargin::parse("10%").unwrap();
        let grown = margin.expand(viewport());
        assert_eq!(grown.y, -80.0);
        assert_eq!(grown.height, 960.0);
        assert_eq!(grown.x, -100.0);
    }

    #[test]
    fn test_once_latches() {
        let mut c = RevealController::new(RevealPolicy::default());
        assert!(!c.is_visible());
        assert!(c.observe(Observation::Intersecting));
        assert!(!c.observe(Observation::NotIntersecting));
        assert!(c.is_visible());
        assert!(c.is_latched());
    }

    #[test]
    fn test_repeatable_policy_follows_reports() {
        let mut c = RevealController::new(RevealPolicy {
            once: false,
            root_margin: RootMargin::default(),
        });
        c.observe(Observation::Intersecting);
        assert!(c.observe(Observation::NotIntersecting));
        assert!(!c.is_visible());
    }

    #[test]
    fn test_unsupported_fails_open() {
        let mut c = RevealController::new(RevealPolicy {
            once: false,
            root_margin: RootMargin::default(),
        });
        c.observe(Observation::Unsupported);
        c.observe(Observation::NotIntersecting);
        assert!(c.is_visible());
    }

    #[test]
    fn test_apply_reports() {
        let mut c = RevealController::new(RevealPolicy::default());
        let report: ObserverReport = serde_json::from_str(
            r#"{"kind":"geometry","element":{"x":0,"y":750,"width":500,"height":500},"viewport":{"x":0,"y":0,"width":1000,"height":800}}"#,
        )
        .unwrap();
        assert!(!c.apply(report));

        let report: ObserverReport =
            serde_json::from_str(r#"{"kind":"intersection","intersecting":true}"#).unwrap();
        assert!(c.apply(report));
        assert!(c.is_visible());
    }
}
