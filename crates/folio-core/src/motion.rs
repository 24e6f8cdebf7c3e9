//! Declarative animation variants.
//!
//! Each animated element carries a [`Variants`] table keyed by
//! [`VariantName`]. The rendering layer picks a variant from the element's
//! [`AnimationState`] and emits it as inline CSS; the webview interpolates
//! between successive styles using the emitted `transition`.

use std::time::Duration;

/// Named animation endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantName {
    Hidden,
    Visible,
    Hover,
    Tap,
}

/// Partial set of visual properties. `None` leaves the property at its
/// underlying value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VisualProps {
    pub opacity: Option<f64>,
    /// Horizontal translation in px.
    pub x: Option<f64>,
    /// Vertical translation in px.
    pub y: Option<f64>,
    pub scale: Option<f64>,
}

impl VisualProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opacity(mut self, v: f64) -> Self {
        self.opacity = Some(v);
        self
    }

    pub fn x(mut self, v: f64) -> Self {
        self.x = Some(v);
        self
    }

    pub fn y(mut self, v: f64) -> Self {
        self.y = Some(v);
        self
    }

    pub fn scale(mut self, v: f64) -> Self {
        self.scale = Some(v);
        self
    }

    /// Apply these props on top of a concrete frame.
    pub fn over(&self, base: Frame) -> Frame {
        Frame {
            opacity: self.opacity.unwrap_or(base.opacity),
            x: self.x.unwrap_or(base.x),
            y: self.y.unwrap_or(base.y),
            scale: self.scale.unwrap_or(base.scale),
        }
    }
}

/// Fully specified visual state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Default for Frame {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Frame {
    pub const IDENTITY: Frame = Frame {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };
}

/// Timing curve.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
    CubicBezier(f64, f64, f64, f64),
}

impl Easing {
    /// CSS `transition-timing-function` value.
    pub fn css(&self) -> String {
        match *self {
            Easing::Linear => "linear".to_string(),
            Easing::EaseIn => "ease-in".to_string(),
            Easing::EaseOut => "ease-out".to_string(),
            Easing::EaseInOut => "ease-in-out".to_string(),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                format!("cubic-bezier({}, {}, {}, {})", x1, y1, x2, y2)
            }
        }
    }
}

/// Timing for a move into a variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration: Duration,
    pub delay: Duration,
    pub ease: Easing,
    /// Offset between successive animated children of a container.
    pub stagger_children: Duration,
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(300),
            delay: Duration::ZERO,
            ease: Easing::default(),
            stagger_children: Duration::ZERO,
        }
    }
}

impl Transition {
    pub fn secs(duration: f64) -> Self {
        Self {
            duration: Duration::from_secs_f64(duration),
            ..Self::default()
        }
    }

    pub fn ease(mut self, ease: Easing) -> Self {
        self.ease = ease;
        self
    }

    pub fn delay_secs(mut self, delay: f64) -> Self {
        self.delay = Duration::from_secs_f64(delay);
        self
    }

    pub fn stagger_secs(mut self, stagger: f64) -> Self {
        self.stagger_children = Duration::from_secs_f64(stagger);
        self
    }

    /// Shift this container transition so it begins when `parent` does.
    ///
    /// Used for a stagger container that is itself a staggered child.
    pub fn starting_after(mut self, parent: &ResolvedVariant) -> Self {
        self.delay += parent.transition.delay;
        self
    }
}

/// Delay before the `index`-th child of `container` starts its own
/// transition, measured from the container's own start.
pub fn stagger_delay(container: &Transition, index: usize) -> Duration {
    container.delay + container.stagger_children * index as u32
}

/// A target state plus how to get there.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Variant {
    pub props: VisualProps,
    pub transition: Transition,
}

impl Variant {
    pub fn new(props: VisualProps) -> Self {
        Self {
            props,
            transition: Transition::default(),
        }
    }

    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.transition = transition;
        self
    }
}

/// Interaction state of an animated element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnimationState {
    pub revealed: bool,
    pub hovered: bool,
    pub pressed: bool,
}

impl AnimationState {
    pub fn revealed(revealed: bool) -> Self {
        Self {
            revealed,
            ..Self::default()
        }
    }
}

/// Concrete style for one element at one moment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedVariant {
    pub name: VariantName,
    pub frame: Frame,
    pub transition: Transition,
}

impl ResolvedVariant {
    /// Inline CSS for the frame and the transition into it.
    pub fn to_style(&self) -> String {
        let f = &self.frame;
        let t = &self.transition;
        let timing = format!(
            "{}ms {} {}ms",
            t.duration.as_millis(),
            t.ease.css(),
            t.delay.as_millis()
        );
        format!(
            "opacity: {}; transform: translate({}px, {}px) scale({}); transition: opacity {timing}, transform {timing};",
            f.opacity, f.x, f.y, f.scale
        )
    }
}

/// Named endpoints for one animated element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Variants {
    pub hidden: Variant,
    pub visible: Variant,
    pub hover: Option<Variant>,
    pub tap: Option<Variant>,
}

impl Variants {
    pub fn new(hidden: Variant, visible: Variant) -> Self {
        Self {
            hidden,
            visible,
            hover: None,
            tap: None,
        }
    }

    pub fn with_hover(mut self, hover: Variant) -> Self {
        self.hover = Some(hover);
        self
    }

    pub fn with_tap(mut self, tap: Variant) -> Self {
        self.tap = Some(tap);
        self
    }

    pub fn get(&self, name: VariantName) -> Option<&Variant> {
        match name {
            VariantName::Hidden => Some(&self.hidden),
            VariantName::Visible => Some(&self.visible),
            VariantName::Hover => self.hover.as_ref(),
            VariantName::Tap => self.tap.as_ref(),
        }
    }

    /// Which variant applies. Tap beats hover; neither applies before reveal.
    pub fn target(&self, state: AnimationState) -> VariantName {
        if !state.revealed {
            VariantName::Hidden
        } else if state.pressed && self.tap.is_some() {
            VariantName::Tap
        } else if state.hovered && self.hover.is_some() {
            VariantName::Hover
        } else {
            VariantName::Visible
        }
    }

    /// Resolve the style for the `index`-th child of an optional container.
    ///
    /// Container stagger only delays the reveal; hover and tap respond
    /// immediately and hiding is never staggered.
    pub fn resolve(
        &self,
        state: AnimationState,
        container: Option<&Transition>,
        index: usize,
    ) -> ResolvedVariant {
        let name = self.target(state);
        let base = if state.revealed { &self.visible } else { &self.hidden };
        let base_frame = base.props.over(Frame::IDENTITY);

        let (frame, mut transition) = match self.get(name) {
            Some(v) if name == VariantName::Hover || name == VariantName::Tap => {
                (v.props.over(base_frame), v.transition)
            }
            _ => (base_frame, base.transition),
        };

        if name == VariantName::Visible {
            if let Some(container) = container {
                transition.delay += stagger_delay(container, index);
            }
        }

        ResolvedVariant {
            name,
            frame,
            transition,
        }
    }
}

/// Variant tables used by the page sections.
pub mod presets {
    use super::*;

    /// Fade container whose children rise in 0.2s apart.
    pub fn section_container() -> Variants {
        Variants::new(
            Variant::new(VisualProps::new().opacity(0.0)),
            Variant::new(VisualProps::new().opacity(1.0))
                .with_transition(Transition::default().stagger_secs(0.2)),
        )
    }

    pub fn rise_item() -> Variants {
        Variants::new(
            Variant::new(VisualProps::new().opacity(0.0).y(20.0)),
            Variant::new(VisualProps::new().opacity(1.0).y(0.0))
                .with_transition(Transition::secs(0.5)),
        )
    }

    /// Card that rises into view and lifts 5px on hover.
    pub fn lift_card() -> Variants {
        rise_item().with_hover(
            Variant::new(VisualProps::new().y(-5.0)).with_transition(Transition::secs(0.3)),
        )
    }

    pub fn hero_container() -> Variants {
        Variants::new(
            Variant::new(VisualProps::new().opacity(0.0)),
            Variant::new(VisualProps::new().opacity(1.0))
                .with_transition(Transition::secs(0.4).stagger_secs(0.15)),
        )
    }

    pub fn hero_item() -> Variants {
        Variants::new(
            Variant::new(VisualProps::new().opacity(0.0).y(30.0)),
            Variant::new(VisualProps::new().opacity(1.0).y(0.0))
                .with_transition(Transition::secs(0.6).ease(Easing::EaseOut)),
        )
    }

    pub fn contact_container() -> Variants {
        Variants::new(
            Variant::new(VisualProps::new().opacity(0.0).y(50.0)),
            Variant::new(VisualProps::new().opacity(1.0).y(0.0)).with_transition(
                Transition::secs(0.8).ease(Easing::EaseOut).stagger_secs(0.2),
            ),
        )
    }

    pub fn contact_item() -> Variants {
        Variants::new(
            Variant::new(VisualProps::new().opacity(0.0).y(20.0).scale(0.95)),
            Variant::new(VisualProps::new().opacity(1.0).y(0.0).scale(1.0))
                .with_transition(Transition::secs(0.5).ease(Easing::EaseOut)),
        )
    }

    pub fn form_item() -> Variants {
        Variants::new(
            Variant::new(VisualProps::new().opacity(0.0).x(-20.0)),
            Variant::new(VisualProps::new().opacity(1.0).x(0.0))
                .with_transition(Transition::secs(0.3).ease(Easing::EaseOut)),
        )
    }

    pub fn submit_button() -> Variants {
        Variants::new(
            Variant::new(VisualProps::new().scale(0.8).opacity(0.0)),
            Variant::new(VisualProps::new().scale(1.0).opacity(1.0))
                .with_transition(Transition::secs(0.3).ease(Easing::EaseOut)),
        )
        .with_hover(
            Variant::new(VisualProps::new().scale(1.05))
                .with_transition(Transition::secs(0.2).ease(Easing::EaseInOut)),
        )
        .with_tap(Variant::new(VisualProps::new().scale(0.95)))
    }

    pub fn social_link() -> Variants {
        contact_item()
            .with_hover(Variant::new(VisualProps::new().x(10.0)))
            .with_tap(Variant::new(VisualProps::new().scale(0.95)))
    }

    pub fn profile_image() -> Variants {
        Variants::new(
            Variant::new(VisualProps::new().opacity(0.0).scale(0.8)),
            Variant::new(VisualProps::new().opacity(1.0).scale(1.0))
                .with_transition(Transition::secs(0.5).delay_secs(0.2)),
        )
    }

    pub fn status_message() -> Variants {
        Variants::new(
            Variant::new(VisualProps::new().opacity(0.0).y(-10.0)),
            Variant::new(VisualProps::new().opacity(1.0).y(0.0))
                .with_transition(Transition::secs(0.3)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_offsets_children() {
        let container = presets::section_container().visible.transition;
        assert_eq!(stagger_delay(&container, 0), Duration::ZERO);
        assert_eq!(stagger_delay(&container, 3), Duration::from_millis(600));

        let item = presets::rise_item();
        let third = item.resolve(AnimationState::revealed(true), Some(&container), 2);
        assert_eq!(third.transition.delay, Duration::from_millis(400));

        let hidden = item.resolve(AnimationState::revealed(false), Some(&container), 2);
        assert_eq!(hidden.transition.delay, Duration::ZERO);
    }

    #[test]
    fn test_nested_container_children_follow_wrapper() {
        let outer = presets::contact_container().visible.transition;
        let wrapper = presets::contact_item().resolve(AnimationState::revealed(true), Some(&outer), 5);
        assert_eq!(wrapper.transition.delay, Duration::from_secs(1));

        let inner = presets::section_container()
            .visible
            .transition
            .starting_after(&wrapper);
        let rows = presets::form_item();
        let first = rows.resolve(AnimationState::revealed(true), Some(&inner), 0);
        let last = rows.resolve(AnimationState::revealed(true), Some(&inner), 3);
        assert!(first.transition.delay >= wrapper.transition.delay);
        assert_eq!(first.transition.delay, Duration::from_secs(1));
        assert_eq!(last.transition.delay, Duration::from_millis(1600));
    }

    #[test]
    fn test_easing_css_names() {
        assert_eq!(Easing::default().css(), "ease-in-out");
        assert_eq!(Easing::EaseOut.css(), "ease-out");
        assert_eq!(
            Easing::CubicBezier(0.2, 0.9, 0.3, 1.0).css(),
            "cubic-bezier(0.2, 0.9, 0.3, 1)"
        );
    }

    #[test]
    fn test_end_state_matches_trigger() {
        let item = presets::rise_item();
        let hidden = item.resolve(AnimationState::revealed(false), None, 0);
        assert_eq!(hidden.name, VariantName::Hidden);
        assert_eq!(hidden.frame.opacity, 0.0);
        assert_eq!(hidden.frame.y, 20.0);

        let visible = item.resolve(AnimationState::revealed(true), None, 0);
        assert_eq!(visible.frame, Frame::IDENTITY);
    }

    #[test]
    fn test_tap_beats_hover() {
        let button = presets::submit_button();
        let state = AnimationState {
            revealed: true,
            hovered: true,
            pressed: true,
        };
        let resolved = button.resolve(state, None, 0);
        assert_eq!(resolved.name, VariantName::Tap);
        assert_eq!(resolved.frame.scale, 0.95);

        let hovered = button.resolve(AnimationState { pressed: false, ..state }, None, 0);
        assert_eq!(hovered.frame.scale, 1.05);
        assert_eq!(hovered.frame.opacity, 1.0);
    }

    #[test]
    fn test_hover_ignored_before_reveal() {
        let link = presets::social_link();
        let state = AnimationState {
            revealed: false,
            hovered: true,
            pressed: false,
        };
        assert_eq!(link.target(state), VariantName::Hidden);
        assert_eq!(presets::rise_item().target(AnimationState { revealed: true, ..state }), VariantName::Visible);
    }

    #[test]
    fn test_to_style() {
        let style = presets::rise_item()
            .resolve(AnimationState::revealed(false), None, 0)
            .to_style();
        assert_eq!(
            style,
            "opacity: 0; transform: translate(0px, 20px) scale(1); transition: opacity 300ms ease-in-out 0ms, transform 300ms ease-in-out 0ms;"
        );
    }
}
