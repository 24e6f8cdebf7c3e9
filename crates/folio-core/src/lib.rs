//! Core logic for the Folio portfolio site.
//!
//! Everything in this crate is UI-framework agnostic so it can be unit
//! tested without a webview:
//!
//! - [`content`]: static skills, projects, social and nav tables
//! - [`reveal`]: reveal-on-view controller with root-margin geometry
//! - [`motion`]: animation variants, easing, stagger and CSS rendering
//! - [`scroll`]: smooth-scroll inertia and scroll-effect registration
//! - [`form`]: contact form draft and status state machine
//! - [`mailer`]: the outbound message collaborator
//! - [`config`]: site configuration

pub mod config;
pub mod content;
pub mod error;
pub mod form;
pub mod mailer;
pub mod motion;
pub mod reveal;
pub mod scroll;

pub use config::{SiteConfig, WindowConfig};
pub use content::{NavLink, Project, SectionId, Skill, SocialLink};
pub use error::{ConfigError, FormError, ScrollError, SendError};
pub use form::{ContactForm, ContactMessage, Field, FormDraft, FormStatus, SubmitButton};
pub use mailer::{FailingMailer, Mailer, SimulatedMailer};
pub use motion::{AnimationState, Easing, Frame, ResolvedVariant, Transition, Variant, VariantName, Variants, VisualProps};
pub use reveal::{Observation, ObserverReport, Rect, RevealController, RevealPolicy, RevealState, RootMargin};
pub use scroll::{ScrollEffects, ScrollEffectsGuard, ScrollMeta, SmoothScroller};
