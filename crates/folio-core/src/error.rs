//! Error types for Folio

use std::path::PathBuf;

use thiserror::Error;

use crate::form::{Field, FormStatus};

/// Errors raised when a contact submission cannot start
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(Field),

    #[error("email address is not valid")]
    InvalidEmail,

    #[error("form is not idle (currently {0:?})")]
    NotIdle(FormStatus),
}

/// Errors returned by a [`Mailer`](crate::mailer::Mailer)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendError {
    #[error("message rejected: {0}")]
    Rejected(String),

    #[error("mail service unavailable")]
    Unavailable,
}

/// Errors related to site configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid root margin {0:?}")]
    InvalidRootMargin(String),
}

/// Errors related to scroll-effect registration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScrollError {
    #[error("scroll effects are already registered")]
    AlreadyRegistered,
}
