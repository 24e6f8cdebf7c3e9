//! Folio: a single-page personal portfolio.
//!
//! Library half of the `folio` binary, exposing the page components and
//! their state for embedding and tests.

pub mod components;
pub mod state;
