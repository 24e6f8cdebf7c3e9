//! Page sections and the top-level composition.

mod about;
mod app;
mod contact;
mod footer;
mod hero;
mod navbar;
mod projects;

pub use about::About;
pub use app::App;
pub use contact::Contact;
pub use footer::{footer_text, Footer};
pub use hero::Hero;
pub use navbar::Navbar;
pub use projects::Projects;
