//! DOM-free state for the TechPrint3D site frontend.
//!
//! Each component owns a small state object with pure transitions. The
//! `site-wasm` crate holds one of each and renders them into the page.

pub mod config;
pub mod contact;
pub mod error;
pub mod gallery;
pub mod navigation;
pub mod reveal;
pub mod submit;
pub mod theme;
pub mod toast;
pub mod viewer;

pub use config::SiteConfig;
pub use error::{ContactError, SiteError, SubmitError, ValidationError};
