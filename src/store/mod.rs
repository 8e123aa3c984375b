//! Explicit UI state for the site, updated through `reduce(action)` transforms.

pub mod contact;
pub mod site;

pub use contact::{submit, ContactFormState, FormAction};
pub use site::{Section, SiteAction, SiteState, Theme};
