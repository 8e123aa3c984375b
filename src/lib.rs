//! # Folio Core
//!
//! Core logic for a personal portfolio site: contact form validation and
//! submission flow, plus category filtering over the project and service
//! catalogs.
//!
//! The crate holds no global state and does no I/O of its own beyond reading
//! its configuration file. Views feed events into the state objects in
//! [`store`] and render what they return.

pub mod config;
pub mod domain;
pub mod error;
pub mod store;
pub mod transport;

// Re-export commonly used types
pub use config::{PortfolioConfig, TransportConfig};
pub use domain::{
    catalog::{filter_by_category, list_categories, CatalogItem, CategoryFilter},
    field::{validate_field, FieldName},
    form::{validate_form, FormRecord, ValidationResult},
    submission::SubmissionState,
};
pub use error::{PortfolioError, Result};
pub use store::{ContactFormState, FormAction, SiteAction, SiteState};
pub use transport::{SimulatedTransport, SubmissionPort};
