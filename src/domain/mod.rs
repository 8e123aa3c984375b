pub mod catalog;
pub mod field;
pub mod form;
pub mod project;
pub mod service;
pub mod submission;

pub use catalog::{
    category_counts, filter_by_category, get_by_id, list_categories, list_facet_values,
    CatalogItem, CategoryFilter, ALL_CATEGORIES,
};
pub use field::{validate_field, validate_field_named, FieldName, FieldRule};
pub use form::{validate_form, ContactMessage, FormRecord, TouchedSet, ValidationResult};
pub use project::{Project, PROJECTS};
pub use service::{PricingTier, Service, PRICING_TIERS, SERVICES};
pub use submission::{Banner, BannerKind, SubmissionReceipt, SubmissionState};
