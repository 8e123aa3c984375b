use crate::{
    domain::{ContactMessage, SubmissionReceipt},
    error::Result,
};
use async_trait::async_trait;

pub mod simulated;

pub use simulated::SimulatedTransport;

/// Delivery channel for contact form messages
///
/// A failed delivery is recoverable: the form keeps its values so the user can
/// retry.
#[async_trait]
pub trait SubmissionPort: Send + Sync {
    /// Delivers a message, resolving once the outcome is known
    async fn submit(&self, message: &ContactMessage) -> Result<SubmissionReceipt>;
}
