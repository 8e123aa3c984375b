use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Status of a contact form submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Submitting => write!(f, "Submitting"),
            Self::Success => write!(f, "Success"),
            Self::Error => write!(f, "Error"),
        }
    }
}

impl SubmissionState {
    /// Checks if a state transition is valid
    pub fn can_transition_to(&self, target: &SubmissionState) -> bool {
        match (self, target) {
            // Submission is allowed from any settled state
            (Self::Idle | Self::Success | Self::Error, Self::Submitting) => true,

            (Self::Submitting, Self::Success | Self::Error) => true,

            // Edit or dismiss after an outcome
            (Self::Success | Self::Error, Self::Idle) => true,

            _ if self == target => true,

            _ => false,
        }
    }

    /// Changes state, rejecting transitions the state machine does not allow
    pub fn transition_to(
        &mut self,
        target: SubmissionState,
    ) -> Result<(), crate::error::PortfolioError> {
        if !self.can_transition_to(&target) {
            return Err(crate::error::PortfolioError::InvalidSubmissionTransition {
                from: self.to_string(),
                to: target.to_string(),
            });
        }

        *self = target;
        Ok(())
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Success | Self::Error)
    }

    /// Banner shown for a settled outcome
    pub fn banner(&self) -> Option<Banner> {
        match self {
            Self::Success => Some(Banner {
                kind: BannerKind::Success,
                title: "Message sent successfully!",
                body: "Thank you for your message! I'll get back to you within 24 hours.",
            }),
            Self::Error => Some(Banner {
                kind: BannerKind::Error,
                title: "Error sending message",
                body: "Sorry, there was an error sending your message. Please try again or contact me directly.",
            }),
            Self::Idle | Self::Submitting => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerKind {
    Success,
    Error,
}

/// Dismissible status message for the view layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Banner {
    pub kind: BannerKind,
    pub title: &'static str,
    pub body: &'static str,
}

/// Acknowledgement returned by a successful submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub id: Uuid,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

impl SubmissionReceipt {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            submitted_at: Utc::now(),
        }
    }
}
