use crate::{
    domain::{
        validate_field, validate_form, Banner, ContactMessage, FieldName, FormRecord,
        SubmissionReceipt, SubmissionState, TouchedSet, ValidationResult,
    },
    transport::SubmissionPort,
};
use serde::Serialize;

/// Characters after which the message counter turns into a warning
const MESSAGE_WARNING_THRESHOLD: usize = 900;

/// Events the contact form view feeds into the store
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    /// A keystroke replaced the value of a field
    Change { field: FieldName, value: String },
    /// Focus left a field
    Blur { field: FieldName },
    /// The user asked to send the message
    Submit,
    /// The submission port acknowledged delivery
    Delivered(SubmissionReceipt),
    /// The submission port reported a recoverable failure
    Failed(String),
    /// The user closed the success or error banner
    DismissBanner,
}

/// State of the contact form between renders
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactFormState {
    pub record: FormRecord,
    pub touched: TouchedSet,
    pub errors: ValidationResult,
    pub status: SubmissionState,
    pub receipt: Option<SubmissionReceipt>,
    pub failure: Option<String>,
}

impl Default for ContactFormState {
    fn default() -> Self {
        Self {
            record: FormRecord::contact(),
            touched: TouchedSet::new(),
            errors: ValidationResult::new(),
            status: SubmissionState::Idle,
            receipt: None,
            failure: None,
        }
    }
}

impl ContactFormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one action and returns the resulting state
    pub fn reduce(mut self, action: FormAction) -> Self {
        match action {
            FormAction::Change { field, value } => {
                if self.status.is_submitting() {
                    tracing::debug!(%field, "ignoring edit while submitting");
                    return self;
                }
                self.record.set(field, value);
                if self.touched.contains(field) {
                    self.errors
                        .set(field, validate_field(field, self.record.get(field)));
                }
                if self.status.is_terminal() {
                    self.transition(SubmissionState::Idle);
                }
            }
            FormAction::Blur { field } => {
                if self.status.is_submitting() {
                    return self;
                }
                self.touched.touch(field);
                self.errors
                    .set(field, validate_field(field, self.record.get(field)));
            }
            FormAction::Submit => {
                if self.status.is_submitting() {
                    tracing::debug!("submission already in flight");
                    return self;
                }
                self.errors = validate_form(&self.record);
                self.touched.touch_all();
                if !self.errors.is_valid() {
                    tracing::debug!(invalid_fields = self.errors.len(), "submission blocked");
                    return self;
                }
                self.receipt = None;
                self.failure = None;
                self.transition(SubmissionState::Submitting);
            }
            FormAction::Delivered(receipt) => {
                if !self.status.is_submitting() {
                    tracing::warn!(id = %receipt.id, "delivery outside a submission ignored");
                    return self;
                }
                self.transition(SubmissionState::Success);
                self.record.clear_values();
                self.touched.clear();
                self.errors.clear();
                self.receipt = Some(receipt);
            }
            FormAction::Failed(reason) => {
                if !self.status.is_submitting() {
                    tracing::warn!(%reason, "failure outside a submission ignored");
                    return self;
                }
                self.transition(SubmissionState::Error);
                self.failure = Some(reason);
            }
            FormAction::DismissBanner => {
                if self.status.is_terminal() {
                    self.transition(SubmissionState::Idle);
                }
            }
        }
        self
    }

    fn transition(&mut self, target: SubmissionState) {
        let from = self.status;
        match self.status.transition_to(target) {
            Ok(()) => tracing::debug!(%from, to = %target, "submission state changed"),
            Err(err) => tracing::warn!(%err, "submission transition rejected"),
        }
    }

    /// Error to display for a field; hidden until the field is touched
    pub fn visible_error(&self, field: FieldName) -> Option<&str> {
        if self.touched.contains(field) {
            self.errors.get(field)
        } else {
            None
        }
    }

    /// Whether the current values would pass validation
    pub fn is_valid(&self) -> bool {
        validate_form(&self.record).is_valid()
    }

    pub fn inputs_disabled(&self) -> bool {
        self.status.is_submitting()
    }

    pub fn banner(&self) -> Option<Banner> {
        self.status.banner()
    }

    pub fn message_length(&self) -> usize {
        self.record.get(FieldName::Message).chars().count()
    }

    pub fn message_near_limit(&self) -> bool {
        self.message_length() > MESSAGE_WARNING_THRESHOLD
    }
}

/// Runs one submission attempt through `port`
///
/// Returns the state unchanged if a submission is already in flight, and
/// without contacting the port if validation blocks the attempt.
pub async fn submit<P>(state: ContactFormState, port: &P) -> ContactFormState
where
    P: SubmissionPort + ?Sized,
{
    if state.status.is_submitting() {
        return state;
    }

    let state = state.reduce(FormAction::Submit);
    if !state.status.is_submitting() {
        return state;
    }

    let message = ContactMessage::from(&state.record);
    match port.submit(&message).await {
        Ok(receipt) => state.reduce(FormAction::Delivered(receipt)),
        Err(err) => state.reduce(FormAction::Failed(err.to_string())),
    }
}
