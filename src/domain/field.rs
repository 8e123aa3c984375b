use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr, sync::OnceLock};

/// A field of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    Name,
    Email,
    Subject,
    Message,
}

impl FieldName {
    /// Every contact form field, in display order
    pub const ALL: [FieldName; 4] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Subject,
        FieldName::Message,
    ];

    /// Returns the lowercase key used by form controls
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    /// Returns the validation rule for this field
    pub fn rule(&self) -> FieldRule {
        match self {
            Self::Name => FieldRule {
                required: true,
                min_length: Some(2),
                max_length: Some(50),
                pattern: Some(name_pattern()),
                message: "Name must be 2-50 characters and contain only letters and spaces",
            },
            Self::Email => FieldRule {
                required: true,
                min_length: None,
                max_length: None,
                pattern: Some(email_pattern()),
                message: "Please enter a valid email address",
            },
            Self::Subject => FieldRule {
                required: true,
                min_length: Some(5),
                max_length: Some(100),
                pattern: None,
                message: "Subject must be 5-100 characters long",
            },
            Self::Message => FieldRule {
                required: true,
                min_length: Some(10),
                max_length: Some(1000),
                pattern: None,
                message: "Message must be 10-1000 characters long",
            },
        }
    }
}

impl FromStr for FieldName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(FieldName::Name),
            "email" => Ok(FieldName::Email),
            "subject" => Ok(FieldName::Subject),
            "message" => Ok(FieldName::Message),
            _ => Err(format!(
                "Unknown form field '{}'. Valid fields: name, email, subject, message",
                s
            )),
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "Name"),
            Self::Email => write!(f, "Email"),
            Self::Subject => write!(f, "Subject"),
            Self::Message => write!(f, "Message"),
        }
    }
}

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-zA-Z\s]+$").expect("name pattern compiles"))
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
    })
}

/// Static validation configuration for one form field
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<&'static Regex>,
    pub message: &'static str,
}

impl FieldRule {
    /// Checks a raw value against this rule
    ///
    /// Checks run in order required, min length, max length, pattern, and
    /// stop at the first failure. Lengths count characters, not bytes.
    pub fn check(&self, field: FieldName, value: &str) -> Option<String> {
        if value.trim().is_empty() {
            return self.required.then(|| format!("{} is required", field));
        }

        let length = value.chars().count();

        if self.min_length.is_some_and(|min| length < min) {
            return Some(self.message.to_string());
        }

        if self.max_length.is_some_and(|max| length > max) {
            return Some(self.message.to_string());
        }

        if self.pattern.is_some_and(|pattern| !pattern.is_match(value)) {
            return Some(self.message.to_string());
        }

        None
    }
}

/// Validates a single field value, returning the error message if it fails
pub fn validate_field(field: FieldName, value: &str) -> Option<String> {
    field.rule().check(field, value)
}

/// Validates a value for a field identified by its exact lowercase key
///
/// Keys without a rule always pass, including differently cased keys.
pub fn validate_field_named(field: &str, value: &str) -> Option<String> {
    FieldName::ALL
        .into_iter()
        .find(|name| name.as_str() == field)
        .and_then(|field| validate_field(field, value))
}
