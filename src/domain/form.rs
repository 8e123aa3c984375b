use crate::domain::field::{validate_field, FieldName};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Current values of a form, keyed by field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormRecord {
    values: BTreeMap<FieldName, String>,
}

impl FormRecord {
    /// Creates a record with no fields
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the contact form record with every field empty
    pub fn contact() -> Self {
        Self {
            values: FieldName::ALL
                .iter()
                .map(|field| (*field, String::new()))
                .collect(),
        }
    }

    /// Builder-style setter
    pub fn with(mut self, field: FieldName, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Returns the value of a field, or "" if the record has no such key
    pub fn get(&self, field: FieldName) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Empties every value while keeping the keys
    pub fn clear_values(&mut self) {
        for value in self.values.values_mut() {
            value.clear();
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.values.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.values.iter().map(|(field, value)| (*field, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Error messages for the invalid fields of a record
///
/// An empty result means the record is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    errors: BTreeMap<FieldName, String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the outcome of validating one field, clearing any previous error
    pub fn set(&mut self, field: FieldName, error: Option<String>) {
        match error {
            Some(message) => {
                self.errors.insert(field, message);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.errors.iter().map(|(field, message)| (*field, message.as_str()))
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Aggregate validity used to gate submission
    pub fn is_valid(&self) -> bool {
        self.is_empty()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

/// Fields the user has blurred at least once
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TouchedSet {
    fields: BTreeSet<FieldName>,
}

impl TouchedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn touch(&mut self, field: FieldName) {
        self.fields.insert(field);
    }

    pub fn touch_all(&mut self) {
        self.fields.extend(FieldName::ALL);
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.fields.contains(&field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn clear(&mut self) {
        self.fields.clear();
    }
}

/// Validates every field present in the record
pub fn validate_form(record: &FormRecord) -> ValidationResult {
    let mut result = ValidationResult::new();
    for (field, value) in record.iter() {
        result.set(field, validate_field(field, value));
    }
    result
}

/// The payload handed to a submission port
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl From<&FormRecord> for ContactMessage {
    fn from(record: &FormRecord) -> Self {
        Self {
            name: record.get(FieldName::Name).to_string(),
            email: record.get(FieldName::Email).to_string(),
            subject: record.get(FieldName::Subject).to_string(),
            message: record.get(FieldName::Message).to_string(),
        }
    }
}
