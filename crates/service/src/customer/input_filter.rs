//! Field-by-field validation and normalization of raw customer input.

use common::types::{FieldMap, MessageMap};

/// Maximum accepted length for the free-text fields.
const MAX_TEXT_LEN: usize = 100;
/// Postcode length bounds (ASCII alphanumeric).
const POSTCODE_MIN_LEN: usize = 4;
const POSTCODE_MAX_LEN: usize = 10;

/// Country codes accepted by default.
const DEFAULT_COUNTRIES: &[&str] = &[
    "at", "be", "ch", "de", "dk", "es", "fr", "gb", "it", "nl", "pl", "se", "us",
];

/// Fields that must be present and non-empty after trimming.
const REQUIRED_TEXT_FIELDS: &[&str] = &["firstname", "lastname", "street", "city"];

/// A rejected submission: per-field messages plus the raw submitted values,
/// so the caller can redisplay the form as it was entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    pub messages: MessageMap,
    pub values: FieldMap,
}

/// Validates and normalizes a raw field map before any persistence mutation.
#[derive(Debug, Clone)]
pub struct CustomerInputFilter {
    countries: Vec<String>,
}

impl Default for CustomerInputFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomerInputFilter {
    pub fn new() -> Self {
        Self::with_countries(DEFAULT_COUNTRIES.iter().copied())
    }

    /// Override the allowed country codes (stored lowercase).
    pub fn with_countries<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            countries: codes.into_iter().map(|c| c.into().to_ascii_lowercase()).collect(),
        }
    }

    /// Validate and normalize a raw field map.
    ///
    /// Every field is checked even after the first failure, so the error map
    /// can report several fields at once. Values are trimmed before the
    /// length/pattern checks. On success the returned map holds only the
    /// known fields, normalized; unknown keys are dropped and `id` is kept
    /// only when it was submitted. On failure the [`ValidationFailure`]
    /// carries the messages and the untouched raw values.
    pub fn validate(&self, raw: &FieldMap) -> Result<FieldMap, ValidationFailure> {
        let mut values = FieldMap::new();
        let mut messages = MessageMap::new();

        if let Some(id) = raw.get("id") {
            match id.trim().parse::<i32>() {
                Ok(n) if n > 0 => {
                    values.insert("id".to_string(), n.to_string());
                }
                _ => push(&mut messages, "id", "id must be a positive integer".to_string()),
            }
        }

        for &field in REQUIRED_TEXT_FIELDS {
            let value = raw.get(field).map(|v| v.trim()).unwrap_or("");
            if value.is_empty() {
                push(&mut messages, field, format!("{field} is required"));
            } else if value.chars().count() > MAX_TEXT_LEN {
                push(&mut messages, field, format!("{field} must be at most {MAX_TEXT_LEN} characters"));
            } else {
                values.insert(field.to_string(), value.to_string());
            }
        }

        let postcode = raw.get("postcode").map(|v| v.trim()).unwrap_or("");
        if postcode.is_empty() {
            push(&mut messages, "postcode", "postcode is required".to_string());
        } else if postcode.len() < POSTCODE_MIN_LEN
            || postcode.len() > POSTCODE_MAX_LEN
            || !postcode.chars().all(|c| c.is_ascii_alphanumeric())
        {
            push(
                &mut messages,
                "postcode",
                format!("postcode must be {POSTCODE_MIN_LEN}-{POSTCODE_MAX_LEN} alphanumeric characters"),
            );
        } else {
            values.insert("postcode".to_string(), postcode.to_string());
        }

        let country = raw.get("country").map(|v| v.trim()).unwrap_or("");
        let code = country.to_ascii_lowercase();
        if country.is_empty() {
            push(&mut messages, "country", "country is required".to_string());
        } else if code.len() != 2 || !self.countries.iter().any(|c| *c == code) {
            push(&mut messages, "country", "country must be one of the allowed two-letter codes".to_string());
        } else {
            values.insert("country".to_string(), code);
        }

        if messages.is_empty() {
            Ok(values)
        } else {
            Err(ValidationFailure { messages, values: raw.clone() })
        }
    }
}

fn push(messages: &mut MessageMap, field: &str, message: String) {
    messages.entry(field.to_string()).or_default().push(message);
}
