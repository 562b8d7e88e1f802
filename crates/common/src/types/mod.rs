//! Shared shapes of the field-mapping contract.
//!
//! The presentation layer hands the core a flat field-name-to-value map and
//! gets back either an entity or a per-field error map. Both shapes live
//! here so every crate agrees on them.

use std::collections::BTreeMap;

/// Flat field-name-to-value mapping exchanged with the presentation layer.
/// An absent key means the field was not submitted.
pub type FieldMap = BTreeMap<String, String>;

/// Per-field validation messages; each field keeps its messages in the order
/// they were produced. An empty map means valid.
pub type MessageMap = BTreeMap<String, Vec<String>>;
