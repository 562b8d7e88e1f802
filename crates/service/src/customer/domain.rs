use serde::{Deserialize, Serialize};

/// One customer record (business view).
///
/// An id of zero means "not yet persisted"; the store assigns ids on insert
/// and they never change afterwards. Customers are built by hydration or
/// loaded from the store, never mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i32,
    pub firstname: String,
    pub lastname: String,
    pub street: String,
    pub postcode: String,
    pub city: String,
    pub country: String,
}

impl Customer {
    /// Whether the store has assigned an id yet.
    pub fn is_persisted(&self) -> bool {
        self.id > 0
    }
}
