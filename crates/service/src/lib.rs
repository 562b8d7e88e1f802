//! Service layer providing the customer validation-and-persistence pipeline.
//! - Separates business logic from data access.
//! - Reuses entity and row definitions in the `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod customer;
#[cfg(test)]
pub mod test_support;
