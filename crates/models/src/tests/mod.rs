/// CRUD operations tests for the customer model
pub mod crud_tests;
