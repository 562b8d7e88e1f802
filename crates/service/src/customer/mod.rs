//! Customer module: three-layer architecture (domain, repository, service).
//!
//! Raw field maps come in from the presentation layer, pass the input
//! filter, get hydrated into a [`domain::Customer`] and go through the
//! repository to the `customers` table.

pub mod domain;
pub mod hydrator;
pub mod input_filter;
pub mod repository;
pub mod repo;
pub mod service;

pub use service::CustomerService;
