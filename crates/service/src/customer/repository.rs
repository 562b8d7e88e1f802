use async_trait::async_trait;

use super::domain::Customer;
use crate::errors::ServiceError;

/// Repository abstraction for customer persistence.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// All customers ordered by lastname, then firstname.
    async fn fetch_all(&self) -> Result<Vec<Customer>, ServiceError>;

    /// Exact-match lookup; a miss is `None`, not an error.
    async fn fetch_single_by_id(&self, id: i32) -> Result<Option<Customer>, ServiceError>;

    /// Insert when `customer.id` is zero (the store assigns the id),
    /// full-row update otherwise. Updating a missing id fails with
    /// [`ServiceError::NotFound`].
    async fn save(&self, customer: &Customer) -> Result<Customer, ServiceError>;

    /// Delete by id; `false` when nothing matched.
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    use super::*;

    #[derive(Debug, Default)]
    pub struct MockCustomerRepository {
        rows: Mutex<BTreeMap<i32, Customer>>, // key: id
    }

    impl MockCustomerRepository {
        /// Seed the repository with existing rows, keyed by their ids.
        pub fn with_rows<I: IntoIterator<Item = Customer>>(rows: I) -> Self {
            Self {
                rows: Mutex::new(rows.into_iter().map(|c| (c.id, c)).collect()),
            }
        }
    }

    #[async_trait]
    impl CustomerRepository for MockCustomerRepository {
        async fn fetch_all(&self) -> Result<Vec<Customer>, ServiceError> {
            let rows = self.rows.lock().unwrap();
            let mut all: Vec<Customer> = rows.values().cloned().collect();
            all.sort_by(|a, b| a.lastname.cmp(&b.lastname).then_with(|| a.firstname.cmp(&b.firstname)));
            Ok(all)
        }

        async fn fetch_single_by_id(&self, id: i32) -> Result<Option<Customer>, ServiceError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows.get(&id).cloned())
        }

        async fn save(&self, customer: &Customer) -> Result<Customer, ServiceError> {
            if customer.id < 0 {
                return Err(ServiceError::Validation("id must not be negative".to_string()));
            }
            let mut rows = self.rows.lock().unwrap();
            if customer.id == 0 {
                let id = rows.keys().next_back().copied().unwrap_or(0) + 1;
                let saved = Customer { id, ..customer.clone() };
                rows.insert(id, saved.clone());
                Ok(saved)
            } else {
                if !rows.contains_key(&customer.id) {
                    return Err(ServiceError::not_found("customer"));
                }
                rows.insert(customer.id, customer.clone());
                Ok(customer.clone())
            }
        }

        async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            Ok(rows.remove(&id).is_some())
        }
    }
}
