use std::sync::Arc;

use tracing::{debug, info, instrument};

use common::types::FieldMap;

use super::domain::Customer;
use super::hydrator;
use super::input_filter::{CustomerInputFilter, ValidationFailure};
use super::repository::CustomerRepository;
use crate::errors::ServiceError;

/// Outcome of [`CustomerService::save`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The input passed the filter and the row was persisted.
    Saved(Customer),
    /// The input was rejected; nothing was persisted. Carries the per-field
    /// messages and the raw values for redisplay. Terminal for this call: a
    /// corrected submission is a new `save`.
    Rejected(ValidationFailure),
}

impl SaveOutcome {
    pub fn saved(&self) -> Option<&Customer> {
        match self {
            Self::Saved(customer) => Some(customer),
            Self::Rejected(_) => None,
        }
    }

    pub fn rejected(&self) -> Option<&ValidationFailure> {
        match self {
            Self::Saved(_) => None,
            Self::Rejected(failure) => Some(failure),
        }
    }
}

/// Customer business service independent of any presentation layer.
///
/// Sole entry point for callers; composes the input filter, the hydrator
/// and the repository into validate-then-persist.
#[derive(Debug)]
pub struct CustomerService<R: CustomerRepository> {
    repo: Arc<R>,
    filter: CustomerInputFilter,
}

impl<R: CustomerRepository> CustomerService<R> {
    pub fn new(repo: Arc<R>, filter: CustomerInputFilter) -> Self {
        Self { repo, filter }
    }

    pub fn builder() -> CustomerServiceBuilder<R> {
        CustomerServiceBuilder::default()
    }

    /// All customers ordered by lastname, then firstname.
    pub async fn fetch_list(&self) -> Result<Vec<Customer>, ServiceError> {
        self.repo.fetch_all().await
    }

    /// Single customer by id; a miss is `None`, a normal outcome.
    pub async fn fetch_single_by_id(&self, id: i32) -> Result<Option<Customer>, ServiceError> {
        self.repo.fetch_single_by_id(id).await
    }

    /// Validate raw input and persist it.
    ///
    /// A caller-supplied `id` identifies the target row and overrides any
    /// id inside the raw map; without one, a new row is inserted. Rejected
    /// input never reaches the store.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use common::types::FieldMap;
    /// use service::customer::input_filter::CustomerInputFilter;
    /// use service::customer::repository::mock::MockCustomerRepository;
    /// use service::customer::CustomerService;
    ///
    /// let repo = Arc::new(MockCustomerRepository::default());
    /// let svc = CustomerService::new(repo, CustomerInputFilter::new());
    /// let mut raw = FieldMap::new();
    /// for (field, value) in [
    ///     ("firstname", "Horst"), ("lastname", "Hrubesch"), ("street", "Am Köpfen 124"),
    ///     ("postcode", "21451"), ("city", "Hamburg"), ("country", "de"),
    /// ] {
    ///     raw.insert(field.into(), value.into());
    /// }
    /// let outcome = tokio_test::block_on(svc.save(&raw, None)).unwrap();
    /// assert!(outcome.saved().unwrap().is_persisted());
    /// ```
    #[instrument(skip(self, raw), fields(id = ?id))]
    pub async fn save(&self, raw: &FieldMap, id: Option<i32>) -> Result<SaveOutcome, ServiceError> {
        let mut submitted = raw.clone();
        if let Some(id) = id {
            submitted.insert("id".to_string(), id.to_string());
        }

        let values = match self.filter.validate(&submitted) {
            Ok(values) => values,
            Err(failure) => {
                debug!(fields = ?failure.messages.keys().collect::<Vec<_>>(), "customer_rejected");
                return Ok(SaveOutcome::Rejected(failure));
            }
        };

        let customer = hydrator::hydrate(&values);
        let saved = self.repo.save(&customer).await?;
        info!(customer_id = saved.id, "customer_saved");
        Ok(SaveOutcome::Saved(saved))
    }

    /// Delete by id. Deleting a missing id returns `false`, never an error.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let deleted = self.repo.delete(id).await?;
        if deleted {
            info!(customer_id = id, "customer_deleted");
        }
        Ok(deleted)
    }
}

/// Wires a [`CustomerService`]; both parts are required and `build` fails
/// fast with a configuration error when one was not set.
pub struct CustomerServiceBuilder<R: CustomerRepository> {
    repo: Option<Arc<R>>,
    filter: Option<CustomerInputFilter>,
}

impl<R: CustomerRepository> Default for CustomerServiceBuilder<R> {
    fn default() -> Self {
        Self { repo: None, filter: None }
    }
}

impl<R: CustomerRepository> CustomerServiceBuilder<R> {
    pub fn repository(mut self, repo: Arc<R>) -> Self {
        self.repo = Some(repo);
        self
    }

    pub fn filter(mut self, filter: CustomerInputFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn build(self) -> Result<CustomerService<R>, ServiceError> {
        let repo = self.repo.ok_or_else(|| ServiceError::not_wired("customer repository"))?;
        let filter = self.filter.ok_or_else(|| ServiceError::not_wired("customer filter"))?;
        Ok(CustomerService::new(repo, filter))
    }
}
