//! Query Customers Use Case

use crate::domain::entities::Customer;
use crate::domain::repository::CustomerRepository;
use crate::error::{CustomerError, CustomerResult};
use kernel::id::CustomerId;
use std::sync::Arc;

/// Fetch-one / fetch-all use case
pub struct QueryCustomersUseCase<R>
where
    R: CustomerRepository,
{
    repo: Arc<R>,
}

impl<R> QueryCustomersUseCase<R>
where
    R: CustomerRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Fetch a single customer by the raw id taken from the path
    pub async fn fetch_one(&self, raw_id: &str) -> CustomerResult<Customer> {
        // A non-numeric id cannot match any row.
        let Ok(id) = raw_id.parse::<CustomerId>() else {
            tracing::debug!(customer_id = raw_id, "Non-numeric customer id");
            return Err(CustomerError::NotFound);
        };

        self.repo
            .find_by_id(id)
            .await?
            .ok_or(CustomerError::NotFound)
    }

    /// Fetch every customer
    pub async fn fetch_all(&self) -> CustomerResult<Vec<Customer>> {
        self.repo.list().await
    }
}
