//! Delete Customer Use Case

use crate::domain::repository::CustomerRepository;
use crate::error::{CustomerError, CustomerResult};
use kernel::id::CustomerId;
use std::sync::Arc;

/// Delete Customer Use Case
pub struct DeleteCustomerUseCase<R>
where
    R: CustomerRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteCustomerUseCase<R>
where
    R: CustomerRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, raw_id: &str) -> CustomerResult<()> {
        let Ok(id) = raw_id.parse::<CustomerId>() else {
            tracing::debug!(customer_id = raw_id, "Non-numeric customer id");
            return Err(CustomerError::NotFound);
        };

        if self.repo.delete(id).await? == 0 {
            return Err(CustomerError::NotFound);
        }

        tracing::info!(customer_id = %id, "Customer deleted");

        Ok(())
    }
}
