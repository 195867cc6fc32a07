//! Update Customer Use Case

use crate::domain::entities::CustomerChanges;
use crate::domain::repository::CustomerRepository;
use crate::domain::value_objects::{CompanyName, ContactName};
use crate::error::{CustomerError, CustomerResult};
use kernel::id::CustomerId;
use std::sync::Arc;

/// Input DTO for update customer
#[derive(Debug, Clone)]
pub struct UpdateCustomerInput {
    pub customer_id: String,
    pub company: Option<String>,
    pub name: Option<String>,
}

/// Update Customer Use Case
pub struct UpdateCustomerUseCase<R>
where
    R: CustomerRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateCustomerUseCase<R>
where
    R: CustomerRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: UpdateCustomerInput) -> CustomerResult<()> {
        let changes = CustomerChanges::new(
            CompanyName::parse(input.company),
            ContactName::parse(input.name),
        )
        .ok_or(CustomerError::InvalidCustomerData)?;

        let Ok(id) = input.customer_id.parse::<CustomerId>() else {
            tracing::debug!(customer_id = %input.customer_id, "Non-numeric customer id");
            return Err(CustomerError::NotUpdated);
        };

        let changed = self.repo.update(id, &changes).await?;
        if changed == 0 {
            return Err(CustomerError::NotUpdated);
        }

        tracing::info!(customer_id = %id, "Customer updated");

        Ok(())
    }
}
