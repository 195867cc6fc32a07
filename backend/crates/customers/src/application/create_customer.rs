//! Create Customer Use Case

use crate::domain::entities::NewCustomer;
use crate::domain::repository::CustomerRepository;
use crate::domain::value_objects::{CompanyName, ContactName};
use crate::error::{CustomerError, CustomerResult};
use kernel::id::CustomerId;
use std::sync::Arc;

/// Input DTO for create customer
#[derive(Debug, Clone)]
pub struct CreateCustomerInput {
    pub company: Option<String>,
    pub name: Option<String>,
}

/// Create Customer Use Case
pub struct CreateCustomerUseCase<R>
where
    R: CustomerRepository,
{
    repo: Arc<R>,
}

impl<R> CreateCustomerUseCase<R>
where
    R: CustomerRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: CreateCustomerInput) -> CustomerResult<CustomerId> {
        let (Some(company_name), Some(contact_name)) = (
            CompanyName::parse(input.company),
            ContactName::parse(input.name),
        ) else {
            return Err(CustomerError::InvalidCustomerData);
        };

        let customer = NewCustomer {
            company_name,
            contact_name,
        };

        let id = self.repo.create(&customer).await?;

        tracing::info!(customer_id = %id, "Customer created");

        Ok(id)
    }
}
