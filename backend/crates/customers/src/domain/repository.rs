//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.
//! Every method issues exactly one statement.

use crate::domain::entities::{Customer, CustomerChanges, NewCustomer};
use crate::error::CustomerResult;
use kernel::id::CustomerId;

/// Customer repository trait
#[trait_variant::make(CustomerRepository: Send)]
pub trait LocalCustomerRepository {
    /// Find a customer by id
    async fn find_by_id(&self, id: CustomerId) -> CustomerResult<Option<Customer>>;

    /// List every customer, ordered by id
    async fn list(&self) -> CustomerResult<Vec<Customer>>;

    /// Insert a customer and return the id storage assigned to it
    async fn create(&self, customer: &NewCustomer) -> CustomerResult<CustomerId>;

    /// Apply changes, returning the number of affected rows
    async fn update(&self, id: CustomerId, changes: &CustomerChanges) -> CustomerResult<u64>;

    /// Delete a customer, returning the number of affected rows
    async fn delete(&self, id: CustomerId) -> CustomerResult<u64>;
}
