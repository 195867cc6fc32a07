//! Application Layer - Use cases

pub mod config;
pub mod create_customer;
pub mod delete_customer;
pub mod query_customers;
pub mod update_customer;

pub use create_customer::{CreateCustomerInput, CreateCustomerUseCase};
pub use delete_customer::DeleteCustomerUseCase;
pub use query_customers::QueryCustomersUseCase;
pub use update_customer::{UpdateCustomerInput, UpdateCustomerUseCase};
