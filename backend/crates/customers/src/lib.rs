//! Customers Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - Request dispatcher, HTTP handlers, DTOs
//!
//! ## Routing Model
//! - A single dispatcher receives every request; the identifier is the third
//!   non-empty path segment (`/api/customers/{id}`)
//! - GET / POST / PUT / DELETE map to fetch, create, update and delete;
//!   every other method is answered with 405
//! - Each handler issues exactly one statement; any storage or body failure
//!   becomes a 500 with a generic per-operation message

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::CustomersConfig;
pub use error::{CustomerError, CustomerResult, Operation};
pub use infra::sqlite::SqliteCustomerRepository;
pub use presentation::router::{customers_router, customers_router_generic};
