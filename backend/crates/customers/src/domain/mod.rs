//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Customer, NewCustomer, CustomerChanges)
//! - Domain value objects (CompanyName, ContactName)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod value_objects;
