//! Application Configuration
//!
//! Configuration for the customers application layer.

/// Customers application configuration
#[derive(Debug, Clone)]
pub struct CustomersConfig {
    /// Index of the path segment holding the customer id,
    /// counted after empty segments are dropped (`/api/customers/{id}` -> 2)
    pub id_segment: usize,
    /// Largest POST / PUT body read, in bytes. Other methods never read the body.
    pub max_body_bytes: usize,
}

impl Default for CustomersConfig {
    fn default() -> Self {
        Self {
            id_segment: 2,
            max_body_bytes: 2 * 1024 * 1024,
        }
    }
}
