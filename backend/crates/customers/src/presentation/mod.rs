//! Presentation Layer
//!
//! Request dispatch, HTTP handlers and DTOs for the API.

pub mod dispatcher;
pub mod dto;
pub mod handlers;
pub mod router;
