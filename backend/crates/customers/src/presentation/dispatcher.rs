//! Request Dispatcher
//!
//! Resolves a request to one of the customer handlers from its method and
//! whether the path carries an identifier segment. The leading segments
//! are positional only and never validated.

use crate::error::{CustomerError, CustomerResult};
use axum::http::Method;

/// Handler selected for a request; borrowed ids are the raw path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    FetchOne(&'a str),
    FetchAll,
    Create,
    Update(&'a str),
    Delete(&'a str),
}

impl<'a> Route<'a> {
    pub fn resolve(method: &Method, path: &'a str, id_segment: usize) -> CustomerResult<Self> {
        let customer_id = customer_id_segment(path, id_segment);

        match (method, customer_id) {
            (&Method::GET, Some(id)) => Ok(Route::FetchOne(id)),
            (&Method::GET, None) => Ok(Route::FetchAll),
            // Any id segment is ignored on create.
            (&Method::POST, _) => Ok(Route::Create),
            (&Method::PUT, Some(id)) => Ok(Route::Update(id)),
            (&Method::PUT, None) => Err(CustomerError::MissingUpdateId),
            (&Method::DELETE, Some(id)) => Ok(Route::Delete(id)),
            (&Method::DELETE, None) => Err(CustomerError::MissingDeleteId),
            _ => Err(CustomerError::MethodNotAllowed),
        }
    }
}

/// The `index`-th non-empty segment of `path`
pub fn customer_id_segment(path: &str, index: usize) -> Option<&str> {
    path.split('/').filter(|segment| !segment.is_empty()).nth(index)
}
