//! HTTP Handlers

use axum::Json;
use axum::body::Body;
use axum::extract::{OriginalUri, State};
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::config::CustomersConfig;
use crate::application::{
    CreateCustomerInput, CreateCustomerUseCase, DeleteCustomerUseCase, QueryCustomersUseCase,
    UpdateCustomerInput, UpdateCustomerUseCase,
};
use crate::domain::repository::CustomerRepository;
use crate::error::{CustomerError, CustomerResult, Operation};
use crate::presentation::dispatcher::Route;
use crate::presentation::dto::{CustomerPayload, CustomerResponse};

/// Shared state for customer handlers
#[derive(Clone)]
pub struct CustomersAppState<R>
where
    R: CustomerRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<CustomersConfig>,
}

// ============================================================================
// Dispatch
// ============================================================================

/// Entry point for every request, whatever its path or method
///
/// The body is taken unread; only the create and update handlers consume it,
/// so routing errors never depend on the body.
pub async fn dispatch<R>(
    State(state): State<CustomersAppState<R>>,
    method: Method,
    OriginalUri(uri): OriginalUri,
    body: Body,
) -> Response
where
    R: CustomerRepository + Clone + Send + Sync + 'static,
{
    let route = match Route::resolve(&method, uri.path(), state.config.id_segment) {
        Ok(route) => route,
        Err(err) => return err.into_response(),
    };

    tracing::debug!(%method, path = uri.path(), ?route, "Dispatching customer request");

    match route {
        Route::FetchOne(customer_id) => get_customer(&state, customer_id).await.into_response(),
        Route::FetchAll => list_customers(&state).await.into_response(),
        Route::Create => add_customer(&state, body).await.into_response(),
        Route::Update(customer_id) => update_customer(&state, customer_id, body)
            .await
            .into_response(),
        Route::Delete(customer_id) => delete_customer(&state, customer_id).await.into_response(),
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/customers/{id}
pub async fn get_customer<R>(
    state: &CustomersAppState<R>,
    customer_id: &str,
) -> CustomerResult<Json<CustomerResponse>>
where
    R: CustomerRepository + Clone + Send + Sync + 'static,
{
    let use_case = QueryCustomersUseCase::new(state.repo.clone());

    let customer = use_case.fetch_one(customer_id).await?;

    Ok(Json(customer.into()))
}

/// GET /api/customers
pub async fn list_customers<R>(
    state: &CustomersAppState<R>,
) -> CustomerResult<Json<Vec<CustomerResponse>>>
where
    R: CustomerRepository + Clone + Send + Sync + 'static,
{
    let use_case = QueryCustomersUseCase::new(state.repo.clone());

    let customers = use_case.fetch_all().await?;

    Ok(Json(customers.into_iter().map(Into::into).collect()))
}

/// POST /api/customers
pub async fn add_customer<R>(
    state: &CustomersAppState<R>,
    body: Body,
) -> CustomerResult<impl IntoResponse>
where
    R: CustomerRepository + Clone + Send + Sync + 'static,
{
    let req = read_payload(body, &state.config, Operation::Create).await?;

    let use_case = CreateCustomerUseCase::new(state.repo.clone());

    let input = CreateCustomerInput {
        company: req.company,
        name: req.name,
    };

    let id = use_case.execute(input).await?;

    Ok((StatusCode::CREATED, format!("Customer created with ID: {id}")))
}

/// PUT /api/customers/{id}
pub async fn update_customer<R>(
    state: &CustomersAppState<R>,
    customer_id: &str,
    body: Body,
) -> CustomerResult<impl IntoResponse>
where
    R: CustomerRepository + Clone + Send + Sync + 'static,
{
    let req = read_payload(body, &state.config, Operation::Update).await?;

    let use_case = UpdateCustomerUseCase::new(state.repo.clone());

    let input = UpdateCustomerInput {
        customer_id: customer_id.to_owned(),
        company: req.company,
        name: req.name,
    };

    use_case.execute(input).await?;

    Ok((StatusCode::OK, "Customer updated successfully"))
}

/// DELETE /api/customers/{id}
pub async fn delete_customer<R>(
    state: &CustomersAppState<R>,
    customer_id: &str,
) -> CustomerResult<impl IntoResponse>
where
    R: CustomerRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteCustomerUseCase::new(state.repo.clone());

    use_case.execute(customer_id).await?;

    Ok((StatusCode::OK, "Customer deleted successfully"))
}

/// Body reading and decoding happen inside the handler, so an oversized or
/// bad body is reported with that handler's generic failure.
async fn read_payload(
    body: Body,
    config: &CustomersConfig,
    operation: Operation,
) -> CustomerResult<CustomerPayload> {
    let bytes = axum::body::to_bytes(body, config.max_body_bytes)
        .await
        .map_err(CustomerError::body_read(operation))?;

    CustomerPayload::from_json(&bytes).map_err(CustomerError::malformed_body(operation))
}
