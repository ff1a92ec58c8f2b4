//! API route configuration.

use axum::Router;
use axum::routing::{delete, get, post, put};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::error::ErrorResponse;
use super::handlers::{
    self, CreateEmployeeRequest, EmployeeResponse, HealthResponse, UpdateEmployeeRequest,
};
use super::state::AppState;
use crate::db::Database;

/// Build routes with generic database type.
///
/// This macro reduces boilerplate when registering handlers that are generic
/// over the Database trait. It applies the turbofish operator automatically.
macro_rules! routes {
    ($D:ty => {
        $($method:ident $path:literal => $($handler:ident)::+),* $(,)?
    }) => {{
        let router = Router::new();
        $(
            let router = router.route($path, $method($($handler)::+::<$D>));
        )*
        router
    }};
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Roster API",
        version = "0.1.0",
        description = "Employee roster CRUD API",
        license(name = "MIT")
    ),
    paths(
        handlers::root,
        handlers::health,
        handlers::list_employees,
        handlers::get_employee,
        handlers::create_employee,
        handlers::update_employee,
        handlers::delete_employee,
    ),
    components(
        schemas(
            HealthResponse,
            EmployeeResponse,
            CreateEmployeeRequest,
            UpdateEmployeeRequest,
            ErrorResponse,
        )
    ),
    tags(
        (name = "system", description = "System health and status endpoints"),
        (name = "employees", description = "Employee management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the API router with OpenAPI documentation
pub fn create_router<D: Database + 'static>(state: AppState<D>) -> Router {
    let api = ApiDoc::openapi();

    // System routes (non-generic)
    let system_routes = Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health));

    // Employee routes (generic over Database)
    let employee_routes = routes!(D => {
        get "/api/employees" => handlers::list_employees,
        get "/api/employees/{id}" => handlers::get_employee,
        post "/api/employees" => handlers::create_employee,
        put "/api/employees/{id}" => handlers::update_employee,
        delete "/api/employees/{id}" => handlers::delete_employee,
    });

    system_routes
        .merge(employee_routes)
        .merge(Scalar::with_url("/docs", api))
        .with_state(state)
}
