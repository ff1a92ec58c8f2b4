//! Employee CRUD handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderName, StatusCode, header};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use crate::api::error::{ApiError, ErrorResponse};
use crate::api::state::AppState;
use crate::db::{Database, Employee, EmployeeRepository};

// =============================================================================
// DTOs
// =============================================================================

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    #[schema(example = 1)]
    pub employee_id: i64,
    #[schema(example = "Alice")]
    pub name: String,
}

impl From<Employee> for EmployeeResponse {
    fn from(e: Employee) -> Self {
        Self {
            employee_id: e.employee_id,
            name: e.name,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    /// Ignored: the store assigns the id.
    #[serde(default)]
    #[schema(example = 0)]
    pub employee_id: i64,
    #[schema(example = "Alice")]
    pub name: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeRequest {
    /// Must match the path id. Defaults to 0 when omitted, which fails the
    /// match like the original wire format.
    #[serde(default)]
    #[schema(example = 1)]
    pub employee_id: i64,
    #[schema(example = "Bob")]
    pub name: String,
}

// =============================================================================
// Handlers
// =============================================================================

#[utoipa::path(
    get,
    path = "/api/employees",
    tag = "employees",
    responses(
        (status = 200, description = "All employees (possibly empty)", body = [EmployeeResponse]),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_employees<D: Database>(
    State(state): State<AppState<D>>,
) -> Result<Json<Vec<EmployeeResponse>>, ApiError> {
    let employees = state.db().employees().list().await?;
    Ok(Json(
        employees.into_iter().map(EmployeeResponse::from).collect(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/employees/{id}",
    tag = "employees",
    params(("id" = i64, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Employee found", body = EmployeeResponse),
        (status = 404, description = "No employee with that id"),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_employee<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<i64>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    let employee = state
        .db()
        .employees()
        .get(id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(EmployeeResponse::from(employee)))
}

#[utoipa::path(
    post,
    path = "/api/employees",
    tag = "employees",
    request_body = CreateEmployeeRequest,
    responses(
        (status = 201, description = "Employee created, Location points at it", body = EmployeeResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_employee<D: Database>(
    State(state): State<AppState<D>>,
    Json(req): Json<CreateEmployeeRequest>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<EmployeeResponse>), ApiError> {
    let created = state
        .db()
        .employees()
        .create(&Employee {
            employee_id: 0,
            name: req.name,
        })
        .await?;

    let location = format!("/api/employees/{}", created.employee_id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(EmployeeResponse::from(created)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/employees/{id}",
    tag = "employees",
    params(("id" = i64, Path, description = "Employee ID")),
    request_body = UpdateEmployeeRequest,
    responses(
        (status = 200, description = "Employee updated", body = EmployeeResponse),
        (status = 400, description = "Body id does not match path id"),
        (status = 404, description = "No employee with that id"),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_employee<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateEmployeeRequest>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    if id != req.employee_id {
        return Err(ApiError::IdMismatch);
    }

    let updated = state
        .db()
        .employees()
        .update(&Employee {
            employee_id: id,
            name: req.name,
        })
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(EmployeeResponse::from(updated)))
}

#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    tag = "employees",
    params(("id" = i64, Path, description = "Employee ID")),
    responses(
        (status = 204, description = "Employee deleted"),
        (status = 404, description = "No employee with that id"),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_employee<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let deleted = state.db().employees().delete(id).await?;
    if !deleted {
        return Err(ApiError::NotFound);
    }

    Ok(StatusCode::NO_CONTENT)
}
