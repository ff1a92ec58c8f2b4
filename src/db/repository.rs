//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing the HTTP layer. Methods
//! are declared as `impl Future + Send` so that generic axum handlers can
//! await them from any worker thread.

use std::future::Future;

use crate::db::{DbResult, models::Employee};

/// Repository for Employee operations.
///
/// The five operations are intentionally thin: single-statement queries with
/// no validation or business rules. Absence of a row is reported as `None`
/// (or `false` for delete), never as an error.
pub trait EmployeeRepository {
    /// Get all employees. Empty table yields an empty vec.
    fn list(&self) -> impl Future<Output = DbResult<Vec<Employee>>> + Send;

    /// Get an employee by id, or `None` if no such row exists.
    fn get(&self, id: i64) -> impl Future<Output = DbResult<Option<Employee>>> + Send;

    /// Insert a new employee, ignoring the supplied id. Returns the stored
    /// entity carrying the store-generated id.
    fn create(&self, employee: &Employee) -> impl Future<Output = DbResult<Employee>> + Send;

    /// Overwrite the row matching `employee.employee_id` with the supplied
    /// fields. Returns `None` (and creates nothing) when no such row exists.
    fn update(
        &self,
        employee: &Employee,
    ) -> impl Future<Output = DbResult<Option<Employee>>> + Send;

    /// Delete the row matching id. Returns whether a row was removed.
    fn delete(&self, id: i64) -> impl Future<Output = DbResult<bool>> + Send;
}

/// A persistence context handing out repository views.
///
/// The context exclusively owns the connection pool; repositories borrow it
/// per call. Migrations live on the concrete implementation since they are
/// backend-specific.
pub trait Database: Send + Sync {
    type Employees<'a>: EmployeeRepository + Send + Sync
    where
        Self: 'a;

    /// Get the employee repository.
    fn employees(&self) -> Self::Employees<'_>;
}
