//! SQLite EmployeeRepository implementation.

use sqlx::{Row, SqlitePool};
use sqlx::sqlite::SqliteRow;

use crate::db::{DbError, DbResult, Employee, EmployeeRepository};

/// SQLx-backed employee repository.
pub struct SqliteEmployeeRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

fn row_to_employee(row: &SqliteRow) -> Employee {
    Employee {
        employee_id: row.get("employee_id"),
        name: row.get("name"),
    }
}

fn query_error(e: sqlx::Error) -> DbError {
    DbError::Database {
        message: e.to_string(),
    }
}

impl<'a> EmployeeRepository for SqliteEmployeeRepository<'a> {
    async fn list(&self) -> DbResult<Vec<Employee>> {
        let rows = sqlx::query("SELECT employee_id, name FROM employees")
            .fetch_all(self.pool)
            .await
            .map_err(query_error)?;

        Ok(rows.iter().map(row_to_employee).collect())
    }

    async fn get(&self, id: i64) -> DbResult<Option<Employee>> {
        let row = sqlx::query("SELECT employee_id, name FROM employees WHERE employee_id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await
            .map_err(query_error)?;

        Ok(row.as_ref().map(row_to_employee))
    }

    async fn create(&self, employee: &Employee) -> DbResult<Employee> {
        let result = sqlx::query("INSERT INTO employees (name) VALUES (?)")
            .bind(&employee.name)
            .execute(self.pool)
            .await
            .map_err(query_error)?;

        Ok(Employee {
            employee_id: result.last_insert_rowid(),
            name: employee.name.clone(),
        })
    }

    async fn update(&self, employee: &Employee) -> DbResult<Option<Employee>> {
        let result = sqlx::query("UPDATE employees SET name = ? WHERE employee_id = ?")
            .bind(&employee.name)
            .bind(employee.employee_id)
            .execute(self.pool)
            .await
            .map_err(query_error)?;

        if result.rows_affected() == 0 {
            Ok(None)
        } else {
            Ok(Some(employee.clone()))
        }
    }

    async fn delete(&self, id: i64) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM employees WHERE employee_id = ?")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(query_error)?;

        Ok(result.rows_affected() > 0)
    }
}
