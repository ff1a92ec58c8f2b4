//! Domain models for the roster database.
//!
//! These models are storage-agnostic and represent the entities used
//! throughout the application.

use serde::{Deserialize, Serialize};

/// A single employee record, one row in the `employees` table.
///
/// `employee_id` is assigned by the store on insert and immutable afterwards.
/// The wire format is camelCase: `{"employeeId": 1, "name": "Alice"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Store-generated identifier. Defaults to 0 when absent from a request
    /// body; the store ignores it on insert.
    #[serde(default)]
    pub employee_id: i64,
    pub name: String,
}
