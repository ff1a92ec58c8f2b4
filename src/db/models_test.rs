//! Tests for domain models.

use serde_json::json;

use crate::db::Employee;

#[test]
fn employee_serializes_with_camel_case_fields() {
    let employee = Employee {
        employee_id: 1,
        name: "Alice".to_string(),
    };
    let value = serde_json::to_value(&employee).unwrap();
    assert_eq!(value, json!({"employeeId": 1, "name": "Alice"}));
}

#[test]
fn employee_deserializes_without_id() {
    // POST bodies may omit employeeId; it defaults to 0 and the store
    // overwrites it.
    let employee: Employee = serde_json::from_value(json!({"name": "Alice"})).unwrap();
    assert_eq!(employee.employee_id, 0);
    assert_eq!(employee.name, "Alice");
}

#[test]
fn employee_round_trips() {
    let employee = Employee {
        employee_id: 7,
        name: "Bob".to_string(),
    };
    let text = serde_json::to_string(&employee).unwrap();
    let back: Employee = serde_json::from_str(&text).unwrap();
    assert_eq!(back, employee);
}
