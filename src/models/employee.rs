//! Employee identity model.
//!
//! This module defines the [`EmployeeIdentity`] struct describing the
//! employee a payslip is computed for. Identity records are supplied by the
//! identity/record-store collaborator; the engine never mutates them.

use serde::{Deserialize, Serialize};

/// Identifying details of the employee a payslip belongs to.
///
/// # Example
///
/// ```
/// use payslip_engine::models::EmployeeIdentity;
///
/// let identity = EmployeeIdentity {
///     employee_id: "emp_001".to_string(),
///     name: "Asha Verma".to_string(),
///     email: "asha.verma@example.com".to_string(),
///     department: "Engineering".to_string(),
///     position: "Software Engineer".to_string(),
/// };
/// assert_eq!(identity.employee_id, "emp_001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeIdentity {
    /// Unique identifier for the employee.
    pub employee_id: String,
    /// The employee's full name.
    pub name: String,
    /// The employee's email address.
    pub email: String,
    /// The department the employee belongs to.
    pub department: String,
    /// The employee's position or job title.
    pub position: String,
}
