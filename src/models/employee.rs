use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// `emp_id` is a caller-supplied external identifier, distinct from the
/// generated `id`. No uniqueness is enforced on `emp_id` or `email`.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Employee {
    pub id: Uuid,
    pub emp_id: String,
    pub emp_name: String,
    pub qualification: String,
    pub age: Option<i32>,
    pub email: String,
    /// Nested {primary, emergency?} contact structure, stored as-is.
    pub contact_details: serde_json::Value,
    pub position: String,
    pub created_at: DateTime<Utc>,
}
