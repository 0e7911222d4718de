use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Employee;

pub async fn list(pool: &PgPool) -> Result<Vec<Employee>, sqlx::Error> {
    sqlx::query_as::<_, Employee>("SELECT * FROM employees ORDER BY created_at")
        .fetch_all(pool)
        .await
}

#[allow(clippy::too_many_arguments)]
pub async fn create(
    pool: &PgPool,
    emp_id: &str,
    emp_name: &str,
    qualification: &str,
    age: Option<i32>,
    email: &str,
    contact_details: &serde_json::Value,
    position: &str,
) -> Result<Employee, sqlx::Error> {
    sqlx::query_as::<_, Employee>(
        "INSERT INTO employees (emp_id, emp_name, qualification, age, email, contact_details, position)
         VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
    )
    .bind(emp_id)
    .bind(emp_name)
    .bind(qualification)
    .bind(age)
    .bind(email)
    .bind(contact_details)
    .bind(position)
    .fetch_one(pool)
    .await
}

/// Fetch the employees referenced by a project. Dangling ids simply
/// produce no row.
pub async fn find_by_ids(pool: &PgPool, ids: &[Uuid]) -> Result<Vec<Employee>, sqlx::Error> {
    sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE id = ANY($1)")
        .bind(ids)
        .fetch_all(pool)
        .await
}
