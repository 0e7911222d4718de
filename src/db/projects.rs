use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Project;

pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>("SELECT * FROM projects ORDER BY created_at")
        .fetch_all(pool)
        .await
}

pub async fn create(
    pool: &PgPool,
    title: &str,
    description: &str,
    status: &str,
    employees: &[Uuid],
    location: &str,
    estimation: Option<f64>,
) -> Result<Project, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        "INSERT INTO projects (title, description, status, employees, location, estimation)
         VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
    )
    .bind(title)
    .bind(description)
    .bind(status)
    .bind(employees)
    .bind(location)
    .bind(estimation)
    .fetch_one(pool)
    .await
}

/// Partial merge: only supplied fields overwrite existing ones.
/// Returns None if the project does not exist.
#[allow(clippy::too_many_arguments)]
pub async fn update(
    pool: &PgPool,
    id: Uuid,
    title: Option<&str>,
    description: Option<&str>,
    status: Option<&str>,
    employees: Option<&[Uuid]>,
    location: Option<&str>,
    estimation: Option<f64>,
) -> Result<Option<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        "UPDATE projects SET
             title = COALESCE($2, title),
             description = COALESCE($3, description),
             status = COALESCE($4, status),
             employees = COALESCE($5, employees),
             location = COALESCE($6, location),
             estimation = COALESCE($7, estimation),
             updated_at = now()
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(title)
    .bind(description)
    .bind(status)
    .bind(employees)
    .bind(location)
    .bind(estimation)
    .fetch_optional(pool)
    .await
}

/// Returns false if the project did not exist.
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM projects WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Replace the employee-reference list wholesale (not a merge).
/// Returns None if the project does not exist.
pub async fn assign_employees(
    pool: &PgPool,
    id: Uuid,
    employees: &[Uuid],
) -> Result<Option<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        "UPDATE projects SET employees = $2, updated_at = now()
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(employees)
    .fetch_optional(pool)
    .await
}
