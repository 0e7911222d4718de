use std::collections::HashMap;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::db;
use crate::error::AppError;
use crate::models::ProjectExpanded;
use crate::state::SharedState;

/// Absent fields are stored as empty/default; nothing validates that the
/// referenced employees exist.
#[derive(Deserialize, Default)]
#[serde(default)]
pub struct CreateProject {
    pub title: String,
    pub description: String,
    pub status: String,
    pub employees: Vec<Uuid>,
    pub location: String,
    pub estimation: Option<f64>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub employees: Option<Vec<Uuid>>,
    pub location: Option<String>,
    pub estimation: Option<f64>,
}

#[derive(Deserialize)]
pub struct AssignEmployees {
    pub employees: Vec<Uuid>,
}

pub async fn create(
    State(state): State<SharedState>,
    Json(req): Json<CreateProject>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let project = db::projects::create(
        &state.pool,
        &req.title,
        &req.description,
        &req.status,
        &req.employees,
        &req.location,
        req.estimation,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Project added successfully", "project": project })),
    ))
}

pub async fn list(State(state): State<SharedState>) -> Result<Json<Value>, AppError> {
    let projects = db::projects::list(&state.pool).await?;

    // One batched lookup covers every referenced employee.
    let mut ids: Vec<Uuid> = projects.iter().flat_map(|p| p.employees.clone()).collect();
    ids.sort_unstable();
    ids.dedup();

    let by_id: HashMap<Uuid, _> = db::employees::find_by_ids(&state.pool, &ids)
        .await?
        .into_iter()
        .map(|e| (e.id, e))
        .collect();

    let expanded: Vec<ProjectExpanded> = projects
        .into_iter()
        .map(|p| ProjectExpanded::resolve(p, &by_id))
        .collect();

    Ok(Json(json!({ "projects": expanded })))
}

pub async fn update(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateProject>,
) -> Result<Json<Value>, AppError> {
    let project = db::projects::update(
        &state.pool,
        id,
        req.title.as_deref(),
        req.description.as_deref(),
        req.status.as_deref(),
        req.employees.as_deref(),
        req.location.as_deref(),
        req.estimation,
    )
    .await?
    .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

    Ok(Json(json!({
        "message": "Project updated successfully",
        "project": project
    })))
}

pub async fn delete(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let deleted = db::projects::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::NotFound("Project not found".to_string()));
    }

    Ok(Json(json!({ "message": "Project deleted successfully" })))
}

pub async fn assign(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(req): Json<AssignEmployees>,
) -> Result<Json<Value>, AppError> {
    let project = db::projects::assign_employees(&state.pool, id, &req.employees)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

    Ok(Json(json!({
        "message": "Employees assigned successfully",
        "project": project
    })))
}
