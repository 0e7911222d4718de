use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::db;
use crate::error::AppError;
use crate::state::SharedState;

/// Loose schema: absent fields are stored as empty/default, and neither
/// `emp_id` nor `email` is checked for uniqueness.
#[derive(Deserialize, Default)]
#[serde(default)]
pub struct CreateEmployee {
    pub emp_id: String,
    pub emp_name: String,
    pub qualification: String,
    pub age: Option<i32>,
    pub email: String,
    pub contact_details: Option<Value>,
    pub position: String,
}

pub async fn create(
    State(state): State<SharedState>,
    Json(req): Json<CreateEmployee>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let contact_details = req.contact_details.unwrap_or_else(|| json!({}));

    let employee = db::employees::create(
        &state.pool,
        &req.emp_id,
        &req.emp_name,
        &req.qualification,
        req.age,
        &req.email,
        &contact_details,
        &req.position,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Employee added successfully", "employee": employee })),
    ))
}

pub async fn list(State(state): State<SharedState>) -> Result<Json<Value>, AppError> {
    let employees = db::employees::list(&state.pool).await?;
    Ok(Json(json!({ "employees": employees })))
}
