pub mod auth;
pub mod employees;
pub mod projects;

use axum::Router;
use axum::routing::{get, post, put};

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        // Auth
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        .route("/protected", get(auth::protected))
        // Projects
        .route(
            "/api/projects",
            get(projects::list).post(projects::create),
        )
        .route(
            "/api/projects/{id}",
            put(projects::update).delete(projects::delete),
        )
        .route("/api/projects/{id}/assign", put(projects::assign))
        // Employees
        .route(
            "/api/employees",
            get(employees::list).post(employees::create),
        )
}
