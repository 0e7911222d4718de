use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Employee;

/// `employees` holds advisory references to Employee ids: nothing checks
/// they exist at write time, and deleting an employee does not cascade.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: String,
    pub employees: Vec<Uuid>,
    pub location: String,
    pub estimation: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A project with its employee references resolved to full records,
/// as returned by the project listing.
#[derive(Debug, Serialize)]
pub struct ProjectExpanded {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: String,
    pub employees: Vec<Employee>,
    pub location: String,
    pub estimation: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProjectExpanded {
    /// Resolve `project.employees` against `by_id`, preserving reference
    /// order. Dangling references are dropped.
    pub fn resolve(project: Project, by_id: &HashMap<Uuid, Employee>) -> Self {
        let employees = project
            .employees
            .iter()
            .filter_map(|id| by_id.get(id).cloned())
            .collect();

        Self {
            id: project.id,
            title: project.title,
            description: project.description,
            status: project.status,
            employees,
            location: project.location,
            estimation: project.estimation,
            created_at: project.created_at,
            updated_at: project.updated_at,
        }
    }
}
