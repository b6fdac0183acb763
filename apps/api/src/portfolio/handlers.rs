use axum::{
    extract::{Path, Query},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::portfolio::data::{find_project, projects, skills};
use crate::portfolio::models::{Project, ProjectCategory, Skill, SkillCategory};

#[derive(Debug, Deserialize)]
pub struct ProjectFilter {
    pub category: Option<ProjectCategory>,
}

#[derive(Debug, Deserialize)]
pub struct SkillFilter {
    pub category: Option<SkillCategory>,
}

/// GET /api/v1/portfolio/projects
pub async fn handle_list_projects(Query(filter): Query<ProjectFilter>) -> Json<Vec<Project>> {
    Json(
        projects()
            .iter()
            .filter(|p| filter.category.map_or(true, |c| p.category == c))
            .cloned()
            .collect(),
    )
}

/// GET /api/v1/portfolio/projects/:id
pub async fn handle_get_project(Path(id): Path<String>) -> Result<Json<Project>, AppError> {
    find_project(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Project {id} not found")))
}

/// GET /api/v1/portfolio/skills
pub async fn handle_list_skills(Query(filter): Query<SkillFilter>) -> Json<Vec<Skill>> {
    Json(
        skills()
            .iter()
            .filter(|s| filter.category.map_or(true, |c| s.category == c))
            .cloned()
            .collect(),
    )
}
