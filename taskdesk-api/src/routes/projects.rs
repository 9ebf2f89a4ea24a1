/// Project endpoints
///
/// # Endpoints
///
/// - `GET /api/projects` - List projects with their creator's name
/// - `GET /api/projects/:id` - Fetch one project
/// - `POST /api/projects` - Create a project
/// - `PUT /api/projects/:id` - Replace name and description
/// - `DELETE /api/projects/:id` - Delete a project and its tasks

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    extract::{ApiJson, ApiPath},
    routes::MessageResponse,
};
use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use taskdesk_shared::models::project::{CreateProject, Project, UpdateProject};
use tracing::{info, instrument};
use validator::Validate;

/// Create project request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProjectRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "project_name must be 1 to 255 characters"))]
    pub project_name: String,

    pub description: Option<String>,

    /// Creator's user ID
    pub created_by: Option<i64>,
}

/// Update project request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProjectRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "project_name must be 1 to 255 characters"))]
    pub project_name: String,

    pub description: Option<String>,
}

/// Create project response
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateProjectResponse {
    pub message: String,

    #[serde(rename = "projectId")]
    pub project_id: i64,
}

fn not_found() -> ApiError {
    ApiError::NotFound("Project not found".to_string())
}

/// List all projects
pub async fn list_projects(State(state): State<AppState>) -> ApiResult<Json<Vec<Project>>> {
    let projects = Project::list(&state.db).await?;
    Ok(Json(projects))
}

/// Fetch one project
///
/// # Errors
///
/// - `400 Bad Request`: Non-numeric id
/// - `404 Not Found`: No such project
pub async fn get_project(
    State(state): State<AppState>,
    ApiPath(project_id): ApiPath<i64>,
) -> ApiResult<Json<Project>> {
    Project::find_by_id(&state.db, project_id)
        .await?
        .map(Json)
        .ok_or_else(not_found)
}

/// Create a project
///
/// # Endpoint
///
/// ```text
/// POST /api/projects
/// Content-Type: application/json
///
/// {"project_name": "Website", "description": "Relaunch", "created_by": 1}
/// ```
///
/// # Response
///
/// ```json
/// {"message": "Project created successfully", "projectId": 3}
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Missing name, or `created_by` names no user
#[instrument(skip(state, req), fields(project_name = %req.project_name))]
pub async fn create_project(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateProjectRequest>,
) -> ApiResult<(StatusCode, Json<CreateProjectResponse>)> {
    req.validate()?;

    let project_id = Project::create(
        &state.db,
        CreateProject {
            project_name: req.project_name,
            description: req.description,
            created_by: req.created_by,
        },
    )
    .await?;

    info!(project_id, "Project created");

    Ok((
        StatusCode::CREATED,
        Json(CreateProjectResponse {
            message: "Project created successfully".to_string(),
            project_id,
        }),
    ))
}

/// Replace a project's name and description
///
/// # Errors
///
/// - `400 Bad Request`: Non-numeric id or missing name
/// - `404 Not Found`: No such project
#[instrument(skip(state, req))]
pub async fn update_project(
    State(state): State<AppState>,
    ApiPath(project_id): ApiPath<i64>,
    ApiJson(req): ApiJson<UpdateProjectRequest>,
) -> ApiResult<Json<MessageResponse>> {
    req.validate()?;

    let updated = Project::update(
        &state.db,
        project_id,
        UpdateProject {
            project_name: req.project_name,
            description: req.description,
        },
    )
    .await?;

    if !updated {
        return Err(not_found());
    }

    info!("Project updated");
    Ok(Json(MessageResponse::new("Project updated successfully")))
}

/// Delete a project
///
/// Tasks of the project are removed with it.
///
/// # Errors
///
/// - `400 Bad Request`: Non-numeric id
/// - `404 Not Found`: No such project
#[instrument(skip(state))]
pub async fn delete_project(
    State(state): State<AppState>,
    ApiPath(project_id): ApiPath<i64>,
) -> ApiResult<Json<MessageResponse>> {
    if !Project::delete(&state.db, project_id).await? {
        return Err(not_found());
    }

    info!("Project deleted");
    Ok(Json(MessageResponse::new("Project deleted successfully")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_response_uses_camel_case_id() {
        let json = serde_json::to_value(CreateProjectResponse {
            message: "Project created successfully".to_string(),
            project_id: 3,
        })
        .unwrap();

        assert_eq!(
            json,
            serde_json::json!({"message": "Project created successfully", "projectId": 3})
        );
    }

    #[test]
    fn test_project_name_required() {
        let req: CreateProjectRequest =
            serde_json::from_str(r#"{"description": "no name"}"#).unwrap();
        assert!(req.validate().is_err());

        let req: CreateProjectRequest =
            serde_json::from_str(r#"{"project_name": "Website", "created_by": null}"#).unwrap();
        assert!(req.validate().is_ok());
        assert_eq!(req.created_by, None);
    }
}
