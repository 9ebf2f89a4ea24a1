/// Task endpoints
///
/// # Endpoints
///
/// - `GET /api/tasks?project_id=` - List tasks, optionally of one project
/// - `GET /api/tasks/:id` - Fetch one task
/// - `POST /api/tasks` - Create a task with a sequence-minted id
/// - `PUT /api/tasks/:id` - Replace every task field
/// - `DELETE /api/tasks/:id` - Delete a task

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    extract::{ApiJson, ApiPath, ApiQuery},
    routes::MessageResponse,
};
use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use taskdesk_shared::models::task::{Task, TaskInput, TaskStatus};
use tracing::{info, instrument};
use validator::Validate;

/// Create/update task request
///
/// `status` falls back to `Pending`; an unknown label is rejected while the
/// body is parsed.
#[derive(Debug, Deserialize, Validate)]
pub struct TaskRequest {
    #[validate(required(message = "project_id is required"))]
    pub project_id: Option<i64>,

    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "task_name must be 1 to 255 characters"))]
    pub task_name: String,

    #[serde(default)]
    pub status: TaskStatus,

    pub assigned_to: Option<i64>,
}

impl TaskRequest {
    /// Validates and converts into model input
    fn into_input(self) -> ApiResult<TaskInput> {
        self.validate()?;

        let project_id = self
            .project_id
            .ok_or_else(|| ApiError::invalid("project_id", "project_id is required"))?;

        Ok(TaskInput {
            project_id,
            task_name: self.task_name,
            status: self.status,
            assigned_to: self.assigned_to,
        })
    }
}

/// List filter
///
/// Kept as text so a blank value can mean "no filter".
#[derive(Debug, Default, Deserialize)]
pub struct TaskListQuery {
    pub project_id: Option<String>,
}

impl TaskListQuery {
    fn project_filter(&self) -> ApiResult<Option<i64>> {
        match self.project_id.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => raw
                .parse()
                .map(Some)
                .map_err(|_| ApiError::invalid("project_id", "project_id must be a number")),
        }
    }
}

fn not_found() -> ApiError {
    ApiError::NotFound("Task not found".to_string())
}

/// List tasks ordered by id
///
/// # Errors
///
/// - `400 Bad Request`: `project_id` is present but not a number
pub async fn list_tasks(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<TaskListQuery>,
) -> ApiResult<Json<Vec<Task>>> {
    let project_id = query.project_filter()?;
    let tasks = Task::list(&state.db, project_id).await?;
    Ok(Json(tasks))
}

/// Fetch one task
pub async fn get_task(
    State(state): State<AppState>,
    ApiPath(task_id): ApiPath<i64>,
) -> ApiResult<Json<Task>> {
    Task::find_by_id(&state.db, task_id)
        .await?
        .map(Json)
        .ok_or_else(not_found)
}

/// Create a task
///
/// # Endpoint
///
/// ```text
/// POST /api/tasks
/// Content-Type: application/json
///
/// {"project_id": 1, "task_name": "Draft roadmap", "status": "Pending", "assigned_to": 2}
/// ```
///
/// # Response
///
/// `201` with the stored task, including its generated `task_id`.
///
/// # Errors
///
/// - `400 Bad Request`: Missing fields, unknown status, or a missing project/assignee
/// - `500 Internal Server Error`: No task id could be generated
#[instrument(skip(state, req), fields(project_id = ?req.project_id))]
pub async fn create_task(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<TaskRequest>,
) -> ApiResult<(StatusCode, Json<Task>)> {
    let input = req.into_input()?;
    let task = Task::create(&state.db, input).await?;

    info!(task_id = task.task_id, "Task created");

    Ok((StatusCode::CREATED, Json(task)))
}

/// Replace a task's project, name, status and assignee
///
/// # Errors
///
/// - `400 Bad Request`: Non-numeric id or invalid body
/// - `404 Not Found`: No such task
#[instrument(skip(state, req))]
pub async fn update_task(
    State(state): State<AppState>,
    ApiPath(task_id): ApiPath<i64>,
    ApiJson(req): ApiJson<TaskRequest>,
) -> ApiResult<Json<Task>> {
    let input = req.into_input()?;

    let task = Task::update(&state.db, task_id, input)
        .await?
        .ok_or_else(not_found)?;

    info!(status = %task.status, "Task updated");
    Ok(Json(task))
}

/// Delete a task
#[instrument(skip(state))]
pub async fn delete_task(
    State(state): State<AppState>,
    ApiPath(task_id): ApiPath<i64>,
) -> ApiResult<Json<MessageResponse>> {
    if !Task::delete(&state.db, task_id).await? {
        return Err(not_found());
    }

    info!("Task deleted");
    Ok(Json(MessageResponse::new("Task deleted")))
}
