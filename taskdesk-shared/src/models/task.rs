/// Task model and database operations
///
/// Task ids are not identity values: they are minted from the `tasks_seq`
/// sequence and inserted explicitly. Both statements run in one
/// transaction, and a missing or non-positive id aborts the insert.
///
/// # Schema
///
/// ```sql
/// CREATE SEQUENCE tasks_seq AS BIGINT START WITH 1;
///
/// CREATE TABLE tasks (
///     task_id BIGINT PRIMARY KEY CHECK (task_id > 0),
///     project_id BIGINT NOT NULL REFERENCES projects(project_id) ON DELETE CASCADE,
///     task_name VARCHAR(255) NOT NULL,
///     status VARCHAR(32) NOT NULL DEFAULT 'Pending',
///     assigned_to BIGINT REFERENCES users(id) ON DELETE SET NULL,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use taskdesk_shared::models::task::{Task, TaskInput, TaskStatus};
/// use sqlx::PgPool;
///
/// # async fn example(pool: PgPool) -> Result<(), Box<dyn std::error::Error>> {
/// let task = Task::create(&pool, TaskInput {
///     project_id: 1,
///     task_name: "Draft roadmap".to_string(),
///     status: TaskStatus::Pending,
///     assigned_to: Some(2),
/// }).await?;
///
/// assert!(task.task_id > 0);
/// # Ok(())
/// # }
/// ```

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// Workflow status of a task
///
/// Serialized with the exact labels the UI shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    #[serde(rename = "Pending")]
    Pending,

    #[serde(rename = "In Progress")]
    InProgress,

    #[serde(rename = "Completed")]
    Completed,
}

impl TaskStatus {
    /// All statuses in workflow order
    pub const ALL: [TaskStatus; 3] = [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Completed,
    ];

    /// Label stored in the database and sent over the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not a known status label
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown task status '{0}'")]
pub struct UnknownStatus(pub String);

impl FromStr for TaskStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

impl TryFrom<String> for TaskStatus {
    type Error = UnknownStatus;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A task as stored and returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Sequence-assigned task ID
    pub task_id: i64,

    /// Owning project
    pub project_id: i64,

    /// Task name
    pub task_name: String,

    /// Workflow status
    #[sqlx(try_from = "String")]
    pub status: TaskStatus,

    /// Assignee user ID
    pub assigned_to: Option<i64>,
}

/// Writable task columns
///
/// Used for both create and update; updates replace every field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskInput {
    pub project_id: i64,
    pub task_name: String,
    pub status: TaskStatus,
    pub assigned_to: Option<i64>,
}

/// Errors from task creation
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    /// The sequence produced no usable id; nothing was inserted
    #[error("Failed to generate task id: {0}")]
    IdGeneration(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl Task {
    /// Mints an id from `tasks_seq` and inserts the task with it
    ///
    /// The sequence read and the insert share one transaction. If the
    /// sequence yields nothing or a non-positive value the transaction is
    /// rolled back and `TaskError::IdGeneration` is returned.
    pub async fn create(pool: &PgPool, data: TaskInput) -> Result<Self, TaskError> {
        let mut tx = pool.begin().await?;

        let next_id: Option<i64> = sqlx::query_scalar("SELECT nextval('tasks_seq')")
            .fetch_optional(&mut *tx)
            .await?;

        let task_id = match next_id {
            Some(id) if id > 0 => id,
            other => {
                warn!(value = ?other, "tasks_seq returned no usable id");
                // Dropping `tx` rolls back
                return Err(TaskError::IdGeneration(format!(
                    "sequence returned {:?}",
                    other
                )));
            }
        };
        debug!(task_id, "Minted task id");

        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (task_id, project_id, task_name, status, assigned_to)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING task_id, project_id, task_name, status, assigned_to
            "#,
        )
        .bind(task_id)
        .bind(data.project_id)
        .bind(data.task_name)
        .bind(data.status.as_str())
        .bind(data.assigned_to)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(task)
    }

    /// Lists tasks, optionally only those of one project
    pub async fn list(pool: &PgPool, project_id: Option<i64>) -> Result<Vec<Self>, sqlx::Error> {
        match project_id {
            Some(project_id) => {
                sqlx::query_as::<_, Task>(
                    r#"
                    SELECT task_id, project_id, task_name, status, assigned_to
                    FROM tasks
                    WHERE project_id = $1
                    ORDER BY task_id
                    "#,
                )
                .bind(project_id)
                .fetch_all(pool)
                .await
            }
            None => {
                sqlx::query_as::<_, Task>(
                    r#"
                    SELECT task_id, project_id, task_name, status, assigned_to
                    FROM tasks
                    ORDER BY task_id
                    "#,
                )
                .fetch_all(pool)
                .await
            }
        }
    }

    /// Finds a task by ID
    pub async fn find_by_id(pool: &PgPool, task_id: i64) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Task>(
            r#"
            SELECT task_id, project_id, task_name, status, assigned_to
            FROM tasks
            WHERE task_id = $1
            "#,
        )
        .bind(task_id)
        .fetch_optional(pool)
        .await
    }

    /// Replaces every writable field
    ///
    /// Returns the updated task, or `None` when no task has this ID.
    pub async fn update(
        pool: &PgPool,
        task_id: i64,
        data: TaskInput,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Task>(
            r#"
            UPDATE tasks
            SET project_id = $1, task_name = $2, status = $3, assigned_to = $4
            WHERE task_id = $5
            RETURNING task_id, project_id, task_name, status, assigned_to
            "#,
        )
        .bind(data.project_id)
        .bind(data.task_name)
        .bind(data.status.as_str())
        .bind(data.assigned_to)
        .bind(task_id)
        .fetch_optional(pool)
        .await
    }

    /// Deletes a task
    ///
    /// Returns `false` when no task has this ID.
    pub async fn delete(pool: &PgPool, task_id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE task_id = $1")
            .bind(task_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
