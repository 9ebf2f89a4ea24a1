/// Project model and database operations
///
/// Reads join the creator's display name so listings don't need a second
/// lookup. Update and delete report whether a row was touched; callers map
/// `false` to "not found".
///
/// # Schema
///
/// ```sql
/// CREATE TABLE projects (
///     project_id BIGINT GENERATED ALWAYS AS IDENTITY PRIMARY KEY,
///     project_name VARCHAR(255) NOT NULL,
///     description TEXT,
///     created_by BIGINT REFERENCES users(id) ON DELETE SET NULL,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// A project as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Project {
    /// Project ID
    pub project_id: i64,

    /// Project name
    pub project_name: String,

    /// Free-form description
    pub description: Option<String>,

    /// ID of the user who created the project
    pub created_by: Option<i64>,

    /// Creator's display name, if the creator still exists
    pub creator_name: Option<String>,
}

/// Input for creating a project
#[derive(Debug, Clone)]
pub struct CreateProject {
    pub project_name: String,
    pub description: Option<String>,
    pub created_by: Option<i64>,
}

/// Full replacement of a project's editable fields
#[derive(Debug, Clone)]
pub struct UpdateProject {
    pub project_name: String,
    pub description: Option<String>,
}

const SELECT_PROJECT: &str = r#"
    SELECT p.project_id, p.project_name, p.description, p.created_by,
           u.name AS creator_name
    FROM projects p
    LEFT JOIN users u ON u.id = p.created_by
"#;

impl Project {
    /// Inserts a project and returns its generated ID
    pub async fn create(pool: &PgPool, data: CreateProject) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            r#"
            INSERT INTO projects (project_name, description, created_by)
            VALUES ($1, $2, $3)
            RETURNING project_id
            "#,
        )
        .bind(data.project_name)
        .bind(data.description)
        .bind(data.created_by)
        .fetch_one(pool)
        .await
    }

    /// Lists all projects, oldest first
    pub async fn list(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        let query = format!("{SELECT_PROJECT} ORDER BY p.project_id");

        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Finds a project by ID
    pub async fn find_by_id(pool: &PgPool, project_id: i64) -> Result<Option<Self>, sqlx::Error> {
        let query = format!("{SELECT_PROJECT} WHERE p.project_id = $1");

        sqlx::query_as::<_, Project>(&query)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }

    /// Replaces name and description
    ///
    /// Returns `false` when no project has this ID.
    pub async fn update(
        pool: &PgPool,
        project_id: i64,
        data: UpdateProject,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE projects
            SET project_name = $1, description = $2
            WHERE project_id = $3
            "#,
        )
        .bind(data.project_name)
        .bind(data.description)
        .bind(project_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Deletes a project (its tasks go with it)
    ///
    /// Returns `false` when no project has this ID.
    pub async fn delete(pool: &PgPool, project_id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE project_id = $1")
            .bind(project_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
