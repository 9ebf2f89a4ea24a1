/// Database models for Taskdesk
///
/// Each model owns its parameterized SQL. Functions take the pool (or a
/// transaction) explicitly; there is no global connection state.
///
/// # Models
///
/// - `user`: Accounts used for login
/// - `project`: Projects, listed with their creator's name
/// - `task`: Tasks belonging to a project, ids minted from `tasks_seq`
///
/// # Example
///
/// ```no_run
/// use taskdesk_shared::models::project::{CreateProject, Project};
/// use sqlx::PgPool;
///
/// # async fn example(pool: PgPool) -> Result<(), sqlx::Error> {
/// let project_id = Project::create(&pool, CreateProject {
///     project_name: "Website".to_string(),
///     description: Some("Relaunch".to_string()),
///     created_by: None,
/// }).await?;
///
/// let project = Project::find_by_id(&pool, project_id).await?;
/// assert!(project.is_some());
/// # Ok(())
/// # }
/// ```

pub mod project;
pub mod task;
pub mod user;
