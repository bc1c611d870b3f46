//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{NewTask, PersistedTaskData, Task, TaskId, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task repository.
///
/// Identifier assignment is delegated to the `tasks` table's serial
/// sequence, which is monotonic and never reuses values. Every write is a
/// single statement, so failures leave no partial mutation behind and the
/// bulk delete is atomic with respect to concurrent readers.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn insert(&self, new_task: &NewTask) -> TaskRepositoryResult<Task> {
        let new_row = to_new_row(new_task);

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(tasks::table)
                .values(&new_row)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(row_to_task(row))
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let title = task.title().to_owned();
        let description = task.description().to_owned();
        let status = task.status().as_str().to_owned();
        let assignee = task.assignee().map(ToOwned::to_owned);
        let updated_at = task.updated_at();

        self.run_blocking(move |connection| {
            let affected = diesel::update(tasks::table.filter(tasks::id.eq(task_id.into_inner())))
                .set((
                    tasks::title.eq(title),
                    tasks::description.eq(description),
                    tasks::status.eq(status),
                    tasks::assignee.eq(assignee),
                    tasks::updated_at.eq(updated_at),
                ))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;

            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            Ok(row.map(row_to_task))
        })
        .await
    }

    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(|connection| {
            let rows = tasks::table
                .order((tasks::created_at.desc(), tasks::id.desc()))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(rows.into_iter().map(row_to_task).collect())
        })
        .await
    }

    async fn delete_all(&self) -> TaskRepositoryResult<u64> {
        self.run_blocking(|connection| {
            let removed = diesel::delete(tasks::table)
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            u64::try_from(removed).map_err(TaskRepositoryError::persistence)
        })
        .await
    }
}

fn to_new_row(new_task: &NewTask) -> NewTaskRow {
    NewTaskRow {
        title: new_task.title().to_owned(),
        description: new_task.description().to_owned(),
        status: new_task.status().as_str().to_owned(),
        assignee: new_task.assignee().map(ToOwned::to_owned),
        created_at: new_task.created_at(),
        updated_at: new_task.updated_at(),
    }
}

fn row_to_task(row: TaskRow) -> Task {
    let TaskRow {
        id,
        title,
        description,
        status,
        assignee,
        created_at,
        updated_at,
    } = row;

    Task::from_persisted(PersistedTaskData {
        id: TaskId::from_i64(id),
        title,
        description,
        status: TaskStatus::new(status),
        assignee,
        created_at,
        updated_at,
    })
}
