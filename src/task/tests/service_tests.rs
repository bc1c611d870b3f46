//! Service orchestration tests for the five task store operations.

use std::sync::Arc;

use super::support::SteppingClock;
use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{NewTask, Task, TaskDomainError, TaskId, TaskPatch},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
    services::{CreateTaskRequest, TaskStoreError, TaskStoreService},
};
use async_trait::async_trait;
use rstest::{fixture, rstest};

type TestService = TaskStoreService<InMemoryTaskRepository, SteppingClock>;

#[fixture]
fn service() -> TestService {
    TaskStoreService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(SteppingClock::new()),
    )
}

mockall::mock! {
    Repo {}

    #[async_trait]
    impl TaskRepository for Repo {
        async fn insert(&self, new_task: &NewTask) -> TaskRepositoryResult<Task>;
        async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;
        async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;
        async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>>;
        async fn delete_all(&self) -> TaskRepositoryResult<u64>;
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_then_get_round_trips_every_field(service: TestService) {
    let created = service
        .create_task(
            CreateTaskRequest::new("Prepare demo")
                .with_description("Slides and sample data")
                .with_assignee("alice"),
        )
        .await
        .expect("creation should succeed");

    let fetched = service
        .get_task(created.id())
        .await
        .expect("lookup should succeed");

    assert_eq!(fetched, created);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_applies_defaults(service: TestService) {
    let created = service
        .create_task(CreateTaskRequest::new("Prepare demo"))
        .await
        .expect("creation should succeed");

    assert_eq!(created.status().as_str(), "To Do");
    assert_eq!(created.description(), "");
    assert_eq!(created.assignee(), None);
    assert_eq!(created.created_at(), created.updated_at());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_blank_title(service: TestService) {
    let result = service.create_task(CreateTaskRequest::new("   ")).await;

    assert!(matches!(
        result,
        Err(TaskStoreError::Validation(TaskDomainError::EmptyTitle))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_ids_are_distinct_and_increasing(service: TestService) {
    let mut previous: Option<TaskId> = None;
    for n in 1..=4 {
        let task = service
            .create_task(CreateTaskRequest::new(format!("Task {n}")))
            .await
            .expect("creation should succeed");
        if let Some(prev) = previous {
            assert!(task.id() > prev, "ids must increase monotonically");
        }
        previous = Some(task.id());
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_returns_newest_first(service: TestService) {
    let first = service
        .create_task(CreateTaskRequest::new("first"))
        .await
        .expect("creation should succeed");
    let second = service
        .create_task(CreateTaskRequest::new("second"))
        .await
        .expect("creation should succeed");
    let third = service
        .create_task(CreateTaskRequest::new("third"))
        .await
        .expect("creation should succeed");

    let listed = service.list_tasks().await.expect("listing should succeed");

    let ids: Vec<TaskId> = listed.iter().map(Task::id).collect();
    assert_eq!(ids, vec![third.id(), second.id(), first.id()]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_unknown_id_is_not_found(service: TestService) {
    let result = service.get_task(TaskId::from_i64(999)).await;

    assert!(matches!(
        result,
        Err(TaskStoreError::NotFound(id)) if id == TaskId::from_i64(999)
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_unknown_id_is_not_found_and_store_unchanged(service: TestService) {
    let existing = service
        .create_task(CreateTaskRequest::new("untouched"))
        .await
        .expect("creation should succeed");

    let result = service
        .update_task(TaskId::from_i64(999), TaskPatch::new().with_status("Done"))
        .await;
    assert!(matches!(result, Err(TaskStoreError::NotFound(_))));

    let listed = service.list_tasks().await.expect("listing should succeed");
    assert_eq!(listed, vec![existing]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn partial_update_preserves_untouched_fields(service: TestService) {
    let created = service
        .create_task(CreateTaskRequest::new("X").with_description("Y"))
        .await
        .expect("creation should succeed");

    let updated = service
        .update_task(created.id(), TaskPatch::new().with_status("Done"))
        .await
        .expect("update should succeed");

    assert_eq!(updated.title(), "X");
    assert_eq!(updated.description(), "Y");
    assert_eq!(updated.status().as_str(), "Done");
    assert_eq!(updated.created_at(), created.created_at());
    assert!(updated.updated_at() > created.created_at());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_patch_still_refreshes_updated_at(service: TestService) {
    let created = service
        .create_task(CreateTaskRequest::new("idle"))
        .await
        .expect("creation should succeed");

    let updated = service
        .update_task(created.id(), TaskPatch::new())
        .await
        .expect("update should succeed");

    assert!(updated.updated_at() > created.updated_at());
    assert_eq!(updated.title(), created.title());

    let fetched = service
        .get_task(created.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(fetched, updated);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_all_reports_count_and_empties_store(service: TestService) {
    for n in 1..=5 {
        service
            .create_task(CreateTaskRequest::new(format!("Task {n}")))
            .await
            .expect("creation should succeed");
    }

    let removed = service
        .delete_all_tasks()
        .await
        .expect("delete should succeed");
    assert_eq!(removed, 5);

    let listed = service.list_tasks().await.expect("listing should succeed");
    assert!(listed.is_empty());

    let removed_again = service
        .delete_all_tasks()
        .await
        .expect("delete should succeed");
    assert_eq!(removed_again, 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn ids_are_not_reused_after_delete_all(service: TestService) {
    let before = service
        .create_task(CreateTaskRequest::new("before"))
        .await
        .expect("creation should succeed");
    service
        .delete_all_tasks()
        .await
        .expect("delete should succeed");

    let after = service
        .create_task(CreateTaskRequest::new("after"))
        .await
        .expect("creation should succeed");

    assert!(after.id() > before.id());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn cloned_service_shares_the_same_store(service: TestService) {
    // The repository and clock are not Clone themselves; cloning the service
    // only clones the shared handles.
    let cloned = service.clone();

    let created = service
        .create_task(CreateTaskRequest::new("shared"))
        .await
        .expect("creation should succeed");

    let fetched = cloned
        .get_task(created.id())
        .await
        .expect("lookup through the clone should succeed");
    assert_eq!(fetched, created);

    let removed = cloned
        .delete_all_tasks()
        .await
        .expect("delete should succeed");
    assert_eq!(removed, 1);
    assert!(
        service
            .list_tasks()
            .await
            .expect("listing should succeed")
            .is_empty()
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_all_storage_failure_surfaces_as_storage_error() {
    let mut repository = MockRepo::new();
    repository.expect_delete_all().returning(|| {
        Err(TaskRepositoryError::persistence(std::io::Error::other(
            "disk full",
        )))
    });

    let service = TaskStoreService::new(Arc::new(repository), Arc::new(SteppingClock::new()));
    let result = service.delete_all_tasks().await;

    assert!(matches!(result, Err(TaskStoreError::Storage(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_storage_failure_surfaces_as_storage_error() {
    let mut repository = MockRepo::new();
    repository.expect_insert().returning(|_| {
        Err(TaskRepositoryError::persistence(std::io::Error::other(
            "connection reset",
        )))
    });

    let service = TaskStoreService::new(Arc::new(repository), Arc::new(SteppingClock::new()));
    let result = service.create_task(CreateTaskRequest::new("doomed")).await;

    assert!(matches!(result, Err(TaskStoreError::Storage(_))));
}
