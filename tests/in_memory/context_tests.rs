//! Execution context handling in the in-memory adapter.

use std::sync::Arc;

use chrono::{TimeDelta, Utc};
use mockable::Clock;
use rstest::rstest;
use task_service::{
    context::{ContextError, RequestContext},
    task::{
        adapters::InMemoryTaskRepository,
        domain::{Task, TaskId},
        ports::{TaskRepository, TaskRepositoryError},
        services::TaskApplicationError,
    },
};

use super::helpers::{FixedClock, SEEDED_TASK, TestService, ctx, fixed_clock, service};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn cancelled_context_is_rejected(service: TestService, ctx: RequestContext) {
    ctx.cancel();

    let result = service.get_task(&ctx, &TaskId::from(SEEDED_TASK)).await;

    assert!(matches!(
        result,
        Err(TaskApplicationError::Repository(TaskRepositoryError::Context(
            ContextError::Cancelled
        )))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn cancelled_parent_rejects_child_lookup(service: TestService, ctx: RequestContext) {
    let child = ctx.child();
    ctx.cancel();

    let result = service.get_task(&child, &TaskId::from(SEEDED_TASK)).await;

    assert!(matches!(
        result,
        Err(TaskApplicationError::Repository(TaskRepositoryError::Context(
            ContextError::Cancelled
        )))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn expired_deadline_is_rejected(service: TestService, ctx: RequestContext) {
    let deadline = Utc::now() - TimeDelta::seconds(5);
    let expired = ctx.with_deadline(deadline);

    let err = service
        .get_task(&expired, &TaskId::from(SEEDED_TASK))
        .await
        .expect_err("expired context should be rejected");

    assert!(matches!(
        err.repository_error(),
        TaskRepositoryError::Context(ContextError::DeadlineExceeded(at)) if *at == deadline
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn future_deadline_permits_lookup(service: TestService, ctx: RequestContext) {
    let bounded = ctx.with_deadline(Utc::now() + TimeDelta::minutes(1));

    let result = service.get_task(&bounded, &TaskId::from(SEEDED_TASK)).await;

    assert!(result.is_ok());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn context_rejection_precedes_not_found(service: TestService, ctx: RequestContext) {
    ctx.cancel();

    let err = service
        .get_task(&ctx, &TaskId::from("unknown"))
        .await
        .expect_err("cancelled context should be rejected");

    assert!(matches!(err.repository_error(), TaskRepositoryError::Context(_)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn injected_clock_decides_deadline_expiry(fixed_clock: FixedClock) {
    let now = fixed_clock.utc();
    let repo = InMemoryTaskRepository::with_clock(Arc::new(fixed_clock));
    repo.insert(Task::new(SEEDED_TASK)).expect("insert succeeds");
    let at_now = RequestContext::background().with_deadline(now);
    let after_now = RequestContext::background().with_deadline(now + TimeDelta::seconds(1));

    let rejected = repo.get(&at_now, &TaskId::from(SEEDED_TASK)).await;
    let found = repo.get(&after_now, &TaskId::from(SEEDED_TASK)).await;

    assert!(matches!(
        rejected,
        Err(TaskRepositoryError::Context(ContextError::DeadlineExceeded(at))) if at == now
    ));
    assert_eq!(found.expect("lookup before deadline succeeds"), Task::new(SEEDED_TASK));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn backend_waiting_on_cancellation_sees_rejection(
    service: TestService,
    ctx: RequestContext,
) {
    let waiter = ctx.child();
    let pending = tokio::spawn(async move {
        waiter.cancellation_token().cancelled().await;
        service.get_task(&waiter, &TaskId::from(SEEDED_TASK)).await
    });

    ctx.cancel();
    let result = pending.await.expect("waiting task completes");

    assert!(matches!(
        result,
        Err(TaskApplicationError::Repository(TaskRepositoryError::Context(
            ContextError::Cancelled
        )))
    ));
}
