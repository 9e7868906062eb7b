//! Generic asynchronous dispatch.
//!
//! [`AsyncDispatcher::submit`] is the single code path behind every async
//! operation of every service: it wraps a synchronous call into a task,
//! hands the task to the executor and returns the caller's
//! [`ResponseFuture`].
//!
//! Inside the task the operation runs first, then the optional handler, and
//! only then is the future resolved. A caller blocked on the future therefore
//! never observes the outcome before the callback has finished.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::{ClientError, SdkResult};
use crate::executor::{Rejected, TaskExecutor};
use crate::future::{ResponseFuture, promise};
use crate::handler::AsyncHandler;

/// Submits synchronous operations to an executor.
#[derive(Debug, Clone)]
pub struct AsyncDispatcher {
    executor: Arc<dyn TaskExecutor>,
}

impl AsyncDispatcher {
    /// Dispatch onto the given executor.
    #[must_use]
    pub fn new(executor: Arc<dyn TaskExecutor>) -> Self {
        Self { executor }
    }

    /// The executor tasks are submitted to.
    #[must_use]
    pub fn executor(&self) -> &Arc<dyn TaskExecutor> {
        &self.executor
    }

    /// Run `op(&request)` on the executor.
    ///
    /// The request is moved into the task, so later changes on the caller's
    /// side cannot affect it. Never blocks on the operation itself and never
    /// fails synchronously: a rejected submission comes back as a future that
    /// is already failed with [`ClientError::Rejected`].
    pub fn submit<Req, Res, F>(
        &self,
        request: Req,
        op: F,
        handler: Option<Arc<dyn AsyncHandler<Req, Res>>>,
    ) -> ResponseFuture<Res>
    where
        Req: Send + 'static,
        Res: Send + Sync + 'static,
        F: FnOnce(&Req) -> SdkResult<Res> + Send + 'static,
    {
        let (promise, future) = promise();

        let task = Box::new(move || {
            let outcome = run_operation(&request, op, handler.as_deref());
            promise.complete(outcome);
        });

        match self.executor.execute(task) {
            Ok(()) => debug!(executor = ?self.executor, "submitted async operation"),
            Err(Rejected(task)) => {
                warn!(executor = ?self.executor, "async operation rejected by executor");
                // Fail first so the promise dropped with the task loses the race.
                future.resolve(Err(ClientError::Rejected(
                    "executor is shut down".to_owned(),
                )
                .into()));
                drop(task);
            }
        }
        future
    }
}

fn run_operation<Req, Res, F>(
    request: &Req,
    op: F,
    handler: Option<&dyn AsyncHandler<Req, Res>>,
) -> SdkResult<Res>
where
    F: FnOnce(&Req) -> SdkResult<Res>,
{
    let result = catch_unwind(AssertUnwindSafe(|| op(request)))
        .unwrap_or_else(|payload| Err(ClientError::from_panic(payload.as_ref()).into()));

    let Some(handler) = handler else {
        return result;
    };

    match &result {
        Ok(response) => {
            if let Err(payload) =
                catch_unwind(AssertUnwindSafe(|| handler.on_success(request, response)))
            {
                let error = ClientError::from_panic(payload.as_ref());
                warn!(%error, "success callback panicked, failing the operation");
                return Err(error.into());
            }
        }
        Err(error) => {
            if let Err(payload) = catch_unwind(AssertUnwindSafe(|| handler.on_error(error))) {
                let panic = ClientError::from_panic(payload.as_ref());
                warn!(%error, %panic, "error callback panicked, keeping the original error");
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::mpsc;
    use std::time::Duration;

    use super::*;
    use crate::error::SdkError;
    use crate::executor::InlineExecutor;
    use crate::handler::handler_fn;
    use crate::pool::WorkerPool;

    #[derive(Debug, Default)]
    struct Counting {
        successes: AtomicUsize,
        errors: AtomicUsize,
    }

    impl AsyncHandler<u32, u32> for Counting {
        fn on_success(&self, _request: &u32, _result: &u32) {
            self.successes.fetch_add(1, Ordering::SeqCst);
        }

        fn on_error(&self, _error: &SdkError) {
            self.errors.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn pool_dispatcher(size: usize) -> (Arc<WorkerPool>, AsyncDispatcher) {
        let pool = Arc::new(WorkerPool::new(size));
        let dispatcher = AsyncDispatcher::new(Arc::clone(&pool) as Arc<dyn TaskExecutor>);
        (pool, dispatcher)
    }

    #[test]
    fn test_should_resolve_with_operation_result() {
        let (_pool, dispatcher) = pool_dispatcher(2);
        let future = dispatcher.submit(4_u32, |n: &u32| Ok(n + 1), None);
        assert_eq!(future.get().unwrap(), 5);
    }

    #[test]
    fn test_should_call_success_handler_once_before_resolving() {
        let (_pool, dispatcher) = pool_dispatcher(2);
        let handler = Arc::new(Counting::default());

        let future = dispatcher.submit(
            1_u32,
            |n: &u32| Ok(*n),
            Some(Arc::clone(&handler) as Arc<dyn AsyncHandler<u32, u32>>),
        );
        future.get().unwrap();

        assert_eq!(handler.successes.load(Ordering::SeqCst), 1);
        assert_eq!(handler.errors.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_should_call_error_handler_once_on_failure() {
        let (_pool, dispatcher) = pool_dispatcher(2);
        let handler = Arc::new(Counting::default());

        let future = dispatcher.submit(
            1_u32,
            |_: &u32| Err(ClientError::Signing("bad key".to_owned()).into()),
            Some(Arc::clone(&handler) as Arc<dyn AsyncHandler<u32, u32>>),
        );
        let err = future.get().unwrap_err();

        assert!(matches!(err, SdkError::Client(ClientError::Signing(_))));
        assert_eq!(handler.successes.load(Ordering::SeqCst), 0);
        assert_eq!(handler.errors.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_should_fail_future_when_operation_panics() {
        let (_pool, dispatcher) = pool_dispatcher(1);
        let handler = Arc::new(Counting::default());

        let future = dispatcher.submit(
            0_u32,
            |_: &u32| -> SdkResult<u32> { panic!("marshaller exploded") },
            Some(Arc::clone(&handler) as Arc<dyn AsyncHandler<u32, u32>>),
        );

        assert!(matches!(
            future.get(),
            Err(SdkError::Client(ClientError::Panicked(m))) if m == "marshaller exploded"
        ));
        assert_eq!(handler.errors.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_should_fail_future_when_success_callback_panics() {
        let (_pool, dispatcher) = pool_dispatcher(1);
        let handler: Arc<dyn AsyncHandler<u32, u32>> = Arc::new(handler_fn(
            |_: &u32, _: &u32| panic!("callback exploded"),
            |_| {},
        ));

        let future = dispatcher.submit(0_u32, |n: &u32| Ok(*n), Some(handler));
        assert!(matches!(
            future.get(),
            Err(SdkError::Client(ClientError::Panicked(_)))
        ));
    }

    #[test]
    fn test_should_keep_original_error_when_error_callback_panics() {
        let (_pool, dispatcher) = pool_dispatcher(1);
        let handler: Arc<dyn AsyncHandler<u32, u32>> = Arc::new(handler_fn(
            |_: &u32, _: &u32| {},
            |_| panic!("callback exploded"),
        ));

        let future = dispatcher.submit(
            0_u32,
            |_: &u32| Err(ClientError::Shutdown.into()),
            Some(handler),
        );
        assert!(matches!(
            future.get(),
            Err(SdkError::Client(ClientError::Shutdown))
        ));
    }

    #[test]
    fn test_should_reject_after_executor_shutdown() {
        let (pool, dispatcher) = pool_dispatcher(1);
        assert!(pool.shutdown_now().is_empty());

        let handler = Arc::new(Counting::default());
        let future = dispatcher.submit(
            1_u32,
            |n: &u32| Ok(*n),
            Some(Arc::clone(&handler) as Arc<dyn AsyncHandler<u32, u32>>),
        );

        assert!(future.is_done());
        assert!(matches!(
            future.get(),
            Err(SdkError::Client(ClientError::Rejected(_)))
        ));
        assert_eq!(handler.successes.load(Ordering::SeqCst), 0);
        assert_eq!(handler.errors.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_should_cancel_queued_work_on_shutdown_now() {
        let (pool, dispatcher) = pool_dispatcher(1);
        let (started_tx, started_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel::<()>();
        let handler = Arc::new(Counting::default());

        let running = dispatcher.submit(
            1_u32,
            move |n: &u32| {
                started_tx.send(()).unwrap();
                release_rx.recv().unwrap();
                Ok(*n)
            },
            Some(Arc::clone(&handler) as Arc<dyn AsyncHandler<u32, u32>>),
        );
        started_rx.recv_timeout(Duration::from_secs(5)).unwrap();

        let queued = dispatcher.submit(
            2_u32,
            |n: &u32| Ok(*n),
            Some(Arc::clone(&handler) as Arc<dyn AsyncHandler<u32, u32>>),
        );
        drop(pool.shutdown_now());

        assert!(matches!(
            queued.get(),
            Err(SdkError::Client(ClientError::Cancelled))
        ));

        release_tx.send(()).unwrap();
        assert_eq!(running.get().unwrap(), 1);
        assert_eq!(handler.successes.load(Ordering::SeqCst), 1);
        assert_eq!(handler.errors.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_should_move_request_into_task() {
        let dispatcher = AsyncDispatcher::new(Arc::new(InlineExecutor::new()));
        let mut names = vec!["a".to_owned()];
        let future = dispatcher.submit(names.clone(), |v: &Vec<String>| Ok(v.len()), None);
        names.push("b".to_owned());

        assert_eq!(future.get().unwrap(), 1);
        assert_eq!(names.len(), 2);
    }

    #[test]
    fn test_should_run_many_operations_concurrently() {
        let (_pool, dispatcher) = pool_dispatcher(8);
        let futures: Vec<_> = (0..64_u32)
            .map(|i| dispatcher.submit(i, |n: &u32| Ok(n * 2), None))
            .collect();

        let total: u32 = futures.iter().map(|f| f.get().unwrap()).sum();
        assert_eq!(total, (0..64).map(|n| n * 2).sum());
    }
}
