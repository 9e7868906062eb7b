//! Executors that run the units of work submitted by async clients.
//!
//! The async layer never spawns threads itself; it hands boxed tasks to an
//! injected [`TaskExecutor`]. The default is the fixed-size
//! [`WorkerPool`](crate::WorkerPool). [`InlineExecutor`] runs tasks on the
//! submitting thread and exists for tests. [`TokioBlockingExecutor`] borrows
//! the blocking thread pool of an existing tokio runtime.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A unit of work.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Returned by [`TaskExecutor::execute`] when the executor refuses a task.
///
/// The task is handed back so the caller can fail it explicitly instead of
/// having it silently dropped.
pub struct Rejected(pub Task);

impl fmt::Debug for Rejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Rejected(..)")
    }
}

/// Something that runs tasks, usually on other threads.
pub trait TaskExecutor: Send + Sync + fmt::Debug {
    /// Queue a task for execution.
    ///
    /// # Errors
    ///
    /// Returns the task wrapped in [`Rejected`] if the executor no longer
    /// accepts work.
    fn execute(&self, task: Task) -> Result<(), Rejected>;

    /// Stop accepting work and discard everything that has not started yet.
    ///
    /// The discarded tasks are returned without being run. Tasks that are
    /// already running are left to finish. Does not wait.
    fn shutdown_now(&self) -> Vec<Task>;

    /// Whether the executor has been shut down.
    fn is_shutdown(&self) -> bool;
}

/// Runs each task immediately on the submitting thread.
///
/// Callbacks therefore run in-line, which async clients otherwise never do.
/// Only meant for deterministic tests.
#[derive(Debug, Default)]
pub struct InlineExecutor {
    shutdown: AtomicBool,
}

impl InlineExecutor {
    /// Create a new inline executor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TaskExecutor for InlineExecutor {
    fn execute(&self, task: Task) -> Result<(), Rejected> {
        if self.shutdown.load(Ordering::Acquire) {
            return Err(Rejected(task));
        }
        task();
        Ok(())
    }

    fn shutdown_now(&self) -> Vec<Task> {
        self.shutdown.store(true, Ordering::Release);
        Vec::new()
    }

    fn is_shutdown(&self) -> bool {
        self.shutdown.load(Ordering::Acquire)
    }
}

/// Runs tasks on the blocking thread pool of a tokio runtime.
///
/// Tokio offers no way to pull queued blocking tasks back out, so
/// `shutdown_now` flips a flag that every not-yet-started task checks before
/// running; tasks that see the flag are dropped unrun.
#[derive(Debug, Clone)]
pub struct TokioBlockingExecutor {
    handle: tokio::runtime::Handle,
    shutdown: Arc<AtomicBool>,
}

impl TokioBlockingExecutor {
    /// Use the given runtime.
    #[must_use]
    pub fn new(handle: tokio::runtime::Handle) -> Self {
        Self {
            handle,
            shutdown: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Use the runtime the caller is currently running on.
    ///
    /// Returns `None` outside of a tokio runtime.
    #[must_use]
    pub fn current() -> Option<Self> {
        tokio::runtime::Handle::try_current().ok().map(Self::new)
    }
}

impl TaskExecutor for TokioBlockingExecutor {
    fn execute(&self, task: Task) -> Result<(), Rejected> {
        if self.shutdown.load(Ordering::Acquire) {
            return Err(Rejected(task));
        }
        let shutdown = Arc::clone(&self.shutdown);
        // The JoinHandle is dropped; completion is reported through the task's
        // own promise.
        drop(self.handle.spawn_blocking(move || {
            if shutdown.load(Ordering::Acquire) {
                tracing::debug!("dropping task queued before executor shutdown");
                drop(task);
            } else {
                task();
            }
        }));
        Ok(())
    }

    fn shutdown_now(&self) -> Vec<Task> {
        self.shutdown.store(true, Ordering::Release);
        Vec::new()
    }

    fn is_shutdown(&self) -> bool {
        self.shutdown.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;

    use super::*;

    #[test]
    fn test_should_run_inline_on_caller_thread() {
        let executor = InlineExecutor::new();
        let caller = std::thread::current().id();
        let ran_on = Arc::new(parking_lot::Mutex::new(None));
        let slot = Arc::clone(&ran_on);

        executor
            .execute(Box::new(move || {
                *slot.lock() = Some(std::thread::current().id());
            }))
            .unwrap();

        assert_eq!(*ran_on.lock(), Some(caller));
    }

    #[test]
    fn test_should_reject_inline_after_shutdown() {
        let executor = InlineExecutor::new();
        assert!(executor.shutdown_now().is_empty());
        assert!(executor.is_shutdown());
        assert!(executor.execute(Box::new(|| {})).is_err());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_should_run_on_tokio_blocking_pool() {
        let executor = TokioBlockingExecutor::current().unwrap();
        let counter = Arc::new(AtomicUsize::new(0));
        let (tx, rx) = tokio::sync::oneshot::channel();
        let c = Arc::clone(&counter);

        executor
            .execute(Box::new(move || {
                c.fetch_add(1, Ordering::SeqCst);
                let _ = tx.send(());
            }))
            .unwrap();

        rx.await.unwrap();
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_should_reject_on_tokio_after_shutdown() {
        let executor = TokioBlockingExecutor::current().unwrap();
        executor.shutdown_now();
        assert!(executor.is_shutdown());
        assert!(executor.execute(Box::new(|| {})).is_err());
    }
}
