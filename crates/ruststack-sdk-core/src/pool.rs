//! Fixed-size pool of worker threads.
//!
//! [`WorkerPool`] is the default executor behind every async client. Threads
//! are spawned lazily, one per submission that finds no idle worker, until
//! the pool reaches its size; after that tasks wait in a FIFO queue.
//!
//! Shutdown comes in two flavours:
//!
//! - [`WorkerPool::shutdown`] stops accepting tasks and lets the workers drain
//!   the queue;
//! - [`TaskExecutor::shutdown_now`] stops accepting tasks and hands the queued
//!   ones back unrun.
//!
//! Neither waits; [`WorkerPool::await_termination`] blocks until every worker
//! has exited.

use std::collections::VecDeque;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};
use tracing::{debug, error, warn};

use crate::error::ClientError;
use crate::executor::{Rejected, Task, TaskExecutor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunState {
    Running,
    /// No new tasks; drain the queue.
    Draining,
    /// No new tasks; queue already discarded.
    Stopped,
}

struct PoolState {
    queue: VecDeque<Task>,
    run_state: RunState,
    workers: usize,
    idle: usize,
    busy: usize,
}

struct PoolInner {
    name: String,
    size: usize,
    state: Mutex<PoolState>,
    /// Signalled when a task is queued or the run state changes.
    work_available: Condvar,
    /// Signalled when a worker exits.
    worker_exited: Condvar,
}

/// A bounded pool of OS threads executing tasks in FIFO order.
#[derive(Clone)]
pub struct WorkerPool {
    inner: Arc<PoolInner>,
}

impl std::fmt::Debug for WorkerPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.state.lock();
        f.debug_struct("WorkerPool")
            .field("name", &self.inner.name)
            .field("size", &self.inner.size)
            .field("workers", &state.workers)
            .field("busy", &state.busy)
            .field("queued", &state.queue.len())
            .field("run_state", &state.run_state)
            .finish()
    }
}

impl WorkerPool {
    /// Create a pool with at most `size` workers (at least one).
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self::with_name("ruststack-sdk", size)
    }

    /// Create a pool whose threads are named `<name>-worker-<n>`.
    #[must_use]
    pub fn with_name(name: impl Into<String>, size: usize) -> Self {
        Self {
            inner: Arc::new(PoolInner {
                name: name.into(),
                size: size.max(1),
                state: Mutex::new(PoolState {
                    queue: VecDeque::new(),
                    run_state: RunState::Running,
                    workers: 0,
                    idle: 0,
                    busy: 0,
                }),
                work_available: Condvar::new(),
                worker_exited: Condvar::new(),
            }),
        }
    }

    /// Maximum number of workers.
    #[must_use]
    pub fn size(&self) -> usize {
        self.inner.size
    }

    /// Number of worker threads currently alive.
    #[must_use]
    pub fn worker_count(&self) -> usize {
        self.inner.state.lock().workers
    }

    /// Number of tasks currently running.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.inner.state.lock().busy
    }

    /// Number of tasks waiting for a worker.
    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.inner.state.lock().queue.len()
    }

    /// Stop accepting tasks and let the workers finish the queue.
    pub fn shutdown(&self) {
        let mut state = self.inner.state.lock();
        if state.run_state == RunState::Running {
            state.run_state = RunState::Draining;
            debug!(pool = %self.inner.name, queued = state.queue.len(), "worker pool draining");
        }
        self.inner.work_available.notify_all();
    }

    /// Whether every worker has exited after a shutdown.
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        let state = self.inner.state.lock();
        state.run_state != RunState::Running && state.workers == 0
    }

    /// Block until all workers have exited or `timeout` elapses.
    ///
    /// Returns `true` if the pool terminated in time.
    pub fn await_termination(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let mut state = self.inner.state.lock();
        while state.run_state == RunState::Running || state.workers > 0 {
            if self
                .inner
                .worker_exited
                .wait_until(&mut state, deadline)
                .timed_out()
            {
                return state.run_state != RunState::Running && state.workers == 0;
            }
        }
        true
    }

    fn spawn_worker(&self, index: usize) -> std::io::Result<()> {
        let inner = Arc::clone(&self.inner);
        thread::Builder::new()
            .name(format!("{}-worker-{index}", self.inner.name))
            .spawn(move || worker_loop(&inner))
            .map(|_| ())
    }
}

impl TaskExecutor for WorkerPool {
    fn execute(&self, task: Task) -> Result<(), Rejected> {
        let mut state = self.inner.state.lock();
        if state.run_state != RunState::Running {
            warn!(pool = %self.inner.name, "rejecting task submitted after shutdown");
            return Err(Rejected(task));
        }

        state.queue.push_back(task);
        if state.idle > 0 {
            self.inner.work_available.notify_one();
        }
        // Notified workers stay counted in `idle` until they wake up.
        if state.queue.len() <= state.idle || state.workers >= self.inner.size {
            return Ok(());
        }

        let index = state.workers;
        state.workers += 1;
        drop(state);

        if let Err(e) = self.spawn_worker(index) {
            let mut state = self.inner.state.lock();
            state.workers -= 1;
            if state.workers == 0 {
                // Nobody would ever run it; hand it back.
                error!(pool = %self.inner.name, error = %e, "failed to spawn worker thread");
                if let Some(task) = state.queue.pop_back() {
                    return Err(Rejected(task));
                }
            } else {
                warn!(pool = %self.inner.name, error = %e, "failed to spawn extra worker thread");
            }
        }
        Ok(())
    }

    fn shutdown_now(&self) -> Vec<Task> {
        let mut state = self.inner.state.lock();
        state.run_state = RunState::Stopped;
        let discarded: Vec<Task> = state.queue.drain(..).collect();
        debug!(
            pool = %self.inner.name,
            discarded = discarded.len(),
            running = state.busy,
            "worker pool stopped"
        );
        self.inner.work_available.notify_all();
        discarded
    }

    fn is_shutdown(&self) -> bool {
        self.inner.state.lock().run_state != RunState::Running
    }
}

fn worker_loop(inner: &PoolInner) {
    loop {
        let task = {
            let mut state = inner.state.lock();
            loop {
                if state.run_state == RunState::Stopped {
                    break None;
                }
                if let Some(task) = state.queue.pop_front() {
                    state.busy += 1;
                    break Some(task);
                }
                if state.run_state == RunState::Draining {
                    break None;
                }
                state.idle += 1;
                inner.work_available.wait(&mut state);
                state.idle -= 1;
            }
        };

        let Some(task) = task else {
            break;
        };

        if let Err(payload) = catch_unwind(AssertUnwindSafe(task)) {
            let error = ClientError::from_panic(payload.as_ref());
            error!(pool = %inner.name, %error, "task panicked on worker thread");
        }

        inner.state.lock().busy -= 1;
    }

    let mut state = inner.state.lock();
    state.workers -= 1;
    debug!(pool = %inner.name, remaining = state.workers, "worker exited");
    inner.worker_exited.notify_all();
}
