//! One-shot future handle for asynchronous operations.
//!
//! A [`promise`] call creates a connected pair: the [`Promise`] is moved into
//! the unit of work and completed exactly once; the [`ResponseFuture`] is
//! handed to the caller. The outcome is stored in a [`OnceLock`], so the first
//! completion wins and every later observation returns the same value.
//!
//! Dropping a `Promise` without completing it resolves the future with
//! [`ClientError::Cancelled`]; this is how work discarded by an executor
//! shutdown reaches its caller.

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};
use std::task::{Context, Poll, Waker};
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

use crate::error::{ClientError, SdkError, SdkResult};

struct Shared<T> {
    outcome: OnceLock<SdkResult<T>>,
    /// One waker per polling handle, keyed by the handle's slot id.
    wakers: Mutex<Vec<(u64, Waker)>>,
    next_slot: AtomicU64,
    done: Condvar,
}

impl<T> Shared<T> {
    fn complete(&self, outcome: SdkResult<T>) -> bool {
        if self.outcome.set(outcome).is_err() {
            return false;
        }
        // Waiters re-check the outcome while holding this lock, so taking it
        // here orders the notification after any waiter that saw no outcome.
        let wakers = std::mem::take(&mut *self.wakers.lock());
        self.done.notify_all();
        for (_, waker) in wakers {
            waker.wake();
        }
        true
    }
}

/// Create a connected promise/future pair.
#[must_use]
pub fn promise<T>() -> (Promise<T>, ResponseFuture<T>) {
    let shared = Arc::new(Shared {
        outcome: OnceLock::new(),
        wakers: Mutex::new(Vec::new()),
        next_slot: AtomicU64::new(0),
        done: Condvar::new(),
    });
    (
        Promise {
            shared: Some(Arc::clone(&shared)),
        },
        ResponseFuture { shared, slot: None },
    )
}

/// Completing side of a [`ResponseFuture`].
pub struct Promise<T> {
    shared: Option<Arc<Shared<T>>>,
}

impl<T> Promise<T> {
    /// Resolve the future. Returns `false` if it was already resolved.
    pub fn complete(mut self, outcome: SdkResult<T>) -> bool {
        self.shared
            .take()
            .is_some_and(|shared| shared.complete(outcome))
    }
}

impl<T> Drop for Promise<T> {
    fn drop(&mut self) {
        if let Some(shared) = self.shared.take() {
            shared.complete(Err(ClientError::Cancelled.into()));
        }
    }
}

impl<T> std::fmt::Debug for Promise<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Promise")
            .field("pending", &self.shared.is_some())
            .finish()
    }
}

/// Handle to the eventual outcome of one asynchronous operation.
///
/// The handle can be cloned; all clones observe the same outcome. It can be
/// waited on from any thread with [`get`](Self::get) /
/// [`wait`](Self::wait), polled with [`try_get`](Self::try_get), or
/// `.await`ed from async code.
pub struct ResponseFuture<T> {
    shared: Arc<Shared<T>>,
    /// Waker slot, assigned on the first pending poll of this handle.
    slot: Option<u64>,
}

impl<T> Clone for ResponseFuture<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
            slot: None,
        }
    }
}

impl<T> Drop for ResponseFuture<T> {
    fn drop(&mut self) {
        if let Some(slot) = self.slot {
            self.shared.wakers.lock().retain(|(id, _)| *id != slot);
        }
    }
}

impl<T> std::fmt::Debug for ResponseFuture<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseFuture")
            .field("done", &self.is_done())
            .finish()
    }
}

impl<T> ResponseFuture<T> {
    /// A future that is already failed.
    #[must_use]
    pub fn failed(error: SdkError) -> Self {
        let (promise, future) = promise();
        promise.complete(Err(error));
        future
    }

    /// A future that is already successful.
    #[must_use]
    pub fn ready(value: T) -> Self {
        let (promise, future) = promise();
        promise.complete(Ok(value));
        future
    }

    /// Resolve the future from the submitting side. Returns `false` if it was
    /// already resolved.
    pub(crate) fn resolve(&self, outcome: SdkResult<T>) -> bool {
        self.shared.complete(outcome)
    }

    /// Whether the operation has reached a terminal state.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.shared.outcome.get().is_some()
    }

    /// The outcome, if the operation has finished. Never blocks.
    #[must_use]
    pub fn try_get(&self) -> Option<&SdkResult<T>> {
        self.shared.outcome.get()
    }

    /// Block until the operation finishes and borrow its outcome.
    pub fn wait(&self) -> &SdkResult<T> {
        if let Some(outcome) = self.shared.outcome.get() {
            return outcome;
        }
        let mut guard = self.shared.wakers.lock();
        loop {
            if let Some(outcome) = self.shared.outcome.get() {
                return outcome;
            }
            self.shared.done.wait(&mut guard);
        }
    }

    /// Block for at most `timeout`. Returns `None` if the operation is still
    /// running when the timeout elapses.
    pub fn wait_timeout(&self, timeout: Duration) -> Option<&SdkResult<T>> {
        if let Some(outcome) = self.shared.outcome.get() {
            return Some(outcome);
        }
        let deadline = Instant::now() + timeout;
        let mut guard = self.shared.wakers.lock();
        loop {
            if let Some(outcome) = self.shared.outcome.get() {
                return Some(outcome);
            }
            if self.shared.done.wait_until(&mut guard, deadline).timed_out() {
                return self.shared.outcome.get();
            }
        }
    }
}

impl<T: Clone> ResponseFuture<T> {
    /// Block until the operation finishes and return a copy of its outcome.
    ///
    /// # Errors
    ///
    /// Returns the error the operation failed with.
    pub fn get(&self) -> SdkResult<T> {
        self.wait().clone()
    }
}

impl<T: Clone> Future for ResponseFuture<T> {
    type Output = SdkResult<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        if let Some(outcome) = this.shared.outcome.get() {
            return Poll::Ready(outcome.clone());
        }
        let mut wakers = this.shared.wakers.lock();
        if let Some(outcome) = this.shared.outcome.get() {
            return Poll::Ready(outcome.clone());
        }
        let registered = this
            .slot
            .and_then(|slot| wakers.iter().position(|(id, _)| *id == slot));
        match registered {
            Some(index) => {
                let stored = &mut wakers[index].1;
                if !stored.will_wake(cx.waker()) {
                    stored.clone_from(cx.waker());
                }
            }
            None => {
                let slot = this.shared.next_slot.fetch_add(1, Ordering::Relaxed);
                this.slot = Some(slot);
                wakers.push((slot, cx.waker().clone()));
            }
        }
        Poll::Pending
    }
}
