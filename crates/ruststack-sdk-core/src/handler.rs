//! Completion callbacks for asynchronous operations.

use crate::error::SdkError;

/// Notified when an asynchronous operation completes.
///
/// Exactly one method is called per operation, on the worker thread that ran
/// it, before the operation's [`ResponseFuture`](crate::ResponseFuture)
/// resolves. Tasks rejected by the executor or discarded at shutdown never
/// reach the handler.
pub trait AsyncHandler<Req, Res>: Send + Sync {
    /// The operation succeeded.
    fn on_success(&self, request: &Req, result: &Res);

    /// The operation failed.
    fn on_error(&self, error: &SdkError);
}

/// [`AsyncHandler`] built from a pair of closures. See [`handler_fn`].
pub struct FnHandler<S, E> {
    on_success: S,
    on_error: E,
}

/// Build a handler from a success closure and an error closure.
///
/// ```
/// use ruststack_sdk_core::{AsyncHandler, handler_fn};
///
/// let handler = handler_fn(
///     |req: &String, res: &usize| println!("{req}: {res}"),
///     |err| eprintln!("failed: {err}"),
/// );
/// handler.on_success(&"len".to_owned(), &3);
/// ```
pub fn handler_fn<Req, Res, S, E>(on_success: S, on_error: E) -> FnHandler<S, E>
where
    S: Fn(&Req, &Res) + Send + Sync,
    E: Fn(&SdkError) + Send + Sync,
{
    FnHandler {
        on_success,
        on_error,
    }
}

impl<Req, Res, S, E> AsyncHandler<Req, Res> for FnHandler<S, E>
where
    S: Fn(&Req, &Res) + Send + Sync,
    E: Fn(&SdkError) + Send + Sync,
{
    fn on_success(&self, request: &Req, result: &Res) {
        (self.on_success)(request, result);
    }

    fn on_error(&self, error: &SdkError) {
        (self.on_error)(error);
    }
}

impl<S, E> std::fmt::Debug for FnHandler<S, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FnHandler")
    }
}

/// The terminal state of an operation as seen by an [`OutcomeHandler`].
#[derive(Debug)]
pub enum Outcome<'a, Req, Res> {
    /// The operation succeeded.
    Success {
        /// The original request.
        request: &'a Req,
        /// The result.
        result: &'a Res,
    },
    /// The operation failed.
    Failure(&'a SdkError),
}

/// [`AsyncHandler`] driven by a single closure over [`Outcome`]. See
/// [`outcome_handler`].
pub struct OutcomeHandler<F>(pub F);

/// Build a handler from one closure that receives either outcome.
pub fn outcome_handler<Req, Res, F>(f: F) -> OutcomeHandler<F>
where
    F: for<'a> Fn(Outcome<'a, Req, Res>) + Send + Sync,
{
    OutcomeHandler(f)
}

impl<Req, Res, F> AsyncHandler<Req, Res> for OutcomeHandler<F>
where
    F: for<'a> Fn(Outcome<'a, Req, Res>) + Send + Sync,
{
    fn on_success(&self, request: &Req, result: &Res) {
        (self.0)(Outcome::Success { request, result });
    }

    fn on_error(&self, error: &SdkError) {
        (self.0)(Outcome::Failure(error));
    }
}

impl<F> std::fmt::Debug for OutcomeHandler<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("OutcomeHandler")
    }
}
