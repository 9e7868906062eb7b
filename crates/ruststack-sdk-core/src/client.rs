//! The synchronous client contract and the generic async wrapper around it.

use std::sync::Arc;

use crate::config::ClientConfig;
use crate::dispatch::AsyncDispatcher;
use crate::error::SdkResult;
use crate::executor::TaskExecutor;
use crate::future::ResponseFuture;
use crate::handler::AsyncHandler;
use crate::pool::WorkerPool;

/// Implemented by the synchronous client of each service.
pub trait ServiceClient: Send + Sync + std::fmt::Debug + 'static {
    /// Service name used in logs and metrics, e.g. `"Route53"`.
    const SERVICE_NAME: &'static str;

    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`](crate::ClientError::Config) if the
    /// configuration is invalid or the transport cannot be built.
    fn from_config(config: ClientConfig) -> SdkResult<Self>
    where
        Self: Sized;

    /// The configuration the client was built with.
    fn config(&self) -> &ClientConfig;

    /// Release the client's transport. Later calls fail with
    /// [`ClientError::Shutdown`](crate::ClientError::Shutdown).
    fn shutdown(&self);
}

/// Async wrapper over a synchronous service client.
///
/// Each call is submitted to the executor and returns immediately with a
/// [`ResponseFuture`]. The per-service async clients generated by
/// [`async_client!`](crate::async_client) are thin newtypes over this.
#[derive(Debug)]
pub struct AsyncClient<C> {
    client: Arc<C>,
    dispatcher: AsyncDispatcher,
}

impl<C> Clone for AsyncClient<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            dispatcher: self.dispatcher.clone(),
        }
    }
}

impl<C: ServiceClient> AsyncClient<C> {
    /// Wrap `client` with a new [`WorkerPool`] of `config.max_workers`
    /// workers.
    #[must_use]
    pub fn new(client: C) -> Self {
        let pool = WorkerPool::with_name(
            C::SERVICE_NAME.to_ascii_lowercase(),
            client.config().max_workers,
        );
        Self::with_executor(client, Arc::new(pool))
    }

    /// Wrap `client` with a caller-supplied executor. The executor may be
    /// shared between clients.
    #[must_use]
    pub fn with_executor(client: C, executor: Arc<dyn TaskExecutor>) -> Self {
        Self {
            client: Arc::new(client),
            dispatcher: AsyncDispatcher::new(executor),
        }
    }

    /// The wrapped synchronous client.
    #[must_use]
    pub fn client(&self) -> &C {
        &self.client
    }

    /// The executor operations run on.
    #[must_use]
    pub fn executor(&self) -> &Arc<dyn TaskExecutor> {
        self.dispatcher.executor()
    }

    /// Run the synchronous operation `op` asynchronously.
    pub fn invoke<Req, Res>(
        &self,
        operation: &'static str,
        request: Req,
        op: fn(&C, &Req) -> SdkResult<Res>,
        handler: Option<Arc<dyn AsyncHandler<Req, Res>>>,
    ) -> ResponseFuture<Res>
    where
        Req: Send + 'static,
        Res: Send + Sync + 'static,
    {
        tracing::debug!(
            service = C::SERVICE_NAME,
            operation,
            with_handler = handler.is_some(),
            "dispatching async operation"
        );
        let client = Arc::clone(&self.client);
        self.dispatcher
            .submit(request, move |req: &Req| op(&client, req), handler)
    }

    /// Shut the client down.
    ///
    /// The synchronous client is shut down first, then the executor is told
    /// to stop: nothing new is accepted, queued work resolves with
    /// [`ClientError::Cancelled`](crate::ClientError::Cancelled), and running
    /// work is left to finish. Does not wait.
    pub fn shutdown(&self) {
        self.client.shutdown();
        let discarded = self.dispatcher.executor().shutdown_now();
        tracing::info!(
            service = C::SERVICE_NAME,
            discarded = discarded.len(),
            "async client shut down"
        );
    }
}
