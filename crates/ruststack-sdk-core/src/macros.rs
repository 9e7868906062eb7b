//! Macro deriving a service's async client from its synchronous client.

/// Declare an async client for a synchronous [`ServiceClient`](crate::ServiceClient).
///
/// Every listed operation gets two methods: one returning a
/// [`ResponseFuture`](crate::ResponseFuture) and one that additionally
/// notifies an [`AsyncHandler`](crate::AsyncHandler). Both forward to the
/// synchronous method of the same operation through
/// [`AsyncClient::invoke`](crate::AsyncClient::invoke).
///
/// ```ignore
/// async_client! {
///     /// Async Route 53 client.
///     pub struct Route53AsyncClient(Route53Client) {
///         fn get_hosted_zone, get_hosted_zone_with_handler
///             => get_hosted_zone(GetHostedZoneInput) -> GetHostedZoneOutput;
///     }
/// }
/// ```
#[macro_export]
macro_rules! async_client {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($sync:ty) {
            $(
                $(#[$op_meta:meta])*
                fn $async_op:ident, $with_handler:ident => $sync_op:ident($input:ty) -> $output:ty;
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            inner: $crate::AsyncClient<$sync>,
        }

        impl $name {
            /// Build the synchronous client from `config` and wrap it with a
            /// worker pool of `config.max_workers` workers.
            ///
            /// # Errors
            ///
            /// Returns an error if the synchronous client cannot be built.
            pub fn new(config: $crate::ClientConfig) -> $crate::SdkResult<Self> {
                let client = <$sync as $crate::ServiceClient>::from_config(config)?;
                Ok(Self::from_client(client))
            }

            /// Wrap an existing synchronous client with a new worker pool.
            #[must_use]
            pub fn from_client(client: $sync) -> Self {
                Self {
                    inner: $crate::AsyncClient::new(client),
                }
            }

            /// Wrap an existing synchronous client with a caller-supplied
            /// executor.
            #[must_use]
            pub fn with_executor(
                client: $sync,
                executor: ::std::sync::Arc<dyn $crate::TaskExecutor>,
            ) -> Self {
                Self {
                    inner: $crate::AsyncClient::with_executor(client, executor),
                }
            }

            /// The wrapped synchronous client.
            #[must_use]
            pub fn sync_client(&self) -> &$sync {
                self.inner.client()
            }

            /// The executor operations run on.
            #[must_use]
            pub fn executor(&self) -> &::std::sync::Arc<dyn $crate::TaskExecutor> {
                self.inner.executor()
            }

            /// Shut down the synchronous client and the executor. Queued
            /// operations are cancelled; running ones are left to finish.
            pub fn shutdown(&self) {
                self.inner.shutdown();
            }

            $(
                $(#[$op_meta])*
                pub fn $async_op(&self, input: $input) -> $crate::ResponseFuture<$output> {
                    self.inner
                        .invoke(stringify!($sync_op), input, <$sync>::$sync_op, None)
                }

                $(#[$op_meta])*
                ///
                /// `handler` is notified on the worker thread before the
                /// returned future resolves.
                pub fn $with_handler(
                    &self,
                    input: $input,
                    handler: impl $crate::AsyncHandler<$input, $output> + 'static,
                ) -> $crate::ResponseFuture<$output> {
                    self.inner.invoke(
                        stringify!($sync_op),
                        input,
                        <$sync>::$sync_op,
                        Some(::std::sync::Arc::new(handler)),
                    )
                }
            )*
        }
    };
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::{
        ClientConfig, ClientError, InlineExecutor, SdkError, SdkResult, ServiceClient, TaskExecutor,
        handler_fn,
    };

    #[derive(Debug)]
    struct CounterClient {
        config: ClientConfig,
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct AddInput {
        a: u32,
        b: u32,
    }

    impl CounterClient {
        #[allow(clippy::unnecessary_wraps)]
        fn add(&self, input: &AddInput) -> SdkResult<u32> {
            Ok(input.a + input.b)
        }

        fn fail(&self, _input: &AddInput) -> SdkResult<u32> {
            Err(ClientError::Config("fail".to_owned()).into())
        }
    }

    impl ServiceClient for CounterClient {
        const SERVICE_NAME: &'static str = "Counter";

        fn from_config(config: ClientConfig) -> SdkResult<Self> {
            Ok(Self { config })
        }

        fn config(&self) -> &ClientConfig {
            &self.config
        }

        fn shutdown(&self) {}
    }

    crate::async_client! {
        /// Async counter client.
        struct CounterAsyncClient(CounterClient) {
            /// Add two numbers.
            fn add, add_with_handler => add(AddInput) -> u32;
            /// Always fails.
            fn fail, fail_with_handler => fail(AddInput) -> u32;
        }
    }

    #[test]
    fn test_should_generate_async_operations() {
        let client = CounterAsyncClient::new(ClientConfig::default().with_max_workers(2)).unwrap();
        let future = client.add(AddInput { a: 2, b: 3 });
        assert_eq!(future.get().unwrap(), 5);
        assert_eq!(client.sync_client().config().max_workers, 2);
    }

    #[test]
    fn test_should_generate_handler_variants() {
        let errors = Arc::new(AtomicUsize::new(0));
        let sink = Arc::clone(&errors);
        let client = CounterAsyncClient::with_executor(
            CounterClient {
                config: ClientConfig::default(),
            },
            Arc::new(InlineExecutor::new()),
        );

        let future = client.fail_with_handler(
            AddInput { a: 0, b: 0 },
            handler_fn(
                |_: &AddInput, _: &u32| {},
                move |_| {
                    sink.fetch_add(1, Ordering::SeqCst);
                },
            ),
        );

        assert!(matches!(
            future.get(),
            Err(SdkError::Client(ClientError::Config(_)))
        ));
        assert_eq!(errors.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_should_reject_after_generated_shutdown() {
        let client = CounterAsyncClient::from_client(CounterClient {
            config: ClientConfig::default().with_max_workers(1),
        });
        client.shutdown();
        assert!(client.executor().is_shutdown());
        assert!(matches!(
            client.add(AddInput { a: 1, b: 1 }).get(),
            Err(SdkError::Client(ClientError::Rejected(_)))
        ));
    }
}
