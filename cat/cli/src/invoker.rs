//! One connection, one call, one deadline.
//!
//! Every operation goes through [`Invoker::call`]:
//! connect, issue a single request bounded by the configured deadline, then
//! drop the channel. A failed connect never reaches the call.

use crate::config::ClientConfig;
use crate::error::{CallFailure, InvokeError, Operation};
use crate::proto::ApplicationServiceClient;
use std::future::Future;
use std::time::Duration;
use tonic::transport::{Channel, Endpoint};

pub struct Invoker {
    config: ClientConfig,
}

impl Invoker {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Runs `issue` against a fresh connection and returns the response body.
    ///
    /// The closure receives the client by value and must issue exactly one
    /// RPC. The deadline starts when the request is issued, not when the
    /// connection is opened.
    pub async fn call<T, F, Fut>(&self, operation: Operation, issue: F) -> Result<T, InvokeError>
    where
        F: FnOnce(ApplicationServiceClient) -> Fut,
        Fut: Future<Output = Result<tonic::Response<T>, tonic::Status>>,
    {
        let address = self.config.address();
        let channel = self.connect().await?;
        tracing::debug!(%operation, %address, "connected");

        let client = ApplicationServiceClient::new(channel);
        tracing::debug!(%operation, %address, deadline = ?self.config.deadline, "calling");
        let outcome = within_deadline(self.config.deadline, issue(client)).await;
        tracing::debug!(%operation, %address, ok = outcome.is_ok(), "closed");

        outcome
            .map(tonic::Response::into_inner)
            .map_err(|failure| InvokeError::Call {
                operation,
                address,
                failure,
            })
    }

    async fn connect(&self) -> Result<Channel, InvokeError> {
        let address = self.config.address();
        tracing::debug!(%address, "connecting");

        let connection_error = |reason: String| InvokeError::Connection {
            address: address.clone(),
            reason,
        };

        let endpoint = Endpoint::from_shared(self.config.endpoint_uri())
            .map_err(|err| connection_error(format!("invalid address: {err}")))?
            .connect_timeout(self.config.deadline);

        endpoint
            .connect()
            .await
            .map_err(|err| connection_error(error_chain(&err)))
    }
}

/// Awaits `call`, giving up once `deadline` has elapsed.
/// The only client-side timer; requests carry no `grpc-timeout` header.
pub async fn within_deadline<T, Fut>(deadline: Duration, call: Fut) -> Result<T, CallFailure>
where
    Fut: Future<Output = Result<T, tonic::Status>>,
{
    match tokio::time::timeout(deadline, call).await {
        Ok(Ok(response)) => Ok(response),
        Ok(Err(status)) if status.code() == tonic::Code::DeadlineExceeded => {
            Err(CallFailure::DeadlineExceeded(deadline))
        }
        Ok(Err(status)) => Err(CallFailure::Status(status)),
        Err(_elapsed) => Err(CallFailure::DeadlineExceeded(deadline)),
    }
}

// tonic's transport errors keep the useful part (e.g. "Connection refused")
// in the source chain.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
