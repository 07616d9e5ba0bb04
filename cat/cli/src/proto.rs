//! Wire types and client for the `v1.ApplicationService` gRPC contract.
//!
//! Kept in sync by hand with `proto/application.proto`; the layout mirrors
//! what `tonic-build` emits so the crate builds without `protoc`.

use tonic::codegen::http::uri::PathAndQuery;
use tonic::transport::Channel;

/// API version tag carried by every request.
pub const API_VERSION: &str = "v1";

const SERVICE: &str = "v1.ApplicationService";

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Label {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(string, tag = "2")]
    pub value: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Annotation {
    #[prost(string, tag = "1")]
    pub origin: String,
    #[prost(string, tag = "2")]
    pub key: String,
    #[prost(string, tag = "3")]
    pub value: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Application {
    /// Assigned by the service; empty on create.
    #[prost(string, tag = "1")]
    pub uuid: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, tag = "3")]
    pub description: String,
    #[prost(string, tag = "4")]
    pub namespace: String,
    #[prost(string, repeated, tag = "5")]
    pub sources: Vec<String>,
    #[prost(string, repeated, tag = "6")]
    pub artifact_ids: Vec<String>,
    #[prost(message, repeated, tag = "7")]
    pub labels: Vec<Label>,
    #[prost(message, repeated, tag = "8")]
    pub annotations: Vec<Annotation>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateRequest {
    #[prost(string, tag = "1")]
    pub api: String,
    #[prost(message, optional, tag = "2")]
    pub application: Option<Application>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateResponse {
    #[prost(string, tag = "1")]
    pub api: String,
    #[prost(string, tag = "2")]
    pub uuid: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ReadRequest {
    #[prost(string, tag = "1")]
    pub api: String,
    #[prost(string, tag = "2")]
    pub uuid: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ReadResponse {
    #[prost(string, tag = "1")]
    pub api: String,
    #[prost(message, optional, tag = "2")]
    pub application: Option<Application>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ReadAllRequest {
    #[prost(string, tag = "1")]
    pub api: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ReadAllResponse {
    #[prost(string, tag = "1")]
    pub api: String,
    #[prost(message, repeated, tag = "2")]
    pub applications: Vec<Application>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteRequest {
    #[prost(string, tag = "1")]
    pub api: String,
    #[prost(string, tag = "2")]
    pub uuid: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteResponse {
    #[prost(string, tag = "1")]
    pub api: String,
    #[prost(bool, tag = "2")]
    pub deleted: bool,
}

/// Unary client for `v1.ApplicationService`.
#[derive(Debug, Clone)]
pub struct ApplicationServiceClient {
    inner: tonic::client::Grpc<Channel>,
}

impl ApplicationServiceClient {
    pub fn new(channel: Channel) -> Self {
        Self {
            inner: tonic::client::Grpc::new(channel),
        }
    }

    pub async fn create(
        &mut self,
        request: impl tonic::IntoRequest<CreateRequest>,
    ) -> Result<tonic::Response<CreateResponse>, tonic::Status> {
        self.unary(request.into_request(), "Create").await
    }

    pub async fn read(
        &mut self,
        request: impl tonic::IntoRequest<ReadRequest>,
    ) -> Result<tonic::Response<ReadResponse>, tonic::Status> {
        self.unary(request.into_request(), "Read").await
    }

    pub async fn read_all(
        &mut self,
        request: impl tonic::IntoRequest<ReadAllRequest>,
    ) -> Result<tonic::Response<ReadAllResponse>, tonic::Status> {
        self.unary(request.into_request(), "ReadAll").await
    }

    pub async fn delete(
        &mut self,
        request: impl tonic::IntoRequest<DeleteRequest>,
    ) -> Result<tonic::Response<DeleteResponse>, tonic::Status> {
        self.unary(request.into_request(), "Delete").await
    }

    async fn unary<Req, Resp>(
        &mut self,
        request: tonic::Request<Req>,
        method: &str,
    ) -> Result<tonic::Response<Resp>, tonic::Status>
    where
        Req: ::prost::Message + Send + Sync + 'static,
        Resp: ::prost::Message + Default + Send + Sync + 'static,
    {
        self.inner.ready().await.map_err(|err| {
            tonic::Status::unavailable(format!("service was not ready: {err}"))
        })?;

        let path = PathAndQuery::try_from(format!("/{SERVICE}/{method}"))
            .map_err(|err| tonic::Status::internal(format!("invalid method path: {err}")))?;
        let codec = tonic::codec::ProstCodec::<Req, Resp>::default();
        self.inner.unary(request, path, codec).await
    }
}
