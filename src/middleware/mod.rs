//! Built-in interceptors.
//!
//! Each one is a zero-sized type with a single concern. Register them by
//! reference; one instance serves every chain.
//!
//! | Interceptor | On the way in | On the way out |
//! |---|---|---|
//! | [`LoggingInterceptor`] | logs the request body | logs the response body |
//! | [`EncodeRequestBodyInterceptor`] | base64-encodes the body | — |
//! | [`AuthorizationHeaderInterceptor`] | sets `authorization` | — |
//! | [`DecodeResponseBodyInterceptor`] | — | base64-decodes the body |
//! | [`ServerCallInterceptor`] | answers from the mock server (terminal) | — |
//!
//! Order is the caller's job. The canonical chain is
//! Logging → Encode → Authorization → Decode → ServerCall. Putting
//! `ServerCallInterceptor` before `DecodeResponseBodyInterceptor` still
//! succeeds, but the caller gets the encoded body back.

mod auth;
mod decode;
mod encode;
mod logging;
mod server_call;

pub use auth::{AUTHORIZATION_HEADER, AUTHORIZATION_TOKEN, AuthorizationHeaderInterceptor};
pub use decode::DecodeResponseBodyInterceptor;
pub use encode::EncodeRequestBodyInterceptor;
pub use logging::LoggingInterceptor;
pub use server_call::ServerCallInterceptor;
