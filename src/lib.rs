//! # catena
//!
//! A small, synchronous interceptor chain. One request goes in, each
//! interceptor gets a turn at it, one response comes back out.
//!
//! ## The contract
//!
//! A [`Chain`] holds the current [`Request`] and a queue of borrowed
//! [`Interceptor`]s. [`Chain::proceed`] pops the next one and hands it the
//! chain. An interceptor can rewrite the request, call `proceed` to let the
//! rest of the chain run, and rewrite the response on the way back. One that
//! never calls `proceed` answers the call itself: that is the terminal
//! interceptor, and a chain needs exactly one where the round-trip happens.
//!
//! What catena deliberately does not do:
//!
//! - **Check ordering** — a misplaced terminal gives a successful call with
//!   the wrong body, not an error
//! - **Retry or recover** — errors travel straight back to the caller
//! - **Run anything concurrently** — `proceed` is a plain nested function call
//!
//! ## Quick start
//!
//! ```rust
//! use catena::middleware::{
//!     AuthorizationHeaderInterceptor, DecodeResponseBodyInterceptor,
//!     EncodeRequestBodyInterceptor, LoggingInterceptor, ServerCallInterceptor,
//! };
//! use catena::{Chain, Error, Request};
//!
//! let res = Chain::new(Request::new("POST_USER"))
//!     .add_interceptor(&LoggingInterceptor)
//!     .add_interceptor(&EncodeRequestBodyInterceptor)
//!     .add_interceptor(&AuthorizationHeaderInterceptor)
//!     .add_interceptor(&DecodeResponseBodyInterceptor)
//!     .add_interceptor(&ServerCallInterceptor)
//!     .proceed()?;
//! assert_eq!(res.body_str(), "Success");
//!
//! // Forgetting the terminal interceptor is reported, never papered over.
//! let err = Chain::new(Request::new("POST_USER"))
//!     .add_interceptor(&EncodeRequestBodyInterceptor)
//!     .proceed()
//!     .unwrap_err();
//! assert!(matches!(err, Error::EndOfChain));
//! # Ok::<(), catena::Error>(())
//! ```

mod chain;
mod error;
mod interceptor;
mod request;
mod response;
mod server;

pub mod codec;
pub mod middleware;

pub use chain::Chain;
pub use error::{Error, Result};
pub use interceptor::{FnInterceptor, Interceptor, from_fn};
pub use request::Request;
pub use response::{IntoResponse, Response};
pub use server::{
    RESPONSE_GET_USER, RESPONSE_POST_USER, RESPONSE_UNKNOWN, RequestBody, WebApiServer,
};
