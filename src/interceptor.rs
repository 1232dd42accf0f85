//! The interceptor trait and the closure adapter.
//!
//! # How a call flows through interceptors
//!
//! Every interceptor gets the whole [`Chain`]. What it does with it decides
//! which role it plays:
//!
//! ```text
//! intercept(chain)
//!   ├─ touch chain.request_mut() / chain.set_request(..)   ← requestward
//!   ├─ let res = chain.proceed()?                          ← hand off
//!   └─ return res, or Response::new(f(res.body()))         ← responseward
//! ```
//!
//! An interceptor that never calls `proceed` ends the call: whatever it
//! returns is the response every earlier interceptor sees. That is how the
//! terminal server call is written, and the chain relies on exactly one such
//! interceptor sitting where the round-trip should happen.

use crate::chain::Chain;
use crate::error::Result;
use crate::response::{IntoResponse, Response};

// ── Public Interceptor trait ──────────────────────────────────────────────────

/// A unit of behaviour wrapped around one request/response cycle.
///
/// Implementations hold no per-call state, so one instance can be shared by
/// reference across any number of chains.
///
/// ```rust
/// use catena::{Chain, Interceptor, Request, Response, Result};
///
/// struct Shout;
///
/// impl Interceptor for Shout {
///     fn intercept(&self, chain: &mut Chain<'_>) -> Result<Response> {
///         let res = chain.proceed()?;
///         Ok(Response::text(res.body_str().to_uppercase()))
///     }
/// }
/// ```
pub trait Interceptor {
    /// Inspects or rewrites the call held by `chain`.
    ///
    /// To continue, call [`Chain::proceed`] exactly once and build the return
    /// value from its result. Calling it twice consumes two queued
    /// interceptors, so the second call skips one.
    fn intercept(&self, chain: &mut Chain<'_>) -> Result<Response>;

    /// Label used in trace events.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

// ── Closure adapter ───────────────────────────────────────────────────────────

/// Wraps a closure as an [`Interceptor`].
///
/// The closure may return anything that implements [`IntoResponse`], which
/// keeps ad-hoc terminals short:
///
/// ```rust
/// use catena::{Chain, Request, from_fn};
///
/// let echo = from_fn(|chain| Ok(chain.request().body().clone()));
/// let res = Chain::new(Request::new("hi")).add_interceptor(&echo).proceed()?;
/// assert_eq!(res.body_str(), "hi");
/// # Ok::<(), catena::Error>(())
/// ```
pub fn from_fn<F, R>(f: F) -> FnInterceptor<F>
where
    F: Fn(&mut Chain<'_>) -> Result<R>,
    R: IntoResponse,
{
    FnInterceptor(f)
}

/// Interceptor returned by [`from_fn`].
pub struct FnInterceptor<F>(F);

impl<F, R> Interceptor for FnInterceptor<F>
where
    F: Fn(&mut Chain<'_>) -> Result<R>,
    R: IntoResponse,
{
    fn intercept(&self, chain: &mut Chain<'_>) -> Result<Response> {
        (self.0)(chain).map(IntoResponse::into_response)
    }
}
