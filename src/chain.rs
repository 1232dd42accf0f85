//! The chain that drives one call through its interceptors.

use std::collections::VecDeque;
use std::fmt;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::interceptor::Interceptor;
use crate::request::Request;
use crate::response::Response;

/// Ordered interceptors plus the request they are working on.
///
/// Built once per call, driven once with [`proceed`](Chain::proceed), then
/// dropped. Interceptors are borrowed, not owned: the built-ins are zero-sized
/// and a single instance serves every chain in the process.
///
/// ```rust
/// use catena::middleware::{
///     AuthorizationHeaderInterceptor, DecodeResponseBodyInterceptor,
///     EncodeRequestBodyInterceptor, ServerCallInterceptor,
/// };
/// use catena::{Chain, Request};
///
/// let res = Chain::new(Request::new("GET_USER"))
///     .add_interceptor(&EncodeRequestBodyInterceptor)
///     .add_interceptor(&AuthorizationHeaderInterceptor)
///     .add_interceptor(&DecodeResponseBodyInterceptor)
///     .add_interceptor(&ServerCallInterceptor)
///     .proceed()?;
///
/// assert_eq!(res.body_str(), "Rishabh");
/// # Ok::<(), catena::Error>(())
/// ```
pub struct Chain<'a> {
    request: Request,
    // Consume-once: `proceed` pops from the front and never puts anything back.
    queue: VecDeque<&'a dyn Interceptor>,
}

impl<'a> Chain<'a> {
    pub fn new(request: Request) -> Self {
        Self { request, queue: VecDeque::new() }
    }

    /// Appends `interceptor` to the tail of the queue. Returns the same chain
    /// so registrations read top to bottom in invocation order.
    ///
    /// No reordering, no deduplication. Adding the same interceptor twice runs
    /// it twice.
    pub fn add_interceptor(&mut self, interceptor: &'a dyn Interceptor) -> &mut Self {
        self.queue.push_back(interceptor);
        self
    }

    /// Hands the call to the next queued interceptor and returns whatever it
    /// produces.
    ///
    /// Every call consumes exactly one interceptor, however deeply the calls
    /// are nested, so interceptors run in insertion order.
    ///
    /// # Errors
    ///
    /// [`Error::EndOfChain`] if the queue is already empty, which means the
    /// chain was assembled without a terminal interceptor. Errors raised by
    /// interceptors are returned unchanged.
    pub fn proceed(&mut self) -> Result<Response> {
        let Some(next) = self.queue.pop_front() else {
            debug!("interceptor queue exhausted before a response was produced");
            return Err(Error::EndOfChain);
        };

        trace!(interceptor = next.name(), remaining = self.queue.len(), "intercept");
        next.intercept(self)
    }

    pub fn request(&self) -> &Request { &self.request }
    pub fn request_mut(&mut self) -> &mut Request { &mut self.request }

    /// Rebinds the current request, returning the one it replaces.
    pub fn set_request(&mut self, request: Request) -> Request {
        std::mem::replace(&mut self.request, request)
    }

    /// Number of interceptors that have not run yet.
    pub fn remaining(&self) -> usize { self.queue.len() }

    pub fn is_exhausted(&self) -> bool { self.queue.is_empty() }
}

impl fmt::Debug for Chain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("request", &self.request)
            .field("queue", &self.queue.iter().map(|i| i.name()).collect::<Vec<_>>())
            .finish()
    }
}
