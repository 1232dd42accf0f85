//! Outgoing request type.

use std::borrow::Cow;
use std::collections::HashMap;

use bytes::Bytes;

/// A request travelling down an interceptor chain.
///
/// The body is fixed for the lifetime of a `Request`. An interceptor that
/// rewrites it builds a new value with [`with_body`](Request::with_body) and
/// rebinds the chain with [`Chain::set_request`](crate::Chain::set_request).
/// Headers can be changed in place.
///
/// ```rust
/// use catena::Request;
///
/// let mut req = Request::new("GET_USER");
/// req.insert_header("x-trace", "42");
///
/// let encoded = req.with_body("R0VUX1VTRVI=");
/// assert_eq!(encoded.header("x-trace"), Some("42"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Request {
    body: Bytes,
    headers: HashMap<String, String>,
}

impl Request {
    pub fn new(body: impl Into<Bytes>) -> Self {
        Self { body: body.into(), headers: HashMap::new() }
    }

    /// Copies a borrowed body. Use this for strings built at runtime;
    /// [`new`](Request::new) only borrows `'static` data.
    pub fn from_slice(body: impl AsRef<[u8]>) -> Self {
        Self::new(Bytes::copy_from_slice(body.as_ref()))
    }

    pub fn with_headers(body: impl Into<Bytes>, headers: HashMap<String, String>) -> Self {
        Self { body: body.into(), headers }
    }

    pub fn body(&self) -> &Bytes { &self.body }
    pub fn headers(&self) -> &HashMap<String, String> { &self.headers }
    pub fn headers_mut(&mut self) -> &mut HashMap<String, String> { &mut self.headers }

    /// Body as text, with invalid UTF-8 replaced. Meant for logging.
    pub fn body_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Case-sensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Sets a header, returning the value it replaced.
    pub fn insert_header(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.headers.insert(name.into(), value.into())
    }

    /// A new request carrying `body` and a copy of this request's headers.
    pub fn with_body(&self, body: impl Into<Bytes>) -> Self {
        Self { body: body.into(), headers: self.headers.clone() }
    }

    /// Like [`with_body`](Request::with_body), copying a borrowed body.
    pub fn with_body_slice(&self, body: impl AsRef<[u8]>) -> Self {
        self.with_body(Bytes::copy_from_slice(body.as_ref()))
    }
}
