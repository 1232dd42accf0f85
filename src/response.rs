//! Response type and the [`IntoResponse`] conversion trait.

use std::borrow::Cow;

use bytes::Bytes;

// ── Response ─────────────────────────────────────────────────────────────────

/// The result of one trip through an interceptor chain.
///
/// A `Response` never changes after it is built. Interceptors that want to
/// alter what the caller sees wrap the body in a new `Response`:
///
/// ```rust
/// use catena::Response;
///
/// let raw = Response::text("UmlzaGFiaA==");
/// let decoded = Response::new(catena::codec::decode(raw.body())?);
/// assert_eq!(decoded.body_str(), "Rishabh");
/// # Ok::<(), catena::Error>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Response {
    body: Bytes,
}

impl Response {
    pub fn new(body: impl Into<Bytes>) -> Self {
        Self { body: body.into() }
    }

    /// Copies a borrowed body.
    pub fn from_slice(body: impl AsRef<[u8]>) -> Self {
        Self::new(Bytes::copy_from_slice(body.as_ref()))
    }

    pub fn text(body: impl Into<String>) -> Self {
        Self::new(body.into())
    }

    pub fn body(&self) -> &Bytes { &self.body }
    pub fn into_body(self) -> Bytes { self.body }

    /// Body as text, with invalid UTF-8 replaced.
    pub fn body_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

// ── IntoResponse ──────────────────────────────────────────────────────────────

/// Conversion into a [`Response`].
///
/// Lets closures wrapped with [`from_fn`](crate::from_fn) return a plain
/// string or byte buffer instead of spelling out `Response::new`.
///
/// ```rust
/// use catena::{Chain, Request, from_fn};
///
/// let canned = from_fn(|_chain| Ok("pong"));
/// let res = Chain::new(Request::new("ping")).add_interceptor(&canned).proceed()?;
/// assert_eq!(res.body_str(), "pong");
/// # Ok::<(), catena::Error>(())
/// ```
pub trait IntoResponse {
    fn into_response(self) -> Response;
}

impl IntoResponse for Response {
    fn into_response(self) -> Response { self }
}

impl IntoResponse for &'static str {
    fn into_response(self) -> Response { Response::new(self) }
}

impl IntoResponse for String {
    fn into_response(self) -> Response { Response::new(self) }
}

impl IntoResponse for Vec<u8> {
    fn into_response(self) -> Response { Response::new(self) }
}

impl IntoResponse for Bytes {
    fn into_response(self) -> Response { Response::new(self) }
}
