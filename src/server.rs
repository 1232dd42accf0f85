//! In-memory stand-in for a remote web API.
//!
//! The server speaks base64 on both sides: it decodes the request body, looks
//! it up in a fixed table, and answers with an encoded canned body. Bodies it
//! does not recognise get [`RESPONSE_UNKNOWN`]. Bodies that are not base64 at
//! all are an error.
//!
//! | Decoded request | Decoded response |
//! |---|---|
//! | `GET_USER` | [`RESPONSE_GET_USER`] |
//! | `POST_USER` | [`RESPONSE_POST_USER`] |
//! | anything else | [`RESPONSE_UNKNOWN`] |

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use bytes::Bytes;
use tracing::debug;

use crate::chain::Chain;
use crate::codec;
use crate::error::Result;
use crate::interceptor::Interceptor;
use crate::response::Response;

pub const RESPONSE_GET_USER: &str = "Rishabh";
pub const RESPONSE_POST_USER: &str = "Success";
pub const RESPONSE_UNKNOWN: &str = "Unknown";

// ── RequestBody ───────────────────────────────────────────────────────────────

/// Request bodies the mock server knows how to answer.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum RequestBody {
    GetUser,
    PostUser,
}

impl RequestBody {
    pub const ALL: [RequestBody; 2] = [Self::GetUser, Self::PostUser];

    /// Wire form, e.g. `"GET_USER"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GetUser  => "GET_USER",
            Self::PostUser => "POST_USER",
        }
    }

    /// Canned (unencoded) response body for this request.
    pub fn response(self) -> &'static str {
        match self {
            Self::GetUser  => RESPONSE_GET_USER,
            Self::PostUser => RESPONSE_POST_USER,
        }
    }
}

/// Exact, case-sensitive match on the wire form.
impl FromStr for RequestBody {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "GET_USER"  => Ok(Self::GetUser),
            "POST_USER" => Ok(Self::PostUser),
            _           => Err(()),
        }
    }
}

impl fmt::Display for RequestBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── WebApiServer ──────────────────────────────────────────────────────────────

/// The mock server.
///
/// `WebApiServer` is also a terminal [`Interceptor`], which is the way to put a
/// server with simulated latency at the round-trip position:
///
/// ```rust
/// use std::time::Duration;
/// use catena::middleware::{DecodeResponseBodyInterceptor, EncodeRequestBodyInterceptor};
/// use catena::{Chain, Request, WebApiServer};
///
/// let slow = WebApiServer::new().with_latency(Duration::from_millis(5));
/// let res = Chain::new(Request::new("POST_USER"))
///     .add_interceptor(&EncodeRequestBodyInterceptor)
///     .add_interceptor(&DecodeResponseBodyInterceptor)
///     .add_interceptor(&slow)
///     .proceed()?;
/// assert_eq!(res.body_str(), "Success");
/// # Ok::<(), catena::Error>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WebApiServer {
    latency: Duration,
}

impl WebApiServer {
    /// A server that answers immediately.
    pub const fn new() -> Self {
        Self { latency: Duration::ZERO }
    }

    /// Blocks for `latency` before answering each request.
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn latency(&self) -> Duration { self.latency }

    /// Answers one encoded request body with an encoded response body.
    ///
    /// # Errors
    ///
    /// [`Error::Decode`](crate::Error::Decode) if `encoded_body` is not base64.
    pub fn process_request(&self, encoded_body: impl AsRef<[u8]>) -> Result<Bytes> {
        let decoded = codec::decode(encoded_body)?;

        if !self.latency.is_zero() {
            std::thread::sleep(self.latency);
        }

        let known = std::str::from_utf8(&decoded)
            .ok()
            .and_then(|s| s.parse::<RequestBody>().ok());
        debug!(request = ?known, "mock server round-trip");

        let body = known.map_or(RESPONSE_UNKNOWN, RequestBody::response);
        Ok(codec::encode(body).into())
    }
}

impl Interceptor for WebApiServer {
    fn intercept(&self, chain: &mut Chain<'_>) -> Result<Response> {
        self.process_request(chain.request().body()).map(Response::new)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;
    use crate::Error;

    fn ask(body: &str) -> String {
        let encoded = WebApiServer::new().process_request(codec::encode(body)).unwrap();
        String::from_utf8(codec::decode(encoded).unwrap().to_vec()).unwrap()
    }

    #[test]
    fn known_bodies_get_canned_answers() {
        assert_eq!(ask("GET_USER"), RESPONSE_GET_USER);
        assert_eq!(ask("POST_USER"), RESPONSE_POST_USER);
    }

    #[test]
    fn unknown_bodies_get_sentinel() {
        assert_eq!(ask("Sample"), RESPONSE_UNKNOWN);
        assert_eq!(ask("get_user"), RESPONSE_UNKNOWN);
        assert_eq!(ask(""), RESPONSE_UNKNOWN);
    }

    #[test]
    fn non_utf8_body_is_unknown() {
        let encoded = WebApiServer::new().process_request(codec::encode([0xffu8, 0xfe])).unwrap();
        assert_eq!(encoded, codec::encode(RESPONSE_UNKNOWN));
    }

    #[test]
    fn unencoded_body_is_a_decode_error() {
        let err = WebApiServer::new().process_request("Sample!").unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn request_body_parse_and_display_agree() {
        for body in RequestBody::ALL {
            assert_eq!(body.to_string().parse::<RequestBody>(), Ok(body));
        }
        assert!("GET_USERS".parse::<RequestBody>().is_err());
    }

    #[test]
    fn latency_blocks_the_call() {
        let server = WebApiServer::new().with_latency(Duration::from_millis(20));
        assert_eq!(server.latency(), Duration::from_millis(20));
        assert_eq!(WebApiServer::default().latency(), Duration::ZERO);
        let started = Instant::now();
        server.process_request(codec::encode("GET_USER")).unwrap();
        assert!(started.elapsed() >= Duration::from_millis(20));
    }
}
