use crate::chain::Chain;
use crate::error::Result;
use crate::interceptor::Interceptor;
use crate::response::Response;
use crate::server::WebApiServer;

static SERVER: WebApiServer = WebApiServer::new();

/// Terminal interceptor: sends the current request body to the mock
/// [`WebApiServer`] and returns its answer. Never calls
/// [`proceed`](Chain::proceed), so anything queued after it does not run.
///
/// The server expects an encoded body and answers with an encoded one, so
/// this belongs after [`EncodeRequestBodyInterceptor`] and
/// [`DecodeResponseBodyInterceptor`].
///
/// [`EncodeRequestBodyInterceptor`]: super::EncodeRequestBodyInterceptor
/// [`DecodeResponseBodyInterceptor`]: super::DecodeResponseBodyInterceptor
#[derive(Clone, Copy, Debug, Default)]
pub struct ServerCallInterceptor;

impl Interceptor for ServerCallInterceptor {
    fn intercept(&self, chain: &mut Chain<'_>) -> Result<Response> {
        SERVER.intercept(chain)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::codec;
    use crate::interceptor::from_fn;
    use crate::request::Request;
    use crate::server::{RESPONSE_GET_USER, RESPONSE_UNKNOWN};

    #[test]
    fn answers_encoded_request() {
        let mut chain = Chain::new(Request::new(codec::encode("GET_USER")));
        let res = ServerCallInterceptor.intercept(&mut chain).unwrap();
        assert_eq!(res.body_str(), codec::encode(RESPONSE_GET_USER));
    }

    #[test]
    fn answers_unknown_request_with_sentinel() {
        let mut chain = Chain::new(Request::new(codec::encode("Sample")));
        let res = ServerCallInterceptor.intercept(&mut chain).unwrap();
        assert_eq!(res.body_str(), codec::encode(RESPONSE_UNKNOWN));
    }

    #[test]
    fn does_not_delegate() {
        let called = Cell::new(false);
        let after = from_fn(|_chain| {
            called.set(true);
            Ok("")
        });

        let mut chain = Chain::new(Request::new(codec::encode("POST_USER")));
        chain.add_interceptor(&ServerCallInterceptor).add_interceptor(&after);
        chain.proceed().unwrap();

        assert!(!called.get());
        assert_eq!(chain.remaining(), 1);
    }
}
