use crate::chain::Chain;
use crate::codec;
use crate::error::Result;
use crate::interceptor::Interceptor;
use crate::response::Response;

/// Base64-decodes the body of the response coming back from the server.
///
/// A body that is not base64 fails the whole call with
/// [`Error::Decode`](crate::Error::Decode).
#[derive(Clone, Copy, Debug, Default)]
pub struct DecodeResponseBodyInterceptor;

impl Interceptor for DecodeResponseBodyInterceptor {
    fn intercept(&self, chain: &mut Chain<'_>) -> Result<Response> {
        let res = chain.proceed()?;
        codec::decode(res.body()).map(Response::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::interceptor::from_fn;
    use crate::request::Request;

    #[test]
    fn decodes_response_body() {
        let encoded = from_fn(|_chain| Ok(codec::encode("test-response-body")));
        let res = Chain::new(Request::new("GET_USER"))
            .add_interceptor(&DecodeResponseBodyInterceptor)
            .add_interceptor(&encoded)
            .proceed()
            .unwrap();
        assert_eq!(res.body_str(), "test-response-body");
    }

    #[test]
    fn does_not_touch_request() {
        let terminal = from_fn(|_chain| Ok(""));
        let mut chain = Chain::new(Request::new("GET_USER"));
        chain.add_interceptor(&DecodeResponseBodyInterceptor).add_interceptor(&terminal);
        chain.proceed().unwrap();
        assert_eq!(chain.request().body_str(), "GET_USER");
        assert!(chain.request().headers().is_empty());
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let garbage = from_fn(|_chain| Ok("%%% not base64 %%%"));
        let err = Chain::new(Request::new(""))
            .add_interceptor(&DecodeResponseBodyInterceptor)
            .add_interceptor(&garbage)
            .proceed()
            .unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }
}
