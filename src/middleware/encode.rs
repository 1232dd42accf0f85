use crate::chain::Chain;
use crate::codec;
use crate::error::Result;
use crate::interceptor::Interceptor;
use crate::response::Response;

/// Base64-encodes the request body so only the server can read it.
#[derive(Clone, Copy, Debug, Default)]
pub struct EncodeRequestBodyInterceptor;

impl Interceptor for EncodeRequestBodyInterceptor {
    fn intercept(&self, chain: &mut Chain<'_>) -> Result<Response> {
        // The body is immutable; swap in a new request with the same headers.
        let encoded = chain.request().with_body(codec::encode(chain.request().body()));
        chain.set_request(encoded);
        chain.proceed()
    }
}
