use crate::chain::Chain;
use crate::error::Result;
use crate::interceptor::Interceptor;
use crate::response::Response;

pub const AUTHORIZATION_HEADER: &str = "authorization";
pub const AUTHORIZATION_TOKEN: &str = "access_token";

/// Sets `authorization: access_token` on the current request. Other headers
/// are left alone; an existing `authorization` value is overwritten.
#[derive(Clone, Copy, Debug, Default)]
pub struct AuthorizationHeaderInterceptor;

impl Interceptor for AuthorizationHeaderInterceptor {
    fn intercept(&self, chain: &mut Chain<'_>) -> Result<Response> {
        chain.request_mut().insert_header(AUTHORIZATION_HEADER, AUTHORIZATION_TOKEN);
        chain.proceed()
    }
}
