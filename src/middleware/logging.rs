use tracing::info;

use crate::chain::Chain;
use crate::error::Result;
use crate::interceptor::Interceptor;
use crate::response::Response;

/// Logs the request body on the way in and the response body on the way out,
/// as `info` events.
///
/// Nothing is printed unless the caller installs a `tracing` subscriber.
///
/// Place it first to see what the caller sent and finally received, or right
/// before the server call to see what went over the wire.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoggingInterceptor;

impl Interceptor for LoggingInterceptor {
    fn intercept(&self, chain: &mut Chain<'_>) -> Result<Response> {
        info!("Request-Body : {}", chain.request().body_str());
        let res = chain.proceed()?;
        info!("Response-Body : {}", res.body_str());
        Ok(res)
    }
}
