//! One call through the canonical interceptor chain.
//!
//! Run with:
//!   cargo run --example interceptors                 # GET_USER
//!   cargo run --example interceptors -- POST_USER
//!   RUST_LOG=catena=trace cargo run --example interceptors -- nobody
//!
//! Prints the decoded response body, or the error and exits with status 1.

use std::env;
use std::process::ExitCode;

use catena::middleware::{
    AuthorizationHeaderInterceptor, DecodeResponseBodyInterceptor, EncodeRequestBodyInterceptor,
    LoggingInterceptor, ServerCallInterceptor,
};
use catena::{Chain, Request, RequestBody};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let body = env::args()
        .nth(1)
        .unwrap_or_else(|| RequestBody::GetUser.as_str().to_owned());

    let result = Chain::new(Request::new(body))
        .add_interceptor(&LoggingInterceptor)
        .add_interceptor(&EncodeRequestBodyInterceptor)
        .add_interceptor(&AuthorizationHeaderInterceptor)
        .add_interceptor(&DecodeResponseBodyInterceptor)
        .add_interceptor(&ServerCallInterceptor)
        .proceed();

    match result {
        Ok(res) => {
            println!("{}", res.body_str());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("call failed: {e}");
            ExitCode::from(1)
        }
    }
}
