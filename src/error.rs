//! Unified error type.

use thiserror::Error;

/// Result alias used throughout catena.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type returned by catena's fallible operations.
///
/// Neither variant is retried or swallowed by the chain. Whatever an
/// interceptor returns from [`Chain::proceed`](crate::Chain::proceed) bubbles
/// straight back to the code that started the call.
#[derive(Debug, Error)]
pub enum Error {
    /// [`Chain::proceed`](crate::Chain::proceed) was called with an empty
    /// queue. The chain is missing its terminal interceptor, which is a bug in
    /// the caller that assembled it.
    #[error("Reached end-of-chain! Response responsibility interceptor not found.")]
    EndOfChain,

    /// A body that should have been base64 was not.
    #[error("decode: {0}")]
    Decode(#[from] base64::DecodeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_of_chain_message_is_stable() {
        assert_eq!(
            Error::EndOfChain.to_string(),
            "Reached end-of-chain! Response responsibility interceptor not found."
        );
    }

    #[test]
    fn decode_error_keeps_source() {
        let err = Error::from(base64::DecodeError::InvalidLength(3));
        assert!(err.to_string().starts_with("decode: "));
        assert!(std::error::Error::source(&err).is_some());
    }
}
