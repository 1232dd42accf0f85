//! Base64 body encoding shared by the encode/decode interceptors and the mock
//! server.
//!
//! Standard alphabet, padded. `decode(encode(x)) == x` for every input,
//! including the empty one.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use bytes::Bytes;

use crate::error::Result;

pub fn encode(input: impl AsRef<[u8]>) -> String {
    STANDARD.encode(input)
}

/// # Errors
///
/// [`Error::Decode`](crate::Error::Decode) if `input` is not padded standard
/// base64.
pub fn decode(input: impl AsRef<[u8]>) -> Result<Bytes> {
    Ok(STANDARD.decode(input)?.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn round_trip() {
        for input in ["", "sample", "GET_USER", "ünïcødé", "a\0b"] {
            assert_eq!(decode(encode(input)).unwrap().as_ref(), input.as_bytes());
        }
    }

    #[test]
    fn round_trip_binary() {
        let input: Vec<u8> = (0..=255).collect();
        assert_eq!(decode(encode(&input)).unwrap().as_ref(), input.as_slice());
    }

    #[test]
    fn known_vectors() {
        assert_eq!(encode(""), "");
        assert_eq!(encode("GET_USER"), "R0VUX1VTRVI=");
        assert_eq!(encode("Rishabh"), "UmlzaGFiaA==");
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(matches!(decode("not base64!"), Err(Error::Decode(_))));
        // Unpadded input is rejected by the padded engine.
        assert!(matches!(decode("UmlzaGFiaA"), Err(Error::Decode(_))));
    }
}
