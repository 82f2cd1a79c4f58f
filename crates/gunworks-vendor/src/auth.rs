//! Vendor API authorization.
//!
//! The vendor expects `Basic <SID>:<md5 hex of token>` verbatim. Unlike
//! RFC 7617 the credential pair is not base64-encoded.
//!
//! Older integrations against the same API sent the pair base64-encoded
//! (`Basic base64(<SID>:<md5 hex>)`). If the vendor starts answering 401 to
//! the verbatim form, that encoding is the one to try.

use md5::{Digest, Md5};

/// Lowercase hex MD5 digest of the API token.
#[must_use]
pub fn token_digest(token: &str) -> String {
    format!("{:x}", Md5::digest(token.as_bytes()))
}

/// Value for the `Authorization` request header.
#[must_use]
pub fn authorization_header(sid: &str, token: &str) -> String {
    format!("Basic {sid}:{}", token_digest(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_lowercase_hex_md5() {
        assert_eq!(token_digest(""), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(token_digest("abc"), "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn header_joins_sid_and_digest_without_encoding() {
        assert_eq!(
            authorization_header("SID123", "abc"),
            "Basic SID123:900150983cd24fb0d6963f7d28e17f72"
        );
    }
}
