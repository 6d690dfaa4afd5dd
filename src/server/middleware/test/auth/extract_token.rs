use super::*;

/// Tests both accepted schemes.
///
/// Expected: the key after `Token ` or `Bearer ` is returned
#[test]
fn accepts_token_and_bearer_schemes() {
    assert_eq!(extract_token(&headers_with("Token abc123")), Some("abc123"));
    assert_eq!(extract_token(&headers_with("Bearer abc123")), Some("abc123"));
    assert_eq!(extract_token(&headers_with("token abc123")), Some("abc123"));
}

/// Tests headers that do not carry a usable token.
///
/// Expected: None for absent header, unknown scheme, missing key or extra parts
#[test]
fn rejects_malformed_headers() {
    assert_eq!(extract_token(&HeaderMap::new()), None);
    assert_eq!(extract_token(&headers_with("Basic dXNlcjpwYXNz")), None);
    assert_eq!(extract_token(&headers_with("Token")), None);
    assert_eq!(extract_token(&headers_with("Token   ")), None);
    assert_eq!(extract_token(&headers_with("Token a b")), None);
}
