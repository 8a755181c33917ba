//! # URL Validation
//!
//! Custom rules plugged into the `validator` derive of request payloads.

use reqwest::Url;
use validator::ValidationError;

/// Checks that `value` is an absolute URL: it parses, spells out an
/// authority (`scheme://`), and carries a non-empty host.
///
/// The parser fills in a host for inputs such as `http:example.com`, so the
/// raw text is checked for `//` after the scheme as well.
///
/// # Examples
///
/// - `http://localhost:6060` ✓ Valid
/// - `https://example.com/a?b=c` ✓ Valid
/// - `invalidurl` ✗ No scheme
/// - `http:example.com` ✗ No authority
/// - `mailto:someone@example.com` ✗ No host
pub fn validate_absolute_url(value: &str) -> Result<(), ValidationError> {
    let invalid = || ValidationError::new("absolute_url");

    let parsed = Url::parse(value).map_err(|_| invalid())?;

    let has_authority = value
        .get(parsed.scheme().len() + 1..)
        .is_some_and(|rest| rest.starts_with("//"));
    if !has_authority {
        return Err(invalid());
    }

    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(invalid()),
    }
}
