//! Email address format predicate.

use once_cell::sync::Lazy;
use regex::Regex;

/// Longest local part accepted (RFC 5321).
const MAX_LOCAL_PART_LEN: usize = 64;

/// Longest address accepted overall.
const MAX_ADDRESS_LEN: usize = 254;

static LOCAL_PART: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~.-]+$").expect("valid regex"));

static DOMAIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+(?:[A-Za-z]{2,63}|xn--[A-Za-z0-9-]{1,59})$",
    )
    .expect("valid regex")
});

/// Check whether `email` is a well-formed address.
///
/// # Validation Rules
///
/// - Exactly one '@' with a non-empty local part before it
/// - Local part uses the unquoted atom characters, with no leading,
///   trailing or consecutive dots, and at most 64 characters
/// - Domain is a sequence of dot-separated ASCII labels ending in an
///   alphabetic top-level domain of two or more letters, or a punycode
///   (`xn--`) top-level domain
///
/// Addresses are ASCII only. Internationalized domains must be given in
/// their punycode form, and UTF-8 local parts are rejected.
///
/// Surrounding whitespace is not trimmed: `" a@x.com"` is rejected.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.len() > MAX_ADDRESS_LEN {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || local.len() > MAX_LOCAL_PART_LEN {
        return false;
    }
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }

    LOCAL_PART.is_match(local) && DOMAIN.is_match(domain)
}
