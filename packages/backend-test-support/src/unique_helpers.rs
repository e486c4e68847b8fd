//! Test helpers for generating unique test data
//!
//! This module provides utilities to help generate unique test data using
//! ULIDs to ensure test isolation and avoid conflicts between test runs.

use ulid::Ulid;

/// Generate a unique string with the given prefix
///
/// # Examples
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let id1 = unique_str("user");
/// let id2 = unique_str("user");
/// assert_ne!(id1, id2);
/// assert!(id1.starts_with("user-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Generate a unique wallet address with the given prefix
///
/// # Examples
/// ```
/// use backend_test_support::unique_helpers::unique_wallet;
///
/// let w1 = unique_wallet("So1");
/// let w2 = unique_wallet("So1");
/// assert_ne!(w1, w2);
/// ```
pub fn unique_wallet(prefix: &str) -> String {
    format!("{}{}", prefix, Ulid::new())
}
