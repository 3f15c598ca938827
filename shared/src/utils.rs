//! # Shared Utility Functions
//!
//! Formatting helpers for wallet addresses, used when an address has to be
//! logged or printed without spelling it out in full.
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "B62qkYa1o6Mj6uTTjDQCob7FYZspuhkm4RRQhgJg9j4koEBWiSrTQrS";
//! assert_eq!(format_address(address, 4, 4), "B62q...TQrS");
//! ```

/// Show the first `prefix_len` and last `suffix_len` characters of `address`.
///
/// Addresses too short to shorten are returned unchanged. Lengths count
/// characters, not bytes, so non-ASCII input never splits a code point.
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let char_count = address.chars().count();
    if char_count <= prefix_len + suffix_len {
        return address.to_string();
    }

    let prefix: String = address.chars().take(prefix_len).collect();
    let suffix: String = address.chars().skip(char_count - suffix_len).collect();

    format!("{}...{}", prefix, suffix)
}

/// [`format_address`] with a 4-character prefix and suffix.
pub fn truncate_address(address: &str) -> String {
    format_address(address, 4, 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "B62qkYa1o6Mj6uTTjDQCob7FYZspuhkm4RRQhgJg9j4koEBWiSrTQrS";

    #[test]
    fn test_format_address() {
        assert_eq!(format_address(ADDR, 4, 4), "B62q...TQrS");
        assert_eq!(format_address(ADDR, 6, 2), "B62qkY...rS");
        assert_eq!(format_address(ADDR, 0, 3), "...QrS");
    }

    #[test]
    fn test_format_address_short() {
        assert_eq!(format_address("B62...", 4, 4), "B62...");
        assert_eq!(format_address("", 4, 4), "");
    }

    #[test]
    fn test_format_address_multibyte() {
        assert_eq!(format_address("äöüäöüäöüäöü", 2, 2), "äö...öü");
    }

    #[test]
    fn test_truncate_address() {
        assert_eq!(truncate_address(ADDR), "B62q...TQrS");
    }
}
