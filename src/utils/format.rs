//! Display formatting helpers

/// Format an address by showing the first `prefix_len` and last `suffix_len`
/// characters. Addresses too short to truncate meaningfully come back as-is.
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();
    if address_len <= prefix_len + suffix_len
        || prefix_len >= address_len
        || suffix_len >= address_len
    {
        return address.to_string();
    }

    // Hex addresses are ASCII-only, byte slicing is safe
    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];
    format!("{}...{}", prefix, suffix)
}

/// Shorten a 0x-prefixed address for the connect control.
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}

/// Supply counter line under the page title.
pub fn format_supply(total: u64) -> String {
    format!("{} minted so far!", total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_address() {
        let addr = "0xEffB24c14c9e2c643d44bee0D334F3cFC147C895";
        assert_eq!(format_address(addr, 6, 4), "0xEffB...C895");
        assert_eq!(format_address(addr, 10, 6), "0xEffB24c1...47C895");
        assert_eq!(format_address("short", 6, 4), "short");
    }

    #[test]
    fn test_truncate_address() {
        assert_eq!(
            truncate_address("0xEffB24c14c9e2c643d44bee0D334F3cFC147C895"),
            "0xEffB...C895"
        );
    }

    #[test]
    fn test_format_supply() {
        assert_eq!(format_supply(42), "42 minted so far!");
        assert_eq!(format_supply(0), "0 minted so far!");
    }
}
