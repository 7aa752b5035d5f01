//! Application constants

/// Merge Day NFT contract (Ethereum mainnet)
pub const CONTRACT_ADDRESS: &str = "0xEffB24c14c9e2c643d44bee0D334F3cFC147C895";

/// 4-byte selector of the payable `mint()` function
pub const MINT_SELECTOR: &str = "0x1249c58b";

/// 4-byte selector of `totalSupply()`
pub const TOTAL_SUPPLY_SELECTOR: &str = "0x18160ddd";

/// Minimum accepted mint price in ETH; empty, non-numeric, or lower input
/// is clamped to this value
pub const FLOOR_AMOUNT: &str = "0.05";

/// Floor price in wei (0.05 ETH)
pub const FLOOR_WEI: u128 = 50_000_000_000_000_000;

// Link bases for the post-mint confirmation panel
pub const ETHERSCAN_TX_BASE: &str = "https://etherscan.io/tx/";
pub const OPENSEA_ASSET_BASE: &str = "https://opensea.io/assets/";

// Polling intervals
pub const SUPPLY_POLL_INTERVAL_MS: u32 = 5000;
pub const RECEIPT_POLL_INTERVAL_MS: u32 = 4000;

/// Give up waiting for a receipt after this many polls (~5 minutes)
pub const RECEIPT_POLL_MAX_ATTEMPTS: u32 = 75;
