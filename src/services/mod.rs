//! Browser interop seams: the injected wallet provider and the NFT contract.

pub mod contract;
pub mod wallet;
