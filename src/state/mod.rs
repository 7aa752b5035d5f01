//! Reactive state: the wallet context and the mint flow machine.

pub mod mint;
pub mod wallet;
