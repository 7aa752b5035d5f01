//! Merge Day NFT contract gateway
//!
//! The contract's surface is fixed: a payable `mint()` and a read-only
//! `totalSupply()`. Calls go out as JSON-RPC requests through the injected
//! provider; preparing a call is pure, submitting suspends on the wallet,
//! and receipts are polled until the ledger settles the transaction.

use gloo_timers::future::TimeoutFuture;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::services::wallet::{js_error_message, providerRequest};
use crate::utils::amount::MintAmount;
use crate::utils::constants::{
    CONTRACT_ADDRESS, MINT_SELECTOR, RECEIPT_POLL_INTERVAL_MS, RECEIPT_POLL_MAX_ATTEMPTS,
    TOTAL_SUPPLY_SELECTOR,
};

/// Signing-stage failure: the wallet rejected or failed to sign the mint.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct SigningError(pub String);

/// Post-broadcast failure: the transaction reverted or never confirmed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransactionError {
    #[error("transaction reverted: {0}")]
    Reverted(String),
    #[error("timed out waiting for confirmation of {0}")]
    Timeout(String),
    #[error("{0}")]
    Provider(String),
}

/// Failure of a read-only provider call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("provider request failed: {0}")]
    Request(String),
    #[error("malformed provider response: {0}")]
    Response(String),
}

/// A validated, ready-to-submit `mint()` invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallDescriptor {
    pub from: String,
    pub to: String,
    pub data: &'static str,
    pub value: String,
}

/// Confirmation record for an included transaction.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Receipt {
    #[serde(rename = "transactionHash")]
    pub transaction_hash: String,
    pub to: Option<String>,
    pub status: Option<String>,
}

impl Receipt {
    /// Pre-Byzantium receipts omit `status`; absence counts as success.
    pub fn succeeded(&self) -> bool {
        self.status.as_deref() != Some("0x0")
    }
}

/// Build the mint call for the current session and amount.
///
/// Pure, no side effects. `None` without a connected signing identity; the
/// amount is always encodable because normalization clamps anything that
/// is not.
pub fn prepare_mint(from: Option<&str>, amount: &MintAmount) -> Option<CallDescriptor> {
    let from = from?;
    Some(CallDescriptor {
        from: from.to_string(),
        to: CONTRACT_ADDRESS.to_string(),
        data: MINT_SELECTOR,
        value: encode_value_hex(amount.wei),
    })
}

/// Encode a wei quantity as a 0x-prefixed hex string.
pub fn encode_value_hex(wei: u128) -> String {
    format!("{:#x}", wei)
}

/// Decode a 0x-prefixed quantity, accepting a zero-padded 32-byte word.
pub fn decode_quantity(hex: &str) -> Result<u64, ProviderError> {
    let digits = hex
        .strip_prefix("0x")
        .ok_or_else(|| ProviderError::Response(format!("missing 0x prefix: {}", hex)))?;
    if digits.is_empty() {
        return Err(ProviderError::Response("empty quantity".to_string()));
    }
    u64::from_str_radix(digits, 16)
        .map_err(|e| ProviderError::Response(format!("bad quantity {}: {}", hex, e)))
}

/// Submit the prepared mint and suspend until the wallet answers.
pub async fn submit_mint(call: &CallDescriptor) -> Result<String, SigningError> {
    let params = serde_wasm_bindgen::to_value(&json!([{
        "from": call.from,
        "to": call.to,
        "data": call.data,
        "value": call.value,
    }]))
    .map_err(|e| SigningError(e.to_string()))?;

    let hash = providerRequest("eth_sendTransaction", params)
        .await
        .map_err(|e| SigningError(js_error_message(e)))?;
    hash.as_string()
        .ok_or_else(|| SigningError("provider returned a non-string transaction hash".to_string()))
}

/// Poll for the receipt of a broadcast transaction until the ledger settles
/// it, one way or the other.
pub async fn await_receipt(hash: &str) -> Result<Receipt, TransactionError> {
    for _ in 0..RECEIPT_POLL_MAX_ATTEMPTS {
        let params = serde_wasm_bindgen::to_value(&json!([hash]))
            .map_err(|e| TransactionError::Provider(e.to_string()))?;
        let value = providerRequest("eth_getTransactionReceipt", params)
            .await
            .map_err(|e| TransactionError::Provider(js_error_message(e)))?;

        // null until the transaction is included
        if !value.is_null() && !value.is_undefined() {
            let receipt: Receipt = serde_wasm_bindgen::from_value(value)
                .map_err(|e| TransactionError::Provider(e.to_string()))?;
            if receipt.succeeded() {
                return Ok(receipt);
            }
            return Err(TransactionError::Reverted(receipt.transaction_hash));
        }
        TimeoutFuture::new(RECEIPT_POLL_INTERVAL_MS).await;
    }
    Err(TransactionError::Timeout(hash.to_string()))
}

/// Read the contract's supply counter.
pub async fn total_supply() -> Result<u64, ProviderError> {
    let params = serde_wasm_bindgen::to_value(&json!([
        { "to": CONTRACT_ADDRESS, "data": TOTAL_SUPPLY_SELECTOR },
        "latest",
    ]))
    .map_err(|e| ProviderError::Request(e.to_string()))?;

    let value = providerRequest("eth_call", params)
        .await
        .map_err(|e| ProviderError::Request(js_error_message(e)))?;
    let hex = value
        .as_string()
        .ok_or_else(|| ProviderError::Response("eth_call returned a non-string value".to_string()))?;
    decode_quantity(&hex)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::amount::normalize;

    #[test]
    fn test_prepare_mint_requires_session() {
        let amount = normalize("0.1");
        assert_eq!(prepare_mint(None, &amount), None);
    }

    #[test]
    fn test_prepare_mint_builds_descriptor() {
        let amount = normalize("0.1");
        let call = prepare_mint(Some("0xabc"), &amount).unwrap();
        assert_eq!(call.from, "0xabc");
        assert_eq!(call.to, CONTRACT_ADDRESS);
        assert_eq!(call.data, MINT_SELECTOR);
        assert_eq!(call.value, "0x16345785d8a0000");
    }

    #[test]
    fn test_encode_value_hex() {
        assert_eq!(encode_value_hex(0), "0x0");
        assert_eq!(encode_value_hex(50_000_000_000_000_000), "0xb1a2bc2ec50000");
        assert_eq!(encode_value_hex(1_000_000_000_000_000_000), "0xde0b6b3a7640000");
    }

    #[test]
    fn test_decode_quantity() {
        assert_eq!(decode_quantity("0x2a").unwrap(), 42);
        assert_eq!(decode_quantity("0x0").unwrap(), 0);
        // full 32-byte ABI word with leading zeros
        let word = format!("0x{:0>64}", "2a");
        assert_eq!(decode_quantity(&word).unwrap(), 42);
    }

    #[test]
    fn test_decode_quantity_rejects_garbage() {
        assert!(decode_quantity("2a").is_err());
        assert!(decode_quantity("0x").is_err());
        assert!(decode_quantity("0xzz").is_err());
    }

    #[test]
    fn test_receipt_deserialization() {
        let receipt: Receipt = serde_json::from_str(
            r#"{
                "transactionHash": "0xdead",
                "to": "0xEffB24c14c9e2c643d44bee0D334F3cFC147C895",
                "status": "0x1",
                "blockNumber": "0xed14fe"
            }"#,
        )
        .unwrap();
        assert_eq!(receipt.transaction_hash, "0xdead");
        assert_eq!(
            receipt.to.as_deref(),
            Some("0xEffB24c14c9e2c643d44bee0D334F3cFC147C895")
        );
        assert!(receipt.succeeded());
    }

    #[test]
    fn test_receipt_status_classification() {
        let reverted = Receipt {
            transaction_hash: "0xdead".to_string(),
            to: None,
            status: Some("0x0".to_string()),
        };
        assert!(!reverted.succeeded());

        let legacy = Receipt {
            transaction_hash: "0xdead".to_string(),
            to: None,
            status: None,
        };
        assert!(legacy.succeeded());
    }
}
