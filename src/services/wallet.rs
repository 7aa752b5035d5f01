//! Injected Ethereum provider interop via wasm-bindgen
//!
//! Talks to `window.ethereum` (MetaMask and compatible extensions): account
//! access, account-change events, and raw JSON-RPC requests. Which wallet
//! backends are offered is the extension's business, not ours.

use wasm_bindgen::prelude::*;

#[wasm_bindgen(inline_js = "
export function hasEthereumProvider() {
    return typeof window.ethereum !== 'undefined';
}

export async function requestAccounts() {
    if (typeof window.ethereum === 'undefined') {
        throw new Error('No Ethereum wallet found. Please install MetaMask or a compatible extension.');
    }
    const accounts = await window.ethereum.request({ method: 'eth_requestAccounts' });
    if (!accounts || accounts.length === 0) {
        throw new Error('Wallet returned no accounts');
    }
    return accounts[0];
}

export function onAccountsChanged(callback) {
    if (typeof window.ethereum === 'undefined' || typeof window.ethereum.on !== 'function') {
        return;
    }
    window.ethereum.on('accountsChanged', (accounts) => {
        callback(accounts && accounts.length > 0 ? accounts[0] : null);
    });
}

export async function providerRequest(method, params) {
    if (typeof window.ethereum === 'undefined') {
        throw new Error('No Ethereum wallet found');
    }
    return await window.ethereum.request({ method: method, params: params });
}
")]
extern "C" {
    /// Whether an injected provider is present on `window`
    pub fn hasEthereumProvider() -> bool;

    /// Prompt the wallet for account access; resolves to the primary address
    #[wasm_bindgen(catch)]
    pub async fn requestAccounts() -> Result<JsValue, JsValue>;

    /// Subscribe to account switches; the callback receives the new primary
    /// address, or null on disconnect
    pub fn onAccountsChanged(callback: &js_sys::Function);

    /// Raw JSON-RPC request against the injected provider
    #[wasm_bindgen(catch)]
    pub async fn providerRequest(method: &str, params: JsValue) -> Result<JsValue, JsValue>;
}

/// Wallet connection state
#[derive(Clone, Debug, PartialEq)]
pub enum WalletState {
    Disconnected,
    Connecting,
    Connected { address: String },
    Error(String),
}

impl WalletState {
    pub fn is_connected(&self) -> bool {
        matches!(self, WalletState::Connected { .. })
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            WalletState::Connected { address } => Some(address),
            _ => None,
        }
    }
}

/// Check for an injected provider without prompting.
pub fn has_ethereum_provider() -> bool {
    hasEthereumProvider()
}

/// Register a listener for account switches and disconnects.
pub fn on_accounts_changed(callback: &js_sys::Function) {
    onAccountsChanged(callback);
}

/// Connect to the injected wallet and return the selected address.
pub async fn connect() -> Result<String, String> {
    match requestAccounts().await {
        Ok(value) => value
            .as_string()
            .ok_or_else(|| "Wallet returned a non-string address".to_string()),
        Err(e) => Err(js_error_message(e)),
    }
}

/// Extract a readable message from a thrown JS value.
pub fn js_error_message(value: JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    match js_sys::Reflect::get(&value, &JsValue::from_str("message")) {
        Ok(message) => message
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value)),
        Err(_) => format!("{:?}", value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_state_accessors() {
        let connected = WalletState::Connected {
            address: "0xabc".to_string(),
        };
        assert!(connected.is_connected());
        assert_eq!(connected.address(), Some("0xabc"));

        assert!(!WalletState::Disconnected.is_connected());
        assert_eq!(WalletState::Connecting.address(), None);
        assert_eq!(WalletState::Error("nope".to_string()).address(), None);
    }
}
