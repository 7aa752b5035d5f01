//! Mint flow state machine
//!
//! Pure coordination of one mint attempt: amount in, prepared call out,
//! wallet approval, broadcast, receipt. The page holds this struct in a
//! signal; every transition here is synchronous, the async gateway calls
//! live with the page. At most one attempt is in flight at a time.

use crate::services::contract::{self, CallDescriptor, Receipt, SigningError, TransactionError};
use crate::utils::amount::{self, MintAmount};

/// Lifecycle of the current mint attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MintPhase {
    Idle,
    AwaitingApproval,
    Pending,
    Confirmed,
    Failed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MintFlow {
    address: Option<String>,
    amount: MintAmount,
    prepared: Option<CallDescriptor>,
    phase: MintPhase,
    tx_hash: Option<String>,
    receipt_to: Option<String>,
    mint_error: Option<String>,
    tx_error: Option<String>,
}

impl Default for MintFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl MintFlow {
    pub fn new() -> Self {
        Self {
            address: None,
            amount: MintAmount::floor(),
            prepared: None,
            phase: MintPhase::Idle,
            tx_hash: None,
            receipt_to: None,
            mint_error: None,
            tx_error: None,
        }
    }

    pub fn phase(&self) -> MintPhase {
        self.phase
    }

    pub fn amount(&self) -> &MintAmount {
        &self.amount
    }

    pub fn tx_hash(&self) -> Option<&str> {
        self.tx_hash.as_deref()
    }

    pub fn receipt_to(&self) -> Option<&str> {
        self.receipt_to.as_deref()
    }

    pub fn mint_error(&self) -> Option<&str> {
        self.mint_error.as_deref()
    }

    pub fn tx_error(&self) -> Option<&str> {
        self.tx_error.as_deref()
    }

    pub fn is_connected(&self) -> bool {
        self.address.is_some()
    }

    /// Terminal confirmation; drives the card flip. One-way for the session.
    pub fn is_minted(&self) -> bool {
        self.phase == MintPhase::Confirmed
    }

    /// A wallet connected. Switching to a different account is a fresh
    /// session: the attempt resets, the typed amount survives (it is only
    /// ever mutated by input events).
    pub fn wallet_connected(&mut self, address: String) {
        if self.address.as_deref() == Some(address.as_str()) {
            return;
        }
        let amount = self.amount.clone();
        *self = Self::new();
        self.amount = amount;
        self.address = Some(address);
        self.reprepare();
    }

    /// Wallet disconnect: full reset of the attempt. An already-broadcast
    /// transaction cannot be retracted; its completion callbacks become
    /// no-ops against the reset state.
    pub fn wallet_disconnected(&mut self) {
        let amount = self.amount.clone();
        *self = Self::new();
        self.amount = amount;
    }

    /// The user edited the amount field. Recomputes the prepared call so a
    /// stale descriptor for an old amount can never be submitted. Returns
    /// the (possibly corrected) display string.
    pub fn set_amount(&mut self, raw: &str) -> String {
        self.amount = amount::normalize(raw);
        self.reprepare();
        self.amount.raw.clone()
    }

    fn reprepare(&mut self) {
        self.prepared = contract::prepare_mint(self.address.as_deref(), &self.amount);
    }

    /// The mint trigger is actionable only with a prepared call and no
    /// attempt in flight or already confirmed. A failed attempt re-arms.
    pub fn can_mint(&self) -> bool {
        self.prepared.is_some() && matches!(self.phase, MintPhase::Idle | MintPhase::Failed)
    }

    /// Arm a new attempt: clears prior errors, moves to AwaitingApproval and
    /// yields the call to submit. `None` while the guard denies; repeated
    /// triggers are no-ops.
    pub fn begin(&mut self) -> Option<CallDescriptor> {
        if !self.can_mint() {
            return None;
        }
        self.mint_error = None;
        self.tx_error = None;
        self.tx_hash = None;
        self.receipt_to = None;
        self.phase = MintPhase::AwaitingApproval;
        self.prepared.clone()
    }

    /// The wallet signed and the transaction is broadcast.
    pub fn on_submitted(&mut self, hash: String) {
        if self.phase == MintPhase::AwaitingApproval {
            self.tx_hash = Some(hash);
            self.phase = MintPhase::Pending;
        }
    }

    pub fn on_sign_error(&mut self, error: &SigningError) {
        if self.phase == MintPhase::AwaitingApproval {
            self.mint_error = Some(error.to_string());
            self.phase = MintPhase::Failed;
        }
    }

    /// Receipt confirmed. Only a pending attempt confirms, and only once.
    pub fn on_confirmed(&mut self, receipt: &Receipt) {
        if self.phase == MintPhase::Pending {
            self.receipt_to = receipt.to.clone();
            self.phase = MintPhase::Confirmed;
        }
    }

    pub fn on_tx_error(&mut self, error: &TransactionError) {
        if self.phase == MintPhase::Pending {
            self.tx_error = Some(error.to_string());
            self.phase = MintPhase::Failed;
        }
    }

    /// Mint button label for the current phase.
    pub fn button_label(&self) -> &'static str {
        match self.phase {
            MintPhase::AwaitingApproval => "Waiting for approval",
            MintPhase::Pending | MintPhase::Confirmed => "Minting...",
            MintPhase::Idle | MintPhase::Failed => "Mint",
        }
    }
}
