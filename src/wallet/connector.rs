use thiserror::Error;

use super::payload::EntryFunctionPayload;

/// The account the wallet is operating on behalf of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletAccount {
    pub address: String,
}

/// A transaction the wallet has signed and handed to the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTransaction {
    pub hash: String,
}

/// Errors surfaced by a wallet implementation. The wallet owns the actual
/// failure semantics; this only classifies them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletSourceError {
    #[error("wallet agent unavailable")]
    Unavailable,
    #[error("wallet denied the request")]
    Denied,
    #[error("wallet returned an invalid response")]
    InvalidResponse,
}

/// Contract of the external wallet agent. All session and signing
/// semantics are owned by the agent, not by this client.
pub trait WalletConnector: Send + Sync {
    fn is_connected(&self) -> Result<bool, WalletSourceError>;
    fn connect(&self) -> Result<(), WalletSourceError>;
    fn account(&self) -> Result<WalletAccount, WalletSourceError>;
    fn sign_and_submit(
        &self,
        payload: &EntryFunctionPayload,
    ) -> Result<PendingTransaction, WalletSourceError>;
}

impl<T: WalletConnector + ?Sized> WalletConnector for &T {
    fn is_connected(&self) -> Result<bool, WalletSourceError> {
        (*self).is_connected()
    }

    fn connect(&self) -> Result<(), WalletSourceError> {
        (*self).connect()
    }

    fn account(&self) -> Result<WalletAccount, WalletSourceError> {
        (*self).account()
    }

    fn sign_and_submit(
        &self,
        payload: &EntryFunctionPayload,
    ) -> Result<PendingTransaction, WalletSourceError> {
        (*self).sign_and_submit(payload)
    }
}
