//! Use case for establishing a wallet session at startup.
//!
//! The wallet agent owns the actual session; this only asks it to open one
//! if none exists, then reads back the active account.

use crate::wallet::connector::{WalletAccount, WalletConnector, WalletSourceError};

/// Domain-level errors for the session handshake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectError {
    /// The wallet agent could not be reached.
    AgentUnavailable,
    /// The agent refused to open a session.
    ConnectionDenied,
    /// The agent answered with something the client could not read.
    InvalidResponse,
}

/// Establishes a wallet session and returns the active account.
///
/// Makes at most one connect attempt: if the agent already reports a
/// session, none is made; if the attempt fails, the error is returned
/// without retrying.
pub fn establish_session(wallet: &dyn WalletConnector) -> Result<WalletAccount, ConnectError> {
    let connected = wallet.is_connected().map_err(map_source_error)?;
    if !connected {
        wallet.connect().map_err(map_source_error)?;
    }

    wallet.account().map_err(map_source_error)
}

fn map_source_error(error: WalletSourceError) -> ConnectError {
    match error {
        WalletSourceError::Unavailable => ConnectError::AgentUnavailable,
        WalletSourceError::Denied => ConnectError::ConnectionDenied,
        WalletSourceError::InvalidResponse => ConnectError::InvalidResponse,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wallet::{connector::PendingTransaction, payload::EntryFunctionPayload};
    use std::sync::Mutex;

    struct StubWallet {
        connected: Result<bool, WalletSourceError>,
        connect_result: Result<(), WalletSourceError>,
        account_result: Result<WalletAccount, WalletSourceError>,
        connect_calls: Mutex<u32>,
        account_calls: Mutex<u32>,
    }

    impl StubWallet {
        fn new(connected: bool) -> Self {
            Self {
                connected: Ok(connected),
                connect_result: Ok(()),
                account_result: Ok(WalletAccount {
                    address: "0xcafe".to_owned(),
                }),
                connect_calls: Mutex::new(0),
                account_calls: Mutex::new(0),
            }
        }

        fn connect_calls(&self) -> u32 {
            *self.connect_calls.lock().expect("lock must not be poisoned")
        }

        fn account_calls(&self) -> u32 {
            *self.account_calls.lock().expect("lock must not be poisoned")
        }
    }

    impl WalletConnector for StubWallet {
        fn is_connected(&self) -> Result<bool, WalletSourceError> {
            self.connected.clone()
        }

        fn connect(&self) -> Result<(), WalletSourceError> {
            *self.connect_calls.lock().expect("lock must not be poisoned") += 1;
            self.connect_result.clone()
        }

        fn account(&self) -> Result<WalletAccount, WalletSourceError> {
            *self.account_calls.lock().expect("lock must not be poisoned") += 1;
            self.account_result.clone()
        }

        fn sign_and_submit(
            &self,
            _payload: &EntryFunctionPayload,
        ) -> Result<PendingTransaction, WalletSourceError> {
            unreachable!("session handshake must not submit transactions")
        }
    }

    #[test]
    fn skips_connect_when_session_already_open() {
        let wallet = StubWallet::new(true);

        let account = establish_session(&wallet).expect("session should be established");

        assert_eq!(account.address, "0xcafe");
        assert_eq!(wallet.connect_calls(), 0);
        assert_eq!(wallet.account_calls(), 1);
    }

    #[test]
    fn connects_exactly_once_when_no_session() {
        let wallet = StubWallet::new(false);

        let account = establish_session(&wallet).expect("session should be established");

        assert_eq!(account.address, "0xcafe");
        assert_eq!(wallet.connect_calls(), 1);
    }

    #[test]
    fn stops_when_agent_is_unreachable() {
        let mut wallet = StubWallet::new(false);
        wallet.connected = Err(WalletSourceError::Unavailable);

        let result = establish_session(&wallet);

        assert_eq!(result, Err(ConnectError::AgentUnavailable));
        assert_eq!(wallet.connect_calls(), 0);
        assert_eq!(wallet.account_calls(), 0);
    }

    #[test]
    fn does_not_read_account_when_connect_is_denied() {
        let mut wallet = StubWallet::new(false);
        wallet.connect_result = Err(WalletSourceError::Denied);

        let result = establish_session(&wallet);

        assert_eq!(result, Err(ConnectError::ConnectionDenied));
        assert_eq!(wallet.account_calls(), 0);
    }
}
