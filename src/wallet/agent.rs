//! HTTP adapter for the local wallet agent.

use std::time::Duration;

use anyhow::Result;
use serde::Deserialize;

use crate::infra::config::WalletConfig;

use super::{
    connector::{PendingTransaction, WalletAccount, WalletConnector, WalletSourceError},
    payload::EntryFunctionPayload,
};

#[derive(Debug, Deserialize)]
struct ConnectedResponse {
    connected: bool,
}

#[derive(Debug, Deserialize)]
struct AccountResponse {
    address: String,
}

#[derive(Debug, Deserialize)]
struct SubmitResponse {
    hash: String,
}

/// Blocking client for the wallet agent's local HTTP interface.
#[derive(Debug)]
pub struct WalletAgent {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl WalletAgent {
    pub fn new(config: &WalletConfig) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(config.connect_timeout_ms))
            .build()?;

        Ok(Self {
            http,
            base_url: config.endpoint.trim_end_matches('/').to_owned(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/v1/{path}", self.base_url)
    }
}

impl WalletConnector for WalletAgent {
    fn is_connected(&self) -> Result<bool, WalletSourceError> {
        let response: ConnectedResponse = self
            .http
            .get(self.url("connected"))
            .send()
            .map_err(|_| WalletSourceError::Unavailable)?
            .error_for_status()
            .map_err(|_| WalletSourceError::Unavailable)?
            .json()
            .map_err(|_| WalletSourceError::InvalidResponse)?;

        Ok(response.connected)
    }

    fn connect(&self) -> Result<(), WalletSourceError> {
        let response = self
            .http
            .post(self.url("connect"))
            .send()
            .map_err(|_| WalletSourceError::Unavailable)?;

        match response.status() {
            status if status.is_success() => Ok(()),
            status if status.as_u16() == 403 => Err(WalletSourceError::Denied),
            _ => Err(WalletSourceError::Unavailable),
        }
    }

    fn account(&self) -> Result<WalletAccount, WalletSourceError> {
        let response: AccountResponse = self
            .http
            .get(self.url("account"))
            .send()
            .map_err(|_| WalletSourceError::Unavailable)?
            .error_for_status()
            .map_err(|_| WalletSourceError::Denied)?
            .json()
            .map_err(|_| WalletSourceError::InvalidResponse)?;

        Ok(WalletAccount {
            address: response.address,
        })
    }

    fn sign_and_submit(
        &self,
        payload: &EntryFunctionPayload,
    ) -> Result<PendingTransaction, WalletSourceError> {
        let response = self
            .http
            .post(self.url("transactions"))
            .json(payload)
            .send()
            .map_err(|_| WalletSourceError::Unavailable)?;

        let status = response.status();
        if status.as_u16() == 403 {
            return Err(WalletSourceError::Denied);
        }
        if !status.is_success() {
            return Err(WalletSourceError::Unavailable);
        }

        let submitted: SubmitResponse = response
            .json()
            .map_err(|_| WalletSourceError::InvalidResponse)?;

        Ok(PendingTransaction {
            hash: submitted.hash,
        })
    }
}
