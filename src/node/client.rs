use thiserror::Error;

use crate::infra::config::NodeConfig;

use super::types::{AccountData, MoveModule, MoveResource};

#[derive(Debug, Error)]
pub enum NodeError {
    #[error("node request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("node returned status {status} for {url}")]
    Status { status: u16, url: String },
}

/// Read-only client for the fullnode REST API.
#[derive(Debug, Clone)]
pub struct NodeClient {
    http: reqwest::Client,
    base_url: String,
}

impl NodeClient {
    pub fn new(config: &NodeConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.endpoint.trim_end_matches('/').to_owned(),
        }
    }

    pub async fn get_account(&self, address: &str) -> Result<AccountData, NodeError> {
        self.get_json(self.account_url(address)).await
    }

    pub async fn get_account_modules(&self, address: &str) -> Result<Vec<MoveModule>, NodeError> {
        self.get_json(format!("{}/modules", self.account_url(address)))
            .await
    }

    pub async fn get_account_resources(
        &self,
        address: &str,
    ) -> Result<Vec<MoveResource>, NodeError> {
        self.get_json(format!("{}/resources", self.account_url(address)))
            .await
    }

    fn account_url(&self, address: &str) -> String {
        format!("{}/accounts/{address}", self.base_url)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: String) -> Result<T, NodeError> {
        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(NodeError::Status {
                status: status.as_u16(),
                url,
            });
        }

        Ok(response.json().await?)
    }
}
