use serde::{Deserialize, Serialize};

/// Default fullnode REST endpoint (devnet).
const DEFAULT_NODE_ENDPOINT: &str = "https://fullnode.devnet.aptoslabs.com/v1";

/// Default local wallet agent endpoint.
const DEFAULT_WALLET_ENDPOINT: &str = "http://127.0.0.1:9009";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub logging: LogConfig,
    pub node: NodeConfig,
    pub wallet: WalletConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NodeConfig {
    pub endpoint: String,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_NODE_ENDPOINT.to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WalletConfig {
    pub endpoint: String,
    pub connect_timeout_ms: u64,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_WALLET_ENDPOINT.to_owned(),
            connect_timeout_ms: 1_500,
        }
    }
}
