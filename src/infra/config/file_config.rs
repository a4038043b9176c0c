use serde::Deserialize;

use crate::infra::config::{AppConfig, LogConfig, NodeConfig, WalletConfig};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub node: Option<FileNodeConfig>,
    pub wallet: Option<FileWalletConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(node) = self.node {
            node.merge_into(&mut config.node);
        }

        if let Some(wallet) = self.wallet {
            wallet.merge_into(&mut config.wallet);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileNodeConfig {
    pub endpoint: Option<String>,
}

impl FileNodeConfig {
    fn merge_into(self, config: &mut NodeConfig) {
        if let Some(endpoint) = self.endpoint {
            config.endpoint = endpoint;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileWalletConfig {
    pub endpoint: Option<String>,
    pub connect_timeout_ms: Option<u64>,
}

impl FileWalletConfig {
    fn merge_into(self, config: &mut WalletConfig) {
        if let Some(endpoint) = self.endpoint {
            config.endpoint = endpoint;
        }

        if let Some(timeout_ms) = self.connect_timeout_ms {
            config.connect_timeout_ms = timeout_ms;
        }
    }
}
