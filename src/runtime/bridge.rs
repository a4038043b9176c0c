use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;

use anyhow::Result;
use tokio::runtime::Runtime;

use crate::domain::events::ChainUpdate;
use crate::infra::config::NodeConfig;
use crate::node::client::NodeClient;
use crate::usecases::submit_message::{MessageSubmitter, SubmitSourceError};
use crate::wallet::{connector::WalletConnector, payload::EntryFunctionPayload};

use super::worker::run_worker;

/// Commands sent from the TUI to the chain worker.
#[derive(Debug, Clone)]
pub enum ChainCommand {
    FetchAccount { address: String },
    FetchModules { address: String },
    FetchResources { address: String },
    Submit { payload: EntryFunctionPayload },
    Shutdown,
}

/// Owns the worker thread; the TUI sends commands and polls for updates
/// once per frame without blocking.
pub struct ChainBridge {
    cmd_tx: Sender<ChainCommand>,
    evt_rx: Receiver<ChainUpdate>,
}

impl ChainBridge {
    pub fn spawn(node: NodeConfig, wallet: Arc<dyn WalletConnector>) -> Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel::<ChainCommand>();
        let (evt_tx, evt_rx) = mpsc::channel::<ChainUpdate>();

        thread::Builder::new()
            .name("chain-worker".to_owned())
            .spawn(move || {
                let runtime = match Runtime::new() {
                    Ok(runtime) => runtime,
                    Err(error) => {
                        tracing::error!(error = %error, "failed to start chain worker runtime");
                        return;
                    }
                };
                let client = NodeClient::new(&node);
                runtime.block_on(run_worker(client, wallet, cmd_rx, evt_tx));
            })?;

        Ok(Self { cmd_tx, evt_rx })
    }

    pub fn send(&self, command: ChainCommand) -> Result<()> {
        self.cmd_tx
            .send(command)
            .map_err(|_| anyhow::anyhow!("chain worker channel closed"))
    }

    /// Drains all pending updates without blocking.
    pub fn poll_updates(&self) -> Vec<ChainUpdate> {
        let mut updates = Vec::new();
        while let Ok(update) = self.evt_rx.try_recv() {
            updates.push(update);
        }
        updates
    }

    pub fn submitter(&self) -> BridgeSubmitter {
        BridgeSubmitter {
            commands: self.cmd_tx.clone(),
        }
    }
}

impl Drop for ChainBridge {
    fn drop(&mut self) {
        let _ = self.cmd_tx.send(ChainCommand::Shutdown);
    }
}

/// Submitter handle that enqueues the transaction onto the worker; the
/// completion comes back later as a `ChainUpdate::SubmitFinished`.
pub struct BridgeSubmitter {
    commands: Sender<ChainCommand>,
}

impl MessageSubmitter for BridgeSubmitter {
    fn submit(&mut self, payload: EntryFunctionPayload) -> Result<(), SubmitSourceError> {
        self.commands
            .send(ChainCommand::Submit { payload })
            .map_err(|_| SubmitSourceError::Unavailable)
    }
}
