use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::time::Duration;

use crate::domain::events::ChainUpdate;
use crate::node::client::NodeClient;
use crate::wallet::connector::WalletConnector;

use super::bridge::ChainCommand;

const COMMAND_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Drives the command loop on the worker runtime. Each fetch runs as its
/// own task, so responses arrive in whatever order the node answers.
pub async fn run_worker(
    client: NodeClient,
    wallet: Arc<dyn WalletConnector>,
    cmd_rx: Receiver<ChainCommand>,
    evt_tx: Sender<ChainUpdate>,
) {
    let mut poll = tokio::time::interval(COMMAND_POLL_INTERVAL);

    loop {
        loop {
            match cmd_rx.try_recv() {
                Ok(ChainCommand::Shutdown) => return,
                Ok(command) => handle_command(&client, &wallet, &evt_tx, command),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => return,
            }
        }

        poll.tick().await;
    }
}

fn handle_command(
    client: &NodeClient,
    wallet: &Arc<dyn WalletConnector>,
    evt_tx: &Sender<ChainUpdate>,
    command: ChainCommand,
) {
    match command {
        ChainCommand::FetchAccount { address } => {
            let client = client.clone();
            let evt_tx = evt_tx.clone();
            tokio::spawn(async move {
                match client.get_account(&address).await {
                    Ok(account) => {
                        let _ = evt_tx.send(ChainUpdate::AccountReady {
                            address,
                            sequence_number: account.sequence_number,
                        });
                    }
                    Err(error) => {
                        tracing::warn!(%address, error = %error, "account fetch failed");
                    }
                }
            });
        }
        ChainCommand::FetchModules { address } => {
            let client = client.clone();
            let evt_tx = evt_tx.clone();
            tokio::spawn(async move {
                match client.get_account_modules(&address).await {
                    Ok(modules) => {
                        let modules = modules
                            .into_iter()
                            .filter_map(|module| module.into_info())
                            .collect();
                        let _ = evt_tx.send(ChainUpdate::ModulesReady { address, modules });
                    }
                    Err(error) => {
                        tracing::warn!(%address, error = %error, "modules fetch failed");
                    }
                }
            });
        }
        ChainCommand::FetchResources { address } => {
            let client = client.clone();
            let evt_tx = evt_tx.clone();
            tokio::spawn(async move {
                match client.get_account_resources(&address).await {
                    Ok(resources) => {
                        let resources = resources
                            .into_iter()
                            .map(|resource| resource.into_record())
                            .collect();
                        let _ = evt_tx.send(ChainUpdate::ResourcesReady { address, resources });
                    }
                    Err(error) => {
                        tracing::warn!(%address, error = %error, "resources fetch failed");
                    }
                }
            });
        }
        ChainCommand::Submit { payload } => {
            let wallet = Arc::clone(wallet);
            let evt_tx = evt_tx.clone();
            tokio::spawn(async move {
                let outcome =
                    tokio::task::spawn_blocking(move || wallet.sign_and_submit(&payload)).await;

                // Every submission must produce exactly one completion so
                // the in-flight flag is always released.
                let update = match outcome {
                    Ok(Ok(pending)) => ChainUpdate::SubmitFinished {
                        accepted: true,
                        detail: pending.hash,
                    },
                    Ok(Err(error)) => ChainUpdate::SubmitFinished {
                        accepted: false,
                        detail: error.to_string(),
                    },
                    Err(join_error) => ChainUpdate::SubmitFinished {
                        accepted: false,
                        detail: join_error.to_string(),
                    },
                };
                let _ = evt_tx.send(update);
            });
        }
        ChainCommand::Shutdown => {}
    }
}
