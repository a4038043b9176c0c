use std::sync::Arc;

use anyhow::Result;

use crate::{
    cli::{Cli, Command},
    domain, infra, node,
    runtime::{self, ChainBridge, ChainCommand},
    ui,
    usecases::{self, bootstrap::bootstrap, connect_wallet::establish_session, panel},
    wallet::{self, agent::WalletAgent},
};

pub fn run(cli: Cli) -> Result<()> {
    match cli.command_or_default() {
        Command::Run => {
            let context = bootstrap(cli.config.as_deref())?;

            tracing::debug!(
                ui = ui::module_name(),
                domain = domain::module_name(),
                node = node::module_name(),
                runtime = runtime::module_name(),
                usecases = usecases::module_name(),
                wallet = wallet::module_name(),
                infra = infra::module_name(),
                "module boundaries loaded"
            );

            let agent = WalletAgent::new(&context.config.wallet)?;
            let address = match establish_session(&agent) {
                Ok(account) => Some(account.address),
                Err(error) => {
                    tracing::warn!(error = ?error, "wallet session unavailable");
                    None
                }
            };

            let bridge = ChainBridge::spawn(context.config.node.clone(), Arc::new(agent))?;

            if let Some(address) = address.as_deref() {
                for command in account_state_commands(address) {
                    bridge.send(command)?;
                }
            }

            let mut event_source = ui::event_source::CrosstermEventSource;
            let mut orchestrator = panel::DefaultPanelOrchestrator::new(
                domain::panel_state::PanelState::new(address),
                bridge.submitter(),
            );

            ui::shell::start(&context, &bridge, &mut event_source, &mut orchestrator)?;
        }
    }

    Ok(())
}

/// The three independent fetches that describe an account: its metadata,
/// its published modules, and its resources.
fn account_state_commands(address: &str) -> [ChainCommand; 3] {
    [
        ChainCommand::FetchAccount {
            address: address.to_owned(),
        },
        ChainCommand::FetchModules {
            address: address.to_owned(),
        },
        ChainCommand::FetchResources {
            address: address.to_owned(),
        },
    ]
}
