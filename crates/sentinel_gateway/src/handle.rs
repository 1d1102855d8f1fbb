use std::sync::{mpsc, Arc};
use std::thread;

use sentinel_logging::sentinel_error;

use crate::client::{Gateway, GatewaySettings, ReqwestGateway};
use crate::types::GatewayEvent;

enum GatewayCommand {
    SyncAll,
    PostListing {
        game: String,
        key: String,
        price: String,
    },
    CheckProfit {
        request: u64,
        name: String,
    },
    FetchHistory,
}

/// Command side of the gateway. Clonable; every command becomes an
/// independent task that runs to completion. Nothing is cancellable, so a
/// superseded request still reports its (possibly stale) event.
#[derive(Clone)]
pub struct GatewayHandle {
    cmd_tx: mpsc::Sender<GatewayCommand>,
}

impl GatewayHandle {
    /// Spawns the runtime thread against a real HTTP backend.
    pub fn spawn(
        settings: GatewaySettings,
    ) -> Result<(Self, mpsc::Receiver<GatewayEvent>), crate::GatewayError> {
        let gateway = Arc::new(ReqwestGateway::new(settings)?);
        Ok(Self::spawn_with(gateway))
    }

    /// Spawns the runtime thread over any `Gateway`; tests pass fakes here.
    pub fn spawn_with(gateway: Arc<dyn Gateway>) -> (Self, mpsc::Receiver<GatewayEvent>) {
        let (cmd_tx, cmd_rx) = mpsc::channel::<GatewayCommand>();
        let (event_tx, event_rx) = mpsc::channel::<GatewayEvent>();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    sentinel_error!("gateway runtime failed to start: {err}");
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let gateway = gateway.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    run_command(gateway.as_ref(), command, event_tx).await;
                });
            }
        });

        (Self { cmd_tx }, event_rx)
    }

    pub fn sync_all(&self) {
        let _ = self.cmd_tx.send(GatewayCommand::SyncAll);
    }

    pub fn post_listing(
        &self,
        game: impl Into<String>,
        key: impl Into<String>,
        price: impl Into<String>,
    ) {
        let _ = self.cmd_tx.send(GatewayCommand::PostListing {
            game: game.into(),
            key: key.into(),
            price: price.into(),
        });
    }

    pub fn check_profit(&self, request: u64, name: impl Into<String>) {
        let _ = self.cmd_tx.send(GatewayCommand::CheckProfit {
            request,
            name: name.into(),
        });
    }

    pub fn fetch_history(&self) {
        let _ = self.cmd_tx.send(GatewayCommand::FetchHistory);
    }
}

async fn run_command(
    gateway: &dyn Gateway,
    command: GatewayCommand,
    event_tx: mpsc::Sender<GatewayEvent>,
) {
    let event = match command {
        GatewayCommand::SyncAll => GatewayEvent::SyncAllCompleted {
            result: gateway.sync_all().await,
        },
        GatewayCommand::PostListing { game, key, price } => GatewayEvent::ListingCompleted {
            result: gateway.post_listing(&game, &key, &price).await,
        },
        GatewayCommand::CheckProfit { request, name } => GatewayEvent::CheckCompleted {
            request,
            result: gateway.check_profit(&name).await,
        },
        GatewayCommand::FetchHistory => GatewayEvent::HistoryFetched {
            result: gateway.fetch_history().await,
        },
    };
    let _ = event_tx.send(event);
}
