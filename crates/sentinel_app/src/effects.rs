use std::sync::mpsc;
use std::thread;

use sentinel_core::{
    CommandReply, DashboardSnapshot, Effect, HistoryRecord, Msg, TransportFailure,
    SYNC_CONFIRM_TEXT,
};
use sentinel_gateway::{
    CommandEnvelope, DashboardWire, GatewayError, GatewayEvent, GatewayHandle, GatewaySettings,
    WireHistoryRecord,
};
use sentinel_logging::{sentinel_debug, sentinel_info};

use crate::app::HostEvent;
use crate::config::AppConfig;

pub struct EffectRunner {
    gateway: GatewayHandle,
    host_tx: mpsc::Sender<HostEvent>,
    confirm_tx: mpsc::Sender<String>,
}

impl EffectRunner {
    pub fn new(
        config: &AppConfig,
        host_tx: mpsc::Sender<HostEvent>,
        confirm_tx: mpsc::Sender<String>,
    ) -> anyhow::Result<Self> {
        let settings = GatewaySettings::new(config.backend_url.clone());
        let (gateway, events) = GatewayHandle::spawn(settings)?;
        spawn_event_pump(events, host_tx.clone());
        Ok(Self {
            gateway,
            host_tx,
            confirm_tx,
        })
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ConfirmSyncAll => {
                    let _ = self.confirm_tx.send(SYNC_CONFIRM_TEXT.to_string());
                }
                Effect::PostSyncAll => {
                    sentinel_info!("📡 sync command dispatched");
                    self.gateway.sync_all();
                }
                Effect::StartSyncCooldown { duration } => {
                    // Fires no matter what the request does; the timer, not
                    // the response, re-enables the trigger.
                    let tx = self.host_tx.clone();
                    thread::spawn(move || {
                        thread::sleep(duration);
                        let _ = tx.send(HostEvent::Core(Msg::SyncCooldownElapsed));
                    });
                }
                Effect::PostListing { game, key, price } => {
                    self.gateway.post_listing(game, key, price);
                }
                Effect::FetchProfitCheck { request, name } => {
                    self.gateway.check_profit(request, name);
                }
                Effect::FetchHistory => {
                    self.gateway.fetch_history();
                }
            }
        }
    }
}

fn spawn_event_pump(events: mpsc::Receiver<GatewayEvent>, host_tx: mpsc::Sender<HostEvent>) {
    thread::spawn(move || {
        while let Ok(event) = events.recv() {
            let msg = match event {
                GatewayEvent::SyncAllCompleted { result } => {
                    Msg::SyncAllResponded(map_command_result(result))
                }
                GatewayEvent::ListingCompleted { result } => {
                    Msg::ListingResponded(map_command_result(result))
                }
                GatewayEvent::CheckCompleted { request, result } => Msg::ProfitCheckResponded {
                    request,
                    result: result.map_err(|err| TransportFailure::new(err.to_string())),
                },
                GatewayEvent::HistoryFetched { result } => match result {
                    Ok(wire) => Msg::HistoryArrived(map_snapshot(wire)),
                    Err(err) => {
                        // A missed poll is silent; the next tick retries and
                        // the mounted rows stay as they are.
                        sentinel_debug!("📡 poll skipped: {err}");
                        continue;
                    }
                },
            };
            if host_tx.send(HostEvent::Core(msg)).is_err() {
                break;
            }
        }
    });
}

fn map_command_result(
    result: Result<CommandEnvelope, GatewayError>,
) -> Result<CommandReply, TransportFailure> {
    result
        .map(|envelope| CommandReply {
            status: envelope.status,
            msg: envelope.msg,
        })
        .map_err(|err| TransportFailure::new(err.to_string()))
}

fn map_snapshot(wire: DashboardWire) -> DashboardSnapshot {
    DashboardSnapshot {
        current_mission: wire.current_mission,
        scanned_count: wire.scanned_count,
        history: wire.history.into_iter().map(map_record).collect(),
    }
}

fn map_record(wire: WireHistoryRecord) -> HistoryRecord {
    HistoryRecord {
        time: wire.time,
        name: wire.name,
        rating: wire.rating,
        sk_price: wire.sk_price,
        py_price: wire.py_price,
        profit: wire.profit,
        roi: wire.roi,
        status: wire.status,
        reason: wire.reason,
        url: wire.url,
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn failed_poll_is_dropped_before_the_core() {
        let (event_tx, event_rx) = mpsc::channel::<GatewayEvent>();
        let (host_tx, host_rx) = mpsc::channel::<HostEvent>();
        spawn_event_pump(event_rx, host_tx);

        // A failed fetch must never become a message; the next natural
        // tick is the only retry.
        event_tx
            .send(GatewayEvent::HistoryFetched {
                result: Err(GatewayError::Network("backend restarting".to_string())),
            })
            .unwrap();
        assert!(host_rx.recv_timeout(Duration::from_millis(200)).is_err());

        event_tx
            .send(GatewayEvent::HistoryFetched {
                result: Ok(DashboardWire {
                    current_mission: "cruise".to_string(),
                    scanned_count: 1,
                    history: Vec::new(),
                }),
            })
            .unwrap();
        match host_rx
            .recv_timeout(Duration::from_secs(5))
            .expect("successful poll forwarded")
        {
            HostEvent::Core(Msg::HistoryArrived(snapshot)) => {
                assert_eq!(snapshot.current_mission, "cruise");
            }
            _ => panic!("expected a history snapshot"),
        }
    }

    #[test]
    fn snapshot_conversion_keeps_order_and_optionals() {
        let wire = DashboardWire {
            current_mission: "cruise".to_string(),
            scanned_count: 4,
            history: vec![
                WireHistoryRecord {
                    time: None,
                    name: "Elden Ring".to_string(),
                    rating: Some("92%".to_string()),
                    sk_price: "¥120".to_string(),
                    py_price: "¥98".to_string(),
                    profit: "¥22".to_string(),
                    roi: "18%".to_string(),
                    status: "✅".to_string(),
                    reason: None,
                    url: "https://example.com/1".to_string(),
                },
                WireHistoryRecord {
                    time: Some("21:14:05".to_string()),
                    name: "Hades II".to_string(),
                    rating: None,
                    sk_price: "¥80".to_string(),
                    py_price: "¥85".to_string(),
                    profit: "-¥5".to_string(),
                    roi: "-6%".to_string(),
                    status: "❌".to_string(),
                    reason: Some("margin too thin".to_string()),
                    url: "https://example.com/2".to_string(),
                },
            ],
        };

        let snapshot = map_snapshot(wire);
        assert_eq!(snapshot.scanned_count, 4);
        assert_eq!(snapshot.history.len(), 2);
        assert_eq!(snapshot.history[0].name, "Elden Ring");
        assert_eq!(snapshot.history[0].time, None);
        assert_eq!(snapshot.history[1].reason.as_deref(), Some("margin too thin"));
    }

    #[test]
    fn transport_errors_become_transport_failures() {
        let result = map_command_result(Err(GatewayError::Timeout("deadline".to_string())));
        assert!(result.is_err());
    }
}
