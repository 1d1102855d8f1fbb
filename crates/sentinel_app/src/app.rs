use std::sync::mpsc;
use std::thread;

use sentinel_core::{update, AppState, Msg};
use sentinel_logging::sentinel_info;

use crate::config::AppConfig;
use crate::console;
use crate::effects::EffectRunner;
use crate::view;

/// Everything the dispatch loop can receive. Commands, poll ticks, cooldown
/// expiries and gateway completions all funnel through one channel, so
/// state transitions never interleave.
pub enum HostEvent {
    Core(Msg),
    Quit,
}

pub fn run(config: AppConfig) -> anyhow::Result<()> {
    let (host_tx, host_rx) = mpsc::channel::<HostEvent>();
    let (confirm_tx, confirm_rx) = mpsc::channel::<String>();

    let runner = EffectRunner::new(&config, host_tx.clone(), confirm_tx)?;

    // Poll ticker: the first fetch happens immediately at startup, not
    // after the first interval elapses.
    {
        let tick_tx = host_tx.clone();
        let interval = config.poll_interval;
        thread::spawn(move || {
            while tick_tx.send(HostEvent::Core(Msg::PollTick)).is_ok() {
                thread::sleep(interval);
            }
        });
    }

    console::spawn(host_tx, confirm_rx);
    sentinel_info!(
        "sentinel console up, polling {} every {:?}",
        config.backend_url,
        config.poll_interval
    );

    let mut state = AppState::new();
    while let Ok(event) = host_rx.recv() {
        let msg = match event {
            HostEvent::Quit => break,
            HostEvent::Core(msg) => msg,
        };
        let (next, effects) = update(std::mem::take(&mut state), msg);
        state = next;
        runner.run(effects);

        if let Some(notice) = state.take_notice() {
            view::print_notice(&notice);
        }
        if state.consume_dirty() {
            view::paint(&state.view());
        }
    }

    Ok(())
}
