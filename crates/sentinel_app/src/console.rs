use std::io::{self, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use sentinel_core::Msg;
use sentinel_logging::sentinel_warn;

use crate::app::HostEvent;

/// How long to wait for the dispatcher to answer a sync click with a
/// confirmation request. A disabled trigger answers with nothing at all.
const CONFIRM_WAIT: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, PartialEq, Eq)]
enum ConsoleCommand {
    Sync,
    Post {
        game: String,
        key: String,
        price: String,
    },
    Check(String),
    Quit,
    Unknown,
}

/// Translates a console line into a command. Listing fields are free text
/// split on `|`; missing pieces stay empty and the backend rejects them.
fn parse_line(line: &str) -> Option<ConsoleCommand> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    Some(match word {
        "sync" => ConsoleCommand::Sync,
        "post" => {
            let mut fields = rest.splitn(3, '|').map(str::trim);
            ConsoleCommand::Post {
                game: fields.next().unwrap_or_default().to_string(),
                key: fields.next().unwrap_or_default().to_string(),
                price: fields.next().unwrap_or_default().to_string(),
            }
        }
        "check" => ConsoleCommand::Check(rest.to_string()),
        "quit" | "exit" => ConsoleCommand::Quit,
        _ => ConsoleCommand::Unknown,
    })
}

pub fn spawn(
    host_tx: mpsc::Sender<HostEvent>,
    confirm_rx: mpsc::Receiver<String>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        print_help();
        loop {
            let Some(line) = read_line() else { break };
            let Some(command) = parse_line(&line) else {
                continue;
            };
            let keep_going = match command {
                ConsoleCommand::Sync => handle_sync(&host_tx, &confirm_rx),
                ConsoleCommand::Post { game, key, price } => host_tx
                    .send(HostEvent::Core(Msg::ListingSubmitted { game, key, price }))
                    .is_ok(),
                ConsoleCommand::Check(name) => host_tx
                    .send(HostEvent::Core(Msg::ProfitCheckSubmitted(name)))
                    .is_ok(),
                ConsoleCommand::Quit => {
                    let _ = host_tx.send(HostEvent::Quit);
                    false
                }
                ConsoleCommand::Unknown => {
                    print_help();
                    true
                }
            };
            if !keep_going {
                break;
            }
        }
    })
}

fn handle_sync(host_tx: &mpsc::Sender<HostEvent>, confirm_rx: &mpsc::Receiver<String>) -> bool {
    // Drop any prompt left over from a click whose wait expired, so the
    // next answer pairs with this click and not a previous one.
    while confirm_rx.try_recv().is_ok() {}
    if host_tx.send(HostEvent::Core(Msg::SyncAllClicked)).is_err() {
        return false;
    }
    match confirm_rx.recv_timeout(CONFIRM_WAIT) {
        Ok(prompt) => {
            let msg = if ask_yes_no(&prompt) {
                Msg::SyncAllConfirmed
            } else {
                Msg::SyncAllDeclined
            };
            host_tx.send(HostEvent::Core(msg)).is_ok()
        }
        Err(_) => {
            sentinel_warn!("sync trigger is disabled, command ignored");
            true
        }
    }
}

fn read_line() -> Option<String> {
    print!("> ");
    let _ = io::stdout().flush();
    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line),
    }
}

fn ask_yes_no(prompt: &str) -> bool {
    print!("{prompt} [y/N] ");
    let _ = io::stdout().flush();
    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim(), "y" | "Y" | "yes")
}

fn print_help() {
    println!("commands:");
    println!("  sync                      run a full multi-platform asset sync");
    println!("  post <game>|<key>|<price> queue a manual listing");
    println!("  check <game name>         single-game profit check");
    println!("  quit                      leave the console");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sync_and_quit() {
        assert_eq!(parse_line("sync"), Some(ConsoleCommand::Sync));
        assert_eq!(parse_line("quit"), Some(ConsoleCommand::Quit));
        assert_eq!(parse_line("exit"), Some(ConsoleCommand::Quit));
    }

    #[test]
    fn post_splits_fields_without_validating_them() {
        assert_eq!(
            parse_line("post Street Fighter 6 | AAAAA-BBBBB | 88.5"),
            Some(ConsoleCommand::Post {
                game: "Street Fighter 6".to_string(),
                key: "AAAAA-BBBBB".to_string(),
                price: "88.5".to_string(),
            })
        );
        // Missing pieces pass through empty; the backend rejects them.
        assert_eq!(
            parse_line("post Elden Ring"),
            Some(ConsoleCommand::Post {
                game: "Elden Ring".to_string(),
                key: String::new(),
                price: String::new(),
            })
        );
    }

    #[test]
    fn bare_check_carries_an_empty_name() {
        assert_eq!(parse_line("check"), Some(ConsoleCommand::Check(String::new())));
        assert_eq!(
            parse_line("check Hades II"),
            Some(ConsoleCommand::Check("Hades II".to_string()))
        );
    }

    #[test]
    fn blank_and_unknown_lines() {
        assert_eq!(parse_line("   "), None);
        assert_eq!(parse_line("launch"), Some(ConsoleCommand::Unknown));
    }

    #[test]
    fn leftover_confirm_request_is_drained_before_a_new_click() {
        let (host_tx, host_rx) = mpsc::channel::<HostEvent>();
        let (confirm_tx, confirm_rx) = mpsc::channel::<String>();

        // A prompt whose wait expired on an earlier click is still queued.
        confirm_tx.send("stale prompt".to_string()).unwrap();

        // Nobody answers the click, so the wait times out and the click is
        // treated as landing on a disabled trigger.
        assert!(handle_sync(&host_tx, &confirm_rx));

        match host_rx.try_recv() {
            Ok(HostEvent::Core(Msg::SyncAllClicked)) => {}
            _ => panic!("expected the click to be forwarded"),
        }
        // No confirm answer was synthesized from the stale prompt.
        assert!(host_rx.try_recv().is_err());
    }
}
