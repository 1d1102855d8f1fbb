use chrono::Local;
use sentinel_core::{AppViewModel, Notice, NoticeTone};

pub fn print_notice(notice: &Notice) {
    match notice.tone {
        NoticeTone::Success => println!("[ok] {}", notice.text),
        NoticeTone::Failure => println!("[error] {}", notice.text),
    }
}

/// Repaints the mounted view. Only called when the state is dirty, so
/// unchanged polls never reach the terminal.
pub fn paint(view: &AppViewModel) {
    let stamp = Local::now().format("%H:%M:%S");
    println!(
        "──── {} | {} | painted {stamp} ────",
        view.current_mission, view.scan_count_line
    );

    let sync = &view.sync_trigger;
    println!(
        "[sync]  {} {}",
        sync.label,
        if sync.enabled { "(ready)" } else { "(disabled)" }
    );

    if let Some(line) = &view.listing_status {
        let marker = match line.tone {
            Some(NoticeTone::Success) => "+",
            Some(NoticeTone::Failure) => "!",
            None => " ",
        };
        println!("[post] {marker} {}", line.text);
    }

    println!("[check] {}", view.check_trigger.label);
    if view.panel_visible {
        println!("── report ──");
        println!("{}", view.panel_text);
    }

    println!("── history (rev {}) ──", view.table_revision);
    println!("{}", view.table_markup);

    if view.superseded_checks > 0 {
        println!("(stale check responses applied: {})", view.superseded_checks);
    }
}
