//! View Reconciler: history records to table-body markup, no side effects.

use crate::msg::HistoryRecord;

/// Column count of the dashboard table; the empty-state row spans them all.
pub const TABLE_COLUMNS: usize = 7;

/// Substring marking a record as a confirmed arbitrage opportunity.
pub const STATUS_SUCCESS_MARKER: &str = "✅";

const COLOR_SUCCESS: &str = "#3fb950";
const COLOR_FAILURE: &str = "#f85149";
const COLOR_TOP_TIER: &str = "#ffcc00";
const COLOR_MUTED: &str = "#8b949e";
const COLOR_NAME: &str = "#f0f6fc";
const COLOR_PRICE: &str = "#58a6ff";

const TIME_PLACEHOLDER: &str = "--:--:--";
const REASON_PLACEHOLDER: &str = "none";
const RATING_PLACEHOLDER: &str = "--";

/// Renders the full history list in input order, or the empty-state row.
pub fn render_history(records: &[HistoryRecord]) -> String {
    if records.is_empty() {
        return format!(
            "<tr><td colspan='{TABLE_COLUMNS}' style='text-align:center; padding:50px; \
             color:{COLOR_MUTED};'>🛰️ Recon sweep in progress...</td></tr>"
        );
    }

    let mut rows = String::new();
    for record in records {
        rows.push_str(&render_row(record));
    }
    rows
}

fn render_row(record: &HistoryRecord) -> String {
    let profit_color = if record.status.contains(STATUS_SUCCESS_MARKER) {
        COLOR_SUCCESS
    } else {
        COLOR_FAILURE
    };
    let star_color = star_color(rating_value(record.rating.as_deref()));
    let time = record.time.as_deref().unwrap_or(TIME_PLACEHOLDER);
    let rating = record.rating.as_deref().unwrap_or(RATING_PLACEHOLDER);
    let reason = record.reason.as_deref().unwrap_or(REASON_PLACEHOLDER);

    format!(
        "\n<tr>\
         <td>{time}</td>\
         <td><div style=\"font-weight:bold; color:{COLOR_NAME};\">{name}</div>\
         <div style=\"font-size:12px; color:{star_color}; margin-top:4px;\">\
         <span>⭐ Steam rating: {rating}</span></div></td>\
         <td>{sk_price}</td>\
         <td style=\"color:{COLOR_PRICE}; font-family:monospace; font-size:12px;\">{py_price}</td>\
         <td style='color:{profit_color}; font-weight:bold;'>{profit} <small>({roi})</small></td>\
         <td><span style=\"font-size:12px; opacity:0.8;\">{status}</span><br>\
         <small style=\"color:{COLOR_MUTED};\">reason: {reason}</small></td>\
         <td><a href=\"{url}\" target=\"_blank\" style=\"color:{COLOR_TOP_TIER}; \
         text-decoration:none;\">🛒 Source</a></td>\
         </tr>",
        name = record.name,
        sk_price = record.sk_price,
        py_price = record.py_price,
        profit = record.profit,
        roi = record.roi,
        status = record.status,
        url = record.url,
    )
}

fn star_color(rating: f64) -> &'static str {
    if rating >= 90.0 {
        COLOR_TOP_TIER
    } else if rating >= 80.0 {
        COLOR_SUCCESS
    } else {
        COLOR_MUTED
    }
}

/// Parses the leading numeric portion of a rating like `"92%"`.
/// Missing or unparsable ratings classify as 0.
fn rating_value(rating: Option<&str>) -> f64 {
    let raw = rating.unwrap_or("").trim();
    let mut end = 0;
    for (idx, ch) in raw.char_indices() {
        let leading_sign = idx == 0 && (ch == '-' || ch == '+');
        if ch.is_ascii_digit() || ch == '.' || leading_sign {
            end = idx + ch.len_utf8();
        } else {
            break;
        }
    }
    raw[..end].parse().unwrap_or(0.0)
}
