use crate::errors::AppResult;
use crate::store::log::read_log;
use crate::utils::table::{strip_ansi, visible_width};
use ansi_term::Colour;
use std::path::Path;

/// Colour of the operation name in the log listing
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "txn" => Colour::Yellow,
        "location" | "bankroll" => Colour::Blue,
        "export" => Colour::Cyan,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

const MAX_OP_WIDTH: usize = 60;

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(dir: &Path) -> AppResult<()> {
        let entries = read_log(dir)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let rows: Vec<(usize, String, String, String)> = entries
            .into_iter()
            .enumerate()
            .map(|(i, e)| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or(e.date);
                let colour = color_for_operation(&e.operation);
                let op = if e.target.is_empty() {
                    colour.paint(e.operation.as_str()).to_string()
                } else {
                    format!("{} ({})", colour.paint(e.operation.as_str()), truncate(&e.target))
                };
                (i + 1, date, op, e.message)
            })
            .collect();

        let id_w = rows.len().to_string().len();
        let date_w = rows.iter().map(|r| r.1.len()).max().unwrap_or(0);
        let op_w = rows
            .iter()
            .map(|r| visible_width(&r.2))
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);

        println!("📜 Internal log:\n");

        for (id, date, op, message) in rows {
            let padding = " ".repeat(op_w.saturating_sub(visible_width(&op)));
            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                op,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}

/// Long targets (uuids, paths) are cut to keep the op column readable.
fn truncate(s: &str) -> String {
    let visible = strip_ansi(s);
    if visible.chars().count() > 40 {
        let mut t: String = visible.chars().take(37).collect();
        t.push_str("...");
        t
    } else {
        visible
    }
}
