use crate::cli::commands::{open_store, resolve_filter};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::grouping::{GroupBy, group_stats};
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, info};
use crate::utils::colors::{colorize_optional, colorize_profit};
use crate::utils::formatting::{
    bucket_bb, bucket_hourly, bucket_hours, bucket_total, bucket_win_ratio,
};
use crate::utils::table::{Column, Table};

pub(crate) fn parse_group(by: &str) -> AppResult<GroupBy> {
    GroupBy::from_code(by).ok_or_else(|| {
        AppError::Other(format!(
            "Unknown grouping '{by}'. Use one of: weekday, month, year, stakes, location, tag"
        ))
    })
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { by, filter } = cmd {
        let group = parse_group(by)?;
        let (_, snapshot) = open_store(cfg)?;
        let (selector, session_filter) = resolve_filter(filter, &snapshot)?;
        let sessions = Core::select(&snapshot, selector, &session_filter);

        let stats = group_stats(&sessions, group);

        header(format!("Profit by {}", group.label().to_lowercase()));

        let mut columns = vec![
            Column::left(group.label()),
            Column::right("Sessions"),
            Column::right("Total"),
            Column::right("Hourly"),
            Column::right("Hours"),
            Column::right("Win %"),
        ];
        if group == GroupBy::Stakes {
            columns.push(Column::right("BB/hr"));
        }

        let mut table = Table::new(columns).with_separator(cfg.separator());

        for b in &stats {
            let mut row = vec![
                b.key.clone(),
                b.sessions.to_string(),
                if b.is_empty() {
                    colorize_optional(&bucket_total(b, cfg.currency))
                } else {
                    colorize_profit(b.profit, &bucket_total(b, cfg.currency))
                },
                colorize_optional(&bucket_hourly(b, cfg.currency)),
                colorize_optional(&bucket_hours(b)),
                colorize_optional(&bucket_win_ratio(b)),
            ];
            if group == GroupBy::Stakes {
                row.push(bucket_bb(b));
            }
            table.add_row(row);
        }

        if stats.is_empty() {
            info("No sessions for the selected filters.");
        } else {
            print!("{}", table.render());
        }
    }
    Ok(())
}
