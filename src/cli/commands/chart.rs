use crate::cli::commands::{open_store, parse_session_type, resolve_selector};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::series::{ChartRange, cumulative_series};
use crate::errors::AppResult;
use crate::ui::messages::{field, header, info};
use crate::utils::colors::colorize_profit;
use crate::utils::date::{parse_range, today};
use crate::utils::formatting::{format_signed_currency, short_hand};

const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// One block character per point, scaled between the series min and max.
pub(crate) fn sparkline(points: &[i64]) -> String {
    let (Some(min), Some(max)) = (points.iter().min(), points.iter().max()) else {
        return String::new();
    };
    let span = (max - min) as f64;

    points
        .iter()
        .map(|v| {
            if span == 0.0 {
                BARS[0]
            } else {
                let idx = ((v - min) as f64 / span * (BARS.len() - 1) as f64).round() as usize;
                BARS[idx.min(BARS.len() - 1)]
            }
        })
        .collect()
}

fn parse_chart_range(range: &str) -> AppResult<ChartRange> {
    match ChartRange::from_code(range) {
        Some(r) => Ok(r),
        None => {
            let (start, end) = parse_range(range)?;
            Ok(ChartRange::Custom(start, end))
        }
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Chart {
        range,
        no_baseline,
        session_type,
        bankroll,
    } = cmd
    {
        let chart_range = parse_chart_range(range)?;
        let kind = parse_session_type(session_type)?;
        let (_, snapshot) = open_store(cfg)?;
        let selector = resolve_selector(&snapshot, bankroll.as_deref())?;

        let seed = cfg.chart_baseline && !*no_baseline;
        let series = cumulative_series(&snapshot, chart_range, selector, kind, seed, today());

        let played = series.len() - usize::from(seed);
        if played == 0 {
            info("No chart data to display.");
            return Ok(());
        }

        header(format!("Cumulative profit ({range})"));
        println!("{}\n", sparkline(&series));

        let last = series.last().copied().unwrap_or_default();
        field("Sessions", played);
        field(
            "Final",
            colorize_profit(last, &format_signed_currency(last, cfg.currency)),
        );
        if let (Some(lo), Some(hi)) = (series.iter().min(), series.iter().max()) {
            field("Low", short_hand(*lo, cfg.currency));
            field("High", short_hand(*hi, cfg.currency));
        }
    }
    Ok(())
}
