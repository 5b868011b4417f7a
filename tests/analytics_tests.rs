use rbankroll::core::calculator::aggregate::{
    average_buy_in, biggest_loss, biggest_win, hourly_rate, minutes_played, rate_per_hour,
    total_profit, win_ratio,
};
use rbankroll::core::calculator::compare::{best_bucket, compare, improvement_over_others};
use rbankroll::core::calculator::grouping::{GroupBy, group_stats, hourly_by};
use rbankroll::core::calculator::series::{
    ChartRange, cumulative, cumulative_points, cumulative_series,
};
use rbankroll::models::{Bankroll, BankrollSelector, CurrencyType, SessionType, Snapshot};
use rbankroll::utils::formatting::{
    bucket_bb, bucket_hourly, bucket_hours, bucket_total, format_percent,
};

mod common;
use common::{cash, day, refs};

fn three_sessions() -> Vec<rbankroll::models::Session> {
    vec![
        cash("2025-09-01", 120, 200, 300, "1/3"),
        cash("2025-09-02", 60, 200, 160, "1/3"),
        cash("2025-09-08", 180, 300, 360, "1/3"),
    ]
}

#[test]
fn test_headline_numbers() {
    let sessions = three_sessions();
    let s = refs(&sessions);

    assert_eq!(total_profit(&s), 120);
    assert_eq!(minutes_played(&s), 360);
    assert_eq!(hourly_rate(&s), 20);
    assert_eq!(format_percent(win_ratio(&s)), "67%");
    assert_eq!(average_buy_in(&s), 233);
    assert_eq!(biggest_win(&s), Some(100));
    assert_eq!(biggest_loss(&s), Some(-40));
}

#[test]
fn test_aggregates_are_repeatable() {
    let sessions = three_sessions();
    let s = refs(&sessions);

    assert_eq!(hourly_rate(&s), hourly_rate(&s));
    assert_eq!(group_stats(&s, GroupBy::Weekday), group_stats(&s, GroupBy::Weekday));
}

#[test]
fn test_empty_input_yields_zero() {
    assert_eq!(total_profit(&[]), 0);
    assert_eq!(hourly_rate(&[]), 0);
    assert_eq!(win_ratio(&[]), 0.0);
    assert_eq!(format_percent(win_ratio(&[])), "0%");
    assert_eq!(average_buy_in(&[]), 0);
    assert_eq!(biggest_win(&[]), None);
}

#[test]
fn test_rate_per_hour_divisor_rules() {
    assert_eq!(rate_per_hour(500, 0, 0), 0);
    // under one hour: minutes / 60
    assert_eq!(rate_per_hour(50, 0, 30), 100);
    assert_eq!(rate_per_hour(90, 1, 30), 60);
    // truncated toward zero
    assert_eq!(rate_per_hour(100, 3, 0), 33);
    assert_eq!(rate_per_hour(-100, 3, 0), -33);
}

#[test]
fn test_weekday_report_always_has_seven_buckets() {
    let sessions = three_sessions();
    let stats = group_stats(&refs(&sessions), GroupBy::Weekday);

    let keys: Vec<&str> = stats.iter().map(|b| b.key.as_str()).collect();
    assert_eq!(
        keys,
        [
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
            "Sunday"
        ]
    );

    assert_eq!(stats[0].sessions, 2);
    assert_eq!(stats[0].profit, 160);
    assert_eq!(stats[0].hourly_rate, 32);
    assert_eq!(stats[1].profit, -40);

    let empty = group_stats(&[], GroupBy::Weekday);
    assert_eq!(empty.len(), 7);
}

#[test]
fn test_month_report_has_twelve_buckets_in_calendar_order() {
    let sessions = three_sessions();
    let stats = group_stats(&refs(&sessions), GroupBy::Month);

    assert_eq!(stats.len(), 12);
    assert_eq!(stats[0].key, "January");
    assert_eq!(stats[8].key, "September");
    assert_eq!(stats[8].sessions, 3);
    assert_eq!(stats[11].key, "December");
}

#[test]
fn test_empty_bucket_formats_as_placeholders() {
    let sessions = vec![cash("2025-09-01", 120, 200, 300, "1/3")];
    let stats = group_stats(&refs(&sessions), GroupBy::Weekday);
    let tuesday = &stats[1];

    assert!(tuesday.is_empty());
    assert_eq!(bucket_total(tuesday, CurrencyType::Usd), "-");
    assert_eq!(bucket_hourly(tuesday, CurrencyType::Usd), "-");
    assert_eq!(bucket_hours(tuesday), "0h");
    assert_eq!(bucket_hourly(&stats[0], CurrencyType::Usd), "$50/hr");
}

#[test]
fn test_stakes_report_computes_big_blinds_per_hour() {
    let sessions = vec![
        cash("2025-09-01", 300, 300, 600, "1/3"),
        cash("2025-09-03", 60, 1000, 900, "5/10"),
        cash("2025-09-04", 60, 100, 150, ""),
    ];
    let stats = group_stats(&refs(&sessions), GroupBy::Stakes);

    assert_eq!(stats.len(), 2);
    assert_eq!(stats[0].key, "1/3");
    assert_eq!(bucket_bb(&stats[0]), "20.00");
    assert_eq!(stats[1].key, "5/10");
    assert_eq!(bucket_bb(&stats[1]), "-10.00");
}

#[test]
fn test_stakes_and_tag_buckets_skip_unclassified_sessions() {
    let mut tagged = cash("2025-09-01", 60, 100, 200, "1/2");
    tagged.tags = vec!["home".into()];
    let untagged = cash("2025-09-02", 60, 100, 50, "1/2");
    let t = common::tournament("2025-09-03", 240, 100, 0, Default::default());

    let sessions = vec![tagged, untagged, t];
    let s = refs(&sessions);

    let tags = group_stats(&s, GroupBy::Tag);
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].key, "home");

    let stakes = group_stats(&s, GroupBy::Stakes);
    assert_eq!(stakes.len(), 1);
    assert_eq!(stakes[0].sessions, 2);
}

#[test]
fn test_year_buckets_sort_numerically() {
    let sessions = vec![
        cash("2025-01-10", 60, 100, 200, "1/2"),
        cash("2023-05-10", 60, 100, 50, "1/2"),
        cash("2024-03-10", 60, 100, 100, "1/2"),
    ];
    let keys: Vec<String> = group_stats(&refs(&sessions), GroupBy::Year)
        .into_iter()
        .map(|b| b.key)
        .collect();

    assert_eq!(keys, ["2023", "2024", "2025"]);
}

#[test]
fn test_cumulative_series_shape() {
    let sessions = three_sessions();
    let s = refs(&sessions);

    let with_baseline = cumulative(&s, true);
    assert_eq!(with_baseline, [0, 100, 60, 120]);

    let without = cumulative(&s, false);
    assert_eq!(without.len(), s.len());
    assert_eq!(without.last().copied(), Some(total_profit(&s)));

    assert_eq!(cumulative(&[], true), [0]);
    assert!(cumulative(&[], false).is_empty());
}

#[test]
fn test_cumulative_points_are_chronological() {
    let sessions = vec![
        cash("2025-09-08", 60, 100, 130, "1/3"),
        cash("2025-09-01", 60, 100, 110, "1/3"),
    ];
    let points = cumulative_points(&refs(&sessions));

    assert_eq!(points, [(day("2025-09-01"), 10), (day("2025-09-08"), 40)]);
}

#[test]
fn test_chart_ranges() {
    let today = day("2025-06-15");

    assert_eq!(ChartRange::OneWeek.start(today), Some(day("2025-06-08")));
    assert!(ChartRange::OneWeek.contains(day("2025-06-08"), today));
    assert!(!ChartRange::OneWeek.contains(day("2025-06-07"), today));
    assert_eq!(ChartRange::YearToDate.start(today), Some(day("2025-01-01")));
    assert_eq!(ChartRange::ThreeMonths.start(today), Some(day("2025-03-15")));
    assert!(ChartRange::All.contains(day("1999-01-01"), today));

    let custom = ChartRange::Custom(day("2025-01-01"), day("2025-01-31"));
    assert!(custom.contains(day("2025-01-31"), today));
    assert!(!custom.contains(day("2025-02-01"), today));

    assert_eq!(ChartRange::from_code("ytd"), Some(ChartRange::YearToDate));
    assert_eq!(ChartRange::from_code("2w"), None);
}

#[test]
fn test_best_bucket_ignores_zero_and_keeps_first_on_tie() {
    let rates = vec![
        ("Monday".to_string(), 0),
        ("Tuesday".to_string(), 30),
        ("Wednesday".to_string(), 30),
        ("Thursday".to_string(), -10),
    ];
    let best = best_bucket(&rates).map(|(k, _)| k.as_str());
    assert_eq!(best, Some("Tuesday"));

    let zeros = vec![("Monday".to_string(), 0), ("Tuesday".to_string(), 0)];
    assert!(best_bucket(&zeros).is_none());
    assert!(compare(&zeros).is_none());
}

#[test]
fn test_improvement_over_others() {
    let imp = improvement_over_others(30, &[10]).unwrap_or_default();
    assert!((imp - 100.0).abs() < 1e-9);

    assert_eq!(improvement_over_others(30, &[]), None);
    assert_eq!(improvement_over_others(10, &[-10]), None);

    let rates = vec![
        ("Monday".to_string(), 40),
        ("Tuesday".to_string(), 0),
        ("Friday".to_string(), 20),
    ];
    let c = compare(&rates).expect("a best bucket");
    assert_eq!(c.key, "Monday");
    assert_eq!(c.rate, 40);
    let pct = c.improvement.expect("another valid bucket");
    assert!((pct - 66.666_666).abs() < 1e-3);

    let single = vec![("Monday".to_string(), 40), ("Tuesday".to_string(), 0)];
    assert_eq!(compare(&single).and_then(|c| c.improvement), None);
}

#[test]
fn test_best_weekday_from_sessions() {
    let sessions = three_sessions();
    let rates = hourly_by(&refs(&sessions), GroupBy::Weekday);
    let c = compare(&rates).expect("a best bucket");

    assert_eq!(c.key, "Monday");
    assert_eq!(c.rate, 32);
}

#[test]
fn test_cumulative_series_by_bankroll_and_session_type() {
    let mut snapshot = Snapshot::default();
    snapshot.sessions.push(cash("2025-09-01", 120, 200, 300, "1/3"));
    snapshot.sessions.push(common::tournament(
        "2025-09-03",
        240,
        100,
        400,
        Default::default(),
    ));

    let mut online = Bankroll::new("Online");
    online.sessions.push(cash("2025-09-02", 60, 100, 50, "0.5/1"));
    let online_id = online.id;
    snapshot.bankrolls.push(online);

    let today = day("2025-12-31");
    let series = |selector, kind, seed| {
        cumulative_series(&snapshot, ChartRange::All, selector, kind, seed, today)
    };

    assert_eq!(
        series(BankrollSelector::All, SessionType::All, true),
        [0, 100, 50, 350]
    );
    assert_eq!(
        series(BankrollSelector::All, SessionType::All, false),
        [100, 50, 350]
    );
    assert_eq!(
        series(BankrollSelector::Default, SessionType::All, false),
        [100, 400]
    );
    assert_eq!(
        series(BankrollSelector::Custom(online_id), SessionType::All, true),
        [0, -50]
    );
    assert_eq!(
        series(BankrollSelector::All, SessionType::Cash, true),
        [0, 100, 50]
    );
    assert_eq!(
        series(BankrollSelector::Default, SessionType::Tournament, false),
        [300]
    );
    assert_eq!(
        series(BankrollSelector::Custom(online_id), SessionType::Tournament, true),
        [0]
    );

    let last_week = cumulative_series(
        &snapshot,
        ChartRange::OneWeek,
        BankrollSelector::All,
        SessionType::All,
        false,
        today,
    );
    assert!(last_week.is_empty());
}

#[test]
fn test_location_buckets_name_sessions_without_a_venue() {
    let mut nameless = cash("2025-09-01", 60, 100, 200, "1/2");
    nameless.location.name = "  ".into();
    let bellagio = cash("2025-09-02", 60, 100, 50, "1/2");

    let sessions = vec![nameless, bellagio];
    let keys: Vec<String> = group_stats(&refs(&sessions), GroupBy::Location)
        .into_iter()
        .map(|b| b.key)
        .collect();

    assert_eq!(keys, ["Bellagio", "Unknown"]);
}
