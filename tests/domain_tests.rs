use rbankroll::core::calculator::aggregate::{total_bankroll, total_expenses};
use rbankroll::core::calculator::filter::SessionFilter;
use rbankroll::core::calculator::staking::{player_profit, staking_summary};
use rbankroll::core::calculator::tournament::tournament_stats;
use rbankroll::core::logic::Core;
use rbankroll::models::{
    Bankroll, BankrollSelector, CurrencyType, SessionType, Snapshot, Staker, Stakes,
    TournamentDetails, Transaction, TransactionType,
};
use rbankroll::store::RecordStore;
use rbankroll::utils::date::parse_range;
use rbankroll::utils::formatting::{
    format_currency, format_hours, format_improvement, format_signed_currency, short_hand,
};

mod common;
use common::{cash, day, refs, setup_data_dir, tournament};

#[test]
fn test_stakes_parsing() {
    let s = Stakes::parse("1/3").expect("valid stakes");
    assert_eq!((s.small, s.big), (1.0, 3.0));
    assert_eq!(s.to_string(), "1/3");

    assert_eq!(Stakes::big_blind_of("$2/$5"), Some(5.0));
    assert_eq!(Stakes::parse("0.5/1").map(|s| s.to_string()), Some("0.5/1".into()));
    assert!(Stakes::parse("abc").is_none());
    assert!(Stakes::parse("1/0").is_none());
    assert!(Stakes::parse("").is_none());
}

#[test]
fn test_currency_formatting() {
    assert_eq!(format_currency(1234, CurrencyType::Usd), "$1,234");
    assert_eq!(format_currency(-80, CurrencyType::Usd), "-$80");
    assert_eq!(format_currency(0, CurrencyType::Eur), "€0");
    assert_eq!(format_signed_currency(120, CurrencyType::Usd), "+$120");
    assert_eq!(format_signed_currency(-40, CurrencyType::Gbp), "-£40");

    assert_eq!(short_hand(999, CurrencyType::Usd), "$999");
    assert_eq!(short_hand(1500, CurrencyType::Usd), "$1.5K");
    assert_eq!(short_hand(2_000_000, CurrencyType::Usd), "$2M");
    assert_eq!(short_hand(-12_340, CurrencyType::Usd), "-$12.3K");

    assert_eq!(CurrencyType::from_code("eur"), Some(CurrencyType::Eur));
    assert_eq!(CurrencyType::from_code("XYZ"), None);
}

#[test]
fn test_hours_and_improvement_formatting() {
    assert_eq!(format_hours(0), "0h");
    assert_eq!(format_hours(300), "5h");
    assert_eq!(format_hours(330), "5h 30m");
    assert_eq!(format_improvement(66.666), "+66.7%");
    assert_eq!(format_improvement(-12.0), "-12.0%");
}

#[test]
fn test_duration_subtracts_breaks_and_follows_multi_day_end() {
    let mut s = cash("2025-09-01", 240, 100, 200, "1/2");
    s.break_minutes = Some(30);
    assert_eq!(s.duration().total_minutes(), 210);

    s.multi_day_end = Some(day("2025-09-02").and_hms_opt(4, 0, 0).expect("valid time"));
    s.break_minutes = None;
    assert_eq!(s.duration().total_minutes(), 600);
}

#[test]
fn test_validation_reports_broken_records() {
    let ok = cash("2025-09-01", 60, 100, 200, "1/2");
    assert!(ok.validate().is_empty());

    let mut bad = ok.clone();
    bad.profit = 5;
    assert_eq!(bad.validate().len(), 1);

    let mut backwards = ok.clone();
    backwards.end_time = backwards.start_time - chrono::Duration::minutes(10);
    assert!(!backwards.validate().is_empty());
    assert_eq!(backwards.duration().total_minutes(), 0);
}

#[test]
fn test_staker_parsing() {
    let s = Staker::parse("Alex:25:1.2").expect("valid staker");
    assert_eq!(s.name, "Alex");
    assert!((s.percentage - 0.25).abs() < 1e-9);
    assert_eq!(s.markup, Some(1.2));

    assert!(Staker::parse("Alex:150").is_none());
    assert!(Staker::parse(":10").is_none());
    assert!(Staker::parse("Alex").is_none());
}

#[test]
fn test_tournament_profit_counts_rebuys() {
    let details = TournamentDetails {
        rebuy_count: 1,
        entrants: Some(120),
        finish: Some(4),
        ..Default::default()
    };
    let deep = tournament("2025-09-05", 300, 100, 500, details);
    assert_eq!(deep.total_buy_in(), 200);
    assert_eq!(deep.profit, 300);

    let bust = tournament(
        "2025-09-06",
        90,
        100,
        0,
        TournamentDetails {
            finish: Some(80),
            ..Default::default()
        },
    );
    let side_game = cash("2025-09-06", 60, 100, 400, "1/2");

    let sessions = vec![deep, bust, side_game];
    let stats = tournament_stats(&refs(&sessions));

    assert_eq!(stats.count, 2);
    assert_eq!(stats.profit, 200);
    assert!((stats.itm_ratio - 0.5).abs() < 1e-9);
    assert!((stats.roi - 200.0 / 300.0).abs() < 1e-9);
    assert_eq!(stats.average_finish, Some(42.0));
    assert_eq!(stats.total_rebuys, 1);

    assert_eq!(tournament_stats(&[]).count, 0);
}

#[test]
fn test_staking_settlement() {
    let details = TournamentDetails {
        stakers: vec![Staker {
            name: "Alex".into(),
            percentage: 0.5,
            markup: Some(1.2),
        }],
        ..Default::default()
    };
    let s = tournament("2025-09-05", 300, 100, 1000, details);
    let sessions = vec![s];

    let summary = staking_summary(&refs(&sessions));
    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].buy_in_covered, 60);
    assert_eq!(summary[0].amount_owed, 500);
    assert_eq!(summary[0].net(), 440);

    assert_eq!(player_profit(&sessions[0]), 460);
}

#[test]
fn test_session_filter() {
    let mut home = cash("2024-12-30", 60, 100, 200, "1/2");
    home.tags = vec!["Home".into()];
    let casino = cash("2025-01-04", 60, 100, 50, "2/5");
    let t = tournament("2025-01-05", 60, 50, 0, Default::default());

    let sessions = vec![home, casino, t];
    let all = refs(&sessions);

    let by_year = SessionFilter {
        year: Some(2025),
        ..Default::default()
    };
    assert_eq!(by_year.apply(&all).len(), 2);

    let by_tag = SessionFilter {
        tag: Some("home".into()),
        ..Default::default()
    };
    assert_eq!(by_tag.apply(&all).len(), 1);

    let cash_only = SessionFilter {
        session_type: SessionType::Cash,
        stakes: Some("2/5".into()),
        ..Default::default()
    };
    assert_eq!(cash_only.apply(&all).len(), 1);

    let by_location = SessionFilter {
        location: Some("aria".into()),
        ..Default::default()
    };
    assert_eq!(by_location.apply(&all).len(), 1);

    let ranged = SessionFilter {
        range: Some(parse_range("2025-01").expect("valid range")),
        ..Default::default()
    };
    assert_eq!(ranged.apply(&all).len(), 2);
}

#[test]
fn test_parse_range_forms() {
    assert_eq!(
        parse_range("2024").expect("year"),
        (day("2024-01-01"), day("2024-12-31"))
    );
    assert_eq!(
        parse_range("2024-02").expect("month"),
        (day("2024-02-01"), day("2024-02-29"))
    );
    assert_eq!(
        parse_range("2024-03:2024-05").expect("month range"),
        (day("2024-03-01"), day("2024-05-31"))
    );
    assert!(parse_range("2024:2024-05").is_err());
    assert!(parse_range("2025:2024").is_err());
    assert!(parse_range("yesterday").is_err());
}

#[test]
fn test_bankroll_selection_and_totals() {
    let mut snapshot = Snapshot::default();
    snapshot.sessions.push(cash("2025-09-01", 60, 100, 300, "1/2"));
    snapshot
        .transactions
        .push(Transaction::new(day("2025-08-30"), TransactionType::Deposit, 1000));
    snapshot
        .transactions
        .push(Transaction::new(day("2025-09-03"), TransactionType::Expense, 50));

    let mut online = Bankroll::new("Online");
    online.sessions.push(cash("2025-09-02", 60, 100, 40, "0.5/1"));
    online
        .transactions
        .push(Transaction::new(day("2025-08-30"), TransactionType::Deposit, 200));
    let online_id = online.id;
    snapshot.bankrolls.push(online);

    assert_eq!(snapshot.sessions_for(BankrollSelector::All).len(), 2);
    assert_eq!(snapshot.sessions_for(BankrollSelector::Default).len(), 1);
    assert_eq!(
        snapshot.selector_for(Some("online")),
        Some(BankrollSelector::Custom(online_id))
    );
    assert_eq!(snapshot.selector_for(Some("missing")), None);

    assert_eq!(total_bankroll(&snapshot, BankrollSelector::Default), 1150);
    assert_eq!(total_bankroll(&snapshot, BankrollSelector::Custom(online_id)), 140);
    assert_eq!(total_bankroll(&snapshot, BankrollSelector::All), 1290);

    let sessions = snapshot.sessions_for(BankrollSelector::All);
    let txns = snapshot.transactions_for(BankrollSelector::All);
    assert_eq!(total_expenses(&sessions, &txns), 50);

    let dash = Core::build_dashboard(&snapshot, BankrollSelector::All, &SessionFilter::default());
    assert_eq!(dash.sessions, 2);
    assert_eq!(dash.profit, 140);
    assert_eq!(dash.bankroll_total, 1290);
    assert_eq!(dash.transactions_total, 1150);
}

#[test]
fn test_store_persists_snapshot() {
    let dir = setup_data_dir("store_persists_snapshot");
    let store = RecordStore::new(&dir);
    store.init().expect("init store");

    assert_eq!(store.load().expect("load empty"), Snapshot::default());

    let mut snapshot = Snapshot::default();
    let mut s = tournament(
        "2025-09-05",
        300,
        100,
        500,
        TournamentDetails {
            rebuy_count: 2,
            ..Default::default()
        },
    );
    s.tags = vec!["series".into()];
    snapshot.sessions.push(s);
    snapshot.bankrolls.push(Bankroll::new("Online"));

    store.save(&snapshot).expect("save");
    assert_eq!(store.load().expect("reload"), snapshot);
}

#[test]
fn test_dashboard_transactions_follow_the_period() {
    let mut snapshot = Snapshot::default();
    snapshot.sessions.push(cash("2024-06-01", 60, 100, 150, "1/2"));
    snapshot
        .transactions
        .push(Transaction::new(day("2025-02-01"), TransactionType::Expense, 500));
    snapshot
        .transactions
        .push(Transaction::new(day("2024-03-01"), TransactionType::Deposit, 1000));

    let in_2024 = SessionFilter {
        range: Some((day("2024-01-01"), day("2024-12-31"))),
        ..Default::default()
    };
    let d = Core::build_dashboard(&snapshot, BankrollSelector::All, &in_2024);
    assert_eq!(d.expenses, 0);
    assert_eq!(d.transactions_total, 1000);
    assert_eq!(d.bankroll_total, 550);

    let by_year = SessionFilter {
        year: Some(2025),
        ..Default::default()
    };
    let d = Core::build_dashboard(&snapshot, BankrollSelector::All, &by_year);
    assert_eq!(d.sessions, 0);
    assert_eq!(d.expenses, 500);
    assert_eq!(d.transactions_total, -500);
}
