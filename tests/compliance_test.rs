// ABOUTME: Unit tests for the compliance and trend analyzer
// ABOUTME: Validates count partitions, adherence policies, zones, and trend ordering
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Trainboard Analytics

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use trainboard_analytics::intelligence::compliance::{
    AdherenceConfig, AdherenceDenominator, ComplianceAnalyzer,
};
use trainboard_analytics::intelligence::risk_zones::{RiskZone, ZoneThresholds};
use trainboard_analytics::models::{SessionRecord, SessionWindow};

fn day(day_of_month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, day_of_month).unwrap()
}

fn session(id: &str, date: NaiveDate, state: Option<&str>) -> SessionRecord {
    SessionRecord {
        id: id.to_owned(),
        label: format!("Session {id}"),
        href: format!("/sessions/{id}"),
        date,
        plan_block: "base-1".to_owned(),
        modality: "strength".to_owned(),
        state: state.map(str::to_owned),
    }
}

fn window(sessions: Vec<SessionRecord>) -> SessionWindow {
    SessionWindow {
        key: "2026-W32".to_owned(),
        label: "Week 32".to_owned(),
        sessions,
    }
}

#[test]
fn test_empty_window_yields_green_snapshot() {
    let snapshot = ComplianceAnalyzer::default().analyze(&window(vec![]));
    assert_eq!(snapshot.planned_count, 0);
    assert_eq!(snapshot.completed_count, 0);
    assert_eq!(snapshot.move_count, 0);
    assert_eq!(snapshot.skip_count, 0);
    assert!((snapshot.adherence_percentage - 100.0).abs() < f64::EPSILON);
    assert_eq!(snapshot.adherence_zone, RiskZone::Green);
    assert!(snapshot.trend.is_empty());
    assert!(snapshot.plan_blocks.is_empty());
    assert!(snapshot.modalities.is_empty());
}

#[test]
fn test_counts_partition_the_window_exhaustively() {
    let snapshot = ComplianceAnalyzer::default().analyze(&window(vec![
        session("a", day(3), Some("done")),
        session("b", day(3), Some("SCHEDULED")),
        session("c", day(4), Some("moved")),
        session("d", day(4), Some("skipped")),
        session("e", day(5), Some("not-a-state")),
        session("f", day(5), None),
    ]));
    assert_eq!(snapshot.completed_count, 1);
    assert_eq!(snapshot.planned_count, 3); // scheduled + unknown + missing
    assert_eq!(snapshot.move_count, 1);
    assert_eq!(snapshot.skip_count, 1);
    let total = snapshot.planned_count
        + snapshot.completed_count
        + snapshot.move_count
        + snapshot.skip_count;
    assert_eq!(total, 6);
}

#[test]
fn test_moved_sessions_do_not_penalize_default_adherence() {
    // 3 completed, 1 skipped, 2 moved
    let sessions = vec![
        session("a", day(3), Some("completed")),
        session("b", day(3), Some("completed")),
        session("c", day(4), Some("completed")),
        session("d", day(4), Some("skipped")),
        session("e", day(5), Some("moved")),
        session("f", day(5), Some("moved")),
    ];

    let excluding = ComplianceAnalyzer::default().analyze(&window(sessions.clone()));
    assert!((excluding.adherence_percentage - 75.0).abs() < 1e-9);
    assert_eq!(excluding.adherence_zone, RiskZone::Yellow);

    let including = ComplianceAnalyzer::new(AdherenceConfig {
        zones: ZoneThresholds::adherence(),
        denominator: AdherenceDenominator::IncludeMoved,
    })
    .analyze(&window(sessions));
    assert!((including.adherence_percentage - 50.0).abs() < 1e-9);
    assert_eq!(including.adherence_zone, RiskZone::Red);
}

#[test]
fn test_zone_classification_uses_configured_thresholds() {
    let analyzer = ComplianceAnalyzer::new(AdherenceConfig {
        zones: ZoneThresholds::new(80.0, 60.0),
        denominator: AdherenceDenominator::default(),
    });

    // 4 of 5 completed = exactly the green cutoff
    let green = analyzer.analyze(&window(vec![
        session("a", day(3), Some("completed")),
        session("b", day(3), Some("completed")),
        session("c", day(4), Some("completed")),
        session("d", day(5), Some("completed")),
        session("e", day(6), Some("skipped")),
    ]));
    assert!((green.adherence_percentage - 80.0).abs() < 1e-9);
    assert_eq!(green.adherence_zone, RiskZone::Green);

    // 3 of 5 completed = 60%, the yellow cutoff
    let yellow = analyzer.analyze(&window(vec![
        session("a", day(3), Some("completed")),
        session("b", day(3), Some("completed")),
        session("c", day(4), Some("completed")),
        session("d", day(5), Some("skipped")),
        session("e", day(6), Some("planned")),
    ]));
    assert!((yellow.adherence_percentage - 60.0).abs() < 1e-9);
    assert_eq!(yellow.adherence_zone, RiskZone::Yellow);

    // 1 of 5 completed = 20%
    let red = analyzer.analyze(&window(vec![
        session("a", day(3), Some("completed")),
        session("b", day(3), Some("skipped")),
        session("c", day(4), Some("skipped")),
        session("d", day(5), Some("skipped")),
        session("e", day(6), Some("planned")),
    ]));
    assert!((red.adherence_percentage - 20.0).abs() < 1e-9);
    assert_eq!(red.adherence_zone, RiskZone::Red);
}

#[test]
fn test_trend_is_chronological_and_covers_every_session() {
    // Sessions arrive out of day order
    let snapshot = ComplianceAnalyzer::default().analyze(&window(vec![
        session("d", day(7), Some("planned")),
        session("a", day(3), Some("completed")),
        session("c", day(5), Some("skipped")),
        session("b", day(3), Some("moved")),
    ]));

    let dates: Vec<NaiveDate> = snapshot.trend.iter().map(|t| t.date).collect();
    assert_eq!(dates, vec![day(3), day(5), day(7)]);

    let bucketed: usize = snapshot.trend.iter().map(|t| t.sessions.len()).sum();
    assert_eq!(bucketed, 4);

    let first = &snapshot.trend[0];
    assert_eq!(first.completed_count, 1);
    assert_eq!(first.move_count, 1);
    // 1 completed of 1 expected (the move is excluded by default policy)
    assert!((first.adherence_percentage - 100.0).abs() < f64::EPSILON);
    assert_eq!(first.day_label, "Mon 03 Aug");
}

#[test]
fn test_trend_omits_days_without_sessions() {
    let snapshot = ComplianceAnalyzer::default().analyze(&window(vec![
        session("a", day(3), Some("completed")),
        session("b", day(10), Some("completed")),
    ]));
    assert_eq!(snapshot.trend.len(), 2);
    assert_eq!(snapshot.trend[0].date, day(3));
    assert_eq!(snapshot.trend[1].date, day(10));
}

#[test]
fn test_distinct_filter_sets_preserve_first_occurrence_order() {
    let mut a = session("a", day(3), Some("completed"));
    a.plan_block = "peak".to_owned();
    a.modality = "conditioning".to_owned();
    let mut b = session("b", day(3), Some("planned"));
    b.plan_block = "base-1".to_owned();
    b.modality = "strength".to_owned();
    let mut c = session("c", day(4), Some("planned"));
    c.plan_block = "peak".to_owned();
    c.modality = "mobility".to_owned();

    let snapshot = ComplianceAnalyzer::default().analyze(&window(vec![a, b, c]));
    assert_eq!(snapshot.plan_blocks, vec!["peak", "base-1"]);
    assert_eq!(
        snapshot.modalities,
        vec!["conditioning", "strength", "mobility"]
    );
}

#[test]
fn test_all_moved_window_is_fully_adhered_by_default() {
    let snapshot = ComplianceAnalyzer::default().analyze(&window(vec![
        session("a", day(3), Some("moved")),
        session("b", day(4), Some("moved")),
    ]));
    // Nothing was expected once reschedules are excluded
    assert!((snapshot.adherence_percentage - 100.0).abs() < f64::EPSILON);
    assert_eq!(snapshot.adherence_zone, RiskZone::Green);
}

#[test]
fn test_snapshot_serializes_with_snake_case_zone_token() {
    let snapshot = ComplianceAnalyzer::default().analyze(&window(vec![session(
        "a",
        day(3),
        Some("completed"),
    )]));
    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["adherence_zone"], "green");
    assert_eq!(json["completed_count"], 1);
    assert_eq!(json["trend"][0]["sessions"][0]["id"], "a");
}
