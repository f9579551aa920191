mod common;

use jiff::civil::{Weekday, date};
use jiff::tz::TimeZone;

use common::{log_at, milestone_at};
use progress_report::error::ReportError;
use progress_report::window::{ReportingCalendar, WindowMode, week_monday};

#[test]
fn monday_of_week() {
    // 2026-10-14 is a Wednesday.
    assert_eq!(week_monday(date(2026, 10, 14)), date(2026, 10, 12));
    assert_eq!(week_monday(date(2026, 10, 12)), date(2026, 10, 12));
    assert_eq!(week_monday(date(2026, 10, 17)), date(2026, 10, 12));
    // Sunday belongs to the week that started six days before.
    assert_eq!(week_monday(date(2026, 10, 18)), date(2026, 10, 12));
}

#[test]
fn weekly_on_a_wednesday_is_friday_to_monday() {
    let calendar = ReportingCalendar::new(date(2026, 10, 14));
    let buckets = calendar.buckets(&[], &[], WindowMode::Weekly);
    let ids: Vec<_> = buckets.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(
        ids,
        ["2026-10-16", "2026-10-15", "2026-10-14", "2026-10-13", "2026-10-12"]
    );
    assert!(buckets[0].label.starts_with("Friday"));
    assert!(buckets[4].label.starts_with("Monday"));
    assert!(buckets.iter().all(|b| b.is_empty() && !b.disabled));
}

#[test]
fn weekly_is_always_five_contiguous_weekdays() {
    let mut day = date(2026, 1, 1);
    for _ in 0..21 {
        let buckets = ReportingCalendar::new(day).buckets(&[], &[], WindowMode::Weekly);
        assert_eq!(buckets.len(), 5);
        let mut days: Vec<jiff::civil::Date> =
            buckets.iter().map(|b| b.id.parse().expect("date id")).collect();
        days.reverse();
        assert_eq!(days[0].weekday(), Weekday::Monday);
        for pair in days.windows(2) {
            assert_eq!(pair[0].tomorrow().expect("in range"), pair[1]);
        }
        day = day.tomorrow().expect("in range");
    }
}

#[test]
fn weekly_buckets_match_records_by_calendar_day() {
    let logs = vec![
        log_at("2026-10-13T09:00:00Z", vec![]),
        log_at("2026-10-13T23:59:59Z", vec![]),
        log_at("2026-10-20T09:00:00Z", vec![]),
    ];
    let milestones = vec![milestone_at("2026-10-16T14:00:00Z")];
    let calendar = ReportingCalendar::new(date(2026, 10, 14));
    let buckets = calendar.buckets(&logs, &milestones, WindowMode::Weekly);

    let tuesday = buckets.iter().find(|b| b.id == "2026-10-13").expect("tuesday");
    assert_eq!(tuesday.logs.len(), 2);
    let friday = buckets.iter().find(|b| b.id == "2026-10-16").expect("friday");
    assert_eq!(friday.milestones.len(), 1);
    let total: usize = buckets.iter().map(|b| b.logs.len()).sum();
    assert_eq!(total, 2);
}

#[test]
fn time_zone_moves_records_across_days() {
    let logs = vec![log_at("2026-10-13T02:00:00Z", vec![])];
    let calendar = ReportingCalendar::new(date(2026, 10, 14))
        .with_time_zone(TimeZone::fixed(jiff::tz::offset(-5)));
    let buckets = calendar.buckets(&logs, &[], WindowMode::Weekly);
    let monday = buckets.iter().find(|b| b.id == "2026-10-12").expect("monday");
    assert_eq!(monday.logs.len(), 1);
}

#[test]
fn monthly_has_twelve_buckets_with_disabled_when_empty() {
    let logs = vec![
        log_at("2026-03-02T10:00:00Z", vec![]),
        log_at("2025-03-02T10:00:00Z", vec![]),
    ];
    let milestones = vec![milestone_at("2026-07-20T10:00:00Z")];
    let calendar = ReportingCalendar::new(date(2026, 10, 18));
    let buckets = calendar.buckets(&logs, &milestones, WindowMode::Monthly);

    assert_eq!(buckets.len(), 12);
    assert_eq!(buckets[0].id, "2026-01");
    assert_eq!(buckets[0].label, "January");
    assert_eq!(buckets[11].id, "2026-12");
    for bucket in &buckets {
        assert_eq!(bucket.disabled, bucket.logs.is_empty() && bucket.milestones.is_empty());
    }
    assert!(!buckets[2].disabled);
    assert_eq!(buckets[2].logs.len(), 1, "last year's March stays out");
    assert!(!buckets[6].disabled);
    let enabled = buckets.iter().filter(|b| !b.disabled).count();
    assert_eq!(enabled, 2);
}

#[test]
fn yearly_lists_only_present_years_latest_first() {
    let milestones = vec![
        milestone_at("2023-05-01T10:00:00Z"),
        milestone_at("2024-02-01T10:00:00Z"),
        milestone_at("2023-11-01T10:00:00Z"),
    ];
    let calendar = ReportingCalendar::new(date(2026, 10, 18));
    let buckets = calendar.buckets(&[], &milestones, WindowMode::Yearly);
    let ids: Vec<_> = buckets.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, ["2024", "2023"]);
    assert_eq!(buckets[1].milestones.len(), 2);
}

#[test]
fn yearly_single_year_of_logs() {
    let logs = vec![
        log_at("2025-01-10T10:00:00Z", vec![]),
        log_at("2025-12-10T10:00:00Z", vec![]),
    ];
    let calendar = ReportingCalendar::new(date(2026, 10, 18));
    let buckets = calendar.buckets(&logs, &[], WindowMode::Yearly);
    assert_eq!(buckets.len(), 1);
    assert_eq!(buckets[0].id, "2025");
    assert_eq!(buckets[0].logs.len(), 2);
}

#[test]
fn yearly_falls_back_to_current_year() {
    let calendar = ReportingCalendar::new(date(2026, 10, 18));
    let buckets = calendar.buckets(&[], &[], WindowMode::Yearly);
    assert_eq!(buckets.len(), 1);
    assert_eq!(buckets[0].id, "2026");
    assert!(buckets[0].is_empty());
}

#[test]
fn bucket_lookup_by_id() {
    let logs = vec![log_at("2026-03-02T10:00:00Z", vec![])];
    let calendar = ReportingCalendar::new(date(2026, 10, 18));
    let march = calendar
        .bucket(&logs, &[], WindowMode::Monthly, "2026-03")
        .expect("march exists");
    assert_eq!(march.summary().log_count, 1);

    match calendar.bucket(&logs, &[], WindowMode::Monthly, "2026-13") {
        Err(ReportError::UnknownBucket { mode, id }) => {
            assert_eq!(mode, WindowMode::Monthly);
            assert_eq!(id, "2026-13");
        }
        other => panic!("expected UnknownBucket, got {other:?}"),
    }
}

#[test]
fn window_mode_parses() {
    assert_eq!("weekly".parse::<WindowMode>().ok(), Some(WindowMode::Weekly));
    assert_eq!(" Monthly ".parse::<WindowMode>().ok(), Some(WindowMode::Monthly));
    assert_eq!("year".parse::<WindowMode>().ok(), Some(WindowMode::Yearly));
    assert!("daily".parse::<WindowMode>().is_err());
}
