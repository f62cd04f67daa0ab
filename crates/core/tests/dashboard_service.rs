//! Integration tests for `DashboardService` over in-memory sources.

mod support;

use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use straycare_common::testing::{assert_approx_eq, assert_non_increasing, MockClock};
use straycare_core::DashboardService;
use straycare_domain::{
    ActivityKind, ChangeType, ReportCondition, ReportStatus, StrayCareError, VolunteerStatus,
    ZoneCounter,
};
use support::records::{adoption, fixed_now, report, urgent_report, volunteer};
use support::sources::{FailingSource, MockAdoptionSource, MockReportSource, MockVolunteerSource};

fn service(
    reports: MockReportSource,
    adoptions: MockAdoptionSource,
    volunteers: MockVolunteerSource,
) -> DashboardService {
    DashboardService::new(Arc::new(reports), Arc::new(adoptions), Arc::new(volunteers))
        .with_clock(Arc::new(MockClock::new(fixed_now())))
}

fn downtown_fixture() -> MockReportSource {
    MockReportSource::new(vec![
        report("r-1", "Downtown", Some(ReportStatus::Pending), Duration::hours(1)),
        report("r-2", "Downtown", Some(ReportStatus::Rescued), Duration::hours(2)),
        report("r-3", "Downtown", Some(ReportStatus::Completed), Duration::hours(3)),
        report("r-4", "Uptown", Some(ReportStatus::InProgress), Duration::hours(4)),
        report("r-5", "Downtown", None, Duration::days(90)),
    ])
}

#[tokio::test]
async fn stats_for_zone_and_month() {
    let adoptions = MockAdoptionSource::new(vec![
        adoption("a-1", "Biscuit", Duration::days(2)),
        adoption("a-2", "Pepper", Duration::days(200)),
    ]);
    let volunteers = MockVolunteerSource::new(vec![
        volunteer("v-1", "Downtown", VolunteerStatus::Active, Duration::days(3)),
        volunteer("v-2", "Uptown", VolunteerStatus::Pending, Duration::days(40)),
    ]);
    let svc = service(downtown_fixture(), adoptions, volunteers);

    let stats = svc.get_dashboard_stats(Some("Downtown"), Some("month")).await.unwrap();

    assert_eq!(stats.total_reports.value, 3);
    assert_eq!(stats.total_reports.change, "+100%");
    assert_eq!(stats.total_reports.change_type, ChangeType::Increase);
    assert_eq!(stats.under_care.value, 1);
    assert_approx_eq(stats.growth_percentage, 100.0, f64::EPSILON);
    assert_eq!(stats.success_rate.value, "66%");
    assert_eq!(stats.active_zones.value, "1");
    assert_eq!(stats.avg_response_time.value, "12 min");

    // Adoption and active volunteer totals ignore zone and period.
    assert_eq!(stats.successful_adoptions.value, 2);
    assert_eq!(stats.active_volunteers.value, 1);
}

#[tokio::test]
async fn zone_filter_ignores_case_and_all_disables_it() {
    let svc =
        service(downtown_fixture(), MockAdoptionSource::default(), MockVolunteerSource::default());

    let lower = svc.get_dashboard_stats(Some("downtown"), None).await.unwrap();
    assert_eq!(lower.total_reports.value, 3);

    let all = svc.get_dashboard_stats(Some("all"), None).await.unwrap();
    assert_eq!(all.total_reports.value, 4);
    assert_eq!(all.active_zones.value, "2");

    let none = svc.get_dashboard_stats(None, Some("bogus")).await.unwrap();
    assert_eq!(none.total_reports.value, 4);
}

#[tokio::test]
async fn stats_compare_against_previous_window() {
    let reports = MockReportSource::new(vec![
        report("r-1", "North", None, Duration::days(1)),
        report("r-2", "North", None, Duration::days(8)),
        report("r-3", "North", None, Duration::days(9)),
        report("r-4", "North", None, Duration::days(10)),
        report("r-5", "North", None, Duration::days(13)),
    ]);
    let svc = service(reports, MockAdoptionSource::default(), MockVolunteerSource::default());

    let stats = svc.get_dashboard_stats(None, Some("week")).await.unwrap();

    assert_eq!(stats.total_reports.value, 1);
    assert_approx_eq(stats.growth_percentage, -75.0, 1e-9);
    assert_eq!(stats.total_reports.change, "-75%");
    assert_eq!(stats.total_reports.change_type, ChangeType::Decrease);
    assert_eq!(stats.last_period.reports, 4);
}

#[tokio::test]
async fn stats_carry_period_summaries() {
    let reports = MockReportSource::new(vec![
        report("r-1", "North", Some(ReportStatus::Rescued), Duration::days(2)),
        report("r-2", "North", Some(ReportStatus::Pending), Duration::days(3)),
        report("r-3", "North", Some(ReportStatus::InProgress), Duration::days(40)),
    ]);
    let adoptions = MockAdoptionSource::new(vec![
        adoption("a-1", "Biscuit", Duration::days(5)),
        adoption("a-2", "Pepper", Duration::days(35)),
        adoption("a-3", "Rolo", Duration::days(45)),
    ]);
    let volunteers = MockVolunteerSource::new(vec![volunteer(
        "v-1",
        "North",
        VolunteerStatus::Inactive,
        Duration::days(50),
    )]);
    let svc = service(reports, adoptions, volunteers);

    let stats = svc.get_dashboard_stats(None, None).await.unwrap();

    assert_eq!(stats.this_period.reports, 2);
    assert_eq!(stats.this_period.rescued, 1);
    assert_eq!(stats.this_period.adopted, 1);
    assert_eq!(stats.this_period.volunteers, 0);
    assert_eq!(stats.last_period.reports, 1);
    assert_eq!(stats.last_period.rescued, 1);
    assert_eq!(stats.last_period.adopted, 2);
    assert_eq!(stats.last_period.volunteers, 1);
    assert_eq!(stats.active_volunteers.value, 0);
}

#[tokio::test]
async fn stats_on_empty_sources_degrade_to_zero() {
    let svc = service(
        MockReportSource::default(),
        MockAdoptionSource::default(),
        MockVolunteerSource::default(),
    );

    let stats = svc.get_dashboard_stats(None, None).await.unwrap();

    assert_eq!(stats.total_reports.value, 0);
    assert_eq!(stats.total_reports.change, "+0%");
    assert_approx_eq(stats.growth_percentage, 0.0, f64::EPSILON);
    assert_eq!(stats.success_rate.value, "0%");
    assert_eq!(stats.avg_response_time.value, "N/A");
    assert_eq!(stats.active_zones.value, "0");
}

#[tokio::test]
async fn feed_takes_a_quarter_of_the_limit_from_each_source() {
    let reports = MockReportSource::new(vec![
        report("r-1", "North", None, Duration::minutes(30)),
        report("r-2", "North", None, Duration::minutes(10)),
    ]);
    let adoptions = MockAdoptionSource::new(vec![adoption("a-1", "Biscuit", Duration::hours(5))]);
    let volunteers = MockVolunteerSource::new(
        (1..=5)
            .map(|i| {
                volunteer(&format!("v-{i}"), "South", VolunteerStatus::Active, Duration::hours(i))
            })
            .collect(),
    );
    let svc = service(reports, adoptions, volunteers);

    let feed = svc.get_activity_feed(4).await.unwrap();

    assert_eq!(feed.total, 3);
    assert_eq!(feed.activities.len(), 3);
    let related: Vec<_> = feed.activities.iter().map(|a| a.related_id.as_str()).collect();
    assert_eq!(related, ["r-2", "v-1", "a-1"]);
    let kinds: Vec<_> = feed.activities.iter().map(|a| a.kind).collect();
    assert_eq!(kinds, [ActivityKind::Rescue, ActivityKind::Volunteer, ActivityKind::Adoption]);
    assert_eq!(feed.activities[0].time_ago, "10 min ago");
}

#[tokio::test]
async fn feed_flags_urgent_reports_and_counts_them_as_unread() {
    let reports = MockReportSource::new(vec![
        urgent_report("r-1", "North", ReportCondition::Critical, Duration::minutes(1)),
        urgent_report("r-2", "North", ReportCondition::Injured, Duration::minutes(2)),
        urgent_report("r-3", "North", ReportCondition::Sick, Duration::minutes(3)),
        report("r-4", "North", None, Duration::minutes(4)),
    ]);
    let adoptions = MockAdoptionSource::new(vec![adoption("a-1", "Biscuit", Duration::minutes(5))]);
    let svc = service(reports, adoptions, MockVolunteerSource::default());

    let feed = svc.get_activity_feed(16).await.unwrap();

    assert_eq!(feed.total, 5);
    assert_eq!(feed.unread_count, 2);
    for item in &feed.activities {
        let expected = matches!(item.related_id.as_str(), "r-1" | "r-2");
        assert_eq!(item.urgent, expected, "urgency of {}", item.related_id);
    }
    let timestamps: Vec<_> = feed.activities.iter().map(|a| a.timestamp).collect();
    assert_non_increasing(&timestamps);
}

#[tokio::test]
async fn feed_never_exceeds_limit() {
    let reports = MockReportSource::new(
        (0..10).map(|i| report(&format!("r-{i}"), "North", None, Duration::minutes(i))).collect(),
    );
    let adoptions = MockAdoptionSource::new(
        (0..10).map(|i| adoption(&format!("a-{i}"), "Rex", Duration::minutes(i))).collect(),
    );
    let volunteers = MockVolunteerSource::new(
        (0..10)
            .map(|i| {
                volunteer(&format!("v-{i}"), "North", VolunteerStatus::Active, Duration::minutes(i))
            })
            .collect(),
    );
    let svc = service(reports, adoptions, volunteers);

    for limit in [0, 1, 3, 4, 7, 20] {
        let feed = svc.get_activity_feed(limit).await.unwrap();
        assert!(feed.total <= limit, "limit {limit} produced {}", feed.total);
        assert_eq!(feed.total, feed.activities.len());
    }

    let empty = svc.get_activity_feed(0).await.unwrap();
    assert!(empty.activities.is_empty());
    assert_eq!(empty.unread_count, 0);
}

#[tokio::test]
async fn chart_data_shapes() {
    let reports = MockReportSource::new(vec![
        report("r-1", "North", Some(ReportStatus::Rescued), Duration::days(1)),
        report("r-2", "North", None, Duration::days(2)),
        report("r-3", "South", Some(ReportStatus::InProgress), Duration::days(50)),
        report("r-4", "South", Some(ReportStatus::Closed), Duration::days(400)),
    ]);
    let adoptions = MockAdoptionSource::new(vec![adoption("a-1", "Biscuit", Duration::days(3))]);
    let svc = service(reports, adoptions, MockVolunteerSource::default());

    let charts = svc.get_chart_data(6).await.unwrap();

    let months: Vec<_> = charts.monthly_progress.iter().map(|m| m.month.as_str()).collect();
    assert_eq!(months, ["Jan", "Feb", "Mar", "Apr", "May", "Jun"]);
    let june = &charts.monthly_progress[5];
    assert_eq!((june.reports, june.rescued, june.adopted), (2, 1, 1));
    let may = &charts.monthly_progress[4];
    assert_eq!((may.reports, may.rescued, may.adopted), (0, 0, 0));
    let april = &charts.monthly_progress[3];
    assert_eq!((april.reports, april.rescued), (1, 1));

    let weekly: Vec<_> = charts.weekly_activity.iter().map(|w| (w.day.as_str(), w.value)).collect();
    assert_eq!(
        weekly,
        [("Mon", 0), ("Tue", 0), ("Wed", 0), ("Thu", 1), ("Fri", 1), ("Sat", 0), ("Sun", 0)]
    );

    assert_eq!(charts.zone_distribution.values().sum::<usize>(), 4);
    assert_eq!(charts.status_breakdown.values().sum::<usize>(), 4);
    assert_eq!(charts.status_breakdown["PENDING"], 1);
    assert_eq!(charts.status_breakdown["CLOSED"], 1);
}

#[tokio::test]
async fn chart_data_with_zero_months_is_well_formed() {
    let svc = service(
        MockReportSource::default(),
        MockAdoptionSource::default(),
        MockVolunteerSource::default(),
    );

    let charts = svc.get_chart_data(0).await.unwrap();

    assert!(charts.monthly_progress.is_empty());
    assert_eq!(charts.weekly_activity.len(), 7);
    assert!(charts.zone_distribution.is_empty());
}

#[tokio::test]
async fn zone_statistics_group_raw_locations() {
    let reports = MockReportSource::new(vec![
        report("r-1", "North", Some(ReportStatus::Rescued), Duration::days(1)),
        report("r-2", "North", Some(ReportStatus::Completed), Duration::days(100)),
        report("r-3", "north", Some(ReportStatus::InProgress), Duration::days(2)),
    ]);
    let svc = service(reports, MockAdoptionSource::default(), MockVolunteerSource::default());

    let table = svc.get_zone_statistics().await.unwrap();

    assert_eq!(table.total_zones, 2);
    assert_eq!(table.zones["North"], ZoneCounter { total: 2, rescued: 1 });
    assert_eq!(table.zones["north"], ZoneCounter { total: 1, rescued: 1 });
}

#[tokio::test]
async fn quick_stats_with_no_reports() {
    let svc = service(
        MockReportSource::default(),
        MockAdoptionSource::default(),
        MockVolunteerSource::default(),
    );

    let stats = svc.get_quick_stats().await.unwrap();

    assert_eq!(stats.avg_response_time, "N/A");
    assert_eq!(stats.success_rate, 0);
    assert_eq!(stats.active_zones, 0);
    assert_eq!(stats.today_reports, 0);
}

#[tokio::test]
async fn quick_stats_count_today_in_configured_zone() {
    let reports = MockReportSource::new(vec![
        report("r-1", "North", Some(ReportStatus::Completed), Duration::hours(1)),
        report("r-2", "South", None, Duration::hours(13)),
        report("r-3", "South", None, Duration::days(3)),
    ]);
    let clock = MockClock::new(fixed_now());
    let svc = DashboardService::new(
        Arc::new(reports),
        Arc::new(MockAdoptionSource::default()),
        Arc::new(MockVolunteerSource::default()),
    )
    .with_clock(Arc::new(clock.clone()));

    let utc = svc.get_quick_stats().await.unwrap();
    assert_eq!(utc.today_reports, 1);
    assert_eq!(utc.success_rate, 33);
    assert_eq!(utc.active_zones, 2);
    assert_eq!(utc.avg_response_time, "12 min");

    // 12:00 UTC is 21:00 in Tokyo; local midnight was 15:00 UTC the day before.
    let tokyo = svc.with_timezone(chrono_tz::Asia::Tokyo);
    assert_eq!(tokyo.get_quick_stats().await.unwrap().today_reports, 2);

    // Past Tokyo midnight only reports from the new local day count.
    clock.advance(Duration::hours(3));
    assert_eq!(tokyo.get_quick_stats().await.unwrap().today_reports, 0);
}

#[tokio::test]
async fn daily_series_groups_by_date() {
    let reports = MockReportSource::new(vec![
        report("r-1", "North", None, Duration::hours(2)),
        report("r-2", "North", None, Duration::days(2)),
        report("r-3", "North", None, Duration::days(2) + Duration::hours(1)),
        report("r-4", "North", None, Duration::days(20)),
    ]);
    let svc = service(reports, MockAdoptionSource::default(), MockVolunteerSource::default());

    let week = svc.get_daily_report_series(Some("7days")).await.unwrap();
    let dates: Vec<_> = week.iter().map(|d| (d.date, d.count)).collect();
    assert_eq!(
        dates,
        [
            (NaiveDate::from_ymd_opt(2024, 6, 13).unwrap(), 2),
            (NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(), 1),
        ]
    );

    let month = svc.get_daily_report_series(Some("30days")).await.unwrap();
    assert_eq!(month.len(), 3);
    assert_eq!(month[0].date, NaiveDate::from_ymd_opt(2024, 5, 26).unwrap());

    let fallback = svc.get_daily_report_series(Some("1year")).await.unwrap();
    assert_eq!(fallback, week);
}

#[tokio::test]
async fn source_failure_aborts_the_operation() {
    let failing_reports = DashboardService::new(
        Arc::new(FailingSource),
        Arc::new(MockAdoptionSource::default()),
        Arc::new(MockVolunteerSource::default()),
    );
    assert!(matches!(
        failing_reports.get_dashboard_stats(None, None).await,
        Err(StrayCareError::Database(_))
    ));
    assert!(failing_reports.get_zone_statistics().await.is_err());
    assert!(failing_reports.get_quick_stats().await.is_err());
    assert!(failing_reports.get_daily_report_series(None).await.is_err());

    let failing_adoptions = DashboardService::new(
        Arc::new(MockReportSource::default()),
        Arc::new(FailingSource),
        Arc::new(MockVolunteerSource::default()),
    );
    assert!(failing_adoptions.get_activity_feed(20).await.is_err());
    assert!(failing_adoptions.get_chart_data(6).await.is_err());

    let failing_volunteers = DashboardService::new(
        Arc::new(MockReportSource::default()),
        Arc::new(MockAdoptionSource::default()),
        Arc::new(FailingSource),
    );
    assert!(failing_volunteers.get_dashboard_stats(Some("all"), None).await.is_err());
    // Zone statistics only read reports.
    assert!(failing_volunteers.get_zone_statistics().await.is_ok());
}
