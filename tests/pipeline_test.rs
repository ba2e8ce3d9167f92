mod common;

use std::collections::BTreeSet;

use superstore_dash::data::aggregate::{
    CityCount, ModeMean, MonthCount, SegmentCount, StateCount, TableRow, WeekdayCount,
};
use superstore_dash::data::{apply_filters, load, load_file, Dimension, LoadError, LoadStatus, Predicates};

fn preds(entries: &[(Dimension, &[&str])]) -> Predicates {
    entries
        .iter()
        .map(|(d, vals)| (*d, vals.iter().map(|v| v.to_string()).collect()))
        .collect()
}

#[test]
fn three_order_scenario() {
    let file = common::three_order_csv();
    let ds = load(file.path());
    assert_eq!(ds.status, LoadStatus::Loaded);
    assert_eq!(ds.len(), 3);

    let days: Vec<_> = ds.orders.iter().map(|o| o.shipping_days).collect();
    assert_eq!(days, [Some(2), Some(5), Some(-1)]);
    assert_eq!(ds.aggregates.shipping_summary.mean, Some(2.0));

    let months: Vec<_> = ds.aggregates.orders_by_month.iter().map(|r| (r.month, r.count)).collect();
    assert_eq!(months, [("January", 1), ("June", 2)]);

    let weekdays: Vec<_> = ds.aggregates.orders_by_weekday.iter().map(|r| (r.weekday, r.count)).collect();
    assert_eq!(weekdays, [("Thursday", 2), ("Sunday", 1)]);

    let june = apply_filters(&ds, &preds(&[(Dimension::Month, &["June"])]));
    assert_eq!(june.len(), 2);
    assert_eq!(june.aggregates.shipping_summary.mean, Some(2.0));
}

#[test]
fn state_aggregate_has_codes() {
    let file = common::three_order_csv();
    let ds = load(file.path());
    let states = &ds.aggregates.orders_by_state;
    assert_eq!(
        states[0],
        StateCount { state: "Texas".into(), count: 2, state_code: Some("TX") }
    );
    assert_eq!(states[1].state_code, Some("OH"));
}

#[test]
fn unknown_state_filter_gives_empty_tables() {
    let file = common::three_order_csv();
    let ds = load(file.path());
    let none = apply_filters(&ds, &preds(&[(Dimension::State, &["Atlantis"])]));

    assert!(none.is_empty());
    let agg = &none.aggregates;
    assert_eq!(agg.shipping_summary.count, 0);
    assert_eq!(agg.shipping_summary.mean, None);
    assert!(agg.shipping_by_mode.is_empty());
    assert!(agg.orders_by_segment.is_empty());
    assert!(agg.orders_by_month.is_empty());
    assert!(agg.orders_by_weekday.is_empty());
    assert!(agg.orders_by_state.is_empty());
    assert!(agg.orders_by_city.is_empty());

    assert_eq!(ModeMean::COLUMNS, ["Ship_Mode", "Shipping_Time"]);
    assert_eq!(SegmentCount::COLUMNS, ["Segment", "Order_Count"]);
    assert_eq!(MonthCount::COLUMNS, ["Month", "Order_Count"]);
    assert_eq!(WeekdayCount::COLUMNS, ["Weekday", "Order_Count"]);
    assert_eq!(CityCount::COLUMNS, ["City", "Order_Count"]);
}

#[test]
fn filtering_is_idempotent() {
    let file = common::mixed_csv();
    let ds = load(file.path());
    let p = preds(&[
        (Dimension::ShipMode, &["First Class", "Same Day"]),
        (Dimension::Segment, &["Consumer", "Corporate"]),
    ]);
    let once = apply_filters(&ds, &p);
    let twice = apply_filters(&once, &p);
    assert!(!once.is_empty());
    assert_eq!(once, twice);
}

#[test]
fn empty_predicates_are_identity() {
    let file = common::mixed_csv();
    let ds = load(file.path());
    assert_eq!(apply_filters(&ds, &Predicates::new()), ds);

    let blank: Predicates = Dimension::ALL.iter().map(|d| (*d, BTreeSet::new())).collect();
    assert_eq!(apply_filters(&ds, &blank), ds);
}

#[test]
fn adding_values_never_shrinks_result() {
    let file = common::mixed_csv();
    let ds = load(file.path());

    let mut p = preds(&[(Dimension::State, &["Texas"]), (Dimension::Weekday, &["Monday"])]);
    let mut previous = apply_filters(&ds, &p).len();
    for extra in ["Ohio", "Washington", "Ontario", "Nowhere"] {
        p.entry(Dimension::State).or_default().insert(extra.to_string());
        let now = apply_filters(&ds, &p).len();
        assert!(now >= previous, "{extra}: {now} < {previous}");
        previous = now;
    }
}

#[test]
fn calendar_order_ignores_row_order() {
    let file = common::mixed_csv();
    let ds = load(file.path());

    let months: Vec<_> = ds.aggregates.orders_by_month.iter().map(|r| r.month).collect();
    assert_eq!(
        months,
        [
            "January", "February", "March", "April", "May", "June", "July", "August",
            "September", "October", "November", "December"
        ]
    );

    let order = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"];
    let positions: Vec<_> = ds
        .aggregates
        .orders_by_weekday
        .iter()
        .map(|r| order.iter().position(|w| *w == r.weekday))
        .collect();
    assert!(positions.iter().all(Option::is_some));
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn segment_counts_sum_to_row_count() {
    let file = common::mixed_csv();
    let ds = load(file.path());
    for p in [
        Predicates::new(),
        preds(&[(Dimension::Month, &["March", "April"])]),
        preds(&[(Dimension::State, &["Ohio"]), (Dimension::ShipMode, &["Same Day", "Second Class"])]),
    ] {
        let filtered = apply_filters(&ds, &p);
        let total: usize = filtered.aggregates.orders_by_segment.iter().map(|r| r.count).sum();
        assert_eq!(total, filtered.len());
    }
}

#[test]
fn filtered_copy_leaves_base_untouched() {
    let file = common::mixed_csv();
    let ds = load(file.path());
    let before = ds.clone();
    let _ = apply_filters(&ds, &preds(&[(Dimension::Segment, &["Corporate"])]));
    assert_eq!(ds, before);
}

#[test]
fn unparsable_dates_are_kept_as_missing() {
    let file = common::sales_csv(&[
        ["2023-01-01", "03/01/2023", "Same Day", "Consumer", "Houston", "Texas"],
        ["01/01/2023", "03/01/2023", "Same Day", "Consumer", "Houston", "Texas"],
    ]);
    let ds = load(file.path());
    assert_eq!(ds.len(), 2);
    assert_eq!(ds.aggregates.shipping_summary.count, 1);
    assert_eq!(ds.aggregates.orders_by_segment[0].count, 2);
    let months: usize = ds.aggregates.orders_by_month.iter().map(|r| r.count).sum();
    assert_eq!(months, 1);
}

#[test]
fn missing_or_broken_files_load_as_empty() {
    let ds = load(std::path::Path::new("no/such/file.csv"));
    assert!(ds.is_empty());
    assert!(matches!(ds.status, LoadStatus::Empty { .. }));

    let header_only = common::sales_csv(&[]);
    let ds = load(header_only.path());
    assert_eq!(ds.empty_reason(), Some("no rows"));

    let mut wrong = tempfile::NamedTempFile::new().unwrap();
    std::io::Write::write_all(&mut wrong, b"a,b\n1,2\n").unwrap();
    assert!(matches!(
        load_file(wrong.path()),
        Err(LoadError::MissingColumn { column: "Ship_Mode", .. })
    ));
    assert!(load(wrong.path()).is_empty());
}
