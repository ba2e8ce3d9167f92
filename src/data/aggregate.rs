use std::collections::BTreeMap;

use serde::Serialize;

use super::model::{month_name, weekday_name, Order, CALENDAR_MONTHS, CALENDAR_WEEKDAYS};
use super::states::postal_code;

// ---------------------------------------------------------------------------
// Table rows
// ---------------------------------------------------------------------------

/// A row of an aggregate table. `COLUMNS` is the table schema, which stays
/// meaningful when the table has no rows.
pub trait TableRow {
    const COLUMNS: &'static [&'static str];

    /// Cell texts, one per entry of `COLUMNS`.
    fn cells(&self) -> Vec<String>;
}

/// Descriptive statistics of `shipping_days` (rows with a missing value are
/// skipped). Every statistic is `None` when there is nothing to describe.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShippingSummary {
    pub count: usize,
    pub mean: Option<f64>,
    /// Sample standard deviation (n - 1); `None` for fewer than two values.
    pub std: Option<f64>,
    pub min: Option<f64>,
    #[serde(rename = "25%")]
    pub p25: Option<f64>,
    #[serde(rename = "50%")]
    pub p50: Option<f64>,
    #[serde(rename = "75%")]
    pub p75: Option<f64>,
    pub max: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModeMean {
    pub ship_mode: String,
    pub mean_days: f64,
}

impl TableRow for ModeMean {
    const COLUMNS: &'static [&'static str] = &["Ship_Mode", "Shipping_Time"];

    fn cells(&self) -> Vec<String> {
        vec![self.ship_mode.clone(), format!("{:.2}", self.mean_days)]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentCount {
    pub segment: String,
    pub count: usize,
}

impl TableRow for SegmentCount {
    const COLUMNS: &'static [&'static str] = &["Segment", "Order_Count"];

    fn cells(&self) -> Vec<String> {
        vec![self.segment.clone(), self.count.to_string()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthCount {
    pub month: &'static str,
    pub count: usize,
}

impl TableRow for MonthCount {
    const COLUMNS: &'static [&'static str] = &["Month", "Order_Count"];

    fn cells(&self) -> Vec<String> {
        vec![self.month.to_string(), self.count.to_string()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekdayCount {
    pub weekday: &'static str,
    pub count: usize,
}

impl TableRow for WeekdayCount {
    const COLUMNS: &'static [&'static str] = &["Weekday", "Order_Count"];

    fn cells(&self) -> Vec<String> {
        vec![self.weekday.to_string(), self.count.to_string()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateCount {
    pub state: String,
    pub count: usize,
    /// Two-letter postal code, `None` for names outside the lookup table.
    pub state_code: Option<&'static str>,
}

impl TableRow for StateCount {
    const COLUMNS: &'static [&'static str] = &["State", "Order_Count", "State_Code"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.state.clone(),
            self.count.to_string(),
            self.state_code.unwrap_or_default().to_string(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityCount {
    pub city: String,
    pub count: usize,
}

impl TableRow for CityCount {
    const COLUMNS: &'static [&'static str] = &["City", "Order_Count"];

    fn cells(&self) -> Vec<String> {
        vec![self.city.clone(), self.count.to_string()]
    }
}

// ---------------------------------------------------------------------------
// All views together
// ---------------------------------------------------------------------------

/// The seven summary views the dashboard renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Aggregates {
    pub shipping_summary: ShippingSummary,
    pub shipping_by_mode: Vec<ModeMean>,
    pub orders_by_segment: Vec<SegmentCount>,
    pub orders_by_month: Vec<MonthCount>,
    pub orders_by_weekday: Vec<WeekdayCount>,
    pub orders_by_state: Vec<StateCount>,
    pub orders_by_city: Vec<CityCount>,
}

impl Aggregates {
    /// Compute every view from scratch.
    pub fn compute(orders: &[Order]) -> Self {
        Aggregates {
            shipping_summary: shipping_summary(orders),
            shipping_by_mode: shipping_by_mode(orders),
            orders_by_segment: orders_by_segment(orders),
            orders_by_month: orders_by_month(orders),
            orders_by_weekday: orders_by_weekday(orders),
            orders_by_state: orders_by_state(orders),
            orders_by_city: orders_by_city(orders),
        }
    }
}

// ---------------------------------------------------------------------------
// Aggregators
// ---------------------------------------------------------------------------

pub fn shipping_summary(orders: &[Order]) -> ShippingSummary {
    let mut values: Vec<f64> = orders
        .iter()
        .filter_map(|o| o.shipping_days)
        .map(|d| d as f64)
        .collect();
    if values.is_empty() {
        return ShippingSummary::default();
    }
    values.sort_by(f64::total_cmp);

    let n = values.len();
    let mean = values.iter().sum::<f64>() / n as f64;
    let std = (n > 1).then(|| {
        let ss: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
        (ss / (n - 1) as f64).sqrt()
    });

    ShippingSummary {
        count: n,
        mean: Some(mean),
        std,
        min: values.first().copied(),
        p25: Some(quantile(&values, 0.25)),
        p50: Some(quantile(&values, 0.50)),
        p75: Some(quantile(&values, 0.75)),
        max: values.last().copied(),
    }
}

/// Linear-interpolated quantile of an ascending, non-empty slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

/// Mean shipping time per ship mode, fastest first.
pub fn shipping_by_mode(orders: &[Order]) -> Vec<ModeMean> {
    let mut sums: BTreeMap<&str, (i64, usize)> = BTreeMap::new();
    for order in orders {
        if let Some(days) = order.shipping_days {
            let entry = sums.entry(order.ship_mode.as_str()).or_default();
            entry.0 += days;
            entry.1 += 1;
        }
    }

    let mut rows: Vec<ModeMean> = sums
        .into_iter()
        .map(|(mode, (total, n))| ModeMean {
            ship_mode: mode.to_string(),
            mean_days: total as f64 / n as f64,
        })
        .collect();
    // Stable sort keeps ship-mode order among equal means.
    rows.sort_by(|a, b| a.mean_days.total_cmp(&b.mean_days));
    rows
}

/// Count rows per key; most frequent first, ties by key.
fn value_counts<'a>(keys: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for key in keys {
        *counts.entry(key).or_default() += 1;
    }
    let mut rows: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(k, n)| (k.to_string(), n))
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1));
    rows
}

pub fn orders_by_segment(orders: &[Order]) -> Vec<SegmentCount> {
    value_counts(orders.iter().map(|o| o.segment.as_str()))
        .into_iter()
        .map(|(segment, count)| SegmentCount { segment, count })
        .collect()
}

/// Orders per month in calendar order. Months without orders are omitted.
pub fn orders_by_month(orders: &[Order]) -> Vec<MonthCount> {
    let mut counts = [0usize; 12];
    for month in orders.iter().filter_map(|o| o.order_month) {
        counts[month.number_from_month() as usize - 1] += 1;
    }
    CALENDAR_MONTHS
        .iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|(month, count)| MonthCount {
            month: month_name(*month),
            count,
        })
        .collect()
}

/// Orders per weekday, Monday first. Weekdays without orders are omitted.
pub fn orders_by_weekday(orders: &[Order]) -> Vec<WeekdayCount> {
    let mut counts = [0usize; 7];
    for weekday in orders.iter().filter_map(|o| o.order_weekday) {
        counts[weekday.num_days_from_monday() as usize] += 1;
    }
    CALENDAR_WEEKDAYS
        .iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|(weekday, count)| WeekdayCount {
            weekday: weekday_name(*weekday),
            count,
        })
        .collect()
}

pub fn orders_by_state(orders: &[Order]) -> Vec<StateCount> {
    value_counts(orders.iter().map(|o| o.state.as_str()))
        .into_iter()
        .map(|(state, count)| StateCount {
            state_code: postal_code(&state),
            state,
            count,
        })
        .collect()
}

pub fn orders_by_city(orders: &[Order]) -> Vec<CityCount> {
    value_counts(orders.iter().map(|o| o.city.as_str()))
        .into_iter()
        .map(|(city, count)| CityCount { city, count })
        .collect()
}
