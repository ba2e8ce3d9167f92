use std::path::{Path, PathBuf};

use chrono::{Datelike, Month, NaiveDate, Weekday};

use super::aggregate::Aggregates;

// ---------------------------------------------------------------------------
// Source schema
// ---------------------------------------------------------------------------

/// Column names the loader requires in the CSV header.
pub mod columns {
    pub const SHIP_MODE: &str = "Ship_Mode";
    pub const SEGMENT: &str = "Segment";
    pub const STATE: &str = "State";
    pub const CITY: &str = "City";
    pub const ORDER_DATE: &str = "Order_Date";
    pub const SHIP_DATE: &str = "Ship_Date";

    pub const REQUIRED: [&str; 6] = [SHIP_MODE, SEGMENT, STATE, CITY, ORDER_DATE, SHIP_DATE];
}

/// Date format used by both date columns (`DD/MM/YYYY`).
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Months in calendar order.
pub const CALENDAR_MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Weekdays in calendar order, Monday first.
pub const CALENDAR_WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// English month name ("January").
pub fn month_name(month: Month) -> &'static str {
    month.name()
}

/// English weekday name ("Monday"). chrono's `Display` only gives "Mon".
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

// ---------------------------------------------------------------------------
// Order – one row of the sales table with its derived columns
// ---------------------------------------------------------------------------

/// A single order line. Dates that failed to parse are `None`, and so is
/// every field derived from them.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub ship_mode: String,
    pub segment: String,
    pub state: String,
    pub city: String,
    pub order_date: Option<NaiveDate>,
    pub ship_date: Option<NaiveDate>,
    /// `ship_date - order_date` in whole days. May be negative.
    pub shipping_days: Option<i64>,
    pub order_month: Option<Month>,
    pub order_weekday: Option<Weekday>,
}

impl Order {
    /// Build an order and derive shipping time, month and weekday.
    pub fn new(
        ship_mode: impl Into<String>,
        segment: impl Into<String>,
        state: impl Into<String>,
        city: impl Into<String>,
        order_date: Option<NaiveDate>,
        ship_date: Option<NaiveDate>,
    ) -> Self {
        let shipping_days = match (order_date, ship_date) {
            (Some(ordered), Some(shipped)) => Some((shipped - ordered).num_days()),
            _ => None,
        };
        let order_month = order_date.and_then(|d| Month::try_from(d.month() as u8).ok());
        let order_weekday = order_date.map(|d| d.weekday());

        Order {
            ship_mode: ship_mode.into(),
            segment: segment.into(),
            state: state.into(),
            city: city.into(),
            order_date,
            ship_date,
            shipping_days,
            order_month,
            order_weekday,
        }
    }

    pub fn order_month_name(&self) -> Option<&'static str> {
        self.order_month.map(month_name)
    }

    pub fn order_weekday_name(&self) -> Option<&'static str> {
        self.order_weekday.map(weekday_name)
    }
}

// ---------------------------------------------------------------------------
// Dataset – rows plus eagerly computed aggregates
// ---------------------------------------------------------------------------

/// Whether a dataset holds loaded data or stands in for a failed load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loaded,
    Empty { reason: String },
}

/// The orders table together with its seven aggregate views.
///
/// A dataset is never mutated after construction. Filtering produces a new
/// value (see [`super::filter::apply_filters`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub orders: Vec<Order>,
    /// File the base dataset was read from. Filtered copies keep it.
    pub source: Option<PathBuf>,
    pub status: LoadStatus,
    pub aggregates: Aggregates,
}

impl Dataset {
    /// Build a loaded dataset and compute every aggregate.
    pub fn from_orders(orders: Vec<Order>, source: Option<PathBuf>) -> Self {
        let aggregates = Aggregates::compute(&orders);
        Dataset {
            orders,
            source,
            status: LoadStatus::Loaded,
            aggregates,
        }
    }

    /// The explicit "no data" state: zero rows, empty aggregates.
    pub fn empty(source: Option<&Path>, reason: impl Into<String>) -> Self {
        Dataset {
            orders: Vec::new(),
            source: source.map(Path::to_path_buf),
            status: LoadStatus::Empty {
                reason: reason.into(),
            },
            aggregates: Aggregates::compute(&[]),
        }
    }

    /// Number of orders.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Whether the dataset has no orders.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Reason the dataset is in the empty state, if it is.
    pub fn empty_reason(&self) -> Option<&str> {
        match &self.status {
            LoadStatus::Loaded => None,
            LoadStatus::Empty { reason } => Some(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32, m: u32, y: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn derives_shipping_days_month_and_weekday() {
        let order = Order::new("Standard Class", "Consumer", "Texas", "Houston", date(1, 1, 2023), date(3, 1, 2023));
        assert_eq!(order.shipping_days, Some(2));
        assert_eq!(order.order_month_name(), Some("January"));
        assert_eq!(order.order_weekday_name(), Some("Sunday"));
    }

    #[test]
    fn negative_shipping_days_pass_through() {
        let order = Order::new("First Class", "Corporate", "Ohio", "Akron", date(15, 6, 2023), date(14, 6, 2023));
        assert_eq!(order.shipping_days, Some(-1));
        assert_eq!(order.order_weekday, Some(Weekday::Thu));
    }

    #[test]
    fn missing_dates_propagate() {
        let order = Order::new("Same Day", "Home Office", "Utah", "Provo", None, date(14, 6, 2023));
        assert_eq!(order.shipping_days, None);
        assert_eq!(order.order_month, None);
        assert_eq!(order.order_weekday_name(), None);

        let order = Order::new("Same Day", "Home Office", "Utah", "Provo", date(14, 6, 2023), None);
        assert_eq!(order.shipping_days, None);
        assert_eq!(order.order_month_name(), Some("June"));
    }

    #[test]
    fn empty_dataset_reports_reason() {
        let ds = Dataset::empty(Some(Path::new("missing.csv")), "file not found");
        assert!(ds.is_empty());
        assert_eq!(ds.empty_reason(), Some("file not found"));
        assert_eq!(ds.aggregates.shipping_summary.count, 0);
    }
}
