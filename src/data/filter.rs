use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use super::model::{
    month_name, weekday_name, Dataset, LoadStatus, Order, CALENDAR_MONTHS, CALENDAR_WEEKDAYS,
};

// ---------------------------------------------------------------------------
// Filterable dimensions
// ---------------------------------------------------------------------------

/// A column the dashboard can filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dimension {
    ShipMode,
    Segment,
    State,
    Month,
    Weekday,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::ShipMode,
        Dimension::Segment,
        Dimension::State,
        Dimension::Month,
        Dimension::Weekday,
    ];

    /// Human-readable label for filter headers.
    pub fn label(self) -> &'static str {
        match self {
            Dimension::ShipMode => "Ship Mode",
            Dimension::Segment => "Customer Segment",
            Dimension::State => "State",
            Dimension::Month => "Month",
            Dimension::Weekday => "Weekday",
        }
    }

    /// The order's value for this dimension; `None` when it is derived from
    /// a missing order date.
    pub fn value_of(self, order: &Order) -> Option<&str> {
        match self {
            Dimension::ShipMode => Some(order.ship_mode.as_str()),
            Dimension::Segment => Some(order.segment.as_str()),
            Dimension::State => Some(order.state.as_str()),
            Dimension::Month => order.order_month_name(),
            Dimension::Weekday => order.order_weekday_name(),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

/// Per-dimension accepted values. A dimension that is absent, or whose set is
/// empty, is unconstrained.
pub type Predicates = BTreeMap<Dimension, BTreeSet<String>>;

/// Whether `order` satisfies every constrained dimension.
///
/// Dimensions are ANDed; values within one dimension are ORed. An order with
/// no value for a constrained dimension (missing date) is rejected.
pub fn matches(order: &Order, predicates: &Predicates) -> bool {
    predicates
        .iter()
        .filter(|(_, accepted)| !accepted.is_empty())
        .all(|(dim, accepted)| {
            dim.value_of(order)
                .is_some_and(|value| accepted.contains(value))
        })
}

/// Build a new dataset holding only the orders that pass `predicates`, with
/// every aggregate recomputed from the surviving rows.
///
/// A dataset in the empty state stays in it, reason included.
pub fn apply_filters(dataset: &Dataset, predicates: &Predicates) -> Dataset {
    if let LoadStatus::Empty { .. } = dataset.status {
        return dataset.clone();
    }

    let orders: Vec<Order> = dataset
        .orders
        .iter()
        .filter(|order| matches(order, predicates))
        .cloned()
        .collect();

    log::debug!(
        "Filter kept {} of {} orders ({} active dimension(s))",
        orders.len(),
        dataset.len(),
        predicates.values().filter(|s| !s.is_empty()).count()
    );

    Dataset::from_orders(orders, dataset.source.clone())
}

/// Options offered for a dimension's selector.
///
/// Categorical dimensions list their distinct values alphabetically; month
/// and weekday list the values present in calendar order.
pub fn dimension_options(dataset: &Dataset, dim: Dimension) -> Vec<String> {
    match dim {
        Dimension::Month => {
            let present: BTreeSet<u32> = dataset
                .orders
                .iter()
                .filter_map(|o| o.order_month.map(|m| m.number_from_month()))
                .collect();
            CALENDAR_MONTHS
                .iter()
                .filter(|m| present.contains(&m.number_from_month()))
                .map(|m| month_name(*m).to_string())
                .collect()
        }
        Dimension::Weekday => {
            let present: BTreeSet<u32> = dataset
                .orders
                .iter()
                .filter_map(|o| o.order_weekday.map(|w| w.num_days_from_monday()))
                .collect();
            CALENDAR_WEEKDAYS
                .iter()
                .filter(|w| present.contains(&w.num_days_from_monday()))
                .map(|w| weekday_name(*w).to_string())
                .collect()
        }
        _ => dataset
            .orders
            .iter()
            .filter_map(|o| dim.value_of(o))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect(),
    }
}
