use std::collections::BTreeMap;

use eframe::egui::{Color32, RichText, Ui};
use egui_plot::{Bar, BarChart, Plot};

use crate::data::aggregate::ShippingSummary;
use crate::data::model::Order;
use crate::state::AppState;
use crate::ui::tables::aggregate_table;

const SHIPPING_COLOR: Color32 = Color32::from_rgb(244, 161, 0);
const MODE_COLOR: Color32 = Color32::from_rgb(255, 65, 58);
const TREND_COLOR: Color32 = Color32::from_rgb(153, 51, 255);
const LOCATION_COLOR: Color32 = Color32::from_rgb(66, 135, 245);

// ---------------------------------------------------------------------------
// Dashboard (central panel)
// ---------------------------------------------------------------------------

/// Render every dashboard section for the filtered view.
pub fn dashboard(ui: &mut Ui, state: &AppState) {
    if state.base.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No data available to display the dashboard.  (File → Open…)");
        });
        return;
    }

    let view = &state.view;
    if view.is_empty() {
        ui.label(
            RichText::new("No orders match the selected filters.").color(Color32::YELLOW),
        );
        ui.separator();
    }

    let agg = &view.aggregates;

    ui.columns(2, |cols| {
        section(&mut cols[0], "Shipping Time Overview", |ui| {
            summary_lines(ui, &agg.shipping_summary);
            let bars = shipping_histogram(&view.orders)
                .into_iter()
                .map(|(days, n)| Bar::new(days as f64, n as f64).fill(SHIPPING_COLOR))
                .collect();
            category_plot(ui, "shipping_hist", Vec::new(), bars, "Days to Ship", "Number of Orders");
        });

        section(&mut cols[1], "Average Shipping Time by Ship Mode", |ui| {
            let labels = agg.shipping_by_mode.iter().map(|r| r.ship_mode.clone()).collect();
            let bars = agg
                .shipping_by_mode
                .iter()
                .enumerate()
                .map(|(i, r)| Bar::new(i as f64, r.mean_days).name(&r.ship_mode).fill(MODE_COLOR))
                .collect();
            category_plot(ui, "ship_modes", labels, bars, "Ship Mode", "Avg. Days per ship");
            aggregate_table(ui, "ship_modes_table", &agg.shipping_by_mode, 120.0);
        });
    });

    ui.columns(2, |cols| {
        section(&mut cols[0], "Order Distribution by Customer Segment", |ui| {
            let total: usize = agg.orders_by_segment.iter().map(|r| r.count).sum();
            let labels = agg.orders_by_segment.iter().map(|r| r.segment.clone()).collect();
            let bars = agg
                .orders_by_segment
                .iter()
                .enumerate()
                .map(|(i, r)| {
                    let share = 100.0 * r.count as f64 / total.max(1) as f64;
                    Bar::new(i as f64, r.count as f64)
                        .name(format!("{} ({share:.1}%)", r.segment))
                        .fill(state.segment_colors.color_for(&r.segment))
                })
                .collect();
            category_plot(ui, "segments", labels, bars, "Segment", "Orders");
            aggregate_table(ui, "segments_table", &agg.orders_by_segment, 120.0);
        });

        section(&mut cols[1], "Order Volume by Location", |ui| {
            let top: Vec<_> = agg.orders_by_state.iter().take(15).collect();
            let labels = top
                .iter()
                .map(|r| r.state_code.unwrap_or(r.state.as_str()).to_string())
                .collect();
            let bars = top
                .iter()
                .enumerate()
                .map(|(i, r)| Bar::new(i as f64, r.count as f64).name(&r.state).fill(LOCATION_COLOR))
                .collect();
            category_plot(ui, "states", labels, bars, "State", "Orders");
            aggregate_table(ui, "states_table", &agg.orders_by_state, 160.0);
            ui.add_space(6.0);
            aggregate_table(ui, "cities_table", &agg.orders_by_city, 200.0);
        });
    });

    section(ui, "Monthly and Weekly Order Patterns", |ui| {
        ui.columns(2, |cols| {
            let labels = agg.orders_by_month.iter().map(|r| r.month.to_string()).collect();
            let bars = agg
                .orders_by_month
                .iter()
                .enumerate()
                .map(|(i, r)| Bar::new(i as f64, r.count as f64).name(r.month).fill(TREND_COLOR))
                .collect();
            category_plot(&mut cols[0], "months", labels, bars, "Month", "Orders per Month");

            let labels = agg.orders_by_weekday.iter().map(|r| r.weekday.to_string()).collect();
            let bars = agg
                .orders_by_weekday
                .iter()
                .enumerate()
                .map(|(i, r)| Bar::new(i as f64, r.count as f64).name(r.weekday).fill(TREND_COLOR))
                .collect();
            category_plot(&mut cols[1], "weekdays", labels, bars, "Weekday", "Orders per Weekday");
        });
    });
}

// ---------------------------------------------------------------------------
// Building blocks
// ---------------------------------------------------------------------------

fn section(ui: &mut Ui, title: &str, add_contents: impl FnOnce(&mut Ui)) {
    ui.group(|ui: &mut Ui| {
        ui.heading(title);
        ui.separator();
        add_contents(ui);
    });
    ui.add_space(8.0);
}

fn summary_lines(ui: &mut Ui, summary: &ShippingSummary) {
    let fmt = |v: Option<f64>| v.map_or_else(|| "–".to_string(), |v| format!("{v:.2}"));
    ui.label(format!("Orders: {}", summary.count));
    ui.label(format!("Avg: {} days", fmt(summary.mean)));
    ui.label(format!("Min: {} days", fmt(summary.min)));
    ui.label(format!("Median: {} days", fmt(summary.p50)));
    ui.label(format!("Max: {} days", fmt(summary.max)));
    ui.label(format!("Std Dev: {} days", fmt(summary.std)));
}

/// Bar chart whose integer x positions are labelled with `labels`. With no
/// labels the axis shows plain numbers.
fn category_plot(
    ui: &mut Ui,
    id: &str,
    labels: Vec<String>,
    bars: Vec<Bar>,
    x_label: &str,
    y_label: &str,
) {
    let mut plot = Plot::new(id)
        .height(220.0)
        .x_axis_label(x_label)
        .y_axis_label(y_label)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false);

    if !labels.is_empty() {
        plot = plot.x_axis_formatter(move |mark, _range| {
            let i = mark.value.round();
            if (mark.value - i).abs() > f64::EPSILON || i < 0.0 {
                return String::new();
            }
            labels.get(i as usize).cloned().unwrap_or_default()
        });
    }

    plot.show(ui, |plot_ui| {
        plot_ui.bar_chart(BarChart::new(bars).width(0.7));
    });
}

/// Number of orders per shipping duration, shortest first. Orders without a
/// duration are skipped.
pub fn shipping_histogram(orders: &[Order]) -> Vec<(i64, usize)> {
    let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
    for days in orders.iter().filter_map(|o| o.shipping_days) {
        *counts.entry(days).or_default() += 1;
    }
    counts.into_iter().collect()
}
