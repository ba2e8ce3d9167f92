use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use encoding_rs::WINDOWS_1252;
use serde::Deserialize;

use super::model::{columns, Dataset, Order, DATE_FORMAT};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed CSV in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("{} is missing required column '{column}'", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the sales table, falling back to an empty dataset on any failure so
/// the dashboard can still render its "no data" view.
pub fn load(path: &Path) -> Dataset {
    match load_file(path) {
        Ok(dataset) if dataset.is_empty() => {
            log::warn!("{} contains no orders", path.display());
            Dataset::empty(Some(path), "no rows")
        }
        Ok(dataset) => {
            log::info!("Loaded {} orders from {}", dataset.len(), path.display());
            dataset
        }
        Err(e) => {
            log::error!("Failed to load sales data: {e}");
            Dataset::empty(Some(path), e.to_string())
        }
    }
}

/// Load the sales table, reporting failures to the caller.
pub fn load_file(path: &Path) -> Result<Dataset, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let orders = parse_orders(&bytes, path)?;
    Ok(Dataset::from_orders(orders, Some(path.to_path_buf())))
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// One CSV row as stored on disk. Columns not listed here are ignored, and
/// cells missing from a short row read as empty.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Ship_Mode", default)]
    ship_mode: String,
    #[serde(rename = "Segment", default)]
    segment: String,
    #[serde(rename = "State", default)]
    state: String,
    #[serde(rename = "City", default)]
    city: String,
    #[serde(rename = "Order_Date", default)]
    order_date: String,
    #[serde(rename = "Ship_Date", default)]
    ship_date: String,
}

/// Decode legacy 8-bit text and parse every row into an [`Order`].
///
/// Bytes are read as Windows-1252 unless a byte-order mark says otherwise,
/// so accented city names survive. A date that does not match `DD/MM/YYYY`
/// becomes a missing value; the row is kept.
fn parse_orders(bytes: &[u8], path: &Path) -> Result<Vec<Order>, LoadError> {
    let (text, _, _) = WINDOWS_1252.decode(bytes);
    let csv_err = |source: csv::Error| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(text.as_bytes());

    let headers = reader.headers().map_err(csv_err)?.clone();
    for column in columns::REQUIRED {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn {
                path: path.to_path_buf(),
                column,
            });
        }
    }

    let mut orders = Vec::new();
    let mut bad_dates = 0usize;
    for result in reader.deserialize::<RawRecord>() {
        let raw = result.map_err(csv_err)?;
        let order_date = parse_date(&raw.order_date);
        let ship_date = parse_date(&raw.ship_date);
        bad_dates += usize::from(order_date.is_none()) + usize::from(ship_date.is_none());

        orders.push(Order::new(
            raw.ship_mode,
            raw.segment,
            raw.state,
            raw.city,
            order_date,
            ship_date,
        ));
    }

    if bad_dates > 0 {
        log::warn!(
            "{}: {bad_dates} date value(s) not in DD/MM/YYYY form were treated as missing",
            path.display()
        );
    }
    Ok(orders)
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}
