use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate};
use encoding_rs::WINDOWS_1252;

const SHIP_MODES: [(&str, i64, i64); 4] = [
    ("Same Day", 0, 0),
    ("First Class", 1, 3),
    ("Second Class", 2, 5),
    ("Standard Class", 4, 7),
];

const SEGMENTS: [(&str, f64); 3] = [("Consumer", 0.52), ("Corporate", 0.30), ("Home Office", 0.18)];

const LOCATIONS: [(&str, &str); 16] = [
    ("New York City", "New York"),
    ("Buffalo", "New York"),
    ("Los Angeles", "California"),
    ("San Francisco", "California"),
    ("Seattle", "Washington"),
    ("Philadelphia", "Pennsylvania"),
    ("Houston", "Texas"),
    ("Dallas", "Texas"),
    ("Chicago", "Illinois"),
    ("Columbus", "Ohio"),
    ("Cañon City", "Colorado"),
    ("Jacksonville", "Florida"),
    ("Detroit", "Michigan"),
    ("Henderson", "Kentucky"),
    ("Washington", "District of Columbia"),
    ("Burlington", "Vermont"),
];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5)).rotate_left(7).wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform integer in `lo..=hi`.
    fn range(&mut self, lo: i64, hi: i64) -> i64 {
        lo + (self.next_f64() * (hi - lo + 1) as f64) as i64
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.range(0, items.len() as i64 - 1) as usize]
    }
}

fn pick_segment(rng: &mut SimpleRng) -> &'static str {
    let mut roll = rng.next_f64();
    for (name, weight) in SEGMENTS {
        if roll < weight {
            return name;
        }
        roll -= weight;
    }
    SEGMENTS[0].0
}

fn main() -> Result<()> {
    env_logger::init();

    let output_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/superstore.csv"));
    let n_orders = 2000;

    let mut rng = SimpleRng::new(42);
    let first_day = NaiveDate::from_ymd_opt(2015, 1, 1).context("invalid start date")?;

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "Row_ID", "Order_Date", "Ship_Date", "Ship_Mode", "Segment", "Country", "City", "State",
    ])?;

    for row_id in 1..=n_orders {
        let (mode, min_days, max_days) = *rng.pick(&SHIP_MODES);
        let (city, state) = *rng.pick(&LOCATIONS);
        let segment = pick_segment(&mut rng);

        let ordered = first_day + Duration::days(rng.range(0, 4 * 365 - 1));
        let shipped = ordered + Duration::days(rng.range(min_days, max_days));

        let row_id = row_id.to_string();
        let ordered = ordered.format("%d/%m/%Y").to_string();
        let shipped = shipped.format("%d/%m/%Y").to_string();
        writer.write_record([
            row_id.as_str(),
            ordered.as_str(),
            shipped.as_str(),
            mode,
            segment,
            "United States",
            city,
            state,
        ])?;
    }

    let utf8 = String::from_utf8(writer.into_inner().context("flushing CSV")?)
        .context("CSV writer produced invalid UTF-8")?;
    let (bytes, _, unmappable) = WINDOWS_1252.encode(&utf8);
    if unmappable {
        log::warn!("some characters have no Windows-1252 form and were escaped");
    }

    if let Some(dir) = output_path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    std::fs::write(&output_path, &bytes)
        .with_context(|| format!("writing {}", output_path.display()))?;

    println!("Wrote {n_orders} orders to {}", output_path.display());
    Ok(())
}
