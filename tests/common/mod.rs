use std::io::Write;

use tempfile::NamedTempFile;

pub const HEADER: &str = "Row_ID,Order_Date,Ship_Date,Ship_Mode,Segment,Country,City,State";

/// Write a sales CSV with the standard header followed by `rows`
/// (`Order_Date, Ship_Date, Ship_Mode, Segment, City, State`).
pub fn sales_csv(rows: &[[&str; 6]]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{HEADER}").unwrap();
    for (i, [ordered, shipped, mode, segment, city, state]) in rows.iter().enumerate() {
        writeln!(
            file,
            "{},{ordered},{shipped},{mode},{segment},United States,{city},{state}",
            i + 1
        )
        .unwrap();
    }
    file.flush().unwrap();
    file
}

/// The three-order scenario: 2, 5 and -1 shipping days.
pub fn three_order_csv() -> NamedTempFile {
    sales_csv(&[
        ["01/01/2023", "03/01/2023", "Standard Class", "Consumer", "Houston", "Texas"],
        ["15/06/2023", "20/06/2023", "First Class", "Corporate", "Columbus", "Ohio"],
        ["15/06/2023", "14/06/2023", "Standard Class", "Home Office", "Houston", "Texas"],
    ])
}

/// A larger mixed fixture spanning every month and weekday.
pub fn mixed_csv() -> NamedTempFile {
    let modes = ["Same Day", "First Class", "Second Class", "Standard Class"];
    let segments = ["Consumer", "Corporate", "Home Office"];
    let places = [("Houston", "Texas"), ("Seattle", "Washington"), ("Akron", "Ohio"), ("Toronto", "Ontario")];

    let mut owned: Vec<[String; 6]> = Vec::new();
    for i in 0..60u32 {
        let day = 1 + (i * 7) % 28;
        let month = 1 + (i * 5) % 12;
        let ordered = format!("{day:02}/{month:02}/2022");
        let shipped = format!("{:02}/{month:02}/2022", (day + i % 4).min(28));
        let (city, state) = places[(i % 4) as usize];
        owned.push([
            ordered,
            shipped,
            modes[(i % 4) as usize].to_string(),
            segments[(i % 3) as usize].to_string(),
            city.to_string(),
            state.to_string(),
        ]);
    }
    let rows: Vec<[&str; 6]> = owned
        .iter()
        .map(|r| [r[0].as_str(), r[1].as_str(), r[2].as_str(), r[3].as_str(), r[4].as_str(), r[5].as_str()])
        .collect();
    sales_csv(&rows)
}
