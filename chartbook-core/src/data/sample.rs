//! Built-in sample datasets.
//!
//! Used by tests and by the CLI when no data directory is supplied. The
//! stock table is a deterministic seeded random walk (same idea as a
//! synthetic price feed); the athlete and protein tables are small fixed
//! datasets. All three are pure functions of nothing: calling them twice
//! yields identical tables.

use std::path::Path;

use chrono::{Months, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::{KeyKind, ObsKey, Observation, ObservationTable};
use crate::transform::Regrouper;

use super::schema::TableSchema;

/// Tickers in the stock sample, in chart legend order.
pub const STOCK_TICKERS: [&str; 4] = ["AAPL", "GOOG", "META", "MSFT"];

/// First month of the stock sample; also the percent-change baseline.
pub fn stock_baseline_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2012, 6, 1).expect("valid baseline date")
}

/// Schema of `stocks.csv`: monthly closing prices per ticker.
pub fn stock_schema() -> TableSchema {
    TableSchema::new("date", KeyKind::Date, "price", Some("ticker"))
}

/// Schema of `athletes.csv`: height (cm) vs weight (kg) per discipline.
pub fn athlete_schema() -> TableSchema {
    TableSchema::new("height", KeyKind::Numeric, "weight", Some("discipline"))
}

/// Schema of `proteins.csv`: predicted vs observed correlation pairs.
pub fn protein_schema() -> TableSchema {
    TableSchema::new("predicted", KeyKind::Numeric, "observed", None)
}

/// Five years of monthly prices for four tickers, seeded per ticker.
///
/// Every ticker starts at its own base price and follows a gently drifting
/// random walk, so the indexed (percent change) chart fans out the way the
/// real series do.
pub fn stock_prices() -> ObservationTable {
    let mut rows = Vec::new();

    for ticker in STOCK_TICKERS {
        let seed: [u8; 32] = *blake3::hash(ticker.as_bytes()).as_bytes();
        let mut rng = StdRng::from_seed(seed);

        let mut price = rng.gen_range(50.0..400.0_f64);
        let drift = rng.gen_range(0.002..0.02_f64);
        let mut date = stock_baseline_date();

        for _ in 0..61 {
            rows.push(Observation::new(ObsKey::Date(date), price, ticker));
            let monthly_return: f64 = drift + rng.gen_range(-0.06..0.06);
            price *= 1.0 + monthly_return;
            date = date
                .checked_add_months(Months::new(1))
                .expect("date within chrono range");
        }
    }

    ObservationTable::new("stocks", rows)
}

/// Height/weight measurements for athletes across disciplines.
pub fn athletes() -> ObservationTable {
    let raw: &[(&str, f64, f64)] = &[
        ("track (sprint)", 168.1, 57.2),
        ("track (sprint)", 170.4, 59.8),
        ("track (sprint)", 165.9, 55.1),
        ("track (400m)", 172.6, 58.9),
        ("track (400m)", 169.3, 56.4),
        ("track (400m)", 174.0, 60.2),
        ("field (discus)", 178.7, 87.6),
        ("field (discus)", 181.2, 92.3),
        ("field (javelin)", 175.4, 73.0),
        ("field (javelin)", 172.9, 70.8),
        ("swimming (100m free)", 177.0, 67.3),
        ("swimming (100m free)", 179.5, 69.9),
        ("swimming (200m medley)", 174.2, 65.0),
        ("swimming (200m medley)", 176.8, 66.7),
        ("rowing (scull)", 180.1, 75.4),
        ("rowing (scull)", 182.6, 78.2),
        ("rowing (eight)", 184.3, 80.9),
        ("rowing (eight)", 179.8, 74.6),
        ("netball", 176.3, 68.1),
        ("netball", 181.7, 72.5),
        ("netball", 173.5, 64.8),
        ("gym (artistic)", 153.2, 44.7),
        ("gym (artistic)", 156.8, 47.3),
        ("gym (artistic)", 150.9, 42.6),
    ];

    let rows = raw
        .iter()
        .map(|(discipline, height, weight)| {
            Observation::new(ObsKey::Numeric(*height), *weight, *discipline)
        })
        .collect();

    ObservationTable::new("athletes", rows)
}

/// The canonical discipline → sport lookup for the athlete dataset.
pub fn athlete_regrouper() -> Regrouper {
    Regrouper::from_pairs([
        ("track (sprint)", "track"),
        ("track (400m)", "track"),
        ("field (discus)", "field"),
        ("field (javelin)", "field"),
        ("swimming (100m free)", "swimming"),
        ("swimming (200m medley)", "swimming"),
        ("rowing (scull)", "rowing"),
        ("rowing (eight)", "rowing"),
        ("netball", "netball"),
        ("gym (artistic)", "gymnastics"),
    ])
}

/// Predicted vs observed correlation pairs for protein expression.
pub fn proteins() -> ObservationTable {
    let raw: &[(f64, f64)] = &[
        (0.04, 0.09),
        (0.10, 0.06),
        (0.15, 0.21),
        (0.21, 0.17),
        (0.27, 0.33),
        (0.32, 0.28),
        (0.38, 0.45),
        (0.43, 0.39),
        (0.49, 0.52),
        (0.54, 0.61),
        (0.58, 0.50),
        (0.63, 0.70),
        (0.68, 0.62),
        (0.72, 0.79),
        (0.77, 0.71),
        (0.81, 0.88),
        (0.85, 0.80),
        (0.89, 0.94),
        (0.93, 0.87),
        (0.96, 0.99),
    ];

    let rows = raw
        .iter()
        .map(|(predicted, observed)| Observation::new(ObsKey::Numeric(*predicted), *observed, ""))
        .collect();

    ObservationTable::new("proteins", rows)
}

/// Write all three sample datasets as CSV files into `dir`.
pub fn write_sample_csvs(dir: &Path) -> Result<(), csv::Error> {
    write_table_csv(
        &dir.join("stocks.csv"),
        &stock_prices(),
        &stock_schema(),
    )?;
    write_table_csv(&dir.join("athletes.csv"), &athletes(), &athlete_schema())?;
    write_table_csv(&dir.join("proteins.csv"), &proteins(), &protein_schema())?;
    Ok(())
}

/// Write a table as CSV using the schema's column names.
pub fn write_table_csv(
    path: &Path,
    table: &ObservationTable,
    schema: &TableSchema,
) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_path(path)?;

    let mut header = vec![schema.key_column.as_str()];
    if let Some(group) = &schema.group_column {
        header.push(group.as_str());
    }
    header.push(schema.value_column.as_str());
    writer.write_record(&header)?;

    for row in table.iter() {
        let mut record = vec![row.key.label()];
        if schema.group_column.is_some() {
            record.push(row.group.clone());
        }
        record.push(format!("{}", row.value));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}
