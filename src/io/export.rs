//! CSV export for storage sweeps.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::sweep::SweepRow;

/// Column header for sweep export.
const HEADER: &str = "batteries,storage_kwh,demand_kwh,generation_kwh,net_kwh,hours,rating,result";

/// Exports sweep rows to a CSV file at the given path.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(rows: &[SweepRow], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(rows, buf)
}

/// Writes sweep rows as CSV to any writer.
///
/// Rows without an hour figure leave the `hours` column empty.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(rows: &[SweepRow], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(','))?;

    for r in rows {
        wtr.write_record(&[
            r.batteries.to_string(),
            format!("{:.2}", r.balance.storage_kwh),
            format!("{:.3}", r.balance.demand_kwh),
            format!("{:.3}", r.balance.generation_kwh),
            format!("{:.3}", r.balance.net_kwh),
            r.result
                .hours_value
                .map(|h| format!("{h:.2}"))
                .unwrap_or_default(),
            r.result.star_rating.as_str().to_string(),
            r.result.result_text.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::SimulationInput;
    use crate::loads::Appliance;
    use crate::sweep::sweep_batteries;

    fn rows() -> Vec<SweepRow> {
        let base = SimulationInput::new(0, 0).with_load(Appliance::Fan, true, 10.0);
        sweep_batteries(&base, 0..=4)
    }

    fn render(rows: &[SweepRow]) -> String {
        let mut buf = Vec::new();
        write_csv(rows, &mut buf).ok();
        String::from_utf8(buf).unwrap_or_default()
    }

    #[test]
    fn header_and_row_count() {
        let out = render(&rows());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], HEADER);
        // 1 header + 5 data rows
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn rows_are_parseable() {
        let out = render(&rows());
        let mut rdr = csv::ReaderBuilder::new().from_reader(out.as_bytes());
        let records: Vec<csv::StringRecord> = rdr.records().filter_map(Result::ok).collect();
        assert_eq!(records.len(), 5);

        // 0 batteries: under one hour
        assert_eq!(&records[0][6], "NONE");
        assert_eq!(&records[0][7], "Runtime < 1 hour");
        // 2 batteries on 1 kWh/day: 48 h
        assert_eq!(&records[2][5], "48.00");
        assert_eq!(&records[2][6], "FIVE");
    }

    #[test]
    fn missing_hours_leave_column_empty() {
        let rows = sweep_batteries(&SimulationInput::new(0, 0), 0..=0);
        let out = render(&rows);
        let mut rdr = csv::ReaderBuilder::new().from_reader(out.as_bytes());
        let first = rdr.records().next().and_then(Result::ok);
        assert_eq!(first.as_ref().map(|r| r[5].to_string()), Some(String::new()));
    }

    #[test]
    fn deterministic_output() {
        assert_eq!(render(&rows()), render(&rows()));
    }
}
