//! CSV export of a ranking report.
//!
//! Columns: `domain,best_url,match_percent,texts_found`. Fields containing a
//! comma, quote or line break are quoted with inner quotes doubled.

use std::borrow::Cow;
use std::io::{self, Write};
use std::path::Path;

use crate::types::report::RankingReport;

/// Header row of the exported CSV.
pub const CSV_HEADER: &str = "domain,best_url,match_percent,texts_found";

/// Quote a field if it needs quoting.
pub fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

/// Write the report as CSV, header first, in ranking order.
pub fn write_csv<W: Write>(report: &RankingReport, mut writer: W) -> io::Result<()> {
    writeln!(writer, "{}", CSV_HEADER)?;
    for result in report {
        writeln!(
            writer,
            "{},{},{:.2},{}",
            csv_field(&result.domain),
            csv_field(result.best_url_or_empty()),
            result.match_percentage(),
            result.texts_found
        )?;
    }
    writer.flush()
}

/// Render the report as a CSV string.
pub fn to_csv(report: &RankingReport) -> String {
    let mut buf = Vec::new();
    // Writing to a Vec cannot fail
    let _ = write_csv(report, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Write the report to a CSV file, replacing any existing file.
pub fn save_csv(report: &RankingReport, path: impl AsRef<Path>) -> io::Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv(report, io::BufWriter::new(file))
}
