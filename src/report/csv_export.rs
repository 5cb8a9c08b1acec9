//! CSV export of the yearly snapshot sequence

use crate::error::Result;
use crate::projection::YearlySnapshot;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Write snapshots as CSV with a header row
pub fn write_snapshots<W: Write>(writer: W, snapshots: &[YearlySnapshot]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for snapshot in snapshots {
        csv_writer.serialize(snapshot)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_snapshots_to_path(path: impl AsRef<Path>, snapshots: &[YearlySnapshot]) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_snapshots(file, snapshots)?;
    log::info!("Wrote {} snapshots to {}", snapshots.len(), path.as_ref().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ProjectionParameters;
    use crate::projection::project;

    #[test]
    fn test_csv_header_and_rows() {
        let result = project(&ProjectionParameters { years: 2, ..Default::default() });
        let mut buf = Vec::new();
        write_snapshots(&mut buf, &result.snapshots).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "year,investmentValue,interestEarned,totalDeposited,annualContribution"
        );
        let opening: Vec<f64> = lines[1].split(',').map(|f| f.parse().unwrap()).collect();
        assert_eq!(opening, vec![0.0, 100_000.0, 0.0, 100_000.0, 0.0]);
    }

    #[test]
    fn test_csv_reads_back_into_snapshots() {
        let result = project(&ProjectionParameters::default());
        let mut buf = Vec::new();
        write_snapshots(&mut buf, &result.snapshots).unwrap();

        let mut reader = csv::Reader::from_reader(buf.as_slice());
        let parsed: Vec<YearlySnapshot> = reader.deserialize().collect::<std::result::Result<_, _>>().unwrap();
        assert_eq!(parsed.len(), result.snapshots.len());
        assert_eq!(parsed.last().unwrap().year, 10);
    }

    #[test]
    fn test_write_to_path_reads_back() {
        let result = project(&ProjectionParameters { years: 5, ..Default::default() });
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshots.csv");

        write_snapshots_to_path(&path, &result.snapshots).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let parsed: Vec<YearlySnapshot> = reader.deserialize().collect::<std::result::Result<_, _>>().unwrap();
        assert_eq!(parsed.len(), 6);
        assert_eq!(parsed[0].year, 0);
        assert_eq!(parsed[5].total_deposited, result.snapshots[5].total_deposited);
    }
}
