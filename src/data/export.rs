use super::model::{Pollutant, PredictionResult};
use super::pipeline::Report;
use crate::error::ExportError;

// ---------------------------------------------------------------------------
// CSV export
// ---------------------------------------------------------------------------

/// Encode a report as a one-row CSV table, UTF-8:
///
/// ```text
/// ,O2,NO3,NO2,SO4,PO4,CL
/// "Station 1, Year 2022",6.0,5.0,0.05,100.0,0.05,50.0
/// ```
///
/// The first header cell is empty; the first column holds the row label.
/// Values use the shortest representation that parses back exactly.
pub fn to_csv(report: &Report) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header = vec![""];
    header.extend(Pollutant::ALL.iter().map(|p| p.column()));
    writer.write_record(&header)?;

    let mut row = vec![report.input.row_label()];
    row.extend(report.result.values().iter().map(|v| format!("{v:?}")));
    writer.write_record(&row)?;

    writer
        .into_inner()
        .map_err(|e| ExportError::Buffer(e.to_string()))
}

/// Decode a CSV produced by [`to_csv`] back into its row label and values.
pub fn from_csv(bytes: &[u8]) -> Result<(String, PredictionResult), ExportError> {
    let mut reader = csv::Reader::from_reader(bytes);

    let found: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let expected: Vec<String> = std::iter::once("")
        .chain(Pollutant::ALL.iter().map(|p| p.column()))
        .map(str::to_string)
        .collect();
    if found != expected {
        return Err(ExportError::Header { expected, found });
    }

    let record = reader.records().next().ok_or(ExportError::MissingRow)??;
    let label = record.get(0).unwrap_or_default().to_string();

    let mut values = [0.0; 6];
    for (slot, pollutant) in values.iter_mut().zip(Pollutant::ALL) {
        let cell = record.get(pollutant.index() + 1).unwrap_or_default();
        *slot = cell.trim().parse().map_err(|_| ExportError::Value {
            column: pollutant.column().to_string(),
            value: cell.to_string(),
        })?;
    }

    Ok((label, PredictionResult::new(values)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::alerts::{evaluate, SafeLimitTable};
    use crate::data::model::InputRecord;

    fn report(values: [f64; 6]) -> Report {
        let result = PredictionResult::new(values);
        let alerts = evaluate(&result, &SafeLimitTable::default());
        Report {
            input: InputRecord::new(2022, "1"),
            result,
            severity: alerts.severity(),
            alerts,
            known_station: true,
        }
    }

    #[test]
    fn csv_layout() {
        let bytes = to_csv(&report([6.0, 5.0, 0.05, 100.0, 0.05, 50.0])).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            ",O2,NO3,NO2,SO4,PO4,CL\n\"Station 1, Year 2022\",6.0,5.0,0.05,100.0,0.05,50.0\n"
        );
    }

    #[test]
    fn decoding_reproduces_table() {
        let values = [7.123456789, 1.0 / 3.0, 0.000_012_5, 251.75, 0.1, 1e21];
        let r = report(values);
        let (label, decoded) = from_csv(&to_csv(&r).unwrap()).unwrap();
        assert_eq!(label, "Station 1, Year 2022");
        assert_eq!(decoded.values(), &values);
    }

    #[test]
    fn rejects_foreign_header() {
        let err = from_csv(b"a,b\n1,2\n").unwrap_err();
        assert!(matches!(err, ExportError::Header { .. }));
    }

    #[test]
    fn rejects_missing_row() {
        let err = from_csv(b",O2,NO3,NO2,SO4,PO4,CL\n").unwrap_err();
        assert!(matches!(err, ExportError::MissingRow));
    }

    #[test]
    fn rejects_non_numeric_cell() {
        let err = from_csv(b",O2,NO3,NO2,SO4,PO4,CL\nx,1,2,abc,4,5,6\n").unwrap_err();
        match err {
            ExportError::Value { column, value } => {
                assert_eq!(column, "NO2");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
