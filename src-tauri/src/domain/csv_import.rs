//! CSV Transaction Import Validation
//!
//! The importer checks a user-picked file completely before any network
//! call, so a malformed file never costs a round trip. Row errors carry
//! the file's visual line number (header = row 1).

use std::path::Path;

use super::TransactionKind;
use crate::error::{AppError, Result};

/// Header fields every import file must declare (case-insensitive).
pub const REQUIRED_FIELDS: [&str; 2] = ["amount", "type"];

/// Optional per-row tax column; when present it must hold numbers.
const TAX_FIELD: &str = "taxpercentage";

/// A validated CSV file, ready for multipart upload.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedCsv {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub row_count: usize,
}

/// Validate a CSV file on disk for import.
pub fn validate_csv_file(path: &Path) -> Result<ValidatedCsv> {
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    if mime.essence_str() != "text/csv" {
        return Err(AppError::Validation(
            "Please choose a CSV file (.csv).".to_string(),
        ));
    }

    let bytes = std::fs::read(path)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "transactions.csv".to_string());
    let row_count = validate_csv_bytes(&bytes)?;
    Ok(ValidatedCsv {
        file_name,
        bytes,
        row_count,
    })
}

/// Validate CSV content; returns the number of data rows on success.
pub fn validate_csv_bytes(bytes: &[u8]) -> Result<usize> {
    // Counted on raw lines so the error matches what the user sees in an editor
    let line_count = bytes
        .split(|b| *b == b'\n')
        .filter(|line| !line.iter().all(|b| b.is_ascii_whitespace()))
        .count();
    if line_count < 2 {
        return Err(AppError::Validation(
            "CSV must contain a header row and at least one data row.".to_string(),
        ));
    }

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let headers = reader
        .headers()
        .map_err(|e| AppError::Validation(format!("Could not read the CSV header row: {}", e)))?
        .clone();
    let column = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));

    let Some(amount_col) = column(REQUIRED_FIELDS[0]) else {
        return Err(AppError::Validation(
            "CSV header must contain an \"amount\" column.".to_string(),
        ));
    };
    let Some(type_col) = column(REQUIRED_FIELDS[1]) else {
        return Err(AppError::Validation(
            "CSV header must contain a \"type\" column.".to_string(),
        ));
    };
    let tax_col = column(TAX_FIELD);

    let mut row_count = 0usize;
    for (i, record) in reader.records().enumerate() {
        // 1-indexed visual line number; the header is line 1
        let line = i + 2;
        let record = record
            .map_err(|e| AppError::Validation(format!("Row {}: not a valid CSV row ({}).", line, e)))?;

        let amount = record.get(amount_col).unwrap_or("");
        match amount.parse::<f64>() {
            Ok(value) if value.is_finite() && value > 0.0 => {}
            _ => {
                return Err(AppError::Validation(format!(
                    "Row {}: \"amount\" must be a number greater than zero (got {:?}).",
                    line, amount
                )))
            }
        }

        let kind = record.get(type_col).unwrap_or("");
        if TransactionKind::parse(kind).is_none() {
            return Err(AppError::Validation(format!(
                "Row {}: \"type\" must be credit or debit (got {:?}).",
                line, kind
            )));
        }

        if let Some(col) = tax_col {
            let raw = record.get(col).unwrap_or("");
            if raw.parse::<f64>().is_err() {
                return Err(AppError::Validation(format!(
                    "Row {}: \"taxpercentage\" must be a number (got {:?}).",
                    line, raw
                )));
            }
        }

        row_count += 1;
    }

    Ok(row_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn expect_validation(result: Result<usize>) -> String {
        match result {
            Err(AppError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_accepts_well_formed_file() {
        let csv = b"amount,type,description\n50,credit,Logo\n20.5,debit,Hosting\n";
        assert_eq!(validate_csv_bytes(csv).unwrap(), 2);
    }

    #[test]
    fn test_header_and_type_are_case_insensitive() {
        let csv = b"Amount,TYPE\n10,CREDIT\n";
        assert_eq!(validate_csv_bytes(csv).unwrap(), 1);
    }

    #[test]
    fn test_rejects_header_only_file() {
        let msg = expect_validation(validate_csv_bytes(b"amount,type\n"));
        assert!(msg.contains("at least one data row"));
    }

    #[test]
    fn test_rejects_missing_required_columns() {
        let msg = expect_validation(validate_csv_bytes(b"amount,description\n10,Logo\n"));
        assert!(msg.contains("\"type\""));
        let msg = expect_validation(validate_csv_bytes(b"type,description\ncredit,Logo\n"));
        assert!(msg.contains("\"amount\""));
    }

    #[test]
    fn test_negative_amount_reports_visual_line_number() {
        // header = row 1, so the bad second data row is row 3
        let csv = b"amount,type\n50,credit\n-1,debit\n";
        let msg = expect_validation(validate_csv_bytes(csv));
        assert!(msg.starts_with("Row 3:"), "got: {}", msg);
        assert!(msg.contains("amount"));
    }

    #[test]
    fn test_unknown_type_reports_row() {
        let csv = b"amount,type\n50,credit\n10,transfer\n";
        let msg = expect_validation(validate_csv_bytes(csv));
        assert!(msg.starts_with("Row 3:"), "got: {}", msg);
        assert!(msg.contains("credit or debit"));
    }

    #[test]
    fn test_short_row_counts_as_bad_amount() {
        let csv = b"type,amount\ncredit\n";
        let msg = expect_validation(validate_csv_bytes(csv));
        assert!(msg.starts_with("Row 2:"), "got: {}", msg);
    }

    #[test]
    fn test_tax_percentage_must_be_numeric_when_present() {
        let ok = b"amount,type,taxpercentage\n50,credit,3\n10,debit,0\n";
        assert_eq!(validate_csv_bytes(ok).unwrap(), 2);

        let bad = b"amount,type,taxpercentage\n50,credit,three\n";
        let msg = expect_validation(validate_csv_bytes(bad));
        assert!(msg.starts_with("Row 2:"), "got: {}", msg);
        assert!(msg.contains("taxpercentage"));
    }

    #[test]
    fn test_non_csv_extension_is_rejected_before_reading() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("transactions.txt");
        std::fs::File::create(&path)
            .and_then(|mut f| f.write_all(b"amount,type\n10,credit\n"))
            .expect("write");

        match validate_csv_file(&path) {
            Err(AppError::Validation(msg)) => assert!(msg.contains("CSV")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_csv_file_round_trips_bytes() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("ledger.csv");
        let content = b"amount,type\n12.5,debit\n";
        std::fs::write(&path, content).expect("write");

        let validated = validate_csv_file(&path).unwrap();
        assert_eq!(validated.file_name, "ledger.csv");
        assert_eq!(validated.bytes, content);
        assert_eq!(validated.row_count, 1);
    }
}
