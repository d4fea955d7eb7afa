//! Alert Report Exporter
//!
//! Serializes a ledger snapshot to a fixed-layout paginated plain-text
//! document: one `time | region | label | confidence%` line per record in
//! ledger order, a title up front, form-feed between pages. Pure function
//! of its input; page rendering beyond that is the consumer's business.

use std::io::Write;
use std::path::Path;

use super::threat::types::AlertRecord;

// ============================================================================
// LAYOUT
// ============================================================================

/// Record lines per page (a letter page at 20pt line spacing)
pub const REPORT_LINES_PER_PAGE: usize = 34;

/// Page separator
const FORM_FEED: &str = "\x0c";

// ============================================================================
// RENDERING
// ============================================================================

/// One fixed-format ledger line
pub fn render_line(record: &AlertRecord) -> String {
    format!(
        "{} | {} | {} | {}%",
        record.timestamp.format("%H:%M:%S"),
        record.region,
        record.label,
        record.confidence_pct
    )
}

/// All ledger lines, in ledger (chronological) order
pub fn render_lines(alerts: &[AlertRecord]) -> Vec<String> {
    alerts.iter().map(render_line).collect()
}

/// Deterministic document bytes: title, then paginated record lines
pub fn export(title: &str, alerts: &[AlertRecord]) -> Vec<u8> {
    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    out.push('\n');

    let lines = render_lines(alerts);
    for (page_idx, page) in lines.chunks(REPORT_LINES_PER_PAGE).enumerate() {
        if page_idx > 0 {
            out.push_str(FORM_FEED);
            out.push('\n');
        }
        for line in page {
            out.push_str(line);
            out.push('\n');
        }
    }

    out.into_bytes()
}

/// Write the document to disk; returns the number of records exported
pub fn export_to_file(
    path: &Path,
    title: &str,
    alerts: &[AlertRecord],
) -> std::io::Result<usize> {
    let mut file = std::fs::File::create(path)?;
    file.write_all(&export(title, alerts))?;
    Ok(alerts.len())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(hour: u32, min: u32, sec: u32, label: &str, pct: u8) -> AlertRecord {
        let ts = Utc
            .with_ymd_and_hms(2026, 8, 27, hour, min, sec)
            .unwrap();
        AlertRecord::new(ts, "Sundarbans", label, pct)
    }

    #[test]
    fn test_line_carries_all_four_fields() {
        let line = render_line(&record(14, 3, 9, "Chainsaw", 95));
        assert_eq!(line, "14:03:09 | Sundarbans | Chainsaw | 95%");
    }

    #[test]
    fn test_one_line_per_record_in_order() {
        let alerts = vec![
            record(1, 0, 0, "Chainsaw", 91),
            record(2, 0, 0, "Gunshot", 78),
            record(3, 0, 0, "Fire Crackling", 66),
        ];
        let lines = render_lines(&alerts);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Chainsaw"));
        assert!(lines[1].contains("Gunshot"));
        assert!(lines[2].contains("Fire Crackling"));
    }

    #[test]
    fn test_export_contains_title_and_records() {
        let alerts = vec![record(9, 30, 0, "Gunshot", 80)];
        let doc = String::from_utf8(export("Alert Report", &alerts)).unwrap();
        assert!(doc.starts_with("Alert Report\n"));
        assert!(doc.contains("09:30:00 | Sundarbans | Gunshot | 80%"));
    }

    #[test]
    fn test_export_is_deterministic() {
        let alerts = vec![record(9, 30, 0, "Chainsaw", 90)];
        assert_eq!(export("R", &alerts), export("R", &alerts));
    }

    #[test]
    fn test_pagination_splits_at_page_size() {
        let alerts: Vec<AlertRecord> = (0..REPORT_LINES_PER_PAGE + 3)
            .map(|i| record(10, (i / 60) as u32, (i % 60) as u32, "Chainsaw", 90))
            .collect();
        let doc = String::from_utf8(export("R", &alerts)).unwrap();

        let pages: Vec<&str> = doc.split(FORM_FEED).collect();
        assert_eq!(pages.len(), 2);
        // Page one: title + blank + full page of records.
        assert_eq!(
            pages[0].lines().filter(|l| l.contains('|')).count(),
            REPORT_LINES_PER_PAGE
        );
        assert_eq!(pages[1].lines().filter(|l| l.contains('|')).count(), 3);
    }

    #[test]
    fn test_empty_ledger_exports_title_only() {
        let doc = String::from_utf8(export("Empty", &[])).unwrap();
        assert_eq!(doc, "Empty\n\n");
    }

    #[test]
    fn test_export_to_file_round_trip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("alert_report.txt");
        let alerts = vec![record(8, 0, 0, "Chainsaw", 92), record(8, 1, 0, "Gunshot", 71)];

        let count = export_to_file(&path, "Alert Report", &alerts).unwrap();
        assert_eq!(count, 2);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().filter(|l| l.contains('|')).count(), 2);
        assert!(content.contains("08:01:00 | Sundarbans | Gunshot | 71%"));
    }
}
