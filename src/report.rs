use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::describe::describe;
use crate::schedule::ScheduleExpression;

/// How many upcoming run times are computed per expression.
pub const UPCOMING_COUNT: usize = 5;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Everything derived from one expression: the parsed schedule, its next
/// run times, and the plain-English description.
#[derive(Debug, Clone)]
pub struct ExpressionReport {
    pub expression: ScheduleExpression,
    pub occurrences: Vec<DateTime<Utc>>,
    pub description: String,
}

impl ExpressionReport {
    /// Parse `text` and compute its upcoming run times after `after`.
    pub fn build(text: &str, after: DateTime<Utc>) -> crate::error::Result<Self> {
        let expression: ScheduleExpression = text.parse()?;
        let occurrences = expression.next_occurrences(after, UPCOMING_COUNT)?;
        let description = describe(&expression);
        Ok(Self {
            expression,
            occurrences,
            description,
        })
    }

    pub fn formatted_times(&self) -> Vec<String> {
        self.occurrences
            .iter()
            .map(|t| t.format(TIMESTAMP_FORMAT).to_string())
            .collect()
    }

    /// Console block: the expression, its run times one per line, and the
    /// description, under their own headings.
    pub fn render_block(&self) -> String {
        let mut block = format!("Expression: {}\n", self.expression.text());
        block.push_str(&format!("Next {} scheduled times:\n", UPCOMING_COUNT));
        for time in self.formatted_times() {
            block.push_str(&time);
            block.push('\n');
        }
        block.push_str("Human-readable description:\n");
        block.push_str(&self.description);
        block.push('\n');
        block
    }

    pub fn to_row(&self) -> ReportRow {
        let times = self.formatted_times();
        let cell = |index: usize| times.get(index).cloned().unwrap_or_default();
        ReportRow {
            expression: self.expression.text().to_string(),
            next_1: cell(0),
            next_2: cell(1),
            next_3: cell(2),
            next_4: cell(3),
            next_5: cell(4),
        }
    }
}

/// One CSV row: the expression followed by its run times in five columns.
#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub expression: String,
    pub next_1: String,
    pub next_2: String,
    pub next_3: String,
    pub next_4: String,
    pub next_5: String,
}

/// Write the summary table. The header row comes from the field names of
/// [`ReportRow`].
pub fn write_csv(path: &Path, rows: &[ReportRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;

    for row in rows {
        writer
            .serialize(row)
            .with_context(|| format!("Failed to write row for '{}'", row.expression))?;
    }

    writer.flush().context("Failed to flush CSV output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScheduleError;
    use chrono::TimeZone;

    fn reference() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_build_report() {
        let report = ExpressionReport::build("0 * * * *", reference()).unwrap();
        assert_eq!(report.occurrences.len(), UPCOMING_COUNT);
        assert_eq!(report.formatted_times()[0], "2024-01-01 01:00:00");
        assert_eq!(report.description, "It runs every 0 minutes");
    }

    #[test]
    fn test_build_rejects_malformed() {
        let err = ExpressionReport::build("not a schedule", reference()).unwrap_err();
        assert!(matches!(err, ScheduleError::MalformedExpression { .. }));
    }

    #[test]
    fn test_render_block_layout() {
        let report = ExpressionReport::build("*/15 * * * *", reference()).unwrap();
        let block = report.render_block();
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines[0], "Expression: */15 * * * *");
        assert_eq!(lines[1], "Next 5 scheduled times:");
        assert_eq!(lines[2], "2024-01-01 00:15:00");
        assert_eq!(lines[7], "Human-readable description:");
        assert_eq!(lines[8], "It runs every 15 minutes");
    }

    #[test]
    fn test_row_cells() {
        let report = ExpressionReport::build("* * * * *", reference()).unwrap();
        let row = report.to_row();
        assert_eq!(row.expression, "* * * * *");
        assert_eq!(row.next_1, "2024-01-01 00:01:00");
        assert_eq!(row.next_5, "2024-01-01 00:05:00");
    }

    #[test]
    fn test_write_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schedule.csv");

        let rows: Vec<ReportRow> = ["0 * * * *", "*/5 * * * *"]
            .iter()
            .map(|text| ExpressionReport::build(text, reference()).unwrap().to_row())
            .collect();
        write_csv(&path, &rows).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "expression,next_1,next_2,next_3,next_4,next_5");
        assert!(lines[1].starts_with("0 * * * *,2024-01-01 01:00:00"));
        assert!(lines[2].starts_with("*/5 * * * *,2024-01-01 00:05:00"));
    }
}
