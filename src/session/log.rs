//! Append-only frame log and its CSV / JSON export

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::classifier::Feedback;
use crate::pose::AngleSet;

/// Header row of the downloaded CSV
pub const CSV_HEADER: &str =
    "Timestamp,Pose ID,Left Knee Angle,Right Knee Angle,Torso Angle,Leg Angle,Pose Status";

/// One processed frame that had a detected pose
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LogRecord {
    pub timestamp: DateTime<Utc>,
    pub exercise_id: i32,
    pub angles: AngleSet,
    pub feedback: Feedback,
}

impl LogRecord {
    /// Timestamp as ISO-8601 with millisecond precision, e.g. 2024-05-01T10:00:00.250Z
    pub fn iso_timestamp(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    fn write_csv_row(&self, out: &mut String) {
        let a = &self.angles;
        out.push_str(&format!(
            "{},{},{:.1},{:.1},{:.1},{:.1},{}",
            self.iso_timestamp(),
            self.exercise_id,
            a.left_knee,
            a.right_knee,
            a.torso,
            a.leg_spread,
            self.feedback.as_str(),
        ));
    }
}

/// Session log, in arrival order
#[derive(Default)]
pub struct SessionLog {
    records: Vec<LogRecord>,
}

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: LogRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Render the log as CSV, or `None` when there is nothing to export
    pub fn to_csv(&self) -> Option<String> {
        if self.records.is_empty() {
            tracing::warn!("log export requested with no recorded frames");
            return None;
        }

        let mut out = String::with_capacity(CSV_HEADER.len() + self.records.len() * 96);
        out.push_str(CSV_HEADER);
        for record in &self.records {
            out.push('\n');
            record.write_csv_row(&mut out);
        }

        tracing::debug!(rows = self.records.len(), "exported log as csv");
        Some(out)
    }

    /// Render the log as a JSON array, or `None` when empty
    pub fn to_json(&self) -> Option<String> {
        if self.records.is_empty() {
            tracing::warn!("log export requested with no recorded frames");
            return None;
        }
        serde_json::to_string(&self.records).ok()
    }
}
