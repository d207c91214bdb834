// src/bench/report.rs

use crate::config::{BenchMode, OutputFormat};
use anyhow::Result;
use serde::Serialize;
use std::fmt;

/// Result of one completed benchmark run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub scenario: &'static str,
    pub mode: BenchMode,
    pub operations: u64,
    pub total_secs: f64,
    /// Only the read benchmark derives a rate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qps: Option<f64>,
}

impl Report {
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_string()),
            OutputFormat::Json => Ok(serde_json::to_string(self)?),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Total time: {:.6} seconds", self.total_secs)?;
        if let Some(qps) = self.qps {
            write!(f, "\nQPS: {:.2}", qps)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select_report() -> Report {
        Report {
            scenario: "userinfo_count",
            mode: BenchMode::Select,
            operations: 10,
            total_secs: 0.5,
            qps: Some(20.0),
        }
    }

    #[test]
    fn test_select_text() {
        assert_eq!(
            select_report().render(OutputFormat::Text).unwrap(),
            "Total time: 0.500000 seconds\nQPS: 20.00"
        );
    }

    #[test]
    fn test_insert_text_has_no_rate() {
        let report = Report {
            scenario: "userinfouuid_insert",
            mode: BenchMode::Insert,
            operations: 5,
            total_secs: 0.0123456789,
            qps: None,
        };
        assert_eq!(report.to_string(), "Total time: 0.012346 seconds");
    }

    #[test]
    fn test_json_fields() {
        let json = select_report().render(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["scenario"], "userinfo_count");
        assert_eq!(value["mode"], "select");
        assert_eq!(value["operations"], 10);
        assert_eq!(value["total_secs"], 0.5);
        assert_eq!(value["qps"], 20.0);
    }

    #[test]
    fn test_insert_json_omits_qps() {
        let report = Report {
            scenario: "userinfouuid_insert",
            mode: BenchMode::Insert,
            operations: 5,
            total_secs: 0.25,
            qps: None,
        };
        let json = report.render(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["mode"], "insert");
        assert_eq!(value["operations"], 5);
        assert!(value.get("qps").is_none());
        assert!(!json.contains("qps"));
    }
}
