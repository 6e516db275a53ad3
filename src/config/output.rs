use crate::domain::model::{OutputFormat, SearchReport};
use crate::domain::ports::ReportSink;
use crate::utils::error::Result;
use std::fs;
use std::path::PathBuf;

/// 將報告印到 stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink {
    format: OutputFormat,
}

impl ConsoleSink {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn render(&self, report: &SearchReport) -> Result<String> {
        match self.format {
            OutputFormat::Text => Ok(report.to_string()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        }
    }
}

impl ReportSink for ConsoleSink {
    fn emit(&self, report: &SearchReport) -> Result<()> {
        println!("{}", self.render(report)?);
        Ok(())
    }
}

/// 將 JSON 報告寫入檔案
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl ReportSink for FileSink {
    fn emit(&self, report: &SearchReport) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let data = serde_json::to_vec_pretty(report)?;
        fs::write(&self.path, data)?;
        tracing::info!("📁 Report saved to: {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{SearchOutcome, SearchStats};
    use tempfile::TempDir;

    fn sample_report() -> SearchReport {
        SearchReport {
            target: 8,
            outcome: SearchOutcome::Found(vec![4, 4]),
            stats: SearchStats::default(),
            elapsed_seconds: 0.125,
        }
    }

    #[test]
    fn test_render_text() {
        let sink = ConsoleSink::new(OutputFormat::Text);
        assert_eq!(
            sink.render(&sample_report()).unwrap(),
            "Found subset summing to 8 in 0.125 seconds: [4, 4]"
        );
    }

    #[test]
    fn test_render_json() {
        let sink = ConsoleSink::new(OutputFormat::Json);
        let rendered = sink.render(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["target"], 8);
        assert_eq!(value["outcome"]["status"], "found");
        assert_eq!(value["outcome"]["subset"], serde_json::json!([4, 4]));
    }

    #[test]
    fn test_file_sink_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("report.json");

        FileSink::new(path.clone()).emit(&sample_report()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let report: SearchReport = serde_json::from_str(&content).unwrap();
        assert_eq!(report.outcome, SearchOutcome::Found(vec![4, 4]));
    }
}
