use serde::{Deserialize, Serialize};
use std::fmt;

/// 一次搜尋的輸入：正整數集合與目標總和
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub values: Vec<u64>,
    pub target: u64,
}

impl Problem {
    pub fn new(values: Vec<u64>, target: u64) -> Self {
        Self { values, target }
    }
}

/// 搜尋結果。`Found(vec![])` 與 `NotFound` 是不同的結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "subset", rename_all = "snake_case")]
pub enum SearchOutcome {
    Found(Vec<u64>),
    NotFound,
}

impl SearchOutcome {
    pub fn subset(&self) -> Option<&[u64]> {
        match self {
            SearchOutcome::Found(subset) => Some(subset),
            SearchOutcome::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }
}

/// 在進入列舉之前就直接決定結果的情況
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseCase {
    /// 全部元素相加剛好等於目標
    FullSet,
    ZeroTarget,
    /// 全部元素相加仍小於目標
    Unreachable,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    pub base_case: Option<BaseCase>,
    pub sizes_pruned: usize,
    pub sizes_searched: usize,
    pub candidates_examined: u64,
    pub matched_size: Option<usize>,
}

/// 搜尋前的分析結果 (dry run 使用)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPlan {
    pub value_count: usize,
    pub total: u128,
    pub target: u64,
    pub prune: bool,
    pub base_case: Option<BaseCase>,
    /// 第一個實際列舉的大小；由基本情況決定時為 `None`
    pub first_searched_size: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchReport {
    pub target: u64,
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
    pub elapsed_seconds: f64,
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            SearchOutcome::Found(subset) => write!(
                f,
                "Found subset summing to {} in {} seconds: {:?}",
                self.target, self.elapsed_seconds, subset
            ),
            SearchOutcome::NotFound => write!(
                f,
                "Failed to find a matching subset in {} seconds",
                self.elapsed_seconds
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unsupported format '{}'. Valid formats: text, json", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_display_found() {
        let report = SearchReport {
            target: 5,
            outcome: SearchOutcome::Found(vec![3, 2]),
            stats: SearchStats::default(),
            elapsed_seconds: 0.5,
        };
        assert_eq!(
            report.to_string(),
            "Found subset summing to 5 in 0.5 seconds: [3, 2]"
        );
    }

    #[test]
    fn test_report_display_not_found() {
        let report = SearchReport {
            target: 100,
            outcome: SearchOutcome::NotFound,
            stats: SearchStats::default(),
            elapsed_seconds: 0.25,
        };
        assert_eq!(
            report.to_string(),
            "Failed to find a matching subset in 0.25 seconds"
        );
    }

    #[test]
    fn test_outcome_serialization() {
        let found = serde_json::to_value(SearchOutcome::Found(vec![4, 4])).unwrap();
        assert_eq!(found, serde_json::json!({"status": "found", "subset": [4, 4]}));

        let not_found = serde_json::to_value(SearchOutcome::NotFound).unwrap();
        assert_eq!(not_found, serde_json::json!({"status": "not_found"}));
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("csv".parse::<OutputFormat>().is_err());
    }
}
