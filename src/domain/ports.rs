use crate::domain::model::{Problem, SearchReport};
use crate::utils::error::Result;

/// 提供要求解的問題 (CLI 參數、TOML 檔案或記憶體內資料)
pub trait ProblemSource {
    fn load_problem(&self) -> Result<Problem>;

    /// 是否啟用依大小的剪枝
    fn prune(&self) -> bool {
        true
    }
}

/// 接收搜尋報告的輸出端
pub trait ReportSink {
    fn emit(&self, report: &SearchReport) -> Result<()>;
}

/// 包裝已在記憶體中的問題
#[derive(Debug, Clone)]
pub struct StaticProblem {
    problem: Problem,
    prune: bool,
}

impl StaticProblem {
    pub fn new(values: Vec<u64>, target: u64) -> Self {
        Self {
            problem: Problem::new(values, target),
            prune: true,
        }
    }

    pub fn without_pruning(mut self) -> Self {
        self.prune = false;
        self
    }
}

impl ProblemSource for StaticProblem {
    fn load_problem(&self) -> Result<Problem> {
        Ok(self.problem.clone())
    }

    fn prune(&self) -> bool {
        self.prune
    }
}
