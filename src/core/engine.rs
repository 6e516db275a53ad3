use crate::core::pruning::PrefixMaxSums;
use crate::core::search::{classify_base_case, exact_total, SubsetSearch};
use crate::domain::model::{SearchOutcome, SearchPlan, SearchReport};
use crate::domain::ports::{ProblemSource, ReportSink};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use crate::utils::validation::validate_problem;
use std::time::Instant;

pub struct SolverEngine<S: ProblemSource> {
    source: S,
    monitor: SystemMonitor,
}

impl<S: ProblemSource> SolverEngine<S> {
    pub fn new(source: S) -> Self {
        Self::new_with_monitoring(source, false)
    }

    pub fn new_with_monitoring(source: S, monitor_enabled: bool) -> Self {
        Self {
            source,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub fn run(&self) -> Result<SearchReport> {
        tracing::info!("Starting subset search...");

        // Load
        let problem = self.source.load_problem()?;
        validate_problem(&problem)?;
        tracing::info!(
            "Loaded {} values, target {}",
            problem.values.len(),
            problem.target
        );
        self.monitor.log_stats("Load");

        // Search
        let search = SubsetSearch::new().with_pruning(self.source.prune());
        let start_time = Instant::now();
        let (outcome, stats) = search.run(&problem.values, problem.target);
        let elapsed_seconds = start_time.elapsed().as_secs_f64();
        self.monitor.log_stats("Search");

        match &outcome {
            SearchOutcome::Found(subset) => tracing::info!(
                "✅ Found a {}-element subset after {} candidates",
                subset.len(),
                stats.candidates_examined
            ),
            SearchOutcome::NotFound => tracing::info!(
                "No matching subset after {} candidates ({} sizes pruned)",
                stats.candidates_examined,
                stats.sizes_pruned
            ),
        }
        if let Some(base_case) = stats.base_case {
            tracing::debug!("Resolved by base case: {:?}", base_case);
        }

        self.monitor.log_final_stats();

        Ok(SearchReport {
            target: problem.target,
            outcome,
            stats,
            elapsed_seconds,
        })
    }

    /// 只載入並分析問題，不進行搜尋
    pub fn plan(&self) -> Result<SearchPlan> {
        let problem = self.source.load_problem()?;
        validate_problem(&problem)?;

        let prune = self.source.prune();
        let total = exact_total(&problem.values);
        let base_case = classify_base_case(total, problem.target);

        let first_searched_size = match base_case {
            Some(_) => None,
            None if prune => {
                let mut sorted = problem.values.clone();
                sorted.sort_unstable_by(|a, b| b.cmp(a));
                Some(PrefixMaxSums::new(&sorted).first_reachable_size(problem.target))
            }
            None => Some(0),
        };

        Ok(SearchPlan {
            value_count: problem.values.len(),
            total,
            target: problem.target,
            prune,
            base_case,
            first_searched_size,
        })
    }

    pub fn run_and_report<R: ReportSink>(&self, sink: &R) -> Result<SearchReport> {
        let report = self.run()?;
        sink.emit(&report)?;
        Ok(report)
    }
}
