pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use self::config::CliConfig;

pub use self::config::output::{ConsoleSink, FileSink};
pub use self::config::toml_config::TomlConfig;
pub use self::core::{
    engine::SolverEngine,
    search::{find_matching_subset, SubsetSearch},
};
pub use domain::model::{
    OutputFormat, Problem, SearchOutcome, SearchPlan, SearchReport, SearchStats,
};
pub use domain::ports::{ProblemSource, ReportSink, StaticProblem};
pub use utils::error::{Result, SolverError};
