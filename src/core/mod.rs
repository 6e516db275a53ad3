pub mod combinations;
pub mod engine;
pub mod pruning;
pub mod search;

pub use crate::domain::model::{Problem, SearchOutcome, SearchReport, SearchStats};
pub use crate::domain::ports::{ProblemSource, ReportSink};
pub use crate::utils::error::Result;
