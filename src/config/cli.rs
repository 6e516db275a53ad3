use crate::config::input::read_values_file;
use crate::config::{CENSUS_POPULATIONS, CENSUS_TARGET};
use crate::domain::model::{OutputFormat, Problem};
use crate::domain::ports::ProblemSource;
use crate::utils::error::{Result, SolverError};
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "subset-sum")]
#[command(about = "Find a subset of positive integers that sums exactly to a target")]
pub struct CliConfig {
    /// Comma separated values (defaults to the 2010 census metro populations)
    #[arg(long, value_delimiter = ',', conflicts_with = "values_file")]
    pub values: Vec<u64>,

    /// File of values separated by commas or newlines
    #[arg(long)]
    pub values_file: Option<String>,

    /// Target sum (defaults to 100000000 with the census dataset)
    #[arg(long)]
    pub target: Option<u64>,

    #[arg(long, help = "Disable per-size pruning")]
    pub no_prune: bool,

    #[arg(long, default_value = "text", help = "Output format: text or json")]
    pub format: OutputFormat,

    #[arg(long, help = "Also write the JSON report to this file")]
    pub output: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log process CPU and memory usage")]
    pub monitor: bool,
}

impl CliConfig {
    /// 沒有指定數值也沒有指定檔案時，使用內建的人口資料
    pub fn uses_default_dataset(&self) -> bool {
        self.values.is_empty() && self.values_file.is_none()
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            values_file: None,
            target: None,
            no_prune: false,
            format: OutputFormat::Text,
            output: None,
            verbose: false,
            monitor: false,
        }
    }
}

impl ProblemSource for CliConfig {
    fn load_problem(&self) -> Result<Problem> {
        let values = if let Some(path) = &self.values_file {
            read_values_file(path)?
        } else if !self.values.is_empty() {
            self.values.clone()
        } else {
            tracing::info!("No values given, using the 2010 census metro populations");
            CENSUS_POPULATIONS.to_vec()
        };

        let target = match self.target {
            Some(target) => target,
            None if self.uses_default_dataset() => CENSUS_TARGET,
            None => {
                return Err(SolverError::MissingConfigError {
                    field: "target".to_string(),
                })
            }
        };

        Ok(Problem::new(values, target))
    }

    fn prune(&self) -> bool {
        !self.no_prune
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if !self.values.is_empty() && self.values_file.is_some() {
            return Err(SolverError::ConfigValidationError {
                field: "values".to_string(),
                message: "--values and --values-file cannot be used together".to_string(),
            });
        }

        if let Some(path) = &self.values_file {
            validate_path("values_file", path)?;
        }

        if let Some(path) = &self.output {
            validate_path("output", path)?;
        }

        if !self.uses_default_dataset() && self.target.is_none() {
            return Err(SolverError::MissingConfigError {
                field: "target".to_string(),
            });
        }

        Ok(())
    }
}
