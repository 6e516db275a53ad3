use crate::config::input::read_values_file;
use crate::domain::model::{OutputFormat, Problem};
use crate::domain::ports::ProblemSource;
use crate::utils::error::{Result, SolverError};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_required_field, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub problem: ProblemConfig,
    pub search: Option<SearchConfig>,
    pub output: Option<OutputConfig>,
    pub monitoring: Option<MonitoringConfig>,

    /// 設定檔所在目錄，用來解析相對的 values_file 路徑
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemConfig {
    pub name: Option<String>,
    pub values: Option<Vec<u64>>,
    pub values_file: Option<String>,
    pub target: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    pub prune: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        let mut config = Self::from_toml_str(&content)?;
        config.base_dir = path.as_ref().parent().map(Path::to_path_buf);
        Ok(config)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SolverError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${TARGET_SUM})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SolverError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_required_field("problem.target", &self.problem.target)?;

        if let Some(name) = &self.problem.name {
            validate_non_empty_string("problem.name", name)?;
        }

        match (&self.problem.values, &self.problem.values_file) {
            (Some(_), Some(_)) => {
                return Err(SolverError::ConfigValidationError {
                    field: "problem".to_string(),
                    message: "Specify either 'values' or 'values_file', not both".to_string(),
                })
            }
            (None, None) => {
                return Err(SolverError::MissingConfigError {
                    field: "problem.values".to_string(),
                })
            }
            (None, Some(path)) => validate_path("problem.values_file", path)?,
            (Some(_), None) => {}
        }

        if let Some(path) = self.output_path() {
            validate_path("output.path", path)?;
        }

        Ok(())
    }

    pub fn problem_name(&self) -> &str {
        self.problem.name.as_deref().unwrap_or("unnamed")
    }

    pub fn prune_enabled(&self) -> bool {
        self.search.as_ref().and_then(|s| s.prune).unwrap_or(true)
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output
            .as_ref()
            .and_then(|o| o.format)
            .unwrap_or_default()
    }

    pub fn output_path(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.path.as_deref())
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    fn resolve_values_file(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl ProblemSource for TomlConfig {
    fn load_problem(&self) -> Result<Problem> {
        let target = *validate_required_field("problem.target", &self.problem.target)?;

        let values = match (&self.problem.values, &self.problem.values_file) {
            (Some(values), _) => values.clone(),
            (None, Some(path)) => read_values_file(self.resolve_values_file(path))?,
            (None, None) => {
                return Err(SolverError::MissingConfigError {
                    field: "problem.values".to_string(),
                })
            }
        };

        Ok(Problem::new(values, target))
    }

    fn prune(&self) -> bool {
        self.prune_enabled()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
