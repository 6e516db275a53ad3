use crate::domain::model::Problem;
use crate::utils::error::{Result, SolverError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 搜尋前的前置條件：所有值為正整數，且總和不會溢位
pub fn validate_problem(problem: &Problem) -> Result<()> {
    if let Some(index) = problem.values.iter().position(|&v| v == 0) {
        return Err(SolverError::InvalidInputError {
            message: format!("value at index {} is zero; only positive integers are allowed", index),
        });
    }

    problem
        .values
        .iter()
        .try_fold(0u64, |acc, &v| acc.checked_add(v))
        .ok_or_else(|| SolverError::InvalidInputError {
            message: format!(
                "sum of {} values overflows a 64-bit unsigned integer",
                problem.values.len()
            ),
        })?;

    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SolverError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SolverError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| SolverError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SolverError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_problem() {
        assert!(validate_problem(&Problem::new(vec![5, 3, 2], 5)).is_ok());
        assert!(validate_problem(&Problem::new(vec![], 0)).is_ok());
        assert!(validate_problem(&Problem::new(vec![5, 0], 5)).is_err());
        assert!(validate_problem(&Problem::new(vec![u64::MAX, 1], 5)).is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output.path", "./result.json").is_ok());
        assert!(validate_path("output.path", "").is_err());
        assert!(validate_path("output.path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_required_field() {
        assert_eq!(*validate_required_field("problem.target", &Some(7u64)).unwrap(), 7);
        assert!(validate_required_field::<u64>("problem.target", &None).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("problem.name", "census").is_ok());
        assert!(validate_non_empty_string("problem.name", "   ").is_err());
    }
}
