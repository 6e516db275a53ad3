use crate::utils::error::{Result, SolverError};
use std::path::Path;

/// 讀取數值檔：以逗號或換行分隔的無號整數，`#` 開頭為註解
pub fn read_values_file<P: AsRef<Path>>(path: P) -> Result<Vec<u64>> {
    let path = path.as_ref();
    tracing::debug!("Reading values from: {}", path.display());
    let content = std::fs::read_to_string(path)?;
    parse_values(&content)
}

pub fn parse_values(content: &str) -> Result<Vec<u64>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(content.as_bytes());

    let mut values = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        for field in record.iter() {
            // 容許行尾多餘的逗號
            if field.is_empty() {
                continue;
            }
            let value = field
                .parse::<u64>()
                .map_err(|e| SolverError::InvalidInputError {
                    message: format!(
                        "'{}' on line {} is not an unsigned integer: {}",
                        field, line, e
                    ),
                })?;
            values.push(value);
        }
    }

    Ok(values)
}
