use chrono::Utc;
use lame_delegation_domain::DomainError;
use std::path::{Path, PathBuf};
use tokio::fs;

const RANDOM_LEN: usize = 6;

/// `result-<6 random alphanumerics>-<unix seconds>.csv`
pub fn report_file_name() -> String {
    let tag: String = std::iter::repeat_with(fastrand::alphanumeric)
        .take(RANDOM_LEN)
        .collect();
    format!("result-{}-{}.csv", tag, Utc::now().timestamp())
}

/// Creates `dir` (and its parents) and returns a fresh report path inside it.
pub async fn prepare_output_dir(dir: &Path) -> Result<PathBuf, DomainError> {
    fs::create_dir_all(dir).await.map_err(|e| {
        DomainError::IoError(format!(
            "Failed to create output directory {}: {}",
            dir.display(),
            e
        ))
    })?;

    Ok(dir.join(report_file_name()))
}
