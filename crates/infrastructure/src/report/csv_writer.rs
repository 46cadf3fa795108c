use lame_delegation_domain::{DomainError, ScanResult};
use std::borrow::Cow;
use std::path::PathBuf;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::info;

/// Writes scan results as an RFC 4180 CSV file.
pub struct CsvReportWriter {
    path: PathBuf,
}

impl CsvReportWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub async fn write(&self, results: &[ScanResult]) -> Result<(), DomainError> {
        let file = File::create(&self.path).await.map_err(|e| self.io_error(e))?;
        let mut out = BufWriter::new(file);

        out.write_all(render_row(&ScanResult::header()).as_bytes())
            .await
            .map_err(|e| self.io_error(e))?;
        for result in results {
            out.write_all(render_row(&result.to_row()).as_bytes())
                .await
                .map_err(|e| self.io_error(e))?;
        }
        out.flush().await.map_err(|e| self.io_error(e))?;

        info!(path = %self.path.display(), rows = results.len(), "Report written");
        Ok(())
    }

    fn io_error(&self, e: std::io::Error) -> DomainError {
        DomainError::IoError(format!("Failed to write report {}: {}", self.path.display(), e))
    }
}

pub fn render_row<S: AsRef<str>>(fields: &[S]) -> String {
    let mut line = fields
        .iter()
        .map(|f| escape_field(f.as_ref()))
        .collect::<Vec<_>>()
        .join(",");
    line.push('\n');
    line
}

/// Quotes a field when it holds a comma, quote, CR or LF.
pub fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\r', '\n']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_field_is_untouched() {
        assert_eq!(escape_field("example.com"), "example.com");
    }

    #[test]
    fn test_comma_and_quote_are_escaped() {
        assert_eq!(
            escape_field("found [3, 4]"),
            "\"found [3, 4]\""
        );
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_render_header_row() {
        assert_eq!(
            render_row(&ScanResult::header()),
            "Hostname,ContainsLameDelegation,Error\n"
        );
    }
}
