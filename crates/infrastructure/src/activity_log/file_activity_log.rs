use async_trait::async_trait;
use crm_housekeeping_application::ports::ActivityLog;
use crm_housekeeping_domain::DomainError;
use std::path::PathBuf;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::{debug, error};

/// Appends outcome lines to a plain-text file, creating it on first use.
/// The parent directory must already exist.
pub struct FileActivityLog {
    path: PathBuf,
}

impl FileActivityLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ActivityLog for FileActivityLog {
    async fn append(&self, lines: &[String]) -> Result<(), DomainError> {
        if lines.is_empty() {
            return Ok(());
        }

        let mut buf = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
        for line in lines {
            buf.push_str(line);
            buf.push('\n');
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| {
                error!(error = %e, path = %self.path.display(), "Failed to open activity log");
                DomainError::IoError(format!("{}: {}", self.path.display(), e))
            })?;

        // Single write so one invocation's lines stay contiguous.
        file.write_all(buf.as_bytes()).await.map_err(|e| {
            error!(error = %e, path = %self.path.display(), "Failed to write activity log");
            DomainError::IoError(format!("{}: {}", self.path.display(), e))
        })?;
        file.flush()
            .await
            .map_err(|e| DomainError::IoError(format!("{}: {}", self.path.display(), e)))?;

        debug!(lines = lines.len(), path = %self.path.display(), "Activity log appended");
        Ok(())
    }
}
