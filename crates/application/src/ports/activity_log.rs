use async_trait::async_trait;
use crm_housekeeping_domain::DomainError;

/// Append-only, human-readable record of task outcomes.
#[async_trait]
pub trait ActivityLog: Send + Sync {
    /// Append every line, in order. Lines must not contain a trailing newline.
    async fn append(&self, lines: &[String]) -> Result<(), DomainError>;
}
