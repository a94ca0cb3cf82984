//! Audit logger - fire-and-forget security event side channel
//!
//! Events go through a bounded mpsc channel drained by a spawned writer task
//! into the security-log repository. Recording an event never blocks and
//! never fails the calling operation: when the queue is full the event is
//! dropped with a warning.

use std::sync::Arc;

use serde_json::Value as JsonValue;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tracing::warn;

use quill_core::entities::{SecurityEventType, SecurityLogEntry};
use quill_core::traits::SecurityLogRepository;
use quill_core::value_objects::{Snowflake, SnowflakeGenerator};

/// A security event before it is assigned an ID and timestamp
#[derive(Debug, Clone)]
pub struct AuditEvent {
    pub event_type: SecurityEventType,
    pub ip: String,
    pub endpoint: String,
    pub user_id: Option<Snowflake>,
    pub details: Option<JsonValue>,
}

impl AuditEvent {
    pub fn new(
        event_type: SecurityEventType,
        ip: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            event_type,
            ip: ip.into(),
            endpoint: endpoint.into(),
            user_id: None,
            details: None,
        }
    }

    #[must_use]
    pub fn with_user(mut self, user_id: Snowflake) -> Self {
        self.user_id = Some(user_id);
        self
    }

    #[must_use]
    pub fn with_details(mut self, details: JsonValue) -> Self {
        self.details = Some(details);
        self
    }
}

/// Handle to the audit writer task
#[derive(Clone)]
pub struct AuditLogger {
    tx: mpsc::Sender<AuditEvent>,
}

impl AuditLogger {
    /// Spawn the writer task draining the bounded queue into the repository
    pub fn spawn(
        repo: Arc<dyn SecurityLogRepository>,
        generator: Arc<SnowflakeGenerator>,
        capacity: usize,
    ) -> Self {
        let (tx, mut rx) = mpsc::channel::<AuditEvent>(capacity);

        tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                let mut entry = SecurityLogEntry::new(
                    generator.generate(),
                    event.event_type,
                    event.ip,
                    event.endpoint,
                );
                if let Some(user_id) = event.user_id {
                    entry = entry.with_user(user_id);
                }
                if let Some(details) = event.details {
                    entry = entry.with_details(details);
                }

                if let Err(e) = repo.append(&entry).await {
                    warn!(error = %e, event_type = %entry.event_type, "failed to persist security event");
                }
            }
        });

        Self { tx }
    }

    /// Record an event. Never blocks; a full queue drops the event with a
    /// warning instead of applying backpressure to the request path.
    pub fn record(&self, event: AuditEvent) {
        match self.tx.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(event)) => {
                warn!(event_type = %event.event_type, "audit queue full, dropping security event");
            }
            Err(TrySendError::Closed(event)) => {
                warn!(event_type = %event.event_type, "audit writer stopped, dropping security event");
            }
        }
    }
}

impl std::fmt::Debug for AuditLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuditLogger").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use quill_core::query::{Page, SecurityLogQuery};
    use quill_core::traits::RepoResult;
    use std::sync::Mutex;
    use std::time::Duration;

    #[derive(Default)]
    struct RecordingRepo {
        entries: Mutex<Vec<SecurityLogEntry>>,
    }

    #[async_trait]
    impl SecurityLogRepository for RecordingRepo {
        async fn append(&self, entry: &SecurityLogEntry) -> RepoResult<()> {
            self.entries.lock().unwrap().push(entry.clone());
            Ok(())
        }

        async fn list(&self, query: &SecurityLogQuery) -> RepoResult<Page<SecurityLogEntry>> {
            let entries = self.entries.lock().unwrap().clone();
            let total = entries.len() as i64;
            Ok(Page::new(entries, total, query.page))
        }
    }

    #[tokio::test]
    async fn test_recorded_event_reaches_repository() {
        let repo = Arc::new(RecordingRepo::default());
        let generator = Arc::new(SnowflakeGenerator::new(0));
        let logger = AuditLogger::spawn(repo.clone(), generator, 16);

        logger.record(
            AuditEvent::new(SecurityEventType::AuthFailure, "203.0.113.1", "/login")
                .with_details(serde_json::json!({"reason": "bad password"})),
        );

        // Writer task runs asynchronously
        for _ in 0..50 {
            if !repo.entries.lock().unwrap().is_empty() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        let entries = repo.entries.lock().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].event_type, SecurityEventType::AuthFailure);
        assert_eq!(entries[0].endpoint, "/login");
        assert!(entries[0].details.is_some());
    }

    #[tokio::test]
    async fn test_full_queue_drops_without_blocking() {
        let (tx, rx) = mpsc::channel::<AuditEvent>(1);
        // Hold the receiver so nothing is drained
        let logger = AuditLogger { tx };

        logger.record(AuditEvent::new(SecurityEventType::AuthSuccess, "::1", "/a"));
        // Queue is full now; this must return immediately instead of blocking
        logger.record(AuditEvent::new(SecurityEventType::AuthSuccess, "::1", "/b"));

        drop(rx);
        // Closed channel is also non-fatal
        logger.record(AuditEvent::new(SecurityEventType::AuthSuccess, "::1", "/c"));
    }
}
