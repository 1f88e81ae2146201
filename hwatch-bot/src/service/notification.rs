//! Notification service
//!
//! Formats status records and hands them to the notifier, one record at a
//! time, in the order the status API returned them.

use async_trait::async_trait;
use hwatch_core::{StatusFormatter, StatusRecord};
use std::sync::Arc;
use tracing::info;

use crate::error::RecordError;
use crate::repository::Notifier;

/// Service trait for notifying about a batch of status records
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// Notifies about every record
    ///
    /// A failing record is skipped and reported back; it never stops the
    /// rest of the batch.
    async fn notify_all(&self, records: &[StatusRecord]) -> NotifyReport;
}

/// Outcome of one batch
#[derive(Debug, Default)]
pub struct NotifyReport {
    /// Records delivered successfully
    pub delivered: usize,
    /// Records that could not be formatted or delivered
    pub failures: Vec<RecordFailure>,
}

/// A record that was skipped
#[derive(Debug)]
pub struct RecordFailure {
    /// Position of the record in the batch
    pub index: usize,
    pub name: String,
    pub error: RecordError,
}

/// Standard implementation of NotificationService
pub struct StandardNotificationService {
    formatter: StatusFormatter,
    notifier: Arc<dyn Notifier>,
}

impl StandardNotificationService {
    /// Creates a new notification service
    pub fn new(formatter: StatusFormatter, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            formatter,
            notifier,
        }
    }

    async fn notify_one(&self, record: &StatusRecord) -> Result<(), RecordError> {
        let message = self.formatter.format(record)?;
        self.notifier.deliver(&message).await?;
        Ok(())
    }
}

impl RecordFailure {
    /// One-line description for logs
    pub fn summary(&self) -> String {
        let kind = match &self.error {
            RecordError::Format(_) => "not formatted",
            RecordError::Delivery(_) => "not delivered",
        };
        format!("#{} \"{}\" {}: {}", self.index, self.name, kind, self.error)
    }
}

#[async_trait]
impl NotificationService for StandardNotificationService {
    async fn notify_all(&self, records: &[StatusRecord]) -> NotifyReport {
        let mut report = NotifyReport::default();

        for (index, record) in records.iter().enumerate() {
            match self.notify_one(record).await {
                Ok(()) => {
                    info!("Notified about \"{}\"", record.display_name());
                    report.delivered += 1;
                }
                Err(error) => {
                    report.failures.push(RecordFailure {
                        index,
                        name: record.display_name().to_string(),
                        error,
                    });
                }
            }
        }

        report
    }
}
