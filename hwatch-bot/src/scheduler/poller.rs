//! Status poller
//!
//! Polls the status API for changes since the last cursor, notifies about
//! every returned record and sleeps a fixed period between cycles. Cycle
//! failures are logged and retried on the next cycle; nothing stops the
//! loop except shutdown.

use hwatch_core::Cursor;
use std::future::Future;
use std::sync::Arc;
use tokio::time::{self, Duration};
use tracing::{debug, error, info, warn};

use crate::error::CycleError;
use crate::repository::StatusRepository;
use crate::service::NotificationService;

/// Summary of a cycle that got past validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleOutcome {
    /// Records in the validated response
    pub records: usize,
    /// Notifications accepted by the channel
    pub delivered: usize,
    /// Records skipped because of format or delivery errors
    pub failed: usize,
    /// Cursor after the cycle
    pub cursor: Cursor,
}

/// Poller that continuously checks for status changes
pub struct StatusPoller {
    retry_period: Duration,
    cursor: Cursor,
    statuses: Arc<dyn StatusRepository>,
    notifications: Arc<dyn NotificationService>,
}

impl StatusPoller {
    /// Creates a new poller starting from the current time
    pub fn new(
        retry_period: Duration,
        statuses: Arc<dyn StatusRepository>,
        notifications: Arc<dyn NotificationService>,
    ) -> Self {
        Self {
            retry_period,
            cursor: Cursor::now(),
            statuses,
            notifications,
        }
    }

    /// Starts from the given cursor instead of the current time
    #[allow(dead_code)]
    pub fn with_cursor(mut self, cursor: Cursor) -> Self {
        self.cursor = cursor;
        self
    }

    /// Current cursor
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Runs the polling loop until `shutdown` resolves
    ///
    /// An in-flight cycle is abandoned when shutdown fires.
    pub async fn run<F>(&mut self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        info!(
            "Starting status poller (interval: {:?}, cursor: {})",
            self.retry_period, self.cursor
        );

        tokio::pin!(shutdown);

        loop {
            let stop = tokio::select! {
                _ = &mut shutdown => true,
                _ = self.tick() => false,
            };

            if stop {
                info!("Shutdown requested, stopping poller at cursor {}", self.cursor);
                return;
            }
        }
    }

    /// One cycle followed by the retry pause
    async fn tick(&mut self) {
        debug!("Polling for status changes since {}", self.cursor);

        match self.poll_once().await {
            Ok(outcome) => {
                if outcome.records > 0 {
                    info!(
                        "Processed {} status change(s): {} delivered, {} failed",
                        outcome.records, outcome.delivered, outcome.failed
                    );
                } else {
                    debug!("No status changes");
                }
            }
            Err(CycleError::Transport(e)) => {
                error!("Status fetch failed, cursor stays at {}: {}", self.cursor, e);
            }
            Err(CycleError::Schema(e)) => {
                error!(
                    "Unexpected status API response, cursor stays at {}: {}",
                    self.cursor, e
                );
            }
        }

        time::sleep(self.retry_period).await;
    }

    /// Performs a single fetch, validate and notify cycle
    ///
    /// The cursor moves as soon as the response validates, whatever happens
    /// to the notifications afterwards.
    pub async fn poll_once(&mut self) -> Result<CycleOutcome, CycleError> {
        let payload = self.statuses.fetch(self.cursor).await?;
        let fetched = hwatch_core::validate(&payload)?;

        self.advance_cursor(fetched.cursor);

        let report = self.notifications.notify_all(&fetched.records).await;
        if !report.failures.is_empty() {
            let skipped: Vec<String> = report.failures.iter().map(|f| f.summary()).collect();
            warn!("Skipped {} record(s): {}", skipped.len(), skipped.join("; "));
        }

        Ok(CycleOutcome {
            records: fetched.records.len(),
            delivered: report.delivered,
            failed: report.failures.len(),
            cursor: self.cursor,
        })
    }

    fn advance_cursor(&mut self, next: Cursor) {
        if next < self.cursor {
            warn!(
                "Status API moved the cursor backwards ({} -> {})",
                self.cursor, next
            );
        }
        self.cursor = next;
    }
}
