//! Delayed alarm scheduling.
//!
//! Alarms are fire-and-forget: `schedule` validates, records a pending
//! entry and spawns a background task that marks the entry fired once the
//! delay elapses. Nothing awaits or cancels the task; if the process exits
//! first the alarm is simply lost. The store is keyed by message, so a
//! reschedule with the same message overwrites the earlier entry, and
//! entries are never deleted.

use chrono::Utc;
use parley_common::{AlarmRecord, AlarmStatus};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::info;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlarmError {
    #[error("minutes must be positive")]
    NonPositiveMinutes,

    #[error("message must not be empty")]
    EmptyMessage,
}

/// Keyed alarm store plus the scheduling entry point. Cheap to clone;
/// clones share the same store.
#[derive(Debug, Clone, Default)]
pub struct AlarmScheduler {
    alarms: Arc<RwLock<HashMap<String, AlarmRecord>>>,
}

impl AlarmScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule an alarm and return the confirmation text immediately.
    ///
    /// Validation happens before any task is spawned: zero or negative
    /// minutes and empty messages never reach the background.
    pub async fn schedule(&self, minutes: i64, message: &str) -> Result<String, AlarmError> {
        if minutes <= 0 {
            return Err(AlarmError::NonPositiveMinutes);
        }
        if message.is_empty() {
            return Err(AlarmError::EmptyMessage);
        }

        let minutes = minutes as u64;
        self.arm(minutes, message, Duration::from_secs(minutes * 60))
            .await;

        Ok(format!(
            "Alarm set for {} minutes from now with message: '{}'",
            minutes, message
        ))
    }

    /// Record a pending alarm and spawn the delay task. The delay is a
    /// parameter so tests can run on millisecond timers.
    async fn arm(&self, minutes: u64, message: &str, delay: Duration) {
        let record = AlarmRecord {
            minutes,
            status: AlarmStatus::Pending,
            scheduled_at: Utc::now(),
            note: None,
        };
        self.alarms
            .write()
            .await
            .insert(message.to_string(), record);

        info!("Alarm armed: '{}' in {} minutes", message, minutes);

        let alarms = Arc::clone(&self.alarms);
        let message = message.to_string();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let mut alarms = alarms.write().await;
            if let Some(record) = alarms.get_mut(&message) {
                record.status = AlarmStatus::Fired;
                record.note = Some(format!(
                    "Alarm: {} (set {} minutes ago)!",
                    message, record.minutes
                ));
                info!("Alarm fired: '{}'", message);
            }
        });
    }

    /// Snapshot of all alarms, keyed by message.
    pub async fn list(&self) -> BTreeMap<String, AlarmRecord> {
        self.alarms
            .read()
            .await
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Look up a single alarm by its message key.
    pub async fn get(&self, message: &str) -> Option<AlarmRecord> {
        self.alarms.read().await.get(message).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_schedules_are_rejected_before_spawn() {
        let scheduler = AlarmScheduler::new();
        assert_eq!(
            scheduler.schedule(0, "tea").await,
            Err(AlarmError::NonPositiveMinutes)
        );
        assert_eq!(
            scheduler.schedule(-5, "tea").await,
            Err(AlarmError::NonPositiveMinutes)
        );
        assert_eq!(
            scheduler.schedule(3, "").await,
            Err(AlarmError::EmptyMessage)
        );
        // Nothing was recorded
        assert!(scheduler.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_schedule_returns_confirmation_and_records_pending() {
        let scheduler = AlarmScheduler::new();
        let reply = scheduler.schedule(5, "stand up").await.unwrap();
        assert_eq!(
            reply,
            "Alarm set for 5 minutes from now with message: 'stand up'"
        );

        let record = scheduler.get("stand up").await.unwrap();
        assert_eq!(record.status, AlarmStatus::Pending);
        assert_eq!(record.minutes, 5);
        assert!(record.note.is_none());
    }

    #[tokio::test]
    async fn test_alarm_fires_after_delay() {
        let scheduler = AlarmScheduler::new();
        scheduler
            .arm(2, "kettle", Duration::from_millis(10))
            .await;

        tokio::time::sleep(Duration::from_millis(100)).await;

        let record = scheduler.get("kettle").await.unwrap();
        assert_eq!(record.status, AlarmStatus::Fired);
        assert_eq!(
            record.note.as_deref(),
            Some("Alarm: kettle (set 2 minutes ago)!")
        );
    }

    #[tokio::test]
    async fn test_distinct_messages_fire_independently() {
        let scheduler = AlarmScheduler::new();
        scheduler.arm(1, "first", Duration::from_millis(10)).await;
        scheduler.arm(2, "second", Duration::from_millis(10)).await;

        tokio::time::sleep(Duration::from_millis(100)).await;

        let alarms = scheduler.list().await;
        assert_eq!(alarms.len(), 2);
        assert_eq!(alarms["first"].status, AlarmStatus::Fired);
        assert_eq!(alarms["second"].status, AlarmStatus::Fired);
    }

    #[tokio::test]
    async fn test_same_message_reschedule_overwrites() {
        let scheduler = AlarmScheduler::new();
        scheduler.schedule(5, "tea").await.unwrap();
        scheduler.schedule(9, "tea").await.unwrap();

        let alarms = scheduler.list().await;
        assert_eq!(alarms.len(), 1);
        assert_eq!(alarms["tea"].minutes, 9);
    }
}
