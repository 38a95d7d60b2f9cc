//! The single piece of process-lifetime state: the latest match set, kept so
//! analytics can be recomputed on demand without another matching run.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::models::matches::MatchSet;

#[derive(Debug, Clone, Serialize)]
pub struct RetainedMatchSet {
    pub set_id: Uuid,
    pub received_at: DateTime<Utc>,
    pub matches: MatchSet,
}

#[derive(Clone, Default)]
pub struct MatchStore {
    current: Arc<RwLock<Option<RetainedMatchSet>>>,
}

impl MatchStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces whatever was retained and returns the new snapshot.
    pub async fn replace(&self, matches: MatchSet) -> RetainedMatchSet {
        let retained = RetainedMatchSet {
            set_id: Uuid::new_v4(),
            received_at: Utc::now(),
            matches,
        };
        info!(
            set_id = %retained.set_id,
            job_id = %retained.matches.job_id,
            matches = retained.matches.matches.len(),
            "Retained new match set"
        );
        *self.current.write().await = Some(retained.clone());
        retained
    }

    pub async fn snapshot(&self) -> Option<RetainedMatchSet> {
        self.current.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::matches::MatchRecord;

    fn set(job_id: &str, n: usize) -> MatchSet {
        MatchSet {
            job_id: job_id.to_string(),
            job_title: None,
            matches: vec![MatchRecord::default(); n],
        }
    }

    #[tokio::test]
    async fn test_empty_store_has_no_snapshot() {
        assert!(MatchStore::new().snapshot().await.is_none());
    }

    #[tokio::test]
    async fn test_replace_swaps_wholesale() {
        let store = MatchStore::new();
        let first = store.replace(set("job-1", 3)).await;
        let second = store.replace(set("job-2", 1)).await;
        assert_ne!(first.set_id, second.set_id);

        let current = store.snapshot().await.unwrap();
        assert_eq!(current.set_id, second.set_id);
        assert_eq!(current.matches.job_id, "job-2");
        assert_eq!(current.matches.matches.len(), 1);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = MatchStore::new();
        let handle = store.clone();
        store.replace(set("job-1", 2)).await;
        assert_eq!(handle.snapshot().await.unwrap().matches.job_id, "job-1");
    }
}
