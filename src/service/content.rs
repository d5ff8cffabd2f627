use crate::db::models::{ContactMessage, EntityKind, NewContactMessage};
use crate::db::{ContentStore, Record};
use crate::error::FolioError;
use serde::Serialize;
use tokio::sync::broadcast;
use tracing::{debug, error, warn};

/// Published after every successful mutation so dependent views can refetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RefreshHint {
    pub kind: EntityKind,
}

/// Content-access layer.
///
/// Store failures never reach the caller: they are logged and turned into an
/// empty list, `None`, or `false`.
#[derive(Clone)]
pub struct ContentService {
    store: ContentStore,
    hints: broadcast::Sender<RefreshHint>,
}

impl ContentService {
    pub fn new(store: ContentStore) -> Self {
        let (hints, _) = broadcast::channel(64);
        Self { store, hints }
    }

    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    pub fn subscribe(&self) -> broadcast::Receiver<RefreshHint> {
        self.hints.subscribe()
    }

    /// All records of `R`, newest first. A missing table is recreated and the
    /// listing retried once.
    pub async fn list<R: Record>(&self) -> Vec<R> {
        let kind = R::KIND;
        let first = match self.store.list::<R>().await {
            Err(e) if e.is_missing_table() => {
                warn!(%kind, "table missing; recreating before retry");
                if let Err(e) = self.store.ensure_table(kind).await {
                    error!(%kind, error = %e, "failed to recreate table");
                    return Vec::new();
                }
                self.store.list::<R>().await
            }
            other => other,
        };
        first.unwrap_or_else(|e| {
            error!(%kind, error = %e, "error fetching records");
            Vec::new()
        })
    }

    pub async fn add<R: Record>(&self, draft: &R::Draft) -> Option<R> {
        let kind = R::KIND;
        match self.store.insert::<R>(draft).await {
            Ok(record) => {
                self.publish(kind);
                Some(record)
            }
            Err(e) => {
                error!(%kind, error = %e, "error adding record");
                None
            }
        }
    }

    pub async fn update<R: Record>(&self, id: i64, draft: &R::Draft) -> Option<R> {
        let kind = R::KIND;
        match self.store.update::<R>(id, draft).await {
            Ok(Some(record)) => {
                self.publish(kind);
                Some(record)
            }
            Ok(None) => {
                debug!(%kind, id, "update matched no record");
                None
            }
            Err(e) => {
                error!(%kind, id, error = %e, "error updating record");
                None
            }
        }
    }

    pub async fn delete<R: Record>(&self, id: i64) -> bool {
        let kind = R::KIND;
        self.settle(kind, id, "delete", self.store.delete::<R>(id).await)
    }

    pub async fn mark_read(&self, id: i64) -> bool {
        let outcome = self.store.mark_message_read(id).await;
        self.settle(EntityKind::ContactMessage, id, "mark read", outcome)
    }

    pub async fn get_message(&self, id: i64) -> Option<ContactMessage> {
        self.store
            .get::<ContactMessage>(id)
            .await
            .inspect_err(|e| error!(id, error = %e, "error fetching message"))
            .ok()
            .flatten()
    }

    /// Store a contact submission. Unlike the admin mutations, the error is
    /// returned so intake can report it.
    pub async fn record_message(
        &self,
        message: &NewContactMessage,
    ) -> Result<ContactMessage, FolioError> {
        let stored = self.store.insert::<ContactMessage>(message).await?;
        self.publish(EntityKind::ContactMessage);
        Ok(stored)
    }

    fn settle(
        &self,
        kind: EntityKind,
        id: i64,
        action: &str,
        outcome: Result<bool, FolioError>,
    ) -> bool {
        match outcome {
            Ok(true) => {
                self.publish(kind);
                true
            }
            Ok(false) => {
                debug!(%kind, id, action, "no record matched");
                false
            }
            Err(e) => {
                error!(%kind, id, action, error = %e, "store operation failed");
                false
            }
        }
    }

    fn publish(&self, kind: EntityKind) {
        // No subscribers is the common case.
        let _ = self.hints.send(RefreshHint { kind });
    }
}
