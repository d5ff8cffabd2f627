use crate::db::Record;
use crate::db::models::{Achievement, Certification, EntityKind, Project, Skill};
use crate::service::content::ContentService;
use crate::service::seed;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MigrationStatus {
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MigrationReport {
    pub kind: EntityKind,
    pub status: MigrationStatus,
    pub inserted: usize,
    pub total: usize,
}

/// Copies the seed dataset into the store through the content-access layer.
///
/// Status is tracked per entity in memory only. Every run inserts the whole
/// seed list again, so re-running duplicates records.
#[derive(Clone)]
pub struct Migrator {
    content: ContentService,
    status: Arc<Mutex<HashMap<EntityKind, MigrationStatus>>>,
}

impl Migrator {
    pub fn new(content: ContentService) -> Self {
        Self {
            content,
            status: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn status(&self, kind: EntityKind) -> MigrationStatus {
        self.status
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&kind)
            .copied()
            .unwrap_or(MigrationStatus::Idle)
    }

    /// Status of every seedable entity, in migration order.
    pub fn statuses(&self) -> Vec<(EntityKind, MigrationStatus)> {
        EntityKind::MANAGED
            .into_iter()
            .map(|kind| (kind, self.status(kind)))
            .collect()
    }

    /// Seed one entity. `None` for kinds without seed data.
    pub async fn migrate(&self, kind: EntityKind) -> Option<MigrationReport> {
        self.set_status(kind, MigrationStatus::Loading);
        let (inserted, total) = match kind {
            EntityKind::Skill => self.insert_all::<Skill>(seed::skills()).await,
            EntityKind::Project => self.insert_all::<Project>(seed::projects()).await,
            EntityKind::Certification => {
                self.insert_all::<Certification>(seed::certifications()).await
            }
            EntityKind::Achievement => self.insert_all::<Achievement>(seed::achievements()).await,
            EntityKind::ContactMessage => {
                self.set_status(kind, MigrationStatus::Idle);
                return None;
            }
        };

        let status = if inserted == total {
            info!(%kind, inserted, "seed migration finished");
            MigrationStatus::Success
        } else {
            warn!(%kind, inserted, total, "seed migration stopped early");
            MigrationStatus::Error
        };
        self.set_status(kind, status);
        Some(MigrationReport {
            kind,
            status,
            inserted,
            total,
        })
    }

    /// Seed every entity in order, one after another.
    pub async fn migrate_all(&self) -> Vec<MigrationReport> {
        let mut reports = Vec::with_capacity(EntityKind::MANAGED.len());
        for kind in EntityKind::MANAGED {
            if let Some(report) = self.migrate(kind).await {
                reports.push(report);
            }
        }
        reports
    }

    /// Sequential inserts; stops at the first failure without undoing earlier ones.
    async fn insert_all<R: Record>(&self, drafts: Vec<R::Draft>) -> (usize, usize) {
        let total = drafts.len();
        let mut inserted = 0;
        for draft in &drafts {
            if self.content.add::<R>(draft).await.is_none() {
                break;
            }
            inserted += 1;
        }
        (inserted, total)
    }

    fn set_status(&self, kind: EntityKind, status: MigrationStatus) {
        self.status
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(kind, status);
    }
}
