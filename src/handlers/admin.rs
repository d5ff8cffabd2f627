use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::db::Record;
use crate::db::models::{Achievement, Certification, ContactMessage, EntityKind, Project, Skill};
use crate::error::FolioError;
use crate::middleware::{ApiJson, ApiPath};
use crate::router::FolioState;
use crate::service::{MigrationReport, MigrationStatus};

const RECENT_MESSAGES: usize = 5;

#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub total_messages: usize,
    pub unread_messages: usize,
    pub skills: usize,
    pub projects: usize,
    pub certifications: usize,
    pub achievements: usize,
    pub recent_messages: Vec<ContactMessage>,
}

/// GET /admin/api/dashboard
pub async fn dashboard_handler(State(state): State<FolioState>) -> Json<DashboardSummary> {
    let content = &state.content;
    let (messages, skills, projects, certifications, achievements) = tokio::join!(
        content.list::<ContactMessage>(),
        content.list::<Skill>(),
        content.list::<Project>(),
        content.list::<Certification>(),
        content.list::<Achievement>(),
    );
    let unread_messages = messages.iter().filter(|m| !m.read).count();
    Json(DashboardSummary {
        total_messages: messages.len(),
        unread_messages,
        skills: skills.len(),
        projects: projects.len(),
        certifications: certifications.len(),
        achievements: achievements.len(),
        recent_messages: messages.into_iter().take(RECENT_MESSAGES).collect(),
    })
}

#[derive(Debug, Deserialize)]
pub struct MessageSearch {
    pub q: Option<String>,
}

/// GET /admin/api/messages?q=
pub async fn list_messages_handler(
    State(state): State<FolioState>,
    Query(search): Query<MessageSearch>,
) -> Json<Vec<ContactMessage>> {
    let messages = state.content.list::<ContactMessage>().await;
    let messages = match search.q.as_deref().map(str::trim) {
        Some(term) if !term.is_empty() => {
            messages.into_iter().filter(|m| m.matches(term)).collect()
        }
        _ => messages,
    };
    Json(messages)
}

pub async fn get_message_handler(
    State(state): State<FolioState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<ContactMessage>, FolioError> {
    state
        .content
        .get_message(id)
        .await
        .map(Json)
        .ok_or(FolioError::NotFound(EntityKind::ContactMessage))
}

pub async fn mark_read_handler(
    State(state): State<FolioState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, FolioError> {
    if state.content.mark_read(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(FolioError::MutationFailed {
            action: "mark read",
            kind: EntityKind::ContactMessage,
        })
    }
}

pub async fn list_records<R>(State(state): State<FolioState>) -> Json<Vec<R>>
where
    R: Record + Serialize,
{
    Json(state.content.list::<R>().await)
}

pub async fn create_record<R>(
    State(state): State<FolioState>,
    ApiJson(draft): ApiJson<R::Draft>,
) -> Result<(StatusCode, Json<R>), FolioError>
where
    R: Record + Serialize,
    R::Draft: DeserializeOwned,
{
    state
        .content
        .add::<R>(&draft)
        .await
        .map(|record| (StatusCode::CREATED, Json(record)))
        .ok_or(FolioError::MutationFailed {
            action: "save",
            kind: R::KIND,
        })
}

pub async fn update_record<R>(
    State(state): State<FolioState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(draft): ApiJson<R::Draft>,
) -> Result<Json<R>, FolioError>
where
    R: Record + Serialize,
    R::Draft: DeserializeOwned,
{
    state
        .content
        .update::<R>(id, &draft)
        .await
        .map(Json)
        .ok_or(FolioError::MutationFailed {
            action: "update",
            kind: R::KIND,
        })
}

/// Deletes unconditionally; confirmation is the caller's job.
pub async fn delete_record<R>(
    State(state): State<FolioState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, FolioError>
where
    R: Record,
{
    if state.content.delete::<R>(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(FolioError::MutationFailed {
            action: "delete",
            kind: R::KIND,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct SetupStatus {
    pub kind: EntityKind,
    pub status: MigrationStatus,
}

/// GET /admin/api/setup
pub async fn setup_status_handler(State(state): State<FolioState>) -> Json<Vec<SetupStatus>> {
    let statuses = state
        .migrator
        .statuses()
        .into_iter()
        .map(|(kind, status)| SetupStatus { kind, status })
        .collect();
    Json(statuses)
}

/// POST /admin/api/setup
pub async fn migrate_all_handler(State(state): State<FolioState>) -> Json<Vec<MigrationReport>> {
    Json(state.migrator.migrate_all().await)
}

/// POST /admin/api/setup/{entity}
pub async fn migrate_entity_handler(
    State(state): State<FolioState>,
    ApiPath(entity): ApiPath<String>,
) -> Result<Json<MigrationReport>, FolioError> {
    let kind: EntityKind = entity
        .parse()
        .map_err(|_| FolioError::UnknownEntity(entity.clone()))?;
    state
        .migrator
        .migrate(kind)
        .await
        .map(Json)
        .ok_or(FolioError::UnknownEntity(entity))
}
