//! Column bindings between the content tables and their row types.

use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use crate::db::models::{
    Achievement, AchievementDraft, Certification, CertificationDraft, ContactMessage,
    EntityKind, NewContactMessage, Project, ProjectDraft, Skill, SkillDraft,
};
use crate::db::sqlite::{Record, SqliteQuery, decode_list, decode_timestamp, encode_list};
use crate::error::FolioError;

impl Record for ContactMessage {
    type Draft = NewContactMessage;
    const KIND: EntityKind = EntityKind::ContactMessage;
    const COLUMNS: &'static [&'static str] = &["name", "email", "subject", "message"];

    fn bind_draft<'q>(
        draft: &NewContactMessage,
        query: SqliteQuery<'q>,
    ) -> Result<SqliteQuery<'q>, FolioError> {
        Ok(query
            .bind(draft.name.clone())
            .bind(draft.email.clone())
            .bind(draft.subject.clone())
            .bind(draft.message.clone()))
    }

    fn from_row(row: &SqliteRow) -> Result<Self, FolioError> {
        let read_i: i64 = row.try_get("read")?;
        Ok(ContactMessage {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            subject: row.try_get("subject")?,
            message: row.try_get("message")?,
            created_at: decode_timestamp(row, "created_at")?,
            read: read_i != 0,
        })
    }
}

impl Record for Skill {
    type Draft = SkillDraft;
    const KIND: EntityKind = EntityKind::Skill;
    const COLUMNS: &'static [&'static str] = &["category", "skills", "icon"];

    fn bind_draft<'q>(
        draft: &SkillDraft,
        query: SqliteQuery<'q>,
    ) -> Result<SqliteQuery<'q>, FolioError> {
        Ok(query
            .bind(draft.category.clone())
            .bind(encode_list(&draft.skills)?)
            .bind(draft.icon.clone()))
    }

    fn from_row(row: &SqliteRow) -> Result<Self, FolioError> {
        Ok(Skill {
            id: row.try_get("id")?,
            category: row.try_get("category")?,
            skills: decode_list(row, "skills")?,
            icon: row.try_get("icon")?,
            created_at: decode_timestamp(row, "created_at")?,
        })
    }
}

impl Record for Project {
    type Draft = ProjectDraft;
    const KIND: EntityKind = EntityKind::Project;
    const COLUMNS: &'static [&'static str] = &[
        "title",
        "date",
        "technologies",
        "description",
        "features",
        "link",
    ];

    fn bind_draft<'q>(
        draft: &ProjectDraft,
        query: SqliteQuery<'q>,
    ) -> Result<SqliteQuery<'q>, FolioError> {
        Ok(query
            .bind(draft.title.clone())
            .bind(draft.date.clone())
            .bind(encode_list(&draft.technologies)?)
            .bind(draft.description.clone())
            .bind(encode_list(&draft.features)?)
            .bind(draft.link.clone()))
    }

    fn from_row(row: &SqliteRow) -> Result<Self, FolioError> {
        Ok(Project {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            date: row.try_get("date")?,
            technologies: decode_list(row, "technologies")?,
            description: row.try_get("description")?,
            features: decode_list(row, "features")?,
            link: row.try_get("link")?,
            created_at: decode_timestamp(row, "created_at")?,
        })
    }
}

impl Record for Certification {
    type Draft = CertificationDraft;
    const KIND: EntityKind = EntityKind::Certification;
    const COLUMNS: &'static [&'static str] = &["name", "issuer", "date"];

    fn bind_draft<'q>(
        draft: &CertificationDraft,
        query: SqliteQuery<'q>,
    ) -> Result<SqliteQuery<'q>, FolioError> {
        Ok(query
            .bind(draft.name.clone())
            .bind(draft.issuer.clone())
            .bind(draft.date.clone()))
    }

    fn from_row(row: &SqliteRow) -> Result<Self, FolioError> {
        Ok(Certification {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            issuer: row.try_get("issuer")?,
            date: row.try_get("date")?,
            created_at: decode_timestamp(row, "created_at")?,
        })
    }
}

impl Record for Achievement {
    type Draft = AchievementDraft;
    const KIND: EntityKind = EntityKind::Achievement;
    const COLUMNS: &'static [&'static str] = &["title", "description", "date", "icon"];

    fn bind_draft<'q>(
        draft: &AchievementDraft,
        query: SqliteQuery<'q>,
    ) -> Result<SqliteQuery<'q>, FolioError> {
        Ok(query
            .bind(draft.title.clone())
            .bind(draft.description.clone())
            .bind(draft.date.clone())
            .bind(draft.icon.clone()))
    }

    fn from_row(row: &SqliteRow) -> Result<Self, FolioError> {
        Ok(Achievement {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            date: row.try_get("date")?,
            icon: row.try_get("icon")?,
            created_at: decode_timestamp(row, "created_at")?,
        })
    }
}
