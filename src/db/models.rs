use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::types::list_input;

/// The five record kinds held by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    #[serde(rename = "contact_messages")]
    ContactMessage,
    #[serde(rename = "skills")]
    Skill,
    #[serde(rename = "projects")]
    Project,
    #[serde(rename = "certifications")]
    Certification,
    #[serde(rename = "achievements")]
    Achievement,
}

impl EntityKind {
    /// Kinds that the admin dashboard can seed and edit, in migration order.
    pub const MANAGED: [EntityKind; 4] = [
        EntityKind::Skill,
        EntityKind::Project,
        EntityKind::Certification,
        EntityKind::Achievement,
    ];

    pub fn table(self) -> &'static str {
        match self {
            EntityKind::ContactMessage => "contact_messages",
            EntityKind::Skill => "skills",
            EntityKind::Project => "projects",
            EntityKind::Certification => "certifications",
            EntityKind::Achievement => "achievements",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::ContactMessage => "message",
            EntityKind::Skill => "skill",
            EntityKind::Project => "project",
            EntityKind::Certification => "certification",
            EntityKind::Achievement => "achievement",
        };
        f.write_str(name)
    }
}

impl FromStr for EntityKind {
    type Err = String;

    /// Accepts table names (`skills`) as used in admin paths.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "contact_messages" | "messages" => Ok(EntityKind::ContactMessage),
            "skills" => Ok(EntityKind::Skill),
            "projects" => Ok(EntityKind::Project),
            "certifications" => Ok(EntityKind::Certification),
            "achievements" => Ok(EntityKind::Achievement),
            other => Err(format!("unknown entity `{other}`")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub read: bool,
}

impl ContactMessage {
    /// Case-insensitive substring match on name, email, subject or body.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .any(|field| field.to_lowercase().contains(&term))
    }
}

/// A validated contact submission ready for insertion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Skill {
    pub id: i64,
    pub category: String,
    pub skills: Vec<String>,
    pub icon: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillDraft {
    pub category: String,
    #[serde(deserialize_with = "list_input::comma_separated")]
    pub skills: Vec<String>,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub date: String,
    pub technologies: Vec<String>,
    pub description: String,
    pub features: Vec<String>,
    pub link: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectDraft {
    pub title: String,
    pub date: String,
    #[serde(deserialize_with = "list_input::comma_separated")]
    pub technologies: Vec<String>,
    pub description: String,
    #[serde(deserialize_with = "list_input::line_separated")]
    pub features: Vec<String>,
    pub link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Certification {
    pub id: i64,
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CertificationDraft {
    pub name: String,
    pub issuer: String,
    pub date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Achievement {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub date: String,
    pub icon: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AchievementDraft {
    pub title: String,
    pub description: String,
    pub date: String,
    pub icon: String,
}

impl From<Skill> for SkillDraft {
    fn from(s: Skill) -> Self {
        Self {
            category: s.category,
            skills: s.skills,
            icon: s.icon,
        }
    }
}

impl From<Project> for ProjectDraft {
    fn from(p: Project) -> Self {
        Self {
            title: p.title,
            date: p.date,
            technologies: p.technologies,
            description: p.description,
            features: p.features,
            link: p.link,
        }
    }
}

impl From<Certification> for CertificationDraft {
    fn from(c: Certification) -> Self {
        Self {
            name: c.name,
            issuer: c.issuer,
            date: c.date,
        }
    }
}

impl From<Achievement> for AchievementDraft {
    fn from(a: Achievement) -> Self {
        Self {
            title: a.title,
            description: a.description,
            date: a.date,
            icon: a.icon,
        }
    }
}
