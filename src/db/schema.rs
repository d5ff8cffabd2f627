//! SQL DDL for the content tables.
//! SQLite-first; list fields are stored as JSON arrays serialized to text and
//! `created_at` as fixed-precision RFC3339 so text order is time order.

use super::models::EntityKind;

pub const CONTACT_MESSAGES_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS contact_messages (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    subject TEXT NOT NULL,
    message TEXT NOT NULL,
    created_at TEXT NOT NULL, -- RFC3339
    read INTEGER NOT NULL DEFAULT 0
);
CREATE INDEX IF NOT EXISTS idx_contact_messages_created_at ON contact_messages(created_at);
"#;

pub const SKILLS_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS skills (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    category TEXT NOT NULL,
    skills TEXT NOT NULL, -- JSON array
    icon TEXT NOT NULL,
    created_at TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_skills_created_at ON skills(created_at);
"#;

pub const PROJECTS_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS projects (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    date TEXT NOT NULL,
    technologies TEXT NOT NULL, -- JSON array
    description TEXT NOT NULL,
    features TEXT NOT NULL, -- JSON array
    link TEXT NOT NULL,
    created_at TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_projects_created_at ON projects(created_at);
"#;

pub const CERTIFICATIONS_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS certifications (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    issuer TEXT NOT NULL,
    date TEXT NOT NULL,
    created_at TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_certifications_created_at ON certifications(created_at);
"#;

pub const ACHIEVEMENTS_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS achievements (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    date TEXT NOT NULL,
    icon TEXT NOT NULL,
    created_at TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_achievements_created_at ON achievements(created_at);
"#;

pub const SCHEMA_VERSION_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER PRIMARY KEY,
    applied_at TEXT NOT NULL
)
"#;

/// One versioned schema step. Every statement must be safe to re-run.
pub struct Migration {
    pub version: i64,
    pub scripts: &'static [&'static str],
}

/// Applied in order at startup; append new steps, never edit old ones.
pub const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    scripts: &[
        CONTACT_MESSAGES_DDL,
        SKILLS_DDL,
        PROJECTS_DDL,
        CERTIFICATIONS_DDL,
        ACHIEVEMENTS_DDL,
    ],
}];

/// DDL that (re)creates a single table and its index.
pub fn table_ddl(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::ContactMessage => CONTACT_MESSAGES_DDL,
        EntityKind::Skill => SKILLS_DDL,
        EntityKind::Project => PROJECTS_DDL,
        EntityKind::Certification => CERTIFICATIONS_DDL,
        EntityKind::Achievement => ACHIEVEMENTS_DDL,
    }
}

/// Split a script into executable statements (sqlx runs one at a time).
pub fn statements(script: &str) -> impl Iterator<Item = &str> {
    script.split(';').map(str::trim).filter(|s| !s.is_empty())
}
