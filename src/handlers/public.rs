use axum::{Json, extract::State};
use serde::Serialize;

use crate::db::models::{Achievement, Certification, Project, Skill};
use crate::router::FolioState;
use crate::types::Icon;

#[derive(Debug, Serialize)]
pub struct SkillView {
    #[serde(flatten)]
    pub skill: Skill,
    pub resolved_icon: Icon,
    pub icon_symbol: &'static str,
}

impl From<Skill> for SkillView {
    fn from(skill: Skill) -> Self {
        let icon = Icon::resolve(&skill.icon);
        Self {
            skill,
            resolved_icon: icon,
            icon_symbol: icon.symbol(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AchievementView {
    #[serde(flatten)]
    pub achievement: Achievement,
    pub resolved_icon: Icon,
    pub icon_symbol: &'static str,
}

impl From<Achievement> for AchievementView {
    fn from(achievement: Achievement) -> Self {
        let icon = Icon::resolve(&achievement.icon);
        Self {
            achievement,
            resolved_icon: icon,
            icon_symbol: icon.symbol(),
        }
    }
}

/// Everything the public page renders, fetched in one round trip.
#[derive(Debug, Serialize)]
pub struct PortfolioView {
    pub skills: Vec<SkillView>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub achievements: Vec<AchievementView>,
}

/// GET /api/portfolio
pub async fn portfolio_handler(State(state): State<FolioState>) -> Json<PortfolioView> {
    let content = &state.content;
    let (skills, projects, certifications, achievements) = tokio::join!(
        content.list::<Skill>(),
        content.list::<Project>(),
        content.list::<Certification>(),
        content.list::<Achievement>(),
    );
    Json(PortfolioView {
        skills: skills.into_iter().map(SkillView::from).collect(),
        projects,
        certifications,
        achievements: achievements.into_iter().map(AchievementView::from).collect(),
    })
}

pub async fn skills_handler(State(state): State<FolioState>) -> Json<Vec<SkillView>> {
    let skills = state.content.list::<Skill>().await;
    Json(skills.into_iter().map(SkillView::from).collect())
}

pub async fn projects_handler(State(state): State<FolioState>) -> Json<Vec<Project>> {
    Json(state.content.list::<Project>().await)
}

pub async fn certifications_handler(State(state): State<FolioState>) -> Json<Vec<Certification>> {
    Json(state.content.list::<Certification>().await)
}

pub async fn achievements_handler(State(state): State<FolioState>) -> Json<Vec<AchievementView>> {
    let achievements = state.content.list::<Achievement>().await;
    Json(achievements.into_iter().map(AchievementView::from).collect())
}

pub async fn health_handler() -> &'static str {
    "ok"
}
