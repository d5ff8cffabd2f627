use serde::Serialize;

/// Display icons the portfolio knows how to draw.
///
/// Records store the icon as free text; unknown tags fall back to [`Icon::Code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Icon {
    Code,
    Database,
    Brain,
    Star,
    Award,
    GraduationCap,
    Trophy,
    Calendar,
}

impl Icon {
    pub fn resolve(tag: &str) -> Self {
        match tag.trim() {
            "Database" => Icon::Database,
            "Brain" => Icon::Brain,
            "Star" => Icon::Star,
            "Award" => Icon::Award,
            "GraduationCap" => Icon::GraduationCap,
            "Trophy" => Icon::Trophy,
            "Calendar" => Icon::Calendar,
            _ => Icon::Code,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Icon::Code => "💻",
            Icon::Database => "🗄️",
            Icon::Brain => "🧠",
            Icon::Star => "⭐",
            Icon::Award => "🏅",
            Icon::GraduationCap => "🎓",
            Icon::Trophy => "🏆",
            Icon::Calendar => "📅",
        }
    }
}
