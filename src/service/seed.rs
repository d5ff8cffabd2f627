//! Initial portfolio content loaded by the setup migration.

use crate::db::models::{AchievementDraft, CertificationDraft, ProjectDraft, SkillDraft};

fn list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn skills() -> Vec<SkillDraft> {
    [
        ("Programming Languages", &["Python", "Java"][..], "Code"),
        ("Web Development", &["HTML", "CSS", "SpringBoot"][..], "Code"),
        (
            "ML/Data Science",
            &["numpy", "pandas", "scikit-learn", "matplotlib", "seaborn", "streamlit"][..],
            "Brain",
        ),
        ("Databases", &["MySQL", "MongoDB"][..], "Database"),
        (
            "Tools & Software",
            &["Tableau", "Git", "Jupyter", "VS Code", "Eclipse", "IntelliJ IDEA"][..],
            "Code",
        ),
    ]
    .into_iter()
    .map(|(category, skills, icon)| SkillDraft {
        category: category.to_string(),
        skills: list(skills),
        icon: icon.to_string(),
    })
    .collect()
}

pub fn projects() -> Vec<ProjectDraft> {
    vec![
        ProjectDraft {
            title: "Intruder Alert System".to_string(),
            date: "06/2024".to_string(),
            technologies: list(&["Python", "OpenCV", "smtplib", "Windows Logs"]),
            description: "Developed a Python-based security system that activates when Windows is locked, monitoring system logs for incorrect password attempts.".to_string(),
            features: list(&[
                "Automated alert system with email notifications",
                "Captures intruder images",
                "Enhanced personal security monitoring",
            ]),
            link: "#".to_string(),
        },
        ProjectDraft {
            title: "AI powered Content Creation Bot".to_string(),
            date: "11/2024".to_string(),
            technologies: list(&["Python", "Streamlit", "EdgeTTS", "Whisper"]),
            description: "Built an AI-powered bot that automates social media content generation by streamlining script writing, voiceovers, captioning, and video assembly.".to_string(),
            features: list(&[
                "ChatGPT integration for script generation",
                "EdgeTTS for voiceovers",
                "Whisper for captioning",
                "Fully automated workflow",
            ]),
            link: "#".to_string(),
        },
    ]
}

pub fn certifications() -> Vec<CertificationDraft> {
    [
        (
            "Oracle Cloud Infrastructure 2024 Generative AI Certified Professional",
            "Oracle University",
            "07/2024",
        ),
        (
            "Oracle Cloud Infrastructure 2024 Certified Data Science Professional",
            "Oracle University",
            "09/2024",
        ),
        ("AWS Academy Machine Learning Foundations", "AWS Academy", "02/2025"),
        ("Data Fundamentals", "IBM SkillsBuild", "02/2025"),
        ("Prompt Design in Vertex AI Skill Badge", "Google Cloud", "10/2024"),
        (
            "Develop GenAI Apps with Gemini and Streamlit Skill Badge",
            "Google Cloud",
            "10/2024",
        ),
        ("JobReady Employability Skills", "Wadhwani Foundation", "06/2024"),
        ("Cambridge English Empower Level C1 Course", "Cambridge", "09/2023"),
    ]
    .into_iter()
    .map(|(name, issuer, date)| CertificationDraft {
        name: name.to_string(),
        issuer: issuer.to_string(),
        date: date.to_string(),
    })
    .collect()
}

pub fn achievements() -> Vec<AchievementDraft> {
    [
        (
            "Top 5% in Adobe GenSolve",
            "Ranked in the top 5% in Adobe GenSolve, hosted by Adobe and GeeksforGeeks, nationwide. (07/2024)",
            "07/2024",
            "Star",
        ),
        (
            "CTF Qualification",
            "Qualified for CTF round (Penetration testing) for Great AppSec Hackathon.",
            "05/2024",
            "Award",
        ),
        (
            "Student Coordinator",
            "Student Coordinator Avishkar 2023 Techno Fest. (01/2023)",
            "01/2023",
            "GraduationCap",
        ),
        (
            "Events Attended",
            "AIOUG OCYatra 2024 Hyderabad, Techo Workshop Series'24 – Level 1 organised by Techobytes Technologies in collaboration with IITH",
            "2024",
            "Calendar",
        ),
    ]
    .into_iter()
    .map(|(title, description, date, icon)| AchievementDraft {
        title: title.to_string(),
        description: description.to_string(),
        date: date.to_string(),
        icon: icon.to_string(),
    })
    .collect()
}
