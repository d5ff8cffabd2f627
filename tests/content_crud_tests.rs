mod common;

use axum::http::{Request, StatusCode, header};
use axum::body::Body;
use common::{RecordingMailer, TestApp, empty_request};
use folio_desk::Config;
use folio_desk::db::models::{
    Achievement, Certification, CertificationDraft, EntityKind, Project, ProjectDraft, Skill,
};
use serde_json::{Value, json};

fn ids(list: &Value) -> Vec<i64> {
    list.as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|item| item["id"].as_i64().expect("record without id"))
        .collect()
}

#[tokio::test]
async fn added_skill_is_listed_with_a_store_assigned_id() {
    let app = TestApp::spawn().await;

    let (status, created) = app
        .post(
            "/admin/api/skills",
            json!({
                "category": "Databases",
                "skills": " MySQL, MongoDB ,, ",
                "icon": "Database"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().expect("id assigned");
    assert_eq!(created["skills"], json!(["MySQL", "MongoDB"]));

    let (status, list) = app.get("/admin/api/skills").await;
    assert_eq!(status, StatusCode::OK);
    let skills: Vec<Skill> = serde_json::from_value(list).unwrap();
    assert_eq!(skills.len(), 1);
    assert_eq!(skills[0].id, id);
    assert_eq!(skills[0].category, "Databases");
    assert_eq!(skills[0].skills, vec!["MySQL", "MongoDB"]);
    assert_eq!(skills[0].icon, "Database");
}

#[tokio::test]
async fn update_replaces_every_editable_field() {
    let app = TestApp::spawn().await;

    let (_, created) = app
        .post(
            "/admin/api/projects",
            json!({
                "title": "Intruder Alert System",
                "date": "06/2024",
                "technologies": ["Python", "OpenCV"],
                "description": "Watches failed logins.",
                "features": "Email alerts\nCaptures images",
                "link": "#"
            }),
        )
        .await;
    let original: Project = serde_json::from_value(created).unwrap();

    let mut draft = ProjectDraft::from(original.clone());
    draft.title = "Intruder Alert System v2".to_string();
    draft.technologies = vec!["Rust".to_string()];
    draft.features = vec!["Webcam capture".to_string()];

    let (status, updated) = app
        .put(
            &format!("/admin/api/projects/{}", original.id),
            serde_json::to_value(&draft).unwrap(),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let updated: Project = serde_json::from_value(updated).unwrap();
    assert_eq!(updated.id, original.id);
    assert_eq!(updated.created_at, original.created_at);

    let (_, list) = app.get("/admin/api/projects").await;
    let projects: Vec<Project> = serde_json::from_value(list).unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].title, "Intruder Alert System v2");
    assert_eq!(projects[0].technologies, vec!["Rust"]);
    assert_eq!(projects[0].features, vec!["Webcam capture"]);
    assert_ne!(projects[0].title, original.title);
}

#[tokio::test]
async fn update_of_unknown_id_reports_failure() {
    let app = TestApp::spawn().await;
    let (status, body) = app
        .put(
            "/admin/api/certifications/999",
            json!({"name": "Data Fundamentals", "issuer": "IBM SkillsBuild", "date": "02/2025"}),
        )
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "MUTATION_FAILED");
}

#[tokio::test]
async fn malformed_admin_input_renders_an_error_body() {
    let app = TestApp::spawn().await;
    let (_, created) = app
        .post(
            "/admin/api/projects",
            json!({
                "title": "Intruder Alert System",
                "date": "06/2024",
                "technologies": ["Python"],
                "description": "-",
                "features": [],
                "link": "#"
            }),
        )
        .await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = app
        .put(
            &format!("/admin/api/projects/{id}"),
            json!({
                "title": "Intruder Alert System",
                "date": "06/2024",
                "technologies": 5,
                "description": "-",
                "features": [],
                "link": "#"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");

    let (status, body) = app
        .post("/admin/api/skills", json!({"category": "Databases"}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");

    for (method, uri) in [("GET", "/admin/api/messages/abc"), ("DELETE", "/admin/api/skills/abc")] {
        let (status, body) = app.send(empty_request(method, uri)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{method} {uri}");
        assert_eq!(body["error"]["code"], "BAD_REQUEST");
    }

    let (_, list) = app.get("/admin/api/projects").await;
    assert_eq!(list[0]["technologies"], json!(["Python"]));
}

#[tokio::test]
async fn deleted_record_is_no_longer_listed() {
    let app = TestApp::spawn().await;

    let mut created_ids = Vec::new();
    for name in ["Data Fundamentals", "AWS Academy Machine Learning Foundations"] {
        let (_, created) = app
            .post(
                "/admin/api/certifications",
                json!({"name": name, "issuer": "Issuer", "date": "02/2025"}),
            )
            .await;
        created_ids.push(created["id"].as_i64().unwrap());
    }

    let (status, _) = app
        .delete(&format!("/admin/api/certifications/{}", created_ids[0]))
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, list) = app.get("/admin/api/certifications").await;
    assert_eq!(ids(&list), vec![created_ids[1]]);

    let (status, _) = app
        .delete(&format!("/admin/api/certifications/{}", created_ids[0]))
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn listing_is_newest_first() {
    let app = TestApp::spawn().await;
    let mut created_ids = Vec::new();
    for title in ["first", "second", "third"] {
        let (_, created) = app
            .post(
                "/admin/api/achievements",
                json!({"title": title, "description": "-", "date": "2024", "icon": "Star"}),
            )
            .await;
        created_ids.push(created["id"].as_i64().unwrap());
    }
    created_ids.reverse();

    let (_, list) = app.get("/admin/api/achievements").await;
    assert_eq!(ids(&list), created_ids);
}

#[tokio::test]
async fn missing_table_is_recreated_on_list() {
    let app = TestApp::spawn().await;
    let content = &app.state.content;

    sqlx::query("DROP TABLE certifications")
        .execute(content.store().pool())
        .await
        .unwrap();

    assert!(content.list::<Certification>().await.is_empty());

    let added = content
        .add::<Certification>(&CertificationDraft {
            name: "Data Fundamentals".to_string(),
            issuer: "IBM SkillsBuild".to_string(),
            date: "02/2025".to_string(),
        })
        .await;
    assert!(added.is_some());
    assert_eq!(content.list::<Certification>().await.len(), 1);
}

#[tokio::test]
async fn store_failures_become_empty_or_none() {
    let app = TestApp::spawn().await;
    let content = &app.state.content;
    content.store().pool().close().await;

    assert!(content.list::<Skill>().await.is_empty());
    assert!(!content.delete::<Skill>(1).await);
    assert!(content.get_message(1).await.is_none());
}

#[tokio::test]
async fn mutations_publish_refresh_hints() {
    let app = TestApp::spawn().await;
    let mut hints = app.state.content.subscribe();

    let (_, created) = app
        .post(
            "/admin/api/achievements",
            json!({"title": "CTF Qualification", "description": "-", "date": "05/2024", "icon": "Award"}),
        )
        .await;
    let hint = hints.try_recv().expect("hint after add");
    assert_eq!(hint.kind, EntityKind::Achievement);

    app.delete(&format!("/admin/api/achievements/{}", created["id"]))
        .await;
    assert_eq!(hints.try_recv().unwrap().kind, EntityKind::Achievement);

    // Failed mutations stay silent.
    app.delete("/admin/api/achievements/4242").await;
    assert!(hints.try_recv().is_err());
}

#[tokio::test]
async fn portfolio_returns_every_section_with_resolved_icons() {
    let app = TestApp::spawn().await;
    app.post(
        "/admin/api/skills",
        json!({"category": "ML/Data Science", "skills": ["numpy"], "icon": "Brain"}),
    )
    .await;
    app.post(
        "/admin/api/achievements",
        json!({"title": "Events Attended", "description": "-", "date": "2024", "icon": "Rocket"}),
    )
    .await;

    let (status, body) = app.get("/api/portfolio").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["skills"][0]["category"], "ML/Data Science");
    assert_eq!(body["skills"][0]["resolved_icon"], "Brain");
    assert_eq!(body["achievements"][0]["icon"], "Rocket");
    assert_eq!(body["achievements"][0]["resolved_icon"], "Code");
    assert_eq!(body["projects"], json!([]));
    assert_eq!(body["certifications"], json!([]));

    let (_, achievements) = app.get("/api/achievements").await;
    let parsed: Vec<Achievement> = serde_json::from_value(achievements).unwrap();
    assert_eq!(parsed[0].title, "Events Attended");
}

#[tokio::test]
async fn dashboard_summarizes_content() {
    let app = TestApp::spawn().await;
    for i in 0..6 {
        app.post(
            "/api/contact",
            json!({"name": "Jane", "email": "jane@example.com", "subject": format!("s{i}"), "message": "hi"}),
        )
        .await;
    }
    app.post(
        "/admin/api/skills",
        json!({"category": "Databases", "skills": "MySQL", "icon": "Database"}),
    )
    .await;

    let (_, messages) = app.get("/admin/api/messages").await;
    let first_id = messages[0]["id"].as_i64().unwrap();
    app.post(&format!("/admin/api/messages/{first_id}/read"), json!({}))
        .await;

    let (status, summary) = app.get("/admin/api/dashboard").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["total_messages"], 6);
    assert_eq!(summary["unread_messages"], 5);
    assert_eq!(summary["skills"], 1);
    assert_eq!(summary["projects"], 0);
    assert_eq!(summary["recent_messages"].as_array().unwrap().len(), 5);
    assert_eq!(summary["recent_messages"][0]["subject"], "s5");
}

#[tokio::test]
async fn admin_routes_require_configured_key() {
    let mut cfg = Config::default();
    cfg.basic.admin_key = Some("s3cret".to_string());
    let app = TestApp::spawn_with(cfg, RecordingMailer::default()).await;

    let (status, body) = app.get("/admin/api/skills").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");

    let request = Request::builder()
        .method("GET")
        .uri("/admin/api/skills")
        .header(header::AUTHORIZATION, "Bearer s3cret")
        .body(Body::empty())
        .unwrap();
    let (status, body) = app.send(request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    // The public surface stays open.
    let (status, _) = app.send(empty_request("GET", "/api/portfolio")).await;
    assert_eq!(status, StatusCode::OK);
}
