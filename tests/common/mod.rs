#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use folio_desk::api::OutboundEmail;
use folio_desk::db::ContentStore;
use folio_desk::service::Mailer;
use folio_desk::{Config, FolioError, FolioState, folio_router};
use serde_json::Value;
use std::{
    fs,
    path::PathBuf,
    sync::{Arc, Mutex},
    time::{SystemTime, UNIX_EPOCH},
};
use tower::ServiceExt;

/// Records every email instead of sending it.
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<OutboundEmail>>,
    pub fail: bool,
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: OutboundEmail) -> Result<(), FolioError> {
        self.sent.lock().unwrap().push(email);
        if self.fail {
            return Err(FolioError::MailerNotConfigured);
        }
        Ok(())
    }
}

pub struct TestApp {
    pub router: Router,
    pub state: FolioState,
    pub mailer: Arc<RecordingMailer>,
    db_path: PathBuf,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(Config::default(), RecordingMailer::default()).await
    }

    pub async fn spawn_with(mut cfg: Config, mailer: RecordingMailer) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before UNIX_EPOCH")
            .as_nanos();
        let mut db_path = std::env::temp_dir();
        db_path.push(format!(
            "folio-desk-test-{}-{}.sqlite",
            std::process::id(),
            nanos
        ));
        cfg.basic.database_url = format!("sqlite:{}", db_path.display());
        cfg.mail.to = vec!["owner@example.com".to_string()];

        let pool = folio_desk::db::connect(&cfg.basic.database_url)
            .await
            .expect("failed to open test database");
        let store = ContentStore::new(pool);
        store.init_schema().await.expect("failed to init schema");

        let mailer = Arc::new(mailer);
        let state = FolioState::new(store, mailer.clone(), &cfg);
        let router = folio_router(state.clone());
        Self {
            router,
            state,
            mailer,
            db_path,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let resp = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("request failed");
        let status = resp.status();
        let body = to_bytes(resp.into_body(), usize::MAX)
            .await
            .expect("failed to read response body");
        let value = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&body).into_owned())
            })
        };
        (status, value)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(empty_request("GET", uri)).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(json_request("POST", uri, body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(json_request("PUT", uri, body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(empty_request("DELETE", uri)).await
    }

    pub fn emails_sent(&self) -> usize {
        self.mailer.sent.lock().unwrap().len()
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.db_path);
        for suffix in ["-wal", "-shm"] {
            let mut side = self.db_path.clone().into_os_string();
            side.push(suffix);
            let _ = fs::remove_file(side);
        }
    }
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request")
}
