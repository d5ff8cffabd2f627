use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;

use crate::config::Config;
use crate::db::models::{Achievement, Certification, ContactMessage, Project, Skill};
use crate::db::{ContentStore, Record};
use crate::error::FolioError;
use crate::handlers::{admin, contact, public};
use crate::middleware::RequireAdminKey;
use crate::service::{ContactIntake, ContentService, Mailer, Migrator, ResendMailer};

#[derive(Clone)]
pub struct FolioState {
    pub content: ContentService,
    pub intake: ContactIntake,
    pub migrator: Migrator,
    pub admin_key: Option<Arc<str>>,
}

impl FolioState {
    pub fn new(store: ContentStore, mailer: Arc<dyn Mailer>, cfg: &Config) -> Self {
        let content = ContentService::new(store);
        Self {
            intake: ContactIntake::new(content.clone(), mailer, &cfg.mail),
            migrator: Migrator::new(content.clone()),
            content,
            admin_key: cfg.admin_key().map(Arc::from),
        }
    }

    /// Open the database, apply the schema and wire the Resend mailer.
    pub async fn bootstrap(cfg: &Config) -> Result<Self, FolioError> {
        let pool = crate::db::connect(&cfg.basic.database_url).await?;
        let store = ContentStore::new(pool);
        store.init_schema().await?;
        let mailer = Arc::new(ResendMailer::new(&cfg.mail)?);
        Ok(Self::new(store, mailer, cfg))
    }
}

pub fn folio_router(state: FolioState) -> Router {
    let public_routes = Router::new()
        .route("/healthz", get(public::health_handler))
        .route("/api/portfolio", get(public::portfolio_handler))
        .route("/api/skills", get(public::skills_handler))
        .route("/api/projects", get(public::projects_handler))
        .route("/api/certifications", get(public::certifications_handler))
        .route("/api/achievements", get(public::achievements_handler))
        .route("/api/contact", post(contact::contact_store_handler))
        .route("/api/contact/email", post(contact::contact_email_handler));

    let admin_routes = Router::new()
        .route("/admin/api/dashboard", get(admin::dashboard_handler))
        .route("/admin/api/messages", get(admin::list_messages_handler))
        .route(
            "/admin/api/messages/{id}",
            get(admin::get_message_handler).delete(admin::delete_record::<ContactMessage>),
        )
        .route("/admin/api/messages/{id}/read", post(admin::mark_read_handler))
        .route(
            "/admin/api/setup",
            get(admin::setup_status_handler).post(admin::migrate_all_handler),
        )
        .route("/admin/api/setup/{entity}", post(admin::migrate_entity_handler));
    let admin_routes = content_routes::<Skill>(admin_routes);
    let admin_routes = content_routes::<Project>(admin_routes);
    let admin_routes = content_routes::<Certification>(admin_routes);
    let admin_routes = content_routes::<Achievement>(admin_routes).route_layer(
        middleware::from_extractor_with_state::<RequireAdminKey, FolioState>(state.clone()),
    );

    public_routes.merge(admin_routes).with_state(state)
}

/// List/create and replace/delete routes for one editable entity.
fn content_routes<R>(router: Router<FolioState>) -> Router<FolioState>
where
    R: Record + Serialize,
    R::Draft: DeserializeOwned,
{
    let base = format!("/admin/api/{}", R::KIND.table());
    router
        .route(
            &base,
            get(admin::list_records::<R>).post(admin::create_record::<R>),
        )
        .route(
            &format!("{base}/{{id}}"),
            put(admin::update_record::<R>).delete(admin::delete_record::<R>),
        )
}
