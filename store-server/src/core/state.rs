use std::path::PathBuf;
use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::services::email::{EmailService, LoggingTransport};
use crate::services::media::MediaStore;
use crate::utils::AppError;

/// Shared server state.
///
/// Cloning is cheap: everything heavyweight sits behind `Arc` or is an
/// `Arc`-backed handle already (the SurrealDB client clones shallowly).
///
/// | Field | Purpose |
/// |-------|---------|
/// | config | Immutable configuration |
/// | db | Embedded SurrealDB |
/// | jwt_service | Token issuing and validation |
/// | email | Template rendering + delivery transport |
/// | media | Review image storage under work_dir/media |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub db: Surreal<Db>,
    pub jwt_service: Arc<JwtService>,
    pub email: Arc<EmailService>,
    pub media: Arc<MediaStore>,
}

impl ServerState {
    /// Initialize the full state in dependency order: work_dir layout,
    /// database, then the services that hang off both.
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        config
            .ensure_work_dir_structure()
            .map_err(|e| AppError::internal(format!("Failed to create work directory: {e}")))?;

        let db_path = config.database_dir().join("store.db");
        let db_service = DbService::new(&db_path.to_string_lossy()).await?;

        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        let email = Arc::new(EmailService::new(
            Arc::new(LoggingTransport),
            config.email_from.clone(),
            config.site_name.clone(),
            config.public_url.clone(),
        ));
        let media = Arc::new(MediaStore::new(config.media_dir()));

        Ok(Self {
            config: config.clone(),
            db: db_service.db,
            jwt_service,
            email,
            media,
        })
    }

    /// In-memory variant for integration tests.
    pub async fn initialize_in_memory(config: &Config) -> Result<Self, AppError> {
        let db_service = DbService::new_in_memory().await?;
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        let email = Arc::new(EmailService::new(
            Arc::new(LoggingTransport),
            config.email_from.clone(),
            config.site_name.clone(),
            config.public_url.clone(),
        ));
        let media = Arc::new(MediaStore::new(config.media_dir()));

        Ok(Self {
            config: config.clone(),
            db: db_service.db,
            jwt_service,
            email,
            media,
        })
    }

    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }

    pub fn work_dir(&self) -> PathBuf {
        PathBuf::from(&self.config.work_dir)
    }
}
