use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowHeaders, CorsLayer};

use crate::server::{
    config::Config,
    data::{author, category, post, section, tag},
    error::{config::ConfigError, AppError},
    service::image::ImageStorage,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Validates every ordering and uniqueness binding against its entity.
///
/// Runs before the server binds; a binding pointing at an unusable column aborts startup
/// instead of surfacing on the first request that touches it.
pub fn check_scoped_fields() -> Result<(), ConfigError> {
    category::ORDER.check()?;
    category::UNIQUE_SLUG.check()?;
    category::UNIQUE_ORDER.check()?;
    author::UNIQUE_SLUG.check()?;
    post::UNIQUE_SLUG.check()?;
    section::ORDER.check()?;
    section::UNIQUE_ORDER.check()?;
    tag::UNIQUE_NAME.check()?;

    Ok(())
}

/// Creates the media root if needed and returns the image storage rooted there.
pub async fn prepare_media_root(config: &Config) -> Result<ImageStorage, AppError> {
    tokio::fs::create_dir_all(&config.media_root).await?;

    tracing::info!("Storing uploaded media below {}", config.media_root.display());

    Ok(ImageStorage::new(&config.media_root))
}

/// Builds the CORS layer for the configured origin.
///
/// Without a configured origin no cross-origin requests are allowed.
pub fn setup_cors(config: &Config) -> Result<CorsLayer, ConfigError> {
    let Some(origin) = &config.cors_allowed_origin else {
        return Ok(CorsLayer::new());
    };

    let origin = HeaderValue::from_str(origin).map_err(|e| ConfigError::InvalidEnvVar {
        name: "CORS_ALLOWED_ORIGIN".to_string(),
        reason: e.to_string(),
    })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers(AllowHeaders::mirror_request()))
}
